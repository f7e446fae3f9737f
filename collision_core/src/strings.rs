//! Display strings for the lab.
//!
//! Every user-facing string lives in one table per language, so the
//! bilingual classroom variants share a single core.

use serde::Deserialize;

/// Introductory LHC animation shown alongside the intro text
pub const VIDEO_URL: &str = "https://www.youtube.com/watch?v=Yq0zeWX49SM";

/// Languages the lab ships strings for
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

/// The full set of display strings for one language
#[derive(Debug, Clone, Copy)]
pub struct UiText {
    pub title: &'static str,
    pub intro_heading: &'static str,
    pub intro_body: &'static str,
    pub video_caption: &'static str,
    pub parameters_heading: &'static str,
    pub mass1_label: &'static str,
    pub velocity1_label: &'static str,
    pub mass2_label: &'static str,
    pub velocity2_label: &'static str,
    pub kind_label: &'static str,
    pub elastic_label: &'static str,
    pub inelastic_label: &'static str,
    pub mass_range_warning: &'static str,
    pub results_heading: &'static str,
    pub momentum_before_label: &'static str,
    pub momentum_after_label: &'static str,
    pub energy_before_label: &'static str,
    pub energy_after_label: &'static str,
    pub energy_loss_label: &'static str,
    pub animation_heading: &'static str,
    pub reflection_heading: &'static str,
    pub reflection_questions: &'static [&'static str],
    pub hypothesis_heading: &'static str,
    pub hypothesis_prompt: &'static str,
    pub empty_hypothesis_warning: &'static str,
    pub submission_success: &'static str,
    pub recent_heading: &'static str,
    pub statistics_heading: &'static str,
    pub run_first_hint: &'static str,
    pub no_hypotheses_yet: &'static str,
    pub step_names: [&'static str; 5],
}

/// Strings table for a language
pub fn text(language: Language) -> &'static UiText {
    match language {
        Language::English => &ENGLISH,
        Language::Spanish => &SPANISH,
    }
}

const ENGLISH: UiText = UiText {
    title: "Particle Collision Simulation - Educational CERN Module",
    intro_heading: "What is a particle collision?",
    intro_body: "At CERN, particle accelerators collide particles at very high speeds \
to understand the structure of matter and the universe. \
Watch this short animation showing protons colliding in the Large Hadron Collider (LHC).",
    video_caption: "LHC collision animation",
    parameters_heading: "Run a collision with your own values",
    mass1_label: "Mass of particle 1 (kg)",
    velocity1_label: "Velocity of particle 1 (m/s)",
    mass2_label: "Mass of particle 2 (kg)",
    velocity2_label: "Velocity of particle 2 (m/s)",
    kind_label: "Select collision type",
    elastic_label: "Elastic",
    inelastic_label: "Inelastic",
    mass_range_warning: "Mass must be greater than zero.",
    results_heading: "Collision Results",
    momentum_before_label: "Momentum before collision (kg·m/s)",
    momentum_after_label: "Momentum after collision (kg·m/s)",
    energy_before_label: "Kinetic energy before collision (J)",
    energy_after_label: "Kinetic energy after collision (J)",
    energy_loss_label: "Energy lost in collision (J, converted to heat/deformation)",
    animation_heading: "Animation of the collision",
    reflection_heading: "Reflection Questions",
    reflection_questions: &[
        "Is momentum conserved?",
        "Is kinetic energy conserved?",
        "How do the velocities change for different collision types?",
        "What does it mean if kinetic energy decreases?",
    ],
    hypothesis_heading: "Enter your hypothesis about the collision result",
    hypothesis_prompt: "What do you expect to happen to velocities and energy?",
    empty_hypothesis_warning: "Please enter your hypothesis.",
    submission_success: "Your hypothesis has been submitted! Great job thinking actively!",
    recent_heading: "Sample hypotheses from other students:",
    statistics_heading: "Submitted hypotheses",
    run_first_hint: "Run a collision first to see its results here.",
    no_hypotheses_yet: "No hypotheses submitted yet.",
    step_names: ["Introduction", "Parameters", "Hypothesis", "Results", "Statistics"],
};

const SPANISH: UiText = UiText {
    title: "Simulación de Colisión de Partículas - Módulo Educativo CERN",
    intro_heading: "¿Qué es una colisión de partículas?",
    intro_body: "En el CERN, los aceleradores hacen chocar partículas a velocidades muy altas \
para entender la estructura de la materia y del universo. \
Mira esta breve animación de protones chocando en el Gran Colisionador de Hadrones (LHC).",
    video_caption: "Animación de una colisión en el LHC",
    parameters_heading: "Ejecuta una colisión con tus propios valores",
    mass1_label: "Masa de la partícula 1 (kg)",
    velocity1_label: "Velocidad de la partícula 1 (m/s)",
    mass2_label: "Masa de la partícula 2 (kg)",
    velocity2_label: "Velocidad de la partícula 2 (m/s)",
    kind_label: "Selecciona el tipo de colisión",
    elastic_label: "Elástica",
    inelastic_label: "Inelástica",
    mass_range_warning: "La masa debe ser mayor que cero.",
    results_heading: "Resultados de la colisión",
    momentum_before_label: "Momento antes de la colisión (kg·m/s)",
    momentum_after_label: "Momento después de la colisión (kg·m/s)",
    energy_before_label: "Energía cinética antes de la colisión (J)",
    energy_after_label: "Energía cinética después de la colisión (J)",
    energy_loss_label: "Energía perdida en la colisión (J, convertida en calor/deformación)",
    animation_heading: "Animación de la colisión",
    reflection_heading: "Preguntas de reflexión",
    reflection_questions: &[
        "¿Se conserva el momento?",
        "¿Se conserva la energía cinética?",
        "¿Cómo cambian las velocidades según el tipo de colisión?",
        "¿Qué significa que la energía cinética disminuya?",
    ],
    hypothesis_heading: "Escribe tu hipótesis sobre el resultado de la colisión",
    hypothesis_prompt: "¿Qué esperas que pase con las velocidades y la energía?",
    empty_hypothesis_warning: "Por favor escribe tu hipótesis.",
    submission_success: "¡Tu hipótesis ha sido registrada! ¡Muy bien por pensar activamente!",
    recent_heading: "Hipótesis de otros estudiantes:",
    statistics_heading: "Hipótesis registradas",
    run_first_hint: "Ejecuta primero una colisión para ver aquí sus resultados.",
    no_hypotheses_yet: "Todavía no hay hipótesis registradas.",
    step_names: ["Introducción", "Parámetros", "Hipótesis", "Resultados", "Estadísticas"],
};
