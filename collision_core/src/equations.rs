//! Equation reference sheet for the collision module
//!
//! Displays the relevant physics equations alongside the simulation, as a
//! plain-text sheet the front-end prints with the intro and results.

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

pub const COLLISION_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Momentum",
        formula: "p = m·v",
        description: "Momentum of a single particle",
    },
    Equation {
        name: "Kinetic Energy",
        formula: "E = ½·m·v²",
        description: "Energy of motion",
    },
    Equation {
        name: "Elastic Collision (particle 1)",
        formula: "v₁' = ((m₁-m₂)·v₁ + 2·m₂·v₂) / (m₁+m₂)",
        description: "Final velocity, kinetic energy conserved",
    },
    Equation {
        name: "Elastic Collision (particle 2)",
        formula: "v₂' = ((m₂-m₁)·v₂ + 2·m₁·v₁) / (m₁+m₂)",
        description: "Final velocity, kinetic energy conserved",
    },
    Equation {
        name: "Perfectly Inelastic Collision",
        formula: "v' = (m₁·v₁ + m₂·v₂) / (m₁+m₂)",
        description: "The particles stick together and share one velocity",
    },
    Equation {
        name: "Inelastic Energy Loss",
        formula: "ΔE = ½·m₁·m₂/(m₁+m₂)·(v₁-v₂)²",
        description: "Kinetic energy converted to heat and deformation",
    },
];

pub const COLLISION_VARIABLES: &[(&str, &str)] = &[
    ("m₁, m₂", "Particle masses"),
    ("v₁, v₂", "Initial velocities"),
    ("v₁', v₂'", "Final velocities"),
    ("p", "Momentum"),
    ("E", "Kinetic energy"),
    ("ΔE", "Energy lost in the collision"),
];

/// Render the equation sheet and variable glossary as plain text
pub fn equation_sheet() -> String {
    let mut out = String::new();
    out.push_str("Equations\n");
    for eq in COLLISION_EQUATIONS {
        out.push_str(&format!("  {}\n    {}\n    {}\n", eq.name, eq.formula, eq.description));
    }
    out.push_str("Variables\n");
    for (symbol, meaning) in COLLISION_VARIABLES {
        out.push_str(&format!("  {:10} {}\n", symbol, meaning));
    }
    out
}
