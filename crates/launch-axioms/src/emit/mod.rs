//! Renderings of an axiom list for downstream verifiers.
//!
//! - **Text**: one `__axiom(...)` line per axiom, the form a kernel
//!   prelude installs
//! - **SMT-LIB**: a `QF_NIA` script with one `assert` per axiom
//! - **JSON**: the serde representation of the list

mod smtlib;
mod text;

use std::str::FromStr;

pub use smtlib::render_smtlib;
pub use text::render_text;

use crate::axiom::Axiom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitFormat {
    Text,
    SmtLib,
    Json,
}

impl FromStr for EmitFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "smtlib" | "smt2" => Ok(Self::SmtLib),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}', expected 'text', 'smtlib', or 'json'"
            )),
        }
    }
}

/// Pretty-printed JSON array of axioms.
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn render_json(axioms: &[Axiom]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(axioms)
}

/// Render `axioms` in `format`.
///
/// # Errors
///
/// Only the JSON rendering can fail.
pub fn render(axioms: &[Axiom], format: EmitFormat) -> Result<String, serde_json::Error> {
    match format {
        EmitFormat::Text => Ok(render_text(axioms)),
        EmitFormat::SmtLib => Ok(render_smtlib(axioms)),
        EmitFormat::Json => render_json(axioms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axiom::synthesize_axioms;
    use crate::geometry::{Dimensionality, GeometryConfig};

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<EmitFormat>().unwrap(), EmitFormat::Text);
        assert_eq!("smtlib".parse::<EmitFormat>().unwrap(), EmitFormat::SmtLib);
        assert_eq!("smt2".parse::<EmitFormat>().unwrap(), EmitFormat::SmtLib);
        assert_eq!("json".parse::<EmitFormat>().unwrap(), EmitFormat::Json);
        let err = "latex".parse::<EmitFormat>().unwrap_err();
        assert!(err.contains("latex"));
    }

    #[test]
    fn test_json_round_trips() {
        let config = GeometryConfig::new(Dimensionality::Two, Dimensionality::One);
        let axioms = synthesize_axioms(&config);
        let json = render_json(&axioms).unwrap();
        let back: Vec<Axiom> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, axioms);
    }

    #[test]
    fn test_render_dispatches() {
        let config = GeometryConfig::new(Dimensionality::One, Dimensionality::One);
        let axioms = synthesize_axioms(&config);
        assert!(render(&axioms, EmitFormat::Text).unwrap().starts_with("__axiom("));
        assert!(render(&axioms, EmitFormat::SmtLib)
            .unwrap()
            .starts_with("(set-logic QF_NIA)"));
        assert!(render(&axioms, EmitFormat::Json).unwrap().starts_with('['));
    }
}
