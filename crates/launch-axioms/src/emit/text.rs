use crate::axiom::Axiom;

/// One `__axiom(<formula>)` line per axiom.
pub fn render_text(axioms: &[Axiom]) -> String {
    let mut out = String::new();
    for axiom in axioms {
        out.push_str(&format!("__axiom({axiom})\n"));
    }
    out
}
