use crate::axiom::{Axiom, Formula, Quantity, Relation, Term};

/// SMT-LIB 2 script asserting every axiom over integer constants.
///
/// Quantities are declared once each, in order of first use. All launch
/// quantities are non-negative, so integer `div`/`mod` agree with the
/// unsigned operators of the text form.
pub fn render_smtlib(axioms: &[Axiom]) -> String {
    let mut declared: Vec<Quantity> = Vec::new();
    for axiom in axioms {
        for q in axiom.formula.quantities() {
            if !declared.contains(&q) {
                declared.push(q);
            }
        }
    }

    let mut out = String::from("(set-logic QF_NIA)\n");
    for q in &declared {
        out.push_str(&format!("(declare-const {} Int)\n", q.symbol()));
    }
    for axiom in axioms {
        out.push_str(&format!("(assert {})\n", formula_sexpr(&axiom.formula)));
    }
    out.push_str("(check-sat)\n");
    out
}

fn formula_sexpr(formula: &Formula) -> String {
    let op = match formula.relation {
        Relation::Eq => "=",
        Relation::Gt => ">",
        Relation::Le => "<=",
    };
    format!(
        "({op} {} {})",
        term_sexpr(&formula.lhs),
        term_sexpr(&formula.rhs)
    )
}

fn term_sexpr(term: &Term) -> String {
    let (op, a, b) = match term {
        Term::Const(n) => return n.to_string(),
        Term::Var(q) => return q.symbol(),
        Term::Add(a, b) => ("+", a, b),
        Term::Mul(a, b) => ("*", a, b),
        Term::Div(a, b) => ("div", a, b),
        Term::Rem(a, b) => ("mod", a, b),
    };
    format!("({op} {} {})", term_sexpr(a), term_sexpr(b))
}
