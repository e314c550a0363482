use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axiom::{Axiom, Formula, Quantity, Relation, Term};

/// Concrete values for some quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    values: BTreeMap<Quantity, u64>,
}

impl Assignment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, quantity: Quantity, value: u64) {
        self.values.insert(quantity, value);
    }

    #[must_use]
    pub fn get(&self, quantity: Quantity) -> Option<u64> {
        self.values.get(&quantity).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quantity, u64)> + '_ {
        self.values.iter().map(|(q, v)| (*q, *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Term {
    /// Value of the term, or `None` if a quantity is unassigned, a
    /// divisor is zero, or the arithmetic overflows.
    #[must_use]
    pub fn eval(&self, assignment: &Assignment) -> Option<u64> {
        match self {
            Self::Const(n) => Some(*n),
            Self::Var(q) => assignment.get(*q),
            Self::Add(a, b) => a.eval(assignment)?.checked_add(b.eval(assignment)?),
            Self::Mul(a, b) => a.eval(assignment)?.checked_mul(b.eval(assignment)?),
            Self::Div(a, b) => a.eval(assignment)?.checked_div(b.eval(assignment)?),
            Self::Rem(a, b) => a.eval(assignment)?.checked_rem(b.eval(assignment)?),
        }
    }
}

impl Formula {
    #[must_use]
    pub fn eval(&self, assignment: &Assignment) -> Option<bool> {
        let lhs = self.lhs.eval(assignment)?;
        let rhs = self.rhs.eval(assignment)?;
        Some(match self.relation {
            Relation::Eq => lhs == rhs,
            Relation::Gt => lhs > rhs,
            Relation::Le => lhs <= rhs,
        })
    }
}

impl Axiom {
    /// Whether the axiom holds under `assignment`; `None` when it cannot
    /// be decided (see [`Term::eval`]).
    #[must_use]
    pub fn holds(&self, assignment: &Assignment) -> Option<bool> {
        self.formula.eval(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;

    fn local(axis: Axis) -> Quantity {
        Quantity::LocalSize(axis)
    }

    #[test]
    fn unassigned_quantity_is_undecided() {
        let f = Formula::greater_than(local(Axis::X), 0u64);
        assert_eq!(f.eval(&Assignment::new()), None);
    }

    #[test]
    fn relations() {
        let mut a = Assignment::new();
        a.set(local(Axis::X), 64);
        assert_eq!(Formula::equal(local(Axis::X), 64u64).eval(&a), Some(true));
        assert_eq!(Formula::greater_than(local(Axis::X), 64u64).eval(&a), Some(false));
        assert_eq!(Formula::at_most(local(Axis::X), 64u64).eval(&a), Some(true));
        assert_eq!(Formula::at_most(local(Axis::X), 63u64).eval(&a), Some(false));
    }

    #[test]
    fn division_by_zero_is_undecided() {
        let mut a = Assignment::new();
        a.set(local(Axis::Y), 0);
        let f = Formula::equal(Term::constant(64) % Term::var(local(Axis::Y)), 0u64);
        assert_eq!(f.eval(&a), None);
    }

    #[test]
    fn overflow_is_undecided() {
        let t = Term::constant(u64::MAX) + Term::constant(1);
        assert_eq!(t.eval(&Assignment::new()), None);
    }

    #[test]
    fn derived_clauses_evaluate() {
        let mut a = Assignment::new();
        a.set(local(Axis::X), 64);
        a.set(Quantity::NumGroups(Axis::X), 16);
        let f = Formula::equal(
            Quantity::NumGroups(Axis::X),
            Term::constant(1024) / Term::var(local(Axis::X)),
        );
        assert_eq!(f.eval(&a), Some(true));
    }

    #[test]
    fn assignment_serializes_as_map() {
        let mut a = Assignment::new();
        a.set(Quantity::WorkDim, 2);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"work_dim()":2}"#);
    }
}
