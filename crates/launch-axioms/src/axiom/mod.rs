//! Axioms over the symbolic launch quantities.
//!
//! An [`Axiom`] is a single closed comparison between two integer
//! [`Term`]s built from [`Quantity`] symbols and literals. The
//! synthesizer emits one axiom per clause; conjunctions are expressed
//! as consecutive axioms.

mod eval;
mod global_id;
mod synth;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

pub use eval::Assignment;
pub use global_id::{global_id, global_id_axiom, global_id_axioms};
pub use synth::{standing_axioms, synthesize_axioms};

// ── Quantities ────────────────────────────────────────────────────

/// A symbolic quantity of the execution model.
///
/// `group_id`, `local_id` and `global_id` only appear in the global-id
/// defining equations; their bounds are installed elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Quantity {
    LocalSize(Axis),
    NumGroups(Axis),
    GlobalOffset(Axis),
    WorkDim,
    GroupId(Axis),
    LocalId(Axis),
    GlobalId(Axis),
}

impl Quantity {
    fn parts(self) -> (&'static str, Option<Axis>) {
        match self {
            Self::LocalSize(a) => ("local_size", Some(a)),
            Self::NumGroups(a) => ("num_groups", Some(a)),
            Self::GlobalOffset(a) => ("global_offset", Some(a)),
            Self::WorkDim => ("work_dim", None),
            Self::GroupId(a) => ("group_id", Some(a)),
            Self::LocalId(a) => ("local_id", Some(a)),
            Self::GlobalId(a) => ("global_id", Some(a)),
        }
    }

    /// Identifier form used where call syntax is not allowed
    /// (`local_size_0`, `work_dim`).
    #[must_use]
    pub fn symbol(self) -> String {
        match self.parts() {
            (name, Some(axis)) => format!("{name}_{axis}"),
            (name, None) => name.to_string(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts() {
            (name, Some(axis)) => write!(f, "{name}({axis})"),
            (name, None) => write!(f, "{name}()"),
        }
    }
}

impl FromStr for Quantity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = s
            .strip_suffix(')')
            .and_then(|body| body.split_once('('))
            .ok_or_else(|| format!("malformed quantity '{s}'"))?;
        if name == "work_dim" && arg.is_empty() {
            return Ok(Self::WorkDim);
        }
        let axis = arg
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(Axis::from_index)
            .ok_or_else(|| format!("invalid axis in '{s}'"))?;
        match name {
            "local_size" => Ok(Self::LocalSize(axis)),
            "num_groups" => Ok(Self::NumGroups(axis)),
            "global_offset" => Ok(Self::GlobalOffset(axis)),
            "group_id" => Ok(Self::GroupId(axis)),
            "local_id" => Ok(Self::LocalId(axis)),
            "global_id" => Ok(Self::GlobalId(axis)),
            other => Err(format!("unknown quantity '{other}'")),
        }
    }
}

impl From<Quantity> for String {
    fn from(q: Quantity) -> Self {
        q.to_string()
    }
}

impl TryFrom<String> for Quantity {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ── Terms ─────────────────────────────────────────────────────────

/// Unsigned integer expression over quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Const(u64),
    Var(Quantity),
    Add(Box<Term>, Box<Term>),
    Mul(Box<Term>, Box<Term>),
    Div(Box<Term>, Box<Term>),
    Rem(Box<Term>, Box<Term>),
}

impl Term {
    #[must_use]
    pub fn var(q: Quantity) -> Self {
        Self::Var(q)
    }

    #[must_use]
    pub fn constant(n: u64) -> Self {
        Self::Const(n)
    }

    /// Every quantity in the term, left to right, with repeats.
    pub fn quantities(&self) -> Vec<Quantity> {
        let mut out = Vec::new();
        self.collect_quantities(&mut out);
        out
    }

    fn collect_quantities(&self, out: &mut Vec<Quantity>) {
        match self {
            Self::Const(_) => {}
            Self::Var(q) => out.push(*q),
            Self::Add(a, b) | Self::Mul(a, b) | Self::Div(a, b) | Self::Rem(a, b) => {
                a.collect_quantities(out);
                b.collect_quantities(out);
            }
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Add(..) => 1,
            Self::Mul(..) | Self::Div(..) | Self::Rem(..) => 2,
            Self::Const(_) | Self::Var(_) => 3,
        }
    }
}

impl std::ops::Add for Term {
    type Output = Term;

    fn add(self, rhs: Term) -> Term {
        Term::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for Term {
    type Output = Term;

    fn mul(self, rhs: Term) -> Term {
        Term::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Div for Term {
    type Output = Term;

    fn div(self, rhs: Term) -> Term {
        Term::Div(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Rem for Term {
    type Output = Term;

    fn rem(self, rhs: Term) -> Term {
        Term::Rem(Box::new(self), Box::new(rhs))
    }
}

impl From<Quantity> for Term {
    fn from(q: Quantity) -> Self {
        Self::Var(q)
    }
}

impl From<u64> for Term {
    fn from(n: u64) -> Self {
        Self::Const(n)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (op, a, b) = match self {
            Self::Const(n) => return write!(f, "{n}"),
            Self::Var(q) => return write!(f, "{q}"),
            Self::Add(a, b) => ("+", a, b),
            Self::Mul(a, b) => ("*", a, b),
            Self::Div(a, b) => ("/", a, b),
            Self::Rem(a, b) => ("%", a, b),
        };
        let prec = self.precedence();
        // Left operands bind at equal precedence, right operands only above it.
        if a.precedence() < prec {
            write!(f, "({a})")?;
        } else {
            write!(f, "{a}")?;
        }
        write!(f, " {op} ")?;
        if b.precedence() <= prec {
            write!(f, "({b})")
        } else {
            write!(f, "{b}")
        }
    }
}

// ── Formulas ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Eq,
    Gt,
    Le,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "==",
            Self::Gt => ">",
            Self::Le => "<=",
        };
        write!(f, "{s}")
    }
}

/// A closed comparison `lhs <relation> rhs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    pub lhs: Term,
    pub relation: Relation,
    pub rhs: Term,
}

impl Formula {
    pub fn equal(lhs: impl Into<Term>, rhs: impl Into<Term>) -> Self {
        Self {
            lhs: lhs.into(),
            relation: Relation::Eq,
            rhs: rhs.into(),
        }
    }

    pub fn greater_than(lhs: impl Into<Term>, rhs: impl Into<Term>) -> Self {
        Self {
            lhs: lhs.into(),
            relation: Relation::Gt,
            rhs: rhs.into(),
        }
    }

    pub fn at_most(lhs: impl Into<Term>, rhs: impl Into<Term>) -> Self {
        Self {
            lhs: lhs.into(),
            relation: Relation::Le,
            rhs: rhs.into(),
        }
    }

    /// Every quantity in the formula, left to right, with repeats.
    pub fn quantities(&self) -> Vec<Quantity> {
        let mut out = self.lhs.quantities();
        out.extend(self.rhs.quantities());
        out
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.relation, self.rhs)
    }
}

// ── Axioms ────────────────────────────────────────────────────────

/// Which synthesis rule produced an axiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxiomKind {
    WorkGroupDimension,
    GridDimension,
    LocalSize,
    NumGroups,
    GlobalOffset,
    /// Defining equation for `global_id(d)`, substitutable wherever the
    /// global id appears.
    GlobalId,
}

impl fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::WorkGroupDimension => "work_group_dimension",
            Self::GridDimension => "grid_dimension",
            Self::LocalSize => "local_size",
            Self::NumGroups => "num_groups",
            Self::GlobalOffset => "global_offset",
            Self::GlobalId => "global_id",
        };
        write!(f, "{s}")
    }
}

/// A standing assumption handed to the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axiom {
    pub kind: AxiomKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    pub formula: Formula,
}

impl Axiom {
    #[must_use]
    pub fn new(kind: AxiomKind, axis: Option<Axis>, formula: Formula) -> Self {
        Self {
            kind,
            axis,
            formula,
        }
    }

    #[must_use]
    pub fn is_definition(&self) -> bool {
        self.kind == AxiomKind::GlobalId
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_display() {
        assert_eq!(Quantity::LocalSize(Axis::X).to_string(), "local_size(0)");
        assert_eq!(Quantity::NumGroups(Axis::Z).to_string(), "num_groups(2)");
        assert_eq!(Quantity::WorkDim.to_string(), "work_dim()");
        assert_eq!(Quantity::GlobalId(Axis::Y).to_string(), "global_id(1)");
    }

    #[test]
    fn quantity_symbol() {
        assert_eq!(Quantity::GlobalOffset(Axis::Y).symbol(), "global_offset_1");
        assert_eq!(Quantity::WorkDim.symbol(), "work_dim");
    }

    #[test]
    fn quantity_parse_round_trip() {
        let all = [
            Quantity::LocalSize(Axis::Z),
            Quantity::NumGroups(Axis::X),
            Quantity::GlobalOffset(Axis::Y),
            Quantity::WorkDim,
            Quantity::GroupId(Axis::X),
            Quantity::LocalId(Axis::Y),
            Quantity::GlobalId(Axis::Z),
        ];
        for q in all {
            assert_eq!(q.to_string().parse::<Quantity>(), Ok(q));
        }
    }

    #[test]
    fn quantity_parse_rejects_bad_input() {
        assert!("local_size(3)".parse::<Quantity>().is_err());
        assert!("local_size".parse::<Quantity>().is_err());
        assert!("warp_size(0)".parse::<Quantity>().is_err());
        assert!("work_dim(0)".parse::<Quantity>().is_err());
    }

    #[test]
    fn term_display_respects_precedence() {
        let g = Term::var(Quantity::GroupId(Axis::X));
        let l = Term::var(Quantity::LocalSize(Axis::X));
        let id = Term::var(Quantity::LocalId(Axis::X));
        let off = Term::var(Quantity::GlobalOffset(Axis::X));
        let t = g * l + id + off;
        assert_eq!(
            t.to_string(),
            "group_id(0) * local_size(0) + local_id(0) + global_offset(0)"
        );

        let grouped = Term::constant(4) * (Term::constant(1) + Term::constant(2));
        assert_eq!(grouped.to_string(), "4 * (1 + 2)");

        let nested = Term::constant(64) / (Term::constant(8) / Term::constant(2));
        assert_eq!(nested.to_string(), "64 / (8 / 2)");
    }

    #[test]
    fn formula_display() {
        let f = Formula::at_most(Quantity::LocalSize(Axis::Y), 512u64);
        assert_eq!(f.to_string(), "local_size(1) <= 512");
        let f = Formula::equal(
            Term::constant(512) % Term::var(Quantity::LocalSize(Axis::Y)),
            0u64,
        );
        assert_eq!(f.to_string(), "512 % local_size(1) == 0");
    }

    #[test]
    fn formula_quantities_in_order() {
        let f = Formula::equal(
            Quantity::NumGroups(Axis::X),
            Term::constant(64) / Term::var(Quantity::LocalSize(Axis::X)),
        );
        assert_eq!(
            f.quantities(),
            vec![Quantity::NumGroups(Axis::X), Quantity::LocalSize(Axis::X)]
        );
    }

    #[test]
    fn axiom_serializes_quantities_as_strings() {
        let axiom = Axiom::new(
            AxiomKind::LocalSize,
            Some(Axis::X),
            Formula::greater_than(Quantity::LocalSize(Axis::X), 0u64),
        );
        let json = serde_json::to_string(&axiom).unwrap();
        assert!(json.contains("\"local_size(0)\""));
        let back: Axiom = serde_json::from_str(&json).unwrap();
        assert_eq!(back, axiom);
    }
}
