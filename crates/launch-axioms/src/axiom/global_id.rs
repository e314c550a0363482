use crate::axiom::{Axiom, AxiomKind, Formula, Quantity, Term};
use crate::geometry::Axis;

/// Defining equation for the global id along `axis`:
///
/// `global_id(d) == group_id(d) * local_size(d) + local_id(d) + global_offset(d)`
#[must_use]
pub fn global_id_axiom(axis: Axis) -> Axiom {
    let rhs = Term::var(Quantity::GroupId(axis)) * Term::var(Quantity::LocalSize(axis))
        + Term::var(Quantity::LocalId(axis))
        + Term::var(Quantity::GlobalOffset(axis));
    Axiom::new(
        AxiomKind::GlobalId,
        Some(axis),
        Formula::equal(Quantity::GlobalId(axis), rhs),
    )
}

/// One defining equation per axis.
#[must_use]
pub fn global_id_axioms() -> Vec<Axiom> {
    Axis::ALL.into_iter().map(global_id_axiom).collect()
}

/// Concrete global id, with the wrapping arithmetic of a `size_t`
/// computation.
#[must_use]
pub fn global_id(group_id: u64, local_size: u64, local_id: u64, global_offset: u64) -> u64 {
    group_id
        .wrapping_mul(local_size)
        .wrapping_add(local_id)
        .wrapping_add(global_offset)
}
