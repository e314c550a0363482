//! Concrete witnesses for synthesized axioms.
//!
//! A witness is one assignment of every configuration quantity
//! (`local_size`, `num_groups`, `global_offset`, `work_dim`) under which
//! all synthesized axioms hold. Finding one shows the axiom set is not
//! contradictory; failing to find one pinpoints the clause that cannot
//! be met.

use tracing::debug;

use crate::axiom::{Assignment, Axiom, Quantity, synthesize_axioms};
use crate::geometry::{Axis, GeometryConfig, LocalSize, NumGroups};

/// No assignment satisfies the axioms for this configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsatisfiable{}: {axiom}", axis_suffix(.axis))]
pub struct Unsatisfiable {
    pub axis: Option<Axis>,
    /// Rendered text of the first axiom that does not hold.
    pub axiom: String,
}

fn axis_suffix(axis: &Option<Axis>) -> String {
    axis.map(|a| format!(" on axis {a}")).unwrap_or_default()
}

/// Build the canonical witness for `config` and check it against the
/// synthesized axioms.
///
/// Free and unconstrained local sizes and group counts resolve to 1,
/// collapsed axes to 1, and derived group counts to `g / local_size`.
/// Each clause pins its quantity to the least value it allows, so a
/// failure here means no witness exists.
///
/// # Errors
///
/// Returns [`Unsatisfiable`] naming the first axiom that fails.
pub fn find_witness(config: &GeometryConfig) -> Result<Assignment, Unsatisfiable> {
    let assignment = canonical_assignment(config);
    verify_witness(&synthesize_axioms(config), &assignment)?;
    debug!(quantities = assignment.len(), "found witness");
    Ok(assignment)
}

/// Check `assignment` against every axiom in order.
///
/// An axiom that cannot be decided (unassigned quantity, division by
/// zero, overflow) counts as failing.
///
/// # Errors
///
/// Returns [`Unsatisfiable`] naming the first axiom that fails.
pub fn verify_witness(axioms: &[Axiom], assignment: &Assignment) -> Result<(), Unsatisfiable> {
    match axioms
        .iter()
        .find(|axiom| axiom.holds(assignment) != Some(true))
    {
        Some(axiom) => Err(Unsatisfiable {
            axis: axiom.axis,
            axiom: axiom.to_string(),
        }),
        None => Ok(()),
    }
}

fn canonical_assignment(config: &GeometryConfig) -> Assignment {
    let mut assignment = Assignment::new();

    for axis in Axis::ALL {
        let local = if config.work_group_dim.spans(axis) {
            match config.local_size(axis) {
                LocalSize::Fixed(n) => n,
                LocalSize::Unconstrained | LocalSize::FreePositive => 1,
            }
        } else {
            1
        };

        let groups = if config.grid_dim.spans(axis) {
            match config.num_groups(axis) {
                NumGroups::Fixed(n) => n,
                NumGroups::Unconstrained | NumGroups::FreePositive => 1,
                NumGroups::DerivedFromGlobalSize(global) => global.checked_div(local).unwrap_or(0),
            }
        } else {
            1
        };

        assignment.set(Quantity::LocalSize(axis), local);
        assignment.set(Quantity::NumGroups(axis), groups);
        assignment.set(Quantity::GlobalOffset(axis), config.global_offset(axis));
    }
    assignment.set(Quantity::WorkDim, config.grid_dim.count() as u64);

    assignment
}
