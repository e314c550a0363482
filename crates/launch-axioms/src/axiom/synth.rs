use tracing::debug;

use crate::axiom::global_id::global_id_axioms;
use crate::axiom::{Axiom, AxiomKind, Formula, Quantity, Term};
use crate::geometry::{Axis, GeometryConfig, LocalSize, NumGroups};

/// Synthesize the configuration axioms for a validated geometry.
///
/// Order is stable: work-group dimensionality, grid dimensionality
/// (including `work_dim()`), local sizes, group counts, global offsets,
/// each by ascending axis.
///
/// Axes outside the selected dimensionality get only their `== 1`
/// clause; any selector on such an axis is dropped so the two can never
/// disagree.
pub fn synthesize_axioms(config: &GeometryConfig) -> Vec<Axiom> {
    let mut axioms = Vec::new();

    work_group_dimension_axioms(config, &mut axioms);
    grid_dimension_axioms(config, &mut axioms);
    local_size_axioms(config, &mut axioms);
    num_groups_axioms(config, &mut axioms);
    global_offset_axioms(config, &mut axioms);

    debug!(count = axioms.len(), "synthesized configuration axioms");
    axioms
}

/// Configuration axioms followed by the three global-id defining
/// equations: everything the verifier installs before checking a kernel.
pub fn standing_axioms(config: &GeometryConfig) -> Vec<Axiom> {
    let mut axioms = synthesize_axioms(config);
    axioms.extend(global_id_axioms());
    axioms
}

fn work_group_dimension_axioms(config: &GeometryConfig, axioms: &mut Vec<Axiom>) {
    for axis in Axis::ALL {
        if !config.work_group_dim.spans(axis) {
            axioms.push(Axiom::new(
                AxiomKind::WorkGroupDimension,
                Some(axis),
                Formula::equal(Quantity::LocalSize(axis), 1u64),
            ));
        }
    }
}

fn grid_dimension_axioms(config: &GeometryConfig, axioms: &mut Vec<Axiom>) {
    for axis in Axis::ALL {
        if !config.grid_dim.spans(axis) {
            axioms.push(Axiom::new(
                AxiomKind::GridDimension,
                Some(axis),
                Formula::equal(Quantity::NumGroups(axis), 1u64),
            ));
        }
    }
    axioms.push(Axiom::new(
        AxiomKind::GridDimension,
        None,
        Formula::equal(Quantity::WorkDim, config.grid_dim.count() as u64),
    ));
}

fn local_size_axioms(config: &GeometryConfig, axioms: &mut Vec<Axiom>) {
    for axis in Axis::ALL.into_iter().filter(|&a| config.work_group_dim.spans(a)) {
        let local = Quantity::LocalSize(axis);
        let formula = match config.local_size(axis) {
            LocalSize::Unconstrained => continue,
            LocalSize::Fixed(n) => Formula::equal(local, n),
            LocalSize::FreePositive => Formula::greater_than(local, 0u64),
        };
        axioms.push(Axiom::new(AxiomKind::LocalSize, Some(axis), formula));
    }
}

fn num_groups_axioms(config: &GeometryConfig, axioms: &mut Vec<Axiom>) {
    for axis in Axis::ALL.into_iter().filter(|&a| config.grid_dim.spans(a)) {
        let groups = Quantity::NumGroups(axis);
        let local = Quantity::LocalSize(axis);
        let formulas = match config.num_groups(axis) {
            NumGroups::Unconstrained => continue,
            NumGroups::Fixed(n) => vec![Formula::equal(groups, n)],
            NumGroups::FreePositive => vec![Formula::greater_than(groups, 0u64)],
            NumGroups::DerivedFromGlobalSize(global) => vec![
                Formula::at_most(local, global),
                Formula::equal(Term::constant(global) % Term::var(local), 0u64),
                Formula::equal(groups, Term::constant(global) / Term::var(local)),
            ],
        };
        axioms.extend(
            formulas
                .into_iter()
                .map(|f| Axiom::new(AxiomKind::NumGroups, Some(axis), f)),
        );
    }
}

fn global_offset_axioms(config: &GeometryConfig, axioms: &mut Vec<Axiom>) {
    for axis in Axis::ALL {
        axioms.push(Axiom::new(
            AxiomKind::GlobalOffset,
            Some(axis),
            Formula::equal(Quantity::GlobalOffset(axis), config.global_offset(axis)),
        ));
    }
}
