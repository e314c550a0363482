use std::path::Path;

use launch_axioms::error::Severity;
use launch_axioms::geometry::{Axis, GeometryConfig, LocalSize, NumGroups, lint_flags, validate_flags};

use super::load_flags;

pub fn run(config: Option<&Path>, defines: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let flags = load_flags(config, defines)?;
    let geometry = validate_flags(&flags)?;
    let violations = lint_flags(&flags, &geometry);

    print_summary(&geometry);

    let errors: Vec<_> = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .collect();
    let warnings: Vec<_> = violations
        .iter()
        .filter(|v| v.severity == Severity::Warning)
        .collect();

    for v in &violations {
        println!("{v}");
    }

    println!(
        "\n{} error(s), {} warning(s)",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        println!("Geometry is valid.");
        Ok(())
    } else {
        Err(format!("Geometry has {} lint error(s)", errors.len()).into())
    }
}

fn print_summary(geometry: &GeometryConfig) {
    println!(
        "work group: {}, grid: {}",
        geometry.work_group_dim, geometry.grid_dim
    );
    for axis in Axis::ALL {
        let local = match geometry.local_size(axis) {
            LocalSize::Unconstrained => "-".to_string(),
            LocalSize::Fixed(n) => n.to_string(),
            LocalSize::FreePositive => "free".to_string(),
        };
        let groups = match geometry.num_groups(axis) {
            NumGroups::Unconstrained => "-".to_string(),
            NumGroups::Fixed(n) => n.to_string(),
            NumGroups::FreePositive => "free".to_string(),
            NumGroups::DerivedFromGlobalSize(g) => format!("{g} / local"),
        };
        println!(
            "  axis {axis}: local_size={local} num_groups={groups} global_offset={}",
            geometry.global_offset(axis)
        );
    }
}
