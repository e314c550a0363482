use tracing::warn;

use crate::error::{Severity, Violation};
use crate::geometry::flags::{self, FlagSet};
use crate::geometry::types::{Axis, GeometryConfig, LocalSize, NumGroups};

/// Non-fatal diagnostics for a flag set that already validated into
/// `config`.
///
/// A [`Severity::Error`] here means the configuration is well-formed but
/// its axioms cannot all hold (GEOM-004); warnings flag selectors that
/// have no effect.
pub fn lint_flags(flags: &FlagSet, config: &GeometryConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    lint_unknown_flags(flags, &mut violations);
    lint_orphan_global_sizes(flags, config, &mut violations);
    lint_collapsed_axes(config, &mut violations);
    lint_divisibility(config, &mut violations);
    lint_concrete_launch(config, &mut violations);

    for v in &violations {
        if v.severity != Severity::Info {
            warn!(rule = %v.rule, "{}", v.message);
        }
    }
    violations
}

fn lint_unknown_flags(flags: &FlagSet, violations: &mut Vec<Violation>) {
    for (name, _) in flags.iter() {
        if name.starts_with("__") && !flags::is_known_flag(name) {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "GEOM-001".to_string(),
                message: format!("unknown geometry flag {name} is ignored"),
                location: Some(name.to_string()),
            });
        }
    }
}

fn lint_orphan_global_sizes(
    flags: &FlagSet,
    config: &GeometryConfig,
    violations: &mut Vec<Violation>,
) {
    for axis in Axis::ALL {
        let name = flags::global_size(axis);
        if flags.is_set(&name) && config.num_groups(axis) == NumGroups::Unconstrained {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "GEOM-002".to_string(),
                message: format!(
                    "{name} has no effect without {} or {}",
                    flags::num_groups_free(axis),
                    flags::num_groups_from_global_size(axis)
                ),
                location: Some(name),
            });
        }
    }
}

fn lint_collapsed_axes(config: &GeometryConfig, violations: &mut Vec<Violation>) {
    for axis in Axis::ALL {
        if !config.work_group_dim.spans(axis) && config.local_size(axis) != LocalSize::Unconstrained {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "GEOM-003".to_string(),
                message: format!(
                    "local size selector on axis {axis} is ignored: \
                     a {} work group fixes local_size({axis}) to 1",
                    config.work_group_dim
                ),
                location: Some(flags::local_size(axis)),
            });
        }
        if !config.grid_dim.spans(axis) && config.num_groups(axis) != NumGroups::Unconstrained {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "GEOM-003".to_string(),
                message: format!(
                    "num-groups selector on axis {axis} is ignored: \
                     a {} grid fixes num_groups({axis}) to 1",
                    config.grid_dim
                ),
                location: Some(flags::num_groups(axis)),
            });
        }
    }
}

fn lint_divisibility(config: &GeometryConfig, violations: &mut Vec<Violation>) {
    for axis in Axis::ALL {
        if !config.work_group_dim.spans(axis) || !config.grid_dim.spans(axis) {
            continue;
        }
        if let (LocalSize::Fixed(local), NumGroups::DerivedFromGlobalSize(global)) =
            (config.local_size(axis), config.num_groups(axis))
            && (local == 0 || local > global || global % local != 0)
        {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "GEOM-004".to_string(),
                message: format!(
                    "global size {global} on axis {axis} is not a multiple of \
                     the fixed local size {local}; the axioms are unsatisfiable"
                ),
                location: Some(flags::global_size(axis)),
            });
        }
    }
}

fn lint_concrete_launch(config: &GeometryConfig, violations: &mut Vec<Violation>) {
    let local_fixed = Axis::ALL
        .iter()
        .filter(|&&axis| config.work_group_dim.spans(axis))
        .all(|&axis| matches!(config.local_size(axis), LocalSize::Fixed(_)));
    let groups_fixed = Axis::ALL
        .iter()
        .filter(|&&axis| config.grid_dim.spans(axis))
        .all(|&axis| matches!(config.num_groups(axis), NumGroups::Fixed(_)));

    if local_fixed && groups_fixed {
        violations.push(Violation {
            severity: Severity::Info,
            rule: "GEOM-005".to_string(),
            message: "every size is fixed: the axioms describe a single concrete launch"
                .to_string(),
            location: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::validate_flags;

    fn lint(flags: &FlagSet) -> Vec<Violation> {
        let config = validate_flags(flags).unwrap();
        lint_flags(flags, &config)
    }

    fn one_by_one() -> FlagSet {
        FlagSet::new()
            .with("__1D_WORK_GROUP", true)
            .with("__1D_GRID", true)
    }

    #[test]
    fn clean_configuration_has_no_warnings() {
        let flags = one_by_one()
            .with("__LOCAL_SIZE_0_FREE", true)
            .with("__NUM_GROUPS_0_FREE", true);
        let violations = lint(&flags);
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn unknown_flag_is_warning() {
        let flags = one_by_one().with("__LOCAL_SIZE_3", 4u64).with("OTHER", true);
        let violations = lint(&flags);
        let unknown: Vec<_> = violations.iter().filter(|v| v.rule == "GEOM-001").collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].location.as_deref(), Some("__LOCAL_SIZE_3"));
    }

    #[test]
    fn orphan_global_size_is_warning() {
        let flags = one_by_one().with("__GLOBAL_SIZE_0", 1024u64);
        assert!(lint(&flags).iter().any(|v| v.rule == "GEOM-002"));
    }

    #[test]
    fn selector_on_collapsed_axis_is_warning() {
        let flags = one_by_one()
            .with("__LOCAL_SIZE_2", 8u64)
            .with("__NUM_GROUPS_1_FREE", true);
        let violations = lint(&flags);
        let collapsed: Vec<_> = violations.iter().filter(|v| v.rule == "GEOM-003").collect();
        assert_eq!(collapsed.len(), 2);
        assert!(collapsed.iter().all(|v| v.severity == Severity::Warning));
    }

    #[test]
    fn non_divisible_global_size_is_error() {
        let flags = one_by_one()
            .with("__LOCAL_SIZE_0", 48u64)
            .with("__NUM_GROUPS_0_FREE", true)
            .with("__GLOBAL_SIZE_0", 1000u64);
        let violations = lint(&flags);
        assert!(violations
            .iter()
            .any(|v| v.rule == "GEOM-004" && v.severity == Severity::Error));
    }

    #[test]
    fn divisible_global_size_is_clean() {
        let flags = one_by_one()
            .with("__LOCAL_SIZE_0", 64u64)
            .with("__NUM_GROUPS_0_FREE", true)
            .with("__GLOBAL_SIZE_0", 1024u64);
        assert!(!lint(&flags).iter().any(|v| v.rule == "GEOM-004"));
    }

    #[test]
    fn local_larger_than_global_is_error() {
        let flags = one_by_one()
            .with("__LOCAL_SIZE_0", 256u64)
            .with("__NUM_GROUPS_0_FROM_GLOBAL_SIZE", true)
            .with("__GLOBAL_SIZE_0", 128u64);
        assert!(lint(&flags).iter().any(|v| v.rule == "GEOM-004"));
    }

    #[test]
    fn fully_fixed_launch_is_info() {
        let flags = one_by_one()
            .with("__LOCAL_SIZE_0", 256u64)
            .with("__NUM_GROUPS_0", 4u64);
        let violations = lint(&flags);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "GEOM-005");
        assert_eq!(violations[0].severity, Severity::Info);
    }
}
