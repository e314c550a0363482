use tracing::{debug, info};

use crate::error::ConfigError;
use crate::geometry::flags::{self, FlagSet, FlagValue};
use crate::geometry::types::{
    Axis, DimensionSubject, Dimensionality, GeometryConfig, LocalSize, NumGroups, SizeQuantity,
};

/// Validate a flag set and build the geometry configuration it selects.
///
/// Checks run in a fixed order and the first failure is returned:
/// work-group dimensionality, grid dimensionality, then per axis the
/// local-size, num-groups and global-offset selectors.
///
/// # Errors
///
/// - [`ConfigError::AmbiguousDimension`] if zero or several selectors of
///   one dimensionality family are set
/// - [`ConfigError::ConflictingSizeSpec`] if an axis carries both a fixed
///   and a free or derived specification for the same quantity
/// - [`ConfigError::MissingCompanionGlobalSize`] if a derived group count
///   is requested without a global size
/// - [`ConfigError::InvalidFlagValue`] if a size flag has no integer value
///   or a size is zero, or a dimensionality selector carries an integer
///   other than 1
pub fn validate_flags(flags: &FlagSet) -> Result<GeometryConfig, ConfigError> {
    let work_group_dim = select_dimension(flags, DimensionSubject::WorkGroup)?;
    let grid_dim = select_dimension(flags, DimensionSubject::Grid)?;

    let mut config = GeometryConfig::new(work_group_dim, grid_dim);
    for axis in Axis::ALL {
        config.local_size[axis.index()] = select_local_size(flags, axis)?;
        config.num_groups[axis.index()] = select_num_groups(flags, axis)?;
        config.global_offset[axis.index()] =
            int_flag(flags, &flags::global_offset(axis))?.unwrap_or(0);
    }

    info!(
        work_group = %config.work_group_dim,
        grid = %config.grid_dim,
        "validated launch geometry"
    );
    Ok(config)
}

fn select_dimension(
    flags: &FlagSet,
    subject: DimensionSubject,
) -> Result<Dimensionality, ConfigError> {
    for dim in Dimensionality::ALL {
        let name = subject.selector_name(dim);
        if let Some(FlagValue::Int(n)) = flags.get(name)
            && n != 1
        {
            return Err(ConfigError::InvalidFlagValue {
                flag: name.to_string(),
                reason: format!("selector takes no value other than 1, got {n}"),
            });
        }
    }

    let selected: Vec<Dimensionality> = Dimensionality::ALL
        .into_iter()
        .filter(|&dim| flags.is_set(subject.selector_name(dim)))
        .collect();

    match selected.as_slice() {
        [dim] => {
            debug!(%subject, %dim, "dimensionality selected");
            Ok(*dim)
        }
        _ => Err(ConfigError::AmbiguousDimension {
            subject,
            found: selected.len(),
        }),
    }
}

fn select_local_size(flags: &FlagSet, axis: Axis) -> Result<LocalSize, ConfigError> {
    let fixed = positive_flag(flags, &flags::local_size(axis))?;
    let free = flags.is_set(&flags::local_size_free(axis));

    match (fixed, free) {
        (Some(_), true) => Err(ConfigError::ConflictingSizeSpec {
            axis,
            quantity: SizeQuantity::LocalSize,
        }),
        (Some(n), false) => Ok(LocalSize::Fixed(n)),
        (None, true) => Ok(LocalSize::FreePositive),
        (None, false) => Ok(LocalSize::Unconstrained),
    }
}

fn select_num_groups(flags: &FlagSet, axis: Axis) -> Result<NumGroups, ConfigError> {
    let fixed = positive_flag(flags, &flags::num_groups(axis))?;
    let free = flags.is_set(&flags::num_groups_free(axis));
    let from_global = flags.is_set(&flags::num_groups_from_global_size(axis));
    let global = positive_flag(flags, &flags::global_size(axis))?;

    if let Some(n) = fixed {
        if free || from_global || global.is_some() {
            return Err(ConfigError::ConflictingSizeSpec {
                axis,
                quantity: SizeQuantity::NumGroups,
            });
        }
        return Ok(NumGroups::Fixed(n));
    }

    match global {
        Some(g) if free || from_global => Ok(NumGroups::DerivedFromGlobalSize(g)),
        None if from_global => Err(ConfigError::MissingCompanionGlobalSize { axis }),
        _ if free => Ok(NumGroups::FreePositive),
        _ => Ok(NumGroups::Unconstrained),
    }
}

/// Integer value of a flag, `None` if unset.
fn int_flag(flags: &FlagSet, name: &str) -> Result<Option<u64>, ConfigError> {
    match flags.get(name) {
        None | Some(FlagValue::Switch(false)) => Ok(None),
        Some(FlagValue::Int(n)) => Ok(Some(n)),
        Some(FlagValue::Switch(true)) => Err(ConfigError::InvalidFlagValue {
            flag: name.to_string(),
            reason: "expected an integer value".to_string(),
        }),
    }
}

fn positive_flag(flags: &FlagSet, name: &str) -> Result<Option<u64>, ConfigError> {
    match int_flag(flags, name)? {
        Some(0) => Err(ConfigError::InvalidFlagValue {
            flag: name.to_string(),
            reason: "size must be positive".to_string(),
        }),
        other => Ok(other),
    }
}
