pub mod axioms;
pub mod image_index;
pub mod intrinsic;
pub mod launch;
pub mod validate;
pub mod witness;

use std::path::Path;

use launch_axioms::error::ConfigError;
use launch_axioms::geometry::{FlagSet, parse_flags};

/// Load the flags of a YAML configuration and overlay `-D` defines.
///
/// Defines win over file entries of the same name. Either source may be
/// absent, in which case the result may be empty.
pub fn merge_flags(config: Option<&Path>, defines: &[String]) -> Result<FlagSet, ConfigError> {
    let mut flags = match config {
        Some(path) => parse_flags(path)?,
        None => FlagSet::new(),
    };
    for (name, value) in FlagSet::from_defines(defines)?.iter() {
        flags.set(name, value);
    }
    Ok(flags)
}

/// Like [`merge_flags`], but at least one source must be given.
pub fn load_flags(
    config: Option<&Path>,
    defines: &[String],
) -> Result<FlagSet, Box<dyn std::error::Error>> {
    if config.is_none() && defines.is_empty() {
        return Err("no configuration given: pass a YAML file or -D defines".into());
    }
    Ok(merge_flags(config, defines)?)
}
