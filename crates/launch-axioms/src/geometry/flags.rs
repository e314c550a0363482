//! The flat selector surface a launch geometry arrives as.
//!
//! Flags keep the names of the execution-model header's preprocessor
//! symbols (`__1D_WORK_GROUP`, `__LOCAL_SIZE_0`, `__NUM_GROUPS_1_FREE`,
//! ...), so existing build defines map onto a [`FlagSet`] one to one.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::types::{Axis, DimensionSubject};

/// Value of a single flag: a switch, or a define carrying an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Switch(bool),
    Int(u64),
}

impl FlagValue {
    /// Whether the flag counts as defined. `false` is the only value that
    /// does not.
    #[must_use]
    pub fn is_set(self) -> bool {
        match self {
            Self::Switch(on) => on,
            Self::Int(_) => true,
        }
    }

    #[must_use]
    pub fn as_int(self) -> Option<u64> {
        match self {
            Self::Switch(_) => None,
            Self::Int(n) => Some(n),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(on: bool) -> Self {
        Self::Switch(on)
    }
}

impl From<u64> for FlagValue {
    fn from(n: u64) -> Self {
        Self::Int(n)
    }
}

/// An ordered set of named flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet {
    flags: BTreeMap<String, FlagValue>,
}

/// On-disk configuration file: a `defines` mapping of flag names to values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defines: FlagSet,
}

impl FlagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FlagValue>) {
        self.flags.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.set(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<FlagValue> {
        self.flags.get(name).copied()
    }

    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(FlagValue::is_set)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FlagValue)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Build a flag set from compiler-style defines.
    ///
    /// Accepts `-DNAME`, `-DNAME=VALUE`, `NAME` and `NAME=VALUE`. Values
    /// are decimal or `0x`-prefixed hexadecimal integers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDefine`] for an empty name or a value
    /// that is not an integer.
    pub fn from_defines<I, S>(defines: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for define in defines {
            let raw = define.as_ref().trim();
            let body = raw.strip_prefix("-D").unwrap_or(raw);
            let (name, value) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };
            if name.is_empty() {
                return Err(ConfigError::InvalidDefine(raw.to_string()));
            }
            match value {
                None => set.set(name, true),
                Some(value) => {
                    let n = parse_int(value)
                        .ok_or_else(|| ConfigError::InvalidDefine(raw.to_string()))?;
                    set.set(name, n);
                }
            }
        }
        Ok(set)
    }

    /// Render as `-D` defines, skipping switches that are off.
    #[must_use]
    pub fn to_defines(&self) -> Vec<String> {
        self.iter()
            .filter_map(|(name, value)| match value {
                FlagValue::Switch(false) => None,
                FlagValue::Switch(true) => Some(format!("-D{name}")),
                FlagValue::Int(n) => Some(format!("-D{name}={n}")),
            })
            .collect()
    }
}

fn parse_int(text: &str) -> Option<u64> {
    let text = text.trim();
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

/// Parse a YAML configuration file into a [`FlagSet`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read,
/// or [`ConfigError::Yaml`] if the YAML is malformed.
pub fn parse_flags(path: &Path) -> Result<FlagSet, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_flags_str(&content)
}

/// Parse a YAML configuration from a string.
pub fn parse_flags_str(yaml: &str) -> Result<FlagSet, ConfigError> {
    let file: ConfigFile = serde_yaml::from_str(yaml)?;
    Ok(file.defines)
}

// ── Flag names ────────────────────────────────────────────────────

pub fn local_size(axis: Axis) -> String {
    format!("__LOCAL_SIZE_{axis}")
}

pub fn local_size_free(axis: Axis) -> String {
    format!("__LOCAL_SIZE_{axis}_FREE")
}

pub fn num_groups(axis: Axis) -> String {
    format!("__NUM_GROUPS_{axis}")
}

pub fn num_groups_free(axis: Axis) -> String {
    format!("__NUM_GROUPS_{axis}_FREE")
}

pub fn num_groups_from_global_size(axis: Axis) -> String {
    format!("__NUM_GROUPS_{axis}_FROM_GLOBAL_SIZE")
}

pub fn global_size(axis: Axis) -> String {
    format!("__GLOBAL_SIZE_{axis}")
}

pub fn global_offset(axis: Axis) -> String {
    format!("__GLOBAL_OFFSET_{axis}")
}

/// Whether `name` is one of the recognized geometry flags.
#[must_use]
pub fn is_known_flag(name: &str) -> bool {
    let dimension = [DimensionSubject::WorkGroup, DimensionSubject::Grid]
        .iter()
        .any(|s| s.selector_names().contains(&name));
    dimension
        || Axis::ALL.iter().any(|&axis| {
            [
                local_size(axis),
                local_size_free(axis),
                num_groups(axis),
                num_groups_free(axis),
                num_groups_from_global_size(axis),
                global_size(axis),
                global_offset(axis),
            ]
            .iter()
            .any(|known| known == name)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_yaml_defines() {
        let yaml = r#"
defines:
  __1D_WORK_GROUP: true
  __2D_GRID: true
  __LOCAL_SIZE_0: 256
  __NUM_GROUPS_1_FREE: true
  __3D_GRID: false
"#;
        let flags = parse_flags_str(yaml).unwrap();
        assert_eq!(flags.len(), 5);
        assert!(flags.is_set("__1D_WORK_GROUP"));
        assert!(!flags.is_set("__3D_GRID"));
        assert_eq!(flags.get("__LOCAL_SIZE_0"), Some(FlagValue::Int(256)));
        assert_eq!(flags.get("__NUM_GROUPS_1_FREE"), Some(FlagValue::Switch(true)));
    }

    #[test]
    fn parse_empty_file_gives_empty_set() {
        let flags = parse_flags_str("{}").unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn parse_invalid_yaml_returns_error() {
        assert!(parse_flags_str("defines: [not: {{").is_err());
    }

    #[test]
    fn parse_negative_value_returns_error() {
        let yaml = "defines:\n  __LOCAL_SIZE_0: -4\n";
        assert!(parse_flags_str(yaml).is_err());
    }

    #[test]
    fn from_defines_accepts_both_spellings() {
        let flags = FlagSet::from_defines([
            "-D__1D_WORK_GROUP",
            "__1D_GRID",
            "-D__LOCAL_SIZE_0=64",
            "__GLOBAL_OFFSET_0=0x10",
        ])
        .unwrap();
        assert!(flags.is_set("__1D_WORK_GROUP"));
        assert!(flags.is_set("__1D_GRID"));
        assert_eq!(flags.get("__LOCAL_SIZE_0"), Some(FlagValue::Int(64)));
        assert_eq!(flags.get("__GLOBAL_OFFSET_0"), Some(FlagValue::Int(16)));
    }

    #[test]
    fn from_defines_rejects_garbage() {
        assert!(matches!(
            FlagSet::from_defines(["-D__LOCAL_SIZE_0=lots"]),
            Err(ConfigError::InvalidDefine(_))
        ));
        assert!(matches!(
            FlagSet::from_defines(["-D=3"]),
            Err(ConfigError::InvalidDefine(_))
        ));
    }

    #[test]
    fn to_defines_skips_disabled_switches() {
        let flags = FlagSet::new()
            .with("__1D_GRID", true)
            .with("__2D_GRID", false)
            .with("__NUM_GROUPS_0", 8u64);
        assert_eq!(
            flags.to_defines(),
            vec!["-D__1D_GRID".to_string(), "-D__NUM_GROUPS_0=8".to_string()]
        );
    }

    #[test]
    fn flag_names_follow_axis_index() {
        assert_eq!(local_size(Axis::Y), "__LOCAL_SIZE_1");
        assert_eq!(num_groups_free(Axis::Z), "__NUM_GROUPS_2_FREE");
        assert_eq!(global_size(Axis::X), "__GLOBAL_SIZE_0");
        assert_eq!(
            num_groups_from_global_size(Axis::X),
            "__NUM_GROUPS_0_FROM_GLOBAL_SIZE"
        );
    }

    #[test]
    fn known_flags() {
        assert!(is_known_flag("__3D_WORK_GROUP"));
        assert!(is_known_flag("__GLOBAL_OFFSET_2"));
        assert!(!is_known_flag("__LOCAL_SIZE_3"));
        assert!(!is_known_flag("__LOCAL_SIZE"));
    }

    #[test]
    fn parse_file_and_render_defines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launch.yaml");
        std::fs::write(
            &path,
            "defines:\n  __1D_WORK_GROUP: true\n  __3D_GRID: false\n  __LOCAL_SIZE_0: 64\n",
        )
        .unwrap();

        let flags = parse_flags(&path).unwrap();
        assert_eq!(flags.len(), 3);
        assert_eq!(
            flags.to_defines(),
            vec!["-D__1D_WORK_GROUP", "-D__LOCAL_SIZE_0=64"]
        );
    }
}
