//! Verifier launch options.
//!
//! Kernels in a verification suite carry their launch geometry as
//! command-line style options, usually on the first line of the source:
//!
//! ```text
//! //--local_size=64,4 --global_size=1024,16 --global_offset=8
//! ```
//!
//! [`LaunchOptions`] parses those options and lowers them to the flag
//! vocabulary understood by [`crate::geometry::validate_flags`].

use std::fmt;

use tracing::debug;

use crate::geometry::flags;
use crate::geometry::{Axis, FlagSet};

/// One component of a size list: a concrete value or `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchDim {
    Fixed(u64),
    Any,
}

impl fmt::Display for LaunchDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Any => write!(f, "*"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaunchError {
    #[error("a local size is required")]
    MissingLocalSize,

    #[error("either a group count or a global size is required")]
    MissingGridSize,

    #[error("--num_groups is not allowed with --global_size")]
    GridSizeConflict,

    #[error("dimensions of local size ({local}) and grid size ({grid}) must match")]
    DimensionMismatch { local: usize, grid: usize },

    #[error("dimension {axis} of global size ({global}) does not divide by dimension {axis} of local size ({local})")]
    NotDivisible { axis: Axis, global: u64, local: u64 },

    #[error("invalid value '{value}' for --{option}")]
    InvalidValue { option: String, value: String },

    #[error("--{option} has more than three dimensions")]
    TooManyDimensions { option: String },
}

/// Launch geometry as given to the verifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub local_size: Option<Vec<LaunchDim>>,
    pub num_groups: Option<Vec<LaunchDim>>,
    pub global_size: Option<Vec<LaunchDim>>,
    pub global_offset: Option<Vec<u64>>,
}

impl LaunchOptions {
    /// Build from the raw option values, each a comma-separated list
    /// optionally wrapped in brackets (`64,4` or `[64,4]`).
    pub fn from_args(
        local_size: Option<&str>,
        num_groups: Option<&str>,
        global_size: Option<&str>,
        global_offset: Option<&str>,
    ) -> Result<Self, LaunchError> {
        let global_offset = global_offset
            .map(|s| {
                parse_dims("global_offset", s, true)?
                    .into_iter()
                    .map(|d| match d {
                        LaunchDim::Fixed(n) => Ok(n),
                        LaunchDim::Any => Err(LaunchError::InvalidValue {
                            option: "global_offset".to_string(),
                            value: "*".to_string(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Self {
            local_size: local_size
                .map(|s| parse_dims("local_size", s, false))
                .transpose()?,
            num_groups: num_groups
                .map(|s| parse_dims("num_groups", s, false))
                .transpose()?,
            global_size: global_size
                .map(|s| parse_dims("global_size", s, false))
                .transpose()?,
            global_offset,
        })
    }

    /// Parse a header line such as `//--local_size=64 --num_groups=12`.
    ///
    /// `--group_size` is accepted as a synonym for `--num_groups`; other
    /// options are ignored.
    pub fn from_header(line: &str) -> Result<Self, LaunchError> {
        let mut local_size = None;
        let mut num_groups = None;
        let mut global_size = None;
        let mut global_offset = None;

        let body = line.trim().trim_start_matches('/');
        for token in body.split_whitespace() {
            let Some((key, value)) = token.split_once('=') else {
                debug!(token, "ignoring launch option without value");
                continue;
            };
            match key {
                "--local_size" => local_size = Some(value),
                "--num_groups" | "--group_size" => num_groups = Some(value),
                "--global_size" => global_size = Some(value),
                "--global_offset" => global_offset = Some(value),
                other => debug!(option = other, "ignoring launch option"),
            }
        }

        Self::from_args(local_size, num_groups, global_size, global_offset)
    }

    /// Lower to the flag vocabulary.
    ///
    /// The local-size list selects the work-group dimensionality and the
    /// grid list (group counts or global size) the grid dimensionality;
    /// both must have the same length. A fixed global size over a fixed
    /// local size becomes a fixed group count; over a free local size it
    /// becomes a derived group count.
    pub fn to_flags(&self) -> Result<FlagSet, LaunchError> {
        let local = self
            .local_size
            .as_deref()
            .ok_or(LaunchError::MissingLocalSize)?;
        let (grid, from_global) = match (self.num_groups.as_deref(), self.global_size.as_deref()) {
            (Some(_), Some(_)) => return Err(LaunchError::GridSizeConflict),
            (None, None) => return Err(LaunchError::MissingGridSize),
            (Some(groups), None) => (groups, false),
            (None, Some(global)) => (global, true),
        };
        if local.len() != grid.len() {
            return Err(LaunchError::DimensionMismatch {
                local: local.len(),
                grid: grid.len(),
            });
        }

        let dims = local.len();
        let mut set = FlagSet::new()
            .with(format!("__{dims}D_WORK_GROUP"), true)
            .with(format!("__{dims}D_GRID"), true);

        for (axis, (&l, &g)) in Axis::ALL.into_iter().zip(local.iter().zip(grid)) {
            match l {
                LaunchDim::Fixed(n) => set.set(flags::local_size(axis), n),
                LaunchDim::Any => set.set(flags::local_size_free(axis), true),
            }
            match (g, l, from_global) {
                (LaunchDim::Fixed(n), _, false) => set.set(flags::num_groups(axis), n),
                (LaunchDim::Any, _, _) => set.set(flags::num_groups_free(axis), true),
                (LaunchDim::Fixed(global), LaunchDim::Fixed(local), true) => {
                    match global.checked_rem(local) {
                        Some(0) => set.set(flags::num_groups(axis), global / local),
                        Some(_) => {
                            return Err(LaunchError::NotDivisible {
                                axis,
                                global,
                                local,
                            });
                        }
                        None => {
                            return Err(LaunchError::InvalidValue {
                                option: "local_size".to_string(),
                                value: local.to_string(),
                            });
                        }
                    }
                }
                (LaunchDim::Fixed(global), LaunchDim::Any, true) => {
                    set.set(flags::num_groups_free(axis), true);
                    set.set(flags::global_size(axis), global);
                }
            }
        }

        for (axis, &offset) in Axis::ALL
            .into_iter()
            .zip(self.global_offset.iter().flatten())
        {
            set.set(flags::global_offset(axis), offset);
        }

        debug!(dims, flags = set.len(), "lowered launch options");
        Ok(set)
    }
}

fn parse_dims(option: &str, raw: &str, allow_zero: bool) -> Result<Vec<LaunchDim>, LaunchError> {
    let invalid = |value: &str| LaunchError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
    };

    let body = raw.trim();
    let body = body
        .strip_prefix('[')
        .and_then(|b| b.strip_suffix(']'))
        .unwrap_or(body);
    if body.trim().is_empty() {
        return Err(invalid(raw));
    }

    let dims = body
        .split(',')
        .map(str::trim)
        .map(|part| match part {
            "*" => Ok(LaunchDim::Any),
            _ => match part.parse::<u64>() {
                Ok(0) if !allow_zero => Err(invalid(part)),
                Ok(n) => Ok(LaunchDim::Fixed(n)),
                Err(_) => Err(invalid(part)),
            },
        })
        .collect::<Result<Vec<_>, _>>()?;

    if dims.len() > 3 {
        return Err(LaunchError::TooManyDimensions {
            option: option.to_string(),
        });
    }
    Ok(dims)
}
