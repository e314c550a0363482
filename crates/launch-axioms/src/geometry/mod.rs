pub mod flags;
mod lint;
mod types;
mod validator;

pub use flags::{ConfigFile, FlagSet, FlagValue, parse_flags, parse_flags_str};
pub use lint::lint_flags;
pub use types::*;
pub use validator::validate_flags;
