//! External math intrinsics.
//!
//! The verifier's expression evaluator treats these as opaque functions
//! known only by name and signature. This module holds that signature
//! table ([`signatures`], [`resolve`]) plus typed Rust counterparts for
//! the few that have integer or ordering semantics worth modelling
//! ([`overloads`], [`bits`]).

pub mod bits;
mod catalogue;
pub mod overloads;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// C scalar types appearing in intrinsic signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Int,
    UInt,
    Long,
    LongLong,
    ULongLong,
    Float,
    Double,
}

impl ScalarType {
    pub const ALL: [ScalarType; 7] = [
        Self::Int,
        Self::UInt,
        Self::Long,
        Self::LongLong,
        Self::ULongLong,
        Self::Float,
        Self::Double,
    ];

    /// The C spelling, as it appears in a prototype.
    #[must_use]
    pub fn c_name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::UInt => "unsigned int",
            Self::Long => "long int",
            Self::LongLong => "long long int",
            Self::ULongLong => "unsigned long long int",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    #[must_use]
    pub fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

/// Parses a short name (`int`, `uint`, `long`, `longlong`, `ulonglong`,
/// `float`, `double`) or a C spelling.
impl FromStr for ScalarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(' ', "");
        match normalized.as_str() {
            "int" | "i32" => Ok(Self::Int),
            "uint" | "unsignedint" | "unsigned" | "u32" => Ok(Self::UInt),
            "long" | "longint" => Ok(Self::Long),
            "longlong" | "longlongint" | "i64" => Ok(Self::LongLong),
            "ulonglong" | "unsignedlonglongint" | "unsignedlonglong" | "u64" => {
                Ok(Self::ULongLong)
            }
            "float" | "f32" => Ok(Self::Float),
            "double" | "f64" => Ok(Self::Double),
            _ => Err(format!("unknown scalar type '{s}'")),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.c_name())
    }
}

/// Which table of the math library an intrinsic comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Integer,
    SinglePrecision,
    DoublePrecision,
    /// Reduced-accuracy single precision (`__sinf`, `__expf`, ...).
    FastMath,
    /// IEEE arithmetic with an explicit rounding mode suffix.
    RoundingMode,
    Overloaded,
    Cast,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Integer => "integer",
            Self::SinglePrecision => "single-precision",
            Self::DoublePrecision => "double-precision",
            Self::FastMath => "fast-math",
            Self::RoundingMode => "rounding-mode",
            Self::Overloaded => "overloaded",
            Self::Cast => "cast",
        };
        write!(f, "{s}")
    }
}

/// One intrinsic overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Intrinsic {
    pub name: &'static str,
    pub params: &'static [ScalarType],
    pub ret: ScalarType,
    pub family: Family,
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}({})", self.ret, self.name, c_names(self.params))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown intrinsic '{0}'")]
    Unknown(String),

    #[error("no overload of '{name}' takes ({})", c_names(.args))]
    NoMatchingOverload { name: String, args: Vec<ScalarType> },
}

fn c_names(types: &[ScalarType]) -> String {
    types
        .iter()
        .map(|t| t.c_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The full table.
#[must_use]
pub fn catalogue() -> &'static [Intrinsic] {
    catalogue::CATALOGUE
}

/// Every overload of `name`, in table order. Empty if unknown.
#[must_use]
pub fn signatures(name: &str) -> Vec<&'static Intrinsic> {
    catalogue::CATALOGUE
        .iter()
        .filter(|i| i.name == name)
        .collect()
}

/// The overload of `name` whose parameters are exactly `args`.
///
/// No implicit conversions are applied; the mixed-sign and mixed-width
/// `min` overloads are separate table entries.
pub fn resolve(name: &str, args: &[ScalarType]) -> Result<&'static Intrinsic, ResolveError> {
    let candidates = signatures(name);
    if candidates.is_empty() {
        return Err(ResolveError::Unknown(name.to_string()));
    }
    candidates
        .into_iter()
        .find(|i| i.params == args)
        .ok_or_else(|| ResolveError::NoMatchingOverload {
            name: name.to_string(),
            args: args.to_vec(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_nonempty() {
        assert!(catalogue().len() > 200);
        assert!(catalogue().iter().all(|i| !i.name.is_empty()));
    }

    #[test]
    fn test_no_duplicate_signatures() {
        let table = catalogue();
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                assert!(
                    !(a.name == b.name && a.params == b.params),
                    "duplicate signature: {a}"
                );
            }
        }
    }

    #[test]
    fn test_every_family_present() {
        for family in [
            Family::Integer,
            Family::SinglePrecision,
            Family::DoublePrecision,
            Family::FastMath,
            Family::RoundingMode,
            Family::Overloaded,
            Family::Cast,
        ] {
            assert!(
                catalogue().iter().any(|i| i.family == family),
                "missing family {family}"
            );
        }
    }

    #[test]
    fn test_signatures_of_min() {
        let mins = signatures("min");
        assert_eq!(mins.len(), 12);
        assert!(mins.iter().all(|i| i.family == Family::Overloaded));
    }

    #[test]
    fn test_resolve_exact() {
        let sqrtf = resolve("sqrtf", &[ScalarType::Float]).unwrap();
        assert_eq!(sqrtf.ret, ScalarType::Float);
        assert_eq!(sqrtf.to_string(), "float sqrtf(float)");

        let mixed = resolve("min", &[ScalarType::Int, ScalarType::UInt]).unwrap();
        assert_eq!(mixed.ret, ScalarType::UInt);

        let widened = resolve("min", &[ScalarType::Float, ScalarType::Double]).unwrap();
        assert_eq!(widened.ret, ScalarType::Double);
    }

    #[test]
    fn test_resolve_errors() {
        assert_eq!(
            resolve("warp_shuffle", &[]).unwrap_err(),
            ResolveError::Unknown("warp_shuffle".into())
        );
        let err = resolve("abs", &[ScalarType::Double]).unwrap_err();
        assert_eq!(err.to_string(), "no overload of 'abs' takes (double)");
    }

    #[test]
    fn test_inline_integer_helpers_listed() {
        assert_eq!(
            resolve("__ffs", &[ScalarType::Int]).unwrap().family,
            Family::Integer
        );
        assert!(resolve("__umul24", &[ScalarType::UInt, ScalarType::UInt]).is_ok());
        assert_eq!(
            resolve("__float2int_rn", &[ScalarType::Float]).unwrap().family,
            Family::Cast
        );
    }

    #[test]
    fn test_scalar_type_from_str() {
        assert_eq!("uint".parse::<ScalarType>().unwrap(), ScalarType::UInt);
        assert_eq!(
            "unsigned long long int".parse::<ScalarType>().unwrap(),
            ScalarType::ULongLong
        );
        assert_eq!("f64".parse::<ScalarType>().unwrap(), ScalarType::Double);
        assert!("half".parse::<ScalarType>().is_err());
        for ty in ScalarType::ALL {
            assert_eq!(ty.c_name().parse::<ScalarType>().unwrap(), ty);
        }
    }
}
