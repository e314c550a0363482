use serde::{Deserialize, Serialize};

/// One of the three launch axes.
///
/// Displays as its numeric index so that rendered quantities read
/// `local_size(0)`, `num_groups(2)` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Number of axes a work group or grid spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensionality {
    One,
    Two,
    Three,
}

impl Dimensionality {
    pub const ALL: [Dimensionality; 3] = [Self::One, Self::Two, Self::Three];

    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    #[must_use]
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// Whether `axis` lies inside this dimensionality.
    #[must_use]
    pub fn spans(self, axis: Axis) -> bool {
        axis.index() < self.count()
    }
}

impl From<Dimensionality> for u8 {
    fn from(dim: Dimensionality) -> Self {
        // count() is at most 3
        dim.count() as u8
    }
}

impl TryFrom<u8> for Dimensionality {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_count(usize::from(value))
            .ok_or_else(|| format!("dimensionality must be 1, 2 or 3, got {value}"))
    }
}

impl std::fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}D", self.count())
    }
}

/// Which dimensionality selector family a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionSubject {
    WorkGroup,
    Grid,
}

impl DimensionSubject {
    /// The three selector flags of this family, in 1-D, 2-D, 3-D order.
    #[must_use]
    pub fn selector_names(self) -> [&'static str; 3] {
        match self {
            Self::WorkGroup => ["__1D_WORK_GROUP", "__2D_WORK_GROUP", "__3D_WORK_GROUP"],
            Self::Grid => ["__1D_GRID", "__2D_GRID", "__3D_GRID"],
        }
    }

    #[must_use]
    pub fn selector_name(self, dim: Dimensionality) -> &'static str {
        self.selector_names()[dim.count() - 1]
    }
}

impl std::fmt::Display for DimensionSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::WorkGroup => "work-group",
            Self::Grid => "grid",
        };
        write!(f, "{s}")
    }
}

/// Which per-axis size quantity a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeQuantity {
    LocalSize,
    NumGroups,
}

impl std::fmt::Display for SizeQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::LocalSize => "local-size",
            Self::NumGroups => "num-groups",
        };
        write!(f, "{s}")
    }
}

/// Selector for the work-group size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalSize {
    #[default]
    Unconstrained,
    Fixed(u64),
    FreePositive,
}

/// Selector for the number of work groups along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumGroups {
    #[default]
    Unconstrained,
    Fixed(u64),
    FreePositive,
    /// Group count is `global_size / local_size`, with the global size
    /// known and the local size required to divide it.
    DerivedFromGlobalSize(u64),
}

/// Validated launch geometry for one compiled kernel variant.
///
/// Built once by [`validate_flags`](super::validate_flags) (or directly,
/// where the typed selectors already rule out per-axis conflicts) and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryConfig {
    pub work_group_dim: Dimensionality,
    pub grid_dim: Dimensionality,
    #[serde(default)]
    pub local_size: [LocalSize; 3],
    #[serde(default)]
    pub num_groups: [NumGroups; 3],
    #[serde(default)]
    pub global_offset: [u64; 3],
}

impl GeometryConfig {
    /// A configuration with the given dimensionalities, every size
    /// selector unconstrained and every offset zero.
    #[must_use]
    pub fn new(work_group_dim: Dimensionality, grid_dim: Dimensionality) -> Self {
        Self {
            work_group_dim,
            grid_dim,
            local_size: [LocalSize::Unconstrained; 3],
            num_groups: [NumGroups::Unconstrained; 3],
            global_offset: [0; 3],
        }
    }

    #[must_use]
    pub fn with_local_size(mut self, axis: Axis, local_size: LocalSize) -> Self {
        self.local_size[axis.index()] = local_size;
        self
    }

    #[must_use]
    pub fn with_num_groups(mut self, axis: Axis, num_groups: NumGroups) -> Self {
        self.num_groups[axis.index()] = num_groups;
        self
    }

    #[must_use]
    pub fn with_global_offset(mut self, axis: Axis, offset: u64) -> Self {
        self.global_offset[axis.index()] = offset;
        self
    }

    #[must_use]
    pub fn local_size(&self, axis: Axis) -> LocalSize {
        self.local_size[axis.index()]
    }

    #[must_use]
    pub fn num_groups(&self, axis: Axis) -> NumGroups {
        self.num_groups[axis.index()]
    }

    #[must_use]
    pub fn global_offset(&self, axis: Axis) -> u64 {
        self.global_offset[axis.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_index_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), Some(axis));
        }
        assert_eq!(Axis::from_index(3), None);
        assert_eq!(Axis::Z.to_string(), "2");
    }

    #[test]
    fn dimensionality_spans_leading_axes() {
        assert!(Dimensionality::One.spans(Axis::X));
        assert!(!Dimensionality::One.spans(Axis::Y));
        assert!(Dimensionality::Two.spans(Axis::Y));
        assert!(!Dimensionality::Two.spans(Axis::Z));
        assert!(Dimensionality::Three.spans(Axis::Z));
    }

    #[test]
    fn dimensionality_display_and_count() {
        assert_eq!(Dimensionality::Two.to_string(), "2D");
        assert_eq!(Dimensionality::from_count(0), None);
        assert_eq!(Dimensionality::from_count(3), Some(Dimensionality::Three));
        assert!(Dimensionality::try_from(4u8).is_err());
    }

    #[test]
    fn selector_names_by_dimension() {
        assert_eq!(
            DimensionSubject::Grid.selector_name(Dimensionality::Two),
            "__2D_GRID"
        );
        assert_eq!(
            DimensionSubject::WorkGroup.selector_name(Dimensionality::Three),
            "__3D_WORK_GROUP"
        );
    }

    #[test]
    fn new_config_defaults() {
        let config = GeometryConfig::new(Dimensionality::One, Dimensionality::Two);
        for axis in Axis::ALL {
            assert_eq!(config.local_size(axis), LocalSize::Unconstrained);
            assert_eq!(config.num_groups(axis), NumGroups::Unconstrained);
            assert_eq!(config.global_offset(axis), 0);
        }
    }

    #[test]
    fn builder_sets_axis_values() {
        let config = GeometryConfig::new(Dimensionality::Two, Dimensionality::Two)
            .with_local_size(Axis::Y, LocalSize::Fixed(16))
            .with_num_groups(Axis::X, NumGroups::DerivedFromGlobalSize(1024))
            .with_global_offset(Axis::Z, 7);
        assert_eq!(config.local_size(Axis::Y), LocalSize::Fixed(16));
        assert_eq!(
            config.num_groups(Axis::X),
            NumGroups::DerivedFromGlobalSize(1024)
        );
        assert_eq!(config.global_offset(Axis::Z), 7);
    }

    #[test]
    fn config_serializes_dimensionality_as_count() {
        let config = GeometryConfig::new(Dimensionality::Three, Dimensionality::One);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"work_group_dim\":3"));
        assert!(json.contains("\"grid_dim\":1"));
    }
}
