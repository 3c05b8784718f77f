//! Match configuration.
//!
//! Historical iterations of this game disagree on which half of the board
//! is capture-eligible and how the board is oriented for display. Both are
//! match-setup configuration here, with defaults matching the classic rules: the
//! lower half is home and prints first.

use serde::{Deserialize, Serialize};

/// Which contiguous half of a row is the player's home half.
///
/// The home half is capture-eligible and decides the half-empty lose
/// condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeHalf {
    /// Indices `[0, len/2)`.
    #[default]
    Lower,
    /// Indices `[len/2, len)`.
    Upper,
}

impl HomeHalf {
    /// The index range of the home half for a row of length `len`.
    #[must_use]
    pub fn range(self, len: usize) -> std::ops::Range<usize> {
        match self {
            HomeHalf::Lower => 0..len / 2,
            HomeHalf::Upper => len / 2..len,
        }
    }

    /// Check if `index` lies in the home half of a row of length `len`.
    #[must_use]
    pub fn contains(self, index: usize, len: usize) -> bool {
        self.range(len).contains(&index)
    }
}

/// Display orientation of a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Home half printed first.
    #[default]
    HomeAtTop,
    /// Far half printed first.
    HomeAtBottom,
}

/// Which side moves first after setup or reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartingSide {
    /// The first side always starts.
    #[default]
    SideA,
    /// The second side always starts.
    SideB,
    /// Chosen by the match RNG (seeded, deterministic).
    Random,
}

/// Initial stone distribution for both rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardLayout {
    /// 16 pits, 2 stones each, with an empty central gap at indices 4..8.
    #[default]
    Canonical,
    /// An explicit count list (must be even-length and hold at least 2).
    Custom(Vec<u32>),
}

impl BoardLayout {
    /// The pit counts this layout describes.
    #[must_use]
    pub fn counts(&self) -> Vec<u32> {
        match self {
            BoardLayout::Canonical => (0..16).map(|i| if (4..8).contains(&i) { 0 } else { 2 }).collect(),
            BoardLayout::Custom(counts) => counts.clone(),
        }
    }
}

/// Match setup: board layout, capture eligibility, orientation, start rule.
///
/// Built with chained `with_*` methods:
///
/// ```
/// use kalaha_engine::core::{MatchConfig, StartingSide};
///
/// let config = MatchConfig::new()
///     .with_seed(42)
///     .with_starting_side(StartingSide::Random);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Initial stone distribution for both rows.
    pub layout: BoardLayout,

    /// Capture-eligible half.
    pub home_half: HomeHalf,

    /// Display orientation.
    pub orientation: Orientation,

    /// Which side moves first.
    pub starting_side: StartingSide,

    /// RNG seed (starting-side selection).
    pub seed: u64,
}

impl MatchConfig {
    /// Create a configuration with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board layout.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the capture-eligible half.
    #[must_use]
    pub fn with_home_half(mut self, home_half: HomeHalf) -> Self {
        self.home_half = home_half;
        self
    }

    /// Set the display orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the starting-side rule.
    #[must_use]
    pub fn with_starting_side(mut self, starting_side: StartingSide) -> Self {
        self.starting_side = starting_side;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_half_ranges() {
        assert_eq!(HomeHalf::Lower.range(16), 0..8);
        assert_eq!(HomeHalf::Upper.range(16), 8..16);

        assert!(HomeHalf::Lower.contains(0, 16));
        assert!(HomeHalf::Lower.contains(7, 16));
        assert!(!HomeHalf::Lower.contains(8, 16));

        assert!(HomeHalf::Upper.contains(8, 16));
        assert!(!HomeHalf::Upper.contains(7, 16));
        assert!(!HomeHalf::Upper.contains(16, 16));
    }

    #[test]
    fn test_canonical_layout() {
        let counts = BoardLayout::Canonical.counts();

        assert_eq!(counts.len(), 16);
        assert_eq!(
            counts,
            vec![2, 2, 2, 2, 0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 2, 2]
        );
    }

    #[test]
    fn test_custom_layout() {
        let counts = BoardLayout::Custom(vec![3, 3, 3, 3]).counts();
        assert_eq!(counts, vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_layout(BoardLayout::Custom(vec![2, 2]))
            .with_home_half(HomeHalf::Upper)
            .with_orientation(Orientation::HomeAtBottom)
            .with_starting_side(StartingSide::SideB)
            .with_seed(7);

        assert_eq!(config.layout, BoardLayout::Custom(vec![2, 2]));
        assert_eq!(config.home_half, HomeHalf::Upper);
        assert_eq!(config.orientation, Orientation::HomeAtBottom);
        assert_eq!(config.starting_side, StartingSide::SideB);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_default_configuration() {
        let config = MatchConfig::default();

        assert_eq!(config.layout, BoardLayout::Canonical);
        assert_eq!(config.home_half, HomeHalf::Lower);
        assert_eq!(config.orientation, Orientation::HomeAtTop);
        assert_eq!(config.starting_side, StartingSide::SideA);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::new().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
