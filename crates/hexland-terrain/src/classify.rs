//! Material classification of tiles by height and, optionally, distance from center.

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Material band of a tile. Every sampled tile gets exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialClass {
    /// Highest band.
    Snow,
    /// Middle band.
    Rock,
    /// Low band and fallback.
    Grass,
}

impl MaterialClass {
    /// All classes in surface order.
    pub const ALL: [MaterialClass; 3] = [
        MaterialClass::Snow,
        MaterialClass::Rock,
        MaterialClass::Grass,
    ];

    /// Position of this class in [`MaterialClass::ALL`].
    pub const fn index(self) -> usize {
        match self {
            MaterialClass::Snow => 0,
            MaterialClass::Rock => 1,
            MaterialClass::Grass => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MaterialClass::Snow => "snow",
            MaterialClass::Rock => "rock",
            MaterialClass::Grass => "grass",
        }
    }
}

impl std::fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Height cutoffs. Comparisons are strict: a tile exactly on a threshold
/// falls into the lower class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassThresholds {
    /// `height > snow` qualifies for Snow.
    pub snow: f64,
    /// `height > rock` qualifies for Rock.
    pub rock: f64,
}

impl Default for ClassThresholds {
    fn default() -> Self {
        Self {
            snow: 22.0,
            rock: 3.0,
        }
    }
}

/// Whether material also depends on distance from the mountain center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ClassificationMode {
    /// Height alone decides the class.
    #[default]
    HeightOnly,
    /// Snow also needs `distance < inner_radius`, Rock needs `distance < mid_radius`.
    HeightAndDistance { inner_radius: f64, mid_radius: f64 },
}

impl ClassificationMode {
    /// Distance gates used by the round and side mountain presets.
    pub const fn mountain_gates() -> Self {
        ClassificationMode::HeightAndDistance {
            inner_radius: 13.0,
            mid_radius: 17.0,
        }
    }

    pub fn needs_distance(&self) -> bool {
        matches!(self, ClassificationMode::HeightAndDistance { .. })
    }
}

/// Assigns a [`MaterialClass`] to a sampled tile.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TileClassifier {
    pub thresholds: ClassThresholds,
    pub mode: ClassificationMode,
}

impl TileClassifier {
    /// Build a classifier, rejecting contradictory thresholds or gates.
    pub fn new(
        thresholds: ClassThresholds,
        mode: ClassificationMode,
    ) -> Result<Self, TerrainError> {
        let classifier = Self { thresholds, mode };
        classifier.validate()?;
        Ok(classifier)
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        let ClassThresholds { snow, rock } = self.thresholds;
        if snow.is_nan() || rock.is_nan() || snow < rock {
            return Err(TerrainError::InvalidThresholds { rock, snow });
        }
        if let ClassificationMode::HeightAndDistance {
            inner_radius,
            mid_radius,
        } = self.mode
            && !(inner_radius >= 0.0 && mid_radius >= inner_radius)
        {
            return Err(TerrainError::InvalidRadii {
                inner: inner_radius,
                mid: mid_radius,
            });
        }
        Ok(())
    }

    /// Classify a tile. Grass is the fallback, so the result is total.
    ///
    /// In distance-gated mode a missing `distance` fails both gates.
    pub fn classify(&self, height: f64, distance: Option<f64>) -> MaterialClass {
        let (snow_gate, rock_gate) = match self.mode {
            ClassificationMode::HeightOnly => (true, true),
            ClassificationMode::HeightAndDistance {
                inner_radius,
                mid_radius,
            } => match distance {
                Some(d) => (d < inner_radius, d < mid_radius),
                None => (false, false),
            },
        };

        if height > self.thresholds.snow && snow_gate {
            MaterialClass::Snow
        } else if height > self.thresholds.rock && rock_gate {
            MaterialClass::Rock
        } else {
            MaterialClass::Grass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn height_only() -> TileClassifier {
        TileClassifier::new(ClassThresholds::default(), ClassificationMode::HeightOnly).unwrap()
    }

    #[test]
    fn test_height_bands() {
        let c = height_only();
        assert_eq!(c.classify(30.0, None), MaterialClass::Snow);
        assert_eq!(c.classify(10.0, None), MaterialClass::Rock);
        assert_eq!(c.classify(1.0, None), MaterialClass::Grass);
        assert_eq!(c.classify(0.0, None), MaterialClass::Grass);
    }

    #[test]
    fn test_strict_threshold_boundaries() {
        let c = height_only();
        assert_eq!(c.classify(3.0, None), MaterialClass::Grass);
        assert_eq!(c.classify(22.0, None), MaterialClass::Rock);
        assert_eq!(c.classify(22.000_001, None), MaterialClass::Snow);
    }

    #[test]
    fn test_distance_gates_demote_far_tiles() {
        let c = TileClassifier::new(
            ClassThresholds::default(),
            ClassificationMode::mountain_gates(),
        )
        .unwrap();
        assert_eq!(c.classify(30.0, Some(5.0)), MaterialClass::Snow);
        assert_eq!(c.classify(30.0, Some(13.0)), MaterialClass::Rock);
        assert_eq!(c.classify(30.0, Some(17.0)), MaterialClass::Grass);
        assert_eq!(c.classify(10.0, Some(16.9)), MaterialClass::Rock);
        assert_eq!(c.classify(30.0, None), MaterialClass::Grass);
    }

    #[test]
    fn test_height_only_ignores_distance() {
        let c = height_only();
        assert_eq!(c.classify(30.0, Some(1000.0)), MaterialClass::Snow);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let result = TileClassifier::new(
            ClassThresholds {
                snow: 2.0,
                rock: 3.0,
            },
            ClassificationMode::HeightOnly,
        );
        assert!(matches!(result, Err(TerrainError::InvalidThresholds { .. })));
    }

    #[test]
    fn test_inverted_radii_rejected() {
        let result = TileClassifier::new(
            ClassThresholds::default(),
            ClassificationMode::HeightAndDistance {
                inner_radius: 20.0,
                mid_radius: 10.0,
            },
        );
        assert!(matches!(result, Err(TerrainError::InvalidRadii { .. })));
    }

    #[test]
    fn test_class_index_matches_all_order() {
        for (i, class) in MaterialClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
        assert_eq!(MaterialClass::Rock.to_string(), "rock");
    }
}
