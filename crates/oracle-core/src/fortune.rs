//! Fortune levels and the weighted fortune-stick draw.
//!
//! The level table is an ordered list of weighted outcomes. A draw takes
//! one roll to walk the cumulative weights and a second roll to choose a
//! copy-text variant from the selected level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::rng::SplitMix64;

/// Maximum absolute distance between the summed weights and 1.0.
pub const PROBABILITY_TOLERANCE: f64 = 1e-4;

/// Stable identifier of a fortune level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FortuneLevelKey {
    /// The rarest, best result.
    Ultra,
    /// A strong result.
    Super,
    /// The everyday result.
    Basic,
    /// A mildly bad result.
    Glitch,
    /// The rarest, worst result.
    Error,
}

impl FortuneLevelKey {
    /// All keys in table order.
    pub const ALL: [FortuneLevelKey; 5] = [
        Self::Ultra,
        Self::Super,
        Self::Basic,
        Self::Glitch,
        Self::Error,
    ];

    /// Whether the level calls for the emphatic presentation.
    pub fn is_special(self) -> bool {
        matches!(self, Self::Ultra | Self::Error)
    }
}

impl std::fmt::Display for FortuneLevelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ultra => write!(f, "ULTRA"),
            Self::Super => write!(f, "SUPER"),
            Self::Basic => write!(f, "BASIC"),
            Self::Glitch => write!(f, "GLITCH"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// One weighted outcome of a fortune draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneLevel {
    /// Stable identifier.
    pub key: FortuneLevelKey,
    /// Display label.
    pub label: String,
    /// Display emoji.
    pub emoji: String,
    /// Weight in (0, 1].
    pub probability: f64,
    /// Display colour, usually `#RRGGBB`.
    pub color: String,
    /// Presentation style name.
    pub style: String,
    /// Copy-text variants; one is picked per draw.
    pub copy_examples: Vec<String>,
    /// Haptic feedback category.
    pub haptics: String,
    /// Whether copy is written tongue-in-cheek.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humorize: Option<bool>,
}

/// Watch face colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchFaceTheme {
    /// Background colour.
    pub background: String,
    /// Colour of the time readout.
    pub time_primary: String,
    /// Colour of the highlighted date.
    pub date_highlight: String,
}

/// Optional theme metadata shipped with the level table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneThemes {
    /// Primary palette.
    pub primary: Vec<String>,
    /// Watch face colours.
    pub watch_face: WatchFaceTheme,
}

/// The level table document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneLevelsConfig {
    /// Content version.
    pub version: String,
    /// Content locale, e.g. `zh-CN`.
    pub locale: String,
    /// Ordered levels; order decides how cumulative weights are walked.
    pub levels: Vec<FortuneLevel>,
    /// Free-text description of the intended distribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_note: Option<String>,
    /// Theme metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes: Option<FortuneThemes>,
}

impl FortuneLevelsConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sum of all level weights, accumulated in table order.
    pub fn probability_sum(&self) -> f64 {
        self.levels
            .iter()
            .fold(0.0, |sum, level| sum + level.probability)
    }

    /// Check that the weights sum to 1.0 within [`PROBABILITY_TOLERANCE`],
    /// that every weight lies in (0, 1], and that every level has copy text.
    pub fn validate(&self) -> ConfigResult<()> {
        let sum = self.probability_sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(ConfigError::InvalidProbabilities { sum });
        }
        for level in &self.levels {
            // NaN fails both comparisons.
            let in_range = level.probability > 0.0 && level.probability <= 1.0;
            if !in_range {
                return Err(ConfigError::InvalidLevelProbability {
                    key: level.key,
                    probability: level.probability,
                });
            }
            if level.copy_examples.is_empty() {
                return Err(ConfigError::EmptyCopyExamples { key: level.key });
            }
        }
        Ok(())
    }

    /// Look up a level by key.
    pub fn level(&self, key: FortuneLevelKey) -> Option<&FortuneLevel> {
        self.levels.iter().find(|level| level.key == key)
    }
}

/// Where a roll landed in the level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPick {
    /// Index into the level list.
    pub index: usize,
    /// True when the roll exceeded every cumulative sum and the last level
    /// was taken instead.
    pub fell_back: bool,
}

/// Walk the cumulative weights and return the first level whose running
/// sum is at least `roll`. Ties go to the earlier level.
///
/// Weights summing to slightly less than 1.0 leave a tail of rolls above
/// the final sum; those land on the last level. Returns `None` only for an
/// empty table.
pub fn level_for_roll(levels: &[FortuneLevel], roll: f64) -> Option<LevelPick> {
    let mut cumulative = 0.0;
    for (index, level) in levels.iter().enumerate() {
        cumulative += level.probability;
        if roll <= cumulative {
            return Some(LevelPick {
                index,
                fell_back: false,
            });
        }
    }
    levels.len().checked_sub(1).map(|index| LevelPick {
        index,
        fell_back: true,
    })
}

/// Draw one roll and pick a level from it.
pub fn pick_level<'a>(
    levels: &'a [FortuneLevel],
    rng: &mut SplitMix64,
) -> Option<&'a FortuneLevel> {
    let roll = rng.next_unit();
    let pick = level_for_roll(levels, roll)?;
    if pick.fell_back {
        log::warn!(
            "roll {roll} exceeded cumulative weights; using last level {}",
            levels[pick.index].key
        );
    }
    levels.get(pick.index)
}

/// Index of the copy variant for `roll`, clamped to `[0, count - 1]`.
pub fn copy_index_for_roll(count: usize, roll: f64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let scaled = (roll * count as f64).floor();
    // Negative or NaN rolls saturate to 0 in the cast.
    Some((scaled as usize).min(count - 1))
}

/// Draw one roll and pick a copy variant. Empty variant lists yield "".
pub fn pick_copy<'a>(level: &'a FortuneLevel, rng: &mut SplitMix64) -> &'a str {
    if level.copy_examples.is_empty() {
        return "";
    }
    let roll = rng.next_unit();
    copy_index_for_roll(level.copy_examples.len(), roll)
        .and_then(|index| level.copy_examples.get(index))
        .map_or("", String::as_str)
}

/// The result of a fortune-stick draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneDraw {
    /// When the draw happened.
    pub drawn_at: DateTime<Utc>,
    /// The selected level.
    pub level: FortuneLevel,
    /// The selected copy text.
    pub copy: String,
}
