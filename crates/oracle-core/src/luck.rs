//! Daily luck: four metrics, each assigned one of four tiers.
//!
//! A single generator seeded from the day drives all four metrics in the
//! fixed order Love, Money, Career, Health. Each tier comes from an
//! Irwin-Hall approximation to a standard normal (twelve uniforms minus
//! six) cut at fixed thresholds.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rng::SplitMix64;
use crate::seed::Seed;

/// Scores at or above this are [`LuckTier::Great`].
pub const GREAT_THRESHOLD: f64 = 1.15;
/// Scores at or above this are [`LuckTier::Good`].
pub const GOOD_THRESHOLD: f64 = 0.05;
/// Scores at or above this are [`LuckTier::Ok`]; anything lower is Bad.
pub const OK_THRESHOLD: f64 = -1.15;

/// Number of uniforms summed per score.
const IRWIN_HALL_TERMS: usize = 12;

/// A life area scored by the daily luck reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LuckMetric {
    /// Romance and relationships.
    Love,
    /// Finances.
    Money,
    /// Work.
    Career,
    /// Wellbeing.
    Health,
}

impl LuckMetric {
    /// All metrics in sampling order. Reordering changes every reading.
    pub const ALL: [LuckMetric; 4] = [Self::Love, Self::Money, Self::Career, Self::Health];

    /// Position in [`LuckMetric::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Love => 0,
            Self::Money => 1,
            Self::Career => 2,
            Self::Health => 3,
        }
    }
}

impl std::fmt::Display for LuckMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Love => write!(f, "Love"),
            Self::Money => write!(f, "Money"),
            Self::Career => write!(f, "Career"),
            Self::Health => write!(f, "Health"),
        }
    }
}

/// How favourable a tier is, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// The best outcome.
    Best,
    /// Above average.
    Favourable,
    /// Unremarkable.
    Neutral,
    /// The worst outcome.
    Unfavourable,
}

/// The tier assigned to one metric.
///
/// Intentionally unordered: the wire rank puts Great at 1 and Bad at 4, so
/// a derived ordering would read "Great < Bad". Use [`LuckTier::rank`] for
/// the wire value and [`LuckTier::quality`] for meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LuckTier {
    /// Rank 1.
    Great,
    /// Rank 2.
    Good,
    /// Rank 3.
    Ok,
    /// Rank 4.
    Bad,
}

impl LuckTier {
    /// All tiers, by rank.
    pub const ALL: [LuckTier; 4] = [Self::Great, Self::Good, Self::Ok, Self::Bad];

    /// Wire rank, 1 (Great) through 4 (Bad).
    pub fn rank(self) -> u8 {
        match self {
            Self::Great => 1,
            Self::Good => 2,
            Self::Ok => 3,
            Self::Bad => 4,
        }
    }

    /// Inverse of [`LuckTier::rank`].
    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Great),
            2 => Some(Self::Good),
            3 => Some(Self::Ok),
            4 => Some(Self::Bad),
            _ => None,
        }
    }

    /// What the tier means for the reader.
    pub fn quality(self) -> Quality {
        match self {
            Self::Great => Quality::Best,
            Self::Good => Quality::Favourable,
            Self::Ok => Quality::Neutral,
            Self::Bad => Quality::Unfavourable,
        }
    }
}

impl From<LuckTier> for u8 {
    fn from(tier: LuckTier) -> Self {
        tier.rank()
    }
}

impl TryFrom<u8> for LuckTier {
    type Error = String;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::from_rank(rank).ok_or_else(|| format!("invalid luck tier rank: {rank}"))
    }
}

impl std::fmt::Display for LuckTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Great => write!(f, "Great"),
            Self::Good => write!(f, "Good"),
            Self::Ok => write!(f, "Ok"),
            Self::Bad => write!(f, "Bad"),
        }
    }
}

/// Map an approximately normal score to a tier.
pub fn tier_for_score(score: f64) -> LuckTier {
    if score >= GREAT_THRESHOLD {
        LuckTier::Great
    } else if score >= GOOD_THRESHOLD {
        LuckTier::Good
    } else if score >= OK_THRESHOLD {
        LuckTier::Ok
    } else {
        LuckTier::Bad
    }
}

/// Sum of twelve unit draws minus six: mean 0, variance 1, range [-6, 6].
pub fn approximate_normal(rng: &mut SplitMix64) -> f64 {
    let sum: f64 = (0..IRWIN_HALL_TERMS).map(|_| rng.next_unit()).sum();
    sum - 6.0
}

/// Draw one tier from the stream.
pub fn sample_tier(rng: &mut SplitMix64) -> LuckTier {
    tier_for_score(approximate_normal(rng))
}

/// A day's luck reading.
///
/// Holds exactly one tier per metric. On the wire the tiers form a
/// `metrics` object keyed by metric name; payloads missing a metric are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireDailyLuck", try_from = "WireDailyLuck")]
pub struct DailyLuck {
    /// The civil day the reading is for.
    pub date: NaiveDate,
    tiers: [LuckTier; 4],
}

impl DailyLuck {
    /// A reading from one tier per metric, in [`LuckMetric::ALL`] order.
    pub fn new(date: NaiveDate, tiers: [LuckTier; 4]) -> Self {
        Self { date, tiers }
    }

    /// Generate the reading for `date` from `seed`, consuming one stream in
    /// [`LuckMetric::ALL`] order.
    pub fn generate(date: NaiveDate, seed: Seed) -> Self {
        let mut rng = SplitMix64::new(seed);
        let tiers = LuckMetric::ALL.map(|_| sample_tier(&mut rng));
        log::debug!("daily luck for {date} from seed {seed}");
        Self { date, tiers }
    }

    /// The tier for a metric.
    pub fn tier(&self, metric: LuckMetric) -> LuckTier {
        self.tiers[metric.index()]
    }

    /// Every metric with its tier, in [`LuckMetric::ALL`] order.
    pub fn metrics(&self) -> impl Iterator<Item = (LuckMetric, LuckTier)> + '_ {
        LuckMetric::ALL.into_iter().zip(self.tiers)
    }
}

/// Wire form of [`DailyLuck`].
#[derive(Serialize, Deserialize)]
struct WireDailyLuck {
    date: NaiveDate,
    metrics: BTreeMap<LuckMetric, LuckTier>,
}

impl From<DailyLuck> for WireDailyLuck {
    fn from(luck: DailyLuck) -> Self {
        Self {
            date: luck.date,
            metrics: luck.metrics().collect(),
        }
    }
}

impl TryFrom<WireDailyLuck> for DailyLuck {
    type Error = String;

    fn try_from(wire: WireDailyLuck) -> Result<Self, Self::Error> {
        let mut tiers = [LuckTier::Ok; 4];
        for metric in LuckMetric::ALL {
            tiers[metric.index()] = *wire
                .metrics
                .get(&metric)
                .ok_or_else(|| format!("daily luck for {} is missing {metric}", wire.date))?;
        }
        Ok(Self::new(wire.date, tiers))
    }
}
