//! Yes/no decisions seeded by the day and the question text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rng::SplitMix64;
use crate::seed::{Seed, string_seed};

/// A binary answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum YesNo {
    /// Affirmative.
    Yes,
    /// Negative.
    No,
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::No => write!(f, "NO"),
        }
    }
}

/// The outcome of a yes/no consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResult {
    /// When the question was asked.
    pub decided_at: DateTime<Utc>,
    /// The question, if one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// The answer.
    pub result: YesNo,
}

/// Seed for a question asked on the day with seed `day`.
///
/// A missing question hashes like the empty string.
pub fn decision_seed(day: Seed, question: Option<&str>) -> Seed {
    day.combine(string_seed(question.unwrap_or_default()))
}

/// Answer a question: one roll below 0.5 is yes.
pub fn decide(day: Seed, question: Option<&str>) -> YesNo {
    let mut rng = SplitMix64::new(decision_seed(day, question));
    if rng.next_unit() < 0.5 {
        YesNo::Yes
    } else {
        YesNo::No
    }
}
