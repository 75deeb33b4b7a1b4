//! Seed derivation from calendar days and free text.
//!
//! A day maps to the digit encoding `year * 10000 + month * 100 + day`, so
//! distinct days never collide and any time within a day yields the same
//! seed. Text is hashed with 64-bit FNV-1a. Both combine through a fixed
//! LCG-style mix rather than addition.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Multiplier applied to the first seed in [`Seed::combine`].
pub const COMBINE_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Additive constant in [`Seed::combine`] (the 64-bit golden ratio).
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// An opaque 64-bit generator seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u64);

impl Seed {
    /// The raw seed value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Mix two seeds: `self * C1 + other + C2 (mod 2^64)`.
    ///
    /// Not commutative. Day seeds go first, text seeds second.
    pub fn combine(self, other: Seed) -> Seed {
        Seed(
            self.0
                .wrapping_mul(COMBINE_MULTIPLIER)
                .wrapping_add(other.0)
                .wrapping_add(GOLDEN_GAMMA),
        )
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Encode a civil date as `year * 10000 + month * 100 + day`.
///
/// Years before 1 CE are reinterpreted as unsigned and wrap, matching
/// the unsigned arithmetic every implementation uses.
pub fn day_seed_from_date(date: NaiveDate) -> Seed {
    let year = date.year() as u64;
    let month = u64::from(date.month());
    let day = u64::from(date.day());
    Seed(
        year.wrapping_mul(10_000)
            .wrapping_add(month * 100)
            .wrapping_add(day),
    )
}

/// Seed for the civil day containing `instant` in the given calendar.
pub fn day_seed<Tz: TimeZone>(instant: &DateTime<Utc>, calendar: &Tz) -> Seed {
    day_seed_from_date(civil_date(instant, calendar))
}

/// The civil date of `instant` as seen in `calendar`.
pub fn civil_date<Tz: TimeZone>(instant: &DateTime<Utc>, calendar: &Tz) -> NaiveDate {
    instant.with_timezone(calendar).date_naive()
}

/// FNV-1a hash of the text's UTF-16 code units.
///
/// The empty string hashes to the offset basis.
pub fn string_seed(text: &str) -> Seed {
    let hash = text.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u64::from(unit)).wrapping_mul(FNV_PRIME)
    });
    Seed(hash)
}
