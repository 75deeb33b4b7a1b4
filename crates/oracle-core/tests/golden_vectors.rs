//! Pinned reference outputs.
//!
//! Every implementation of the oracle must reproduce these values exactly.
//! If one of these fails, outcomes have changed for real users.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use oracle_core::seed::{day_seed_from_date, string_seed};
use oracle_core::{
    ConfigLoader, FortuneLevelKey, LuckMetric, LuckTier, OracleEngine, Seed, SplitMix64, YesNo,
};

fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn engine() -> OracleEngine {
    OracleEngine::new(ConfigLoader::bundled().load_shared().unwrap())
}

// ---------------------------------------------------------------------------
// seeds
// ---------------------------------------------------------------------------

#[test]
fn day_encoding() {
    let seed = day_seed_from_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(seed, Seed(20_250_101));
}

#[test]
fn text_seed_and_combination() {
    let text = string_seed("吃什么");
    assert_eq!(text.value(), 0xb812_d6b3_e7d9_18fa);
    assert_eq!(Seed(20_250_101).combine(text).value(), 0xa189_e854_7309_c420);
}

/// The HTTP service seeds its FNV walk from the decimal literal
/// 1469598103934665603 (0x14650fb0739d0383) instead of the standard offset
/// basis, so its text seeds differ from these. Keep the standard basis.
#[test]
fn text_seed_uses_standard_offset_basis() {
    const SERVICE_BASIS: u64 = 1_469_598_103_934_665_603;
    assert_eq!(string_seed("").value(), 0xcbf2_9ce4_8422_2325);
    assert_ne!(string_seed("").value(), SERVICE_BASIS);
    assert_eq!(string_seed("lunch?").value(), 0x26be_3d2a_1e72_6620);
    // Same text hashed from the service's basis.
    assert_ne!(string_seed("lunch?").value(), 0xf2fd_d445_8da9_b9ba);
    assert_ne!(string_seed("吃什么").value(), 0xd4ec_1deb_db6b_0d18);
}

// ---------------------------------------------------------------------------
// generator
// ---------------------------------------------------------------------------

#[test]
fn first_outputs_for_new_year_2025() {
    let mut rng = SplitMix64::new(Seed(20_250_101));
    assert_eq!(rng.next_u64(), 0xac32_ff5a_c20f_b509);
    assert_eq!(rng.next_u64(), 0x391b_718d_40e5_e687);
    assert_eq!(rng.next_u64(), 0xbe2f_c9d2_ec73_29f0);
    assert_eq!(rng.next_u64(), 0x7e71_f016_a465_a18d);
}

#[test]
fn first_unit_for_new_year_2025() {
    let mut rng = SplitMix64::new(Seed(20_250_101));
    assert_eq!(rng.next_unit(), 0.672_653_159_768_798_4);
}

// ---------------------------------------------------------------------------
// daily luck
// ---------------------------------------------------------------------------

#[test]
fn daily_luck_readings() {
    use LuckTier::{Good, Great};
    let ok = LuckTier::Ok;
    let cases = [
        ((2025, 1, 1), [Good, Good, ok, ok]),
        ((2024, 2, 29), [Good, ok, Good, Great]),
        ((2023, 11, 14), [ok, Good, Good, ok]),
        ((2025, 6, 15), [Good, ok, ok, ok]),
    ];
    let engine = engine();
    for ((y, m, d), expected) in cases {
        let luck = engine.daily_luck(noon(y, m, d));
        for (metric, tier) in LuckMetric::ALL.iter().zip(expected) {
            assert_eq!(luck.tier(*metric), tier, "{y}-{m}-{d} {metric}");
        }
    }
}

#[test]
fn bad_tier_is_reachable() {
    // Sanity check that the pinned readings above are not hiding a tier
    // that can never be produced.
    let engine = engine();
    let mut at = noon(2025, 1, 1);
    let mut seen_bad = false;
    for _ in 0..60 {
        if engine.daily_luck(at).metrics().any(|(_, t)| t == LuckTier::Bad) {
            seen_bad = true;
            break;
        }
        at += chrono::Duration::days(1);
    }
    assert!(seen_bad);
}

// ---------------------------------------------------------------------------
// fortune draws (bundled table)
// ---------------------------------------------------------------------------

#[test]
fn fortune_draws() {
    let cases = [
        ((2025, 1, 1), FortuneLevelKey::Basic, 0),
        ((2024, 2, 29), FortuneLevelKey::Super, 1),
        ((2023, 11, 14), FortuneLevelKey::Ultra, 0),
        ((2025, 6, 15), FortuneLevelKey::Glitch, 2),
    ];
    let engine = engine();
    for ((y, m, d), key, copy_index) in cases {
        let draw = engine.draw_fortune(noon(y, m, d)).unwrap();
        assert_eq!(draw.level.key, key, "{y}-{m}-{d}");
        assert_eq!(draw.copy, draw.level.copy_examples[copy_index], "{y}-{m}-{d}");
    }
}

// ---------------------------------------------------------------------------
// decisions
// ---------------------------------------------------------------------------

#[test]
fn decisions() {
    use YesNo::{No, Yes};
    let cases = [
        ((2025, 1, 1), [No, No, No, Yes]),
        ((2024, 2, 29), [Yes, Yes, No, No]),
        ((2023, 11, 14), [Yes, No, Yes, Yes]),
        ((2025, 6, 15), [Yes, Yes, Yes, No]),
    ];
    let questions = [Some("吃什么"), None, Some("q1"), Some("q2")];
    let engine = engine();
    for ((y, m, d), answers) in cases {
        for (question, expected) in questions.iter().zip(answers) {
            let result = engine.decide_yes_no(*question, noon(y, m, d));
            assert_eq!(result.result, expected, "{y}-{m}-{d} {question:?}");
        }
    }
}
