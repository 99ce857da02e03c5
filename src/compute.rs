// src/compute.rs
use crate::tables::NumerologySystem;

/// 1 単位のテキストに対する計算結果（未還元値と還元値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumerologyResult {
    pub raw: u64,
    pub reduced: u64,
}

impl NumerologyResult {
    pub fn of(text: &str, system: NumerologySystem) -> Self {
        let raw = evaluate(text, system);
        Self { raw, reduced: reduce(raw) }
    }
}

/// Sum of per-character scores after Unicode lowercasing.
///
/// Total for any input; the empty string scores 0.
pub fn evaluate(text: &str, system: NumerologySystem) -> u64 {
    text.to_lowercase()
        .chars()
        .map(|c| u64::from(system.score_of(c)))
        .sum()
}

/// Fold `n` into the sum of its decimal digits until a single digit remains.
pub fn reduce(mut n: u64) -> u64 {
    while n >= 10 {
        n = digit_sum(n);
    }
    n
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
