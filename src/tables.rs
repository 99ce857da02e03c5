// src/tables.rs
//! Letter → digit substitution tables.
//!
//! Both tables are indexed by `letter - b'a'` and cover every lowercase
//! Latin letter exactly once.

/// 採点に使う数秘術の体系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumerologySystem {
    Pythagorean,
    Chaldean,
}

static PYTHAGOREAN: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, // a .. m
    5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8, // n .. z
];

static CHALDEAN: [u8; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, 1, 2, 3, 4, // a .. m
    5, 7, 8, 1, 2, 3, 4, 6, 6, 6, 5, 1, 7, // n .. z
];

impl NumerologySystem {
    /// Fixed order used when both systems are printed.
    pub const DUAL_ORDER: [Self; 2] = [Self::Chaldean, Self::Pythagorean];

    #[inline]
    pub fn table(self) -> &'static [u8; 26] {
        match self {
            Self::Pythagorean => &PYTHAGOREAN,
            Self::Chaldean => &CHALDEAN,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pythagorean => "Pythagorean",
            Self::Chaldean => "Chaldean",
        }
    }

    /// Score of a single character.
    ///
    /// Only `a`–`z` are mapped. Callers are expected to lowercase first;
    /// an uppercase letter here scores 0 like any other unmapped character.
    #[inline]
    pub fn score_of(self, c: char) -> u8 {
        if c.is_ascii_lowercase() {
            self.table()[(c as u8 - b'a') as usize]
        } else {
            0
        }
    }
}
