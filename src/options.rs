// src/options.rs
use crate::tables::NumerologySystem;

/// 使用する体系（排他フラグ -p / -c から決まる 3 状態）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SystemChoice {
    /// 両体系を Chaldean → Pythagorean の順に出力
    #[default]
    Both,
    Only(NumerologySystem),
}

impl SystemChoice {
    pub fn from_flags(pythagorean: bool, chaldean: bool) -> Self {
        match (pythagorean, chaldean) {
            (true, false) => Self::Only(NumerologySystem::Pythagorean),
            (false, true) => Self::Only(NumerologySystem::Chaldean),
            _ => Self::Both,
        }
    }
}

/// 表示する値（排他フラグ -r / -u から決まる 3 状態）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueDisplay {
    /// `raw/reduced`
    #[default]
    Both,
    Reduced,
    Unreduced,
}

impl ValueDisplay {
    pub fn from_flags(reduced: bool, unreduced: bool) -> Self {
        match (reduced, unreduced) {
            (true, false) => Self::Reduced,
            (false, true) => Self::Unreduced,
            _ => Self::Both,
        }
    }
}

/// 入力の解釈方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// 引数 1 つを 1 単位として扱う
    #[default]
    Words,
    /// 引数を改行で分割し、空でない行を 1 単位として扱う
    Lines,
    /// 引数をファイルパスとして読み込み、各行を 1 単位として扱う
    File,
}

impl InputMode {
    pub fn from_flags(lines: bool, file: bool) -> Self {
        if file {
            Self::File
        } else if lines {
            Self::Lines
        } else {
            Self::Words
        }
    }
}
