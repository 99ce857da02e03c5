// src/config.rs
use crate::args::Args;
use crate::options::{InputMode, SystemChoice, ValueDisplay};

/// CLI 引数から一度だけ組み立てる読み取り専用の設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub system: SystemChoice,
    pub display: ValueDisplay,
    /// 単一体系時に `"{unit}: "` ラベルを省略する
    pub simple: bool,
    pub mode: InputMode,
    pub inputs: Vec<String>,
    pub verbosity: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            system: SystemChoice::from_flags(args.pythagorean, args.chaldean),
            display: ValueDisplay::from_flags(args.reduced, args.unreduced),
            simple: args.simple,
            mode: InputMode::from_flags(args.lines, args.file),
            inputs: args.input,
            verbosity: args.verbose,
        }
    }
}
