// src/args.rs
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "numerology",
    version = crate::VERSION,
    about = "Evaluate the numerology of one or more words.",
    group(
        clap::ArgGroup::new("system")
            .args(["pythagorean", "chaldean"])
            .multiple(false)
    ),
    group(
        clap::ArgGroup::new("display")
            .args(["reduced", "unreduced"])
            .multiple(false)
    ),
    group(
        clap::ArgGroup::new("source")
            .args(["words", "lines", "file"])
            .multiple(false)
    )
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 評価する入力（単語 / 改行を含む文字列 / ファイルパス）
    #[arg(required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Pythagorean 表のみ使用
    #[arg(short = 'p', long, help_heading = "体系")]
    pub pythagorean: bool,

    /// Chaldean 表のみ使用
    #[arg(short = 'c', long, help_heading = "体系")]
    pub chaldean: bool,

    /// 還元値のみ表示
    #[arg(short = 'r', long, help_heading = "出力")]
    pub reduced: bool,

    /// 未還元値のみ表示
    #[arg(short = 'u', long, help_heading = "出力")]
    pub unreduced: bool,

    /// 最小限の情報のみ出力（単一体系時にラベルを省略）
    #[arg(short = 's', long, help_heading = "出力")]
    pub simple: bool,

    /// 入力を単語のリストとして扱う（既定）
    #[arg(short = 'w', long, help_heading = "入力")]
    pub words: bool,

    /// 入力を行のリストとして扱い、行ごとに評価
    #[arg(short = 'l', long, help_heading = "入力")]
    pub lines: bool,

    /// 入力をファイルのリストとして扱い、行ごとに評価
    #[arg(short = 'f', long, help_heading = "入力")]
    pub file: bool,

    /// 診断ログの詳細度（-v: info, -vv: debug, -vvv: trace）。RUST_LOG が優先
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
