// src/presentation.rs
use std::io::{self, Write};

use crate::compute::NumerologyResult;
use crate::config::Config;
use crate::options::{SystemChoice, ValueDisplay};
use crate::tables::NumerologySystem;

/// 1 行分の出力文字列（改行なし）を組み立てる
pub fn format_line(
    text: &str,
    system: NumerologySystem,
    label: &str,
    display: ValueDisplay,
) -> String {
    let NumerologyResult { raw, reduced } = NumerologyResult::of(text, system);
    match display {
        ValueDisplay::Both => format!("{label}{raw}/{reduced}"),
        ValueDisplay::Unreduced => format!("{label}{raw}"),
        ValueDisplay::Reduced => format!("{label}{reduced}"),
    }
}

/// Write every line for one text unit, one per selected system.
pub fn write_unit<W: Write>(out: &mut W, unit: &str, config: &Config) -> io::Result<()> {
    match config.system {
        SystemChoice::Both => {
            for system in NumerologySystem::DUAL_ORDER {
                let label = format!("{unit}: {} ", system.name());
                writeln!(out, "{}", format_line(unit, system, &label, config.display))?;
            }
        }
        SystemChoice::Only(system) => {
            let label = if config.simple { String::new() } else { format!("{unit}: ") };
            writeln!(out, "{}", format_line(unit, system, &label, config.display))?;
        }
    }
    Ok(())
}
