//! CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode, and verbosity levels. In JSON mode every call emits
//! one `{"type": ..., "payload": ...}` line.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::{ArbProposal, ProfitPct};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

/// Return a reference to the global configuration cell.
fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

/// Read the current output configuration, recovering from a poisoned lock.
fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Update the global output configuration.
fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
///
/// Call this early in the CLI entry point, before any handler prints.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print a labeled value, left-aligning the label.
///
/// Suppressed in quiet mode.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line(
            "field",
            json!({
                "label": label,
                "value": value,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a success line with a green check mark.
///
/// Suppressed in quiet mode.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
///
/// Warnings are printed in quiet mode too.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
///
/// In JSON mode the error is still a `{"type": "error", ...}` line, but on
/// stderr so stdout only carries results.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", "×".red(), message);
}

/// Print a section header preceded by a blank line.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", title.bold());
}

/// Print a dimmed note or hint.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}", message.dimmed());
}

/// Print a proposal with its profit.
///
/// Quiet mode still prints proposals; they are the command's result.
pub fn proposal(rank: usize, proposal: &ArbProposal) {
    let config = read_config();
    let profit = proposal.profit_pct();

    if config.json {
        emit_json_line(
            "proposal",
            json!({
                "rank": rank,
                "profit_pct": profit,
                "first_side": proposal.first_side(),
                "second_side": proposal.second_side(),
            }),
        );
        return;
    }

    println!("  {} {}", format!("#{rank}").bold(), format_profit(profit));
    for line in proposal.to_string().lines() {
        println!("    {line}");
    }
}

/// Profit as a percentage with four decimals.
///
/// Fractions too large to scale by 100 are shown as the raw fraction.
fn profit_text(profit: ProfitPct) -> String {
    match profit.value() {
        Some(value) => match value.checked_mul(Decimal::ONE_HUNDRED) {
            Some(pct) => format!("{pct:.4}%"),
            None => value.to_string(),
        },
        None => profit.to_string(),
    }
}

/// Format a profit percentage: green when positive, red when negative.
#[must_use]
pub fn format_profit(profit: ProfitPct) -> String {
    let text = profit_text(profit);
    if is_json() {
        return text;
    }
    match profit.value() {
        Some(value) if value.is_sign_positive() && !value.is_zero() => {
            format!("{}", text.green())
        }
        Some(value) if value.is_sign_negative() && !value.is_zero() => format!("{}", text.red()),
        _ => format!("{}", text.dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn output_config_new_sets_all_flags() {
        let config = OutputConfig::new(true, false, 2);
        assert!(config.json);
        assert!(!config.quiet);
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn quiet_suppresses_only_non_json_output() {
        assert!(regular_output_suppressed(OutputConfig::new(false, true, 0)));
        assert!(!regular_output_suppressed(OutputConfig::new(true, true, 0)));
        assert!(!regular_output_suppressed(OutputConfig::new(false, false, 0)));
    }

    #[test]
    fn profit_text_scales_to_percent() {
        assert_eq!(profit_text(ProfitPct::from(dec!(0.1))), "10.0000%");
        assert_eq!(profit_text(ProfitPct::from(dec!(-0.2))), "-20.0000%");
        assert_eq!(profit_text(ProfitPct::NAN), "NaN");
    }

    #[test]
    fn profit_text_falls_back_to_fraction_on_overflow() {
        let text = profit_text(ProfitPct::from(Decimal::MAX));
        assert_eq!(text, Decimal::MAX.to_string());
    }

    #[test]
    fn format_profit_handles_huge_profit() {
        let text = format_profit(ProfitPct::from(Decimal::MAX));
        assert!(text.contains(&Decimal::MAX.to_string()));
    }
}
