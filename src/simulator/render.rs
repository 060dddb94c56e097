//! Plain-text rendering of the status panel and log entries

use std::fmt::Write;

use crate::config::GameRules;
use crate::property::SimulationState;

use super::{LogEntry, TurnLog};

const NONE_LABEL: &str = "(none)";
const CURRENCY: &str = "yen";

/// Group digits in threes: `-1234567` -> `-1,234,567`
pub fn format_amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Money with currency, e.g. `12,000 yen`
pub fn format_money(value: i64) -> String {
    format!("{} {}", format_amount(value), CURRENCY)
}

/// Signed money change, e.g. `+500 yen` or `-1,000 yen`
pub fn format_money_delta(value: i64) -> String {
    if value >= 0 {
        format!("+{}", format_money(value))
    } else {
        format_money(value)
    }
}

fn format_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        NONE_LABEL.to_string()
    } else {
        labels.join(" / ")
    }
}

fn format_age(age_years: i32, age_days: i32, day: i32) -> String {
    format!(
        "{} years {} days ({} days elapsed)",
        age_years, age_days, day
    )
}

/// Current status panel
pub fn render_status(state: &SimulationState, rules: &GameRules) -> String {
    let mut out = String::with_capacity(256);
    let _ = writeln!(out, "Turn: {}", state.turn_count);
    let _ = writeln!(
        out,
        "Age: {}",
        format_age(
            state.age_years(rules),
            state.age_days(rules),
            state.elapsed_days
        )
    );
    let _ = writeln!(out, "Money: {}", format_money(state.money));
    let _ = writeln!(
        out,
        "Job: {}",
        state.employment.as_deref().unwrap_or(NONE_LABEL)
    );
    let _ = writeln!(out, "Items: {}", format_labels(&state.items));
    let _ = write!(out, "Companions: {}", format_labels(&state.companions));
    if state.finished {
        let _ = write!(
            out,
            "\nYou reached age {}. Game over.",
            rules.max_age_years
        );
    }
    out
}

/// One log entry, including the event's effects when one fired
pub fn render_log_entry(entry: &LogEntry) -> String {
    let mut out = String::with_capacity(256);
    let _ = writeln!(out, "Turn {} | die: {}", entry.id, entry.die);
    let _ = writeln!(
        out,
        "  Age: {}",
        format_age(entry.age_years, entry.age_days, entry.day)
    );
    let _ = writeln!(out, "  Money: {}", format_money(entry.money_after));
    let _ = writeln!(
        out,
        "  Job: {}",
        entry.employment_after.as_deref().unwrap_or(NONE_LABEL)
    );
    let _ = writeln!(out, "  Items: {}", format_labels(&entry.items_after));
    let _ = write!(
        out,
        "  Companions: {}",
        format_labels(&entry.companions_after)
    );

    if let Some(ref event) = entry.event {
        let _ = write!(out, "\n  Event: {}", event.title);
        let _ = write!(
            out,
            "\n    Money change: {}",
            format_money_delta(event.money_delta)
        );
        if let Some(job) = event.employment() {
            let _ = write!(out, "\n    Started work as: {}", job);
        }
        if event.clears_employment {
            let _ = write!(out, "\n    Lost your job");
        }
        if let Some(item) = event.granted() {
            let _ = write!(out, "\n    Item gained: {}", item);
        }
        if let Some(item) = event.removed() {
            let _ = write!(out, "\n    Item lost: {}", item);
        }
        if let Some(name) = event.joined() {
            let _ = write!(out, "\n    Joined you: {}", name);
        }
        if let Some(name) = event.departed() {
            let _ = write!(out, "\n    Left you: {}", name);
        }
    }
    out
}

/// Whole log, newest first, entries separated by a blank line
pub fn render_log(log: &TurnLog) -> String {
    if log.is_empty() {
        return "No events yet.".to_string();
    }
    log.iter()
        .map(render_log_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}
