use clap::ValueEnum;
use serde_json::json;

use crate::cycle::CycleReport;

#[derive(Debug, Clone, ValueEnum, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn part1_line(first: u32) -> String {
    format!("part1: {}", first)
}

pub fn part2_line(last_before_repeat: u32) -> String {
    format!("part2: {}", last_before_repeat)
}

pub fn render_report(report: &CycleReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!(
            "{}\n{}",
            part1_line(report.first),
            part2_line(report.last_before_repeat)
        ),
        OutputFormat::Json => json!({
            "part1": report.first,
            "part2": report.last_before_repeat,
            "distinct": report.distinct,
            "cycle_start": report.cycle_start,
            "cycle_len": report.cycle_len(),
        })
        .to_string(),
    }
}

pub fn render_pass(register: u32, value: u32, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => json!({
            "register": register,
            "value": value,
        })
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn report() -> CycleReport {
        CycleReport {
            first: 4,
            last_before_repeat: 23,
            repeated: 8,
            distinct: 5,
            cycle_start: 1,
        }
    }

    #[test]
    fn text_report_has_two_lines() {
        assert_eq!(render_report(&report(), OutputFormat::Text), "part1: 4\npart2: 23");
    }

    #[test]
    fn json_report() {
        let rendered = render_report(&report(), OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["part1"], 4);
        assert_eq!(parsed["part2"], 23);
        assert_eq!(parsed["cycle_len"], 4);
    }

    #[test]
    fn pass_output() {
        assert_eq!(render_pass(0, 5970144, OutputFormat::Text), "5970144");
        let parsed: Value =
            serde_json::from_str(&render_pass(0, 5970144, OutputFormat::Json)).unwrap();
        assert_eq!(parsed["register"], 0);
        assert_eq!(parsed["value"], 5970144);
    }
}
