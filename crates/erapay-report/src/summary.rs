//! Tabular payout report formatting.
//!
//! Pure formatting, no I/O: one row per era in input order. Large amounts
//! are rendered with en-US thousands grouping; percentages with one
//! decimal place. Eras whose aggregation failed render `-` in the numeric
//! columns so the operator still sees the era and its status.

use erapay_runner::run::{EraOutcome, EraStatus};

/// Column headers, in row order.
const HEADERS: [&str; 10] = [
    "era",
    "total stake",
    "total reward",
    "max earnings",
    "min earnings",
    "avg earnings",
    "max comm",
    "min comm",
    "pending",
    "status",
];

/// Format the outcome log as a fixed-width table.
///
/// One row per era, preserving input order. Returns an explicit
/// "no eras processed" marker for an empty log rather than a bare header.
pub fn format_report(outcomes: &[EraOutcome]) -> String {
    if outcomes.is_empty() {
        return "Payout report: no eras processed\n".to_string();
    }

    let mut rows: Vec<[String; 10]> = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        rows.push(format_row(outcome));
    }

    render_table(&rows)
}

fn format_row(outcome: &EraOutcome) -> [String; 10] {
    let status = match outcome.status {
        EraStatus::Success => "success",
        EraStatus::Failed => "FAILED",
    };

    match &outcome.stats {
        Some(stats) => {
            let (max_net, min_net, avg_net, max_comm, min_comm) = match &stats.earnings {
                Some(spread) => (
                    group_amount(spread.max_net),
                    group_amount(spread.min_net),
                    group_amount(spread.avg_net),
                    format_pct(spread.max_commission_pct),
                    format_pct(spread.min_commission_pct),
                ),
                // Empty validator set: no earnings data for the era
                None => (
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                ),
            };
            [
                outcome.era.to_string(),
                group_amount(stats.total_stake),
                group_amount(stats.total_validator_reward),
                max_net,
                min_net,
                avg_net,
                max_comm,
                min_comm,
                outcome.pending_claims.to_string(),
                status.to_string(),
            ]
        }
        None => [
            outcome.era.to_string(),
            "-".to_string(),
            "-".to_string(),
            "-".to_string(),
            "-".to_string(),
            "-".to_string(),
            "-".to_string(),
            "-".to_string(),
            outcome.pending_claims.to_string(),
            status.to_string(),
        ],
    }
}

fn render_table(rows: &[[String; 10]]) -> String {
    let mut widths: [usize; 10] = [0; 10];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::from("*Payout Report*\n```\n");
    for (i, header) in HEADERS.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&pad(header, widths[i]));
    }
    out.push('\n');
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&pad(cell, widths[i]));
        }
        out.push('\n');
    }
    out.push_str("```\n");
    out
}

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}

/// Render an amount with en-US thousands grouping and two decimals,
/// e.g. `1234567.5` → `"1,234,567.50"`.
pub fn group_amount(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (fixed.as_str(), "00"),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

/// Render a percentage with one decimal place, e.g. `10.0` → `"10.0%"`.
pub fn format_pct(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use erapay_rewards::aggregate::{EarningsSpread, EraSummaryStats};

    fn outcome(era: u32, status: EraStatus) -> EraOutcome {
        EraOutcome {
            era,
            stats: Some(EraSummaryStats {
                total_stake: 1_234_000.0,
                total_validator_reward: 56_789.0,
                no_distributable_reward: false,
                earnings: Some(EarningsSpread {
                    max_net: 500.0,
                    min_net: 75.0,
                    avg_net: 258.333_333,
                    max_commission_pct: 10.0,
                    min_commission_pct: 0.0,
                }),
            }),
            pending_claims: 3,
            status,
        }
    }

    #[test]
    fn test_one_row_per_era_in_order() {
        let outcomes = vec![
            outcome(100, EraStatus::Success),
            outcome(101, EraStatus::Failed),
            outcome(102, EraStatus::Success),
        ];
        let report = format_report(&outcomes);

        let pos_100 = report.find("100").expect("era 100");
        let pos_101 = report.find("101").expect("era 101");
        let pos_102 = report.find("102").expect("era 102");
        assert!(pos_100 < pos_101 && pos_101 < pos_102);
    }

    #[test]
    fn test_row_content() {
        let report = format_report(&[outcome(100, EraStatus::Success)]);
        assert!(report.contains("1,234,000.00"));
        assert!(report.contains("56,789.00"));
        assert!(report.contains("500.00"));
        assert!(report.contains("75.00"));
        assert!(report.contains("258.33"));
        assert!(report.contains("10.0%"));
        assert!(report.contains("0.0%"));
        assert!(report.contains("success"));
    }

    #[test]
    fn test_failed_era_visible_with_placeholders() {
        let failed = EraOutcome {
            era: 55,
            stats: None,
            pending_claims: 0,
            status: EraStatus::Failed,
        };
        let report = format_report(&[failed]);
        assert!(report.contains("55"));
        assert!(report.contains("FAILED"));
        assert!(report.contains('-'));
    }

    #[test]
    fn test_empty_validator_set_renders_placeholders() {
        let mut o = outcome(60, EraStatus::Success);
        if let Some(stats) = o.stats.as_mut() {
            stats.earnings = None;
        }
        let report = format_report(&[o]);
        assert!(report.contains("60"));
        assert!(report.contains('-'));
    }

    #[test]
    fn test_empty_log() {
        let report = format_report(&[]);
        assert!(report.contains("no eras processed"));
    }

    #[test]
    fn test_group_amount() {
        assert_eq!(group_amount(0.0), "0.00");
        assert_eq!(group_amount(999.0), "999.00");
        assert_eq!(group_amount(1_000.0), "1,000.00");
        assert_eq!(group_amount(1_234_567.5), "1,234,567.50");
        assert_eq!(group_amount(-1_234.0), "-1,234.00");
    }

    #[test]
    fn test_format_pct_one_decimal() {
        assert_eq!(format_pct(10.0), "10.0%");
        assert_eq!(format_pct(2.55), "2.5%");
        assert_eq!(format_pct(0.0), "0.0%");
    }
}
