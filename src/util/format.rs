// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Display formatting for durations, money amounts, and large counts.

/// Formats a duration in seconds into a human-readable `MM:SS` string,
/// used for track durations in the release editor and profile view.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Formats a dollar amount with thousands separators and two decimal
/// places, e.g. `$1,523,045.67`.
pub(crate) fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Formats a count with thousands separators, e.g. `1,245,000`.
pub(crate) fn format_count(value: u64) -> String {
    group_thousands(value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn money_groups_thousands_and_keeps_cents() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(950.25), "$950.25");
        assert_eq!(format_money(1_523_045.67), "$1,523,045.67");
        assert_eq!(format_money(120_000.00), "$120,000.00");
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(45_000), "45,000");
        assert_eq!(format_count(1_245_000), "1,245,000");
    }
}
