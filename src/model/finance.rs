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

//! Royalty figures for the finance view.
//!
//! All amounts are illustrative sample data; there is no payout backend.

#[derive(Debug, Clone, Copy)]
pub(crate) struct RoyaltySummary {
    pub(crate) total_earnings: f64,
    pub(crate) monthly_earnings: f64,
    pub(crate) pending_payouts: f64,
    pub(crate) last_payout: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PayoutStatus {
    Completed,
    Pending,
}

impl PayoutStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            PayoutStatus::Completed => "Completed",
            PayoutStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Transaction {
    pub(crate) platform: String,
    pub(crate) amount: f64,
    pub(crate) date: String,
    pub(crate) status: PayoutStatus,
}

#[derive(Debug, Clone)]
pub(crate) struct FinanceReport {
    pub(crate) summary: RoyaltySummary,
    pub(crate) transactions: Vec<Transaction>,
}

impl FinanceReport {
    pub(crate) fn sample() -> Self {
        Self {
            summary: RoyaltySummary {
                total_earnings: 1_523_045.67,
                monthly_earnings: 245_075.89,
                pending_payouts: 120_000.00,
                last_payout: 180_050.12,
            },
            transactions: vec![
                Transaction {
                    platform: "Spotify".into(),
                    amount: 950.25,
                    date: "2025-04-28".into(),
                    status: PayoutStatus::Completed,
                },
                Transaction {
                    platform: "Apple Music".into(),
                    amount: 620.30,
                    date: "2025-04-25".into(),
                    status: PayoutStatus::Completed,
                },
                Transaction {
                    platform: "YouTube".into(),
                    amount: 320.50,
                    date: "2025-04-20".into(),
                    status: PayoutStatus::Pending,
                },
                Transaction {
                    platform: "Tidal".into(),
                    amount: 150.70,
                    date: "2025-04-15".into(),
                    status: PayoutStatus::Completed,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_report_is_populated() {
        let report = FinanceReport::sample();
        assert_eq!(report.transactions.len(), 4);
        assert!(report.summary.total_earnings > report.summary.monthly_earnings);
        assert!(report.transactions.iter().all(|t| t.amount > 0.0));
    }
}
