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

//! Mock performance analytics.
//!
//! The analytics view has no data source behind it. Selecting a time range
//! regenerates a synthetic stream-count series; the audience, region and
//! device breakdowns are fixed illustrative figures.

use rand::RngExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeRange {
    SevenDays,
    ThirtyDays,
    NinetyDays,
    OneYear,
}

impl TimeRange {
    pub(crate) const ALL: [TimeRange; 4] = [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
        TimeRange::OneYear,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7 Days",
            TimeRange::ThirtyDays => "30 Days",
            TimeRange::NinetyDays => "90 Days",
            TimeRange::OneYear => "1 Year",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            TimeRange::SevenDays => TimeRange::ThirtyDays,
            TimeRange::ThirtyDays => TimeRange::NinetyDays,
            TimeRange::NinetyDays => TimeRange::OneYear,
            TimeRange::OneYear => TimeRange::SevenDays,
        }
    }

    /// Labels for the buckets of the stream trend, one per data point.
    fn point_labels(self) -> Vec<String> {
        match self {
            TimeRange::SevenDays => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            TimeRange::ThirtyDays => (1..=30).map(|d| d.to_string()).collect(),
            TimeRange::NinetyDays => (1..=13).map(|w| format!("W{w}")).collect(),
            TimeRange::OneYear => [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
        }
    }

    /// Plausible per-bucket stream counts: daily buckets for the short
    /// ranges, weekly and monthly buckets for the long ones.
    fn stream_bounds(self) -> (u64, u64) {
        match self {
            TimeRange::SevenDays | TimeRange::ThirtyDays => (800, 3000),
            TimeRange::NinetyDays => (6_000, 20_000),
            TimeRange::OneYear => (25_000, 90_000),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StreamPoint {
    pub(crate) label: String,
    pub(crate) streams: u64,
}

/// One slice of a percentage breakdown (audience age band, region, device).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Share {
    pub(crate) label: &'static str,
    pub(crate) percent: u16,
}

#[derive(Debug, Clone)]
pub(crate) struct AnalyticsSnapshot {
    pub(crate) range: TimeRange,
    pub(crate) stream_trend: Vec<StreamPoint>,
    pub(crate) demographics: Vec<Share>,
    pub(crate) regions: Vec<Share>,
    pub(crate) devices: Vec<Share>,
}

impl AnalyticsSnapshot {
    /// Builds a fresh snapshot for the given range with a regenerated
    /// stream trend.
    pub(crate) fn generate(range: TimeRange) -> Self {
        let mut rng = rand::rng();
        let (low, high) = range.stream_bounds();

        let stream_trend = range
            .point_labels()
            .into_iter()
            .map(|label| StreamPoint {
                label,
                streams: rng.random_range(low..=high),
            })
            .collect();

        Self {
            range,
            stream_trend,
            demographics: vec![
                Share { label: "18-24", percent: 35 },
                Share { label: "25-34", percent: 45 },
                Share { label: "35-44", percent: 15 },
                Share { label: "45+", percent: 5 },
            ],
            regions: vec![
                Share { label: "United States", percent: 40 },
                Share { label: "United Kingdom", percent: 25 },
                Share { label: "Germany", percent: 15 },
                Share { label: "France", percent: 10 },
                Share { label: "Others", percent: 10 },
            ],
            devices: vec![
                Share { label: "Mobile", percent: 65 },
                Share { label: "Desktop", percent: 25 },
                Share { label: "Tablet", percent: 10 },
            ],
        }
    }

    pub(crate) fn peak_streams(&self) -> u64 {
        self.stream_trend.iter().map(|p| p.streams).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_has_one_point_per_bucket() {
        assert_eq!(AnalyticsSnapshot::generate(TimeRange::SevenDays).stream_trend.len(), 7);
        assert_eq!(AnalyticsSnapshot::generate(TimeRange::ThirtyDays).stream_trend.len(), 30);
        assert_eq!(AnalyticsSnapshot::generate(TimeRange::NinetyDays).stream_trend.len(), 13);
        assert_eq!(AnalyticsSnapshot::generate(TimeRange::OneYear).stream_trend.len(), 12);
    }

    #[test]
    fn trend_points_stay_within_bounds() {
        for range in TimeRange::ALL {
            let (low, high) = range.stream_bounds();
            let snapshot = AnalyticsSnapshot::generate(range);
            assert!(
                snapshot
                    .stream_trend
                    .iter()
                    .all(|p| (low..=high).contains(&p.streams))
            );
            assert!(snapshot.peak_streams() >= low);
        }
    }

    #[test]
    fn breakdowns_cover_the_whole_audience() {
        let snapshot = AnalyticsSnapshot::generate(TimeRange::SevenDays);
        for shares in [&snapshot.demographics, &snapshot.regions, &snapshot.devices] {
            let total: u16 = shares.iter().map(|s| s.percent).sum();
            assert_eq!(total, 100);
        }
    }

    #[test]
    fn range_cycle_visits_every_range() {
        let mut range = TimeRange::SevenDays;
        for expected in [
            TimeRange::ThirtyDays,
            TimeRange::NinetyDays,
            TimeRange::OneYear,
            TimeRange::SevenDays,
        ] {
            range = range.next();
            assert_eq!(range, expected);
        }
    }
}
