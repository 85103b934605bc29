use std::collections::BTreeMap;

use serde::Serialize;

use super::model::{LaunchRecord, Outcome, SiteSelection};

pub const ALL_SITES_TITLE: &str = "Total Successful Launches By Site";

// ---------------------------------------------------------------------------
// Proportion chart description
// ---------------------------------------------------------------------------

/// One wedge of the pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Set for per-site outcome breakdowns, which use fixed outcome colours.
    pub outcome: Option<Outcome>,
}

/// A renderable success breakdown. No slices means an empty chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

// ---------------------------------------------------------------------------
// Outcome aggregation
// ---------------------------------------------------------------------------

/// Success counts per site for `All`, success/failure counts for one site.
pub fn outcome_chart(records: &[LaunchRecord], selected: &SiteSelection) -> PieChart {
    match selected {
        SiteSelection::All => successes_by_site(records),
        SiteSelection::Site(site) => outcomes_for_site(records, site),
    }
}

/// Sites without a single success do not get a slice.
fn successes_by_site(records: &[LaunchRecord]) -> PieChart {
    let mut per_site: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in records.iter().filter(|r| r.outcome.is_success()) {
        *per_site.entry(rec.site.as_str()).or_default() += 1;
    }

    PieChart {
        title: ALL_SITES_TITLE.to_string(),
        slices: per_site
            .into_iter()
            .map(|(site, count)| PieSlice {
                label: site.to_string(),
                count,
                outcome: None,
            })
            .collect(),
    }
}

/// Outcomes that never occurred are left out rather than shown as zero.
fn outcomes_for_site(records: &[LaunchRecord], site: &str) -> PieChart {
    let mut per_outcome: BTreeMap<Outcome, usize> = BTreeMap::new();
    for rec in records.iter().filter(|r| r.site == site) {
        *per_outcome.entry(rec.outcome).or_default() += 1;
    }

    let mut slices: Vec<PieSlice> = per_outcome
        .into_iter()
        .map(|(outcome, count)| PieSlice {
            label: outcome.label().to_string(),
            count,
            outcome: Some(outcome),
        })
        .collect();
    // Most frequent first; stable sort keeps Success ahead on ties.
    slices.sort_by(|a, b| b.count.cmp(&a.count));

    PieChart {
        title: format!("Success vs. Failure for site {site}"),
        slices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rec(site: &str, mass: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord::new(site, mass, outcome, "FT").unwrap()
    }

    fn example() -> Vec<LaunchRecord> {
        vec![
            rec("A", 500.0, Outcome::Success),
            rec("A", 1500.0, Outcome::Failure),
            rec("B", 500.0, Outcome::Success),
        ]
    }

    fn counts(chart: &PieChart) -> Vec<(&str, usize)> {
        chart
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.count))
            .collect()
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let chart = outcome_chart(&example(), &SiteSelection::All);
        assert_eq!(chart.title, "Total Successful Launches By Site");
        assert_eq!(counts(&chart), [("A", 1), ("B", 1)]);
        assert!(chart.slices.iter().all(|s| s.outcome.is_none()));
    }

    #[test]
    fn single_site_splits_success_and_failure() {
        let chart = outcome_chart(&example(), &SiteSelection::Site("A".into()));
        assert_eq!(chart.title, "Success vs. Failure for site A");
        assert_eq!(counts(&chart), [("Success", 1), ("Failure", 1)]);
        assert_eq!(chart.slices[0].outcome, Some(Outcome::Success));
        assert_eq!(chart.slices[1].outcome, Some(Outcome::Failure));
    }

    #[test]
    fn single_site_orders_by_count() {
        let records = vec![
            rec("A", 1.0, Outcome::Success),
            rec("A", 2.0, Outcome::Failure),
            rec("A", 3.0, Outcome::Failure),
        ];
        let chart = outcome_chart(&records, &SiteSelection::Site("A".into()));
        assert_eq!(counts(&chart), [("Failure", 2), ("Success", 1)]);
    }

    #[test]
    fn missing_outcome_is_absent_not_zero() {
        let chart = outcome_chart(&example(), &SiteSelection::Site("B".into()));
        assert_eq!(counts(&chart), [("Success", 1)]);
    }

    #[test]
    fn site_without_successes_is_absent_from_all() {
        let records = vec![
            rec("A", 1.0, Outcome::Success),
            rec("C", 1.0, Outcome::Failure),
        ];
        let chart = outcome_chart(&records, &SiteSelection::All);
        assert_eq!(counts(&chart), [("A", 1)]);
    }

    #[test]
    fn unknown_site_yields_empty_chart() {
        let chart = outcome_chart(&example(), &SiteSelection::Site("Z".into()));
        assert!(chart.slices.is_empty());
        assert_eq!(chart.total(), 0);
    }

    fn arb_records() -> impl Strategy<Value = Vec<LaunchRecord>> {
        prop::collection::vec(
            (0usize..4, 0.0f64..10_000.0, any::<bool>()),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(site, mass, ok)| {
                    let outcome = if ok { Outcome::Success } else { Outcome::Failure };
                    rec(&format!("S{site}"), mass, outcome)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn site_breakdown_sums_to_site_total(records in arb_records(), site in 0usize..5) {
            let site = format!("S{site}");
            let chart = outcome_chart(&records, &SiteSelection::Site(site.clone()));
            prop_assert!(chart.slices.len() <= 2);
            let expected = records.iter().filter(|r| r.site == site).count();
            prop_assert_eq!(chart.total(), expected);
        }

        #[test]
        fn all_sites_has_one_slice_per_successful_site(records in arb_records()) {
            let chart = outcome_chart(&records, &SiteSelection::All);
            let mut sites: Vec<&str> = records
                .iter()
                .filter(|r| r.outcome.is_success())
                .map(|r| r.site.as_str())
                .collect();
            sites.sort_unstable();
            sites.dedup();
            let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
            prop_assert_eq!(labels, sites);
            prop_assert!(chart.slices.iter().all(|s| s.count > 0));
        }

        #[test]
        fn aggregation_is_idempotent(records in arb_records(), site in 0usize..5) {
            let selected = SiteSelection::Site(format!("S{site}"));
            prop_assert_eq!(outcome_chart(&records, &selected), outcome_chart(&records, &selected));
            prop_assert_eq!(
                outcome_chart(&records, &SiteSelection::All),
                outcome_chart(&records, &SiteSelection::All)
            );
        }
    }
}
