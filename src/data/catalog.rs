use std::collections::HashSet;

use serde::Serialize;

use super::model::{LaunchRecord, SiteSelection};

/// Label shown for the synthetic every-site entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// One selectable entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: SiteSelection,
}

/// Distinct launch sites in first-seen order, with "All Sites" at the head.
pub fn build_catalog(records: &[LaunchRecord]) -> Vec<SiteOption> {
    let mut seen = HashSet::new();
    let sites = records
        .iter()
        .filter(|r| seen.insert(r.site.as_str()))
        .map(|r| SiteOption {
            label: r.site.clone(),
            value: SiteSelection::Site(r.site.clone()),
        });

    std::iter::once(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: SiteSelection::All,
    })
    .chain(sites)
    .collect()
}

/// Options whose label contains `query`, ignoring case. An empty query
/// matches everything.
pub fn search_catalog<'a>(
    catalog: &'a [SiteOption],
    query: &str,
) -> impl Iterator<Item = &'a SiteOption> {
    let needle = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(move |opt| opt.label.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn rec(site: &str) -> LaunchRecord {
        LaunchRecord::new(site, 100.0, Outcome::Success, "FT").unwrap()
    }

    #[test]
    fn all_sites_comes_first_then_first_seen_order() {
        let records = vec![rec("VAFB"), rec("CCAFS"), rec("VAFB"), rec("KSC")];
        let catalog = build_catalog(&records);
        let labels: Vec<_> = catalog.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["All Sites", "VAFB", "CCAFS", "KSC"]);
        assert_eq!(catalog[0].value, SiteSelection::All);
        assert_eq!(catalog[2].value, SiteSelection::Site("CCAFS".into()));
    }

    #[test]
    fn empty_records_still_offer_all_sites() {
        let catalog = build_catalog(&[]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].value.value(), "ALL");
    }

    #[test]
    fn search_matches_labels_case_insensitively() {
        let catalog = build_catalog(&[rec("CCAFS LC-40"), rec("KSC LC-39A"), rec("CCAFS SLC-40")]);
        let hits: Vec<_> = search_catalog(&catalog, "ccafs")
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(hits, ["CCAFS LC-40", "CCAFS SLC-40"]);
        assert_eq!(search_catalog(&catalog, "  ").count(), catalog.len());
        assert_eq!(search_catalog(&catalog, "boca").count(), 0);
    }
}
