use serde::Serialize;

use super::model::{LaunchRecord, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Payload / site predicate
// ---------------------------------------------------------------------------

/// Return indices of records whose payload lies in `range` (inclusive) and,
/// unless `site` is `All`, whose launch site equals the selection.
///
/// Indices are ascending, so the original record order is kept.
pub fn filtered_indices(
    records: &[LaunchRecord],
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg))
        .filter(|(_, rec)| site.matches(&rec.site))
        .map(|(i, _)| i)
        .collect()
}

/// Same predicate as [`filtered_indices`], returning the records themselves.
pub fn filter_records<'a>(
    records: &'a [LaunchRecord],
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    filtered_indices(records, site, range)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// 1 for success, 0 for failure.
    pub class: u8,
    pub booster_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

pub fn correlation_title(site: &SiteSelection) -> String {
    format!("Correlation Between Payload and Success (Class) | Filtered by Site: {site}")
}

/// One point per filtered record, in record order.
pub fn correlation_chart(
    records: &[LaunchRecord],
    site: &SiteSelection,
    range: &PayloadRange,
) -> ScatterChart {
    let points = filter_records(records, site, range)
        .into_iter()
        .map(|rec| ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            class: rec.outcome.class(),
            booster_category: rec.booster_category.clone(),
        })
        .collect();

    ScatterChart {
        title: correlation_title(site),
        points,
    }
}
