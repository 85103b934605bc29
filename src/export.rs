use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::color::{slice_colors, to_hex};
use crate::data::aggregate::{PieSlice, outcome_chart};
use crate::data::catalog::SiteOption;
use crate::data::filter::{ScatterChart, correlation_chart};
use crate::data::model::{FilterState, LaunchDataset, PayloadRange, SiteSelection};

/// Both charts for one filter state, as written by `--export`.
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
    pub catalog: Vec<SiteOption>,
    pub success_pie: PieSnapshot,
    pub payload_scatter: ScatterChart,
}

#[derive(Debug, Serialize)]
pub struct PieSnapshot {
    pub title: String,
    pub slices: Vec<ColoredSlice>,
}

#[derive(Debug, Serialize)]
pub struct ColoredSlice {
    #[serde(flatten)]
    pub slice: PieSlice,
    pub color: String,
}

pub fn snapshot(dataset: &LaunchDataset, filters: &FilterState) -> DashboardSnapshot {
    let pie = outcome_chart(&dataset.records, &filters.site);
    let colors = slice_colors(&pie);
    let slices = pie
        .slices
        .into_iter()
        .zip(colors)
        .map(|(slice, color)| ColoredSlice {
            slice,
            color: to_hex(color),
        })
        .collect();

    DashboardSnapshot {
        site: filters.site.clone(),
        payload_range: filters.payload,
        catalog: dataset.catalog.clone(),
        success_pie: PieSnapshot {
            title: pie.title,
            slices,
        },
        payload_scatter: correlation_chart(&dataset.records, &filters.site, &filters.payload),
    }
}

pub fn write_snapshot(path: &Path, dataset: &LaunchDataset, filters: &FilterState) -> Result<()> {
    let snap = snapshot(dataset, filters);
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &snap).context("writing snapshot JSON")?;
    writer.flush().context("flushing snapshot JSON")?;
    log::info!(
        "Exported {} pie slices and {} scatter points to {}",
        snap.success_pie.slices.len(),
        snap.payload_scatter.points.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "FT").unwrap(),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "v1.1").unwrap(),
            LaunchRecord::new("B", 500.0, Outcome::Success, "FT").unwrap(),
        ])
    }

    #[test]
    fn snapshot_json_has_both_charts() {
        let filters = FilterState {
            site: SiteSelection::Site("A".into()),
            payload: PayloadRange::new(0.0, 1000.0),
        };
        let dir = tempfile::tempdir().expect("dir");
        let path = dir.path().join("snapshot.json");
        write_snapshot(&path, &dataset(), &filters).expect("export");

        let json: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(json["site"], "A");
        assert_eq!(json["payload_range"]["low"], 0.0);
        assert_eq!(json["catalog"][0]["label"], "All Sites");
        assert_eq!(json["catalog"][0]["value"], "ALL");

        let slices = json["success_pie"]["slices"].as_array().expect("slices");
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0]["label"], "Success");
        assert_eq!(slices[0]["color"], "#008000");
        assert_eq!(slices[1]["color"], "#ff0000");

        let points = json["payload_scatter"]["points"].as_array().expect("points");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0]["class"], 1);
    }

    #[test]
    fn unknown_site_exports_empty_charts() {
        let filters = FilterState {
            site: SiteSelection::Site("Z".into()),
            payload: PayloadRange::default(),
        };
        let snap = snapshot(&dataset(), &filters);
        assert!(snap.success_pie.slices.is_empty());
        assert!(snap.payload_scatter.points.is_empty());
    }
}
