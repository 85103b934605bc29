use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::{build_catalog, SiteOption};

/// Wire value of the synthetic "every site" selection.
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// RecordError – validation failures while building a record
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("outcome class must be 0 or 1, got {0}")]
    InvalidOutcome(f64),
    #[error("payload mass must be a non-negative number, got {0}")]
    InvalidPayload(f64),
}

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Decode the dataset's `class` column (1 = success, 0 = failure).
    pub fn from_class(class: f64) -> Result<Self, RecordError> {
        if class == 1.0 {
            Ok(Outcome::Success)
        } else if class == 0.0 {
            Ok(Outcome::Failure)
        } else {
            Err(RecordError::InvalidOutcome(class))
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kilograms, finite and non-negative.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Only used to colour the scatter chart.
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Result<Self, RecordError> {
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(RecordError::InvalidPayload(payload_mass_kg));
        }
        Ok(Self {
            site: site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
        })
    }

    /// Build a record from raw column values as found in the source file.
    pub fn from_raw(
        site: &str,
        payload_mass_kg: f64,
        class: f64,
        booster_category: &str,
    ) -> Result<Self, RecordError> {
        let outcome = Outcome::from_class(class)?;
        Self::new(site, payload_mass_kg, outcome, booster_category)
    }
}

// ---------------------------------------------------------------------------
// Filter inputs
// ---------------------------------------------------------------------------

/// Either every site or one specific launch site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value; `"ALL"` is the sentinel for every site.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl Serialize for SiteSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

/// Inclusive payload mass bounds in kilograms. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Lower edge of the payload slider.
    pub const SLIDER_MIN: f64 = 0.0;
    /// Upper edge of the payload slider.
    pub const SLIDER_MAX: f64 = 10_000.0;
    /// Slider granularity.
    pub const SLIDER_STEP: f64 = 1_000.0;

    /// Bounds are swapped if given in reverse order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self::new(Self::SLIDER_MIN, Self::SLIDER_MAX)
    }
}

/// The pair of inputs every chart is recomputed from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded records plus everything derived from them once at load time.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    pub records: Vec<LaunchRecord>,
    /// Dropdown options, "All Sites" first.
    pub catalog: Vec<SiteOption>,
    /// Sorted distinct booster categories.
    pub booster_categories: BTreeSet<String>,
}

impl LaunchDataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let catalog = build_catalog(&records);
        let booster_categories = records
            .iter()
            .map(|r| r.booster_category.clone())
            .collect();
        LaunchDataset {
            records,
            catalog,
            booster_categories,
        }
    }

    /// Smallest and largest payload mass present, `None` when empty.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut masses = self.records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        Some(masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m))))
    }

    /// The range covering every record, falling back to the full slider.
    pub fn full_payload_range(&self) -> PayloadRange {
        self.payload_bounds()
            .map(|(lo, hi)| PayloadRange::new(lo, hi))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_decodes_to_outcome() {
        assert_eq!(Outcome::from_class(1.0), Ok(Outcome::Success));
        assert_eq!(Outcome::from_class(0.0), Ok(Outcome::Failure));
        assert_eq!(
            Outcome::from_class(2.0),
            Err(RecordError::InvalidOutcome(2.0))
        );
    }

    #[test]
    fn negative_payload_is_rejected() {
        let err = LaunchRecord::new("A", -1.0, Outcome::Success, "FT").unwrap_err();
        assert_eq!(err, RecordError::InvalidPayload(-1.0));
        assert!(LaunchRecord::new("A", f64::NAN, Outcome::Success, "FT").is_err());
    }

    #[test]
    fn payload_range_orders_bounds_and_is_inclusive() {
        let range = PayloadRange::new(2000.0, 500.0);
        assert_eq!(range.low(), 500.0);
        assert_eq!(range.high(), 2000.0);
        assert!(range.contains(500.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(2000.5));
    }

    #[test]
    fn site_selection_round_trips_sentinel() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        let site = SiteSelection::from_value("KSC LC-39A");
        assert_eq!(site.value(), "KSC LC-39A");
        assert!(site.matches("KSC LC-39A"));
        assert!(!site.matches("VAFB SLC-4E"));
        assert!(SiteSelection::All.matches("anything"));
    }

    #[test]
    fn dataset_derives_bounds_and_categories() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "v1.1").unwrap(),
            LaunchRecord::new("B", 9600.0, Outcome::Failure, "FT").unwrap(),
            LaunchRecord::new("A", 0.0, Outcome::Failure, "v1.1").unwrap(),
        ]);
        assert_eq!(ds.payload_bounds(), Some((0.0, 9600.0)));
        assert_eq!(ds.full_payload_range(), PayloadRange::new(0.0, 9600.0));
        assert_eq!(
            ds.booster_categories.iter().cloned().collect::<Vec<_>>(),
            vec!["FT".to_string(), "v1.1".to_string()]
        );
        assert_eq!(ds.catalog.len(), 3);
    }

    #[test]
    fn empty_dataset_uses_slider_range() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), None);
        assert_eq!(ds.full_payload_range(), PayloadRange::default());
    }
}
