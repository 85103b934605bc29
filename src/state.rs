use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::aggregate::{PieChart, outcome_chart};
use crate::data::filter::{correlation_title, filtered_indices};
use crate::data::model::{FilterState, LaunchDataset, SiteSelection};
use crate::events::{ChartRegion, DashboardEvent};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded). Read-only once shared.
    pub dataset: Option<Arc<LaunchDataset>>,

    /// Current dropdown and slider values.
    pub filters: FilterState,

    /// Success breakdown for the selected site.
    pub pie: Option<PieChart>,

    /// Indices of records passing the site and payload filters.
    pub visible_indices: Vec<usize>,

    /// Title of the payload scatter chart.
    pub scatter_title: String,

    /// Booster category colours for the scatter chart.
    pub color_map: Option<ColorMap>,

    /// Text typed into the site dropdown's search box.
    pub site_search: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start with a dataset and an initial filter state.
    pub fn with_dataset(dataset: LaunchDataset, filters: FilterState) -> Self {
        let mut state = AppState {
            filters,
            ..Default::default()
        };
        state.install(Arc::new(dataset));
        state
    }

    /// Ingest a newly loaded dataset: reset the payload range to the data's
    /// bounds and recompute both charts.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.filters.payload = dataset.full_payload_range();
        self.install(Arc::new(dataset));
        self.status_message = None;
    }

    fn install(&mut self, dataset: Arc<LaunchDataset>) {
        // A site from a previous file may not exist in this one.
        if !dataset.catalog.iter().any(|opt| opt.value == self.filters.site) {
            log::warn!(
                "Launch site {:?} is not in the dataset, showing all sites",
                self.filters.site.value()
            );
            self.filters.site = SiteSelection::All;
        }
        self.color_map = Some(ColorMap::new(&dataset.booster_categories));
        self.render(&dataset, ChartRegion::SuccessPie);
        self.render(&dataset, ChartRegion::PayloadScatter);
        self.dataset = Some(dataset);
    }

    /// Apply an input change and recompute only the charts watching it.
    /// Returns the regions that were recomputed.
    pub fn dispatch(&mut self, event: DashboardEvent) -> Vec<ChartRegion> {
        log::debug!("dispatching {event:?}");
        let regions = event.affected_regions();
        match event {
            DashboardEvent::SiteSelected(site) => self.filters.site = site,
            DashboardEvent::PayloadRangeChanged(range) => self.filters.payload = range,
        }

        let Some(dataset) = self.dataset.clone() else {
            return Vec::new();
        };
        for &region in regions {
            self.render(&dataset, region);
        }
        regions.to_vec()
    }

    fn render(&mut self, dataset: &LaunchDataset, region: ChartRegion) {
        match region {
            ChartRegion::SuccessPie => {
                self.pie = Some(outcome_chart(&dataset.records, &self.filters.site));
            }
            ChartRegion::PayloadScatter => {
                self.visible_indices =
                    filtered_indices(&dataset.records, &self.filters.site, &self.filters.payload);
                self.scatter_title = correlation_title(&self.filters.site);
            }
        }
        log::debug!("recomputed {region:?}");
    }
}
