use std::path::PathBuf;

use clap::Parser;

use crate::data::model::{FilterState, LaunchDataset, PayloadRange, SiteSelection};

#[derive(Parser, Debug)]
#[command(name = "launch-dash", about = "Launch records dashboard")]
pub struct Cli {
    /// Launch dataset (.csv, .json or .parquet). Opens an empty window when omitted.
    #[arg(env = "LAUNCH_DASH_DATA")]
    pub dataset: Option<PathBuf>,

    /// Initially selected launch site, or ALL.
    #[arg(long, default_value = "ALL")]
    pub site: String,

    /// Lower payload bound in kg. Defaults to the smallest payload in the data.
    #[arg(long)]
    pub payload_min: Option<f64>,

    /// Upper payload bound in kg. Defaults to the largest payload in the data.
    #[arg(long)]
    pub payload_max: Option<f64>,

    /// Write both charts as JSON to this path and exit without opening a window.
    #[arg(long, requires = "dataset")]
    pub export: Option<PathBuf>,
}

impl Cli {
    /// Filter state requested on the command line, with unset payload bounds
    /// taken from the dataset.
    pub fn filter_state(&self, dataset: &LaunchDataset) -> FilterState {
        let full = dataset.full_payload_range();
        FilterState {
            site: SiteSelection::from_value(&self.site),
            payload: PayloadRange::new(
                self.payload_min.unwrap_or(full.low()),
                self.payload_max.unwrap_or(full.high()),
            ),
        }
    }
}
