use crate::data::model::{PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Input-change events and the chart regions they invalidate
// ---------------------------------------------------------------------------

/// A change to one of the dashboard's input widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    SiteSelected(SiteSelection),
    PayloadRangeChanged(PayloadRange),
}

/// An independently re-rendered output of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRegion {
    SuccessPie,
    PayloadScatter,
}

impl DashboardEvent {
    /// The pie watches only the site; the scatter watches site and payload.
    pub fn affected_regions(&self) -> &'static [ChartRegion] {
        match self {
            DashboardEvent::SiteSelected(_) => {
                &[ChartRegion::SuccessPie, ChartRegion::PayloadScatter]
            }
            DashboardEvent::PayloadRangeChanged(_) => &[ChartRegion::PayloadScatter],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_change_touches_both_charts() {
        let ev = DashboardEvent::SiteSelected(SiteSelection::All);
        assert_eq!(
            ev.affected_regions(),
            [ChartRegion::SuccessPie, ChartRegion::PayloadScatter]
        );
    }

    #[test]
    fn payload_change_touches_only_scatter() {
        let ev = DashboardEvent::PayloadRangeChanged(PayloadRange::new(0.0, 1000.0));
        assert_eq!(ev.affected_regions(), [ChartRegion::PayloadScatter]);
    }
}
