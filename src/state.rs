use crate::data::classify;
use crate::data::model::{Reading, ReadingSet, Sector};
use crate::data::summary::{self, StatusCounts};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which tab of the report is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Readings with status Tolerance or Calibration.
    Review,
    /// All readings in one store section.
    Sector(Sector),
}

impl Tab {
    /// Review first, then one tab per sector, in fixed order.
    pub fn all() -> impl Iterator<Item = Tab> {
        std::iter::once(Tab::Review).chain(Sector::ALL.into_iter().map(Tab::Sector))
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Review => "Para Revisão",
            Tab::Sector(s) => s.label(),
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded, annotated dataset (None until the user loads a file).
    pub dataset: Option<ReadingSet>,

    /// Counts per status bucket (cached at load time).
    pub counts: StatusCounts,

    /// Indices of rows needing review, in original row order (cached).
    pub review_rows: Vec<usize>,

    /// Currently selected tab.
    pub selected_tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            counts: StatusCounts::default(),
            review_rows: Vec::new(),
            selected_tab: Tab::Review,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest freshly loaded rows: annotate each with its status and cache
    /// the aggregates.  Replaces any previously loaded dataset.
    pub fn set_dataset(&mut self, mut readings: Vec<Reading>) {
        classify::annotate(&mut readings);

        self.counts = summary::count_statuses(&readings);
        self.review_rows = summary::review_indices(&readings);
        self.dataset = Some(ReadingSet::from_readings(readings));
        self.selected_tab = Tab::Review;
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Status;

    #[test]
    fn set_dataset_annotates_and_caches_aggregates() {
        let rows = vec![
            Reading {
                scale_id: "1".into(),
                sector: Some(Sector::Frios),
                weight: 20000.0,
                max_capacity: 35000.0,
                status: Status::Unclassified,
            },
            Reading {
                scale_id: "2".into(),
                sector: Some(Sector::Padaria),
                weight: 10008.0,
                max_capacity: 15000.0,
                status: Status::Unclassified,
            },
        ];

        let mut state = AppState::default();
        state.set_dataset(rows);

        let ds = state.dataset.as_ref().unwrap();
        assert_eq!(ds.readings[0].status, Status::Ok);
        assert_eq!(ds.readings[1].status, Status::Calibration);
        assert_eq!(state.counts.total, 2);
        assert_eq!(state.counts.ok, 1);
        assert_eq!(state.review_rows, vec![1]);
        assert_eq!(state.selected_tab, Tab::Review);
    }

    #[test]
    fn tab_order_starts_with_review() {
        let tabs: Vec<Tab> = Tab::all().collect();
        assert_eq!(tabs[0], Tab::Review);
        assert_eq!(tabs.len(), 1 + Sector::ALL.len());
    }
}
