use super::model::{CategoryCount, TrafficRecord};

// ---------------------------------------------------------------------------
// Selection: the value of one dropdown
// ---------------------------------------------------------------------------

/// Current value of a dropdown filter.
/// `None` means nothing is selected, i.e. show everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    pub fn none() -> Self {
        Selection(None)
    }

    pub fn value(value: impl Into<String>) -> Self {
        Selection(Some(value.into()))
    }

    /// Build from a query-string parameter.  An absent or empty
    /// parameter is the cleared dropdown.
    pub fn from_query(param: Option<&str>) -> Self {
        match param {
            Some(v) if !v.is_empty() => Selection::value(v),
            _ => Selection::none(),
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether `candidate` passes this selection.
    pub fn matches(&self, candidate: &str) -> bool {
        match &self.0 {
            Some(selected) => selected == candidate,
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Keep the traffic rows whose network matches the selection.
pub fn filter_traffic_by_network(rows: &[TrafficRecord], selection: &Selection) -> Vec<TrafficRecord> {
    rows.iter()
        .filter(|r| selection.matches(&r.network))
        .cloned()
        .collect()
}

/// Keep the grouped counts whose category matches the selection.
pub fn filter_counts(counts: &[CategoryCount], selection: &Selection) -> Vec<CategoryCount> {
    counts
        .iter()
        .filter(|c| selection.matches(&c.category))
        .cloned()
        .collect()
}
