//! Fleet browsing: free-text search, status filtering and pagination.
//!
//! Filtering is stable (input order preserved, no sorting) and pagination is
//! a total function: an out-of-range page yields an empty row set rather
//! than an error, so the caller can clamp however it likes.

use thiserror::Error;

use super::entities::{ComplianceStatus, Vessel};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Deficit,
    Surplus,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] =
        [StatusFilter::All, StatusFilter::Deficit, StatusFilter::Surplus];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Deficit => "Deficit",
            StatusFilter::Surplus => "Surplus",
        }
    }

    pub fn from_label(label: &str) -> StatusFilter {
        match label {
            "Deficit" => StatusFilter::Deficit,
            "Surplus" => StatusFilter::Surplus,
            _ => StatusFilter::All,
        }
    }

    fn matches(&self, status: ComplianceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Deficit => status == ComplianceStatus::Deficit,
            StatusFilter::Surplus => status == ComplianceStatus::Surplus,
        }
    }
}

/// One browse request. Owned by the caller, nothing here is retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FleetQuery {
    pub search: String,
    pub status: StatusFilter,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl FleetQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            page: 1,
            page_size,
        }
    }
}

/// The page to display plus the totals the pager needs.
#[derive(Clone, Debug, PartialEq)]
pub struct FleetPage {
    pub rows: Vec<Vessel>,
    pub total_matched: usize,
    pub total_pages: usize,
}

impl FleetPage {
    /// 1-based index of the first row on this page, for "Showing X to Y".
    pub fn first_row_index(&self, query: &FleetQuery) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (query.page - 1) * query.page_size + 1
        }
    }

    pub fn last_row_index(&self, query: &FleetQuery) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (query.page - 1) * query.page_size + self.rows.len()
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("page size must be a positive integer, got {0}")]
    InvalidPageSize(usize),
}

/// Apply the search term and status filter, preserving input order.
///
/// The search matches case-insensitively against ship id OR ship type; an
/// empty term matches everything.
pub fn filter_fleet<'a>(vessels: &'a [Vessel], query: &FleetQuery) -> Vec<&'a Vessel> {
    let needle = query.search.trim().to_lowercase();
    vessels
        .iter()
        .filter(|vessel| {
            needle.is_empty()
                || vessel.ship_id.to_lowercase().contains(&needle)
                || vessel.ship_type.to_lowercase().contains(&needle)
        })
        .filter(|vessel| query.status.matches(vessel.status))
        .collect()
}

/// Run one browse request against a fleet snapshot.
pub fn query_fleet(vessels: &[Vessel], query: &FleetQuery) -> Result<FleetPage, QueryError> {
    if query.page_size == 0 {
        return Err(QueryError::InvalidPageSize(query.page_size));
    }

    let matched = filter_fleet(vessels, query);
    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(query.page_size).max(1);

    let start = query.page.saturating_sub(1).saturating_mul(query.page_size);
    let rows = if start >= total_matched {
        Vec::new()
    } else {
        matched[start..(start + query.page_size).min(total_matched)]
            .iter()
            .map(|vessel| (*vessel).clone())
            .collect()
    };

    Ok(FleetPage {
        rows,
        total_matched,
        total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::classify;
    use crate::domain::entities::RawVesselRecord;

    fn fleet() -> Vec<Vessel> {
        let records = [
            ("S1", "Tanker", "-120.50"),
            ("S2", "Bulk", "300.00"),
            ("S3", "Tanker", "-4.00"),
            ("S4", "Ferry", "0.00"),
            ("S5", "Bulk", "-9.99"),
        ];
        records
            .iter()
            .map(|(id, kind, balance)| {
                classify(&RawVesselRecord {
                    ship_id: id.to_string(),
                    ship_type: kind.to_string(),
                    ghg_intensity: "50.0".to_string(),
                    compliance_balance: balance.to_string(),
                })
            })
            .collect()
    }

    fn query(search: &str, status: StatusFilter, page: usize, page_size: usize) -> FleetQuery {
        FleetQuery {
            search: search.to_string(),
            status,
            page,
            page_size,
        }
    }

    #[test]
    fn empty_search_matches_everything() {
        let page = query_fleet(&fleet(), &query("", StatusFilter::All, 1, 7)).unwrap();
        assert_eq!(page.total_matched, 5);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.rows.len(), 5);
    }

    #[test]
    fn search_is_case_insensitive_over_id_and_type() {
        let vessels = fleet();
        let lower = query_fleet(&vessels, &query("tanker", StatusFilter::All, 1, 7)).unwrap();
        let upper = query_fleet(&vessels, &query("TANKER", StatusFilter::All, 1, 7)).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.total_matched, 2);

        let by_id = query_fleet(&vessels, &query("s4", StatusFilter::All, 1, 7)).unwrap();
        assert_eq!(by_id.rows[0].ship_id, "S4");
    }

    #[test]
    fn status_filter_composes_with_search() {
        let page = query_fleet(&fleet(), &query("S", StatusFilter::Deficit, 1, 7)).unwrap();
        let ids: Vec<_> = page.rows.iter().map(|v| v.ship_id.as_str()).collect();
        assert_eq!(ids, ["S1", "S3", "S5"]);
    }

    #[test]
    fn filtering_preserves_input_order() {
        let vessels = fleet();
        let filtered = filter_fleet(&vessels, &query("", StatusFilter::Deficit, 1, 7));
        let ids: Vec<_> = filtered.iter().map(|v| v.ship_id.as_str()).collect();
        assert_eq!(ids, ["S1", "S3", "S5"]);
    }

    #[test]
    fn pages_tile_the_filtered_set() {
        let vessels = fleet();
        let q = query("", StatusFilter::All, 1, 2);
        let first = query_fleet(&vessels, &q).unwrap();
        assert_eq!(first.total_pages, 3);

        let mut seen = Vec::new();
        for page_no in 1..=first.total_pages {
            let mut q = q.clone();
            q.page = page_no;
            let page = query_fleet(&vessels, &q).unwrap();
            seen.extend(page.rows.into_iter().map(|v| v.ship_id));
        }
        let expected: Vec<_> = vessels.iter().map(|v| v.ship_id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let page = query_fleet(&fleet(), &query("", StatusFilter::All, 9, 2)).unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.total_matched, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn no_matches_still_reports_one_page() {
        let page = query_fleet(&fleet(), &query("submarine", StatusFilter::All, 1, 7)).unwrap();
        assert_eq!(page.total_matched, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = query_fleet(&fleet(), &query("", StatusFilter::All, 1, 0)).unwrap_err();
        assert_eq!(err, QueryError::InvalidPageSize(0));
    }

    #[test]
    fn row_range_labels() {
        let vessels = fleet();
        let q = query("", StatusFilter::All, 2, 2);
        let page = query_fleet(&vessels, &q).unwrap();
        assert_eq!(page.first_row_index(&q), 3);
        assert_eq!(page.last_row_index(&q), 4);

        let empty_q = query("submarine", StatusFilter::All, 1, 2);
        let empty = query_fleet(&vessels, &empty_q).unwrap();
        assert_eq!(empty.first_row_index(&empty_q), 0);
        assert_eq!(empty.last_row_index(&empty_q), 0);
    }
}
