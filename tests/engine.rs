//! Scenario and property tests for the compliance engine.
//!
//! Invariants exercised here:
//! - classification is deterministic and status always agrees with balance
//! - filtering is a stable, order-preserving subsequence
//! - search is case-insensitive
//! - pages tile the filtered set exactly, and totals are consistent
//! - pooling is commutative

use fleet_compliance_monitor::domain::{
    classify, classify_fleet, filter_fleet, pool_selection, pool_vessels, query_fleet,
    ComplianceStatus, FleetQuery, PoolVerdict, RawVesselRecord, StatusFilter, Vessel,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn record(ship_id: &str, ship_type: &str, intensity: &str, balance: &str) -> RawVesselRecord {
    RawVesselRecord {
        ship_id: ship_id.to_string(),
        ship_type: ship_type.to_string(),
        ghg_intensity: intensity.to_string(),
        compliance_balance: balance.to_string(),
    }
}

#[test]
fn end_to_end_scenario() {
    let records = [
        record("S1", "Tanker", "95.2", "-120.50"),
        record("S2", "Bulk", "60.0", "300.00"),
    ];
    let fleet = classify_fleet(&records);

    assert_eq!(fleet[0].status, ComplianceStatus::Deficit);
    assert_eq!(fleet[0].balance, Some(-120.50));
    assert_eq!(fleet[1].status, ComplianceStatus::Surplus);
    assert_eq!(fleet[1].balance, Some(300.00));

    let query = FleetQuery {
        search: "S".to_string(),
        status: StatusFilter::Deficit,
        page: 1,
        page_size: 7,
    };
    let page = query_fleet(&fleet, &query).unwrap();
    assert_eq!(page.total_matched, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].ship_id, "S1");

    let outcome = pool_selection(&fleet, Some("S1"), Some("S2")).unwrap();
    assert_eq!(outcome.net_balance, 179.50);
    assert_eq!(outcome.verdict, PoolVerdict::Compliant);
}

#[test]
fn malformed_intensity_does_not_drop_the_record() {
    let records = [
        record("S1", "Tanker", "n/a", "-3.00"),
        record("S2", "Bulk", "60.0", "300.00"),
    ];
    let fleet = classify_fleet(&records);

    // The malformed vessel is still classified from its balance.
    assert_eq!(fleet[0].intensity, None);
    assert_eq!(fleet[0].status, ComplianceStatus::Deficit);

    // And still browsable alongside the clean records.
    let page = query_fleet(&fleet, &FleetQuery::new(7)).unwrap();
    assert_eq!(page.total_matched, 2);
}

fn decimal_string() -> impl Strategy<Value = String> {
    prop_oneof![
        (-500.0..500.0f64).prop_map(|v| format!("{v:.2}")),
        (-500.0..500.0f64).prop_map(|v| format!("  {v:.2} kg")),
        Just("n/a".to_string()),
        Just(String::new()),
    ]
}

fn raw_record() -> impl Strategy<Value = RawVesselRecord> {
    (
        "[A-Z][A-Z0-9]{1,5}",
        prop::sample::select(vec!["Tanker", "Bulk", "Ferry", "Container"]),
        decimal_string(),
        decimal_string(),
    )
        .prop_map(|(id, kind, intensity, balance)| record(&id, kind, &intensity, &balance))
}

fn fleet_strategy() -> impl Strategy<Value = Vec<Vessel>> {
    prop::collection::vec(raw_record(), 0..40).prop_map(|records| classify_fleet(&records))
}

/// True when `needle` appears in `haystack` in order (not necessarily
/// contiguously).
fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut iter = haystack.iter();
    needle.iter().all(|item| iter.any(|other| other == item))
}

proptest! {
    #[test]
    fn classification_is_deterministic(raw in raw_record()) {
        prop_assert_eq!(classify(&raw), classify(&raw));
    }

    #[test]
    fn status_agrees_with_balance(raw in raw_record()) {
        let vessel = classify(&raw);
        let is_deficit = vessel.balance.map(|b| b < 0.0).unwrap_or(false);
        prop_assert_eq!(vessel.status == ComplianceStatus::Deficit, is_deficit);
    }

    #[test]
    fn query_preserves_input_order(
        fleet in fleet_strategy(),
        search in "[a-zA-Z0-9]{0,3}",
        page in 1..6usize,
    ) {
        let query = FleetQuery {
            search,
            status: StatusFilter::Deficit,
            page,
            page_size: 5,
        };
        let result = query_fleet(&fleet, &query).unwrap();
        let page_ids: Vec<String> = result.rows.iter().map(|v| v.ship_id.clone()).collect();
        let all_ids: Vec<String> = fleet.iter().map(|v| v.ship_id.clone()).collect();
        prop_assert!(is_subsequence(&page_ids, &all_ids));
    }

    #[test]
    fn search_is_case_insensitive(fleet in fleet_strategy(), search in "[a-z0-9]{1,4}") {
        let lower = FleetQuery {
            search: search.clone(),
            status: StatusFilter::All,
            page: 1,
            page_size: 7,
        };
        let upper = FleetQuery {
            search: search.to_uppercase(),
            ..lower.clone()
        };
        prop_assert_eq!(
            query_fleet(&fleet, &lower).unwrap(),
            query_fleet(&fleet, &upper).unwrap()
        );
    }

    #[test]
    fn pages_tile_the_filtered_set(fleet in fleet_strategy(), page_size in 1..10usize) {
        let query = FleetQuery {
            search: String::new(),
            status: StatusFilter::Surplus,
            page: 1,
            page_size,
        };
        let first = query_fleet(&fleet, &query).unwrap();
        let expected: Vec<String> = filter_fleet(&fleet, &query)
            .iter()
            .map(|v| v.ship_id.clone())
            .collect();

        prop_assert_eq!(
            first.total_pages,
            (first.total_matched.div_ceil(page_size)).max(1)
        );

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let q = FleetQuery { page, ..query.clone() };
            seen.extend(
                query_fleet(&fleet, &q)
                    .unwrap()
                    .rows
                    .into_iter()
                    .map(|v| v.ship_id),
            );
        }
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn pooling_is_commutative(a in raw_record(), b in raw_record()) {
        let a = classify(&a);
        let b = classify(&b);
        prop_assert_eq!(pool_vessels(&a, &b), pool_vessels(&b, &a));
    }
}
