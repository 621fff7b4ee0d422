//! Vessel classification: raw feed records in, classified vessels out.
//!
//! Status is derived here and nowhere else: a vessel is `Deficit` iff its
//! compliance balance parses and is negative. Everything downstream (query
//! engine, pooling, badges) consumes the derived status instead of
//! re-deciding it.

use super::entities::{ComplianceStatus, FleetSummary, RawVesselRecord, Vessel};

/// Reference intensity used only to scale the fleet table's intensity bars.
/// A placeholder policy value, not a certified emissions standard.
pub const INTENSITY_BAR_REFERENCE: f64 = 100.0;

/// Classify a single record.
///
/// Numeric fields are parsed permissively: the longest decimal prefix wins
/// and trailing junk is ignored. A field with no numeric prefix at all
/// yields `None` rather than an error, so one malformed record never blocks
/// the rest of the fleet.
pub fn classify(raw: &RawVesselRecord) -> Vessel {
    let intensity = parse_decimal_prefix(&raw.ghg_intensity);
    let balance = parse_decimal_prefix(&raw.compliance_balance);

    let status = if balance.map(|value| value < 0.0).unwrap_or(false) {
        ComplianceStatus::Deficit
    } else {
        ComplianceStatus::Surplus
    };

    Vessel {
        ship_id: raw.ship_id.clone(),
        ship_type: raw.ship_type.clone(),
        intensity,
        balance,
        status,
    }
}

/// Classify a whole snapshot, preserving feed order.
pub fn classify_fleet(records: &[RawVesselRecord]) -> Vec<Vessel> {
    records.iter().map(classify).collect()
}

pub fn fleet_summary(vessels: &[Vessel]) -> FleetSummary {
    let deficit = vessels
        .iter()
        .filter(|vessel| vessel.status == ComplianceStatus::Deficit)
        .count();
    FleetSummary {
        total: vessels.len(),
        deficit,
        surplus: vessels.len() - deficit,
    }
}

/// Parse the decimal prefix of a string: optional leading whitespace, an
/// optional sign, digits with at most one decimal point. Returns `None`
/// when no digit is found before the first non-numeric character.
pub fn parse_decimal_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_point = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    trimmed[..end].parse::<f64>().ok()
}
