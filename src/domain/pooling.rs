//! Pooling simulation: offset one vessel's compliance balance against
//! another's and report the joint verdict.

use thiserror::Error;

use super::entities::Vessel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolVerdict {
    Compliant,
    NonCompliant,
}

impl PoolVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            PoolVerdict::Compliant => "COMPLIANT",
            PoolVerdict::NonCompliant => "NON-COMPLIANT",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PoolOutcome {
    pub net_balance: f64,
    pub verdict: PoolVerdict,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// The shell invoked pooling without two resolved vessels.
    #[error("select two vessels to simulate pooling")]
    MissingSelection,
    /// A selected vessel's balance never parsed; no verdict can be honest.
    #[error("cannot compute: compliance balance of {0} is not numeric")]
    IndeterminateBalance(String),
}

/// Pool two vessels' balances. Commutative; accepts any pair, including two
/// deficits or two surpluses — the slot labels in the UI are presentation,
/// not a precondition.
pub fn pool_vessels(a: &Vessel, b: &Vessel) -> Result<PoolOutcome, PoolError> {
    let balance_a = a
        .balance
        .ok_or_else(|| PoolError::IndeterminateBalance(a.ship_id.clone()))?;
    let balance_b = b
        .balance
        .ok_or_else(|| PoolError::IndeterminateBalance(b.ship_id.clone()))?;

    let net_balance = balance_a + balance_b;
    let verdict = if net_balance >= 0.0 {
        PoolVerdict::Compliant
    } else {
        PoolVerdict::NonCompliant
    };

    Ok(PoolOutcome {
        net_balance,
        verdict,
    })
}

/// Resolve two ship-id selections against a snapshot and pool them.
/// An absent or unknown id is a `MissingSelection`, surfaced so the shell
/// can prompt instead of rendering a misleading zero.
pub fn pool_selection(
    vessels: &[Vessel],
    ship_a: Option<&str>,
    ship_b: Option<&str>,
) -> Result<PoolOutcome, PoolError> {
    let a = resolve(vessels, ship_a).ok_or(PoolError::MissingSelection)?;
    let b = resolve(vessels, ship_b).ok_or(PoolError::MissingSelection)?;
    pool_vessels(a, b)
}

fn resolve<'a>(vessels: &'a [Vessel], ship_id: Option<&str>) -> Option<&'a Vessel> {
    let ship_id = ship_id?.trim();
    if ship_id.is_empty() {
        return None;
    }
    vessels.iter().find(|vessel| vessel.ship_id == ship_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::classify;
    use crate::domain::entities::RawVesselRecord;

    fn vessel(id: &str, balance: &str) -> Vessel {
        classify(&RawVesselRecord {
            ship_id: id.to_string(),
            ship_type: "Tanker".to_string(),
            ghg_intensity: "50.0".to_string(),
            compliance_balance: balance.to_string(),
        })
    }

    #[test]
    fn net_balance_is_the_sum() {
        let outcome = pool_vessels(&vessel("S1", "-120.50"), &vessel("S2", "300.00")).unwrap();
        assert_eq!(outcome.net_balance, 179.5);
        assert_eq!(outcome.verdict, PoolVerdict::Compliant);
    }

    #[test]
    fn exact_zero_is_compliant() {
        let outcome = pool_vessels(&vessel("A", "-5.00"), &vessel("B", "5.00")).unwrap();
        assert_eq!(outcome.net_balance, 0.0);
        assert_eq!(outcome.verdict, PoolVerdict::Compliant);
    }

    #[test]
    fn just_below_zero_is_non_compliant() {
        let outcome = pool_vessels(&vessel("A", "-5.01"), &vessel("B", "5.00")).unwrap();
        assert!(outcome.net_balance < 0.0);
        assert_eq!(outcome.verdict, PoolVerdict::NonCompliant);
    }

    #[test]
    fn pooling_is_commutative() {
        let a = vessel("A", "-12.5");
        let b = vessel("B", "4.25");
        assert_eq!(pool_vessels(&a, &b), pool_vessels(&b, &a));
    }

    #[test]
    fn two_deficits_are_accepted() {
        let outcome = pool_vessels(&vessel("A", "-1.0"), &vessel("B", "-2.0")).unwrap();
        assert_eq!(outcome.net_balance, -3.0);
        assert_eq!(outcome.verdict, PoolVerdict::NonCompliant);
    }

    #[test]
    fn unparsed_balance_is_indeterminate() {
        let err = pool_vessels(&vessel("A", "n/a"), &vessel("B", "5.0")).unwrap_err();
        assert_eq!(err, PoolError::IndeterminateBalance("A".to_string()));
    }

    #[test]
    fn missing_selection_is_surfaced() {
        let fleet = [vessel("S1", "-1.0"), vessel("S2", "2.0")];
        assert_eq!(
            pool_selection(&fleet, None, Some("S2")),
            Err(PoolError::MissingSelection)
        );
        assert_eq!(
            pool_selection(&fleet, Some(""), Some("S2")),
            Err(PoolError::MissingSelection)
        );
        assert_eq!(
            pool_selection(&fleet, Some("S1"), Some("ghost")),
            Err(PoolError::MissingSelection)
        );
    }

    #[test]
    fn selection_resolves_by_ship_id() {
        let fleet = [vessel("S1", "-1.0"), vessel("S2", "2.0")];
        let outcome = pool_selection(&fleet, Some("S1"), Some("S2")).unwrap();
        assert_eq!(outcome.net_balance, 1.0);
    }
}
