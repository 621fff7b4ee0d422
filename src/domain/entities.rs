use serde::{Deserialize, Serialize};

/// A vessel record as delivered by the fleet-status feed.
///
/// The two numeric fields arrive as decimal-literal strings. Their JSON keys
/// are fixed contract strings (`"GHG Intensity"`, `"Compliance Balance"`,
/// spaces included) and must be matched exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawVesselRecord {
    pub ship_id: String,
    pub ship_type: String,
    #[serde(rename = "GHG Intensity")]
    pub ghg_intensity: String,
    #[serde(rename = "Compliance Balance")]
    pub compliance_balance: String,
}

/// Compliance classification of a single vessel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Deficit,
    Surplus,
}

impl ComplianceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Deficit => "Deficit",
            ComplianceStatus::Surplus => "Surplus",
        }
    }
}

/// A classified vessel, produced once per snapshot and never mutated.
///
/// `intensity` and `balance` are `None` when the source field carried no
/// numeric prefix at all. An unparsed value never classifies as deficit and
/// never produces a pooling verdict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub ship_id: String,
    pub ship_type: String,
    /// GHG intensity in kg CO2e per nautical mile.
    pub intensity: Option<f64>,
    /// Signed compliance balance; negative means deficit.
    pub balance: Option<f64>,
    pub status: ComplianceStatus,
}

impl Vessel {
    /// Fraction of a reference intensity this vessel emits, clamped to
    /// `[0, 1]` for rendering a bar. Unparsed intensity renders at zero.
    pub fn intensity_ratio(&self, reference: f64) -> f64 {
        if reference <= 0.0 {
            return 0.0;
        }
        self.intensity
            .map(|value| (value / reference).clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }

    pub fn intensity_display(&self) -> String {
        match self.intensity {
            Some(value) => format!("{value:.2}"),
            None => "n/a".to_string(),
        }
    }

    pub fn balance_display(&self) -> String {
        match self.balance {
            Some(value) => format!("{value:.2}"),
            None => "n/a".to_string(),
        }
    }
}

/// Headline counts for the KPI cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FleetSummary {
    pub total: usize,
    pub deficit: usize,
    pub surplus: usize,
}
