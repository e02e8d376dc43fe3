use serde::{Deserialize, Serialize};

/// Retrospective forecast accuracy over a look-back window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracySummary {
    pub area: String,
    pub period_days: u32,

    /// Absent when there was not enough paired actual/predicted data
    #[serde(default)]
    pub generation_mape: Option<f64>,

    #[serde(default)]
    pub price_mape: Option<f64>,

    #[serde(default)]
    pub note: String,
}

impl AccuracySummary {
    pub fn generation_tier(&self) -> AccuracyTier {
        classify(self.generation_mape)
    }

    pub fn price_tier(&self) -> AccuracyTier {
        classify(self.price_mape)
    }

    /// True when neither metric could be computed
    pub fn is_empty(&self) -> bool {
        self.generation_tier() == AccuracyTier::Absent && self.price_tier() == AccuracyTier::Absent
    }
}

/// Quality bucket for a MAPE value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyTier {
    Absent,
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AccuracyTier {
    /// Every tier, best first, followed by `Absent`
    pub const fn all() -> &'static [Self] {
        &[
            Self::Excellent,
            Self::Good,
            Self::Fair,
            Self::Poor,
            Self::Absent,
        ]
    }

    /// Returns CSS class name for color coding
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Absent => "accuracy-absent",
            Self::Excellent => "accuracy-excellent",
            Self::Good => "accuracy-good",
            Self::Fair => "accuracy-fair",
            Self::Poor => "accuracy-poor",
        }
    }

    /// Returns human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Absent => "No data",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Needs improvement",
        }
    }

    /// Returns color token for display (hex code)
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Absent => "#999999",
            Self::Excellent => "#4caf50", // green
            Self::Good => "#8bc34a",      // light green
            Self::Fair => "#ff9800",      // orange
            Self::Poor => "#f44336",      // red
        }
    }

    /// Legend text describing the MAPE range of the tier
    pub const fn range_description(&self) -> &'static str {
        match self {
            Self::Absent => "not enough paired actual and forecast data",
            Self::Excellent => "< 5%",
            Self::Good => "5% to < 10%",
            Self::Fair => "10% to < 20%",
            Self::Poor => ">= 20%",
        }
    }
}

/// Maps a MAPE percentage to its quality tier.
///
/// Each bucket includes its lower bound and excludes its upper bound; the
/// last bucket is unbounded. NaN is treated like a missing value.
pub fn classify(mape: Option<f64>) -> AccuracyTier {
    match mape {
        None => AccuracyTier::Absent,
        Some(value) if value.is_nan() => AccuracyTier::Absent,
        Some(value) if value < 5.0 => AccuracyTier::Excellent,
        Some(value) if value < 10.0 => AccuracyTier::Good,
        Some(value) if value < 20.0 => AccuracyTier::Fair,
        Some(_) => AccuracyTier::Poor,
    }
}

/// MAPE rendered with two decimals, or the absent label
pub fn format_mape(mape: Option<f64>) -> String {
    match mape {
        Some(value) if !value.is_nan() => format!("{value:.2}%"),
        _ => AccuracyTier::Absent.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_absent() {
        assert_eq!(classify(Some(f64::NAN)), AccuracyTier::Absent);
        assert_eq!(classify(Some(f64::INFINITY)), AccuracyTier::Poor);
    }

    #[test]
    fn test_format_mape() {
        assert_eq!(format_mape(Some(3.456)), "3.46%");
        assert_eq!(format_mape(None), "No data");
    }

    #[test]
    fn test_summary_deserialization_with_nulls() {
        let json = r#"{
            "area": "tokyo",
            "period_days": 7,
            "generation_mape": 4.2,
            "price_mape": null,
            "note": "lower is better"
        }"#;

        let summary: AccuracySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.generation_tier(), AccuracyTier::Excellent);
        assert_eq!(summary.price_tier(), AccuracyTier::Absent);
        assert!(!summary.is_empty());
    }
}
