use super::error::AppError;
use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Month/day plus hour:minute, matching the dashboard's display locale
pub const LABEL_FORMAT: &str = "%m/%d %H:%M";

/// Full date and time used for the "generated at" footer
pub const FOOTER_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

// Backend timestamps are usually naive local times (`datetime.isoformat()`)
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// One forecast sample
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub timestamp: String,
    pub value: f64,
}

impl TimePoint {
    pub fn new(timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            value,
        }
    }
}

/// Generation and price forecasts for one area, index-aligned by time slot
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastBundle {
    pub area: String,
    pub generation: Vec<TimePoint>,
    pub price: Vec<TimePoint>,
    pub generated_at: String,
}

impl ForecastBundle {
    pub fn new(
        area: impl Into<String>,
        generation: Vec<TimePoint>,
        price: Vec<TimePoint>,
        generated_at: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            generation,
            price,
            generated_at: generated_at.into(),
        }
    }

    /// Number of forecast slots, taken from the generation series
    pub fn len(&self) -> usize {
        self.generation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generation.is_empty()
    }

    /// Chart-ready rows, see [`align_series`]
    pub fn chart_rows(&self) -> Result<Vec<ChartRow>, AppError> {
        align_series(self)
    }

    pub fn generated_at_label(&self) -> String {
        format_display_time(&self.generated_at, FOOTER_FORMAT)
    }
}

/// One display row of the forecast chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRow {
    /// Locale-formatted label for the x axis
    pub time: String,
    /// Untouched source timestamp, kept for tooltips and sorting
    pub timestamp: String,
    pub generation_value: f64,
    pub price_value: f64,
}

/// Merges the generation and price series of a bundle into one row per slot.
///
/// The two series are paired by position. Their lengths must match; a
/// mismatch is reported as [`AppError::Alignment`] instead of reading past
/// the shorter series. Timestamps at the same index are trusted to refer to
/// the same slot and are not compared.
pub fn align_series(bundle: &ForecastBundle) -> Result<Vec<ChartRow>, AppError> {
    let generation = &bundle.generation;
    let price = &bundle.price;

    if generation.len() != price.len() {
        return Err(AppError::Alignment {
            generation: generation.len(),
            price: price.len(),
        });
    }

    if let Some((first_gen, first_price)) = generation.first().zip(price.first()) {
        if first_gen.timestamp != first_price.timestamp {
            log::debug!(
                "Forecast series start at different timestamps ({} vs {})",
                first_gen.timestamp,
                first_price.timestamp
            );
        }
    }

    Ok(generation
        .iter()
        .zip(price)
        .map(|(gen_point, price_point)| ChartRow {
            time: format_time_label(&gen_point.timestamp),
            timestamp: gen_point.timestamp.clone(),
            generation_value: round_one_decimal(gen_point.value),
            price_value: round_one_decimal(price_point.value),
        })
        .collect())
}

/// Rounds half away from zero to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Short x-axis label for a timestamp; unparsable input is shown as-is
pub fn format_time_label(timestamp: &str) -> String {
    format_display_time(timestamp, LABEL_FORMAT)
}

/// Formats a timestamp for display.
///
/// Offset-qualified timestamps are converted to the browser's local zone;
/// naive ones are already local wall-clock time and are formatted directly.
fn format_display_time(raw: &str, format: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(format).to_string();
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|candidate| NaiveDateTime::parse_from_str(raw, candidate).ok())
        .map_or_else(|| raw.to_string(), |naive| naive.format(format).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_one_decimal(0.25), 0.3);
        assert_eq!(round_one_decimal(-0.25), -0.3);
        assert_eq!(round_one_decimal(12.34), 12.3);
        assert_eq!(round_one_decimal(10.0), 10.0);
    }

    #[test]
    fn test_label_from_naive_isoformat() {
        assert_eq!(format_time_label("2025-01-15T09:30:00"), "01/15 09:30");
        assert_eq!(format_time_label("2025-01-15T09:30:00.123456"), "01/15 09:30");
        assert_eq!(format_time_label("2025-01-15 23:00:00"), "01/15 23:00");
    }

    #[test]
    fn test_label_falls_back_to_raw_text() {
        assert_eq!(format_time_label("not a time"), "not a time");
    }

    #[test]
    fn test_generated_at_label() {
        let bundle = ForecastBundle::new("tokyo", vec![], vec![], "2025-01-15T09:30:05.5");
        assert_eq!(bundle.generated_at_label(), "2025/01/15 09:30:05");
    }
}
