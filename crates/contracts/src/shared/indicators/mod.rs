use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money,
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    #[default]
    Neutral,
    Warning,
}

impl IndicatorStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            IndicatorStatus::Good => "indicator--good",
            IndicatorStatus::Bad => "indicator--bad",
            IndicatorStatus::Neutral => "indicator--neutral",
            IndicatorStatus::Warning => "indicator--warning",
        }
    }
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// One card on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
    /// Primary numeric value (`None` when data is unavailable).
    pub value: Option<f64>,
    /// Change relative to previous period, expressed as a percentage.
    pub change_percent: Option<f64>,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

impl IndicatorValue {
    pub fn new(id: &str, label: &str, icon: &str, format: ValueFormat, value: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            format,
            value: value.is_finite().then_some(value),
            change_percent: None,
            status: IndicatorStatus::Neutral,
            subtitle: None,
        }
    }

    /// Изменение к прошлому периоду; без базы сравнения не показывается
    pub fn with_previous(mut self, previous: Option<f64>) -> Self {
        self.change_percent = match (self.value, previous) {
            (Some(cur), Some(prev)) if prev != 0.0 && prev.is_finite() => {
                Some((cur - prev) / prev.abs() * 100.0)
            }
            _ => None,
        };
        self.status = match self.change_percent {
            Some(c) if c > 0.0 => IndicatorStatus::Good,
            Some(c) if c < 0.0 => IndicatorStatus::Bad,
            _ => IndicatorStatus::Neutral,
        };
        self
    }

    pub fn with_status(mut self, status: IndicatorStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_percent_needs_nonzero_base() {
        let v = IndicatorValue::new("revenue", "Revenue", "dollar", ValueFormat::Money, 150.0)
            .with_previous(Some(100.0));
        assert_eq!(v.change_percent, Some(50.0));
        assert_eq!(v.status, IndicatorStatus::Good);

        let v = IndicatorValue::new("revenue", "Revenue", "dollar", ValueFormat::Money, 150.0)
            .with_previous(Some(0.0));
        assert_eq!(v.change_percent, None);
        assert_eq!(v.status, IndicatorStatus::Neutral);

        let v = IndicatorValue::new("x", "X", "x", ValueFormat::Integer, f64::NAN);
        assert_eq!(v.value, None);
    }
}
