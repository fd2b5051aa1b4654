use serde::{Serialize, Deserialize};

/// Usage summary for one page, as served by `GET /api/analytics?page=:id`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub page_views: u64,
    pub spins: u64,
    pub redemptions: u64,
    /// Fraction in 0..=1. Formatting multiplies by 100 exactly once; see
    /// [`format_redemption_rate`].
    pub redemption_rate: f64,
    #[serde(default)]
    pub prize_counts: Vec<PrizeCount>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeCount {
    pub prize_id: String,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PageView,
    Spin,
    Redeem,
}

/// One ingestion event for `POST /api/analytics`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub page_id: String,
    pub kind: EventKind,
    #[serde(default)]
    pub prize_id: Option<String>,
    pub occurred_at: String,
}

/// Render a 0..=1 redemption rate as a percentage string. Out-of-range
/// values from the server are clamped rather than propagated into the UI.
pub fn format_redemption_rate(rate: f64) -> String {
    let rate = if rate.is_finite() { rate.clamp(0.0, 1.0) } else { 0.0 };
    format!("{:.1}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_multiplied_by_one_hundred_once() {
        assert_eq!(format_redemption_rate(0.0), "0.0%");
        assert_eq!(format_redemption_rate(0.25), "25.0%");
        assert_eq!(format_redemption_rate(0.333), "33.3%");
        assert_eq!(format_redemption_rate(1.0), "100.0%");
    }

    #[test]
    fn out_of_range_rates_are_clamped() {
        assert_eq!(format_redemption_rate(-0.5), "0.0%");
        assert_eq!(format_redemption_rate(42.0), "100.0%");
        assert_eq!(format_redemption_rate(f64::NAN), "0.0%");
    }
}
