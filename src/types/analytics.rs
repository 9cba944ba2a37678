use serde::{Deserialize, Serialize};

use super::itinerary::BudgetBreakdown;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    pub total_budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_breakdown: Option<BudgetBreakdown>,
    /// `None` when not computable; see `TourAnalytics::not_computable`
    pub cost_per_person: Option<f64>,
    pub cost_per_day: Option<f64>,
}

/// Hours, not strings: rendering units is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAnalysis {
    pub total_duration: String,
    pub average_stop_duration_hours: f64,
    pub travel_time_hours: f64,
    pub active_time_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyMetrics {
    pub locations_per_day: Option<f64>,
    /// 1..=10, higher is cheaper per person-day
    pub budget_efficiency: Option<u8>,
    /// 1..=10, peaks at 3-5 locations per day
    pub time_efficiency: Option<u8>,
    /// 0..=100
    pub vehicle_utilization: u32,
}

/// A metric that could not be computed, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricIssue {
    pub metric: String,
    pub code: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourAnalytics {
    pub cost_analysis: CostAnalysis,
    pub time_analysis: TimeAnalysis,
    pub efficiency_metrics: EfficiencyMetrics,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_computable: Vec<MetricIssue>,
}
