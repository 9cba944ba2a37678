//! Inputs and outputs of the auxiliary tour operations: route optimization,
//! weather impact, summaries and personalized recommendations.

use serde::{Deserialize, Deserializer, Serialize};

/// Conditions on the ground. Every field is optional; the documented
/// default is what the prompt states when it is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentConditions {
    /// Default: "Unknown"
    pub weather: Option<String>,
    /// Default: "Normal"
    pub traffic: Option<String>,
    /// Default: "None"
    pub events: Option<String>,
    /// Default: "None"
    pub time_constraints: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutePreferences {
    /// Default: "None"
    pub priority_changes: Option<String>,
    /// Default: "None"
    pub new_constraints: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub tour_id: String,
    #[serde(default)]
    pub current_conditions: CurrentConditions,
    #[serde(default)]
    pub preferences: RoutePreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlternativeRoute {
    pub name: String,
    pub description: String,
    pub stops: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptimization {
    pub suggestions: String,
    pub alternative_routes: Vec<AlternativeRoute>,
}

/// Shape the model is asked to answer optimization prompts with.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct GeneratedOptimization {
    #[serde(deserialize_with = "suggestion_text")]
    pub suggestions: Option<String>,
    pub alternative_routes: Vec<AlternativeRoute>,
}

/// Accept suggestions as one string or as a list of lines.
fn suggestion_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        One(String),
        Lines(Vec<String>),
    }

    Ok(Option::<Text>::deserialize(deserializer)?.map(|text| match text {
        Text::One(text) => text,
        Text::Lines(lines) => lines.join("\n"),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherImpact {
    pub affected_activities: Vec<String>,
    pub alternatives: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSummary {
    pub overview: String,
    pub key_highlights: Vec<String>,
    pub logistics_overview: String,
    pub budget_summary: String,
}

/// Loose traveller preferences for free-text recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    /// Budget range, e.g. "1000-2000 USD"
    pub budget: String,
    pub interests: Vec<String>,
    pub travel_style: String,
    /// Days
    pub duration: u32,
    pub group_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}
