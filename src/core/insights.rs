//! Record-derived insights that need no generative call.

use crate::{
    core::analytics::cost_per_person,
    types::{CurrentConditions, ItineraryRecord, TourSummary, WeatherImpact},
};

const WEATHER_ALTERNATIVES: [&str; 3] = ["Indoor museums", "Shopping centers", "Cultural centers"];
const WEATHER_RECOMMENDATIONS: [&str; 3] = [
    "Check weather forecast daily",
    "Have indoor backup plans",
    "Bring appropriate weather gear",
];

/// Locations of weather-exposed stops, with fixed indoor alternatives.
///
/// A stop is exposed when its description mentions "outdoor" or "park", or
/// its location mentions "garden". The reported conditions are accepted for
/// the request shape but do not change the result.
pub fn weather_impact(record: &ItineraryRecord, _conditions: &CurrentConditions) -> WeatherImpact {
    let affected_activities = record
        .itinerary
        .iter()
        .filter(|stop| {
            let description = stop.description.to_lowercase();
            description.contains("outdoor")
                || description.contains("park")
                || stop.location.to_lowercase().contains("garden")
        })
        .map(|stop| stop.location.clone())
        .collect();

    WeatherImpact {
        affected_activities,
        alternatives: WEATHER_ALTERNATIVES.iter().map(|s| s.to_string()).collect(),
        recommendations: WEATHER_RECOMMENDATIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

pub fn summary(record: &ItineraryRecord) -> TourSummary {
    let per_person = cost_per_person(record.total_budget, record.total_participants)
        .map(|cost| format!("{} per person", cost.round()))
        .unwrap_or_else(|_| "n/a per person".to_string());

    TourSummary {
        overview: format!(
            "{} {} in {} for {} participants",
            record.duration, record.title, record.destination, record.total_participants
        ),
        key_highlights: record.highlights.clone(),
        logistics_overview: format!(
            "{} vehicles coordinated across {} locations",
            record.vehicle_assignments.len(),
            record.itinerary.len()
        ),
        budget_summary: format!("Total budget: {} ({})", record.total_budget, per_person),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItineraryDraft, Stop, VehicleAssignment};
    use chrono::Utc;

    fn stop(location: &str, description: &str) -> Stop {
        Stop {
            location: location.to_string(),
            description: description.to_string(),
            ..Stop::default()
        }
    }

    fn record() -> ItineraryRecord {
        let mut record = ItineraryRecord::from_draft(
            ItineraryDraft {
                title: "Lakeside Loop".to_string(),
                duration: "3 days".to_string(),
                highlights: vec!["Cholpon-Ata petroglyphs".to_string()],
                ..ItineraryDraft::default()
            },
            Utc::now(),
        );
        record.destination = "Issyk-Kul".to_string();
        record.total_budget = 1000.0;
        record.total_participants = 3;
        record.itinerary = vec![
            stop("Botanical Garden", "Walk among rare plants"),
            stop("History Museum", "Indoor exhibits"),
            stop("Ala-Too Square", "Evening in the city PARK"),
            stop("Beach", "Outdoor swimming"),
        ];
        record.vehicle_assignments = vec![VehicleAssignment::default()];
        record
    }

    #[test]
    fn test_weather_impact_flags_exposed_stops() {
        let impact = weather_impact(&record(), &CurrentConditions::default());
        assert_eq!(
            impact.affected_activities,
            vec!["Botanical Garden", "Ala-Too Square", "Beach"]
        );
        assert_eq!(impact.alternatives.len(), 3);
        assert_eq!(impact.recommendations[0], "Check weather forecast daily");
    }

    #[test]
    fn test_weather_impact_ignores_reported_conditions() {
        let clear = CurrentConditions {
            weather: Some("Clear skies".to_string()),
            ..CurrentConditions::default()
        };
        assert_eq!(
            weather_impact(&record(), &clear),
            weather_impact(&record(), &CurrentConditions::default())
        );
    }

    #[test]
    fn test_summary() {
        let summary = summary(&record());
        assert_eq!(
            summary.overview,
            "3 days Lakeside Loop in Issyk-Kul for 3 participants"
        );
        assert_eq!(
            summary.logistics_overview,
            "1 vehicles coordinated across 4 locations"
        );
        assert_eq!(summary.budget_summary, "Total budget: 1000 (333 per person)");
    }

    #[test]
    fn test_summary_without_participants() {
        let mut rec = record();
        rec.total_participants = 0;
        assert_eq!(
            summary(&rec).budget_summary,
            "Total budget: 1000 (n/a per person)"
        );
    }
}
