//! Prompt templates for the generative backend.

use std::fmt::Write;

use crate::{
    schemas::SchemaHandle,
    types::{
        AssignmentRequest, ItineraryRecord, OptimizationRequest, TourConfiguration,
        TravelPreferences,
    },
};

pub const LOCATION_SYSTEM_PROMPT: &str = "You are a knowledgeable travel expert. Provide detailed information about locations including history, culture, best times to visit, and insider tips.";

pub const RECOMMENDATION_SYSTEM_PROMPT: &str = "You are a personalized travel advisor. Create tailored recommendations based on user preferences.";

const DEFAULT_STARTING_POINT: &str = "Bishkek";

const REGIONAL_CONSIDERATIONS: &str = "\
KYRGYZSTAN-SPECIFIC CONSIDERATIONS:
- Include authentic Kyrgyz experiences (yurt stays, traditional meals, horse trekking)
- Consider mountain road conditions and accessibility
- Include altitude acclimatization time if needed
- Suggest local guides who speak preferred languages
- Include traditional foods: beshbarmak, lagman, manti, kumys
- Consider cultural etiquette and local customs
- Include currency information (Kyrgyz som) and payment methods
- Weather-appropriate activities for the season
- Safety considerations for mountain and remote areas";

/// System prompt for structured itinerary generation.
pub fn itinerary_system_prompt(schema: &SchemaHandle) -> String {
    format!(
        "You are an expert tour guide AI agent. Create detailed, engaging tour itineraries based on user preferences. \
Include specific locations, timing, descriptions, and helpful tips.\n\n\
Respond with a single JSON object that validates against this `{}` JSON schema, with no surrounding prose:\n{}",
        schema.schema_name(),
        schema.to_prompt_json()
    )
}

/// User prompt describing a requested tour.
pub fn tour_prompt(config: &TourConfiguration) -> String {
    let vehicles = config
        .vehicles
        .iter()
        .map(|v| {
            let driver = if v.driver_included.unwrap_or(false) {
                "included"
            } else {
                "not included"
            };
            let equipment = match &v.special_equipment {
                Some(items) if !items.is_empty() => format!(", Equipment: {}", items.join(", ")),
                _ => String::new(),
            };
            format!(
                "{} ({}/{} people, driver {}{})",
                v.vehicle_type.label(),
                v.occupants,
                v.capacity,
                driver,
                equipment
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    // Stable sort: equal priorities keep request order.
    let mut locations: Vec<_> = config.location_preferences.iter().collect();
    locations.sort_by(|a, b| b.priority.cmp(&a.priority));
    let priorities = locations
        .iter()
        .map(|l| {
            let region = l.region.map(|r| r.label()).unwrap_or("region");
            let altitude = l
                .altitude
                .map(|m| format!(", {m}m altitude"))
                .unwrap_or_default();
            let activities = match &l.activities {
                Some(items) if !items.is_empty() => format!(" - Activities: {}", items.join(", ")),
                _ => String::new(),
            };
            format!(
                "- {} in {} (Priority: {}/10, Time: {}-{}h{}){}",
                l.name, region, l.priority, l.min_time, l.max_time, altitude, activities
            )
        })
        .collect::<Vec<_>>();

    let p = &config.preferences;
    let mut prompt = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        prompt,
        "Create a comprehensive {}-day {} tour in KYRGYZSTAN, focusing on the {} region.\n",
        config.duration,
        config.tour_type.label(),
        config.primary_region.label()
    );

    let _ = writeln!(prompt, "TOUR LOGISTICS:");
    let _ = writeln!(
        prompt,
        "- Total participants: {} people",
        config.total_participants()
    );
    let _ = writeln!(prompt, "- Transport: {vehicles}");
    let _ = writeln!(prompt, "- Budget: {} USD", config.budget);
    let _ = writeln!(
        prompt,
        "- Starting point: {}",
        config
            .starting_location
            .as_deref()
            .unwrap_or(DEFAULT_STARTING_POINT)
    );
    if let Some(accommodation) = config.accommodation_type {
        let _ = writeln!(prompt, "- Accommodation style: {}", accommodation.label());
    }
    if let Some(season) = &config.season {
        let _ = writeln!(
            prompt,
            "- Seasonal focus: {season} (consider weather, accessibility, seasonal activities and road conditions)"
        );
    }

    if !priorities.is_empty() {
        let _ = writeln!(prompt, "\nPRIORITY LOCATIONS:\n{}", priorities.join("\n"));
    }

    let _ = writeln!(prompt, "\nTOUR CONFIGURATION:");
    let _ = writeln!(
        prompt,
        "- Mobility/Fitness Level: {}/10 (1=limited mobility, 10=very fit for mountain activities)",
        p.mobility_level
    );
    let _ = writeln!(
        prompt,
        "- Adventure Level: {}/10 (1=comfort focused, 10=extreme adventure)",
        p.adventure_level
    );
    let _ = writeln!(
        prompt,
        "- Cultural Immersion: {}/10 (nomadic culture, traditions)",
        p.cultural_immersion
    );
    let _ = writeln!(prompt, "- Nature/Wildlife Focus: {}/10", p.nature_focus);
    let _ = writeln!(
        prompt,
        "- Traditional Experience: {}/10 (yurt stays, horseback riding, traditional crafts)",
        p.traditional_experience
    );
    let _ = writeln!(prompt, "- Budget Flexibility: {}/10", p.budget_flexibility);

    let optional_lines = [
        ("CULTURAL INTERESTS", join_nonempty(&config.interests)),
        ("GROUP AGE RANGE", config.age_range.clone()),
        ("DIETARY NEEDS", join_nonempty(&config.dietary_requirements)),
        ("ALTITUDE CONCERNS", config.altitude_concerns.clone()),
        ("PREFERRED LANGUAGES", join_nonempty(&config.language_preferences)),
        ("TRADITIONAL ACTIVITIES", join_nonempty(&config.traditional_activities)),
        ("PHOTOGRAPHY FOCUS", join_nonempty(&config.photography_interests)),
        ("SPECIAL REQUIREMENTS", config.special_requirements.clone()),
    ];
    let mut wrote_blank = false;
    for (label, value) in optional_lines {
        if let Some(value) = value {
            if !wrote_blank {
                prompt.push('\n');
                wrote_blank = true;
            }
            let _ = writeln!(prompt, "{label}: {value}");
        }
    }

    let _ = writeln!(prompt, "\n{REGIONAL_CONSIDERATIONS}");
    let _ = write!(
        prompt,
        "\nRESPONSE FORMAT (JSON):\n{}",
        response_example(config)
    );
    prompt
}

fn response_example(config: &TourConfiguration) -> String {
    let first_vehicle = config.vehicles.first();
    let example = serde_json::json!({
        "title": "Kyrgyzstan tour name",
        "duration": format!("{} days", config.duration),
        "difficulty": "Easy/Medium/Hard (considering Kyrgyzstan terrain)",
        "highlights": ["key attractions and experiences"],
        "itinerary": [{
            "time": "09:00",
            "location": "Location name",
            "description": "Detailed description with cultural context",
            "tips": ["practical tips"],
            "duration": "2 hours",
            "vehicleInstructions": "Transport coordination for mountain roads",
            "groupDistribution": "Group management for activities"
        }],
        "vehicleAssignments": [{
            "vehicleId": "vehicle_1",
            "vehicleType": first_vehicle.map(|v| v.vehicle_type.label()).unwrap_or("sedan"),
            "occupants": first_vehicle.map(|v| v.occupants).unwrap_or(4),
            "route": "Route details"
        }],
        "recommendations": ["additional suggestions"],
        "totalBudget": config.budget,
        "totalParticipants": config.total_participants(),
        "budgetBreakdown": {
            "transportation": 0,
            "accommodation": 0,
            "meals": 0,
            "activities": 0,
            "miscellaneous": 0
        },
        "logisticsNotes": ["important logistics information"],
        "emergencyContacts": ["local emergency numbers"]
    });
    serde_json::to_string_pretty(&example).unwrap_or_else(|_| example.to_string())
}

fn join_nonempty(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

pub fn assignment_prompt(request: &AssignmentRequest) -> String {
    let participants =
        serde_json::to_string_pretty(&request.participants).unwrap_or_else(|_| "[]".to_string());
    let vehicles =
        serde_json::to_string_pretty(&request.vehicles).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Generate optimal vehicle assignments:\n\n\
PARTICIPANTS: {participants}\n\
VEHICLES: {vehicles}\n\
DESTINATIONS: {}\n\n\
Consider compatibility, mobility needs, preferences, and vehicle features.\n\
Respond with JSON only: {{\"assignments\": [{{\"participantName\": string, \"vehicleIndex\": number (0-based), \"vehicleType\": string, \"seatAssignment\": number (1-based)}}], \"reasoning\": string}}",
        request.destinations.join(", ")
    )
}

pub fn optimization_prompt(record: &ItineraryRecord, request: &OptimizationRequest) -> String {
    let tour = serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string());
    let conditions = &request.current_conditions;
    let preferences = &request.preferences;

    format!(
        "Optimize this tour based on current conditions and preferences:\n\n\
CURRENT TOUR: {tour}\n\n\
CURRENT CONDITIONS:\n\
- Weather: {}\n\
- Traffic: {}\n\
- Events: {}\n\
- Time constraints: {}\n\n\
PREFERENCES:\n\
- Priority changes: {}\n\
- New constraints: {}\n\n\
Respond with JSON only: {{\"suggestions\": string, \"alternativeRoutes\": [{{\"name\": string, \"description\": string, \"stops\": [string], \"estimatedDuration\": string}}]}}",
        conditions.weather.as_deref().unwrap_or("Unknown"),
        conditions.traffic.as_deref().unwrap_or("Normal"),
        conditions.events.as_deref().unwrap_or("None"),
        conditions.time_constraints.as_deref().unwrap_or("None"),
        preferences.priority_changes.as_deref().unwrap_or("None"),
        preferences.new_constraints.as_deref().unwrap_or("None"),
    )
}

pub fn location_prompt(location: &str) -> String {
    format!("Tell me about {location} as a travel destination.")
}

pub fn alternatives_prompt(record: &ItineraryRecord, location: &str) -> String {
    format!(
        "Based on this tour in {}, suggest 5 alternative locations to {} that would fit the same time slot and tour theme. \
Consider the tour: {}. List one location per line.",
        record.destination, location, record.title
    )
}

pub fn recommendations_prompt(preferences: &TravelPreferences) -> String {
    let mut prompt = format!(
        "Based on these preferences, suggest personalized travel recommendations:\n\
- Budget: {}\n\
- Interests: {}\n\
- Travel style: {}\n\
- Duration: {} days\n\
- Group size: {}",
        preferences.budget,
        preferences.interests.join(", "),
        preferences.travel_style,
        preferences.duration,
        preferences.group_size
    );
    if let Some(destination) = &preferences.destination {
        let _ = write!(prompt, "\n- Destination: {destination}");
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        LocationPreference, PreferenceProfile, Region, TourType, VehicleConfig, VehicleType,
    };

    fn location(name: &str, priority: u8) -> LocationPreference {
        LocationPreference {
            name: name.to_string(),
            region: Some(Region::Naryn),
            priority,
            min_time: 2.0,
            max_time: 4.0,
            altitude: None,
            activities: None,
        }
    }

    fn config() -> TourConfiguration {
        TourConfiguration {
            primary_region: Region::Naryn,
            duration: 4,
            tour_type: TourType::NomadicExperience,
            budget: 3000.0,
            vehicles: vec![VehicleConfig {
                vehicle_type: VehicleType::Suv4wd,
                occupants: 3,
                capacity: 4,
                driver_included: Some(true),
                special_equipment: Some(vec!["GPS".to_string()]),
            }],
            location_preferences: vec![
                location("Tash Rabat", 6),
                location("Song-Kul", 9),
                location("Koshoy Korgon", 6),
            ],
            preferences: PreferenceProfile {
                mobility_level: 7,
                adventure_level: 6,
                cultural_immersion: 9,
                nature_focus: 8,
                traditional_experience: 10,
                budget_flexibility: 3,
            },
            accommodation_type: None,
            starting_location: None,
            season: Some("summer".to_string()),
            interests: vec!["felt making".to_string()],
            age_range: None,
            dietary_requirements: Vec::new(),
            language_preferences: Vec::new(),
            altitude_concerns: None,
            traditional_activities: Vec::new(),
            photography_interests: Vec::new(),
            special_requirements: None,
        }
    }

    #[test]
    fn test_tour_prompt_core_lines() {
        let prompt = tour_prompt(&config());

        assert!(prompt.contains("4-day nomadic experience tour"));
        assert!(prompt.contains("Total participants: 3 people"));
        assert!(prompt.contains("suv_4wd (3/4 people, driver included, Equipment: GPS)"));
        assert!(prompt.contains("Starting point: Bishkek"));
        assert!(prompt.contains("CULTURAL INTERESTS: felt making"));
        assert!(!prompt.contains("DIETARY NEEDS"));
        assert!(prompt.contains("\"totalParticipants\": 3"));
    }

    #[test]
    fn test_locations_sorted_by_priority_stably() {
        let prompt = tour_prompt(&config());
        let song_kul = prompt.find("Song-Kul").unwrap();
        let tash_rabat = prompt.find("Tash Rabat").unwrap();
        let koshoy = prompt.find("Koshoy Korgon").unwrap();

        assert!(song_kul < tash_rabat);
        assert!(tash_rabat < koshoy);
    }

    #[test]
    fn test_optimization_prompt_defaults() {
        let record = ItineraryRecord::from_draft(Default::default(), chrono::Utc::now());
        let request = OptimizationRequest {
            tour_id: "t1".to_string(),
            current_conditions: Default::default(),
            preferences: Default::default(),
        };
        let prompt = optimization_prompt(&record, &request);

        assert!(prompt.contains("- Weather: Unknown"));
        assert!(prompt.contains("- Traffic: Normal"));
        assert!(prompt.contains("- Time constraints: None"));
        assert!(prompt.contains("- New constraints: None"));
    }
}
