//! Defensive interpretation of raw generative output.
//!
//! Nothing here returns an error to the caller for malformed model text:
//! every entry point yields a well-formed value or `None`.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::{Result, TourError},
    schemas::CompletionSchema,
    types::{
        deserialize_structured_response, insights::GeneratedOptimization, BudgetBreakdown,
        AssignmentRequest, Difficulty, ItineraryDraft, RouteOptimization, SeatAssignment, Stop,
    },
};

pub const NO_OPTIMIZATIONS_NEEDED: &str = "No specific optimizations needed";
pub const OPTIMIZATIONS_UNAVAILABLE: &str = "Unable to generate optimizations at this time";
pub const ALTERNATIVES_UNAVAILABLE: &str = "Alternative location suggestions unavailable";
const MAX_ALTERNATIVES: usize = 5;

/// Remove a surrounding Markdown code fence (```` ```json ... ``` ````).
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the info string ("json", "JSON", ...) up to the first newline.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Interpret an itinerary response, falling back to a single-stop draft
/// wrapping the raw text when it cannot be read.
pub fn interpret_itinerary_response(raw: &str) -> ItineraryDraft {
    match parse_itinerary(raw) {
        Ok(draft) => draft,
        Err(err) => {
            warn!(
                target: "tour_agent::interpret",
                error = %err,
                raw_chars = raw.len(),
                "itinerary response unreadable, using fallback draft"
            );
            fallback_draft(raw)
        }
    }
}

/// Strict half of [`interpret_itinerary_response`].
pub fn parse_itinerary(raw: &str) -> Result<ItineraryDraft> {
    let payload: Value = serde_json::from_str(strip_code_fences(raw))
        .map_err(|err| TourError::Parse(format!("response is not JSON: {err}")))?;
    if !payload.is_object() {
        return Err(TourError::Parse(
            "response JSON is not an object".to_string(),
        ));
    }

    let mut draft: ItineraryDraft =
        deserialize_structured_response(&payload, ItineraryDraft::schema())?;
    if draft.budget_breakdown.is_none() {
        draft.budget_breakdown = Some(BudgetBreakdown::default());
    }
    debug!(
        target: "tour_agent::interpret",
        stops = draft.itinerary.len(),
        "itinerary response parsed"
    );
    Ok(draft)
}

/// Minimal well-formed draft carrying the raw text as its only stop.
pub fn fallback_draft(raw: &str) -> ItineraryDraft {
    ItineraryDraft {
        title: "Custom Tour".to_string(),
        duration: "Multi-day".to_string(),
        difficulty: Difficulty::Medium,
        itinerary: vec![Stop {
            time: "09:00".to_string(),
            location: "Starting Point".to_string(),
            description: raw.to_string(),
            tips: vec!["Follow AI recommendations".to_string()],
            duration: "1 day".to_string(),
            vehicle_instructions: Some("Standard vehicle coordination".to_string()),
            group_distribution: Some("Even distribution across vehicles".to_string()),
            estimated_cost: Some(0.0),
            accessibility: Some("Standard accessibility".to_string()),
            photo_opportunities: Some(vec!["Scenic viewpoints".to_string()]),
        }],
        budget_breakdown: Some(BudgetBreakdown::default()),
        ..ItineraryDraft::default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedAssignments {
    #[serde(default)]
    assignments: Vec<SeatAssignment>,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Generated seat assignments and reasoning, or `None` when the output is
/// unusable: not JSON, the wrong shape, or a plan that does not seat every
/// requested participant exactly once in one of the requested vehicles.
pub fn parse_assignments(
    raw: &str,
    request: &AssignmentRequest,
) -> Option<(Vec<SeatAssignment>, String)> {
    let parsed: GeneratedAssignments = match serde_json::from_str(strip_code_fences(raw)) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(target: "tour_agent::interpret", error = %err, "assignment response unreadable");
            return None;
        }
    };
    if parsed.assignments.is_empty() || !seats_requested_participants(&parsed.assignments, request)
    {
        return None;
    }
    let reasoning = parsed
        .reasoning
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| "Standard assignment based on capacity".to_string());
    Some((parsed.assignments, reasoning))
}

fn seats_requested_participants(assignments: &[SeatAssignment], request: &AssignmentRequest) -> bool {
    if let Some(stray) = assignments
        .iter()
        .find(|a| a.vehicle_index >= request.vehicles.len())
    {
        debug!(
            target: "tour_agent::interpret",
            vehicle_index = stray.vehicle_index,
            "generated assignment names an unknown vehicle"
        );
        return false;
    }

    let mut seated: Vec<&str> = assignments
        .iter()
        .map(|a| a.participant_name.as_str())
        .collect();
    let mut requested: Vec<&str> = request
        .participants
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    seated.sort_unstable();
    requested.sort_unstable();
    if seated != requested {
        debug!(
            target: "tour_agent::interpret",
            seated = seated.len(),
            requested = requested.len(),
            "generated assignments do not match the participant list"
        );
        return false;
    }
    true
}

/// Route optimization from model output; never fails.
pub fn parse_optimization(raw: &str) -> RouteOptimization {
    match serde_json::from_str::<GeneratedOptimization>(strip_code_fences(raw)) {
        Ok(parsed) => RouteOptimization {
            suggestions: parsed
                .suggestions
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| NO_OPTIMIZATIONS_NEEDED.to_string()),
            alternative_routes: parsed.alternative_routes,
        },
        Err(err) => {
            warn!(
                target: "tour_agent::interpret",
                error = %err,
                "optimization response unreadable"
            );
            optimization_unavailable()
        }
    }
}

pub fn optimization_unavailable() -> RouteOptimization {
    RouteOptimization {
        suggestions: OPTIMIZATIONS_UNAVAILABLE.to_string(),
        alternative_routes: Vec::new(),
    }
}

/// Up to five non-empty lines with any leading "N." numbering removed.
pub fn parse_alternatives(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .take(MAX_ALTERNATIVES)
        .map(strip_list_number)
        .collect()
}

fn strip_list_number(line: &str) -> String {
    let trimmed = line.trim();
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = trimmed[digits..].strip_prefix('.') {
            return rest.trim().to_string();
        }
    }
    trimmed.to_string()
}
