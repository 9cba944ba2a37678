use crate::completion_schema;
use chrono::{DateTime, Utc};
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Deserializer, Serialize};

use super::tour::TourConfiguration;

/// Physical difficulty of a tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Lenient reading of a model-produced label.
    ///
    /// Exact names match case-insensitively; a label starting with "hard" or
    /// "challenging" is `Hard`, one starting with "easy" is `Easy`, and
    /// anything else is `Medium`.
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        match lower.as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ if lower.starts_with("hard") || lower.starts_with("challenging") => {
                Difficulty::Hard
            }
            _ if lower.starts_with("easy") => Difficulty::Easy,
            _ => Difficulty::Medium,
        }
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Difficulty::from_label(&label))
    }
}

impl JsonSchema for Difficulty {
    fn schema_name() -> String {
        "Difficulty".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

/// One scheduled activity or location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Stop {
    /// Start time, "HH:MM"
    pub time: String,
    pub location: String,
    pub description: String,
    pub tips: Vec<String>,
    /// Free-form length such as "2 hours"
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_distribution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_opportunities: Option<Vec<String>>,
}

/// A vehicle's role in the itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleAssignment {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub occupants: u32,
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_notes: Option<String>,
}

/// Budget split into five non-negative amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetBreakdown {
    pub transportation: f64,
    pub accommodation: f64,
    pub meals: f64,
    pub activities: f64,
    pub miscellaneous: f64,
}

impl BudgetBreakdown {
    pub fn total(&self) -> f64 {
        self.transportation + self.accommodation + self.meals + self.activities + self.miscellaneous
    }
}

/// Itinerary content produced by the generative backend.
///
/// Every field is optional on the wire; absent lists are empty and absent
/// numbers zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
#[completion_schema(name = "Itinerary")]
pub struct ItineraryDraft {
    /// Tour name
    pub title: String,
    /// Total length, e.g. "5 days"
    pub duration: String,
    /// One of Easy, Medium or Hard
    pub difficulty: Difficulty,
    /// Key attractions and experiences
    pub highlights: Vec<String>,
    /// Stops in chronological order
    pub itinerary: Vec<Stop>,
    /// How the vehicles move through the tour
    pub vehicle_assignments: Vec<VehicleAssignment>,
    /// Additional suggestions for the group
    pub recommendations: Vec<String>,
    /// Total budget in USD
    pub total_budget: f64,
    /// Number of people on the tour
    pub total_participants: u32,
    /// Budget split by category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_breakdown: Option<BudgetBreakdown>,
    /// Important logistics information
    pub logistics_notes: Vec<String>,
    /// Local emergency numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contacts: Option<Vec<String>>,
}

/// The stored, structured representation of a planned trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRecord {
    /// Opaque identifier assigned by the store
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub destination: String,
    /// Free-form length such as "5 days"
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<Stop>,
    #[serde(default)]
    pub vehicle_assignments: Vec<VehicleAssignment>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub total_budget: f64,
    #[serde(default)]
    pub total_participants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_breakdown: Option<BudgetBreakdown>,
    #[serde(default)]
    pub logistics_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contacts: Option<Vec<String>>,
    /// Request the itinerary was generated from, kept for regeneration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<TourConfiguration>,
}

impl ItineraryRecord {
    /// Build an unsaved record (empty id) from generated content.
    pub fn from_draft(draft: ItineraryDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: String::new(),
            title: draft.title,
            destination: String::new(),
            duration: draft.duration,
            difficulty: draft.difficulty,
            highlights: draft.highlights,
            itinerary: draft.itinerary,
            vehicle_assignments: draft.vehicle_assignments,
            recommendations: draft.recommendations,
            created_at,
            total_budget: draft.total_budget,
            total_participants: draft.total_participants,
            budget_breakdown: draft.budget_breakdown,
            logistics_notes: draft.logistics_notes,
            emergency_contacts: draft.emergency_contacts,
            configuration: None,
        }
    }

    /// Overwrite the request-derived fields from a tour configuration.
    pub fn with_configuration(mut self, configuration: TourConfiguration) -> Self {
        self.destination = configuration.primary_region.label().to_string();
        self.total_budget = configuration.budget;
        self.total_participants = configuration.total_participants();
        self.configuration = Some(configuration);
        self
    }
}

/// Explicit partial update of a stored record.
///
/// `id` and `createdAt` are not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItineraryPatch {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub highlights: Option<Vec<String>>,
    pub itinerary: Option<Vec<Stop>>,
    pub vehicle_assignments: Option<Vec<VehicleAssignment>>,
    pub recommendations: Option<Vec<String>>,
    pub total_budget: Option<f64>,
    pub total_participants: Option<u32>,
    pub budget_breakdown: Option<BudgetBreakdown>,
    pub logistics_notes: Option<Vec<String>>,
    pub emergency_contacts: Option<Vec<String>>,
    pub configuration: Option<TourConfiguration>,
}

impl ItineraryPatch {
    /// Patch replacing all generated content with a fresh draft.
    pub fn from_draft(draft: ItineraryDraft) -> Self {
        Self {
            title: Some(draft.title),
            duration: Some(draft.duration),
            difficulty: Some(draft.difficulty),
            highlights: Some(draft.highlights),
            itinerary: Some(draft.itinerary),
            vehicle_assignments: Some(draft.vehicle_assignments),
            recommendations: Some(draft.recommendations),
            budget_breakdown: draft.budget_breakdown,
            logistics_notes: Some(draft.logistics_notes),
            emergency_contacts: draft.emergency_contacts,
            ..Self::default()
        }
    }

    /// Set the fields derived from a tour configuration.
    pub fn with_configuration(mut self, configuration: TourConfiguration) -> Self {
        self.destination = Some(configuration.primary_region.label().to_string());
        self.duration = Some(format!("{} days", configuration.duration));
        self.total_budget = Some(configuration.budget);
        self.total_participants = Some(configuration.total_participants());
        self.configuration = Some(configuration);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, record: &mut ItineraryRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(destination) = self.destination {
            record.destination = destination;
        }
        if let Some(duration) = self.duration {
            record.duration = duration;
        }
        if let Some(difficulty) = self.difficulty {
            record.difficulty = difficulty;
        }
        if let Some(highlights) = self.highlights {
            record.highlights = highlights;
        }
        if let Some(itinerary) = self.itinerary {
            record.itinerary = itinerary;
        }
        if let Some(assignments) = self.vehicle_assignments {
            record.vehicle_assignments = assignments;
        }
        if let Some(recommendations) = self.recommendations {
            record.recommendations = recommendations;
        }
        if let Some(total_budget) = self.total_budget {
            record.total_budget = total_budget;
        }
        if let Some(total_participants) = self.total_participants {
            record.total_participants = total_participants;
        }
        if self.budget_breakdown.is_some() {
            record.budget_breakdown = self.budget_breakdown;
        }
        if let Some(notes) = self.logistics_notes {
            record.logistics_notes = notes;
        }
        if self.emergency_contacts.is_some() {
            record.emergency_contacts = self.emergency_contacts;
        }
        if self.configuration.is_some() {
            record.configuration = self.configuration;
        }
    }
}
