use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::{
    core::{analytics, assignment, capacity, insights},
    error::{Result, TourError},
    services::{
        delegate::{CompletionTask, GenerativeDelegate},
        prompts,
        response_handler::{self, ALTERNATIVES_UNAVAILABLE},
    },
    store::ItineraryStore,
    types::{
        AssignmentPlan, AssignmentRequest, AssignmentSource, CurrentConditions, ItineraryDraft,
        ItineraryPatch, ItineraryRecord, OptimizationRequest, RouteOptimization,
        TourAnalytics, TourConfiguration, TourSummary, TourUpdate, TravelPreferences,
        WeatherImpact,
    },
};

/// Orchestrates validation, generation, interpretation and storage.
#[derive(Clone)]
pub struct TourPlanner {
    delegate: Arc<dyn GenerativeDelegate>,
    store: Arc<dyn ItineraryStore>,
}

impl std::fmt::Debug for TourPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourPlanner").finish_non_exhaustive()
    }
}

impl TourPlanner {
    pub fn new(delegate: Arc<dyn GenerativeDelegate>, store: Arc<dyn ItineraryStore>) -> Self {
        Self { delegate, store }
    }

    pub fn with_store(mut self, store: Arc<dyn ItineraryStore>) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> &Arc<dyn ItineraryStore> {
        &self.store
    }

    /// Validate, generate and store a new itinerary.
    pub async fn create_itinerary(&self, config: TourConfiguration) -> Result<ItineraryRecord> {
        capacity::validate(&config)?;

        let draft = self.generate_draft(&config).await?;
        let mut record = ItineraryRecord::from_draft(draft, Utc::now()).with_configuration(config);
        if record.duration.trim().is_empty() {
            if let Some(config) = &record.configuration {
                record.duration = format!("{} days", config.duration);
            }
        }

        let id = self.store.create(record.clone()).await?;
        record.id = id;
        info!(
            target: "tour_agent::planner",
            id = %record.id,
            stops = record.itinerary.len(),
            "itinerary created"
        );
        Ok(record)
    }

    pub async fn list_itineraries(&self) -> Result<Vec<ItineraryRecord>> {
        self.store.list().await
    }

    pub async fn get_itinerary(&self, id: &str) -> Result<ItineraryRecord> {
        self.store.get(id).await
    }

    pub async fn delete_itinerary(&self, id: &str) -> Result<()> {
        self.store.delete(id).await?;
        info!(target: "tour_agent::planner", %id, "itinerary deleted");
        Ok(())
    }

    /// Merge an update into the stored configuration and apply it.
    ///
    /// Region or tour type changes regenerate the itinerary content.
    pub async fn update_itinerary(&self, id: &str, update: TourUpdate) -> Result<ItineraryRecord> {
        let record = self.store.get(id).await?;

        let patch = match record.configuration.as_ref() {
            Some(base) => {
                let merged = update.apply_to(base);
                capacity::validate(&merged)?;

                let patch = if update.requires_regeneration() {
                    info!(target: "tour_agent::planner", %id, "regenerating itinerary");
                    ItineraryPatch::from_draft(self.generate_draft(&merged).await?)
                } else if update.vehicles.is_some() {
                    ItineraryPatch {
                        vehicle_assignments: Some(assignment::itinerary_vehicle_assignments(
                            &merged.vehicles,
                        )),
                        ..ItineraryPatch::default()
                    }
                } else {
                    ItineraryPatch::default()
                };
                patch.with_configuration(merged)
            }
            None if update.requires_regeneration() => {
                return Err(TourError::configuration(
                    "configuration",
                    "Itinerary has no stored configuration to regenerate from",
                ));
            }
            None => unconfigured_patch(&update)?,
        };

        self.store.update(id, patch).await
    }

    pub async fn analytics(&self, id: &str) -> Result<TourAnalytics> {
        let record = self.store.get(id).await?;
        Ok(analytics::analyze(&record))
    }

    /// Seat assignment, generated when possible and deterministic otherwise.
    pub async fn vehicle_assignments(&self, request: AssignmentRequest) -> Result<AssignmentPlan> {
        capacity::validate_assignment_request(&request)?;
        assignment::ensure_capacity(&request)?;

        let prompt = prompts::assignment_prompt(&request);
        let generated = match self
            .delegate
            .generate(CompletionTask::Recommendations, &prompt)
            .await
        {
            Ok(raw) => response_handler::parse_assignments(&raw, &request),
            Err(err) => {
                warn!(target: "tour_agent::planner", error = %err, "assignment generation failed");
                None
            }
        };

        let plan = match generated {
            Some((assignments, reasoning)) => AssignmentPlan {
                assignments,
                reasoning,
                source: AssignmentSource::Generated,
            },
            None => {
                warn!(
                    target: "tour_agent::planner",
                    participants = request.participants.len(),
                    "using fallback vehicle assignment"
                );
                AssignmentPlan {
                    assignments: assignment::fallback_assignments(
                        &request.participants,
                        &request.vehicles,
                    ),
                    reasoning: assignment::FALLBACK_REASONING.to_string(),
                    source: AssignmentSource::Fallback,
                }
            }
        };
        Ok(plan)
    }

    pub async fn location_info(&self, location: &str) -> Result<String> {
        let location = location.trim();
        if location.is_empty() {
            return Err(TourError::configuration("location", "must not be empty"));
        }
        self.delegate
            .generate(CompletionTask::LocationInfo, &prompts::location_prompt(location))
            .await
    }

    pub async fn recommendations(&self, preferences: TravelPreferences) -> Result<String> {
        if preferences.group_size == 0 {
            return Err(TourError::configuration("groupSize", "must be at least 1"));
        }
        self.delegate
            .generate(
                CompletionTask::Recommendations,
                &prompts::recommendations_prompt(&preferences),
            )
            .await
    }

    /// Route optimization for a stored tour. Generation problems degrade to
    /// a fixed "unavailable" answer; an unknown tour is still `NotFound`.
    pub async fn optimize_route(&self, request: OptimizationRequest) -> Result<RouteOptimization> {
        let record = self.store.get(&request.tour_id).await?;
        let prompt = prompts::optimization_prompt(&record, &request);

        let optimization = match self
            .delegate
            .generate(CompletionTask::Itinerary, &prompt)
            .await
        {
            Ok(raw) => response_handler::parse_optimization(&raw),
            Err(err) => {
                warn!(target: "tour_agent::planner", error = %err, "route optimization failed");
                response_handler::optimization_unavailable()
            }
        };
        Ok(optimization)
    }

    pub async fn alternative_locations(&self, id: &str, location: &str) -> Result<Vec<String>> {
        let record = self.store.get(id).await?;
        let prompt = prompts::alternatives_prompt(&record, location);

        match self
            .delegate
            .generate(CompletionTask::LocationInfo, &prompt)
            .await
        {
            Ok(raw) => Ok(response_handler::parse_alternatives(&raw)),
            Err(err) => {
                warn!(target: "tour_agent::planner", error = %err, "alternative locations failed");
                Ok(vec![ALTERNATIVES_UNAVAILABLE.to_string()])
            }
        }
    }

    pub async fn weather_impact(
        &self,
        id: &str,
        conditions: &CurrentConditions,
    ) -> Result<WeatherImpact> {
        let record = self.store.get(id).await?;
        Ok(insights::weather_impact(&record, conditions))
    }

    pub async fn summary(&self, id: &str) -> Result<TourSummary> {
        let record = self.store.get(id).await?;
        Ok(insights::summary(&record))
    }

    async fn generate_draft(&self, config: &TourConfiguration) -> Result<ItineraryDraft> {
        let prompt = prompts::tour_prompt(config);
        let raw = self
            .delegate
            .generate(CompletionTask::Itinerary, &prompt)
            .await?;

        let mut draft = response_handler::interpret_itinerary_response(&raw);
        if draft.vehicle_assignments.is_empty() {
            draft.vehicle_assignments = assignment::itinerary_vehicle_assignments(&config.vehicles);
        }
        Ok(draft)
    }
}

/// Patch for a record stored without a source configuration: only the
/// fields that map directly onto the record are applied.
fn unconfigured_patch(update: &TourUpdate) -> Result<ItineraryPatch> {
    let mut patch = ItineraryPatch {
        total_budget: update.budget,
        duration: update.duration.map(|days| format!("{days} days")),
        ..ItineraryPatch::default()
    };

    if let Some(vehicles) = &update.vehicles {
        capacity::validate_vehicle_fit(vehicles)?;
        patch.total_participants = Some(vehicles.iter().map(|v| v.occupants).sum());
        patch.vehicle_assignments = Some(assignment::itinerary_vehicle_assignments(vehicles));
    }

    Ok(patch)
}
