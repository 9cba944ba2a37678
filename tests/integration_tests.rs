mod common;

use common::{itinerary_reply, planner, tour_request, ScriptedDelegate};
use serde_json::json;
use tour_agent_rs::{
    decode_payload,
    types::{
        AssignmentRequest, AssignmentSource, CurrentConditions, Difficulty, OptimizationRequest,
        TourUpdate, TravelPreferences, UNKNOWN_VEHICLE_TYPE,
    },
    CompletionTask, TourConfiguration, TourError,
};

fn config() -> TourConfiguration {
    decode_payload(tour_request()).unwrap()
}

fn assignment_request(participants: usize, policy: &str) -> AssignmentRequest {
    let participants: Vec<_> = (1..=participants)
        .map(|n| json!({ "name": format!("Traveller {n}") }))
        .collect();
    decode_payload(json!({
        "participants": participants,
        "vehicles": [
            { "type": "sedan", "capacity": 2 },
            { "type": "minivan", "capacity": 3 }
        ],
        "destinations": ["Karakol"],
        "overflowPolicy": policy
    }))
    .unwrap()
}

#[tokio::test]
async fn test_create_itinerary_assembles_record() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(itinerary_reply("Lakes and Canyons"));
    let planner = planner(delegate.clone());

    let record = planner.create_itinerary(config()).await.unwrap();

    assert!(!record.id.is_empty());
    assert_eq!(record.title, "Lakes and Canyons");
    assert_eq!(record.destination, "Issyk-Kul");
    assert_eq!(record.total_budget, 2500.0);
    assert_eq!(record.total_participants, 5);
    assert_eq!(record.itinerary.len(), 3);
    // No vehicle assignments in the answer: one per configured vehicle.
    assert_eq!(record.vehicle_assignments.len(), 2);
    assert_eq!(record.vehicle_assignments[0].vehicle_type, "suv_4wd");
    assert!(record.configuration.is_some());

    let calls = delegate.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, CompletionTask::Itinerary);
    assert!(calls[0].1.contains("Karakol"));

    let stored = planner.get_itinerary(&record.id).await.unwrap();
    assert_eq!(stored, record);
}

#[tokio::test]
async fn test_create_with_prose_answer_uses_fallback_draft() {
    let delegate = ScriptedDelegate::new();
    delegate.reply("Sorry, here is a plan in words: visit the lake.");
    let planner = planner(delegate);

    let record = planner.create_itinerary(config()).await.unwrap();

    assert_eq!(record.title, "Custom Tour");
    assert_eq!(record.difficulty, Difficulty::Medium);
    assert_eq!(record.itinerary.len(), 1);
    assert!(record.itinerary[0].description.contains("visit the lake"));
    assert_eq!(record.total_participants, 5);

    // "Multi-day" has no day count, so per-day metrics are not computable.
    let report = planner.analytics(&record.id).await.unwrap();
    assert_eq!(report.cost_analysis.cost_per_person, Some(500.0));
    assert_eq!(report.cost_analysis.cost_per_day, None);
}

#[tokio::test]
async fn test_infeasible_request_never_reaches_delegate() {
    let delegate = ScriptedDelegate::new();
    let planner = planner(delegate.clone());

    let mut cfg = config();
    cfg.vehicles[1].occupants = 6;
    let err = planner.create_itinerary(cfg).await.unwrap_err();
    assert!(matches!(err, TourError::Configuration { .. }));

    let mut cfg = config();
    cfg.location_preferences[0].min_time = 9.0;
    let err = planner.create_itinerary(cfg).await.unwrap_err();
    assert_eq!(err.field(), Some("locationPreferences[0].minTime"));

    assert!(delegate.calls().is_empty());
}

#[tokio::test]
async fn test_delegate_failure_surfaces_on_create() {
    let delegate = ScriptedDelegate::new();
    delegate.fail("quota exceeded");
    let planner = planner(delegate);

    let err = planner.create_itinerary(config()).await.unwrap_err();
    assert!(matches!(err, TourError::Delegate(_)));
    assert!(planner.list_itineraries().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_without_regeneration() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(itinerary_reply("Lakes"));
    let planner = planner(delegate.clone());
    let record = planner.create_itinerary(config()).await.unwrap();

    let update: TourUpdate = decode_payload(json!({
        "budget": 4000,
        "duration": 7,
        "vehicles": [{ "type": "minivan", "occupants": 8, "capacity": 10 }]
    }))
    .unwrap();
    let updated = planner.update_itinerary(&record.id, update).await.unwrap();

    assert_eq!(updated.id, record.id);
    assert_eq!(updated.created_at, record.created_at);
    assert_eq!(updated.title, "Lakes");
    assert_eq!(updated.total_budget, 4000.0);
    assert_eq!(updated.total_participants, 8);
    assert_eq!(updated.duration, "7 days");
    assert_eq!(updated.vehicle_assignments.len(), 1);
    assert_eq!(delegate.calls().len(), 1);
}

#[tokio::test]
async fn test_update_region_regenerates() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(itinerary_reply("Lakes"));
    delegate.reply(itinerary_reply("Naryn Highlands"));
    let planner = planner(delegate.clone());
    let record = planner.create_itinerary(config()).await.unwrap();

    let update: TourUpdate = decode_payload(json!({ "primaryRegion": "naryn" })).unwrap();
    let updated = planner.update_itinerary(&record.id, update).await.unwrap();

    assert_eq!(updated.title, "Naryn Highlands");
    assert_eq!(updated.destination, "Naryn");
    assert_eq!(updated.created_at, record.created_at);
    let calls = delegate.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].1.contains("Naryn region"));
}

#[tokio::test]
async fn test_update_revalidates_merged_configuration() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(itinerary_reply("Lakes"));
    let planner = planner(delegate);
    let record = planner.create_itinerary(config()).await.unwrap();

    let update: TourUpdate = decode_payload(json!({
        "vehicles": [{ "type": "sedan", "occupants": 5, "capacity": 4 }]
    }))
    .unwrap();
    let err = planner.update_itinerary(&record.id, update).await.unwrap_err();
    assert!(matches!(err, TourError::Configuration { .. }));

    let unchanged = planner.get_itinerary(&record.id).await.unwrap();
    assert_eq!(unchanged, record);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let planner = planner(ScriptedDelegate::new());

    assert!(matches!(
        planner.get_itinerary("missing").await,
        Err(TourError::NotFound(_))
    ));
    assert!(matches!(
        planner.delete_itinerary("missing").await,
        Err(TourError::NotFound(_))
    ));
    assert!(matches!(
        planner.analytics("missing").await,
        Err(TourError::NotFound(_))
    ));
    assert!(matches!(
        planner
            .update_itinerary("missing", TourUpdate::default())
            .await,
        Err(TourError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_and_delete() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(itinerary_reply("First"));
    delegate.reply(itinerary_reply("Second"));
    let planner = planner(delegate);

    let first = planner.create_itinerary(config()).await.unwrap();
    let second = planner.create_itinerary(config()).await.unwrap();
    let titles: Vec<_> = planner
        .list_itineraries()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);

    planner.delete_itinerary(&first.id).await.unwrap();
    let remaining = planner.list_itineraries().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

#[tokio::test]
async fn test_analytics_for_generated_record() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(itinerary_reply("Lakes"));
    let planner = planner(delegate);
    let record = planner.create_itinerary(config()).await.unwrap();

    let report = planner.analytics(&record.id).await.unwrap();
    assert_eq!(report.cost_analysis.cost_per_person, Some(500.0));
    assert_eq!(report.cost_analysis.cost_per_day, Some(500.0));
    assert_eq!(report.time_analysis.active_time_hours, 9.0);
    assert_eq!(report.time_analysis.average_stop_duration_hours, 3.0);
    assert_eq!(report.time_analysis.travel_time_hours, 1.5);
    // 3 stops over 5 days
    assert_eq!(report.efficiency_metrics.time_efficiency, Some(1));
    // 2500 / (5 * 5) = 100 per person-day
    assert_eq!(report.efficiency_metrics.budget_efficiency, Some(10));
    // (3/8 + 2/8) / 2 = 31%
    assert_eq!(report.efficiency_metrics.vehicle_utilization, 31);
    assert_eq!(
        report.suggestions,
        vec![
            "Add more activities to make better use of your time",
            "Consider consolidating to fewer vehicles to reduce costs",
        ]
    );
}

#[tokio::test]
async fn test_vehicle_assignments_prefers_generated_plan() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(
        json!({
            "assignments": [
                { "participantName": "Traveller 1", "vehicleIndex": 1, "vehicleType": "minivan", "seatAssignment": 1 }
            ],
            "reasoning": "Keep the minivan for the hikers"
        })
        .to_string(),
    );
    let planner = planner(delegate.clone());

    let plan = planner
        .vehicle_assignments(assignment_request(1, "permissive"))
        .await
        .unwrap();
    assert_eq!(plan.source, AssignmentSource::Generated);
    assert_eq!(plan.reasoning, "Keep the minivan for the hikers");
    assert_eq!(delegate.calls()[0].0, CompletionTask::Recommendations);
}

#[tokio::test]
async fn test_generated_plan_missing_a_participant_falls_back() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(
        json!({
            "assignments": [
                { "participantName": "Traveller 1", "vehicleIndex": 0, "vehicleType": "sedan", "seatAssignment": 1 },
                { "participantName": "Traveller 2", "vehicleIndex": 4, "vehicleType": "bus", "seatAssignment": 1 }
            ],
            "reasoning": "Only two seats were needed"
        })
        .to_string(),
    );
    let planner = planner(delegate);

    let plan = planner
        .vehicle_assignments(assignment_request(3, "permissive"))
        .await
        .unwrap();
    assert_eq!(plan.source, AssignmentSource::Fallback);
    assert_eq!(plan.assignments.len(), 3);
    assert_eq!(plan.assignments[2].participant_name, "Traveller 3");
    assert_eq!(plan.assignments[2].vehicle_index, 1);
}

#[tokio::test]
async fn test_vehicle_assignments_fall_back() {
    let delegate = ScriptedDelegate::new();
    delegate.reply("Put the tall people in front.");
    delegate.fail("network down");
    let planner = planner(delegate);

    for _ in 0..2 {
        let plan = planner
            .vehicle_assignments(assignment_request(7, "permissive"))
            .await
            .unwrap();
        assert_eq!(plan.source, AssignmentSource::Fallback);
        assert_eq!(
            plan.reasoning,
            "Automatic assignment based on capacity and basic preferences"
        );
        let seats: Vec<_> = plan
            .assignments
            .iter()
            .map(|a| (a.vehicle_index, a.seat_assignment))
            .collect();
        assert_eq!(
            seats,
            vec![(0, 1), (0, 2), (1, 1), (1, 2), (1, 3), (2, 1), (2, 2)]
        );
        assert_eq!(plan.assignments[6].vehicle_type, UNKNOWN_VEHICLE_TYPE);
    }
}

#[tokio::test]
async fn test_strict_assignment_fails_before_generation() {
    let delegate = ScriptedDelegate::new();
    let planner = planner(delegate.clone());

    let err = planner
        .vehicle_assignments(assignment_request(6, "strict"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TourError::CapacityExhausted {
            participants: 6,
            capacity: 5
        }
    ));
    assert!(delegate.calls().is_empty());
}

#[tokio::test]
async fn test_optimize_route() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(itinerary_reply("Lakes"));
    delegate.reply(
        json!({
            "suggestions": "Start earlier to beat the heat",
            "alternativeRoutes": [{ "name": "South shore", "stops": ["Barskoon", "Skazka"] }]
        })
        .to_string(),
    );
    delegate.fail("timeout");
    let planner = planner(delegate.clone());
    let record = planner.create_itinerary(config()).await.unwrap();

    let request: OptimizationRequest = decode_payload(json!({
        "tourId": record.id,
        "currentConditions": { "weather": "Rain" }
    }))
    .unwrap();

    let optimized = planner.optimize_route(request.clone()).await.unwrap();
    assert_eq!(optimized.suggestions, "Start earlier to beat the heat");
    assert_eq!(optimized.alternative_routes[0].stops, vec!["Barskoon", "Skazka"]);
    let prompt = &delegate.calls()[1].1;
    assert!(prompt.contains("- Weather: Rain"));
    assert!(prompt.contains("- Traffic: Normal"));

    let degraded = planner.optimize_route(request).await.unwrap();
    assert_eq!(
        degraded.suggestions,
        "Unable to generate optimizations at this time"
    );
    assert!(degraded.alternative_routes.is_empty());

    let missing: OptimizationRequest = decode_payload(json!({ "tourId": "nope" })).unwrap();
    assert!(matches!(
        planner.optimize_route(missing).await,
        Err(TourError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_alternatives_weather_and_summary() {
    let delegate = ScriptedDelegate::new();
    delegate.reply(itinerary_reply("Lakes"));
    delegate.reply("1. Barskoon Gorge\n2. Skazka Canyon\n\n3. Tamga");
    delegate.fail("down");
    let planner = planner(delegate);
    let record = planner.create_itinerary(config()).await.unwrap();

    let alternatives = planner
        .alternative_locations(&record.id, "Jeti-Oguz")
        .await
        .unwrap();
    assert_eq!(alternatives, vec!["Barskoon Gorge", "Skazka Canyon", "Tamga"]);

    let unavailable = planner
        .alternative_locations(&record.id, "Jeti-Oguz")
        .await
        .unwrap();
    assert_eq!(
        unavailable,
        vec!["Alternative location suggestions unavailable"]
    );

    let impact = planner
        .weather_impact(&record.id, &CurrentConditions::default())
        .await
        .unwrap();
    assert_eq!(impact.affected_activities, vec!["Jeti-Oguz"]);

    let summary = planner.summary(&record.id).await.unwrap();
    assert_eq!(
        summary.overview,
        "5 days Lakes in Issyk-Kul for 5 participants"
    );
    assert_eq!(
        summary.logistics_overview,
        "2 vehicles coordinated across 3 locations"
    );
    assert_eq!(summary.budget_summary, "Total budget: 2500 (500 per person)");
}

#[tokio::test]
async fn test_free_text_operations_surface_delegate_errors() {
    let delegate = ScriptedDelegate::new();
    delegate.reply("Karakol sits at the eastern tip of Issyk-Kul.");
    delegate.fail("quota");
    let planner = planner(delegate.clone());

    let info = planner.location_info("Karakol").await.unwrap();
    assert!(info.contains("Issyk-Kul"));
    assert_eq!(delegate.calls()[0].0, CompletionTask::LocationInfo);

    let preferences: TravelPreferences = decode_payload(json!({
        "budget": "1000-2000 USD",
        "interests": ["hiking", "felt crafts"],
        "travelStyle": "slow",
        "duration": 6,
        "groupSize": 2
    }))
    .unwrap();
    assert!(matches!(
        planner.recommendations(preferences).await,
        Err(TourError::Delegate(_))
    ));
    assert!(delegate.calls()[1].1.contains("hiking, felt crafts"));
}
