//! Derived metrics and rule-based suggestions for a stored itinerary.
//!
//! Every function here is pure. Metrics whose preconditions do not hold
//! (no participants, a duration without a day count, zero days) come back
//! as `None` in the report, with the reason listed in `notComputable`.

use crate::{
    core::duration::{duration_days, stop_hours},
    error::{Result, TourError},
    types::{
        CostAnalysis, EfficiencyMetrics, ItineraryRecord, MetricIssue, Stop, TimeAnalysis,
        TourAnalytics, VehicleAssignment,
    },
};

/// Fixed seat count each vehicle's occupancy is measured against.
pub const REFERENCE_VEHICLE_CAPACITY: f64 = 8.0;
/// Hours of travel assumed between consecutive stops.
pub const TRAVEL_HOURS_PER_STOP: f64 = 0.5;

const UTILIZATION_TARGET: u32 = 70;
const SCORE_THRESHOLD: u8 = 6;

pub fn cost_per_person(total_budget: f64, total_participants: u32) -> Result<f64> {
    if total_participants == 0 {
        return Err(TourError::DivisionDomain(
            "cost per person needs at least one participant".to_string(),
        ));
    }
    Ok(total_budget / f64::from(total_participants))
}

pub fn cost_per_day(total_budget: f64, duration: &str) -> Result<f64> {
    let days = non_zero_days(duration)?;
    Ok(total_budget / f64::from(days))
}

pub fn cost_per_person_per_day(
    total_budget: f64,
    total_participants: u32,
    duration: &str,
) -> Result<f64> {
    let days = non_zero_days(duration)?;
    Ok(cost_per_person(total_budget, total_participants)? / f64::from(days))
}

pub fn locations_per_day(stop_count: usize, duration: &str) -> Result<f64> {
    let days = non_zero_days(duration)?;
    Ok(stop_count as f64 / f64::from(days))
}

/// Mean stop length in hours, one decimal; 0 for an empty itinerary.
pub fn average_stop_duration(stops: &[Stop]) -> f64 {
    if stops.is_empty() {
        return 0.0;
    }
    round_to_tenth(active_time(stops) / stops.len() as f64)
}

pub fn travel_time(stops: &[Stop]) -> f64 {
    stops.len() as f64 * TRAVEL_HOURS_PER_STOP
}

pub fn active_time(stops: &[Stop]) -> f64 {
    stops.iter().map(|stop| stop_hours(&stop.duration)).sum()
}

pub fn budget_efficiency_score(cost_per_person_per_day: f64) -> u8 {
    match cost_per_person_per_day {
        c if c <= 100.0 => 10,
        c if c <= 200.0 => 9,
        c if c <= 300.0 => 8,
        c if c <= 400.0 => 7,
        c if c <= 500.0 => 6,
        c if c <= 700.0 => 4,
        c if c <= 1000.0 => 2,
        _ => 1,
    }
}

pub fn time_efficiency_score(locations_per_day: f64) -> u8 {
    let lpd = locations_per_day;
    if (3.0..=5.0).contains(&lpd) {
        10
    } else if (2.0..3.0).contains(&lpd) || (lpd > 5.0 && lpd <= 6.0) {
        8
    } else if (1.0..2.0).contains(&lpd) || (lpd > 6.0 && lpd <= 8.0) {
        6
    } else if lpd > 8.0 {
        3
    } else {
        1
    }
}

/// Mean occupancy against [`REFERENCE_VEHICLE_CAPACITY`], capped at 100 each.
pub fn vehicle_utilization(assignments: &[VehicleAssignment]) -> u32 {
    if assignments.is_empty() {
        return 0;
    }
    let total: f64 = assignments
        .iter()
        .map(|a| (f64::from(a.occupants) / REFERENCE_VEHICLE_CAPACITY).min(1.0) * 100.0)
        .sum();
    (total / assignments.len() as f64).round() as u32
}

/// Rule-based improvement suggestions. Scores that are `None` fire no rule.
pub fn suggestions(metrics: &EfficiencyMetrics) -> Vec<String> {
    let mut out = Vec::new();

    if metrics
        .budget_efficiency
        .is_some_and(|score| score < SCORE_THRESHOLD)
    {
        out.push("Consider reducing accommodation costs or finding group discounts".to_string());
        out.push("Look for free activities and attractions".to_string());
    }

    if metrics
        .time_efficiency
        .is_some_and(|score| score < SCORE_THRESHOLD)
    {
        if metrics.locations_per_day.unwrap_or(0.0) > 6.0 {
            out.push("Reduce the number of locations per day for a more relaxed pace".to_string());
        } else {
            out.push("Add more activities to make better use of your time".to_string());
        }
    }

    if metrics.vehicle_utilization < UTILIZATION_TARGET {
        out.push("Consider consolidating to fewer vehicles to reduce costs".to_string());
    }

    if out.is_empty() {
        out.push("Your tour is well-optimized!".to_string());
        out.push("Consider adding backup activities for bad weather".to_string());
    }

    out
}

/// Full analytics report for one record.
pub fn analyze(record: &ItineraryRecord) -> TourAnalytics {
    let mut issues = Vec::new();
    let stops = &record.itinerary;

    let cost_per_person = note(
        &mut issues,
        "costPerPerson",
        cost_per_person(record.total_budget, record.total_participants),
    );
    let cost_per_day = note(
        &mut issues,
        "costPerDay",
        cost_per_day(record.total_budget, &record.duration),
    );
    let locations_per_day = note(
        &mut issues,
        "locationsPerDay",
        locations_per_day(stops.len(), &record.duration),
    );
    let budget_efficiency = note(
        &mut issues,
        "budgetEfficiency",
        cost_per_person_per_day(
            record.total_budget,
            record.total_participants,
            &record.duration,
        ),
    )
    .map(budget_efficiency_score);

    let efficiency_metrics = EfficiencyMetrics {
        locations_per_day,
        budget_efficiency,
        time_efficiency: locations_per_day.map(time_efficiency_score),
        vehicle_utilization: vehicle_utilization(&record.vehicle_assignments),
    };
    let suggestions = suggestions(&efficiency_metrics);

    TourAnalytics {
        cost_analysis: CostAnalysis {
            total_budget: record.total_budget,
            budget_breakdown: record.budget_breakdown.clone(),
            cost_per_person,
            cost_per_day,
        },
        time_analysis: TimeAnalysis {
            total_duration: record.duration.clone(),
            average_stop_duration_hours: average_stop_duration(stops),
            travel_time_hours: travel_time(stops),
            active_time_hours: active_time(stops),
        },
        efficiency_metrics,
        suggestions,
        not_computable: issues,
    }
}

fn non_zero_days(duration: &str) -> Result<u32> {
    match duration_days(duration)? {
        0 => Err(TourError::DivisionDomain(format!(
            "duration `{}` has zero days",
            duration
        ))),
        days => Ok(days),
    }
}

fn note(issues: &mut Vec<MetricIssue>, metric: &str, value: Result<f64>) -> Option<f64> {
    match value {
        Ok(value) => Some(value),
        Err(err) => {
            issues.push(MetricIssue {
                metric: metric.to_string(),
                code: err.error_code().to_string(),
                reason: err.to_string(),
            });
            None
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
