//! Feasibility gate for tour and assignment requests.
//!
//! Runs before any prompt is built so an infeasible request never costs a
//! generative call.

use crate::{
    error::{Result, TourError},
    types::{AssignmentRequest, TourConfiguration, VehicleConfig},
};

pub const DURATION_DAYS: (u32, u32) = (1, 30);
pub const BUDGET_USD: (f64, f64) = (200.0, 20_000.0);
pub const VEHICLE_SEATS: (u32, u32) = (1, 25);
pub const PRIORITY: (u8, u8) = (1, 10);
pub const STAY_HOURS: (f64, f64) = (0.5, 72.0);
pub const SLIDER: (u8, u8) = (1, 10);

/// Full validation of a tour configuration: bounds first, then capacity.
pub fn validate(config: &TourConfiguration) -> Result<()> {
    validate_bounds(config)?;
    validate_capacity(config)
}

/// Capacity and time-window feasibility.
pub fn validate_capacity(config: &TourConfiguration) -> Result<()> {
    if config.vehicles.is_empty() {
        return Err(TourError::configuration(
            "vehicles",
            "At least one vehicle configuration is required",
        ));
    }

    let occupants: u64 = config.vehicles.iter().map(|v| u64::from(v.occupants)).sum();
    if occupants > config.total_capacity() {
        return Err(TourError::configuration(
            "vehicles",
            "Total occupants exceed total vehicle capacity",
        ));
    }

    validate_vehicle_fit(&config.vehicles)?;

    for (idx, location) in config.location_preferences.iter().enumerate() {
        if location.min_time > location.max_time {
            return Err(TourError::configuration(
                format!("locationPreferences[{idx}].minTime"),
                format!(
                    "Location {} ({}): Minimum time cannot exceed maximum time",
                    idx + 1,
                    location.name
                ),
            ));
        }
    }

    Ok(())
}

/// Every vehicle seats its own occupants.
pub fn validate_vehicle_fit(vehicles: &[VehicleConfig]) -> Result<()> {
    for (idx, vehicle) in vehicles.iter().enumerate() {
        if vehicle.occupants > vehicle.capacity {
            return Err(TourError::configuration(
                format!("vehicles[{idx}].occupants"),
                format!(
                    "Vehicle {}: Occupants ({}) exceed capacity ({})",
                    idx + 1,
                    vehicle.occupants,
                    vehicle.capacity
                ),
            ));
        }
    }
    Ok(())
}

/// Closed numeric ranges of every bounded field.
pub fn validate_bounds(config: &TourConfiguration) -> Result<()> {
    check_range("duration", config.duration, DURATION_DAYS)?;
    check_float("budget", config.budget, BUDGET_USD)?;

    for (idx, vehicle) in config.vehicles.iter().enumerate() {
        check_range(
            &format!("vehicles[{idx}].occupants"),
            vehicle.occupants,
            VEHICLE_SEATS,
        )?;
        check_range(
            &format!("vehicles[{idx}].capacity"),
            vehicle.capacity,
            VEHICLE_SEATS,
        )?;
    }

    for (idx, location) in config.location_preferences.iter().enumerate() {
        if location.name.trim().is_empty() {
            return Err(TourError::configuration(
                format!("locationPreferences[{idx}].name"),
                "must not be empty",
            ));
        }
        check_range(
            &format!("locationPreferences[{idx}].priority"),
            location.priority,
            PRIORITY,
        )?;
        check_float(
            &format!("locationPreferences[{idx}].minTime"),
            location.min_time,
            STAY_HOURS,
        )?;
        check_float(
            &format!("locationPreferences[{idx}].maxTime"),
            location.max_time,
            STAY_HOURS,
        )?;
    }

    for (name, value) in config.preferences.sliders() {
        check_range(&format!("configuration.{name}"), value, SLIDER)?;
    }

    Ok(())
}

/// Shape checks for an assignment request.
///
/// An empty vehicle list is rejected: the greedy fill needs a first
/// vehicle to start from.
pub fn validate_assignment_request(request: &AssignmentRequest) -> Result<()> {
    if request.vehicles.is_empty() {
        return Err(TourError::configuration(
            "vehicles",
            "At least one vehicle is required",
        ));
    }

    for (idx, vehicle) in request.vehicles.iter().enumerate() {
        if vehicle.capacity == 0 {
            return Err(TourError::configuration(
                format!("vehicles[{idx}].capacity"),
                "must be a positive number of seats",
            ));
        }
    }

    for (idx, participant) in request.participants.iter().enumerate() {
        if participant.name.trim().is_empty() {
            return Err(TourError::configuration(
                format!("participants[{idx}].name"),
                "must not be empty",
            ));
        }
        if let Some(mobility) = participant.mobility {
            check_range(&format!("participants[{idx}].mobility"), mobility, SLIDER)?;
        }
    }

    Ok(())
}

fn check_range<T>(field: &str, value: T, (min, max): (T, T)) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(TourError::configuration(
            field,
            format!("{value} is outside {min}..={max}"),
        ));
    }
    Ok(())
}

fn check_float(field: &str, value: f64, bounds: (f64, f64)) -> Result<()> {
    if value.is_nan() {
        return Err(TourError::configuration(field, "must be a number"));
    }
    check_range(field, value, bounds)
}
