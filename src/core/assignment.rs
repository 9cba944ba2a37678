//! Deterministic greedy seat assignment.

use crate::{
    error::{Result, TourError},
    types::{
        AssignmentRequest, OverflowPolicy, Participant, SeatAssignment, VehicleAssignment,
        VehicleConfig, VehicleSlot, UNKNOWN_VEHICLE_TYPE,
    },
};

pub const FALLBACK_REASONING: &str = "Automatic assignment based on capacity and basic preferences";

/// Fail early when a strict request cannot seat everyone.
pub fn ensure_capacity(request: &AssignmentRequest) -> Result<()> {
    if request.overflow_policy == OverflowPolicy::Strict {
        let capacity = request.total_capacity();
        if request.participants.len() as u64 > capacity {
            return Err(TourError::CapacityExhausted {
                participants: request.participants.len(),
                capacity,
            });
        }
    }
    Ok(())
}

/// Seat participants in input order, filling each vehicle before the next.
///
/// Once the provided vehicles are full the remaining participants go to a
/// single overflow vehicle at index `vehicles.len()`, typed "Unknown", with
/// no seat limit.
pub fn fallback_assignments(
    participants: &[Participant],
    vehicles: &[VehicleSlot],
) -> Vec<SeatAssignment> {
    let mut assignments = Vec::with_capacity(participants.len());
    let mut vehicle_index = 0usize;
    let mut occupants = 0u32;

    for participant in participants {
        if let Some(vehicle) = vehicles.get(vehicle_index) {
            if occupants >= vehicle.capacity {
                vehicle_index += 1;
                occupants = 0;
            }
        }

        let vehicle_type = vehicles
            .get(vehicle_index)
            .map(|vehicle| vehicle.vehicle_type.clone())
            .unwrap_or_else(|| UNKNOWN_VEHICLE_TYPE.to_string());

        occupants += 1;
        assignments.push(SeatAssignment {
            participant_name: participant.name.clone(),
            vehicle_index,
            vehicle_type,
            seat_assignment: occupants,
        });
    }

    assignments
}

/// Policy-aware wrapper around [`fallback_assignments`].
pub fn assign(request: &AssignmentRequest) -> Result<Vec<SeatAssignment>> {
    ensure_capacity(request)?;
    Ok(fallback_assignments(&request.participants, &request.vehicles))
}

/// One itinerary-level vehicle entry per configured vehicle, used when the
/// generated itinerary names none.
pub fn itinerary_vehicle_assignments(vehicles: &[VehicleConfig]) -> Vec<VehicleAssignment> {
    vehicles
        .iter()
        .enumerate()
        .map(|(idx, vehicle)| VehicleAssignment {
            vehicle_id: format!("vehicle_{}", idx + 1),
            vehicle_type: vehicle.vehicle_type.label().to_string(),
            occupants: vehicle.occupants,
            route: "Follows the itinerary stops in order".to_string(),
            parking_instructions: None,
            driver_notes: vehicle
                .driver_included
                .filter(|included| *included)
                .map(|_| "Driver included with the vehicle".to_string()),
        })
        .collect()
}
