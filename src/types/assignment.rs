use serde::{Deserialize, Serialize};

/// Vehicle type reported for participants placed past the provided vehicle list.
pub const UNKNOWN_VEHICLE_TYPE: &str = "Unknown";

/// Someone who needs a seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub name: String,
    /// Free-form seating or activity preferences. Default: none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferences: Vec<String>,
    /// 1 (limited) ..= 10 (very mobile). Default: unspecified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility: Option<u8>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: Vec::new(),
            mobility: None,
        }
    }
}

/// A vehicle available for seating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSlot {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    /// Seats, must be positive
    pub capacity: u32,
    /// Default: none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl VehicleSlot {
    pub fn new(vehicle_type: impl Into<String>, capacity: u32) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            capacity,
            features: Vec::new(),
        }
    }
}

/// What to do when there are more participants than seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep seating into an unbounded overflow vehicle typed "Unknown".
    #[default]
    Permissive,
    /// Fail with `CapacityExhausted` before any assignment is attempted.
    Strict,
}

/// Input to vehicle-assignment generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub participants: Vec<Participant>,
    pub vehicles: Vec<VehicleSlot>,
    /// Default: none.
    #[serde(default)]
    pub destinations: Vec<String>,
    /// Default: permissive.
    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
}

impl AssignmentRequest {
    /// Seats across all vehicles, widened so large capacities cannot wrap.
    pub fn total_capacity(&self) -> u64 {
        self.vehicles.iter().map(|v| u64::from(v.capacity)).sum()
    }
}

/// One participant placed in one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAssignment {
    pub participant_name: String,
    pub vehicle_index: usize,
    pub vehicle_type: String,
    /// 1-based seat within the vehicle
    pub seat_assignment: u32,
}

/// Where an assignment plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentSource {
    /// Model output that seats every requested participant exactly once in
    /// one of the requested vehicles.
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPlan {
    pub assignments: Vec<SeatAssignment>,
    pub reasoning: String,
    pub source: AssignmentSource,
}
