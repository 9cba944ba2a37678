pub mod analytics;
pub mod assignment;
pub mod capacity;
pub mod duration;
pub mod insights;
pub mod planner;

pub use analytics::analyze;
pub use assignment::{fallback_assignments, itinerary_vehicle_assignments};
pub use capacity::{validate, validate_bounds, validate_capacity};
pub use duration::{duration_days, stop_hours};
pub use planner::TourPlanner;
