pub mod analytics;
pub mod assignment;
pub mod insights;
pub mod itinerary;
pub mod response;
pub mod tour;

pub use analytics::{CostAnalysis, EfficiencyMetrics, MetricIssue, TimeAnalysis, TourAnalytics};
pub use assignment::{
    AssignmentPlan, AssignmentRequest, AssignmentSource, OverflowPolicy, Participant,
    SeatAssignment, VehicleSlot, UNKNOWN_VEHICLE_TYPE,
};
pub use insights::{
    AlternativeRoute, CurrentConditions, OptimizationRequest, RouteOptimization,
    RoutePreferences, TourSummary, TravelPreferences, WeatherImpact,
};
pub use itinerary::{
    BudgetBreakdown, Difficulty, ItineraryDraft, ItineraryPatch, ItineraryRecord, Stop,
    VehicleAssignment,
};
pub use response::deserialize_structured_response;
pub use tour::{
    AccommodationType, LocationPreference, PreferenceProfile, Region, TourConfiguration,
    TourType, TourUpdate, VehicleConfig, VehicleType,
};
