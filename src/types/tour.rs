use serde::{Deserialize, Serialize};

/// Primary regions a tour can focus on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    BishkekChuy,
    IssykKul,
    Naryn,
    Talas,
    OshFerghana,
    JalalAbad,
    Batken,
}

impl Region {
    /// Human-readable name used in prompts and as the itinerary destination.
    pub fn label(self) -> &'static str {
        match self {
            Region::BishkekChuy => "Bishkek & Chuy",
            Region::IssykKul => "Issyk-Kul",
            Region::Naryn => "Naryn",
            Region::Talas => "Talas",
            Region::OshFerghana => "Osh & Ferghana Valley",
            Region::JalalAbad => "Jalal-Abad",
            Region::Batken => "Batken",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourType {
    Cultural,
    Adventure,
    NomadicExperience,
    MountainTrekking,
    Historical,
    NatureWildlife,
    SilkRoad,
    Photography,
    WinterSports,
    Culinary,
}

impl TourType {
    pub fn label(self) -> &'static str {
        match self {
            TourType::Cultural => "cultural",
            TourType::Adventure => "adventure",
            TourType::NomadicExperience => "nomadic experience",
            TourType::MountainTrekking => "mountain trekking",
            TourType::Historical => "historical",
            TourType::NatureWildlife => "nature & wildlife",
            TourType::SilkRoad => "Silk Road",
            TourType::Photography => "photography",
            TourType::WinterSports => "winter sports",
            TourType::Culinary => "culinary",
        }
    }
}

/// Mode of transport a vehicle entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Sedan,
    #[serde(rename = "suv_4wd")]
    Suv4wd,
    Minivan,
    Marshrutka,
    Horses,
    Hiking,
    JeepOffroad,
}

impl VehicleType {
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Sedan => "sedan",
            VehicleType::Suv4wd => "suv_4wd",
            VehicleType::Minivan => "minivan",
            VehicleType::Marshrutka => "marshrutka",
            VehicleType::Horses => "horses",
            VehicleType::Hiking => "hiking",
            VehicleType::JeepOffroad => "jeep_offroad",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationType {
    Hotel,
    Guesthouse,
    YurtCamp,
    TraditionalHomestay,
    MountainLodge,
    Camping,
}

impl AccommodationType {
    pub fn label(self) -> &'static str {
        match self {
            AccommodationType::Hotel => "hotel",
            AccommodationType::Guesthouse => "guesthouse",
            AccommodationType::YurtCamp => "yurt camp",
            AccommodationType::TraditionalHomestay => "traditional homestay",
            AccommodationType::MountainLodge => "mountain lodge",
            AccommodationType::Camping => "camping",
        }
    }
}

/// One vehicle (or mode of transport) in the group's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleConfig {
    /// Vehicle category
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    /// People travelling in this vehicle (1..=25)
    pub occupants: u32,
    /// Seats available (1..=25)
    pub capacity: u32,
    /// Whether a driver or guide comes with the vehicle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_included: Option<bool>,
    /// Special equipment requested (GPS, satellite phone, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_equipment: Option<Vec<String>>,
}

/// A location the group wants to visit and how long to stay there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPreference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// 1 (nice to have) ..= 10 (must see)
    pub priority: u8,
    /// Minimum hours to spend, 0.5..=72
    pub min_time: f64,
    /// Maximum hours to spend, 0.5..=72
    pub max_time: f64,
    /// Metres above sea level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
}

/// The six 1..=10 preference sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    /// 1 = limited mobility, 10 = very fit for mountain activities
    pub mobility_level: u8,
    /// 1 = comfort focused, 10 = extreme adventure
    pub adventure_level: u8,
    pub cultural_immersion: u8,
    pub nature_focus: u8,
    /// Yurt stays, horseback riding, traditional crafts
    pub traditional_experience: u8,
    pub budget_flexibility: u8,
}

impl PreferenceProfile {
    /// Slider values paired with their wire names, in declaration order.
    pub fn sliders(&self) -> [(&'static str, u8); 6] {
        [
            ("mobilityLevel", self.mobility_level),
            ("adventureLevel", self.adventure_level),
            ("culturalImmersion", self.cultural_immersion),
            ("natureFocus", self.nature_focus),
            ("traditionalExperience", self.traditional_experience),
            ("budgetFlexibility", self.budget_flexibility),
        ]
    }
}

/// A structured trip-planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourConfiguration {
    pub primary_region: Region,
    /// Tour length in days (1..=30)
    pub duration: u32,
    pub tour_type: TourType,
    /// Total budget in USD (200..=20000)
    pub budget: f64,
    pub vehicles: Vec<VehicleConfig>,
    #[serde(default)]
    pub location_preferences: Vec<LocationPreference>,
    #[serde(rename = "configuration")]
    pub preferences: PreferenceProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation_type: Option<AccommodationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub language_preferences: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_concerns: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traditional_activities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photography_interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
}

impl TourConfiguration {
    /// Sum of occupants across all vehicles.
    pub fn total_participants(&self) -> u32 {
        self.vehicles.iter().map(|v| v.occupants).sum()
    }

    /// Sum of declared seats across all vehicles.
    pub fn total_capacity(&self) -> u64 {
        self.vehicles.iter().map(|v| u64::from(v.capacity)).sum()
    }
}

/// Partial update of a stored tour's configuration.
///
/// Absent fields keep their stored value. A change of `primaryRegion` or
/// `tourType` regenerates the itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_type: Option<TourType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicles: Option<Vec<VehicleConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_preferences: Option<Vec<LocationPreference>>,
    #[serde(
        default,
        rename = "configuration",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferences: Option<PreferenceProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation_type: Option<AccommodationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
}

impl TourUpdate {
    /// Whether applying this update requires a fresh generation.
    pub fn requires_regeneration(&self) -> bool {
        self.primary_region.is_some() || self.tour_type.is_some()
    }

    /// Stored configuration with this update laid over it.
    pub fn apply_to(&self, base: &TourConfiguration) -> TourConfiguration {
        let mut merged = base.clone();
        if let Some(region) = self.primary_region {
            merged.primary_region = region;
        }
        if let Some(duration) = self.duration {
            merged.duration = duration;
        }
        if let Some(tour_type) = self.tour_type {
            merged.tour_type = tour_type;
        }
        if let Some(budget) = self.budget {
            merged.budget = budget;
        }
        if let Some(vehicles) = &self.vehicles {
            merged.vehicles = vehicles.clone();
        }
        if let Some(locations) = &self.location_preferences {
            merged.location_preferences = locations.clone();
        }
        if let Some(preferences) = &self.preferences {
            merged.preferences = preferences.clone();
        }
        if self.accommodation_type.is_some() {
            merged.accommodation_type = self.accommodation_type;
        }
        if self.starting_location.is_some() {
            merged.starting_location = self.starting_location.clone();
        }
        if self.season.is_some() {
            merged.season = self.season.clone();
        }
        if self.special_requirements.is_some() {
            merged.special_requirements = self.special_requirements.clone();
        }
        merged
    }
}
