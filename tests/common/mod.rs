#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use serde_json::{json, Value};
use tour_agent_rs::{
    CompletionTask, GenerativeDelegate, InMemoryItineraryStore, Result, TourError, TourPlanner,
};

/// Delegate that replays canned answers and records every call.
#[derive(Default)]
pub struct ScriptedDelegate {
    replies: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<Vec<(CompletionTask, String)>>,
}

impl ScriptedDelegate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, text: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(TourError::Delegate(message.to_string())));
    }

    pub fn calls(&self) -> Vec<(CompletionTask, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeDelegate for ScriptedDelegate {
    async fn generate(&self, task: CompletionTask, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push((task, prompt.to_string()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TourError::Delegate("no scripted reply".to_string())))
    }
}

pub fn planner(delegate: Arc<ScriptedDelegate>) -> TourPlanner {
    TourPlanner::new(delegate, Arc::new(InMemoryItineraryStore::new()))
}

/// A valid tour request body: 5 travellers in two vehicles, Issyk-Kul, 5 days.
pub fn tour_request() -> Value {
    json!({
        "primaryRegion": "issyk_kul",
        "duration": 5,
        "tourType": "adventure",
        "budget": 2500,
        "vehicles": [
            { "type": "suv_4wd", "occupants": 3, "capacity": 4, "driverIncluded": true },
            { "type": "sedan", "occupants": 2, "capacity": 4 }
        ],
        "locationPreferences": [
            { "name": "Karakol", "priority": 9, "minTime": 4, "maxTime": 8 },
            { "name": "Jeti-Oguz", "region": "issyk_kul", "priority": 7, "minTime": 2, "maxTime": 4 }
        ],
        "configuration": {
            "mobilityLevel": 6,
            "adventureLevel": 7,
            "culturalImmersion": 5,
            "natureFocus": 9,
            "traditionalExperience": 6,
            "budgetFlexibility": 4
        },
        "season": "summer"
    })
}

/// Model answer for an itinerary prompt.
pub fn itinerary_reply(title: &str) -> String {
    json!({
        "title": title,
        "duration": "5 days",
        "difficulty": "Medium",
        "highlights": ["Jeti-Oguz red rocks", "Karakol Dungan mosque"],
        "itinerary": [
            { "time": "09:00", "location": "Karakol", "description": "Walking tour", "tips": [], "duration": "3 hours" },
            { "time": "13:00", "location": "Jeti-Oguz", "description": "Outdoor hike", "tips": ["Bring water"], "duration": "4 hours" },
            { "time": "18:00", "location": "Yurt camp", "description": "Dinner", "tips": [], "duration": "2 hours" }
        ],
        "recommendations": ["Pack layers"],
        "totalBudget": 2500,
        "totalParticipants": 5
    })
    .to_string()
}
