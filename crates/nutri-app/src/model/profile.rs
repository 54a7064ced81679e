//! The signed-in user's body metrics and goals.
//!
//! Served by the profile backend; see [`crate::profile_actor`] for how
//! [`ProfilePatch`] is validated and applied.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Self-reported activity level, from desk job to athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Factor applied to the basal metabolic rate to estimate daily expenditure.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub avatar_url: Option<String>,
}

impl Profile {
    /// The profile the mock backend starts with.
    pub fn sample() -> Self {
        Self {
            id: "user_1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            age: 30,
            sex: Sex::Male,
            height_cm: 178.0,
            weight_kg: 75.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            avatar_url: None,
        }
    }
}

/// Partial update for [`Profile`]. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub avatar_url: Option<String>,
}
