use serde::{Deserialize, Serialize};

/// Diets, allergens and dislikes the recommendations must respect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryProfile {
    pub diets: Vec<String>,
    pub allergens: Vec<String>,
    pub dislikes: Vec<String>,
    pub calorie_target: Option<u32>,
}

impl DietaryProfile {
    pub fn sample() -> Self {
        Self {
            diets: vec!["Vegan".to_string()],
            allergens: vec!["peanuts".to_string()],
            dislikes: vec!["cilantro".to_string()],
            calorie_target: Some(2200),
        }
    }

    pub fn has_allergen(&self, allergen: &str) -> bool {
        self.allergens.iter().any(|a| a == allergen)
    }
}

/// Partial update for [`DietaryProfile`]. List fields replace the stored list wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryPatch {
    pub diets: Option<Vec<String>>,
    pub allergens: Option<Vec<String>>,
    pub dislikes: Option<Vec<String>>,
    pub calorie_target: Option<u32>,
}
