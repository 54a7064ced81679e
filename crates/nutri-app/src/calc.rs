//! # Nutrition Calculators
//!
//! Closed-form estimates shown on the profile and dashboard screens: body-mass index,
//! basal metabolic rate (Mifflin-St Jeor), daily energy expenditure, a goal-adjusted
//! calorie target and the macro split for that target.

use crate::model::{ActivityLevel, Goal, Profile, Sex};
use serde::Serialize;
use thiserror::Error;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;
const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("age must be positive")]
    ZeroAge,
}

fn positive(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonPositive { field, value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// Body-mass index: weight in kg over height in metres squared.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, CalcError> {
    let weight_kg = positive("weight_kg", weight_kg)?;
    let height_m = positive("height_cm", height_cm)? / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor).
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> Result<f64, CalcError> {
    let weight_kg = positive("weight_kg", weight_kg)?;
    let height_cm = positive("height_cm", height_cm)?;
    if age == 0 {
        return Err(CalcError::ZeroAge);
    }
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    Ok(match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    })
}

/// Total daily energy expenditure.
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

pub fn calorie_target(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Lose => tdee - GOAL_ADJUSTMENT_KCAL,
        Goal::Maintain => tdee,
        Goal::Gain => tdee + GOAL_ADJUSTMENT_KCAL,
    }
}

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Macros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Splits `calories` into protein/carbs/fat by the share each goal calls for.
pub fn macros(calories: f64, goal: Goal) -> Macros {
    let (protein, carbs, fat) = match goal {
        Goal::Lose => (0.40, 0.30, 0.30),
        Goal::Maintain => (0.30, 0.40, 0.30),
        Goal::Gain => (0.30, 0.45, 0.25),
    };
    Macros {
        protein_g: calories * protein / KCAL_PER_G_PROTEIN,
        carbs_g: calories * carbs / KCAL_PER_G_CARBS,
        fat_g: calories * fat / KCAL_PER_G_FAT,
    }
}

/// Everything the dashboard derives from a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionSummary {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub calorie_target: f64,
    pub macros: Macros,
}

pub fn summarize(profile: &Profile) -> Result<NutritionSummary, CalcError> {
    let bmi = bmi(profile.weight_kg, profile.height_cm)?;
    let bmr = bmr(profile.sex, profile.weight_kg, profile.height_cm, profile.age)?;
    let tdee = tdee(bmr, profile.activity_level);
    let calorie_target = calorie_target(tdee, profile.goal);
    Ok(NutritionSummary {
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        bmr,
        tdee,
        calorie_target,
        macros: macros(calorie_target, profile.goal),
    })
}
