//! RemoteEntity implementation for [`DietaryProfile`].
//!
//! List fields of a [`DietaryPatch`] replace the stored lists wholesale; entries are
//! trimmed and blank entries are rejected.

use super::error::DietaryError;
use crate::model::{DietaryPatch, DietaryProfile};
use resource_hooks::RemoteEntity;
use std::convert::Infallible;

const CALORIE_RANGE: std::ops::RangeInclusive<u32> = 800..=6000;

fn normalize(field: &str, entries: Vec<String>) -> Result<Vec<String>, DietaryError> {
    entries
        .into_iter()
        .map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                Err(DietaryError::ValidationError(format!("{field} contains a blank entry")))
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}

impl RemoteEntity for DietaryProfile {
    type Patch = DietaryPatch;
    type ItemId = Infallible;
    type Action = Infallible;
    type Error = DietaryError;

    fn apply_patch(&mut self, patch: DietaryPatch) -> Result<(), DietaryError> {
        if let Some(diets) = patch.diets {
            self.diets = normalize("diets", diets)?;
        }
        if let Some(allergens) = patch.allergens {
            self.allergens = normalize("allergens", allergens)?;
        }
        if let Some(dislikes) = patch.dislikes {
            self.dislikes = normalize("dislikes", dislikes)?;
        }
        if let Some(target) = patch.calorie_target {
            if !CALORIE_RANGE.contains(&target) {
                return Err(DietaryError::ValidationError(format!(
                    "calorie target {target} outside {}..={}",
                    CALORIE_RANGE.start(),
                    CALORIE_RANGE.end()
                )));
            }
            self.calorie_target = Some(target);
        }
        Ok(())
    }

    fn remove_item(&mut self, id: &Infallible) -> Result<(), DietaryError> {
        match *id {}
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), DietaryError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_patch_replaces_and_trims() {
        let mut dietary = DietaryProfile::sample();
        let patch = DietaryPatch {
            allergens: Some(vec![" peanuts ".into(), "shellfish".into()]),
            ..Default::default()
        };
        dietary.apply_patch(patch).unwrap();
        assert_eq!(dietary.allergens, vec!["peanuts", "shellfish"]);
        assert_eq!(dietary.diets, vec!["Vegan"]);
    }

    #[test]
    fn test_blank_entry_rejected() {
        let mut dietary = DietaryProfile::sample();
        let patch = DietaryPatch {
            dislikes: Some(vec!["  ".into()]),
            ..Default::default()
        };
        assert!(dietary.apply_patch(patch).is_err());
    }

    #[test]
    fn test_calorie_target_bounds() {
        let mut dietary = DietaryProfile::sample();
        let too_low = DietaryPatch {
            calorie_target: Some(300),
            ..Default::default()
        };
        assert!(dietary.apply_patch(too_low).is_err());
        assert_eq!(dietary.calorie_target, Some(2200));
    }
}
