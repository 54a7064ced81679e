//! RemoteEntity implementation for the Profile domain type.

use super::error::ProfileError;
use crate::model::{Profile, ProfilePatch};
use resource_hooks::RemoteEntity;
use std::convert::Infallible;

const MAX_AGE: u32 = 120;

impl RemoteEntity for Profile {
    type Patch = ProfilePatch;
    type ItemId = Infallible;
    type Action = Infallible;
    type Error = ProfileError;

    /// Applies every present field of the patch.
    ///
    /// # Errors
    /// `ValidationError` for an empty name, an email without `@`, an age outside
    /// `1..=120`, or a non-positive height or weight.
    fn apply_patch(&mut self, patch: ProfilePatch) -> Result<(), ProfileError> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(ProfileError::ValidationError("name must not be empty".into()));
            }
            self.name = name;
        }
        if let Some(email) = patch.email {
            if !email.contains('@') {
                return Err(ProfileError::ValidationError(format!("invalid email: {email}")));
            }
            self.email = email;
        }
        if let Some(age) = patch.age {
            if age == 0 || age > MAX_AGE {
                return Err(ProfileError::ValidationError(format!("age out of range: {age}")));
            }
            self.age = age;
        }
        if let Some(height_cm) = patch.height_cm {
            if height_cm <= 0.0 {
                return Err(ProfileError::ValidationError("height must be positive".into()));
            }
            self.height_cm = height_cm;
        }
        if let Some(weight_kg) = patch.weight_kg {
            if weight_kg <= 0.0 {
                return Err(ProfileError::ValidationError("weight must be positive".into()));
            }
            self.weight_kg = weight_kg;
        }
        if let Some(sex) = patch.sex {
            self.sex = sex;
        }
        if let Some(activity_level) = patch.activity_level {
            self.activity_level = activity_level;
        }
        if let Some(goal) = patch.goal {
            self.goal = goal;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        Ok(())
    }

    fn remove_item(&mut self, id: &Infallible) -> Result<(), ProfileError> {
        match *id {}
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), ProfileError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Goal;

    #[test]
    fn test_patch_updates_only_present_fields() {
        let mut profile = Profile::sample();
        let patch = ProfilePatch {
            goal: Some(Goal::Lose),
            weight_kg: Some(80.0),
            ..Default::default()
        };
        profile.apply_patch(patch).unwrap();
        assert_eq!(profile.goal, Goal::Lose);
        assert_eq!(profile.weight_kg, 80.0);
        assert_eq!(profile.name, Profile::sample().name);
    }

    #[test]
    fn test_patch_rejects_invalid_email() {
        let mut profile = Profile::sample();
        let patch = ProfilePatch {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(matches!(
            profile.apply_patch(patch),
            Err(ProfileError::ValidationError(_))
        ));
    }

    #[test]
    fn test_patch_rejects_zero_age() {
        let mut profile = Profile::sample();
        let patch = ProfilePatch {
            age: Some(0),
            ..Default::default()
        };
        assert!(profile.apply_patch(patch).is_err());
    }
}
