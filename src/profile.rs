//! User profile with derived BMI.

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::views;

/// BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value.
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

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The person using the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years (1-150)
    pub age: u32,
    /// Weight in kilograms (0-500]
    pub weight_kg: f64,
    /// Height in centimeters (0-300]
    pub height_cm: f64,
}

impl UserProfile {
    /// Create a validated profile.
    pub fn new(name: &str, age: u32, weight_kg: f64, height_cm: f64) -> Result<Self, TrackerError> {
        let profile = Self {
            name: name.trim().to_string(),
            age,
            weight_kg,
            height_cm,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::invalid("Name", "must not be empty"));
        }
        if !Self::validate_age(self.age) {
            return Err(TrackerError::invalid("Age", "must be between 1 and 150"));
        }
        if !Self::validate_weight(self.weight_kg) {
            return Err(TrackerError::invalid("Weight", "must be above 0 and at most 500 kg"));
        }
        if !Self::validate_height(self.height_cm) {
            return Err(TrackerError::invalid("Height", "must be above 0 and at most 300 cm"));
        }
        Ok(())
    }

    /// Validate age (1-150 years).
    pub fn validate_age(age: u32) -> bool {
        (1..=150).contains(&age)
    }

    /// Validate weight (0-500 kg, exclusive of zero).
    pub fn validate_weight(weight_kg: f64) -> bool {
        weight_kg.is_finite() && weight_kg > 0.0 && weight_kg <= 500.0
    }

    /// Validate height (0-300 cm, exclusive of zero).
    pub fn validate_height(height_cm: f64) -> bool {
        height_cm.is_finite() && height_cm > 0.0 && height_cm <= 300.0
    }

    /// Body mass index: weight over height in meters squared.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / height_m.powi(2)
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi())
    }
}

/// Holder for the single optional profile.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    current: Option<UserProfile>,
}

impl Profile {
    /// Start with no profile set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already loaded profile.
    pub fn from_user(current: Option<UserProfile>) -> Self {
        Self { current }
    }

    /// Validate and replace the profile.
    pub fn set(
        &mut self,
        name: &str,
        age: u32,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<&UserProfile, TrackerError> {
        let profile = UserProfile::new(name, age, weight_kg, height_cm)?;
        tracing::info!(
            "Profile set for {} (BMI {:.1}, {})",
            profile.name,
            profile.bmi(),
            profile.bmi_category()
        );
        Ok(self.current.insert(profile))
    }

    /// The current profile, if one has been set.
    pub fn get(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// One-line summary of the profile, or the "not set" message.
    pub fn summary(&self) -> String {
        views::profile_summary(self.get())
    }
}
