use serde::{Deserialize, Serialize};

/// Biological sex category. Only used to pick the BMR constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,   // M
    Female, // F
}

impl Sex {
    pub fn code(&self) -> &str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Helper: accept CLI input such as `m`, `F`, `male`, `female`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "m" | "male" => Some(Sex::Male),
            "f" | "female" => Some(Sex::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier applied to the BMR.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn to_db_str(&self) -> &str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    /// Lenient parsing for CLI input (`Very-Active`, `very active`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase().replace(['-', ' '], "_");
        Self::from_db_str(&normalized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    FatLoss,
    MuscleGain,
    #[default]
    Maintenance,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 3] = [
        FitnessGoal::FatLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Maintenance,
    ];

    /// Daily calorie adjustment applied on top of the TDEE.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            FitnessGoal::FatLoss => -500.0,
            FitnessGoal::MuscleGain => 300.0,
            FitnessGoal::Maintenance => 0.0,
        }
    }

    /// Daily workout minutes for this goal.
    pub fn workout_minutes(&self) -> f64 {
        match self {
            FitnessGoal::FatLoss => 75.0,
            FitnessGoal::MuscleGain => 60.0,
            FitnessGoal::Maintenance => 45.0,
        }
    }

    pub fn to_db_str(&self) -> &str {
        match self {
            FitnessGoal::FatLoss => "fat_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Maintenance => "maintenance",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "fat_loss" => Some(FitnessGoal::FatLoss),
            "muscle_gain" => Some(FitnessGoal::MuscleGain),
            "maintenance" => Some(FitnessGoal::Maintenance),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase().replace(['-', ' '], "_");
        Self::from_db_str(&normalized)
    }
}

/// Inputs of the target calculation, as stored in a user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBiometrics {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub goal: FitnessGoal,
}
