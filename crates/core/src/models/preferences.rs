use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Easy,
    Moderate,
    Hard,
}

/// A member's preferred weekend vibe. Each vibe carries only its own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "vibe", rename_all = "snake_case")]
pub enum WeekendVibe {
    Chill {
        #[serde(default)]
        spa: bool,
        #[serde(default)]
        beach: bool,
    },
    Adventure {
        intensity: Intensity,
        #[serde(default)]
        activities: Vec<String>,
    },
    Party {
        #[serde(default)]
        nightlife: bool,
        #[serde(default)]
        live_music: bool,
    },
    Culture {
        #[serde(default)]
        museums: bool,
        #[serde(default)]
        theatre: bool,
    },
    Foodie {
        #[serde(default)]
        cuisines: Vec<String>,
        budget: Budget,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPreferences {
    pub user_id: String,
    pub vibe: Option<WeekendVibe>,
    pub budget: Option<Budget>,
}

impl WeekendVibe {
    pub fn name(&self) -> &'static str {
        match self {
            WeekendVibe::Chill { .. } => "chill",
            WeekendVibe::Adventure { .. } => "adventure",
            WeekendVibe::Party { .. } => "party",
            WeekendVibe::Culture { .. } => "culture",
            WeekendVibe::Foodie { .. } => "foodie",
        }
    }
}
