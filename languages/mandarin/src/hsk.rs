/// HSK proficiency band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HskLevel {
    Hsk1, // Beginner (~150 words)
    Hsk2, // Elementary (~300 words)
    Hsk3, // Intermediate (~600 words)
    Hsk4, // Upper intermediate (~1200 words)
    Hsk5, // Advanced (~2500 words)
    Hsk6, // Proficient (~5000 words)
}

impl HskLevel {
    /// Parse from a tier number (1..=6)
    pub fn from_tier(tier: u8) -> Option<Self> {
        match tier {
            1 => Some(HskLevel::Hsk1),
            2 => Some(HskLevel::Hsk2),
            3 => Some(HskLevel::Hsk3),
            4 => Some(HskLevel::Hsk4),
            5 => Some(HskLevel::Hsk5),
            6 => Some(HskLevel::Hsk6),
            _ => None,
        }
    }

    /// Tier number of this level
    pub fn tier(&self) -> u8 {
        match self {
            HskLevel::Hsk1 => 1,
            HskLevel::Hsk2 => 2,
            HskLevel::Hsk3 => 3,
            HskLevel::Hsk4 => 4,
            HskLevel::Hsk5 => 5,
            HskLevel::Hsk6 => 6,
        }
    }

    /// Get level string
    pub fn as_str(&self) -> &'static str {
        match self {
            HskLevel::Hsk1 => "HSK1",
            HskLevel::Hsk2 => "HSK2",
            HskLevel::Hsk3 => "HSK3",
            HskLevel::Hsk4 => "HSK4",
            HskLevel::Hsk5 => "HSK5",
            HskLevel::Hsk6 => "HSK6",
        }
    }

    /// Get level description
    pub fn description(&self) -> &'static str {
        match self {
            HskLevel::Hsk1 => "HSK1 (Beginner)",
            HskLevel::Hsk2 => "HSK2 (Elementary)",
            HskLevel::Hsk3 => "HSK3 (Intermediate)",
            HskLevel::Hsk4 => "HSK4 (Upper Intermediate)",
            HskLevel::Hsk5 => "HSK5 (Advanced)",
            HskLevel::Hsk6 => "HSK6 (Proficient)",
        }
    }

    /// Get color badge
    pub fn badge(&self) -> String {
        match self {
            HskLevel::Hsk1 => "🟢 HSK1".to_string(),
            HskLevel::Hsk2 => "🟡 HSK2".to_string(),
            HskLevel::Hsk3 => "🟠 HSK3".to_string(),
            HskLevel::Hsk4 => "🔴 HSK4".to_string(),
            HskLevel::Hsk5 => "🟣 HSK5".to_string(),
            HskLevel::Hsk6 => "⚫ HSK6".to_string(),
        }
    }
}
