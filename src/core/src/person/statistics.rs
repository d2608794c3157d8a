use serde::{Deserialize, Serialize};

/// Performance counters owned and updated by the roster owner after a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonStatistics {
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub max_streak: u32,
}

impl PersonStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn win_rate(&self) -> f32 {
        if self.matches_played == 0 {
            return 0.0;
        }

        self.wins as f32 / self.matches_played as f32
    }
}
