use serde::{Deserialize, Serialize};

use crate::types::{BOARD_SIZE, PALETTE_SIZE};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub board_size: usize,
    pub palette_size: usize,
    /// Points per matched symbol beyond the first two of a run.
    pub base_match_score: u32,
    pub target_score: u32,
    pub max_generate_attempts: u32,
    pub max_break_passes: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            palette_size: PALETTE_SIZE,
            base_match_score: 10,
            target_score: 500,
            max_generate_attempts: 64,
            max_break_passes: 64,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size < 3 || self.board_size > 16 {
            return Err(format!(
                "Board size must be between 3 and 16, got {}",
                self.board_size
            ));
        }
        if self.palette_size < 4 || self.palette_size > PALETTE_SIZE {
            return Err(format!(
                "Palette size must be between 4 and {}, got {}",
                PALETTE_SIZE, self.palette_size
            ));
        }
        if self.base_match_score == 0 {
            return Err("Base match score must be positive".to_string());
        }
        if self.target_score == 0 {
            return Err("Target score must be positive".to_string());
        }
        if self.max_generate_attempts == 0 || self.max_break_passes == 0 {
            return Err("Generator iteration caps must be positive".to_string());
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        let settings: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml_str(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {}", path, e))?;
        Self::from_yaml_str(&content)
    }
}
