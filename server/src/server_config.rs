use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

use tictactoe_engine::Difficulty;

/// Which proposer answers `/api/move`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveBackend {
    #[default]
    Local,
    Llm,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Chat-completions endpoint, OpenRouter-compatible.
    pub api_base: String,
    /// Environment variable holding the API key. The key itself never lives
    /// in the config file.
    pub api_key_env: String,
    pub model: String,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "https://openrouter.ai/api/v1".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            model: "google/gemini-1.5-flash-latest".to_string(),
            temperature: 0.2,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Tier used when a request omits `difficulty`.
    pub default_difficulty: Difficulty,
    pub backend: MoveBackend,
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            default_difficulty: Difficulty::Hard,
            backend: MoveBackend::Local,
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the YAML config at `path`; a missing file means defaults.
    pub fn load(path: &str) -> Result<Self, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("Failed to read config {}: {}", path, e)),
        };

        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("bind_address must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            ));
        }
        if self.backend == MoveBackend::Llm && self.llm.model.is_empty() {
            return Err("llm.model must not be empty when backend is llm".to_string());
        }
        Ok(())
    }
}
