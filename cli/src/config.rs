use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board_size: usize,
    pub log_prefix: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            log_prefix: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(format!("Failed to read config {}: {}", path, err)),
        };
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.board_size < 3 || self.board_size > 20 {
            return Err(format!(
                "Board size must be between 3 and 20, got {}",
                self.board_size
            ));
        }
        Ok(())
    }
}
