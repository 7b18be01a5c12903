use ::std::fs;
use ::std::path::{Path, PathBuf};

use ::anyhow::{Context, Result};
use ::serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::handler::OUTPUT_FILE_NAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output_file: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { output_file: PathBuf::from(OUTPUT_FILE_NAME), log_file: None }
    }
}

impl Settings {
    /// Loads settings from a YAML file, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .context(format!("Failed to read config file at {}", path.display()))?;

        serde_yml::from_str(&config_str)
            .context(format!("Failed to parse config file at {}", path.display()))
    }

    /// Command line flags win over file settings.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(output) = &args.output {
            self.output_file = output.clone();
        }
        self
    }
}
