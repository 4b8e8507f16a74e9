use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Metadata as far as it is known before prompting. Every field may be
/// missing; the JSON file is layered under the command-line flags.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub filter_number: Option<String>,
    pub filter_name: Option<String>,
    pub manufacturer: Option<String>,
    pub hex_color: Option<String>,
}

impl MetadataConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading metadata file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing metadata file {}", path.display()))
    }

    /// Load the optional JSON file and apply flag overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base = match &cli.metadata {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.overridden_by(Self {
            filter_number: cli.filter_number.clone(),
            filter_name: cli.filter_name.clone(),
            manufacturer: cli.manufacturer.clone(),
            hex_color: cli.hex_color.clone(),
        }))
    }

    fn overridden_by(self, other: Self) -> Self {
        Self {
            filter_number: other.filter_number.or(self.filter_number),
            filter_name: other.filter_name.or(self.filter_name),
            manufacturer: other.manufacturer.or(self.manufacturer),
            hex_color: other.hex_color.or(self.hex_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let file: MetadataConfig = serde_json::from_str(
            r##"{"filter_number":"1","filter_name":"File","hex_color":"#000"}"##,
        )
        .unwrap();
        let merged = file.overridden_by(MetadataConfig {
            filter_name: Some("Flag".into()),
            ..Default::default()
        });
        assert_eq!(merged.filter_number.as_deref(), Some("1"));
        assert_eq!(merged.filter_name.as_deref(), Some("Flag"));
        assert_eq!(merged.manufacturer, None);
        assert_eq!(merged.hex_color.as_deref(), Some("#000"));
    }
}
