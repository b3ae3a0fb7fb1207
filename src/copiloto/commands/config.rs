use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::CopilotoConfig;
use crate::error::{CopilotoError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    Set { key: String, value: String },
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = CopilotoConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    if let ConfigAction::Set { key, value } = action {
        match key.as_str() {
            "include-inactive" => {
                config.include_inactive = value.parse().map_err(|_| {
                    CopilotoError::Api(format!(
                        "Expected true/false for include-inactive, got '{}'",
                        value
                    ))
                })?;
            }
            "list-limit" => {
                config.list_limit = if value == "none" {
                    None
                } else {
                    Some(value.parse().map_err(|_| {
                        CopilotoError::Api(format!(
                            "Expected a number or 'none' for list-limit, got '{}'",
                            value
                        ))
                    })?)
                };
            }
            other => {
                return Err(CopilotoError::Api(format!("Unknown config key: {}", other)));
            }
        }
        config.save(config_dir)?;
        result.add_message(CmdMessage::success(format!("Set {}.", key)));
    }

    Ok(result.with_config(config))
}
