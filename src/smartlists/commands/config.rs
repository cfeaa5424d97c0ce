use crate::commands::{CmdMessage, CmdResult};
use crate::config::SmartListConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SmartListConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SmartListConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SmartListConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.set(&key, &value) {
                Ok(()) => {
                    config.save(dir)?;
                    let shown = config.get(&key).unwrap_or(value);
                    result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
                    result = result.with_config(config);
                }
                Err(e) => result.add_message(CmdMessage::error(e)),
            }
            Ok(result)
        }
    }
}
