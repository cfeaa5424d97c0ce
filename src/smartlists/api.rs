//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for smart list operations, whatever UI is driving them.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Applies configuration** (e.g. the source fallback policy)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O beyond the config file and no presentation.

use crate::commands;
use crate::config::SmartListConfig;
use crate::error::Result;
use crate::filters::Source;
use crate::model::{SaveSmartListInput, SmartListForm};
use crate::validation::SiblingNames;
use std::path::PathBuf;

pub struct SmartListApi {
    config: SmartListConfig,
    config_dir: PathBuf,
}

impl SmartListApi {
    pub fn new(config: SmartListConfig, config_dir: PathBuf) -> Self {
        Self { config, config_dir }
    }

    /// Read the config from `config_dir` and build the facade around it.
    pub fn open(config_dir: PathBuf) -> Result<Self> {
        let config = SmartListConfig::load(&config_dir)?;
        Ok(Self::new(config, config_dir))
    }

    /// API shape → form shape.
    pub fn load_list(&self, input: &SaveSmartListInput) -> Result<commands::CmdResult> {
        commands::load::run(input, self.config.source_fallback())
    }

    /// Validate, then form shape → API shape.
    pub fn submit_list(
        &self,
        form: &SmartListForm,
        siblings: &SiblingNames,
    ) -> Result<commands::CmdResult> {
        commands::submit::run(form, siblings)
    }

    pub fn validate_list(
        &self,
        form: &SmartListForm,
        siblings: &SiblingNames,
    ) -> Result<commands::CmdResult> {
        commands::validate::run(form, siblings)
    }

    pub fn fields(&self, source: Option<Source>) -> Result<commands::CmdResult> {
        commands::fields::run(source)
    }

    pub fn operations(&self, field: &str) -> Result<commands::CmdResult> {
        commands::fields::operations(field)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn settings(&self) -> &SmartListConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
