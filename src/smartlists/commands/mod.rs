use crate::config::SmartListConfig;
use crate::filters::{FilterOperation, SelectorOption};
use crate::model::{SaveSmartListInput, SmartListForm};
use crate::validation::ValidationReport;

pub mod config;
pub mod fields;
pub mod load;
pub mod submit;
pub mod validate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub form: Option<SmartListForm>,
    pub input: Option<SaveSmartListInput>,
    pub report: Option<ValidationReport>,
    pub selectors: Vec<SelectorOption>,
    pub operations: Vec<FilterOperation>,
    pub config: Option<SmartListConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_form(mut self, form: SmartListForm) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_input(mut self, input: SaveSmartListInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_report(mut self, report: ValidationReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_selectors(mut self, selectors: Vec<SelectorOption>) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn with_operations(mut self, operations: Vec<FilterOperation>) -> Self {
        self.operations = operations;
        self
    }

    pub fn with_config(mut self, config: SmartListConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when an error message was recorded.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
