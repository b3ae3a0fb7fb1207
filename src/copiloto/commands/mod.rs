use crate::config::CopilotoConfig;
use crate::model::CatalogItem;

pub mod config;
pub mod create;
pub mod favorites;
pub mod init;
pub mod list;

#[derive(Debug, Clone)]
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

/// An item as a listing shows it, with its favorite flag resolved.
#[derive(Debug, Clone)]
pub struct ListedItem {
    pub item: CatalogItem,
    pub is_favorite: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<CatalogItem>,
    pub listed_items: Vec<ListedItem>,
    pub config: Option<CopilotoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<CatalogItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<ListedItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_config(mut self, config: CopilotoConfig) -> Self {
        self.config = Some(config);
        self
    }
}
