use std::fmt;

use crate::model::{ShelfItem, StockItem};

pub mod add;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod move_to_shelf;
pub mod remove_quantity;
pub mod reprice;
pub mod search;

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

/// A container entry handed back for rendering.
#[derive(Debug, Clone)]
pub enum ListedItem {
    Stock(StockItem),
    Shelf(ShelfItem),
}

impl fmt::Display for ListedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListedItem::Stock(item) => fmt::Display::fmt(item, f),
            ListedItem::Shelf(item) => fmt::Display::fmt(item, f),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<ListedItem>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<ListedItem>) -> Self {
        self.listed_items = items;
        self
    }
}
