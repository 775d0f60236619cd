// Metadata inference: a short title and a whitelisted category for a prompt.

pub mod handlers;
pub mod inference;
pub mod parser;
pub mod prompts;

use serde::Serialize;

/// Whitelisted prompt categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coding,
    Writing,
    Analysis,
    Creative,
    #[default]
    Other,
}

impl Category {
    /// Parses an exact lower-case category name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "coding" => Some(Category::Coding),
            "writing" => Some(Category::Writing),
            "analysis" => Some(Category::Analysis),
            "creative" => Some(Category::Creative),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

/// Title and category inferred for a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMetadata {
    pub title: String,
    pub category: Category,
}
