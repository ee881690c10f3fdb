use serde::{Deserialize, Serialize};

/// Некритичное диагностическое сообщение, возникшее во время расчета
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    pub category: String, // "options", "catalog", ...
    pub message: String,
}

impl DiagnosticEntry {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}
