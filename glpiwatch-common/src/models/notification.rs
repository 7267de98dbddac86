// File: glpiwatch-common/src/models/notification.rs

use serde::{Deserialize, Serialize};

/// Body of a gateway POST. Built per row and dropped after sending.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub message: String,
    pub phone: String,
}

impl NotificationMessage {
    pub fn new(message: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            phone: phone.into(),
        }
    }
}
