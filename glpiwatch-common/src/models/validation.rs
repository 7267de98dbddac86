// File: glpiwatch-common/src/models/validation.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::ticket::{non_blank, TicketStatus};

/// Codes in `glpi_ticketvalidations.status`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValidationStatus {
    Waiting = 2,
}

/// A ticket with an approval request still waiting on its validator.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PendingValidation {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub comment_submission: String,
    pub date_creation: Option<NaiveDateTime>,
    pub date_mod: Option<NaiveDateTime>,
    pub status: TicketStatus,
    pub requester_name: Option<String>,
    pub phone: Option<String>,
    pub validator_name: Option<String>,
    pub validator_phone: Option<String>,
}

impl PendingValidation {
    pub fn requester_phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }
}
