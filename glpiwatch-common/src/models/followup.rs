// File: glpiwatch-common/src/models/followup.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::ticket::Contacts;

/// A public follow-up on a ticket, with the parent ticket's contacts denormalized in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Followup {
    pub id: i64,
    pub ticket_id: i64,
    pub ticket_title: String,
    pub content: String,
    pub date_creation: Option<NaiveDateTime>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub contacts: Contacts,
}
