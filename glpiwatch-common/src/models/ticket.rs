// File: glpiwatch-common/src/models/ticket.rs

use std::fmt;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Ticket lifecycle codes as stored in `glpi_tickets.status`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TicketStatus {
    New,
    ProcessingAssigned,
    ProcessingPlanned,
    Pending,
    Solved,
    Closed,
    Unknown(i64),
}

impl TicketStatus {
    pub fn code(&self) -> i64 {
        match self {
            TicketStatus::New => 1,
            TicketStatus::ProcessingAssigned => 2,
            TicketStatus::ProcessingPlanned => 3,
            TicketStatus::Pending => 4,
            TicketStatus::Solved => 5,
            TicketStatus::Closed => 6,
            TicketStatus::Unknown(code) => *code,
        }
    }

    /// Label shown to GLPI users for this status.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::New => "Novo",
            TicketStatus::ProcessingAssigned => "Processando (atribuído)",
            TicketStatus::ProcessingPlanned => "Processando (planejado)",
            TicketStatus::Pending => "Pendente",
            TicketStatus::Solved => "Solucionado",
            TicketStatus::Closed => "Fechado",
            TicketStatus::Unknown(_) => "Desconhecido",
        }
    }
}

impl From<i64> for TicketStatus {
    fn from(code: i64) -> Self {
        match code {
            1 => TicketStatus::New,
            2 => TicketStatus::ProcessingAssigned,
            3 => TicketStatus::ProcessingPlanned,
            4 => TicketStatus::Pending,
            5 => TicketStatus::Solved,
            6 => TicketStatus::Closed,
            other => TicketStatus::Unknown(other),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Unknown(code) => write!(f, "{} ({})", self.label(), code),
            _ => write!(f, "{}", self.label()),
        }
    }
}

/// Relation types in `glpi_tickets_users.type`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TicketUserRole {
    Requester = 1,
    Technician = 2,
}

/// Requester and assigned technician as resolved through the ticket-user relations.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Contacts {
    pub requester_name: Option<String>,
    pub requester_email: Option<String>,
    /// Requester phone; the notification destination.
    pub phone: Option<String>,
    pub technician_name: Option<String>,
    pub technician_email: Option<String>,
}

impl Contacts {
    /// The requester phone, if it is set to something other than whitespace.
    pub fn requester_phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A ticket as returned by the "new tickets" query. `content` is already plain text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ticket {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub date_creation: Option<NaiveDateTime>,
    pub date_mod: Option<NaiveDateTime>,
    pub status: TicketStatus,
    pub contacts: Contacts,
}

/// A closed ticket joined to its recorded solution text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClosedTicket {
    pub id: i64,
    pub name: String,
    pub solution: String,
    pub date_creation: Option<NaiveDateTime>,
    pub date_mod: Option<NaiveDateTime>,
    pub status: TicketStatus,
    pub contacts: Contacts,
}
