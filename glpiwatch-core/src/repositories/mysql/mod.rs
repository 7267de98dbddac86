// src/repositories/mysql/mod.rs

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::mysql::MySqlRow;
use sqlx::Row;

use glpiwatch_common::models::{
    ClosedTicket, Contacts, Followup, PendingValidation, Ticket, TicketStatus, TicketUserRole,
    ValidationStatus,
};
use glpiwatch_common::traits::repository_traits::TicketRepository;

use crate::db::Database;
use crate::Error;

pub mod tickets;
pub mod followups;
pub mod validations;

/// `TicketRepository` over a live GLPI MySQL schema.
#[derive(Clone)]
pub struct MySqlTicketRepository {
    db: Database,
}

impl MySqlTicketRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketRepository for MySqlTicketRepository {
    async fn new_tickets_since(&self, since: NaiveDateTime) -> Result<Vec<Ticket>, Error> {
        let rows = self
            .db
            .fetch_all(
                sqlx::query(tickets::NEW_TICKETS_SQL)
                    .bind(TicketUserRole::Requester as i64)
                    .bind(TicketUserRole::Technician as i64)
                    .bind(since),
            )
            .await?;
        rows.iter().map(tickets::ticket_from_row).collect()
    }

    async fn closed_tickets_since(&self, since: NaiveDateTime) -> Result<Vec<ClosedTicket>, Error> {
        let rows = self
            .db
            .fetch_all(
                sqlx::query(tickets::CLOSED_TICKETS_SQL)
                    .bind(TicketUserRole::Requester as i64)
                    .bind(TicketUserRole::Technician as i64)
                    .bind(since)
                    .bind(TicketStatus::Closed.code()),
            )
            .await?;
        rows.iter().map(tickets::closed_ticket_from_row).collect()
    }

    async fn pending_validations_since(&self, since: NaiveDateTime) -> Result<Vec<PendingValidation>, Error> {
        let rows = self
            .db
            .fetch_all(
                sqlx::query(validations::PENDING_VALIDATIONS_SQL)
                    .bind(TicketUserRole::Requester as i64)
                    .bind(since)
                    .bind(ValidationStatus::Waiting as i64),
            )
            .await?;
        rows.iter().map(validations::validation_from_row).collect()
    }

    async fn new_followups_since(&self, since: NaiveDateTime) -> Result<Vec<Followup>, Error> {
        let rows = self
            .db
            .fetch_all(
                sqlx::query(followups::NEW_FOLLOWUPS_SQL)
                    .bind(TicketUserRole::Requester as i64)
                    .bind(TicketUserRole::Technician as i64)
                    .bind(since),
            )
            .await?;
        rows.iter().map(followups::followup_from_row).collect()
    }
}

/// Requester/technician columns shared by the ticket and follow-up queries.
pub(crate) fn contacts_from_row(r: &MySqlRow) -> Result<Contacts, Error> {
    Ok(Contacts {
        requester_name: r.try_get("requester_name")?,
        requester_email: r.try_get("requester_email")?,
        phone: r.try_get("phone")?,
        technician_name: r.try_get("technician_name")?,
        technician_email: r.try_get("technician_email")?,
    })
}
