use async_trait::async_trait;
use chrono::NaiveDateTime;
use crate::error::Error;
use crate::models::{ClosedTicket, Followup, PendingValidation, Ticket};

/// Read-only access to the GLPI ticket tables.
///
/// Every method takes the lower bound of the lookback window as a naive timestamp in the
/// time zone GLPI writes its `DATETIME` columns in. Rows come back newest first, with their
/// rich-text fields already reduced to plain text.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn new_tickets_since(&self, since: NaiveDateTime) -> Result<Vec<Ticket>, Error>;
    async fn closed_tickets_since(&self, since: NaiveDateTime) -> Result<Vec<ClosedTicket>, Error>;
    async fn pending_validations_since(&self, since: NaiveDateTime) -> Result<Vec<PendingValidation>, Error>;
    async fn new_followups_since(&self, since: NaiveDateTime) -> Result<Vec<Followup>, Error>;
}
