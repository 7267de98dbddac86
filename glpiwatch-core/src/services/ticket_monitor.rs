// glpiwatch-core/src/services/ticket_monitor.rs

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::{error, info};

use glpiwatch_common::models::{ClosedTicket, Followup, PendingValidation, Ticket};
use glpiwatch_common::traits::repository_traits::TicketRepository;

use crate::utils::time::{format_timestamp, lookback_threshold};

/// Time-windowed reads over the ticket repository.
///
/// Each getter turns `interval_minutes` into a threshold in the GLPI time zone, runs one
/// query, and hands back the rows newest first. A failed query is logged and reported as
/// "no rows", so a broken database never stops the polling loop.
pub struct TicketMonitor {
    repo: Arc<dyn TicketRepository>,
    timezone: Tz,
}

impl TicketMonitor {
    pub fn new(repo: Arc<dyn TicketRepository>, timezone: Tz) -> Self {
        Self { repo, timezone }
    }

    fn threshold(&self, interval_minutes: i64) -> NaiveDateTime {
        lookback_threshold(Utc::now(), self.timezone, interval_minutes)
    }

    pub async fn get_new_tickets(&self, interval_minutes: i64) -> Vec<Ticket> {
        let since = self.threshold(interval_minutes);
        info!("Looking for tickets created since {}", format_timestamp(since));
        match self.repo.new_tickets_since(since).await {
            Ok(tickets) => tickets,
            Err(e) => {
                error!("Failed to fetch new tickets => {}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_close_tickets(&self, interval_minutes: i64) -> Vec<ClosedTicket> {
        let since = self.threshold(interval_minutes);
        info!("Looking for tickets closed since {}", format_timestamp(since));
        match self.repo.closed_tickets_since(since).await {
            Ok(tickets) => tickets,
            Err(e) => {
                error!("Failed to fetch closed tickets => {}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_new_validations(&self, interval_minutes: i64) -> Vec<PendingValidation> {
        let since = self.threshold(interval_minutes);
        info!("Looking for ticket approvals requested since {}", format_timestamp(since));
        match self.repo.pending_validations_since(since).await {
            Ok(validations) => validations,
            Err(e) => {
                error!("Failed to fetch pending validations => {}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_new_followups(&self, interval_minutes: i64) -> Vec<Followup> {
        let since = self.threshold(interval_minutes);
        info!("Looking for follow-ups created since {}", format_timestamp(since));
        let followups = match self.repo.new_followups_since(since).await {
            Ok(followups) => followups,
            Err(e) => {
                error!("Failed to fetch new follow-ups => {}", e);
                return Vec::new();
            }
        };

        info!("Follow-up query returned {} rows", followups.len());
        for (i, f) in followups.iter().enumerate() {
            info!(
                "Follow-up {}: id={}, ticket_id={}, author_email={:?}, requester_email={:?}, technician_email={:?}",
                i + 1,
                f.id,
                f.ticket_id,
                f.author_email,
                f.contacts.requester_email,
                f.contacts.technician_email
            );
        }
        followups
    }
}
