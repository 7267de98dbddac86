// src/tasks/ticket_poll.rs

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::info;

use glpiwatch_common::models::NotificationMessage;
use glpiwatch_common::traits::notification_traits::NotificationSender;
use glpiwatch_common::traits::repository_traits::TicketRepository;

use crate::config::AppConfig;
use crate::services::{MessageFormatter, TicketMonitor};
use crate::utils::time::format_optional;

/// Rows seen and notifications handed to the sender for one category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryReport {
    pub found: usize,
    pub notified: usize,
}

/// Outcome of one polling pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub followups: CategoryReport,
    pub new_tickets: CategoryReport,
    pub closed_tickets: CategoryReport,
    pub validations: CategoryReport,
}

impl CycleReport {
    pub fn total_notified(&self) -> usize {
        self.followups.notified
            + self.new_tickets.notified
            + self.closed_tickets.notified
            + self.validations.notified
    }
}

/// Polls GLPI and turns every new row with a requester phone into a notification.
///
/// Nothing is remembered between cycles. If the lookback window is longer than the sleep,
/// a row can match twice and will be notified twice.
pub struct TicketPoller {
    monitor: TicketMonitor,
    notifier: Arc<dyn NotificationSender>,
    formatter: MessageFormatter,
    lookback_minutes: i64,
    poll_interval: Duration,
    db_host: String,
}

impl TicketPoller {
    pub fn new(
        monitor: TicketMonitor,
        notifier: Arc<dyn NotificationSender>,
        formatter: MessageFormatter,
        lookback_minutes: i64,
        poll_interval: Duration,
        db_host: impl Into<String>,
    ) -> Self {
        Self {
            monitor,
            notifier,
            formatter,
            lookback_minutes,
            poll_interval,
            db_host: db_host.into(),
        }
    }

    pub fn from_config(
        config: &AppConfig,
        repo: Arc<dyn TicketRepository>,
        notifier: Arc<dyn NotificationSender>,
    ) -> Self {
        Self::new(
            TicketMonitor::new(repo, config.timezone),
            notifier,
            MessageFormatter::new(&config.glpi_url),
            config.lookback_minutes,
            config.poll_interval,
            config.database.host.clone(),
        )
    }

    /// Cycle, sleep, repeat. Never returns.
    pub async fn run(&self) {
        loop {
            self.run_cycle().await;
            sleep(self.poll_interval).await;
        }
    }

    /// One pass over follow-ups, new tickets, closed tickets, then pending validations.
    pub async fn run_cycle(&self) -> CycleReport {
        info!("Querying GLPI database at {}", self.db_host);

        let report = CycleReport {
            followups: self.notify_followups().await,
            new_tickets: self.notify_new_tickets().await,
            closed_tickets: self.notify_closed_tickets().await,
            validations: self.notify_validations().await,
        };

        info!(
            "Cycle finished => follow-ups {}/{}, new tickets {}/{}, closed {}/{}, approvals {}/{} (notified/found)",
            report.followups.notified,
            report.followups.found,
            report.new_tickets.notified,
            report.new_tickets.found,
            report.closed_tickets.notified,
            report.closed_tickets.found,
            report.validations.notified,
            report.validations.found,
        );
        report
    }

    async fn notify_followups(&self) -> CategoryReport {
        let followups = self.monitor.get_new_followups(self.lookback_minutes).await;
        if followups.is_empty() {
            info!("No new follow-ups found.");
            return CategoryReport::default();
        }

        info!("Found {} new follow-ups.", followups.len());
        let mut report = CategoryReport { found: followups.len(), notified: 0 };
        for f in &followups {
            info!(
                "Follow-up id={}, ticket='{}', author={}, date={}",
                f.id,
                f.ticket_title,
                f.author_name.as_deref().unwrap_or(""),
                format_optional(f.date_creation)
            );
            if let Some(phone) = f.contacts.requester_phone() {
                self.dispatch(self.formatter.new_followup(f), phone).await;
                report.notified += 1;
            }
        }
        report
    }

    async fn notify_new_tickets(&self) -> CategoryReport {
        let tickets = self.monitor.get_new_tickets(self.lookback_minutes).await;
        if tickets.is_empty() {
            info!("No new tickets found.");
            return CategoryReport::default();
        }

        info!("Found {} new tickets.", tickets.len());
        let mut report = CategoryReport { found: tickets.len(), notified: 0 };
        for t in &tickets {
            info!(
                "Ticket id={}, title='{}', status={}, requester={}, date={}",
                t.id,
                t.name,
                t.status,
                t.contacts.requester_name.as_deref().unwrap_or(""),
                format_optional(t.date_creation)
            );
            if let Some(phone) = t.contacts.requester_phone() {
                self.dispatch(self.formatter.new_ticket(t), phone).await;
                report.notified += 1;
            }
        }
        report
    }

    async fn notify_closed_tickets(&self) -> CategoryReport {
        let tickets = self.monitor.get_close_tickets(self.lookback_minutes).await;
        if tickets.is_empty() {
            info!("No closed tickets found.");
            return CategoryReport::default();
        }

        info!("Found {} closed tickets.", tickets.len());
        let mut report = CategoryReport { found: tickets.len(), notified: 0 };
        for t in &tickets {
            info!(
                "Ticket id={}, title='{}', requester={}, closed at={}",
                t.id,
                t.name,
                t.contacts.requester_name.as_deref().unwrap_or(""),
                format_optional(t.date_mod)
            );
            if let Some(phone) = t.contacts.requester_phone() {
                self.dispatch(self.formatter.closed_ticket(t), phone).await;
                report.notified += 1;
            }
        }
        report
    }

    async fn notify_validations(&self) -> CategoryReport {
        let validations = self.monitor.get_new_validations(self.lookback_minutes).await;
        if validations.is_empty() {
            info!("No new approval requests found.");
            return CategoryReport::default();
        }

        info!("Found {} new approval requests.", validations.len());
        let mut report = CategoryReport { found: validations.len(), notified: 0 };
        for v in &validations {
            info!(
                "Ticket id={}, title='{}', requester={}, validator={}, date={}",
                v.id,
                v.name,
                v.requester_name.as_deref().unwrap_or(""),
                v.validator_name.as_deref().unwrap_or(""),
                format_optional(v.date_mod)
            );
            if let Some(phone) = v.requester_phone() {
                self.dispatch(self.formatter.pending_validation(v), phone).await;
                report.notified += 1;
            }
        }
        report
    }

    async fn dispatch(&self, message: String, phone: &str) {
        let notification = NotificationMessage::new(message, phone);
        self.notifier.send(&notification).await;
    }
}

/// Spawns the polling loop as a background task.
pub fn spawn_ticket_poll_task(poller: TicketPoller) -> JoinHandle<()> {
    tokio::spawn(async move {
        poller.run().await;
    })
}
