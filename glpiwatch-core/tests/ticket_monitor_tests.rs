// File: glpiwatch-core/tests/ticket_monitor_tests.rs

mod test_utils;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{NaiveDateTime, Utc};
use tokio::time::timeout;

use glpiwatch_common::traits::TicketRepository;
use glpiwatch_core::repositories::MySqlTicketRepository;
use glpiwatch_core::services::TicketMonitor;
use glpiwatch_core::utils::time::lookback_threshold;
use glpiwatch_core::Error;

use test_utils::helpers::{sample_ticket, unreachable_database, MockTicketRepo};

#[tokio::test]
async fn unreachable_database_gives_empty_results() {
    let repo: Arc<dyn TicketRepository> =
        Arc::new(MySqlTicketRepository::new(unreachable_database()));
    let monitor = TicketMonitor::new(repo, chrono_tz::America::Sao_Paulo);

    let all = timeout(Duration::from_secs(30), async {
        (
            monitor.get_new_followups(3).await,
            monitor.get_new_tickets(3).await,
            monitor.get_close_tickets(3).await,
            monitor.get_new_validations(3).await,
        )
    })
    .await
    .expect("monitor should give up on a refused connection");

    assert!(all.0.is_empty());
    assert!(all.1.is_empty());
    assert!(all.2.is_empty());
    assert!(all.3.is_empty());
}

#[tokio::test]
async fn fetch_all_reports_connection_errors() {
    let db = unreachable_database();
    let res = timeout(
        Duration::from_secs(30),
        db.fetch_all(sqlx::query("SELECT 1")),
    )
    .await
    .expect("connect should fail quickly");
    assert!(matches!(res, Err(Error::Database(_))));
}

#[tokio::test]
async fn repository_error_is_swallowed() {
    let mut repo = MockTicketRepo::new();
    repo.expect_new_tickets_since()
        .times(1)
        .returning(|_| Err(Error::Config("gone".into())));

    let monitor = TicketMonitor::new(Arc::new(repo), chrono_tz::America::Sao_Paulo);
    assert!(monitor.get_new_tickets(3).await.is_empty());
}

#[tokio::test]
async fn threshold_is_lookback_in_glpi_time_zone() {
    let seen: Arc<Mutex<Option<NaiveDateTime>>> = Arc::new(Mutex::new(None));
    let captured = seen.clone();

    let mut repo = MockTicketRepo::new();
    repo.expect_new_tickets_since()
        .times(1)
        .returning(move |since| {
            *captured.lock().unwrap() = Some(since);
            Ok(vec![sample_ticket(1, "Rede", Some("+5511999999999"))])
        });

    let monitor = TicketMonitor::new(Arc::new(repo), chrono_tz::America::Sao_Paulo);
    let tickets = monitor.get_new_tickets(3).await;
    assert_eq!(tickets.len(), 1);

    let expected = lookback_threshold(Utc::now(), chrono_tz::America::Sao_Paulo, 3);
    let since = seen.lock().unwrap().expect("repository was queried");
    let drift = (expected - since).num_seconds().abs();
    assert!(drift <= 5, "threshold {since} too far from {expected}");
}

#[tokio::test]
async fn rows_are_passed_through_untouched() {
    let mut repo = MockTicketRepo::new();
    let rows = vec![
        sample_ticket(2, "Segundo", Some("+5511999999999")),
        sample_ticket(1, "Primeiro", None),
    ];
    let returned = rows.clone();
    repo.expect_new_tickets_since()
        .returning(move |_| Ok(returned.clone()));

    let monitor = TicketMonitor::new(Arc::new(repo), chrono_tz::America::Sao_Paulo);
    assert_eq!(monitor.get_new_tickets(3).await, rows);
}
