use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use glpiwatch_common::traits::{NotificationSender, TicketRepository};
use glpiwatch_core::repositories::MySqlTicketRepository;
use glpiwatch_core::services::GatewayNotifier;
use glpiwatch_core::tasks::{spawn_ticket_poll_task, TicketPoller};
use glpiwatch_core::{AppConfig, Database};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let sub = fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(sub)
        .expect("Failed to set global subscriber");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("GLPI ticket monitor starting");

    let config = AppConfig::from_env().context("loading configuration")?;
    info!(
        "Polling {}:{}/{} every {:?} with a {} minute lookback ({})",
        config.database.host,
        config.database.port,
        config.database.name,
        config.poll_interval,
        config.lookback_minutes,
        config.timezone,
    );

    let db = Database::new(&config.database);
    let repo: Arc<dyn TicketRepository> = Arc::new(MySqlTicketRepository::new(db));

    let gateway = GatewayNotifier::with_timeout(&config.notification_api_url, config.notification_timeout)
        .context("building notification gateway client")?;
    info!("Notifications go to {}", gateway.endpoint());
    let notifier: Arc<dyn NotificationSender> = Arc::new(gateway);

    let poller = TicketPoller::from_config(&config, repo, notifier);
    let handle = spawn_ticket_poll_task(poller);

    tokio::select! {
        res = handle => {
            if let Err(e) = res {
                error!("Polling task ended unexpectedly: {:?}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl-C received, shutting down.");
        }
    }

    info!("Main finished. Goodbye!");
    Ok(())
}
