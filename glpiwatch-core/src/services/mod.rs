// glpiwatch-core/src/services/mod.rs

pub mod message_service;
pub mod notification_service;
pub mod ticket_monitor;

pub use message_service::MessageFormatter;
pub use notification_service::GatewayNotifier;
pub use ticket_monitor::TicketMonitor;
