pub mod ticket_poll;

pub use ticket_poll::{spawn_ticket_poll_task, CategoryReport, CycleReport, TicketPoller};
