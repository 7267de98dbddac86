// File: glpiwatch-common/src/models/mod.rs
pub mod ticket;
pub mod followup;
pub mod validation;
pub mod notification;

pub use ticket::{ClosedTicket, Contacts, Ticket, TicketStatus, TicketUserRole};
pub use followup::Followup;
pub use validation::{PendingValidation, ValidationStatus};
pub use notification::NotificationMessage;
