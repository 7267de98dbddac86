pub mod repository_traits;
pub mod notification_traits;

pub use repository_traits::TicketRepository;
pub use notification_traits::NotificationSender;
