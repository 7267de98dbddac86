// src/repositories/mod.rs

pub mod mysql;

pub use glpiwatch_common::traits::repository_traits::TicketRepository;
pub use mysql::MySqlTicketRepository;
