// src/lib.rs

pub mod config;
pub mod db;
pub mod repositories;
pub mod http;
pub mod services;
pub mod tasks;
pub mod utils;

pub use config::AppConfig;
pub use db::Database;
pub use glpiwatch_common::error::Error;
pub use http::{DefaultHttpClient, HttpClient, HttpResponse};
