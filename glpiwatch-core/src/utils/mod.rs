pub mod html;
pub mod time;

pub use html::normalize_html_text;
