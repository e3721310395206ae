pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{banner, card, html_error_response, leads_table, BannerKind};
pub use layouts::desktop::desktop_layout;
