pub mod home;
pub mod results;

pub use home::{home_page, SearchForm};
pub use results::{leads_failed, leads_found, Download};
