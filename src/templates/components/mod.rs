use maud::{html, Markup};

pub mod error;
pub mod leads_table;

pub use error::html_error_response;
pub use leads_table::leads_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Warning,
    Error,
}

impl BannerKind {
    fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "banner success",
            BannerKind::Warning => "banner warning",
            BannerKind::Error => "banner error",
        }
    }
}

pub fn banner(kind: BannerKind, message: &str) -> Markup {
    html! {
        div class=(kind.class()) role="status" { (message) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
