use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod cli;
mod config;
mod errors;
mod leads;
mod regions;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let default_filter = if cli::is_verbose() {
        "pvt_leads_extractor=debug"
    } else {
        "pvt_leads_extractor=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = cli::run() {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
