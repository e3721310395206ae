//! Command-line entry points.

use crate::app::App;
use crate::config::Config;
use crate::leads::pipeline::{DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MIN_RADIUS_KM};
use crate::leads::{LeadRecord, LeadsError, PlaceQuery};
use crate::router::handle;
use crate::spreadsheets::{leads_filename, leads_to_xlsx};
use crate::templates;
use astra::Server;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "pvt_leads_extractor")]
#[command(about = "Extract phone-bearing business leads from OpenStreetMap into a spreadsheet")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the search page and spreadsheet downloads
    Serve {
        /// Listen address
        #[arg(long, env = "LEADS_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        /// Maximum worker threads
        #[arg(long, default_value = "8")]
        workers: usize,
    },

    /// Run one extraction and write the spreadsheet to disk
    Extract {
        /// Region name to geocode, e.g. "Viman Nagar"
        #[arg(short, long)]
        region: String,

        /// Search radius in km
        #[arg(
            long,
            default_value_t = DEFAULT_RADIUS_KM,
            value_parser = clap::value_parser!(u32).range(MIN_RADIUS_KM as i64..=MAX_RADIUS_KM as i64)
        )]
        radius: u32,

        /// Directory to write `<region>_pvt_leads.xlsx` into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

pub fn run() -> Result<(), LeadsError> {
    let cli = Cli::parse();
    let app = App::from_config(&cli.config)?;

    match cli.command {
        Commands::Serve { bind, workers } => serve(app, bind, workers),
        Commands::Extract {
            region,
            radius,
            out_dir,
        } => extract(&app, &region, radius, out_dir),
    }
}

fn serve(app: App, bind: SocketAddr, workers: usize) -> Result<(), LeadsError> {
    info!("Starting server at http://{bind}");

    let server = Server::bind(&bind).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(error = %err, "request failed");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        return Err(LeadsError::Network(e.to_string()));
    }

    info!("Server shut down cleanly.");
    Ok(())
}

fn extract(app: &App, region: &str, radius: u32, out_dir: PathBuf) -> Result<(), LeadsError> {
    let query = PlaceQuery::new(region, radius)?;

    let leads = match app.extract(&query) {
        Ok(leads) => leads,
        Err(e) if e.is_warning() => {
            warn!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let path = write_export(&out_dir, &query.region, &leads)?;

    info!(
        "Found {} companies with phone numbers in {}, wrote {}",
        leads.len(),
        query.region,
        path.display()
    );
    Ok(())
}

/// Writes `<out_dir>/<region>_pvt_leads.xlsx` and returns its path.
pub fn write_export(
    out_dir: &Path,
    region: &str,
    leads: &[LeadRecord],
) -> Result<PathBuf, LeadsError> {
    let buffer = leads_to_xlsx(leads)?;
    let path = out_dir.join(leads_filename(region));

    std::fs::write(&path, buffer).map_err(|source| LeadsError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
