mod browse;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use claimdesk::config::ClientConfig;
use claimdesk::search::client::{HttpQueryService, QueryService};
use claimdesk::state::{run_search, SearchSession};
use claimdesk::upload::client::{HttpUploadClient, UploadService};
use claimdesk::view::render_json;

#[derive(Debug, Parser)]
#[command(
    name = "claimdesk",
    version,
    about = "Search, inspect and upload community claim documents"
)]
struct Cli {
    /// TOML config file (defaults to ./claimdesk.toml when present)
    #[arg(long, global = true, env = "CLAIMDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Service root URL, overriding the config file and environment
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List a community's documents grouped by status
    Search {
        /// Community code
        code: String,
        /// Only show this status group
        #[arg(long, conflicts_with = "id")]
        status: Option<String>,
        /// Only show the document with this id
        #[arg(long)]
        id: Option<String>,
    },
    /// Print one document's full JSON
    Show {
        /// Document id
        id: String,
    },
    /// Upload a claim document for processing
    Upload {
        /// Path to the file (usually a PDF)
        file: PathBuf,
    },
    /// Print claim totals across all communities
    Summary,
    /// List a community's occupations and the schemes that apply
    Occupations {
        /// Community code
        code: String,
    },
    /// List claims that carry map coordinates
    Map {
        /// Only show claims with this document status
        #[arg(long)]
        status: Option<String>,
    },
    /// Interactive session: search, filter and open documents
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.base_url.as_deref())?;
    tracing::debug!(base_url = %config.base_url, "Using service");
    let service = HttpQueryService::from_config(&config);

    match cli.command {
        Command::Search { code, status, id } => {
            let mut session = SearchSession::new();
            run_search(&service, &mut session, &code)
                .await
                .with_context(|| format!("Search for community '{}' failed", code.trim()))?;

            if let Some(label) = status {
                session.select_status(&label);
            }
            if let Some(raw) = id {
                let id = claimdesk::state::parse_document_id(&raw)?;
                if let Some(notice) = session.filter_by_id(id).notice() {
                    eprintln!("{notice}");
                }
            }
            print!("{}", render::listing(&session));
        }
        Command::Show { id } => {
            let id = claimdesk::state::parse_document_id(&id)?;
            let document = service
                .fetch_document(id)
                .await
                .with_context(|| format!("Failed to fetch document {id}"))?;
            println!("{}", render_json(&document));
        }
        Command::Upload { file } => upload(&config, &file).await?,
        Command::Summary => {
            let summary = service
                .fetch_summary()
                .await
                .context("Failed to fetch claim summary")?;
            print!("{}", render::summary(&summary));
        }
        Command::Occupations { code } => {
            let code = claimdesk::state::validate_community_code(&code)?;
            let occupations = service
                .fetch_occupations(&code)
                .await
                .with_context(|| format!("Failed to fetch occupations for '{code}'"))?;
            print!("{}", render::occupations(&occupations));
        }
        Command::Map { status } => {
            let mut points = service
                .fetch_map_points()
                .await
                .context("Failed to fetch map data")?;
            if let Some(status) = status {
                points.retain(|p| p.status.as_deref() == Some(status.as_str()));
            }
            print!("{}", render::map_points(&points));
        }
        Command::Browse => browse::run(&service).await?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "claimdesk=info,claimdesk_cli=info",
        1 => "claimdesk=debug,claimdesk_cli=debug",
        _ => "claimdesk=trace,claimdesk_cli=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, base_url: Option<&str>) -> Result<ClientConfig> {
    match base_url {
        Some(url) => ClientConfig::new(url).context("Invalid --base-url"),
        None => ClientConfig::load(path).context("Failed to load configuration"),
    }
}

async fn upload(config: &ClientConfig, path: &Path) -> Result<()> {
    let (file_name, content) = read_upload_file(path).await?;
    eprintln!("Uploading...");

    let client = HttpUploadClient::from_config(config);
    match client.upload(&file_name, content).await {
        Ok(receipt) => {
            println!("{}", receipt.message);
            println!("{}", render_json(&receipt.data));
            Ok(())
        }
        Err(e) => {
            tracing::error!("{e}");
            anyhow::bail!("{}", e.user_message())
        }
    }
}

/// Read the file to upload, returning the name the server should see.
async fn read_upload_file(path: &Path) -> Result<(String, Vec<u8>)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("{}", claimdesk::error::InputError::NoFileSelected))?;
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok((file_name, content))
}
