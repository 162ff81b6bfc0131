use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use genius_songs::config::{DEFAULT_BASE_URL, TOKEN_VAR};
use genius_songs::output_record::OutputRecord;
use genius_songs::paginator::DEFAULT_PAGE_LIMIT;
use genius_songs::{Config, FetchOutcome, Genius};

use log::{error, info};

#[derive(Parser)]
#[command(name = "genius-songs")]
#[command(version, about = "List every song Genius credits to an artist", long_about = None)]
struct Cli {
    /// Artist to look up, prompted for when omitted
    artist: Option<String>,

    /// Genius API access token
    #[arg(long, env = TOKEN_VAR, hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "GENIUS_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Stop once the listing points at this page
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    page_limit: i64,

    #[arg(long)]
    per_page: Option<u32>,

    /// Write songs as CSV instead of one title per line
    #[arg(long)]
    csv: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Pick up ACCESS_TOKEN from a .env file before clap reads the environment
    dotenvy::dotenv().ok();

    // Initialize the logger
    pretty_env_logger::formatted_builder()
        .filter(None, log::LevelFilter::Info)
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_default())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let mut builder = Config::builder()
        .base_url(cli.base_url)
        .timeout(Duration::from_secs(cli.timeout))
        .page_limit(cli.page_limit);
    if let Some(token) = cli.token {
        builder = builder.token(token);
    }
    if let Some(per_page) = cli.per_page {
        builder = builder.per_page(per_page);
    }
    let config = builder.build()?;

    let name = match cli.artist {
        Some(name) => name,
        None => prompt("Enter artist's name: ")?,
    };

    let genius = Genius::new(&config)?;

    let Some(artist) = genius.find_artist(&name).await? else {
        println!("Genius could not find artist: {name}");
        return Ok(ExitCode::SUCCESS);
    };

    info!("Retrieving song list from Genius. Please wait...");
    let FetchOutcome { songs, error } = genius.songs(&artist.id).await;

    match &error {
        Some(reason) if !reason.is_fatal() => {
            eprintln!("Song list truncated");
            eprintln!("Reason: {reason}");
        }
        Some(reason) if songs.is_empty() => {
            eprintln!("Unable to retrieve song list");
            eprintln!("Reason: {reason}");
            return Ok(ExitCode::FAILURE);
        }
        Some(reason) => {
            eprintln!("Unable to retrieve entire song list");
            eprintln!("Reason: {reason}");
        }
        None => {}
    }

    if cli.csv {
        let mut writer = csv::Writer::from_writer(io::stdout());
        for title in &songs {
            writer.serialize(OutputRecord { primary_artist: &artist.name, title })?;
        }
        writer.flush()?;
    } else {
        let mut out = io::stdout().lock();
        for title in &songs {
            writeln!(out, "{title}")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Ask for a line on stdin
fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
