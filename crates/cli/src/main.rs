use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

use vgmdb_lookup_core::config::{config_path, load_config, load_config_from, save_config, AppConfig};
use vgmdb_lookup_core::info::AlbumInfo;
use vgmdb_lookup_core::lookup::vgmdb::VgmdbSource;

type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "vgmdb-lookup")]
#[command(about = "Look up video game music albums on VGMdb")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search albums by title
    Search {
        /// Album title (words are joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,

        /// Various-artists release likely
        #[arg(long)]
        va: bool,
    },

    /// Fetch one album by id (`79` or `vgmdb:79`)
    Album {
        #[arg(required = true)]
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Initialize default config file
    Init,
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Key (dot-separated path, e.g. vgmdb.lang-priority)
        key: String,
        /// Value
        value: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Search { query, va } => run_search(&cli, &query.join(" "), *va),
        Commands::Album { id } => run_album(&cli, id),
        Commands::Config { action } => run_config(&cli, action),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(path) = &cli.config {
        tracing::debug!("Using config file {}", path.display());
    }
    match &cli.config {
        Some(path) if path.exists() => Ok(load_config_from(path)?),
        Some(_) => Ok(AppConfig::default()),
        None => Ok(load_config()),
    }
}

fn resolve_config_path(cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(config_path().ok_or("Could not determine config directory")?),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{msg} {spinner} [{elapsed_precise}]") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

fn run_search(cli: &Cli, query: &str, va: bool) -> CliResult {
    let cfg = resolve_config(cli)?;
    let source = VgmdbSource::new(&cfg.vgmdb)?;

    let pb = (!cli.json).then(|| spinner("Searching VGMdb"));
    let albums = source.search(query, va);
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&albums)?);
    } else if albums.is_empty() {
        println!("No results found");
    } else {
        for (i, album) in albums.iter().enumerate() {
            println!(
                "Result {}: [{}] {} - {} ({} tracks, {}, source distance {:.2})",
                i + 1,
                album.album_id,
                album.artist,
                album.album,
                album.tracks.len(),
                album.catalognum.as_deref().unwrap_or("no catalog"),
                source.album_distance(album).total(),
            );
        }
    }
    Ok(())
}

fn run_album(cli: &Cli, id: &str) -> CliResult {
    let cfg = resolve_config(cli)?;
    let source = VgmdbSource::new(&cfg.vgmdb)?;

    let Some(album) = source.album_for_id(id)? else {
        if cli.json {
            println!("null");
        } else {
            println!("No album found");
        }
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&album)?);
    } else {
        print_album(&album);
    }
    Ok(())
}

fn print_album(album: &AlbumInfo) {
    println!("Album: {}", album.album);
    println!("Artist: {}", album.artist);
    if let Some(cat) = &album.catalognum {
        println!("Catalog: {}", cat);
    }
    if let Some(year) = album.year {
        match (album.month, album.day) {
            (Some(m), Some(d)) => println!("Released: {}-{:02}-{:02}", year, m, d),
            (Some(m), None) => println!("Released: {}-{:02}", year, m),
            _ => println!("Released: {}", year),
        }
    }
    if let Some(label) = &album.label {
        println!("Label: {}", label);
    }
    if let Some(media) = &album.media {
        println!("Media: {}", media);
    }
    if let Some(url) = &album.data_url {
        println!("URL: {}", url);
    }
    for t in &album.tracks {
        let secs = t.length.round() as u64;
        println!(
            "  {}-{:02} {:>3}. {} [{}:{:02}]",
            t.medium,
            t.medium_index,
            t.index,
            t.title,
            secs / 60,
            secs % 60
        );
    }
}

fn run_config(cli: &Cli, action: &ConfigAction) -> CliResult {
    match action {
        ConfigAction::Init => {
            let path = resolve_config_path(cli)?;
            save_config(&AppConfig::default(), &path)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Show => {
            let cfg = resolve_config(cli)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else {
                println!("{}", cfg.to_toml()?);
            }
        }
        ConfigAction::Set { key, value } => {
            let path = resolve_config_path(cli)?;
            let mut cfg = read_or_default(&path)?;
            cfg.set(key, value)?;
            save_config(&cfg, &path)?;
            if !cli.json {
                println!("Updated {}", key);
            }
        }
    }
    Ok(())
}

fn read_or_default(path: &Path) -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    if path.exists() {
        Ok(load_config_from(path)?)
    } else {
        Ok(AppConfig::default())
    }
}
