use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use spotify_client::client::LoginRequest;
use spotify_client::history::HistoryDetail;
use spotify_client::{ClientConfig, FileSessionStore, Session, SpotifyClient, logging};

#[derive(Parser)]
#[command(name = "spotify-client", version, about = "Command-line client for the streaming API")]
struct Cli {
    /// Server origin, overrides the configured one
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the session
    Login {
        email: String,
        #[arg(long, env = "SPOTIFY_CLIENT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session on the server and forget it locally
    Logout,
    /// Show what is playing right now
    NowPlaying,
    Play,
    Pause,
    Next,
    Previous,
    /// Set the volume in percent (0-100)
    Volume { percent: u8 },
    /// Free-text search; words like "albums" or "artist" narrow the types
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Recently played albums and playlists
    History {
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Fail if any entry could not be resolved
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Serialize)]
struct HistoryLine<'a> {
    uri: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    let mut config = ClientConfig::load().context("Failed to load configuration")?;
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    tracing::info!(api_base = %config.api_base, "=== spotify-client starting ===");

    let store = FileSessionStore::new(config.session_file.clone());
    let client = SpotifyClient::new(&config, Arc::new(store.clone())).context("Failed to build API client")?;

    match cli.command {
        Command::Login { email, password } => {
            let response = client.login(&LoginRequest::new(email, password)).await?;
            let Some(session) = Session::from_login(&response) else {
                bail!("Login failed ({}): {}", response.status, response.body);
            };
            store
                .save(&session)
                .with_context(|| format!("Failed to write session to {}", store.path().display()))?;
            print_json(&response.body)?;
        }
        Command::Logout => {
            let response = client.logout().await;
            store.clear().context("Failed to remove stored session")?;
            let response = response?;
            print_json(&response.body)?;
        }
        Command::NowPlaying => print_json(&client.currently_playing().await?)?,
        Command::Play => report(client.play().await?)?,
        Command::Pause => report(client.pause().await?)?,
        Command::Next => report(client.next_track().await?)?,
        Command::Previous => report(client.previous_track().await?)?,
        Command::Volume { percent } => report(client.set_volume(percent).await?)?,
        Command::Search { query } => print_json(&client.search(&query.join(" ")).await?)?,
        Command::History { limit, strict } => {
            let batch = client.recently_played_lists(limit).await?;
            if strict {
                let details = batch.into_complete()?;
                let lines: Vec<_> = details
                    .iter()
                    .map(|detail| (kind_name(detail), detail.name()))
                    .collect();
                print_json(&lines)?;
            } else {
                let lines: Vec<_> = batch
                    .entries()
                    .iter()
                    .map(|entry| HistoryLine {
                        uri: &entry.uri,
                        kind: entry.detail().map(kind_name),
                        name: entry.detail().map(HistoryDetail::name),
                        error: entry.outcome.as_ref().err().map(ToString::to_string),
                    })
                    .collect();
                print_json(&lines)?;
            }
        }
    }

    Ok(())
}

fn kind_name(detail: &HistoryDetail) -> &'static str {
    match detail {
        HistoryDetail::Album(_) => "album",
        HistoryDetail::Playlist(_) => "playlist",
    }
}

fn report(ok: bool) -> Result<()> {
    if !ok {
        bail!("The server did not accept the request");
    }
    print_json(&serde_json::json!({ "ok": true }))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
