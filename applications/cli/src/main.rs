/// Tilawa - Quran reader and verse-by-verse recitation player
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tilawa_cli::{
    commands::{self, recite::ReciteOptions},
    DryRunBackend, TilawaConfig,
};
use tilawa_client::TilawaClient;
use tilawa_core::{AudioQuality, Language};
use tilawa_storage::{settings, JsonFileStore, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tilawa")]
#[command(about = "Read the Quran and follow its recitation verse by verse", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./tilawa.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data file holding bookmarks, settings and the reading position
    #[arg(long, global = true, env = "TILAWA_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Translation and interface language for this run (ar, en, bn, hi)
    #[arg(short, long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List surahs
    Surahs {
        /// Filter by name, translation or number
        #[arg(short, long)]
        search: Option<String>,
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Read a surah
    Read {
        /// Surah number (1-114)
        surah: u16,
        /// Only verses whose text or translation contains this
        #[arg(short, long)]
        search: Option<String>,
        /// Only this verse
        #[arg(short, long)]
        verse: Option<u16>,
    },
    /// Recite a surah verse by verse
    Recite {
        /// Surah number (1-114)
        surah: u16,
        /// Verse to start from
        #[arg(short, long, conflicts_with = "resume")]
        verse: Option<u16>,
        /// Start from the saved reading position
        #[arg(long)]
        resume: bool,
        /// Repeat each verse
        #[arg(long)]
        repeat: bool,
    },
    /// Show today's prayer times
    PrayerTimes {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Manage bookmarks
    #[command(subcommand)]
    Bookmarks(BookmarkCommands),
    /// Show where reading stopped last time
    Resume,
    /// Show or change preferences
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Subcommand)]
enum BookmarkCommands {
    /// List bookmarks
    List {
        /// Filter by surah name, verse text or "surah N"
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Bookmark a verse
    Add {
        surah: u16,
        verse: u16,
        /// Personal note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete a bookmark
    Remove { id: String },
    /// Replace a bookmark's note (empty text clears it)
    Note { id: String, text: String },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Print all preferences
    Show,
    /// Set the translation language (ar, en, bn, hi)
    Language { code: Language },
    /// Set the theme (light, dark, system)
    Theme { name: Theme },
    /// Set the recitation quality (low, medium, high)
    Quality { level: AudioQuality },
    /// Clear bookmarks and history, keeping language and theme
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stdout is reserved for command output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilawa=info,tilawa_cli=info,tilawa_playback=info,tilawa_client=info,tilawa_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config =
        TilawaConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(data_file) = cli.data_file {
        config.storage.data_file = data_file;
    }
    config.validate().context("Invalid configuration")?;

    let store = JsonFileStore::open(&config.storage.data_file).with_context(|| {
        format!(
            "Failed to open data file {}",
            config.storage.data_file.display()
        )
    })?;
    tracing::debug!(path = %config.storage.data_file.display(), "Data file opened");

    let language = match cli.lang {
        Some(language) => language,
        None => settings::language(&store)?,
    };
    let quality = settings::load(&store)?.audio_quality;
    let client = TilawaClient::new(config.client_config(quality))
        .context("Failed to build content client")?;

    let mut out = std::io::stdout();

    match cli.command {
        Commands::Surahs { search, page } => {
            commands::surahs::run(&client, language, search.as_deref(), page, &mut out).await?;
        }
        Commands::Read {
            surah,
            search,
            verse,
        } => {
            commands::read::run(
                &client,
                &store,
                language,
                surah,
                search.as_deref(),
                verse,
                &mut out,
            )
            .await?;
        }
        Commands::Recite {
            surah,
            verse,
            resume,
            repeat,
        } => {
            let options = ReciteOptions {
                surah,
                verse,
                resume,
                repeat,
            };
            let (clip, tick) = (config.playback.clip(), config.playback.tick());
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let interrupt = async {
                let _ = tokio::signal::ctrl_c().await;
            };

            commands::recite::run(
                &client,
                &store,
                language,
                &options,
                |sink| DryRunBackend::new(sink, clip, tick),
                input,
                interrupt,
                &mut out,
            )
            .await?;
        }
        Commands::PrayerTimes { lat, lon } => {
            let now = chrono::Local::now().time();
            commands::prayer::run(&client, language, lat, lon, now, &mut out).await?;
        }
        Commands::Bookmarks(command) => match command {
            BookmarkCommands::List { search } => {
                commands::bookmarks::list(&store, language, search.as_deref(), &mut out)?;
            }
            BookmarkCommands::Add { surah, verse, note } => {
                commands::bookmarks::add(&client, &store, language, surah, verse, note, &mut out)
                    .await?;
            }
            BookmarkCommands::Remove { id } => {
                commands::bookmarks::remove(&store, language, &id, &mut out)?;
            }
            BookmarkCommands::Note { id, text } => {
                commands::bookmarks::note(&store, language, &id, &text, &mut out)?;
            }
        },
        Commands::Resume => {
            commands::bookmarks::resume(&store, language, &mut out)?;
        }
        Commands::Settings(command) => match command {
            SettingsCommands::Show => commands::settings::show(&store, &mut out)?,
            SettingsCommands::Language { code } => {
                commands::settings::set_language(&store, code, &mut out)?;
            }
            SettingsCommands::Theme { name } => {
                commands::settings::set_theme(&store, name, &mut out)?;
            }
            SettingsCommands::Quality { level } => {
                commands::settings::set_quality(&store, level, &mut out)?;
            }
            SettingsCommands::Clear => commands::settings::clear(&store, language, &mut out)?,
        },
    }

    Ok(())
}
