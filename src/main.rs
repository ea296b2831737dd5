use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use dialect_registry::config::{SETTINGS_DIALECT_REGISTRY, log_path, settings_path, sqlite_path};
use dialect_registry::logging::{self, DEFAULT_LOG_LEVEL};
use dialect_registry::{ConfigStore, DialectCatalog, JsonFileStore, SqliteStore};

#[derive(Parser)]
#[command(name = "dialect-registry")]
#[command(version, about = "Registry of COBOL dialect plugins")]
struct Cli {
    /// Settings backend
    #[arg(long, value_enum, default_value_t = StoreKind::Json)]
    store: StoreKind,

    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Settings key holding the dialect list
    #[arg(long, default_value = SETTINGS_DIALECT_REGISTRY)]
    key: String,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum StoreKind {
    Json,
    Sqlite,
}

#[derive(Subcommand)]
enum Command {
    /// List registered dialects
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one dialect as JSON
    Show { name: String },
    /// Register a dialect, replacing any dialect with the same name
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        path: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        extension_id: String,
    },
    /// Print the grammar path of every registered dialect
    Paths,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&log_path(), &cli.log_level);

    match cli.store {
        StoreKind::Json => {
            let path = cli.settings.unwrap_or_else(settings_path);
            debug!("Using JSON settings at {:?}", path);
            let store = JsonFileStore::new(path);
            run(DialectCatalog::with_key(Arc::new(store), cli.key), cli.command)
        }
        StoreKind::Sqlite => {
            let path = cli.settings.unwrap_or_else(sqlite_path);
            let store = SqliteStore::new(&path)
                .with_context(|| format!("failed to open settings database {}", path.display()))?;
            run(DialectCatalog::with_key(Arc::new(store), cli.key), cli.command)
        }
    }
}

fn run<S: ConfigStore>(catalog: DialectCatalog<S>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { json } => {
            let dialects = catalog
                .list()
                .with_context(|| format!("failed to read {}", catalog.key()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dialects)?);
            } else {
                for dialect in dialects {
                    println!("{dialect}");
                }
            }
        }
        Command::Show { name } => {
            let dialect = catalog
                .find(&name)
                .with_context(|| format!("failed to read {}", catalog.key()))?;
            let Some(dialect) = dialect else {
                bail!("dialect {name} is not registered");
            };
            println!("{}", serde_json::to_string_pretty(&dialect)?);
        }
        Command::Register {
            name,
            path,
            description,
            extension_id,
        } => {
            catalog
                .register(&name, &path, &description, &extension_id)
                .with_context(|| format!("failed to register dialect {name}"))?;
        }
        Command::Paths => {
            let paths = catalog
                .dialect_paths()
                .with_context(|| format!("failed to read {}", catalog.key()))?;
            for path in paths {
                println!("{path}");
            }
        }
    }
    Ok(())
}
