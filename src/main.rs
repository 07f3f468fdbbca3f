mod commands;
mod gateway;
mod i18n;

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};
use whisk_channels::ConsoleChannel;
use whisk_client::WhiskClient;
use whisk_core::{
    config::{self, shellexpand, Config},
    message::IncomingMessage,
    resolver::NamespaceResolver,
    traits::{ActionService, Channel, PreferenceStore},
};
use whisk_memory::{ActivityLogger, MemoryPreferences, Store};

#[derive(Parser)]
#[command(
    name = "whisk",
    version,
    about = "Chat bot for listing and invoking OpenWhisk actions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot on every enabled channel.
    Start,
    /// Show the effective configuration and check the OpenWhisk connection.
    Status,
    /// Run a single bot command as the console user.
    Ask {
        /// Keep namespace changes in memory only.
        #[arg(long)]
        ephemeral: bool,
        /// The command text, e.g. `openwhisk list actions`.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config, std::io::stderr)?;
    let _guard = init_logging(&cfg)?;

    match cli.command {
        Commands::Start => {
            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
            if cfg.channel.console.enabled {
                let console = ConsoleChannel::new(cfg.channel.console.clone());
                channels.insert("console".to_string(), Arc::new(console));
            }
            if channels.is_empty() {
                anyhow::bail!("No channels enabled. Enable at least one channel in config.toml.");
            }

            let store = Store::new(&cfg.memory).await?;
            let activity = ActivityLogger::new(store.pool().clone());
            let service = build_service(&cfg)?;
            let resolver = build_resolver(&cfg, Arc::new(store), service.clone());

            println!("whisk: type `openwhisk help` for commands, Ctrl-C to quit.");
            let gw = gateway::Gateway::new(
                resolver,
                service,
                channels,
                Some(activity),
                cfg.bot.name.clone(),
                cfg.bot.language.clone(),
            );
            gw.run().await?;
        }
        Commands::Status => {
            println!("whisk status\n");
            println!("Config: {}", cli.config);
            println!(
                "Endpoint: {}",
                if cfg.whisk.endpoint.is_empty() {
                    "not configured".to_string()
                } else {
                    cfg.whisk.base_url()
                }
            );
            println!("Default namespace: {}", cfg.whisk.default_namespace());
            println!(
                "Credential: {}",
                if cfg.whisk.credential().is_some() {
                    "configured"
                } else {
                    "missing"
                }
            );
            println!("Preferences: {}", shellexpand(&cfg.memory.db_path));
            println!();

            let service = build_service(&cfg)?;
            match service.list_namespaces().await {
                Ok(namespaces) => println!("  openwhisk: reachable, {} namespaces", namespaces.len()),
                Err(e) => println!("  openwhisk: {e}"),
            }
            println!(
                "  console: {}",
                if cfg.channel.console.enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );

            match Store::new(&cfg.memory).await {
                Ok(store) => {
                    match store.preference_count().await {
                        Ok(n) => println!("  preferences: {n} users"),
                        Err(e) => println!("  preferences: {e}"),
                    }
                    let console_user = &cfg.channel.console.user_id;
                    let activity = ActivityLogger::new(store.pool().clone());
                    match activity.recent(console_user, 5).await {
                        Ok(recent) if recent.is_empty() => {
                            println!("  recent activity ({console_user}): none")
                        }
                        Ok(recent) => {
                            println!("  recent activity ({console_user}):");
                            for id in recent {
                                println!("    {id}");
                            }
                        }
                        Err(e) => println!("  recent activity: {e}"),
                    }
                }
                Err(e) => println!("  store: {e}"),
            }
        }
        Commands::Ask { ephemeral, message } => {
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: whisk ask <message>");
            }

            let service = build_service(&cfg)?;
            let mut activity = None;
            let store: Arc<dyn PreferenceStore> = if ephemeral {
                Arc::new(MemoryPreferences::new())
            } else {
                let store = Store::new(&cfg.memory).await?;
                activity = Some(ActivityLogger::new(store.pool().clone()));
                Arc::new(store)
            };
            let resolver = build_resolver(&cfg, store, service.clone());

            let gw = gateway::Gateway::new(
                resolver,
                service,
                HashMap::new(),
                activity,
                cfg.bot.name.clone(),
                cfg.bot.language.clone(),
            );
            let console = &cfg.channel.console;
            let mut incoming = IncomingMessage::new("console", &console.user_id, &message.join(" "));
            incoming.sender_name = console.user_name.clone();
            for reply in gw.dispatch(&incoming).await {
                println!("{reply}");
            }
        }
    }

    Ok(())
}

/// Build the OpenWhisk client from `[whisk]`.
fn build_service(cfg: &Config) -> anyhow::Result<Arc<dyn ActionService>> {
    Ok(Arc::new(WhiskClient::from_config(&cfg.whisk)?))
}

/// Build the namespace resolver; the default namespace is fixed here.
fn build_resolver(
    cfg: &Config,
    store: Arc<dyn PreferenceStore>,
    service: Arc<dyn ActionService>,
) -> NamespaceResolver {
    NamespaceResolver::new(cfg.whisk.default_namespace(), store, service)
}

/// Load the config while a bootstrap subscriber writes to `writer`.
///
/// The real subscriber needs `bot.log_level` and `bot.data_dir`, so messages
/// from loading itself would otherwise be dropped.
fn load_config<W>(path: &str, writer: W) -> anyhow::Result<Config>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let bootstrap = fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(writer)
        .finish();
    Ok(tracing::subscriber::with_default(bootstrap, || {
        config::load(path)
    })?)
}

/// Log to stderr and to `{data_dir}/logs/whisk.log`.
///
/// `RUST_LOG` takes precedence over `bot.log_level`. The returned guard
/// flushes the file writer on drop.
fn init_logging(cfg: &Config) -> anyhow::Result<WorkerGuard> {
    let log_dir = PathBuf::from(shellexpand(&cfg.bot.data_dir)).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "whisk.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.bot.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    Ok(guard)
}
