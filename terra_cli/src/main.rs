use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use terra_core::{
    ReadingEngine, ReadingMode, ReadingRequest, ReferenceStore,
    StrategyKind, TerraConfig,
};
use terra_rules::{AssignmentMap, Placement};

#[derive(Parser)]
#[command(name = "terra", about = "Spatial-symbolic home readings")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference dataset (JSON), overrides the configured one
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce a reading for one direction
    Read {
        /// Compass direction (N, NE, ... or a long name)
        #[arg(long)]
        direction: String,

        /// Numeric seed for basic selection
        #[arg(long, conflicts_with = "intention")]
        seed: Option<i64>,

        /// Intention keyword for full selection
        #[arg(long)]
        intention: Option<String>,

        #[arg(long, value_enum, default_value_t = Mode::Basic)]
        mode: Mode,

        /// Selection strategy, overriding the one configured for the mode
        #[arg(long)]
        strategy: Option<StrategyKind>,

        /// Assignment snapshot (JSON) to score in full mode
        #[arg(long)]
        assignments: Option<PathBuf>,

        /// Who uses the space ("you", "partner", ...)
        #[arg(long)]
        role: Option<String>,

        /// The occupant shares the space with you
        #[arg(long, requires = "role")]
        shared: bool,

        /// Free-form label echoed into the reading
        #[arg(long)]
        tag: Option<String>,

        /// Print the JSON response instead of the export text
        #[arg(long)]
        json: bool,
    },

    /// Score an assignment snapshot
    Score {
        /// Assignment snapshot (JSON)
        #[arg(long)]
        assignments: PathBuf,
    },

    /// Load and validate the reference dataset
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Basic,
    Full,
}

impl From<Mode> for ReadingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Basic => ReadingMode::Basic,
            Mode::Full => ReadingMode::Full,
        }
    }
}

fn load_config(cli: &Cli) -> Result<TerraConfig> {
    let mut config = match &cli.config {
        Some(path) => TerraConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TerraConfig::default(),
    };
    if let Some(dataset) = &cli.dataset {
        config.dataset.path = Some(dataset.clone());
    }
    Ok(config)
}

fn load_assignments(path: &Path) -> Result<AssignmentMap> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    AssignmentMap::from_json_str(&json)
        .with_context(|| format!("invalid assignment snapshot {}", path.display()))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Read {
            direction,
            seed,
            intention,
            mode,
            strategy,
            assignments,
            role,
            shared,
            tag,
            json,
        } => {
            let mut request = ReadingRequest::new(direction.as_str()).with_mode((*mode).into());
            if let Some(seed) = seed {
                request = request.with_seed(*seed);
            }
            if let Some(intention) = intention {
                request = request.with_intention(intention.as_str());
            }
            if let Some(strategy) = strategy {
                request = request.with_strategy(*strategy);
            }
            if let Some(path) = assignments {
                request = request.with_assignments(load_assignments(path)?);
            }
            if let Some(role) = role {
                request = request.with_occupant(role.as_str(), *shared);
            }
            if let Some(tag) = tag {
                request = request.with_tag(tag.as_str());
            }
            cmd_read(&config, &request, *json).await
        }
        Commands::Score { assignments } => cmd_score(&config, assignments),
        Commands::Check => cmd_check(&config).await,
    }
}

async fn cmd_read(config: &TerraConfig, request: &ReadingRequest, json: bool) -> Result<()> {
    let engine = ReadingEngine::from_config(config);

    if json {
        let response = engine.respond(request).await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        if let Some(error) = response.error() {
            anyhow::bail!("reading failed: {error:?}");
        }
        return Ok(());
    }

    let bundle = engine.read(request).await.context("reading failed")?;
    println!("{}", bundle.export_text());
    Ok(())
}

fn cmd_score(config: &TerraConfig, path: &Path) -> Result<()> {
    let assignments = load_assignments(path)?;
    let result = terra_core::score(&assignments, config.weights);

    let ranking = result.ranking();
    if ranking.is_empty() {
        println!("no influence");
    }
    for entry in ranking {
        println!("{:<12} {:.2}", entry.person.id(), entry.score);
    }
    for (direction, space) in &result.flagged {
        println!("flagged: {direction} {}", space.label());
    }
    Ok(())
}

async fn cmd_check(config: &TerraConfig) -> Result<()> {
    let store = ReferenceStore::from_shared(config.dataset.source());
    let dataset = store
        .load()
        .await
        .with_context(|| format!("dataset check failed for {}", store.source_description()))?;

    println!("{} records from {}", dataset.len(), store.source_description());
    Ok(())
}
