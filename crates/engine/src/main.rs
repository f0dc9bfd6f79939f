//! Arlenor Engine - command-line host.

use std::sync::Arc;

use anyhow::{Context, Result};
use arlenor_domain::{
    AttributeKey, ItemId, ModifierSource, RollRequest, DEFAULT_DIFFICULTY, NEUTRAL_BONUS_MALUS,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arlenor_engine::infrastructure::{
    actor_store::JsonActorRepo,
    chat::ConsoleChat,
    clock::{ScriptedRandom, SystemClock, SystemRandom},
    config::EngineConfig,
    ports::RandomPort,
    tables::load_reference_tables,
};
use arlenor_engine::App;

/// Arlenor roll resolution engine
#[derive(Parser)]
#[command(name = "arlenor-engine")]
#[command(about = "Resolve Arlenor dice rolls against actor snapshots", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Roll an attribute, optionally with a skill, power or crystal
    Roll(RollArgs),

    /// Show the health bands and derived values of an actor
    Health {
        /// Actor id or exact name
        #[arg(long)]
        actor: String,
    },

    /// Print the loaded lookup tables
    Tables,
}

#[derive(Args)]
struct RollArgs {
    /// Actor id or exact name
    #[arg(long)]
    actor: String,

    /// Attribute to roll (vig, hab, int, cha, pou)
    #[arg(long)]
    attribute: AttributeKey,

    /// Skill item id
    #[arg(long, conflicts_with_all = ["power", "crystal"])]
    skill: Option<ItemId>,

    /// Power item id
    #[arg(long, conflicts_with = "crystal")]
    power: Option<ItemId>,

    /// Crystal item id
    #[arg(long)]
    crystal: Option<ItemId>,

    /// Bonus/malus code
    #[arg(long, default_value = NEUTRAL_BONUS_MALUS, allow_hyphen_values = true)]
    bonus: String,

    /// Difficulty code
    #[arg(long, default_value = DEFAULT_DIFFICULTY)]
    difficulty: String,

    /// Replay these die faces instead of rolling, e.g. --dice 6,4,1
    #[arg(long, value_delimiter = ',')]
    dice: Vec<i32>,
}

impl RollArgs {
    fn request(&self) -> RollRequest {
        let modifier = self
            .skill
            .map(ModifierSource::Skill)
            .or(self.power.map(ModifierSource::Power))
            .or(self.crystal.map(ModifierSource::Crystal));

        let request = RollRequest::new(self.attribute)
            .with_bonus_malus(self.bonus.clone())
            .with_difficulty(self.difficulty.clone());
        match modifier {
            Some(modifier) => request.with_modifier(modifier),
            None => request,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout carries the JSON payloads
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arlenor_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::from_env().context("Invalid engine configuration")?;
    let tables = load_reference_tables(config.tables_dir.as_deref())
        .await
        .context("Failed to load lookup tables")?;

    if let Command::Tables = cli.command {
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    let actors = JsonActorRepo::open(&config.actors_path)
        .await
        .with_context(|| format!("Failed to open actors at {}", config.actors_path.display()))?;

    let random: Arc<dyn RandomPort> = match &cli.command {
        Command::Roll(args) if !args.dice.is_empty() => {
            Arc::new(ScriptedRandom::new(args.dice.iter().copied()))
        }
        _ => Arc::new(SystemRandom::new()),
    };

    let app = App::with_ports(
        Arc::new(actors),
        Arc::new(ConsoleChat::stdout()),
        random,
        Arc::new(SystemClock::new()),
        tables,
        config.rule_revision,
    );

    match cli.command {
        Command::Roll(args) => roll(&app, &args).await,
        Command::Health { actor } => {
            let view = app.use_cases.sheet.execute(&actor).await?;
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
        Command::Tables => Ok(()),
    }
}

async fn roll(app: &App, args: &RollArgs) -> Result<()> {
    let actor = app
        .entities
        .actor
        .resolve(&args.actor)
        .await?
        .with_context(|| format!("Il n'y a pas de personnage valide : {}", args.actor))?;

    let result = app
        .use_cases
        .roll
        .roll_skill
        .execute(actor.id, &args.request())
        .await;

    match result {
        Ok(result) => {
            if !result.delivered {
                tracing::warn!("Roll resolved but the chat did not accept it");
            }
            Ok(())
        }
        Err(e) => match e.notice() {
            Some(notice) => {
                eprintln!("{}", notice);
                Err(e.into())
            }
            None => Err(e).context("Roll failed"),
        },
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
