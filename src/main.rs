use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use learnplay::config::AppConfig;
use learnplay::game::SnakeConfig;
use learnplay::modes::{MatchingMode, SnakeMode};
use learnplay::progress::{Progress, ProgressSink};
use learnplay::render::Presentable;
use learnplay::rounds::{ColorSwatch, Letter, Number, RoundConfig};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "learnplay")]
#[command(version, about = "Letter, number, colour and snake games for young learners")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Where XP and badges are stored (overrides the config file)
    #[arg(long, global = true)]
    progress_file: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one of the mini-games
    Play {
        game: Game,

        /// Rounds per session for the matching games
        #[arg(long)]
        rounds: Option<u32>,
    },
    /// Show XP, badges and recent activities
    Progress,
}

#[derive(Clone, Copy, ValueEnum)]
enum Game {
    /// Find the letter
    Letters,
    /// Count the stars
    Numbers,
    /// Name the colour
    Colors,
    /// Classic snake
    Snake,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            let mut builder = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("info"),
            );
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
    };
    builder.try_init().context("Failed to initialise logger")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(path) = cli.progress_file {
        config.progress_file = path;
    }

    let mut progress = Progress::load(&config.progress_file)?;
    if let Some(name) = &config.player_name {
        progress.name = name.clone();
    }

    match cli.command {
        Command::Play { game, rounds } => {
            let mut rounds_config = config.rounds.clone();
            if let Some(rounds) = rounds {
                rounds_config.rounds_per_session = rounds;
                rounds_config.validate().context("Invalid --rounds")?;
            }

            let mut sink = ProgressSink::new(&mut progress);
            let outcome = match game {
                Game::Letters => play_matching::<Letter>(rounds_config, &mut sink).await,
                Game::Numbers => play_matching::<Number>(rounds_config, &mut sink).await,
                Game::Colors => play_matching::<ColorSwatch>(rounds_config, &mut sink).await,
                Game::Snake => play_snake(config.snake.clone(), &mut sink).await,
            };
            let recorded = sink.into_recorded();

            // Whatever was played is saved before a game error is surfaced
            for (result, earned) in &recorded {
                println!(
                    "{} completed! You scored {}/{}. Earned {} XP!",
                    result.kind, result.score, result.total, earned
                );
            }
            progress.save(&config.progress_file)?;
            info!("{} session(s) recorded for {}", recorded.len(), progress.name);
            outcome?;
        }
        Command::Progress => print_progress(&progress),
    }

    Ok(())
}

async fn play_matching<V: Presentable>(
    config: RoundConfig,
    sink: &mut ProgressSink<'_>,
) -> Result<()> {
    MatchingMode::<V>::new(config)?.run(sink).await
}

async fn play_snake(config: SnakeConfig, sink: &mut ProgressSink<'_>) -> Result<()> {
    SnakeMode::new(config)?.run(sink).await
}

fn print_progress(progress: &Progress) {
    println!("{}", "=".repeat(40));
    println!("{}'s progress", progress.name);
    println!("{}", "=".repeat(40));
    println!("Total XP: {}", progress.xp);

    println!("\nBadges Earned:");
    if progress.badges.is_empty() {
        println!("  No badges yet! Keep learning!");
    }
    for badge in &progress.badges {
        println!("  ⭐ {}", badge);
    }

    println!("\nRecent Activities:");
    if progress.recent_activities.is_empty() {
        println!("  Nothing yet, go play a game!");
    }
    for activity in &progress.recent_activities {
        println!("  - {}", activity);
    }
}
