use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use pellet_chase::ai::{
    Agent, GeneticAgent, HillClimberAgent, MctsAgent, RandomAgent, RandomSequenceAgent,
};
use pellet_chase::config::SearchConfig;
use pellet_chase::game::{Maze, MazeSim};

const DEFAULT_LAYOUT: &str = "\
###########
#P...#....#
#.##.#.##.#
#.#.....#.#
#.#.###.#.#
#....G....#
###########";

/// Run maze-chase episodes with a chosen agent.
#[derive(Parser)]
#[command(name = "arena", about = "Run maze-chase episodes with a chosen agent")]
struct Cli {
    /// Agent to run: random, random-seq, hill, genetic, or mcts
    #[arg(long, default_value = "genetic")]
    agent: String,

    /// Number of episodes to play
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Path to an ASCII maze layout (defaults to a built-in map)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Override the per-decision successor budget
    #[arg(long)]
    budget: Option<u32>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.agent.as_str() {
        "random" | "random-seq" | "hill" | "genetic" | "mcts" => {}
        other => bail!(
            "unknown agent '{}' (expected 'random', 'random-seq', 'hill', 'genetic', or 'mcts')",
            other
        ),
    }

    let mut config = SearchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(budget) = cli.budget {
        config.arena.successor_budget = budget;
    }

    let layout = match &cli.layout {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading layout from {}", path.display()))?,
        None => DEFAULT_LAYOUT.to_string(),
    };
    let maze = Maze::parse(&layout).context("parsing maze layout")?;
    let mut sim = MazeSim::new(maze, config.arena.successor_budget);

    let mut agent: Box<dyn Agent<MazeSim>> = match cli.agent.as_str() {
        "random" => Box::new(match cli.seed {
            Some(seed) => RandomAgent::seeded(seed),
            None => RandomAgent::new(),
        }),
        "random-seq" => Box::new(match cli.seed {
            Some(seed) => RandomSequenceAgent::seeded(config.random_sequence.clone(), seed),
            None => RandomSequenceAgent::new(config.random_sequence.clone()),
        }),
        "hill" => Box::new(match cli.seed {
            Some(seed) => HillClimberAgent::seeded(config.hill_climber.clone(), &sim, seed),
            None => HillClimberAgent::new(config.hill_climber.clone(), &sim),
        }),
        "genetic" => Box::new(match cli.seed {
            Some(seed) => GeneticAgent::seeded(config.genetic.clone(), seed),
            None => GeneticAgent::new(config.genetic.clone()),
        }),
        "mcts" => Box::new(MctsAgent::new()),
        _ => unreachable!(),
    };

    println!(
        "agent={} games={} budget={} frame_cap={}",
        agent.name(),
        cli.games,
        config.arena.successor_budget,
        config.arena.frame_cap
    );

    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut timeouts = 0u32;
    let mut total_frames = 0u64;

    for game in 1..=cli.games {
        let mut state = sim.initial_state();
        agent.on_game_start(&sim, &state);

        let mut frames = 0u32;
        while !state.is_terminal() && frames < config.arena.frame_cap {
            sim.begin_decision();
            let action = agent.choose_action(&mut sim, &state);
            state = sim.advance(&state, action);
            frames += 1;
        }
        total_frames += u64::from(frames);

        let outcome = if state.is_win() {
            wins += 1;
            "win"
        } else if state.is_lose() {
            losses += 1;
            "loss"
        } else {
            timeouts += 1;
            "timeout"
        };
        println!(
            "game {game:>3}: {outcome:<7} frames={frames:>4} pellets_left={}",
            state.pellets_left()
        );
    }

    println!(
        "summary: {wins} wins / {losses} losses / {timeouts} timeouts, avg frames {:.1}",
        total_frames as f64 / f64::from(cli.games.max(1))
    );
    Ok(())
}
