//! Isolation match runner - pits the search agent against a baseline opponent

use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::info;

use knight_isolation::agent::{GreedyPlayer, RandomPlayer, SearchPlayer, Technique};
use knight_isolation::config::{MatchConfig, SearchConfig};
use knight_isolation::orchestrator::{run_match, BoxedPlayer};

#[derive(Parser, Debug)]
#[command(name = "isolation")]
#[command(version, about = "Play knight's Isolation matches between search agents", long_about = None)]
struct Cli {
    /// Search technique for the agent (minimax, alphabeta, alphabeta_iterative, pvs, random)
    #[arg(long, short = 't', default_value = "pvs")]
    technique: String,

    /// Opponent to play against
    #[arg(long, short = 'o', value_enum, default_value_t = Opponent::Greedy)]
    opponent: Opponent,

    /// Number of rounds (each round is two games unless --no-fair)
    #[arg(long, short = 'r', default_value_t = 5)]
    rounds: usize,

    /// Time budget per turn in milliseconds
    #[arg(long, default_value_t = 150)]
    time_limit_ms: u64,

    /// Do not swap seats between games
    #[arg(long)]
    no_fair: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Deepest iteration for iterative techniques
    #[arg(long, default_value_t = 5)]
    depth_limit: i32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Opponent {
    Random,
    Greedy,
    Minimax,
    Alphabeta,
    #[value(name = "alphabeta_iterative")]
    AlphabetaIterative,
    Pvs,
}

impl Opponent {
    fn technique(self) -> Option<Technique> {
        match self {
            Opponent::Random | Opponent::Greedy => None,
            Opponent::Minimax => Some(Technique::Minimax),
            Opponent::Alphabeta => Some(Technique::AlphaBeta),
            Opponent::AlphabetaIterative => Some(Technique::AlphaBetaIterative),
            Opponent::Pvs => Some(Technique::Pvs),
        }
    }
}

/// Per-game seed so parallel games stay reproducible
fn game_seed(seed: Option<u64>, game: usize, competitor: u64) -> Option<u64> {
    seed.map(|s| s.wrapping_mul(1_000_003).wrapping_add(game as u64 * 2 + competitor))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.rounds == 0 {
        bail!("--rounds must be at least 1");
    }
    if cli.depth_limit < 1 {
        bail!("--depth-limit must be at least 1");
    }

    let agent_config = SearchConfig {
        technique: Technique::from_name(&cli.technique),
        depth_limit: cli.depth_limit,
        ..SearchConfig::default()
    };
    let match_config = MatchConfig {
        time_limit: Duration::from_millis(cli.time_limit_ms),
        rounds: cli.rounds,
        fair: !cli.no_fair,
    };

    info!("agent: {}, opponent: {:?}", agent_config.technique, cli.opponent);
    println!(
        "Running {} games: {} vs {:?}",
        match_config.games(),
        agent_config.technique,
        cli.opponent
    );

    let summary = run_match(
        |game| -> [BoxedPlayer; 2] {
            let agent: BoxedPlayer = Box::new(SearchPlayer::new(SearchConfig {
                seed: game_seed(cli.seed, game, 0),
                ..agent_config
            }));
            let opponent_seed = game_seed(cli.seed, game, 1);
            let opponent: BoxedPlayer = match cli.opponent.technique() {
                Some(technique) => Box::new(SearchPlayer::new(SearchConfig {
                    technique,
                    depth_limit: cli.depth_limit,
                    seed: opponent_seed,
                    ..SearchConfig::default()
                })),
                None if cli.opponent == Opponent::Greedy => Box::new(GreedyPlayer::new()),
                None => Box::new(RandomPlayer::new(opponent_seed)),
            };
            [agent, opponent]
        },
        &match_config,
    );

    println!("\n=== Match Results ===");
    println!("Games played: {}", summary.games);
    println!("Agent wins:    {}", summary.wins[0]);
    println!("Opponent wins: {}", summary.wins[1]);
    println!("Win rate:      {:.1}%", summary.win_rate() * 100.0);

    Ok(())
}
