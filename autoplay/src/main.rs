use clap::Parser;
use dominoes::{visualize_game, Game, Outcome};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    team_wins: [usize; 2],
    team_points: [u32; 2],
    stuck: usize,
    ties: usize,
}

/// Plays one dealt game to its outcome by repeatedly picking a uniformly
/// random legal move for the current player, passing when there is none.
fn play_game(rng: &mut StdRng) -> Outcome {
    let mut game = Game::new(rng);
    loop {
        if let Some(outcome) = game.outcome() {
            debug!("{}", visualize_game(&game));
            return outcome;
        }
        match game.moves()[..].choose(rng) {
            Some(&mv) => game
                .play(mv.tile_idx, mv.side)
                .expect("enumerated move was rejected"),
            None => game.pass().expect("pass was rejected with no moves"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut score = MatchScore::default();
    for game_idx in 0..args.num_games {
        match play_game(&mut rng) {
            Outcome::Won { player, points } => {
                let team = player % 2;
                debug!(game_idx, player, points, "Won");
                score.team_wins[team] += 1;
                score.team_points[team] += points;
            }
            Outcome::Stuck {
                winning_team: Some(team),
                points,
            } => {
                debug!(game_idx, team, points, "Stuck");
                score.team_wins[team] += 1;
                score.team_points[team] += points;
                score.stuck += 1;
            }
            Outcome::Stuck {
                winning_team: None, ..
            } => {
                debug!(game_idx, "Stuck and tied");
                score.stuck += 1;
                score.ties += 1;
            }
        }
    }

    println!(
        "End result of {} games:\n\
         - team 0 (players 0 & 2): {} wins, {} points\n\
         - team 1 (players 1 & 3): {} wins, {} points\n\
         - {} stuck games, {} of them tied",
        args.num_games,
        score.team_wins[0],
        score.team_points[0],
        score.team_wins[1],
        score.team_points[1],
        score.stuck,
        score.ties
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
