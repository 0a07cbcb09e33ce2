use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use tic_tac_toe::session::{PlayerKind, Seat, Session};

/// Play tic-tac-toe in the terminal against a friend or the computer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Who plays X
    #[arg(long, env = "TTT_PLAYER_X", value_enum, default_value_t = PlayerKind::Human)]
    player_x: PlayerKind,

    /// Who plays O
    #[arg(long, env = "TTT_PLAYER_O", value_enum, default_value_t = PlayerKind::Optimal)]
    player_o: PlayerKind,

    /// Display name for X, asked for interactively when X is human
    #[arg(long)]
    name_x: Option<String>,

    /// Display name for O, asked for interactively when O is human
    #[arg(long)]
    name_o: Option<String>,

    /// Seed for the random computer player
    #[arg(long, env = "TTT_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = std::io::stdin();
    let mut session = Session::new(
        stdin.lock(),
        std::io::stdout(),
        rng,
        Seat::new(args.player_x, args.name_x),
        Seat::new(args.player_o, args.name_o),
    );
    session.run()?;

    Ok(())
}
