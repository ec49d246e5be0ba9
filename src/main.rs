#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tictactoe::{init_logging, run_cli, Game, DEFAULT_SIDE_LENGTH};

/// Two-player tic-tac-toe on a square grid of any size.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_SIDE_LENGTH, help = "Side length of the board")]
    size: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let game = Game::new(cli.size).map_err(|e| anyhow::anyhow!(e))?;
    run_cli(game)
}
