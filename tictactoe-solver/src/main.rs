//! Tic-tac-toe Solver
//!
//! Solves positions with exhaustive minimax and plays perfect games.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tictactoe_core::{Board, GameState, Piece, Status, STANDARD_WIDTH};
use tictactoe_solver::{PerfectPlayer, DRAW, LOSS, WIN};

/// Perfect-play tic-tac-toe solver
#[derive(Parser, Debug)]
#[command(name = "solver", version)]
#[command(about = "Solve tic-tac-toe positions with exhaustive minimax", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Key the transposition table by raw board instead of canonical form
    #[arg(long, global = true)]
    no_symmetry: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the empty board and report its value
    Solve {
        /// Board width
        #[arg(long, default_value_t = STANDARD_WIDTH)]
        width: usize,
    },

    /// Print the perfect move for a position, e.g. `XX./OO./...`
    Move {
        /// Board in row notation (`/` between rows, `.` for empty)
        board: String,

        /// Player piece (moves first on ties)
        #[arg(long, default_value = "X")]
        player: String,

        /// Opponent piece
        #[arg(long, default_value = "O")]
        opponent: String,
    },

    /// Let the perfect player play both sides to the end
    Play {
        #[arg(long, default_value = "X")]
        player: String,

        #[arg(long, default_value = "O")]
        opponent: String,

        /// Starting position (defaults to the empty board)
        #[arg(long)]
        board: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let solver = if cli.no_symmetry {
        PerfectPlayer::without_symmetry()
    } else {
        PerfectPlayer::new()
    };

    match cli.command {
        Command::Solve { width } => solve(&solver, width),
        Command::Move {
            board,
            player,
            opponent,
        } => best_move(&solver, &board, &player, &opponent),
        Command::Play {
            player,
            opponent,
            board,
        } => play(&solver, board.as_deref(), &player, &opponent),
    }
}

fn solve(solver: &PerfectPlayer, width: usize) -> Result<()> {
    if width == 0 {
        bail!("board width must be at least 1");
    }
    if width > STANDARD_WIDTH {
        warn!(width, "exhaustive search beyond 3x3 may not finish");
    }

    println!("Tic-tac-toe Solver");
    println!("==================");
    println!("Board: {}x{}", width, width);
    println!();

    let state = GameState::with_board(Piece::new("X"), Piece::new("O"), Board::new(width))?;
    let report = solver.search(&state)?;

    report.stats.print_summary();
    println!();
    println!("First perfect move: {}", report.coordinate);
    match report.score {
        WIN => println!("The first player wins with optimal play!"),
        LOSS => println!("The second player wins with optimal play!"),
        DRAW => println!("Game is a draw with optimal play."),
        other => println!("Unexpected outcome: {}", other),
    }
    Ok(())
}

fn load(board: Option<&str>, player: &str, opponent: &str) -> Result<GameState> {
    let board = match board {
        Some(text) => text
            .parse::<Board>()
            .with_context(|| format!("cannot read board {:?}", text))?,
        None => Board::default(),
    };
    Ok(GameState::with_board(
        Piece::new(player),
        Piece::new(opponent),
        board,
    )?)
}

fn best_move(solver: &PerfectPlayer, board: &str, player: &str, opponent: &str) -> Result<()> {
    let state = load(Some(board), player, opponent)?;
    if state.over() {
        bail!("game is already over: {}", describe(&state.status()));
    }

    let report = solver.search(&state)?;
    let next = state.apply(report.coordinate)?;

    println!("{} plays {}", state.piece_to_move(), report.coordinate);
    println!("{}", render(next.board()));
    println!("Value for {}: {}", state.piece_to_move(), score_name(report.score));
    println!("Status: {}", describe(&next.status()));
    Ok(())
}

fn play(solver: &PerfectPlayer, board: Option<&str>, player: &str, opponent: &str) -> Result<()> {
    let mut state = load(board, player, opponent)?;
    println!("{}", render(state.board()));

    while !state.over() {
        let mover = state.piece_to_move().clone();
        let coordinate = solver.choose_move(&state)?;
        state = state.apply(coordinate)?;
        println!();
        println!("{} plays {}", mover, coordinate);
        println!("{}", render(state.board()));
    }

    println!();
    println!("Result: {}", describe(&state.status()));
    Ok(())
}

/// Board as a grid, one row per line.
fn render(board: &Board) -> String {
    board.to_string().replace('/', "\n")
}

fn describe(status: &Status) -> String {
    match status {
        Status::Active => "active".to_string(),
        Status::Draw => "draw".to_string(),
        Status::Win(piece) => format!("{} wins", piece),
    }
}

fn score_name(score: i8) -> &'static str {
    match score {
        WIN => "win",
        LOSS => "loss",
        _ => "draw",
    }
}
