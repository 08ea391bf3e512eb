use anyhow::{anyhow, Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use std::cmp::Ordering;
use std::convert::Infallible;
use std::io::stdin;

use tictactoe_ai::{
    board::{Mark, Move},
    config::GameConfig,
    solver::GameState,
};

mod display;
use display::*;

mod input;
use input::*;

/// Play N-in-a-row against a minimax computer player
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about)]
struct Cli {
    /// Board edge length, prompted for if not given
    #[arg(long)]
    size: Option<usize>,

    /// Marks in a row needed to win, prompted for if not given
    #[arg(long)]
    win: Option<usize>,

    /// Maximum search depth of the computer, prompted for if not given
    #[arg(long)]
    depth: Option<usize>,

    /// Print the board without colours
    #[arg(long)]
    plain: bool,

    /// Log search diagnostics to stderr (RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose > 0 { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdin = stdin();
    let mut prompter = Prompter::new(stdin.lock());

    println!("Welcome to Tic-Tac-Toe\n");

    let config = read_config(&cli, &mut prompter)?;
    let mut game = GameState::new(config).context("invalid game configuration")?;
    let total_cells = config.board_size * config.board_size;

    // game loop, the human (X) always moves first
    let mut player_turn = true;
    let mut total_moves = 0;
    loop {
        display(game.board(), cli.plain).context("Failed to draw board!")?;

        let mark = if player_turn { Mark::X } else { Mark::O };
        if player_turn {
            let prompt = format!(
                "Player X, choose row and column (1-{}): ",
                config.board_size
            );
            let row = prompter.ask(&prompt)?;
            let col = prompter.next_token()?;

            let played = Move::parse_one_indexed(&row, &col, config.board_size)
                .and_then(|chosen| game.place(chosen.row, chosen.col, Mark::X));
            if let Err(err) = played {
                println!("{}", err);
                prompter.discard_pending();
                // try the move again
                continue;
            }
        } else {
            println!("Computer is moving (O)...");

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("thinking");
            spinner.enable_steady_tick(100);
            let solved = game.solve();
            spinner.finish_and_clear();

            let (score, best_move) =
                solved.ok_or_else(|| anyhow!("no empty cell left for the computer"))?;
            game.place(best_move.row, best_move.col, Mark::O)?;

            println!("Computer plays {}", best_move);
            report_verdict(&game, score);
        }
        total_moves += 1;

        if game.wins_for(mark) {
            display(game.board(), cli.plain).context("Failed to draw board!")?;
            println!("Player {} wins!", mark);
            break;
        }
        if total_moves == total_cells || game.is_full() {
            display(game.board(), cli.plain).context("Failed to draw board!")?;
            println!("Draw!");
            break;
        }
        player_turn = !player_turn;
    }
    Ok(())
}

/// Takes each setting from the command line, or asks for it
fn read_config<R: std::io::BufRead>(cli: &Cli, prompter: &mut Prompter<R>) -> Result<GameConfig> {
    let board_size = match cli.size {
        Some(size) => GameConfig::check_board_size(size)?,
        None => prompter.ask_number("Board size: ", GameConfig::check_board_size)?,
    };
    let win_condition = match cli.win {
        Some(win) => GameConfig::check_win_condition(win, board_size)?,
        None => prompter.ask_number("Marks in a row needed to win: ", |win| {
            GameConfig::check_win_condition(win, board_size)
        })?,
    };
    let max_depth = match cli.depth {
        Some(depth) => depth,
        None => prompter.ask_number("Maximum search depth: ", Result::<usize, Infallible>::Ok)?,
    };

    Ok(GameConfig::new(board_size, win_condition, max_depth))
}

fn report_verdict(game: &GameState, score: i32) {
    let distance = game.score_to_win_distance(score);
    let plies = if distance == 1 { "ply" } else { "plies" };
    match score.cmp(&0) {
        Ordering::Greater => {
            println!("Computer can force a win in at most {} {}.", distance, plies)
        }
        Ordering::Less => {
            println!("Player X can force a win in at most {} {}.", distance, plies)
        }
        Ordering::Equal => println!(
            "No forced result found within the next {} {}.",
            distance, plies
        ),
    }
}
