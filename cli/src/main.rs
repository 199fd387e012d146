use std::{
    error::Error,
    io::{self, Write},
};

use clap::Parser;
use cli::Args;
use connect4::{Connect4, GameResult, Move, COMPUTER, HUMAN};
use log::{info, warn};
use mcts::{Budget, Engine};
use mimalloc::MiMalloc;
use render::Coloured;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod render;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, args.log_level())?,
        None => simple_logging::log_to_stderr(args.log_level()),
    }

    let mut engine = match args.seed {
        Some(seed) => Engine::with_seed(seed),
        None => Engine::new(),
    };
    let budget = Budget::from_secs_f64(args.seconds_per_move);
    let first = if args.computer_first { COMPUTER } else { HUMAN };
    let mut game = Connect4::with_first(first);
    info!("new game, {first} moves first, {budget:?} per move");

    while game.result().is_ongoing() {
        show(&game, args.no_color);
        if game.to_move == COMPUTER {
            let report = engine.search(&game, budget)?;
            println!("{report}");
            game.play(report.best_move)?;
            println!("The computer plays column {}", report.best_move);
        } else {
            let Some(my_move) = ask_move(&game)? else {
                warn!("input closed before the game ended");
                return Ok(());
            };
            game.play(my_move)?;
        }
    }

    show(&game, args.no_color);
    println!("{}", outcome(game.result()));
    Ok(())
}

fn outcome(result: GameResult) -> &'static str {
    if result.computer_wins() {
        "** The computer wins! **"
    } else if result.human_wins() {
        "** You win! **"
    } else {
        "** Draw! **"
    }
}

fn show(game: &Connect4, no_color: bool) {
    if no_color {
        println!("{game}");
    } else {
        println!("{}", Coloured(game));
    }
}

/// Prompt until the human gives a playable column. `None` on end of input.
fn ask_move(game: &Connect4) -> io::Result<Option<Move>> {
    loop {
        print!("Which column? ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match try_move(game, &line) {
            Ok(my_move) => return Ok(Some(my_move)),
            Err(err) => println!("{err}"),
        }
    }
}

fn try_move(game: &Connect4, input: &str) -> Result<Move, Box<dyn Error>> {
    let my_move: Move = input.parse()?;
    let mut copy = *game;
    copy.play(my_move)?;
    Ok(my_move)
}
