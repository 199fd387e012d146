use clap::Parser;
use log::LevelFilter;
use mcts::config::DEFAULT_THINK_SECONDS;

/// Play Connect Four against the computer
#[derive(Parser)]
pub struct Args {
    /// Let the computer make the first move
    #[clap(short, long)]
    pub computer_first: bool,
    /// Number of seconds the computer thinks per move
    #[clap(short, long, default_value_t = DEFAULT_THINK_SECONDS)]
    pub seconds_per_move: f64,
    /// Seed for the computer's random number generator
    #[clap(long)]
    pub seed: Option<u64>,
    /// Write the log to this file instead of stderr
    #[clap(long)]
    pub log_file: Option<String>,
    /// More log output, repeat for more
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: u64,
    /// Draw the board without ANSI colours
    #[clap(long)]
    pub no_color: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
