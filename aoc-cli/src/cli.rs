//! Command-line arguments

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How work is spread over the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every puzzle in calendar order on one thread
    Sequential,
    /// One task per year; days within a year run in order
    Year,
    /// One task per puzzle; its parts run in order (default)
    #[default]
    Day,
    /// One task per puzzle part; each part parses its own copy of the input
    Part,
}

/// Run Advent of Code puzzle solvers against local inputs
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code puzzle solvers", version)]
pub struct Args {
    /// Year to run (all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying all of these tags (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/{day}.txt` puzzle inputs
    #[arg(short, long, env = "AOC_INPUT_DIR", default_value = "input")]
    pub input_dir: PathBuf,

    /// Worker threads (defaults to available parallelism)
    #[arg(long, env = "AOC_THREADS")]
    pub threads: Option<usize>,

    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Print answers only, one per line
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_everything_by_day() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(args.year.is_none() && args.day.is_none() && args.part.is_none());
        assert!(args.tags.is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn tags_split_on_commas() {
        let args = Args::try_parse_from(["aoc", "--tags", "grid,bfs", "-vv"]).unwrap();
        assert_eq!(args.tags, vec!["grid", "bfs"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn day_out_of_calendar_is_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}
