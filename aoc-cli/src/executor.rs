//! Runs solvers on a rayon pool and streams their results

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Outcome of one puzzle part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Set on the first result produced by each parsed instance
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A puzzle and the parts of it to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor {
    shared: SharedState,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker needs; borrowed by every task
struct SharedState {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: SharedState {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.shared.inputs
    }

    /// Registered puzzles that pass the year/day/part filters, in calendar order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.shared;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Run every work item, sending one result per part to `tx`
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.shared) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_grouped(by_year, &tx)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => {
                self.execute_grouped(work_items.into_iter().map(|w| vec![w]).collect(), &tx)
            }
        }
    }

    /// Each group is one pool task; items inside a group run in order
    fn execute_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let shared = &self.shared;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, shared) {
                            err = Some(ArcExecutorError::combine_opt(err, e));
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(a), b) => Some(ArcExecutorError::combine_opt(b, a)),
                    (None, b) => b,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn error_result(year: u16, day: u8, part: u8, error: SolverError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
}

fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    shared: &SharedState,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match shared.inputs.read(year, day) {
        Ok(input) => input,
        Err(e) => {
            warn!(year, day, error = %e, "skipping puzzle without input");
            let message = ExecutorError::InputRead {
                year,
                day,
                source: e,
            }
            .to_string();
            for part in work.parts.clone() {
                let error = SolverError::ParseError(ParseError::MissingData(message.clone()));
                send(tx, error_result(year, day, part, error))?;
            }
            return Ok(());
        }
    };

    if matches!(shared.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &shared.registry)
    } else {
        run_parts_in_order(work, &input, tx, &shared.registry)
    }
}

/// Parse once and solve the parts in order, so later parts can reuse earlier work
fn run_parts_in_order(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => return send_parse_failure(work, e, tx),
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(year, day, part, &mut *solver);
        result.parse_duration = parse_duration.take();
        send(tx, result)?;
    }
    Ok(())
}

/// Every part gets its own parsed instance; results are re-ordered downstream
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    work.parts
        .clone()
        .into_par_iter()
        .map(|part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => {
                    let mut result = solve_part(year, day, part, &mut *solver);
                    result.parse_duration = Some(solver.parse_duration());
                    result
                }
                Err(e) => error_result(year, day, part, e),
            };
            send(tx, result).err()
        })
        .reduce(|| None, |a, b| match (a, b) {
            (Some(a), b) => Some(ArcExecutorError::combine_opt(b, a)),
            (None, b) => b,
        })
        .map_or(Ok(()), Err)
}

fn send_parse_failure(
    work: &WorkItem,
    error: SolverError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    warn!(year = work.year, day = work.day, %error, "parse failed");
    let message = error.to_string();
    for part in work.parts.clone() {
        let error = SolverError::ParseError(ParseError::Other(message.clone()));
        send(tx, error_result(work.year, work.day, part, error))?;
    }
    Ok(())
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(result) => {
            debug!(year, day, part, answer = %result.answer, "part finished");
            SolverResult {
                year,
                day,
                part,
                solve_duration: result.duration(),
                answer: Ok(result.answer),
                parse_duration: None,
            }
        }
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        },
    }
}
