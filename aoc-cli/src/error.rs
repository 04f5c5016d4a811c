//! Error types for the CLI

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Errors raised while running solvers; shared across worker threads behind an `Arc`
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    #[error("cannot read input for {year} day {day}: {source}")]
    InputRead {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    #[error("result channel closed")]
    ChannelSend,

    #[error("thread pool creation failed: {0}")]
    ThreadPool(String),

    #[error("{} errors occurred", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into a flat `Multiple`
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Errors reading a puzzle input file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{} does not exist", .0.display())]
    Missing(std::path::PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(msg: &str) -> ArcExecutorError {
        ExecutorError::ThreadPool(msg.to_string()).into()
    }

    fn count(err: &ArcExecutorError) -> usize {
        match err.inner() {
            ExecutorError::Multiple(v) => v.len(),
            _ => 1,
        }
    }

    #[test]
    fn combine_flattens_nested_multiples() {
        let left = ArcExecutorError::combine(single("a"), single("b"));
        let right = ArcExecutorError::combine(single("c"), single("d"));
        let all = ArcExecutorError::combine(left, right);
        assert_eq!(count(&all), 4);

        let appended = ArcExecutorError::combine(all.clone(), single("e"));
        assert_eq!(count(&appended), 5);
        let prepended = ArcExecutorError::combine(single("z"), all);
        assert_eq!(count(&prepended), 5);
    }

    #[test]
    fn combine_opt_keeps_single_error() {
        let err = ArcExecutorError::combine_opt(None, single("only"));
        assert_eq!(count(&err), 1);
        assert!(err.to_string().contains("only"));
    }
}
