//! 2015 day 12: JSAbacusFramework.io

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use serde_json::Value;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 12, tags = ["json"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Value;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        serde_json::from_str(input.trim())
            .map_err(|e| ParseError::InvalidFormat(format!("bad document: {e}")))
    }
}

/// Sum of every number, skipping objects that `skip` rejects
fn sum(value: &Value, skip: &impl Fn(&serde_json::Map<String, Value>) -> bool) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::Array(items) => items.iter().map(|v| sum(v, skip)).sum(),
        Value::Object(map) if !skip(map) => map.values().map(|v| sum(v, skip)).sum(),
        _ => 0,
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum(shared, &|_| false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let red = |map: &serde_json::Map<String, Value>| map.values().any(|v| v == "red");
        Ok(sum(shared, &red).to_string())
    }
}
