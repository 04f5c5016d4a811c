//! 2023 day 19: Aplenty

use crate::utils::parse::{invalid, ints_n, number, sections};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;
use std::ops::Range;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 19, tags = ["ranges", "parsing"])]
pub struct Solver;

const RATING_RANGE: Range<u64> = 1..4001;

#[derive(Debug, Clone, Copy)]
struct Rule<'a> {
    /// Category index into `x m a s`, with `<` or `>` and the threshold
    test: Option<(usize, bool, u64)>,
    target: &'a str,
}

pub struct System<'a> {
    workflows: HashMap<&'a str, Vec<Rule<'a>>>,
    parts: Vec<[u64; 4]>,
}

fn category(c: &str) -> anyhow::Result<usize> {
    "xmas"
        .find(c)
        .filter(|_| c.len() == 1)
        .ok_or_else(|| anyhow!("unknown category {c:?}"))
}

fn parse_rule(rule: &str) -> anyhow::Result<Rule<'_>> {
    let Some((cond, target)) = rule.split_once(':') else {
        return Ok(Rule {
            test: None,
            target: rule,
        });
    };
    let (cat, less, value) = if let Some((c, v)) = cond.split_once('<') {
        (c, true, v)
    } else if let Some((c, v)) = cond.split_once('>') {
        (c, false, v)
    } else {
        bail!("bad condition {cond:?}");
    };
    Ok(Rule {
        test: Some((category(cat)?, less, number(value)?)),
        target,
    })
}

fn parse_workflow(line: &str) -> anyhow::Result<(&str, Vec<Rule<'_>>)> {
    let (name, body) = line
        .trim()
        .strip_suffix('}')
        .and_then(|l| l.split_once('{'))
        .ok_or_else(|| anyhow!("bad workflow {line:?}"))?;
    let rules = body
        .split(',')
        .map(parse_rule)
        .collect::<anyhow::Result<_>>()?;
    Ok((name, rules))
}

impl AocParser for Solver {
    type SharedData<'a> = System<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (flows, parts) = sections(input).map_err(invalid)?;
        let workflows = flows
            .lines()
            .map(parse_workflow)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)?;
        let parts = parts
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(ints_n::<u64, 4>)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)?;
        Ok(System { workflows, parts })
    }
}

fn accepted(system: &System<'_>, part: &[u64; 4]) -> Result<bool, SolveError> {
    let mut at = "in";
    for _ in 0..=system.workflows.len() {
        match at {
            "A" => return Ok(true),
            "R" => return Ok(false),
            _ => {}
        }
        let rules = system
            .workflows
            .get(at)
            .ok_or_else(|| SolveError::failed(format!("unknown workflow {at}")))?;
        at = rules
            .iter()
            .find(|r| match r.test {
                None => true,
                Some((c, true, v)) => part[c] < v,
                Some((c, false, v)) => part[c] > v,
            })
            .map(|r| r.target)
            .ok_or_else(|| SolveError::failed(format!("workflow {at} has no fallback")))?;
    }
    Err(SolveError::failed("workflows loop forever"))
}

/// Accepted combinations within `ranges`, starting at workflow `at`
fn combinations(
    system: &System<'_>,
    at: &str,
    mut ranges: [Range<u64>; 4],
    depth: usize,
) -> Result<u64, SolveError> {
    match at {
        "A" => return Ok(ranges.iter().map(|r| r.end - r.start).product()),
        "R" => return Ok(0),
        _ if depth > system.workflows.len() => {
            return Err(SolveError::failed("workflows loop forever"));
        }
        _ => {}
    }
    let rules = system
        .workflows
        .get(at)
        .ok_or_else(|| SolveError::failed(format!("unknown workflow {at}")))?;
    let mut total = 0;
    for rule in rules {
        let Some((c, less, v)) = rule.test else {
            return Ok(total + combinations(system, rule.target, ranges, depth + 1)?);
        };
        let r = ranges[c].clone();
        // split into the part that matches and the part that falls through
        let (hit, miss) = if less {
            (r.start..v.min(r.end), v.max(r.start)..r.end)
        } else {
            ((v + 1).max(r.start)..r.end, r.start..(v + 1).min(r.end))
        };
        if !hit.is_empty() {
            let mut sub = ranges.clone();
            sub[c] = hit;
            total += combinations(system, rule.target, sub, depth + 1)?;
        }
        if miss.is_empty() {
            return Ok(total);
        }
        ranges[c] = miss;
    }
    Ok(total)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut sum = 0;
        for part in &shared.parts {
            if accepted(shared, part)? {
                sum += part.iter().sum::<u64>();
            }
        }
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ranges = std::array::from_fn(|_| RATING_RANGE);
        Ok(combinations(shared, "in", ranges, 0)?.to_string())
    }
}
