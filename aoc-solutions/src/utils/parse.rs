//! Input parsing helpers built on `anyhow`, converted to [`ParseError`] at the edge.

use anyhow::{Context, anyhow};
use aoc_solver::ParseError;
use std::str::FromStr;

/// Convert an `anyhow` error into the framework's parse error
pub fn invalid(e: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{e:#}"))
}

/// Parse every non-empty line with `f`, tagging failures with their line number
pub fn lines_with<'a, T>(
    input: &'a str,
    mut f: impl FnMut(&'a str) -> anyhow::Result<T>,
) -> Result<Vec<T>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| f(line.trim_end()).with_context(|| format!("line {}", i + 1)))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(invalid)
}

/// Every integer in `s`, a leading `-` included when `T` is signed
pub fn ints<T: FromStr>(s: &str) -> Vec<T> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        if bytes[i] == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if bytes[i].is_ascii_digit() {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            match s[start..i].parse() {
                Ok(v) => out.push(v),
                Err(_) => {
                    if let Ok(v) = s[start + 1..i].parse() {
                        out.push(v);
                    }
                }
            }
        } else {
            i = start + 1;
        }
    }
    out
}

/// Exactly `N` integers from `s`
pub fn ints_n<T: FromStr + Copy, const N: usize>(s: &str) -> anyhow::Result<[T; N]> {
    let values = ints::<T>(s);
    values
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("expected {N} numbers, found {} in {s:?}", values.len()))
}

/// Split on the first blank line
pub fn sections(input: &str) -> anyhow::Result<(&str, &str)> {
    let normalized = input.trim_start_matches('\n');
    normalized
        .split_once("\n\n")
        .or_else(|| normalized.split_once("\r\n\r\n"))
        .ok_or_else(|| anyhow!("expected two sections separated by a blank line"))
}

pub fn number<T>(s: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.trim()
        .parse()
        .with_context(|| format!("not a number: {s:?}"))
}
