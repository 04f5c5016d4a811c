//! Result printing: a framed box per puzzle, or bare answers in quiet mode

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::collections::HashMap;

pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
    /// Parts still awaited per puzzle before its box can be drawn
    expected_parts: HashMap<(u16, u8), usize>,
    current: Vec<SolverResult>,
    completed: Vec<SolverResult>,
}

impl OutputFormatter {
    pub fn new(quiet: bool, expected_parts: HashMap<(u16, u8), usize>) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
            expected_parts,
            current: Vec::new(),
            completed: Vec::new(),
        }
    }

    /// Take the next in-order result; prints once its puzzle is complete
    pub fn push(&mut self, result: SolverResult) {
        if self.quiet {
            print_quiet(&result);
            self.completed.push(result);
            return;
        }

        let slot = (result.year, result.day);
        if let Some(first) = self.current.first()
            && (first.year, first.day) != slot
        {
            self.flush_day();
        }
        self.current.push(result);

        let done = self.current.len() >= self.expected_parts.get(&slot).copied().unwrap_or(1);
        if done {
            self.flush_day();
        }
    }

    fn flush_day(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let (year, day) = (self.current[0].year, self.current[0].day);
        println!();
        println!("{year} Day {day:02}");
        print!("{}", render_box(&day_rows(&self.current)));
        self.completed.append(&mut self.current);
    }

    /// Print any partial puzzle and the run summary; returns all results seen
    pub fn finish(mut self) -> Vec<SolverResult> {
        if self.quiet {
            return self.completed;
        }
        self.flush_day();
        print_summary(&self.completed, self.start_time.elapsed());
        self.completed
    }
}

fn print_quiet(result: &SolverResult) {
    match &result.answer {
        Ok(answer) => println!("{answer}"),
        Err(e) => eprintln!("{}/{:02} part {}: {e}", result.year, result.day, result.part),
    }
}

/// Content rows of one puzzle's box; an empty string is the spacer row
fn day_rows(results: &[SolverResult]) -> Vec<String> {
    let mut rows: Vec<String> = results
        .iter()
        .map(|r| match &r.answer {
            Ok(answer) => format!("Solution #{}: {answer}", r.part),
            Err(e) => format!("Solution #{}: error: {e}", r.part),
        })
        .collect();

    let total: TimeDelta = results
        .iter()
        .map(|r| r.parse_duration.unwrap_or(TimeDelta::zero()) + r.solve_duration)
        .sum();
    rows.push(String::new());
    rows.push(format!("Time: {:.2} ms", as_millis(total)));
    if results.len() > 1 {
        rows.extend(
            results
                .iter()
                .map(|r| format!("Time #{}: {}", r.part, format_duration(r.solve_duration))),
        );
    }
    rows
}

/// Frame `rows` as
///
/// ```text
/// *----------------*
/// | Solution #1: 7 |
/// |                |
/// | Time: 0.01 ms  |
/// *----------------*
/// ```
///
/// Every row is padded to one column past the widest `| text` prefix.
pub fn render_box(rows: &[String]) -> String {
    let prefixed: Vec<Option<String>> = rows
        .iter()
        .map(|row| (!row.is_empty()).then(|| format!("| {row}")))
        .collect();
    let width = prefixed
        .iter()
        .flatten()
        .map(|row| row.chars().count())
        .max()
        .unwrap_or(1);

    let separator = format!("*{}*\n", "-".repeat(width));
    let mut out = separator.clone();
    for row in &prefixed {
        match row {
            Some(row) => {
                let filler = " ".repeat(width - row.chars().count() + 1);
                out.push_str(&format!("{row}{filler}|\n"));
            }
            None => out.push_str(&format!("|{}|\n", " ".repeat(width))),
        }
    }
    out.push_str(&separator);
    out
}

fn as_millis(d: TimeDelta) -> f64 {
    d.num_microseconds().unwrap_or(i64::MAX) as f64 / 1000.0
}

/// `x.xx ms` under a second, `x.xx s` under a minute, `m m s.ss s` beyond
pub fn format_duration(d: TimeDelta) -> String {
    let seconds = as_millis(d) / 1000.0;
    if seconds < 1.0 {
        format!("{:.2} ms", seconds * 1000.0)
    } else if seconds <= 60.0 {
        format!("{seconds:.2} s")
    } else {
        let minutes = (seconds / 60.0).floor();
        format!("{minutes} m {:.2} s", seconds - minutes * 60.0)
    }
}

fn print_summary(results: &[SolverResult], elapsed: std::time::Duration) {
    let total = results.len();
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();

    let compute: TimeDelta = results
        .iter()
        .map(|r| r.parse_duration.unwrap_or(TimeDelta::zero()) + r.solve_duration)
        .sum();

    println!();
    println!("--- Summary ---");
    println!("Parts: {} solved, {} failed", successes, total - successes);
    println!("Total compute time: {}", format_duration(compute));
    println!("Elapsed wall-clock time: {:.2} ms", elapsed.as_secs_f64() * 1000.0);
    if !elapsed.is_zero() {
        println!(
            "Speedup factor: {:.2}x",
            as_millis(compute) / 1000.0 / elapsed.as_secs_f64()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{SolveError, SolverError};

    fn ok(part: u8, answer: &str, micros: i64) -> SolverResult {
        SolverResult {
            year: 2015,
            day: 1,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: (part == 1).then(|| TimeDelta::microseconds(500)),
            solve_duration: TimeDelta::microseconds(micros),
        }
    }

    #[test]
    fn box_matches_helper_layout() {
        let rows = vec![
            "Solution #1: 74".to_string(),
            "Solution #2: 1795".to_string(),
            String::new(),
            "Time: 1.25 ms".to_string(),
        ];
        let expected = "\
*-------------------*
| Solution #1: 74   |
| Solution #2: 1795 |
|                   |
| Time: 1.25 ms     |
*-------------------*
";
        assert_eq!(render_box(&rows), expected);
    }

    #[test]
    fn every_box_line_has_the_same_width() {
        let rows = day_rows(&[ok(1, "232", 250), ok(2, "1783", 1_500_000)]);
        let rendered = render_box(&rows);
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{rendered}");
    }

    #[test]
    fn day_rows_sum_parse_and_solve_time() {
        let rows = day_rows(&[ok(1, "232", 250), ok(2, "1783", 1_250)]);
        assert_eq!(rows[0], "Solution #1: 232");
        assert_eq!(rows[1], "Solution #2: 1783");
        assert_eq!(rows[2], "");
        assert_eq!(rows[3], "Time: 2.00 ms");
        assert_eq!(rows[4], "Time #1: 0.25 ms");
        assert_eq!(rows[5], "Time #2: 1.25 ms");
    }

    #[test]
    fn failed_parts_show_their_error() {
        let failed = SolverResult {
            answer: Err(SolverError::SolveError(SolveError::failed("no loop"))),
            ..ok(2, "", 0)
        };
        let rows = day_rows(&[ok(1, "4", 10), failed]);
        assert_eq!(rows[1], "Solution #2: error: solve failed: no loop");
    }

    #[test]
    fn single_part_box_has_no_per_part_times() {
        let rows = day_rows(&[ok(1, "1000", 10)]);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn duration_units_scale() {
        assert_eq!(format_duration(TimeDelta::microseconds(1_234)), "1.23 ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_500)), "2.50 s");
        assert_eq!(format_duration(TimeDelta::seconds(125)), "2 m 5.00 s");
    }
}
