//! 2015 day 15: Science for Hungry People

use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 15, tags = ["brute-force"])]
pub struct Solver;

const TEASPOONS: i64 = 100;
const CALORIE_TARGET: i64 = 500;

/// capacity, durability, flavor, texture, calories
type Ingredient = [i64; 5];

impl AocParser for Solver {
    type SharedData<'a> = Vec<Ingredient>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let ingredients = lines_with(input, ints_n::<i64, 5>)?;
        if ingredients.is_empty() {
            return Err(ParseError::MissingData("no ingredients".into()));
        }
        Ok(ingredients)
    }
}

/// Every way to split `total` spoons over `n` ingredients
fn recipes(n: usize, total: i64, f: &mut impl FnMut(&[i64])) {
    fn go(amounts: &mut Vec<i64>, n: usize, left: i64, f: &mut impl FnMut(&[i64])) {
        if amounts.len() + 1 == n {
            amounts.push(left);
            f(amounts);
            amounts.pop();
            return;
        }
        for take in 0..=left {
            amounts.push(take);
            go(amounts, n, left - take, f);
            amounts.pop();
        }
    }
    go(&mut Vec::with_capacity(n), n, total, f);
}

/// Best score, optionally requiring an exact calorie count
fn best_cookie(ingredients: &[Ingredient], calories: Option<i64>) -> i64 {
    let mut best = 0;
    recipes(ingredients.len(), TEASPOONS, &mut |amounts| {
        let totals: [i64; 5] = std::array::from_fn(|prop| {
            ingredients
                .iter()
                .zip(amounts)
                .map(|(ing, spoons)| ing[prop] * spoons)
                .sum()
        });
        if calories.is_some_and(|c| c != totals[4]) {
            return;
        }
        let score: i64 = totals[..4].iter().map(|&t| t.max(0)).product();
        best = best.max(score);
    });
    best
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_cookie(shared, None).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_cookie(shared, Some(CALORIE_TARGET)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8
Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3";

    #[test]
    fn best_scores() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "62842880");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "57600000");
    }

    #[test]
    fn recipes_cover_every_split() {
        let mut count = 0;
        recipes(3, 4, &mut |amounts| {
            assert_eq!(amounts.iter().sum::<i64>(), 4);
            count += 1;
        });
        assert_eq!(count, 15);
    }
}
