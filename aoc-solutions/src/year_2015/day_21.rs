//! 2015 day 21: RPG Simulator 20XX

use crate::utils::parse::{invalid, ints_n};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 21, tags = ["brute-force"])]
pub struct Solver;

const PLAYER_HP: i32 = 100;

/// cost, damage, armor
type Item = (u32, i32, i32);

const WEAPONS: [Item; 5] = [(8, 4, 0), (10, 5, 0), (25, 6, 0), (40, 7, 0), (74, 8, 0)];
const ARMOR: [Item; 5] = [(13, 0, 1), (31, 0, 2), (53, 0, 3), (75, 0, 4), (102, 0, 5)];
const RINGS: [Item; 6] = [
    (25, 1, 0),
    (50, 2, 0),
    (100, 3, 0),
    (20, 0, 1),
    (40, 0, 2),
    (80, 0, 3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fighter {
    hp: i32,
    damage: i32,
    armor: i32,
}

impl AocParser for Solver {
    type SharedData<'a> = Fighter;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let [hp, damage, armor] = ints_n::<i32, 3>(input).map_err(invalid)?;
        Ok(Fighter { hp, damage, armor })
    }
}

fn turns_to_kill(attacker: &Fighter, defender: &Fighter) -> i32 {
    let hit = (attacker.damage - defender.armor).max(1);
    (defender.hp + hit - 1) / hit
}

/// The player strikes first, so ties go to the player
fn player_wins(player: &Fighter, boss: &Fighter) -> bool {
    turns_to_kill(player, boss) <= turns_to_kill(boss, player)
}

/// Every legal loadout: one weapon, up to one armor, up to two rings
fn loadouts() -> impl Iterator<Item = (u32, Fighter)> {
    let armor = std::iter::once(None).chain(ARMOR.map(Some));
    let rings = (0..=2).flat_map(|n| RINGS.iter().copied().combinations(n));
    WEAPONS
        .into_iter()
        .cartesian_product(armor)
        .cartesian_product(rings.collect_vec())
        .map(|((weapon, armor), rings)| {
            let items = std::iter::once(weapon).chain(armor).chain(rings);
            items.fold(
                (
                    0,
                    Fighter {
                        hp: PLAYER_HP,
                        damage: 0,
                        armor: 0,
                    },
                ),
                |(cost, f), (c, d, a)| {
                    (
                        cost + c,
                        Fighter {
                            damage: f.damage + d,
                            armor: f.armor + a,
                            ..f
                        },
                    )
                },
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let boss = *shared;
        loadouts()
            .filter(|(_, player)| player_wins(player, &boss))
            .map(|(cost, _)| cost)
            .min()
            .map(|c| c.to_string())
            .ok_or_else(|| SolveError::failed("the boss cannot be beaten"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let boss = *shared;
        loadouts()
            .filter(|(_, player)| !player_wins(player, &boss))
            .map(|(cost, _)| cost)
            .max()
            .map(|c| c.to_string())
            .ok_or_else(|| SolveError::failed("every loadout beats the boss"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_fight() {
        let player = Fighter {
            hp: 8,
            damage: 5,
            armor: 5,
        };
        let boss = Fighter {
            hp: 12,
            damage: 7,
            armor: 2,
        };
        assert!(player_wins(&player, &boss));
        assert!(!player_wins(&Fighter { hp: 7, ..player }, &Fighter { hp: 13, ..boss }));
    }

    #[test]
    fn shop_has_every_combination() {
        // 5 weapons, 6 armor choices, 1 + 6 + 15 ring choices
        assert_eq!(loadouts().count(), 5 * 6 * 22);
    }

    #[test]
    fn parses_boss() {
        let boss = Solver::parse("Hit Points: 104\nDamage: 8\nArmor: 1\n").unwrap();
        assert_eq!(
            boss,
            Fighter {
                hp: 104,
                damage: 8,
                armor: 1
            }
        );
    }
}
