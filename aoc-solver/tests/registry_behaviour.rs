//! Registry construction and solver creation

use aoc_solver::{
    AocParser, AocSolver, FactoryInfo, ParseError, PartSolver, RegistrationError, SolveError,
    SolverError, SolverRegistryBuilder,
};
use proptest::prelude::*;

/// Part 2 reuses the value part 1 stored in the shared data
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Chained;

struct ChainedData {
    base: u64,
    first: Option<u64>,
}

impl AocParser for Chained {
    type SharedData<'a> = ChainedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let base = input
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("not a number: {input:?}")))?;
        Ok(ChainedData { base, first: None })
    }
}

impl PartSolver<1> for Chained {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = *shared.first.get_or_insert(shared.base * 2);
        Ok(first.to_string())
    }
}

impl PartSolver<2> for Chained {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = shared
            .first
            .ok_or_else(|| SolveError::failed("part 1 has not run"))?;
        Ok((first + 1).to_string())
    }
}

#[test]
fn created_solver_answers_in_order() {
    let registry = SolverRegistryBuilder::new()
        .register::<Chained>(2016, 3)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2016, 3, "20\n").unwrap();
    assert_eq!((solver.year(), solver.day(), solver.parts()), (2016, 3, 2));
    assert!(solver.parse_end() >= solver.parse_start());

    let one = solver.solve(1).unwrap();
    assert_eq!(one.answer, "40");
    assert!(one.duration() >= chrono::TimeDelta::zero());
    assert_eq!(solver.solve(2).unwrap().answer, "41");
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn duplicate_registration_is_rejected() {
    let result = SolverRegistryBuilder::new()
        .register::<Chained>(2023, 5)
        .unwrap()
        .register::<Chained>(2023, 5);
    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2023, 5))
    ));
}

#[test]
fn lookup_errors_are_distinguished() {
    let registry = SolverRegistryBuilder::new().build();
    assert!(registry.storage().is_empty());
    assert!(matches!(
        registry.create_solver(2023, 1, ""),
        Err(SolverError::NotFound(2023, 1))
    ));
    assert!(matches!(
        registry.create_solver(1999, 1, ""),
        Err(SolverError::InvalidYearDay(1999, 1))
    ));
}

#[test]
fn parse_failures_surface_as_parse_errors() {
    let registry = SolverRegistryBuilder::new()
        .register::<Chained>(2024, 1)
        .unwrap()
        .build();
    assert!(matches!(
        registry.create_solver(2024, 1, "abc"),
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn out_of_calendar_slots_are_rejected(year in 0u16..2015, day in 0u8..=255) {
        let result = SolverRegistryBuilder::new().register::<Chained>(year, day);
        prop_assert!(matches!(result, Err(RegistrationError::InvalidYearDay(y, d)) if y == year && d == day));
    }

    #[test]
    fn storage_lists_slots_in_calendar_order(
        slots in prop::collection::btree_set((2015u16..=2034, 1u8..=25), 1..20)
    ) {
        let mut builder = SolverRegistryBuilder::new();
        for &(year, day) in &slots {
            builder = builder.register::<Chained>(year, day).unwrap();
        }
        let registry = builder.build();

        let listed: Vec<FactoryInfo> = registry.storage().iter_info().collect();
        let expected: Vec<FactoryInfo> = slots
            .iter()
            .map(|&(year, day)| FactoryInfo { year, day, parts: 2 })
            .collect();
        prop_assert_eq!(registry.storage().len(), slots.len());
        prop_assert_eq!(listed, expected);
    }
}
