use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2030, day = 24, tags = ["macro-test", "lines"])]
struct LineStats;

impl AocParser for LineStats {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("no lines".into()));
        }
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for LineStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for LineStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2030, day = 25)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn plugin_is_found_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    let info = registry.storage().get_info(2030, 24).unwrap();
    assert_eq!(info.parts, 2);
    assert!(!registry.storage().contains(2030, 25));

    let mut solver = registry.create_solver(2030, 24, "ab\ncde").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "2");
    assert_eq!(solver.solve(2).unwrap().answer, "5");
}

#[test]
fn untagged_plugin_registers_with_empty_tags() {
    let plugin = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .find(|p| p.year == 2030 && p.day == 25)
        .unwrap();
    assert!(plugin.tags.is_empty());
    assert_eq!(plugin.solver.parts(), 1);

    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.year == 2030)
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2030, 25, "abc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "cba");
}

#[test]
fn parse_errors_pass_through_the_factory() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.year == 2030 && p.day == 24)
        .unwrap()
        .build();
    assert!(matches!(
        registry.create_solver(2030, 24, ""),
        Err(aoc_solver::SolverError::ParseError(ParseError::MissingData(_)))
    ));
}
