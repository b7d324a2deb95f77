use junction_solver::{
    ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegisterSolver, RegistryBuilder, SolveError,
    SolverPlugin,
};

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle(year = 2019, day = 4, parts = 1, tags = ["macro-test", "strings"])]
struct LineCounter;

impl PuzzleParser for LineCounter {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for LineCounter {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle(year = 2019, day = 5, parts = 1)]
struct Untagged;

impl PuzzleParser for Untagged {
    type SharedData<'a> = ();

    fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(_: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(String::from("ok"))
    }
}

fn find_plugin(year: u16, day: u8) -> Option<&'static SolverPlugin> {
    junction_solver::inventory::iter::<SolverPlugin>()
        .find(|plugin| plugin.year == year && plugin.day == day)
}

#[test]
fn test_plugin_is_submitted_with_tags() {
    let plugin = find_plugin(2019, 4).expect("plugin should be submitted");
    assert_eq!(plugin.tags, &["macro-test", "strings"]);

    let untagged = find_plugin(2019, 5).expect("plugin should be submitted");
    assert!(untagged.tags.is_empty());
}

#[test]
fn test_plugins_register_and_solve() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    let info = registry.get_info(2019, 4).unwrap();
    assert_eq!(info.parts, 1);

    let mut solver = registry.create_solver(2019, 4, "a\nb\nc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
}
