use circular_robbery::problems::linear::{LinearRobbery, RobberState};
use circular_robbery::{LayeredProblem, ScanEngine, ScanEngineBuilder};

#[test]
fn run_and_cost_agree() {
    let houses = [5, 1, 1, 5, 9, 2, 0, 7, 3];
    for b in 1..=houses.len() + 1 {
        let engine = ScanEngine::with_block_size(LinearRobbery::new(&houses), b);
        let (cost, path) = engine.run();
        assert_eq!(cost, engine.cost(), "block size {b}");
        assert_eq!(path.len(), houses.len() + 1);
    }
}

#[test]
fn path_never_takes_neighbours() {
    let houses = [8, 9, 8, 1, 1, 9, 9, 2, 4, 6, 6];
    let (cost, path) = ScanEngineBuilder::new(LinearRobbery::new(&houses))
        .with_block_size(3)
        .build()
        .run();
    assert_eq!(path[0], RobberState::Skipped);
    for w in path.windows(2) {
        assert!(!(w[0] == RobberState::Taken && w[1] == RobberState::Taken));
    }
    let taken = LinearRobbery::selected_houses(&path);
    let sum: i64 = taken.iter().map(|&i| i64::from(houses[i])).sum();
    assert_eq!(sum, cost);
}

#[test]
fn empty_slice_is_a_zero_layer_scan() {
    let problem = LinearRobbery::new(&[]);
    assert_eq!(problem.num_layers(), 0);
    let (cost, path) = ScanEngine::new(problem).run();
    assert_eq!(cost, 0);
    assert_eq!(path, vec![RobberState::Skipped]);
}
