//! End-to-end timetable searches.

use u_timetable::ga::{GaConfig, Individual};
use u_timetable::random::create_rng;
use u_timetable::timetable::{evaluate, Catalog, Group, Teacher, TimetableProblem};
use u_timetable::Error;

fn config(population: usize, generations: usize) -> GaConfig {
    GaConfig::default()
        .with_population_size(population)
        .with_max_generations(generations)
        .with_report_interval(1)
        .with_parallel(false)
}

/// Six subjects, three teachers, three groups, fifteen timeslots.
fn university() -> Catalog {
    Catalog::new(
        ["Discrete Math", "Physics", "Programming", "Chemistry", "Philosophy", "Calculus"]
            .into_iter()
            .map(String::from)
            .collect(),
        vec![
            Teacher::new("Tom", [true, true, false, false, false, false], 6),
            Teacher::new("Bob", [false, false, true, true, false, false], 5),
            Teacher::new("Mary", [false, false, false, false, true, true], 7),
        ],
        vec![
            Group::new("A", [false, false, false, false, true, false]),
            Group::new("B", [false, true, false, true, false, true]),
            Group::new("C", [true, false, true, false, false, false]),
        ],
        15,
    )
    .expect("valid catalog")
}

#[test]
fn trivial_catalog_is_always_perfect() {
    let catalog = Catalog::new(
        vec!["Physics".into()],
        vec![Teacher::new("Tom", [true], 5)],
        vec![Group::new("A", [true])],
        5,
    )
    .expect("valid catalog");
    let problem = TimetableProblem::new(&catalog);
    let mut rng = create_rng(1);
    let mut reports = Vec::new();

    let result = problem
        .solve_with(&config(8, 20), &mut rng, |r| reports.push((r.generation, r.best_fitness)))
        .expect("valid config");

    assert_eq!(reports.first(), Some(&(0, 0)));
    assert_eq!(reports.last(), Some(&(20, 0)));
    assert!(reports.iter().all(|&(_, f)| f == 0));
    assert_eq!(result.best_fitness, 0);
}

#[test]
fn disjoint_catalog_never_beats_two_per_slot() {
    // Nobody teaches anything and no group requires anything: every slot
    // costs a competency point and a requirement point.
    let slots = 6;
    let catalog = Catalog::new(
        vec!["Physics".into(), "Chemistry".into()],
        vec![
            Teacher::new("Tom", [false, false], slots),
            Teacher::new("Bob", [false, false], slots),
        ],
        vec![Group::new("A", [false, false]), Group::new("B", [false, false])],
        slots,
    )
    .expect("valid catalog");
    let ceiling = -2 * slots as i64;
    let problem = TimetableProblem::new(&catalog);
    let mut rng = create_rng(2);

    let result = problem
        .solve_with(&config(10, 50), &mut rng, |r| {
            assert!(r.best_fitness <= ceiling, "generation {}: {}", r.generation, r.best_fitness);
        })
        .expect("valid config");

    // Caps cover every slot, so the ceiling is reached exactly.
    assert_eq!(result.best_fitness, ceiling);
}

#[test]
fn crossed_competencies_cost_at_least_one_per_slot() {
    // Tom only knows Physics, the only group only studies Chemistry.
    let slots = 8;
    let catalog = Catalog::new(
        vec!["Physics".into(), "Chemistry".into()],
        vec![Teacher::new("Tom", [true, false], slots)],
        vec![Group::new("A", [false, true])],
        slots,
    )
    .expect("valid catalog");
    let problem = TimetableProblem::new(&catalog);

    let result = problem
        .solve(&config(12, 60).with_seed(3))
        .expect("valid config");

    assert!(result.best_fitness <= -(slots as i64));
    assert_eq!(result.best_fitness, -(slots as i64));
}

#[test]
fn population_size_is_restored_every_generation() {
    let catalog = university();
    let problem = TimetableProblem::new(&catalog);
    let mut rng = create_rng(4);
    let mut sizes = Vec::new();

    problem
        .solve_with(&config(9, 40), &mut rng, |r| sizes.push(r.population_size))
        .expect("valid config");

    assert_eq!(sizes.len(), 41);
    assert!(sizes.iter().all(|&n| n == 9));
}

#[test]
fn university_search_reduces_penalty() {
    let catalog = university();
    let problem = TimetableProblem::new(&catalog);
    let config = GaConfig::default()
        .with_population_size(60)
        .with_max_generations(300)
        .with_seed(42)
        .with_parallel(false);

    let result = problem.solve(&config).expect("valid config");

    assert_eq!(result.best.len(), 15);
    assert_eq!(result.best.fitness(), evaluate(&result.best, &catalog));
    let first = result.fitness_history[0];
    let last = *result.fitness_history.last().expect("history is never empty");
    assert!(last > first, "no improvement over the seeded population: {first} -> {last}");
    assert!(
        result.best_fitness >= -8,
        "expected a near-feasible timetable, got {}",
        result.best_fitness
    );
    assert_eq!(result.best.rows(&catalog).count(), 15);
}

#[test]
fn same_seed_same_timetable() {
    let catalog = university();
    let problem = TimetableProblem::new(&catalog);
    let config = config(20, 50).with_seed(99);

    let a = problem.solve(&config).expect("valid config");
    let b = problem.solve(&config).expect("valid config");

    assert_eq!(a.best.genes(), b.best.genes());
    assert_eq!(a.fitness_history, b.fitness_history);
}

#[test]
fn invalid_inputs_are_rejected_up_front() {
    let empty = Catalog::new(Vec::new(), Vec::new(), Vec::new(), 5);
    assert!(matches!(empty, Err(Error::InvalidConfiguration(_))));

    let catalog = university();
    let problem = TimetableProblem::new(&catalog);
    let result = problem.solve(&GaConfig::default().with_population_size(0));
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}
