#![cfg(feature = "highs")]

use u_facility::evaluation::AssignmentEvaluator;
use u_facility::formulation::{
    FormulationResult, FullConfig, FullFormulation, Formulation, ReducedFormulation,
    ReductionConfig,
};
use u_facility::generate::random_instance;
use u_facility::io::{format_solution, parse_instance};
use u_facility::models::{Customer, Facility, Instance};
use u_facility::solver::{HighsSolver, SolveStatus};
use u_facility::FacilityError;

fn scenario() -> (Vec<Facility>, Vec<Customer>) {
    let facilities = vec![
        Facility::new(0, 5.0, 10.0, 0.0, 0.0),
        Facility::new(1, 5.0, 10.0, 10.0, 0.0),
        Facility::new(2, 1.0, 100.0, 5.0, 5.0),
    ];
    let customers = vec![
        Customer::new(0, 3.0, 0.0, 1.0),
        Customer::new(1, 3.0, 10.0, 1.0),
        Customer::new(2, 3.0, 5.0, 4.0),
        Customer::new(3, 3.0, 5.0, 6.0),
    ];
    (facilities, customers)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

fn exact_full() -> FullFormulation {
    FullFormulation::new(FullConfig::default().with_relative_gap(0.0).with_time_limit(120.0))
}

fn exact_reduced(cap: usize, setup: usize, k: usize) -> ReducedFormulation {
    ReducedFormulation::new(
        ReductionConfig::default()
            .with_capacity_leaders(cap)
            .with_setup_leaders(setup)
            .with_neighbours(k)
            .with_relative_gap(0.0)
            .with_time_limit(120.0),
    )
}

/// Recomputes the objective and checks capacity and coupling.
fn audit(facilities: &[Facility], customers: &[Customer], result: &FormulationResult, weight: f64) {
    let evaluator = AssignmentEvaluator::new(facilities, customers).with_setup_weight(weight);
    let (eval, violations) = evaluator.evaluate(&result.assignment);
    assert!(violations.is_empty(), "violations: {violations:?}");
    assert!(
        close(eval.total, result.objective),
        "recomputed {} vs solver {}",
        eval.total,
        result.objective
    );
    for f in &eval.open_facilities {
        assert!(result.open_facilities.contains(f), "facility {f} serves but is closed");
    }
}

#[test]
fn test_leader_only_scenario() {
    let (facilities, customers) = scenario();
    let result = exact_reduced(1, 0, 0)
        .solve(&facilities, &customers, &HighsSolver::new())
        .expect("solvable");

    assert_eq!(result.status, SolveStatus::Optimal);
    assert_eq!(result.assignment.as_slice(), &[2, 2, 2, 2]);
    let expected = 1.0 + 2.0 * 41f64.sqrt() + 2.0;
    assert!(close(result.objective, expected));
    audit(&facilities, &customers, &result, 1.0);
}

#[test]
fn test_leader_only_scenario_half_weight() {
    let (facilities, customers) = scenario();
    let formulation = ReducedFormulation::new(
        ReductionConfig::default()
            .with_capacity_leaders(1)
            .with_setup_leaders(0)
            .with_neighbours(0)
            .with_setup_weight(0.5)
            .with_relative_gap(0.0),
    );
    let result = formulation
        .solve(&facilities, &customers, &HighsSolver::new())
        .expect("solvable");
    let expected = 0.5 + 2.0 * 41f64.sqrt() + 2.0;
    assert!(close(result.objective, expected));
    audit(&facilities, &customers, &result, 0.5);
}

#[test]
fn test_full_scenario_opens_all_three() {
    let (facilities, customers) = scenario();
    let result = exact_full()
        .solve(&facilities, &customers, &HighsSolver::new())
        .expect("solvable");

    assert!(result.is_optimal());
    assert_eq!(result.assignment.as_slice(), &[0, 1, 2, 2]);
    assert_eq!(result.open_facilities, vec![0, 1, 2]);
    assert!(close(result.objective, 15.0));
    audit(&facilities, &customers, &result, 1.0);
}

#[test]
fn test_default_reduction_covers_tiny_instance() {
    // Default leaders (2 + 5) already include all three facilities.
    let (facilities, customers) = scenario();
    let formulation = ReducedFormulation::new(ReductionConfig::default().with_relative_gap(0.0));
    let result = formulation
        .solve(&facilities, &customers, &HighsSolver::new())
        .expect("solvable");
    assert_eq!(result.num_edges, 12);
    assert!(close(result.objective, 15.0));
}

#[test]
fn test_reduced_never_beats_full() {
    for seed in 1..=3 {
        let instance = random_instance(8, 24, seed).expect("valid");
        let (facilities, customers) = (instance.facilities(), instance.customers());

        let full = exact_full()
            .solve(facilities, customers, &HighsSolver::new())
            .expect("full model solvable");
        assert!(full.is_optimal());
        audit(facilities, customers, &full, 1.0);

        match exact_reduced(1, 1, 2).solve(facilities, customers, &HighsSolver::new()) {
            Ok(reduced) => {
                assert!(reduced.is_optimal());
                assert!(reduced.num_edges < full.num_edges);
                assert!(
                    reduced.objective >= full.objective - 1e-6 * full.objective.abs().max(1.0),
                    "seed {seed}: reduced {} < full {}",
                    reduced.objective,
                    full.objective
                );
                audit(facilities, customers, &reduced, 1.0);
            }
            // Pruning may cut away every capacity-feasible assignment.
            Err(FacilityError::Infeasible { formulation }) => assert_eq!(formulation, "reduced"),
            Err(other) => panic!("seed {seed}: unexpected error {other}"),
        }
    }
}

#[test]
fn test_unpruned_reduction_matches_full() {
    let instance = random_instance(6, 18, 11).expect("valid");
    let (facilities, customers) = (instance.facilities(), instance.customers());

    let full = exact_full()
        .solve(facilities, customers, &HighsSolver::new())
        .expect("solvable");
    let reduced = exact_reduced(0, 0, facilities.len())
        .solve(facilities, customers, &HighsSolver::new())
        .expect("solvable");

    assert_eq!(reduced.num_edges, full.num_edges);
    assert!(close(reduced.objective, full.objective));
}

#[test]
fn test_insufficient_capacity_is_infeasible() {
    let facilities = vec![Facility::new(0, 1.0, 2.0, 0.0, 0.0)];
    let customers = vec![Customer::new(0, 3.0, 1.0, 0.0)];
    let err = exact_full()
        .solve(&facilities, &customers, &HighsSolver::new())
        .unwrap_err();
    assert_eq!(err, FacilityError::Infeasible { formulation: "full" });
}

#[test]
fn test_parse_solve_format() {
    let text = "3 4\n5 10 0 0\n5 10 10 0\n1 100 5 5\n3 0 1\n3 10 1\n3 5 4\n3 5 6\n";
    let instance: Instance = parse_instance(text).expect("valid");
    let result = exact_full()
        .solve_instance(&instance, &HighsSolver::new())
        .expect("solvable");
    assert_eq!(
        format_solution(result.objective, result.status, &result.assignment),
        "15.00 1\n0 1 2 2\n"
    );
}
