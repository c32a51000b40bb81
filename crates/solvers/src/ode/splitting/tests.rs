use std::convert::Infallible;

use approx::assert_relative_eq;
use ndarray::{Array1, array};
use strand_core::{DynSolver, Interpolation, Solver};
use thiserror::Error;

use crate::ode::{AdamsBashforth2, ForwardEuler, Rk4};

use super::{BuildError, Error, Group, SplittingMethod, StructureError};

// --- Test fixtures ---

/// Multiplies the state by a constant: `y1 = factor * y0`.
struct Scale {
    factor: f64,
}

impl Solver<f64> for Scale {
    type State = ();
    type Error = Infallible;

    fn recommended_interpolation(&self) -> Interpolation {
        Interpolation::Linear
    }

    fn init(&self, _t0: f64, _y0: &f64) {}

    fn step(&self, _t0: f64, _t1: f64, y0: &f64, _state: &()) -> Result<(f64, ()), Infallible> {
        Ok((self.factor * y0, ()))
    }
}

/// Adds the number of steps already taken: `y1 = y0 + count`.
struct Counter;

impl Solver<f64> for Counter {
    type State = u32;
    type Error = Infallible;

    fn recommended_interpolation(&self) -> Interpolation {
        Interpolation::FourthOrderPolynomial
    }

    fn init(&self, _t0: f64, _y0: &f64) -> u32 {
        0
    }

    fn step(&self, _t0: f64, _t1: f64, y0: &f64, count: &u32) -> Result<(f64, u32), Infallible> {
        Ok((y0 + f64::from(*count), count + 1))
    }
}

/// Returns its input unchanged and remembers the last input and interval.
struct Echo;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Seen {
    t0: f64,
    t1: f64,
    y0: f64,
}

impl Solver<f64> for Echo {
    type State = Option<Seen>;
    type Error = Infallible;

    fn recommended_interpolation(&self) -> Interpolation {
        Interpolation::CubicHermite
    }

    fn init(&self, _t0: f64, _y0: &f64) -> Option<Seen> {
        None
    }

    fn step(
        &self,
        t0: f64,
        t1: f64,
        y0: &f64,
        _state: &Option<Seen>,
    ) -> Result<(f64, Option<Seen>), Infallible> {
        Ok((*y0, Some(Seen { t0, t1, y0: *y0 })))
    }
}

/// Records the initial condition it was initialized with.
struct InitProbe;

impl Solver<f64> for InitProbe {
    type State = (f64, f64);
    type Error = Infallible;

    fn recommended_interpolation(&self) -> Interpolation {
        Interpolation::Linear
    }

    fn init(&self, t0: f64, y0: &f64) -> (f64, f64) {
        (t0, *y0)
    }

    fn step(
        &self,
        _t0: f64,
        _t1: f64,
        y0: &f64,
        state: &(f64, f64),
    ) -> Result<(f64, (f64, f64)), Infallible> {
        Ok((y0 + 1.0, *state))
    }
}

#[derive(Debug, Error)]
#[error("diverged")]
struct Diverged;

/// Always fails.
struct Failing;

impl Solver<f64> for Failing {
    type State = ();
    type Error = Diverged;

    fn recommended_interpolation(&self) -> Interpolation {
        Interpolation::Linear
    }

    fn init(&self, _t0: f64, _y0: &f64) {}

    fn step(&self, _t0: f64, _t1: f64, _y0: &f64, _state: &()) -> Result<(f64, ()), Diverged> {
        Err(Diverged)
    }
}

fn decay(_t: f64, y: &f64) -> f64 {
    -y
}

// --- Construction ---

#[test]
fn rejects_empty_solver_list() {
    let result = SplittingMethod::<f64>::new(vec![]);

    assert_eq!(result.err(), Some(BuildError::NoGroups));
}

#[test]
fn rejects_empty_nested_list() {
    let result = SplittingMethod::<f64>::from_nested(vec![]);

    assert_eq!(result.err(), Some(BuildError::NoGroups));
}

#[test]
fn rejects_empty_group() {
    let nested: Vec<Vec<Box<dyn DynSolver<f64>>>> =
        vec![vec![Box::new(Counter)], vec![], vec![Box::new(Echo)]];

    let result = SplittingMethod::from_nested(nested);

    assert_eq!(result.err(), Some(BuildError::EmptyGroup { group: 1 }));
}

#[test]
fn groups_keep_declaration_order() {
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Counter).with(Echo).with(Scale { factor: 1.0 }),
        Group::new(Scale { factor: 2.0 }),
    ])
    .unwrap();

    let counts: Vec<usize> = method.groups().iter().map(Group::solver_count).collect();
    let first: Vec<&str> = method.groups()[0]
        .solvers()
        .map(|solver| solver.state_type())
        .collect();

    assert_eq!(counts, method.shape());
    assert_eq!(counts, vec![3, 1]);
    assert_eq!(first[0], std::any::type_name::<u32>());
    assert_eq!(first[2], std::any::type_name::<()>());
}

#[test]
fn nested_list_matches_group_builder() {
    let nested: Vec<Vec<Box<dyn DynSolver<f64>>>> = vec![
        vec![Box::new(Scale { factor: 2.0 }), Box::new(Scale { factor: 3.0 })],
        vec![Box::new(Scale { factor: 0.5 })],
    ];
    let from_nested = SplittingMethod::from_nested(nested).unwrap();
    let built: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Scale { factor: 2.0 }).with(Scale { factor: 3.0 }),
        Group::new(Scale { factor: 0.5 }),
    ])
    .unwrap();

    let (a, _) = from_nested.step(0.0, 1.0, &1.0, &from_nested.init(0.0, &1.0)).unwrap();
    let (b, _) = built.step(0.0, 1.0, &1.0, &built.init(0.0, &1.0)).unwrap();

    // (2 + 3) * 0.5
    assert_relative_eq!(a, 2.5);
    assert_relative_eq!(b, 2.5);
    assert_eq!(from_nested.shape(), built.shape());
}

#[test]
fn inherits_interpolation_from_first_solver() {
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Counter).with(Echo),
        Group::new(Scale { factor: 1.0 }),
    ])
    .unwrap();

    assert_eq!(
        method.recommended_interpolation(),
        Interpolation::FourthOrderPolynomial
    );
}

// --- init ---

#[test]
fn init_mirrors_solver_list_shape() {
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Counter).with(Counter).with(Echo),
        Group::new(Echo),
        Group::new(Scale { factor: 1.0 }).with(Counter),
    ])
    .unwrap();

    let state = method.init(0.0, &1.0);

    assert_eq!(method.shape(), &[3, 1, 2]);
    assert_eq!(state.shape(), vec![3, 1, 2]);
    assert_eq!(state.group_count(), 3);
    assert_eq!(state.group(1).map(<[_]>::len), Some(1));
    assert!(state.group(3).is_none());
}

#[test]
fn init_uses_original_initial_condition_everywhere() {
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(InitProbe).with(InitProbe),
        Group::new(InitProbe),
    ])
    .unwrap();

    let state = method.init(2.5, &7.0);

    for (group, solver) in [(0, 0), (0, 1), (1, 0)] {
        assert_eq!(state.get::<(f64, f64)>(group, solver), Some(&(2.5, 7.0)));
    }
}

// --- step ---

#[test]
fn single_solver_matches_that_solver() {
    let euler = ForwardEuler::new(decay);
    let method = SplittingMethod::new(vec![Group::new(ForwardEuler::new(decay))]).unwrap();

    let (direct, ()) = euler.step(0.0, 0.1, &1.0, &()).unwrap();
    let (split, _) = method.step(0.0, 0.1, &1.0, &method.init(0.0, &1.0)).unwrap();

    assert_relative_eq!(split, direct);
}

#[test]
fn single_stateful_solver_matches_over_several_steps() {
    let ab2 = AdamsBashforth2::new(decay);
    let method = SplittingMethod::new(vec![Group::new(AdamsBashforth2::new(decay))]).unwrap();

    let mut direct = (1.0, ab2.init(0.0, &1.0));
    let mut split = (1.0, method.init(0.0, &1.0));
    for n in 0..5 {
        let t0 = f64::from(n) * 0.1;
        let t1 = t0 + 0.1;
        direct = ab2.step(t0, t1, &direct.0, &direct.1).unwrap();
        split = method.step(t0, t1, &split.0, &split.1).unwrap();

        assert_relative_eq!(split.0, direct.0);
        assert_eq!(split.1.get(0, 0), Some(&direct.1));
    }
}

#[test]
fn solvers_in_a_group_are_summed() {
    let euler = ForwardEuler::new(decay);
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(ForwardEuler::new(decay)).with(ForwardEuler::new(decay)),
    ])
    .unwrap();

    let (single, ()) = euler.step(0.0, 0.2, &3.0, &()).unwrap();
    let (doubled, _) = method.step(0.0, 0.2, &3.0, &method.init(0.0, &3.0)).unwrap();

    assert_relative_eq!(doubled, 2.0 * single);
}

#[test]
fn solvers_in_a_group_see_the_same_input() {
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Scale { factor: 10.0 }),
        Group::new(Echo).with(Scale { factor: 2.0 }).with(Echo),
    ])
    .unwrap();

    let (y1, state) = method.step(0.0, 1.0, &1.0, &method.init(0.0, &1.0)).unwrap();

    let seen = |solver| state.get::<Option<Seen>>(1, solver).copied().flatten();
    assert_eq!(seen(0).map(|s| s.y0), Some(10.0));
    assert_eq!(seen(2).map(|s| s.y0), Some(10.0));
    // 10 + 20 + 10
    assert_relative_eq!(y1, 40.0);
}

#[test]
fn later_group_sees_only_the_summed_output() {
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Scale { factor: 2.0 }).with(Scale { factor: 5.0 }),
        Group::new(Echo),
    ])
    .unwrap();

    let (y1, state) = method.step(0.0, 1.0, &1.0, &method.init(0.0, &1.0)).unwrap();

    let seen = state.get::<Option<Seen>>(1, 0).copied().flatten();
    assert_eq!(seen.map(|s| s.y0), Some(7.0));
    assert_relative_eq!(y1, 7.0);
}

#[test]
fn groups_apply_in_order() {
    let scale_then_count: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Scale { factor: 3.0 }),
        Group::new(Counter),
    ])
    .unwrap();
    let count_then_scale: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Counter),
        Group::new(Scale { factor: 3.0 }),
    ])
    .unwrap();

    let step_twice = |method: &SplittingMethod<f64>| {
        let (y, state) = method.step(0.0, 1.0, &1.0, &method.init(0.0, &1.0)).unwrap();
        method.step(1.0, 2.0, &y, &state).unwrap().0
    };

    // 1 → 3 → 3 + 0 = 3 → 9 → 9 + 1 = 10
    assert_relative_eq!(step_twice(&scale_then_count), 10.0);
    // 1 → 1 + 0 = 1 → 3 → 3 + 1 = 4 → 12
    assert_relative_eq!(step_twice(&count_then_scale), 12.0);
}

#[test]
fn every_solver_receives_the_step_interval() {
    let method = SplittingMethod::new(vec![Group::new(Echo), Group::new(Echo)]).unwrap();

    let (_, state) = method.step(0.25, 0.75, &1.0, &method.init(0.25, &1.0)).unwrap();

    for group in 0..2 {
        let seen = state.get::<Option<Seen>>(group, 0).copied().flatten();
        assert_eq!(seen.map(|s| (s.t0, s.t1)), Some((0.25, 0.75)));
    }
}

#[test]
fn threaded_state_differs_from_reused_state() {
    let method = SplittingMethod::new(vec![Group::new(Counter), Group::new(Counter)]).unwrap();
    let initial = method.init(0.0, &0.0);

    let (y1, state) = method.step(0.0, 1.0, &0.0, &initial).unwrap();
    let (threaded, next) = method.step(1.0, 2.0, &y1, &state).unwrap();
    let (reused, _) = method.step(1.0, 2.0, &y1, &initial).unwrap();

    assert_relative_eq!(y1, 0.0);
    assert_relative_eq!(threaded, 2.0);
    assert_relative_eq!(reused, 0.0);
    assert_eq!(next.get::<u32>(0, 0), Some(&2));
    assert_eq!(next.get::<u32>(1, 0), Some(&2));
}

#[test]
fn step_does_not_touch_the_input_state() {
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![Group::new(Counter)]).unwrap();
    let initial = method.init(0.0, &0.0);

    let _ = method.step(0.0, 1.0, &0.0, &initial).unwrap();
    let _ = method.step(1.0, 2.0, &0.0, &initial).unwrap();

    assert_eq!(initial.get::<u32>(0, 0), Some(&0));
}

#[test]
fn backward_interval_is_accepted() {
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Rk4::new(decay)),
        Group::new(AdamsBashforth2::new(decay)),
    ])
    .unwrap();

    let (y1, _) = method.step(1.0, 0.5, &1.0, &method.init(1.0, &1.0)).unwrap();

    assert!(y1 > 1.0);
}

#[test]
fn steps_array_state() {
    // Rotation and damping split into two groups.
    let rotate = |_t: f64, y: &Array1<f64>| array![y[1], -y[0]];
    let damp = |_t: f64, y: &Array1<f64>| array![-y[0], 0.0];
    let method = SplittingMethod::new(vec![
        Group::new(ForwardEuler::new(rotate)),
        Group::new(ForwardEuler::new(damp)),
    ])
    .unwrap();
    let y0 = array![1.0, 0.0];

    let (y1, _) = method.step(0.0, 0.1, &y0, &method.init(0.0, &y0)).unwrap();

    // rotate: [1, -0.1]; damp: [0.9, -0.1]
    assert_relative_eq!(y1[0], 0.9);
    assert_relative_eq!(y1[1], -0.1);
}

#[test]
fn splitting_methods_nest() {
    let inner =
        SplittingMethod::new(vec![Group::new(Counter), Group::new(Scale { factor: 2.0 })]).unwrap();
    let outer = SplittingMethod::new(vec![Group::new(inner).with(Echo)]).unwrap();

    let initial = outer.init(0.0, &1.0);
    let (y1, state) = outer.step(0.0, 1.0, &1.0, &initial).unwrap();
    let (y2, _) = outer.step(1.0, 2.0, &y1, &state).unwrap();

    // step 1: inner (1 + 0) * 2 = 2, echo 1 → 3
    assert_relative_eq!(y1, 3.0);
    // step 2: inner (3 + 1) * 2 = 8, echo 3 → 11
    assert_relative_eq!(y2, 11.0);
    assert_eq!(state.shape(), vec![2]);
}

// --- Errors ---

#[test]
fn wrong_group_count_is_rejected() {
    let method = SplittingMethod::new(vec![Group::new(Counter), Group::new(Counter)]).unwrap();
    let other: SplittingMethod<f64> = SplittingMethod::new(vec![Group::new(Counter)]).unwrap();

    let err = method
        .step(0.0, 1.0, &0.0, &other.init(0.0, &0.0))
        .expect_err("shape should not match");

    assert!(matches!(
        err,
        Error::Structure(StructureError::GroupCount {
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn wrong_group_length_is_rejected() {
    let method =
        SplittingMethod::new(vec![Group::new(Counter), Group::new(Counter).with(Counter)]).unwrap();
    let other = SplittingMethod::new(vec![Group::new(Counter), Group::new(Counter)]).unwrap();

    let err = method
        .step(0.0, 1.0, &0.0, &other.init(0.0, &0.0))
        .expect_err("shape should not match");

    assert!(matches!(
        err,
        Error::Structure(StructureError::GroupLength {
            group: 1,
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn wrong_state_type_is_rejected() {
    let method =
        SplittingMethod::new(vec![Group::new(Scale { factor: 1.0 }).with(Counter)]).unwrap();
    let other = SplittingMethod::new(vec![Group::new(Scale { factor: 1.0 }).with(Echo)]).unwrap();

    let err = method
        .step(0.0, 1.0, &0.0, &other.init(0.0, &0.0))
        .expect_err("state type should not match");

    match err {
        Error::Structure(StructureError::StateType { group, solver, .. }) => {
            assert_eq!((group, solver), (0, 1));
        }
        unexpected => panic!("unexpected error: {unexpected}"),
    }
}

#[test]
fn shape_is_checked_before_any_solver_runs() {
    // The failing solver in group 0 would report first if it ran.
    let method = SplittingMethod::new(vec![Group::new(Failing), Group::new(Counter)]).unwrap();
    let other: SplittingMethod<f64> = SplittingMethod::new(vec![Group::new(Failing)]).unwrap();

    let err = method
        .step(0.0, 1.0, &0.0, &other.init(0.0, &0.0))
        .expect_err("shape should not match");

    assert!(matches!(err, Error::Structure(_)));
}

#[test]
fn solver_failure_aborts_the_step() {
    let method: SplittingMethod<f64> = SplittingMethod::new(vec![
        Group::new(Counter),
        Group::new(Echo).with(Failing),
        Group::new(Counter),
    ])
    .unwrap();

    let err = method
        .step(0.0, 1.0, &0.0, &method.init(0.0, &0.0))
        .expect_err("second group should fail");

    match &err {
        Error::Solver { group, solver, .. } => assert_eq!((*group, *solver), (1, 1)),
        Error::Structure(_) => panic!("expected a solver error"),
    }
    assert_eq!(err.to_string(), "solver 1 in group 1 failed: diverged");
}
