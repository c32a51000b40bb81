//! Fixed-step driver for any [`Solver`].
//!
//! The driver repeatedly calls [`Solver::step`] over equal intervals and
//! threads the solver state from one call into the next:
//!
//! ```text
//! t_n = t0 + n * dt
//! (y_n, state_n) = solver.step(t_{n-1}, t_n, y_{n-1}, state_{n-1})
//! ```
//!
//! # Example
//!
//! ```ignore
//! use strand_solvers::transient::fixed_step::{self, Config};
//!
//! let config = Config::spanning(0.0, 1.0, 100)?;
//! let solution = fixed_step::solve_unobserved(&method, 0.0, y0, &config)?;
//!
//! for point in &solution.history {
//!     println!("t={}: {:?}", point.t, point.y);
//! }
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Point, Solution, Status};

use strand_core::{Observer, Solver};

/// Integrates from `(t0, y0)` using a fixed step size.
///
/// # Algorithm
///
/// 1. Initialize the solver state at `(t0, y0)`.
/// 2. For each step:
///    - Compute the end time `t0 + n * dt`.
///    - Step the solver from the current point, passing the current state.
///    - Keep the returned state for the next step.
///    - Record the new point and emit an `Event` to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial condition and after
/// each step, and may return [`Action::StopEarly`] to terminate early.
///
/// # Errors
///
/// Returns [`Error::Step`] if the solver fails; the failing step aborts the
/// integration.
pub fn solve<S, Y, Obs>(
    solver: &S,
    t0: f64,
    y0: Y,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Y>, Error>
where
    S: Solver<Y>,
    Y: Clone,
    Obs: Observer<Event<Y>, Action>,
{
    let mut state = solver.init(t0, &y0);
    let initial = Point::new(t0, y0);

    let mut history = vec![initial.clone()];

    // Emit initial event.
    let event = Event {
        step: 0,
        point: initial.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial;

    for step in 1..=config.steps() {
        let t1 = config.time_at(t0, step);

        let (y1, next_state) = solver
            .step(current.t, t1, &current.y, &state)
            .map_err(|err| Error::step(step, err))?;
        state = next_state;

        let next = Point::new(t1, y1);
        history.push(next.clone());

        // Emit event to observer.
        let event = Event {
            step,
            point: next.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps: config.steps(),
    })
}

/// Integrates using a fixed step size without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns [`Error::Step`] if the solver fails.
pub fn solve_unobserved<S, Y>(
    solver: &S,
    t0: f64,
    y0: Y,
    config: &Config,
) -> Result<Solution<Y>, Error>
where
    S: Solver<Y>,
    Y: Clone,
{
    solve(solver, t0, y0, config, ())
}
