//! Operator splitting over groups of solvers.
//!
//! # Algorithm
//!
//! A [`SplittingMethod`] approximates one step of a combined system by
//! stepping its parts separately. Its solvers are arranged in an ordered list
//! of [`Group`]s:
//!
//! 1. Start from `y = y0`.
//! 2. For each group, in order:
//!    - Step every solver in the group over `[t0, t1]` from the same `y`,
//!      each with its own solver state.
//!    - Sum their outputs: `y_group = y_1 + y_2 + ...`.
//!    - Set `y = y_group` as the input to the next group.
//! 3. Return the final `y` and the new per-solver states.
//!
//! Groups are applied sequentially (Lie splitting when each group holds one
//! solver). Within a group, solvers are independent: none sees a sibling's
//! output, and their contributions combine additively. A single group with a
//! single solver behaves exactly like that solver.
//!
//! # Structure
//!
//! The group and solver layout is fixed when the method is built and its
//! shape is cached. Every [`SplittingState`] must have that same shape; a
//! mismatch is reported as [`StructureError`] before any solver runs.
//!
//! # Errors
//!
//! The first sub-solver failure aborts the whole step with [`Error::Solver`],
//! identifying the failing solver by group and position.

mod error;
mod group;
mod state;

#[cfg(test)]
mod tests;

pub use error::{BuildError, Error, StructureError};
pub use group::Group;
pub use state::SplittingState;

use std::{fmt, ops::Add};

use strand_core::{DynSolver, Interpolation, Solver};

/// A composite solver that applies groups of solvers in sequence.
///
/// See the [module documentation](self) for the stepping algorithm.
///
/// The recommended interpolation is inherited from the first solver of the
/// first group. The composite does not reconcile differing recommendations
/// across its solvers.
///
/// A `SplittingMethod` is itself a [`Solver`], so it can appear as a member of
/// another splitting method.
pub struct SplittingMethod<Y> {
    groups: Vec<Group<Y>>,
    shape: Vec<usize>,
    interpolation: Interpolation,
}

impl<Y> SplittingMethod<Y> {
    /// Creates a splitting method from an ordered list of groups.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoGroups`] if `groups` is empty.
    pub fn new(groups: Vec<Group<Y>>) -> Result<Self, BuildError> {
        let interpolation = groups.first().ok_or(BuildError::NoGroups)?.interpolation();
        let shape = groups.iter().map(Group::solver_count).collect();

        Ok(Self {
            groups,
            shape,
            interpolation,
        })
    }

    /// Creates a splitting method from a nested list of boxed solvers.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoGroups`] if `solvers` is empty, or
    /// [`BuildError::EmptyGroup`] for the first group without solvers.
    pub fn from_nested(solvers: Vec<Vec<Box<dyn DynSolver<Y>>>>) -> Result<Self, BuildError> {
        let groups = solvers
            .into_iter()
            .enumerate()
            .map(|(group, solvers)| {
                Group::from_boxed(solvers).ok_or(BuildError::EmptyGroup { group })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(groups)
    }

    /// Returns the groups in application order.
    #[must_use]
    pub fn groups(&self) -> &[Group<Y>] {
        &self.groups
    }

    /// Returns the number of solvers in each group.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Checks that a splitting state was shaped by this method.
    fn check_shape(&self, state: &SplittingState) -> Result<(), StructureError> {
        let groups = state.groups();

        if groups.len() != self.shape.len() {
            return Err(StructureError::GroupCount {
                expected: self.shape.len(),
                found: groups.len(),
            });
        }

        for (group, (&expected, states)) in self.shape.iter().zip(groups).enumerate() {
            if states.len() != expected {
                return Err(StructureError::GroupLength {
                    group,
                    expected,
                    found: states.len(),
                });
            }
        }

        Ok(())
    }
}

impl<Y> Solver<Y> for SplittingMethod<Y>
where
    Y: Clone + Add<Output = Y>,
{
    type State = SplittingState;
    type Error = Error;

    fn recommended_interpolation(&self) -> Interpolation {
        self.interpolation
    }

    fn init(&self, t0: f64, y0: &Y) -> SplittingState {
        self.groups
            .iter()
            .map(|group| group.init(t0, y0))
            .collect::<Vec<_>>()
            .into()
    }

    fn step(
        &self,
        t0: f64,
        t1: f64,
        y0: &Y,
        state: &SplittingState,
    ) -> Result<(Y, SplittingState), Error> {
        self.check_shape(state)?;

        let mut y = y0.clone();
        let mut next = Vec::with_capacity(self.groups.len());

        for (index, (group, states)) in self.groups.iter().zip(state.groups()).enumerate() {
            let (y_group, group_next) = group.step(index, t0, t1, &y, states)?;
            y = y_group;
            next.push(group_next);
        }

        Ok((y, next.into()))
    }
}

impl<Y> fmt::Debug for SplittingMethod<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplittingMethod")
            .field("groups", &self.groups)
            .field("interpolation", &self.interpolation)
            .finish()
    }
}
