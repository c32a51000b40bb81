use std::{fmt, ops::Add};

use strand_core::{DynSolver, ErasedState, Interpolation};

use super::{Error, StructureError};

/// A non-empty, ordered group of solvers that share one input.
///
/// Every solver in a group is stepped from the same value and the group's
/// result is the sum of their outputs. None of them sees a sibling's output.
///
/// Build a group with [`Group::new`] and extend it with [`Group::with`]:
///
/// ```ignore
/// let group = Group::new(ForwardEuler::new(advection)).with(ForwardEuler::new(source));
/// ```
pub struct Group<Y> {
    head: Box<dyn DynSolver<Y>>,
    tail: Vec<Box<dyn DynSolver<Y>>>,
}

impl<Y> Group<Y> {
    /// Creates a group containing a single solver.
    #[must_use]
    pub fn new(solver: impl DynSolver<Y> + 'static) -> Self {
        Self {
            head: Box::new(solver),
            tail: Vec::new(),
        }
    }

    /// Appends a solver to the group.
    #[must_use]
    pub fn with(mut self, solver: impl DynSolver<Y> + 'static) -> Self {
        self.tail.push(Box::new(solver));
        self
    }

    /// Creates a group from boxed solvers, or `None` if `solvers` is empty.
    #[must_use]
    pub fn from_boxed(solvers: Vec<Box<dyn DynSolver<Y>>>) -> Option<Self> {
        let mut solvers = solvers.into_iter();
        let head = solvers.next()?;
        Some(Self {
            head,
            tail: solvers.collect(),
        })
    }

    /// Returns the number of solvers in the group (always at least one).
    #[must_use]
    pub fn solver_count(&self) -> usize {
        1 + self.tail.len()
    }

    /// Iterates over the solvers in declaration order.
    pub fn solvers(&self) -> impl Iterator<Item = &(dyn DynSolver<Y> + 'static)> {
        std::iter::once(&*self.head).chain(self.tail.iter().map(|solver| &**solver))
    }

    /// Returns the recommended interpolation of the group's first solver.
    pub(super) fn interpolation(&self) -> Interpolation {
        self.head.interpolation()
    }

    pub(super) fn init(&self, t0: f64, y0: &Y) -> Vec<ErasedState> {
        self.solvers().map(|solver| solver.init_erased(t0, y0)).collect()
    }

    /// Steps every solver from `y` and sums their outputs.
    pub(super) fn step(
        &self,
        group: usize,
        t0: f64,
        t1: f64,
        y: &Y,
        states: &[ErasedState],
    ) -> Result<(Y, Vec<ErasedState>), Error>
    where
        Y: Add<Output = Y>,
    {
        let (head_state, tail_states) = match states.split_first() {
            Some(split) if states.len() == self.solver_count() => split,
            _ => {
                return Err(StructureError::GroupLength {
                    group,
                    expected: self.solver_count(),
                    found: states.len(),
                }
                .into());
            }
        };

        let (mut sum, head_next) = self
            .head
            .step_erased(t0, t1, y, head_state)
            .map_err(|err| Error::at(group, 0, err))?;

        let mut next = Vec::with_capacity(states.len());
        next.push(head_next);

        for (index, (solver, state)) in self.tail.iter().zip(tail_states).enumerate() {
            let (y_i, state_i) = solver
                .step_erased(t0, t1, y, state)
                .map_err(|err| Error::at(group, index + 1, err))?;
            sum = sum + y_i;
            next.push(state_i);
        }

        Ok((sum, next))
    }
}

impl<Y> fmt::Debug for Group<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.solvers().map(|solver| solver.state_type()))
            .finish()
    }
}
