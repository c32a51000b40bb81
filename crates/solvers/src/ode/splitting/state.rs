use std::any::Any;

use strand_core::ErasedState;

/// The per-solver states of a splitting method, nested by group.
///
/// Mirrors the shape of the [`SplittingMethod`](super::SplittingMethod) that
/// produced it: one entry per group, and within each group one erased state
/// per solver, in declaration order. A splitting state is created by `init`
/// and replaced by every `step`; it is never modified in place.
#[derive(Debug)]
pub struct SplittingState {
    groups: Vec<Vec<ErasedState>>,
}

impl SplittingState {
    /// Returns the number of solver states in each group.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the solver states of one group.
    #[must_use]
    pub fn group(&self, group: usize) -> Option<&[ErasedState]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Returns the state of one solver if it exists and is a `T`.
    #[must_use]
    pub fn get<T: Any>(&self, group: usize, solver: usize) -> Option<&T> {
        self.groups.get(group)?.get(solver)?.downcast_ref()
    }

    pub(super) fn groups(&self) -> &[Vec<ErasedState>] {
        &self.groups
    }
}

impl From<Vec<Vec<ErasedState>>> for SplittingState {
    fn from(groups: Vec<Vec<ErasedState>>) -> Self {
        Self { groups }
    }
}
