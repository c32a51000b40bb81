use strand_core::{BoxError, ErasedStepError};
use thiserror::Error;

/// Errors that can occur when building a splitting method.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("a splitting method needs at least one group")]
    NoGroups,

    #[error("group {group} has no solvers")]
    EmptyGroup { group: usize },
}

/// A splitting state whose nesting does not match its splitting method.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("splitting state has {found} groups, expected {expected}")]
    GroupCount { expected: usize, found: usize },

    #[error("group {group} has {found} solver states, expected {expected}")]
    GroupLength {
        group: usize,
        expected: usize,
        found: usize,
    },

    #[error("solver {solver} in group {group} expected state `{expected}`, found `{found}`")]
    StateType {
        group: usize,
        solver: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors that can occur during a splitting step.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("solver {solver} in group {group} failed: {source}")]
    Solver {
        group: usize,
        solver: usize,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Attaches the solver's position to an erased step error.
    pub(crate) fn at(group: usize, solver: usize, err: ErasedStepError) -> Self {
        match err {
            ErasedStepError::StateType { expected, found } => Self::Structure(
                StructureError::StateType {
                    group,
                    solver,
                    expected,
                    found,
                },
            ),
            ErasedStepError::Solver(source) => Self::Solver {
                group,
                solver,
                source,
            },
        }
    }
}
