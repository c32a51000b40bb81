use strand_core::BoxError;

/// Errors that can occur during fixed-step integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("step {step} failed: {source}")]
    Step {
        step: usize,
        #[source]
        source: BoxError,
    },
}

impl Error {
    pub(crate) fn step<E: std::error::Error + Send + Sync + 'static>(step: usize, err: E) -> Self {
        Self::Step {
            step,
            source: Box::new(err),
        }
    }
}
