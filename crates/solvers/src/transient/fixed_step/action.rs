/// Control actions supported by the fixed-step driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the driver early and return the solution so far.
    StopEarly,
}
