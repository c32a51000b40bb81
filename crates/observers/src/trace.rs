//! Trace collection for solver events.
//!
//! See [`TraceObserver`] and [`Traceable`] for usage.

use strand_core::Observer;
use strand_solvers::transient::fixed_step;

/// Extracts traceable data from a driver event.
///
/// Implement this on your event type to use [`TraceObserver`] directly as an
/// observer (the "direct path"). Return `None` from [`x`][Traceable::x] to
/// skip the event entirely; return `None` in a trace slot to skip that trace
/// for the event.
///
/// Scalar [`fixed_step::Event`]s are traceable out of the box, with time on
/// the x-axis and the state as the single trace. For other state types, use
/// the closure path via [`TraceObserver::record`].
pub trait Traceable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

impl Traceable<1> for fixed_step::Event<f64> {
    fn x(&self) -> Option<f64> {
        Some(self.point.t)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.point.y)]
    }
}

/// An observer that collects named traces during a solve.
///
/// The const generic `N` is the number of traces. Create with
/// [`TraceObserver::new`], passing the trace names. Record data by either:
///
/// - **Direct path**: Implement [`Traceable<N>`][Traceable] on your event
///   type and pass `&mut TraceObserver` as the observer.
/// - **Closure path**: Wrap `&mut TraceObserver` in a closure and call
///   [`record`][TraceObserver::record] manually.
///
/// # Example - closure path
///
/// ```ignore
/// let mut obs = TraceObserver::<2>::new(["x", "v"]);
///
/// fixed_step::solve(&method, 0.0, y0, &config, |event: &fixed_step::Event<Array1<f64>>| {
///     let y = &event.point.y;
///     obs.record(event.point.t, [Some(y[0]), Some(y[1])]);
///     None
/// })?;
///
/// let positions = obs.trace("x");
/// ```
#[derive(Debug, Clone)]
pub struct TraceObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> TraceObserver<N> {
    /// Creates a new `TraceObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the recorded `[x, y]` points of the named trace.
    #[must_use]
    pub fn trace(&self, name: &str) -> Option<&[[f64; 2]]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.data[i].as_slice())
    }

    /// Consumes the observer, returning each trace name with its points.
    #[must_use]
    pub fn into_traces(self) -> Vec<(String, Vec<[f64; 2]>)> {
        self.names.into_iter().zip(self.data).collect()
    }
}

impl<const N: usize, E, A> Observer<E, A> for TraceObserver<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut TraceObserver<N>` to be passed to drivers that take an
/// observer by value, so the traces can be read after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut TraceObserver<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
