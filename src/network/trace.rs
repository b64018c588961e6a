use log::debug;

/// Which layer an observation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Hidden,
    Output,
}

/// Observer for intermediate vectors of a forward pass.
///
/// [`ForwardNetwork::predict_traced`] calls `weighted_sums` with each layer's
/// pre-activation sums and `activations` with the values after the squashing
/// function, in computation order (hidden before output). The observer is
/// decoupled from the numeric path: implementations see copies of the data
/// and cannot alter the prediction.
///
/// `()` is the no-op observer used by plain `predict`.
///
/// [`ForwardNetwork::predict_traced`]: crate::network::ForwardNetwork::predict_traced
pub trait Trace {
    fn weighted_sums(&mut self, layer: LayerKind, sums: &[f64]) {
        let _ = (layer, sums);
    }

    fn activations(&mut self, layer: LayerKind, values: &[f64]) {
        let _ = (layer, values);
    }
}

impl Trace for () {}

/// Forwards every observation to `log::debug!`.
///
/// Run the driver with `RUST_LOG=debug` to see the intermediate sums and
/// activations of each prediction.
pub struct LogTrace;

impl Trace for LogTrace {
    fn weighted_sums(&mut self, layer: LayerKind, sums: &[f64]) {
        debug!("{layer:?} weighted sums: {sums:?}");
    }

    fn activations(&mut self, layer: LayerKind, values: &[f64]) {
        debug!("{layer:?} activations: {values:?}");
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Test observer that keeps every callback in order.
    #[derive(Default)]
    pub struct RecordingTrace {
        pub events: Vec<(LayerKind, &'static str, Vec<f64>)>,
    }

    impl Trace for RecordingTrace {
        fn weighted_sums(&mut self, layer: LayerKind, sums: &[f64]) {
            self.events.push((layer, "sums", sums.to_vec()));
        }

        fn activations(&mut self, layer: LayerKind, values: &[f64]) {
            self.events.push((layer, "activations", values.to_vec()));
        }
    }
}
