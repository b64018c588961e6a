use crate::activation::ActivationFunction;
use crate::error::{Error, Result};
use crate::math::{rescale, Matrix, Range};
use crate::network::params::Parameters;
use crate::network::topology::Topology;
use crate::network::trace::{LayerKind, Trace};

/// A feedforward network evaluated left to right: normalize the input,
/// propagate through one hidden and one output layer of tanh units, then
/// rescale into the output range and round.
///
/// Construction allocates zeroed parameter storage; real weights are bound
/// wholesale with [`bind_parameters`](Self::bind_parameters). Until then the
/// zeroed normalization bounds are degenerate and `predict` reports
/// [`Error::DegenerateBounds`].
///
/// `predict` takes `&self` and allocates its scratch vectors per call, so a
/// bound network can be shared across threads for concurrent reads.
pub struct ForwardNetwork {
    topology: Topology,
    params: Parameters,
    normalized: Range,
    output: Range,
    activation: ActivationFunction,
}

impl ForwardNetwork {
    pub fn new(topology: Topology) -> ForwardNetwork {
        ForwardNetwork {
            topology,
            params: Parameters::zeroed(&topology),
            normalized: Range::new(-1.0, 1.0),
            output: Range::new(0.0, 1.0),
            activation: ActivationFunction::Tanh,
        }
    }

    /// Overrides the internal normalized range (default `[-1, 1]`).
    /// The range must not be degenerate.
    pub fn with_normalized_range(mut self, normalized: Range) -> ForwardNetwork {
        self.normalized = normalized;
        self
    }

    /// Overrides the final output range (default `[0, 1]`).
    pub fn with_output_range(mut self, output: Range) -> ForwardNetwork {
        self.output = output;
        self
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Replaces all weights, biases, and normalization bounds wholesale.
    /// Every shape is checked against the topology before anything is stored.
    pub fn bind_parameters(&mut self, params: Parameters) -> Result<()> {
        params.check_shape(&self.topology)?;
        self.params = params;
        Ok(())
    }

    /// Runs one forward pass and returns the `O` rounded outputs.
    ///
    /// Ties round half away from zero (`f64::round`), so under the default
    /// `[0, 1]` output range every prediction is 0 or 1.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<i64>> {
        self.predict_traced(input, &mut ())
    }

    /// Same as [`predict`](Self::predict), reporting each layer's weighted
    /// sums and activations to `trace` as they are computed.
    pub fn predict_traced(&self, input: &[f64], trace: &mut dyn Trace) -> Result<Vec<i64>> {
        let inputs = self.topology.inputs();
        if input.len() != inputs {
            return Err(Error::dimensions("input", (inputs, 1), (input.len(), 1)));
        }

        let normalized = self.normalize(input)?;

        let hidden = self.layer(
            LayerKind::Hidden,
            &normalized,
            &self.params.hidden_weights,
            &self.params.hidden_bias,
            trace,
        );
        let output = self.layer(
            LayerKind::Output,
            &hidden,
            &self.params.output_weights,
            &self.params.output_bias,
            trace,
        );

        Ok(output
            .into_iter()
            .map(|y| rescale(y, self.normalized, self.output).round() as i64)
            .collect())
    }

    /// Min-max rescales each feature into the normalized range, guarding
    /// against zero-width bounds.
    fn normalize(&self, input: &[f64]) -> Result<Vec<f64>> {
        input
            .iter()
            .enumerate()
            .map(|(feature, &x)| {
                let bounds = Range::new(self.params.input_min[feature], self.params.input_max[feature]);
                if bounds.is_degenerate() {
                    return Err(Error::DegenerateBounds {
                        feature,
                        bound: bounds.low,
                    });
                }
                Ok(rescale(x, bounds, self.normalized))
            })
            .collect()
    }

    /// One dense layer: bias-seeded weighted sums, then the activation sweep.
    fn layer(
        &self,
        kind: LayerKind,
        input: &[f64],
        weights: &Matrix,
        bias: &[f64],
        trace: &mut dyn Trace,
    ) -> Vec<f64> {
        let mut values: Vec<f64> = bias
            .iter()
            .enumerate()
            .map(|(unit, &b)| {
                b + input
                    .iter()
                    .zip(weights.row(unit))
                    .map(|(x, w)| x * w)
                    .sum::<f64>()
            })
            .collect();
        trace.weighted_sums(kind, &values);

        for v in &mut values {
            *v = self.activation.apply(*v);
        }
        trace.activations(kind, &values);

        values
    }
}
