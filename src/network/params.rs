use crate::error::{Error, Result};
use crate::math::Matrix;
use crate::network::topology::Topology;

/// Trained weights, biases, and per-feature normalization bounds, bound to a
/// network wholesale via [`ForwardNetwork::bind_parameters`].
///
/// The bounds travel with the weights: they were fixed when the network was
/// trained, and inputs are rescaled against them before every forward pass.
///
/// [`ForwardNetwork::bind_parameters`]: crate::network::ForwardNetwork::bind_parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Hidden-layer weights, one row per hidden unit (H×I).
    pub hidden_weights: Matrix,
    /// Hidden-layer bias, length H.
    pub hidden_bias: Vec<f64>,
    /// Output-layer weights, one row per output unit (O×H).
    pub output_weights: Matrix,
    /// Output-layer bias, length O.
    pub output_bias: Vec<f64>,
    /// Per-feature minimum seen during training, length I.
    pub input_min: Vec<f64>,
    /// Per-feature maximum seen during training, length I.
    pub input_max: Vec<f64>,
}

impl Parameters {
    /// All-zero storage sized to `topology`. Note that zeroed bounds are
    /// degenerate (`min == max`), so a network carrying these cannot predict
    /// until real parameters are bound.
    pub fn zeroed(topology: &Topology) -> Parameters {
        Parameters {
            hidden_weights: Matrix::zeros(topology.hidden(), topology.inputs()),
            hidden_bias: vec![0.0; topology.hidden()],
            output_weights: Matrix::zeros(topology.outputs(), topology.hidden()),
            output_bias: vec![0.0; topology.outputs()],
            input_min: vec![0.0; topology.inputs()],
            input_max: vec![0.0; topology.inputs()],
        }
    }

    /// Verifies every array's shape against `topology`, naming the first
    /// offender. Vectors are reported as n×1.
    pub(crate) fn check_shape(&self, topology: &Topology) -> Result<()> {
        let (i, h, o) = (topology.inputs(), topology.hidden(), topology.outputs());

        if self.hidden_weights.dim() != (h, i) {
            return Err(Error::dimensions(
                "hidden weights",
                (h, i),
                self.hidden_weights.dim(),
            ));
        }
        if self.hidden_bias.len() != h {
            return Err(Error::dimensions(
                "hidden bias",
                (h, 1),
                (self.hidden_bias.len(), 1),
            ));
        }
        if self.output_weights.dim() != (o, h) {
            return Err(Error::dimensions(
                "output weights",
                (o, h),
                self.output_weights.dim(),
            ));
        }
        if self.output_bias.len() != o {
            return Err(Error::dimensions(
                "output bias",
                (o, 1),
                (self.output_bias.len(), 1),
            ));
        }
        if self.input_min.len() != i {
            return Err(Error::dimensions(
                "input minima",
                (i, 1),
                (self.input_min.len(), 1),
            ));
        }
        if self.input_max.len() != i {
            return Err(Error::dimensions(
                "input maxima",
                (i, 1),
                (self.input_max.len(), 1),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_matches_topology() {
        let t = Topology::new(4, 3, 2).unwrap();
        let p = Parameters::zeroed(&t);
        assert_eq!(p.hidden_weights.dim(), (3, 4));
        assert_eq!(p.hidden_bias.len(), 3);
        assert_eq!(p.output_weights.dim(), (2, 3));
        assert_eq!(p.output_bias.len(), 2);
        assert_eq!(p.input_min.len(), 4);
        assert!(p.check_shape(&t).is_ok());
    }

    #[test]
    fn wrong_hidden_weight_shape_is_named() {
        // 2x3 hidden weights against an H=2, I=2 topology.
        let t = Topology::new(2, 2, 1).unwrap();
        let mut p = Parameters::zeroed(&t);
        p.hidden_weights = Matrix::zeros(2, 3);

        match p.check_shape(&t) {
            Err(Error::DimensionMismatch {
                name,
                expected_rows,
                expected_cols,
                actual_rows,
                actual_cols,
            }) => {
                assert_eq!(name, "hidden weights");
                assert_eq!((expected_rows, expected_cols), (2, 2));
                assert_eq!((actual_rows, actual_cols), (2, 3));
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn wrong_bias_length_is_reported_as_vector() {
        let t = Topology::new(2, 2, 1).unwrap();
        let mut p = Parameters::zeroed(&t);
        p.output_bias = vec![0.0; 3];

        match p.check_shape(&t) {
            Err(Error::DimensionMismatch { name, actual_rows, .. }) => {
                assert_eq!(name, "output bias");
                assert_eq!(actual_rows, 3);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn wrong_bounds_length_is_caught() {
        let t = Topology::new(3, 2, 1).unwrap();
        let mut p = Parameters::zeroed(&t);
        p.input_max = vec![1.0; 2];
        assert!(matches!(
            p.check_shape(&t),
            Err(Error::DimensionMismatch { name: "input maxima", .. })
        ));
    }
}
