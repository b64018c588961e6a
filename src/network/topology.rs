use crate::error::{Error, Result};

/// The fixed sizes of the input, hidden, and output layers.
///
/// Immutable after construction. Dimensions must be positive; `usize` already
/// rules out negative sizes, so the constructor only rejects zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    inputs: usize,
    hidden: usize,
    outputs: usize,
}

impl Topology {
    pub fn new(inputs: usize, hidden: usize, outputs: usize) -> Result<Topology> {
        if inputs == 0 || hidden == 0 || outputs == 0 {
            return Err(Error::InvalidTopology {
                inputs,
                hidden,
                outputs,
            });
        }
        Ok(Topology {
            inputs,
            hidden,
            outputs,
        })
    }

    pub fn inputs(&self) -> usize {
        self.inputs
    }

    pub fn hidden(&self) -> usize {
        self.hidden
    }

    pub fn outputs(&self) -> usize {
        self.outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_dimensions() {
        let t = Topology::new(2, 3, 1).unwrap();
        assert_eq!((t.inputs(), t.hidden(), t.outputs()), (2, 3, 1));
    }

    #[test]
    fn rejects_zero_dimensions() {
        for (i, h, o) in [(0, 1, 1), (1, 0, 1), (1, 1, 0)] {
            assert!(matches!(
                Topology::new(i, h, o),
                Err(Error::InvalidTopology { .. })
            ));
        }
    }
}
