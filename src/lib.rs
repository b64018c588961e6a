pub mod activation;
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod network;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use config::{NetworkConfig, WeightFiles};
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use math::rescale::{rescale, Range};
pub use network::network::ForwardNetwork;
pub use network::params::Parameters;
pub use network::topology::Topology;
pub use network::trace::{LayerKind, LogTrace, Trace};
