pub mod network;
pub mod params;
pub mod topology;
pub mod trace;

pub use network::ForwardNetwork;
pub use params::Parameters;
pub use topology::Topology;
pub use trace::{LayerKind, LogTrace, Trace};
