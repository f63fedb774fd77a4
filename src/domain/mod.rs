// Domain layer: page data, read-only views and ports. No runtime dependencies beyond serde/chrono.

pub mod model;
pub mod ports;
