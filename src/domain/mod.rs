// Domain layer: page model and ports (interfaces). No dependencies beyond std/serde/tokio types.

pub mod model;
pub mod ports;
