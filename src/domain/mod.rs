// Domain layer: launch outcome and the delegate port. Only std, serde and anyhow.

pub mod model;
pub mod ports;
