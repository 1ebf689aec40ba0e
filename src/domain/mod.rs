// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde/secrecy where the types need them.

pub mod model;
pub mod ports;
