// Domain layer: form models and the ports the controller is wired through.

pub mod model;
pub mod ports;
