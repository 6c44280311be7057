// Domain layer: the record type and the ports the app talks through.

pub mod model;
pub mod ports;
