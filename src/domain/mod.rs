// Domain layer: inventory vocabulary and the storage/config ports.

pub mod model;
pub mod ports;
