// Domain layer: models, reference data and ports. No I/O here.

pub mod catalog;
pub mod model;
pub mod ports;
