// Domain layer: core models, the static office table and ports (interfaces).

pub mod model;
pub mod offices;
pub mod ports;
