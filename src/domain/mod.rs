// Domain layer: query/response models and ports (interfaces) implemented by adapters.

pub mod model;
pub mod ports;
