// Domain layer: numeral rules, value types and the service port. No I/O.

pub mod converter;
pub mod model;
pub mod ports;
pub mod validation;
