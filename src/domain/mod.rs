// Domain layer: the record model and the ports the server and loader plug into.

pub mod model;
pub mod ports;
