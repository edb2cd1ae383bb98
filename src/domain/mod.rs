// Domain layer: process and version models plus the process-runner port.

pub mod model;
pub mod ports;
