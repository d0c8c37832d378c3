//! Domain layer
//!
//! Clinic records and the port through which services read them.
//! - `entities`: the clinic model and district parsing
//! - `ports`: the read-only repository trait

pub mod entities;
pub mod ports;
