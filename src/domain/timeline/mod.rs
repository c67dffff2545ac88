//! Timeline aggregate: playback states, render instructions and the ports the
//! controller talks through.

pub mod ports;
pub mod value_objects;

pub use ports::*;
pub use value_objects::*;
