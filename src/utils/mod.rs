// Utils compartidos

pub mod constants;
pub mod maplibre_ffi;

pub use constants::*;
