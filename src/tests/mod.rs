//! navlib test modules
pub mod toolkit;

mod kepler;
