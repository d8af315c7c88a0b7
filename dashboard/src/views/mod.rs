//! Pure view renderers
//!
//! Views take data in and produce a [`screen::Screen`] tree out; the only
//! side effect is the final print.

pub mod deployments;
pub mod progress;
pub mod repos;
pub mod screen;
