//! Force rules. Each returns a velocity delta per reference frame; the
//! integrator applies the frame scale.
pub mod dead_zone;
pub mod gravity;
pub mod pointer;
pub mod spring;
