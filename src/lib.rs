#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod curve;
pub mod draw;
pub mod error;
pub mod export;
pub mod run;
pub mod sampler;

pub use crate::config::{Kernel, Parameters};
pub use crate::curve::{evaluate, ControlPoints, Point};
pub use crate::error::{Error, Result};
pub use crate::sampler::{sample, PointSampler};
