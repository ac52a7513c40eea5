pub mod samples;
pub mod curve;
