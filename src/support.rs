//! Supporting utilities used across the pipeline.

pub mod scalar;
