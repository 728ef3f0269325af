//! # contactor-post
//!
//! Post-processing for fiber-contactor mass-transfer simulation cases.
//!
//! A *case* is one simulation run's output directory: a `settings` file of
//! `key value;` physical parameters plus time-step subdirectories holding
//! per-cell scalar field samples. This crate turns a set of such cases into
//! comparable curves:
//!
//! 1. [`case::snapshot`] picks the time-step directory to analyse.
//! 2. [`case::field`] parses the scalar field file format.
//! 3. [`aggregate`] groups cells sharing an axial station and computes
//!    volume-weighted radial averages per station.
//! 4. [`normalize`] rescales the axial axis with each case's own physical
//!    parameters so heterogeneous cases share one non-dimensional axis.
//! 5. [`pipeline`] orchestrates the above across a case list, skipping
//!    cases that fail validation and labeling the survivors.
//!
//! Provisioning case directories and rendering the curves are owned by
//! external collaborators; the pipeline only produces in-memory
//! [`normalize::NormalizedCurve`] values.

pub mod aggregate;
pub mod case;
pub mod normalize;
pub mod pipeline;
pub mod support;
