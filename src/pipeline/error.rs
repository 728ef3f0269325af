use std::io;

use thiserror::Error;

use crate::{
    aggregate::AggregateError,
    case::{field::FieldError, settings::MissingParameter},
    normalize::NormalizeError,
};

/// A condition fatal to one case but never to the run.
///
/// The pipeline catches every variant at the case boundary, logs it with
/// the case name, and moves on to the next case.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A scalar field file could not be read or parsed.
    #[error("field file `{name}`: {source}")]
    Field {
        name: String,
        #[source]
        source: FieldError,
    },

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    MissingParameter(#[from] MissingParameter),

    /// Fewer than two numeric snapshot directories exist.
    #[error("fewer than two numeric snapshot directories")]
    SnapshotUnavailable,

    /// The configured dependent field is not among the fields being read.
    #[error("dependent field `{0}` is not among the requested concentration fields")]
    UnknownDependentField(String),
}

/// Run-level failures.
///
/// Individual bad cases never surface here; the run only fails when there
/// was nothing to do or nothing succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The case identifier list was empty.
    #[error("no cases requested")]
    NoCases,

    /// Every requested case failed validation.
    #[error("no case produced a valid curve")]
    NoValidCases,
}
