//! Cross-case orchestration.
//!
//! The pipeline walks an explicit list of case identifiers, runs each one
//! through snapshot selection, field parsing, radial aggregation, and
//! normalization, and collects one labeled curve per valid case. A failing
//! case is logged and skipped; the run as a whole fails only when it was
//! given no cases or when none succeeded.

mod error;
pub mod label;

pub use error::{CaseError, PipelineError};

use std::path::Path;

use tracing::{debug, warn};

use crate::{
    aggregate::radial_average,
    case::{
        Case, field,
        settings::Settings,
        snapshot::{self, SnapshotPolicy},
    },
    normalize::{self, NormalizedCurve, PhysicalParameters, Scaling},
};

/// Names of the field files read from each snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    /// The axial-coordinate field, the grouping key.
    pub axial: String,
    /// Concentration fields to average per station.
    pub concentrations: Vec<String>,
    /// The cell-volume field used as averaging weight.
    pub weight: String,
}

impl Default for FieldSet {
    fn default() -> Self {
        Self {
            axial: "Cz".to_owned(),
            concentrations: vec!["CO2".to_owned(), "S".to_owned()],
            weight: "V".to_owned(),
        }
    }
}

/// Baseline for the per-case display label.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLabel {
    /// Settings parameter to compare across cases, e.g. the fiber radius.
    pub parameter: String,
    /// Baseline value the parameter is divided by.
    pub value: f64,
}

impl Default for ReferenceLabel {
    fn default() -> Self {
        Self {
            parameter: "R".to_owned(),
            value: 250e-6,
        }
    }
}

/// Pipeline configuration.
///
/// The defaults reproduce the verification-study setup: second-highest
/// snapshot, `Cz`/`CO2`/`S`/`V` field files, raw sorbent concentration as
/// the dependent axis, and labels relative to the 250 µm baseline radius.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub snapshot_policy: SnapshotPolicy,
    pub fields: FieldSet,
    /// Concentration field that becomes the curve's dependent axis. Must
    /// name one of `fields.concentrations`.
    pub dependent: String,
    pub scaling: Scaling,
    pub reference: ReferenceLabel,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            snapshot_policy: SnapshotPolicy::default(),
            fields: FieldSet::default(),
            dependent: "S".to_owned(),
            scaling: Scaling::default(),
            reference: ReferenceLabel::default(),
        }
    }
}

/// One valid case's output.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult {
    pub id: usize,
    /// Case directory name, e.g. `case_0003`.
    pub name: String,
    /// Display label, e.g. `2R`.
    pub label: String,
    pub curve: NormalizedCurve,
}

/// Processes every requested case under `root` and returns the curves of
/// the cases that survived validation, in input case-id order.
///
/// Per-case failures are logged at `warn` level with the case name and
/// cause, then skipped.
///
/// # Errors
///
/// Returns [`PipelineError::NoCases`] for an empty id list and
/// [`PipelineError::NoValidCases`] when every case failed.
pub fn run(
    root: &Path,
    case_ids: &[usize],
    config: &PipelineConfig,
) -> Result<Vec<CaseResult>, PipelineError> {
    if case_ids.is_empty() {
        return Err(PipelineError::NoCases);
    }

    let mut results = Vec::with_capacity(case_ids.len());
    for &id in case_ids {
        let case = Case::new(root, id);
        debug!(case = %case.name(), "processing");
        match process_case(&case, config) {
            Ok(result) => results.push(result),
            Err(cause) => warn!(case = %case.name(), %cause, "skipping case"),
        }
    }

    if results.is_empty() {
        return Err(PipelineError::NoValidCases);
    }
    Ok(results)
}

/// Runs the full per-case chain: settings, snapshot, fields, aggregation,
/// normalization, label.
fn process_case(case: &Case, config: &PipelineConfig) -> Result<CaseResult, CaseError> {
    let settings = Settings::load(case.settings_path())?;

    let snapshot = snapshot::select(case.dir(), config.snapshot_policy)?
        .ok_or(CaseError::SnapshotUnavailable)?;
    let snapshot_dir = case.snapshot_path(&snapshot);

    let read_field = |name: &str| {
        field::read(snapshot_dir.join(name)).map_err(|source| CaseError::Field {
            name: name.to_owned(),
            source,
        })
    };
    let axial = read_field(&config.fields.axial)?;
    let weight = read_field(&config.fields.weight)?;
    let mut concentrations = Vec::with_capacity(config.fields.concentrations.len());
    for name in &config.fields.concentrations {
        concentrations.push(read_field(name)?);
    }
    let views: Vec<&[f64]> = concentrations.iter().map(Vec::as_slice).collect();

    let profile = radial_average(&axial, &views, &weight)?;

    let dependent = config
        .fields
        .concentrations
        .iter()
        .position(|name| name == &config.dependent)
        .ok_or_else(|| CaseError::UnknownDependentField(config.dependent.clone()))?;
    let parameters = PhysicalParameters::from_settings(&settings)?;
    let curve = normalize::normalize(&profile, dependent, config.scaling, &parameters)?;

    let reference_value = settings.require(&config.reference.parameter)?;
    let label = label::derive(
        &config.reference.parameter,
        reference_value,
        config.reference.value,
    );

    Ok(CaseResult {
        id: case.id(),
        name: case.name(),
        label,
        curve,
    })
}
