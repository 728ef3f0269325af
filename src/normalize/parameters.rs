//! Physical parameters backing the non-dimensionalization.

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{DiffusionCoefficient, Length, Ratio, Velocity},
    length::meter,
    ratio::ratio,
    velocity::meter_per_second,
};

use super::NormalizeError;
use crate::{case::settings::Settings, support::scalar};

/// The per-case parameters that set the axial length scales.
///
/// Settings files store these as bare SI floats; here they become typed
/// quantities so the rescaling in [`PhysicalParameters::zeta`] is
/// dimension-checked and provably dimensionless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    /// Diffusion coefficient of CO₂ in the liquid phase.
    pub d_co2_l: DiffusionCoefficient,
    /// Average axial velocity of the liquid.
    pub u_avg: Velocity,
    /// Fiber radius.
    pub r: Length,
}

impl PhysicalParameters {
    /// Builds parameters from raw SI values.
    ///
    /// `u_avg` and `r` form the convective scale divisor, so both must be
    /// strictly positive; `d_co2_l` only needs to be finite.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidParameter`] naming the offending
    /// parameter.
    pub fn new(d_co2_l: f64, u_avg: f64, r: f64) -> Result<Self, NormalizeError> {
        let d_co2_l = scalar::finite(d_co2_l)
            .map_err(|source| NormalizeError::InvalidParameter {
                name: "D_CO2_l",
                source,
            })?;
        let u_avg = scalar::strictly_positive(u_avg)
            .map_err(|source| NormalizeError::InvalidParameter {
                name: "Uavg",
                source,
            })?;
        let r = scalar::strictly_positive(r).map_err(|source| {
            NormalizeError::InvalidParameter { name: "R", source }
        })?;
        Ok(Self {
            d_co2_l: DiffusionCoefficient::new::<square_meter_per_second>(d_co2_l),
            u_avg: Velocity::new::<meter_per_second>(u_avg),
            r: Length::new::<meter>(r),
        })
    }

    /// Extracts the required parameters (`D_CO2_l`, `Uavg`, `R`) from a
    /// case's settings.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::MissingParameter`] when a name is absent
    /// and [`NormalizeError::InvalidParameter`] when a value is unusable.
    pub fn from_settings(settings: &Settings) -> Result<Self, NormalizeError> {
        Self::new(
            settings.require("D_CO2_l")?,
            settings.require("Uavg")?,
            settings.require("R")?,
        )
    }

    /// Non-dimensional axial position for a raw axial coordinate in meters.
    ///
    /// `zeta = D_CO2_l * z / (Uavg * R^2)`, the ratio of the diffusive to
    /// the convective length scale.
    pub fn zeta(&self, axial: f64) -> f64 {
        let z = Length::new::<meter>(axial);
        let zeta: Ratio = self.d_co2_l * z / (self.u_avg * self.r * self.r);
        zeta.get::<ratio>()
    }
}
