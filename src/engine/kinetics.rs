use crate::engine::concentration::{grams, molarity};
use crate::engine::substances::Substance;
use log::debug;
use serde::{Deserialize, Serialize};

/// universal gas constant, kJ K-1 mol-1
pub const R: f64 = 8.314e-3;
/// the rate optimum; deviation in either direction attenuates the rate
pub const OPTIMAL_PH: f64 = 10.0;
/// the reaction is run in water, everything above boiling is clamped down.
/// There is no lower clamp: sub-zero temperatures pass through unchanged
pub const MAX_TEMPERATURE_C: f64 = 100.0;

/// user-chosen conditions of a single reaction run. All fields are plain
/// floats and none of them is forced non-negative: negative grams or
/// minutes are legal inputs whose non-physical outputs are informative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionConditions {
    pub reagent1_mass_g: f64,
    pub reagent2_mass_g: f64,
    pub volume_l: f64,
    pub temperature_c: f64,
    pub ph: f64,
    pub duration_min: f64,
}

impl ReactionConditions {
    /// upper temperature clamp at 100 C, applied before any kinetics
    pub fn clamp_temperature(mut self) -> Self {
        if self.temperature_c > MAX_TEMPERATURE_C {
            self.temperature_c = MAX_TEMPERATURE_C;
        }
        self
    }
}

/// everything the kinetics step derives from the conditions. Recomputed on
/// every call, never cached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionResult {
    pub reagent1_molarity: f64,
    pub reagent2_molarity: f64,
    /// pH-adjusted rate constant, min-1
    pub rate_constant: f64,
    pub product_molarity: f64,
    pub product_mass_g: f64,
}

/// Arrhenius parameters of the reaction. The defaults model the Maillard
/// reaction of glucose with glycine; the collision frequency was calculated
/// from the imine formation rate constant 1.4e-5 at 293 K
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticModel {
    /// activation energy, kJ/mol
    pub activation_energy_kj_per_mol: f64,
    /// pre-exponential factor, min-1
    pub collision_frequency_per_min: f64,
}

impl Default for KineticModel {
    fn default() -> Self {
        Self {
            activation_energy_kj_per_mol: 120.0,
            collision_frequency_per_min: 2.482473416371322e16,
        }
    }
}

impl KineticModel {
    pub fn new(activation_energy_kj_per_mol: f64, collision_frequency_per_min: f64) -> Self {
        Self {
            activation_energy_kj_per_mol,
            collision_frequency_per_min,
        }
    }

    /// raw Arrhenius rate constant k = A * exp(-Ea/(R*T)), min-1.
    /// The temperature clamp is the caller's concern, not applied here
    pub fn rate_constant(&self, temperature_c: f64) -> f64 {
        let t_kelvin = temperature_c + 273.0;
        self.collision_frequency_per_min
            * f64::exp(-self.activation_energy_kj_per_mol / (R * t_kelvin))
    }

    /// rate constant attenuated for pH away from the optimum pH = 10:
    /// k / (1 + |10 - pH|)^2. The denominator is always >= 1 so extreme pH
    /// drives the constant toward zero but never changes its sign
    pub fn ph_adjusted_rate_constant(&self, temperature_c: f64, ph: f64) -> f64 {
        self.rate_constant(temperature_c) / (1.0 + (OPTIMAL_PH - ph).abs()).powi(2)
    }

    /// single-shot closed-form run: initial molarities of both reagents,
    /// irreversible first-order consumption of the limiting one over the
    /// duration, product mass by back-conversion. Invalid numerics (zero
    /// volume, negative duration) produce inf/NaN/negative results instead
    /// of errors
    pub fn run(
        &self,
        conditions: &ReactionConditions,
        reagent1: &Substance,
        reagent2: &Substance,
        product: &Substance,
    ) -> ReactionResult {
        let reagent1_molarity = molarity(
            conditions.reagent1_mass_g,
            conditions.volume_l,
            reagent1.molar_mass_g_per_mol,
        );
        let reagent2_molarity = molarity(
            conditions.reagent2_mass_g,
            conditions.volume_l,
            reagent2.molar_mass_g_per_mol,
        );
        let rate_constant =
            self.ph_adjusted_rate_constant(conditions.temperature_c, conditions.ph);
        debug!(
            "T = {} C, pH = {} => k = {} min^-1",
            conditions.temperature_c, conditions.ph, rate_constant
        );
        // as duration -> inf the product approaches full conversion of the
        // scarcer reagent
        let limiting_at_0 = reagent1_molarity.min(reagent2_molarity);
        let product_molarity =
            limiting_at_0 * (1.0 - f64::exp(-rate_constant * conditions.duration_min));
        let product_mass_g = grams(
            product_molarity,
            conditions.volume_l,
            product.molar_mass_g_per_mol,
        );
        ReactionResult {
            reagent1_molarity,
            reagent2_molarity,
            rate_constant,
            product_molarity,
            product_mass_g,
        }
    }
}
