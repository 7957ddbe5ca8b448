use crate::engine::kinetics::{ReactionConditions, ReactionResult};
use crate::engine::substances::Substance;
use serde::{Deserialize, Serialize};

/// profit ceiling over the parameter space, USD. Precomputed offline by
/// sweeping the duration at temperature = 100 C and pH = 10, see
/// [`crate::engine::calibration`] for the routine that reproduces it
pub const MAX_PROFIT_USD: f64 = 3.798169;
/// running cost of the process, USD/min
pub const COST_PER_MINUTE_USD: f64 = 0.01;

/// cost model of the factory running the reaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicsModel {
    pub cost_per_minute_usd: f64,
    pub max_profit_usd: f64,
}

impl Default for EconomicsModel {
    fn default() -> Self {
        Self {
            cost_per_minute_usd: COST_PER_MINUTE_USD,
            max_profit_usd: MAX_PROFIT_USD,
        }
    }
}

/// expenses, revenue and profit of one reaction run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicsResult {
    pub expenses_usd: f64,
    pub revenue_usd: f64,
    pub profit_usd: f64,
    /// profit / MAX_PROFIT_USD * 100, not clamped: may exceed 100 or go
    /// negative
    pub percent_of_max_profit: f64,
}

impl EconomicsModel {
    /// expenses = reagent masses at their unit prices + running cost over
    /// the duration; revenue = product mass at the product price
    pub fn balance(
        &self,
        reaction: &ReactionResult,
        conditions: &ReactionConditions,
        reagent1: &Substance,
        reagent2: &Substance,
        product: &Substance,
    ) -> EconomicsResult {
        let expenses_usd = conditions.reagent1_mass_g * reagent1.unit_price_usd_per_g
            + conditions.reagent2_mass_g * reagent2.unit_price_usd_per_g
            + self.cost_per_minute_usd * conditions.duration_min;
        let revenue_usd = reaction.product_mass_g * product.unit_price_usd_per_g;
        let profit_usd = revenue_usd - expenses_usd;
        EconomicsResult {
            expenses_usd,
            revenue_usd,
            profit_usd,
            percent_of_max_profit: profit_usd / self.max_profit_usd * 100.0,
        }
    }
}
