use crate::engine::economics::{EconomicsModel, EconomicsResult};
use crate::engine::kinetics::{KineticModel, ReactionConditions, ReactionResult};
use crate::engine::substances::{DIMETHYLPYRAZINE, GLUCOSE, GLYCINE, Substance};
use log::info;
use serde::{Deserialize, Serialize};

/// THE STRUCT Scenario COLLECTS EVERYTHING NEEDED TO EVALUATE ONE SET OF
/// REACTION CONDITIONS: the two reagents, the product, the kinetic model and
/// the cost model. So this is the API of the whole engine - the front end
/// constructs conditions and calls [`Scenario::evaluate`], nothing else.
///
/// All configuration lives in this immutable struct; there is no
/// process-wide state, so concurrent callers may share one scenario freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub reagent1: Substance,
    pub reagent2: Substance,
    pub product: Substance,
    pub kinetics: KineticModel,
    pub economics: EconomicsModel,
}

/// both halves of one evaluation, consumed by the front end for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub reaction: ReactionResult,
    pub economics: EconomicsResult,
}

impl Default for Scenario {
    /// the canonical glucose + glycine -> 2,5-dimethylpyrazine scenario
    fn default() -> Self {
        Self::new(GLUCOSE, GLYCINE, DIMETHYLPYRAZINE)
    }
}

impl Scenario {
    /// scenario with default kinetic and cost models
    pub fn new(reagent1: Substance, reagent2: Substance, product: Substance) -> Self {
        Self {
            reagent1,
            reagent2,
            product,
            kinetics: KineticModel::default(),
            economics: EconomicsModel::default(),
        }
    }

    /// evaluate one set of conditions: clamp the temperature, run the
    /// kinetics, then the economics. Pure computation, no I/O, no prompts
    pub fn evaluate(&self, conditions: ReactionConditions) -> Evaluation {
        let conditions = conditions.clamp_temperature();
        let reaction = self
            .kinetics
            .run(&conditions, &self.reagent1, &self.reagent2, &self.product);
        let economics = self.economics.balance(
            &reaction,
            &conditions,
            &self.reagent1,
            &self.reagent2,
            &self.product,
        );
        info!(
            "evaluated {} + {} -> {}: {:.4} g of product, profit {:.4} USD ({:.1} % of max)",
            self.reagent1.name,
            self.reagent2.name,
            self.product.name,
            reaction.product_mass_g,
            economics.profit_usd,
            economics.percent_of_max_profit
        );
        Evaluation {
            reaction,
            economics,
        }
    }
}
