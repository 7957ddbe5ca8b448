///////////////////////TESTS////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::engine::calibration::{default_duration_grid, sweep_max_profit};
    use crate::engine::economics::{EconomicsModel, MAX_PROFIT_USD};
    use crate::engine::kinetics::{R, ReactionConditions};
    use crate::engine::scenario::Scenario;
    use crate::engine::substances::{DIMETHYLPYRAZINE, GLUCOSE, GLYCINE};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn canonical_conditions() -> ReactionConditions {
        ReactionConditions {
            reagent1_mass_g: 1.0,
            reagent2_mass_g: 1.0,
            volume_l: 0.001,
            temperature_c: 85.0,
            ph: 7.0,
            duration_min: 60.0,
        }
    }

    #[test]
    fn test_temperature_clamped_at_100() {
        let scenario = Scenario::default();
        let mut conditions = canonical_conditions();
        conditions.temperature_c = 150.0;
        let clamped = scenario.evaluate(conditions);
        conditions.temperature_c = 100.0;
        let at_boiling = scenario.evaluate(conditions);
        assert_eq!(clamped.reaction, at_boiling.reaction);
        assert_eq!(clamped.economics, at_boiling.economics);
    }

    #[test]
    fn test_no_lower_temperature_clamp() {
        // sub-zero temperatures pass through and slow the reaction down
        let scenario = Scenario::default();
        let mut conditions = canonical_conditions();
        conditions.temperature_c = -50.0;
        let frozen = scenario.evaluate(conditions);
        conditions.temperature_c = 0.0;
        let at_zero = scenario.evaluate(conditions);
        assert!(frozen.reaction.rate_constant < at_zero.reaction.rate_constant);
        assert!(frozen.reaction.rate_constant > 0.0);
    }

    /// the documented example run: 1 g glucose + 1 g glycine in 1 ml at
    /// 85 C, pH 7, 60 min. The whole pipeline must reproduce the closed-form
    /// formulas, not merely a plausible yield
    #[test]
    fn test_canonical_example_end_to_end() {
        let scenario = Scenario::default();
        let evaluation = scenario.evaluate(canonical_conditions());
        let reaction = evaluation.reaction;
        let economics = evaluation.economics;

        // closed-form pipeline recomputed by hand
        let m1: f64 = 1.0 / (0.001 * 180.16);
        let m2 = 1.0 / (0.001 * 75.07);
        let k = 2.482473416371322e16 * f64::exp(-120.0 / (R * (85.0 + 273.0)))
            / (1.0 + (10.0_f64 - 7.0).abs()).powi(2);
        let product_molarity = m1.min(m2) * (1.0 - f64::exp(-k * 60.0));
        let product_mass_g = product_molarity * 0.001 * 174.0;
        let expenses = 1.0 * 0.22 + 1.0 * 0.65 + 0.01 * 60.0;
        let revenue = product_mass_g * 5.0;
        let profit = revenue - expenses;

        assert_relative_eq!(reaction.reagent1_molarity, m1, max_relative = 1e-12);
        assert_relative_eq!(reaction.reagent2_molarity, m2, max_relative = 1e-12);
        assert_relative_eq!(reaction.rate_constant, k, max_relative = 1e-12);
        assert_relative_eq!(reaction.product_molarity, product_molarity, max_relative = 1e-12);
        assert_relative_eq!(reaction.product_mass_g, product_mass_g, max_relative = 1e-12);
        assert_relative_eq!(economics.expenses_usd, expenses, max_relative = 1e-12);
        assert_relative_eq!(economics.revenue_usd, revenue, max_relative = 1e-12);
        assert_relative_eq!(economics.profit_usd, profit, max_relative = 1e-12);
        assert_relative_eq!(
            economics.percent_of_max_profit,
            profit / MAX_PROFIT_USD * 100.0,
            max_relative = 1e-12
        );

        // spot values of the same run
        assert_abs_diff_eq!(reaction.product_mass_g, 0.241717, epsilon = 1e-6);
        assert_abs_diff_eq!(economics.expenses_usd, 1.47, epsilon = 1e-12);
        assert_abs_diff_eq!(economics.percent_of_max_profit, -6.882603, epsilon = 1e-6);
    }

    #[test]
    fn test_economics_model_override() {
        let mut scenario = Scenario::new(GLUCOSE, GLYCINE, DIMETHYLPYRAZINE);
        scenario.economics = EconomicsModel {
            cost_per_minute_usd: 0.0,
            max_profit_usd: 1.0,
        };
        let evaluation = scenario.evaluate(canonical_conditions());
        // with free process time the expenses are the reagents alone and the
        // percentage degenerates to profit * 100
        assert_abs_diff_eq!(evaluation.economics.expenses_usd, 0.87, epsilon = 1e-12);
        assert_relative_eq!(
            evaluation.economics.percent_of_max_profit,
            evaluation.economics.profit_usd * 100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_percent_of_max_profit_is_not_clamped() {
        let scenario = Scenario::default();
        // zero duration burns reagent money for nothing
        let mut conditions = canonical_conditions();
        conditions.duration_min = 0.0;
        let evaluation = scenario.evaluate(conditions);
        assert!(evaluation.economics.percent_of_max_profit < 0.0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let scenario = Scenario::default();
        let first = scenario.evaluate(canonical_conditions());
        let second = scenario.evaluate(canonical_conditions());
        assert_eq!(first, second);
    }

    /// the sweep behind the MAX_PROFIT_USD constant: temperature = 100 C,
    /// pH = 10, integer minutes 0..120, profit peaks at 13 min
    #[test]
    fn test_calibration_sweep_reproduces_max_profit() {
        let scenario = Scenario::default();
        let report = sweep_max_profit(&scenario, default_duration_grid());
        assert_abs_diff_eq!(report.max_profit_usd, MAX_PROFIT_USD, epsilon = 1e-6);
        assert_eq!(report.best_duration_min, 13.0);
    }
}
