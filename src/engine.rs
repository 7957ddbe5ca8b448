/// static registry of the chemical species known to the simulator:
/// molar masses and unit prices of glucose, glycine and 2,5-dimethylpyrazine
pub mod substances;
/// mass + volume <-> molar concentration conversions
pub mod concentration;
/// Arrhenius rate constant with pH attenuation and the closed-form
/// first-order limiting-reagent yield
pub mod kinetics;
/// expenses, revenue, profit and percent of the theoretical maximum
pub mod economics;
/// the single entry point of the engine
/// # Examples
/// ```
/// use MaiSim::engine::kinetics::ReactionConditions;
/// use MaiSim::engine::scenario::Scenario;
///
/// let scenario = Scenario::default();
/// let evaluation = scenario.evaluate(ReactionConditions {
///     reagent1_mass_g: 1.0,
///     reagent2_mass_g: 1.0,
///     volume_l: 0.001,
///     temperature_c: 85.0,
///     ph: 7.0,
///     duration_min: 60.0,
/// });
/// println!("product: {:.2} g", evaluation.reaction.product_mass_g);
/// println!("percent of max profit: {:.0}", evaluation.economics.percent_of_max_profit);
/// assert!(evaluation.reaction.product_mass_g > 0.0);
/// ```
pub mod scenario;
/// offline sweep that documents where the MAX_PROFIT_USD constant comes from
pub mod calibration;
/// tests
pub mod scenario_tests;
