use thiserror::Error;

/// error types of the calculation engine. The substance registry is closed,
/// so an unknown name means a misconfigured scenario rather than bad user
/// input at runtime
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Unknown substance: {0}")]
    UnknownSubstance(String),
}

// Define a struct to hold molecular and price data of a chemical species
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Substance {
    pub name: &'static str,
    pub molar_mass_g_per_mol: f64,
    pub unit_price_usd_per_g: f64,
}

/// D-glucose, the carbonyl reagent of the modeled Maillard reaction
pub const GLUCOSE: Substance = Substance {
    name: "glucose",
    molar_mass_g_per_mol: 180.16,
    unit_price_usd_per_g: 0.22,
};

/// glycine, the amine reagent
pub const GLYCINE: Substance = Substance {
    name: "glycine",
    molar_mass_g_per_mol: 75.07,
    unit_price_usd_per_g: 0.65,
};

/// 2,5-dimethylpyrazine, the bacon-aroma product
pub const DIMETHYLPYRAZINE: Substance = Substance {
    name: "dimethylpyrazine",
    molar_mass_g_per_mol: 174.0,
    unit_price_usd_per_g: 5.0,
};

// Define a list of all species known to the simulator
const SUBSTANCES: &[Substance] = &[GLUCOSE, GLYCINE, DIMETHYLPYRAZINE];

/// search the registry by substance name
pub fn lookup(name: &str) -> Result<&'static Substance, EngineError> {
    SUBSTANCES
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| EngineError::UnknownSubstance(name.to_owned()))
}
