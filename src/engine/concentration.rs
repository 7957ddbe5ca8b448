/// mass + volume -> molar concentration, mol/L.
/// No input validation: zero volume yields inf, negative mass yields a
/// negative molarity. Impossible values are allowed to flow through so the
/// user can probe the model with them.
pub fn molarity(mass_g: f64, volume_l: f64, molar_mass_g_per_mol: f64) -> f64 {
    mass_g / (volume_l * molar_mass_g_per_mol)
}

/// molar concentration -> mass, g. Exact mathematical inverse of [`molarity`]
pub fn grams(molarity: f64, volume_l: f64, molar_mass_g_per_mol: f64) -> f64 {
    molarity * volume_l * molar_mass_g_per_mol
}
