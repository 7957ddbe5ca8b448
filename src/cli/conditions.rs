use crate::engine::kinetics::ReactionConditions;

/// the six conditions the player sets, by the names used at the prompt
pub const CONDITION_KEYS: [&str; 6] = [
    "reagent1_grams",
    "reagent2_grams",
    "volume_L",
    "temperature_C",
    "pH",
    "duration_min",
];

/// partially filled set of conditions; every value starts unset and is
/// shown as NA until the player assigns it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingConditions {
    pub reagent1_grams: Option<f64>,
    pub reagent2_grams: Option<f64>,
    pub volume_l: Option<f64>,
    pub temperature_c: Option<f64>,
    pub ph: Option<f64>,
    pub duration_min: Option<f64>,
}

impl PendingConditions {
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "reagent1_grams" => self.reagent1_grams,
            "reagent2_grams" => self.reagent2_grams,
            "volume_L" => self.volume_l,
            "temperature_C" => self.temperature_c,
            "pH" => self.ph,
            "duration_min" => self.duration_min,
            _ => None,
        }
    }

    /// stores the value; false if the key is not a reaction condition
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        let slot = match key {
            "reagent1_grams" => &mut self.reagent1_grams,
            "reagent2_grams" => &mut self.reagent2_grams,
            "volume_L" => &mut self.volume_l,
            "temperature_C" => &mut self.temperature_c,
            "pH" => &mut self.ph,
            "duration_min" => &mut self.duration_min,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    pub fn is_complete(&self) -> bool {
        CONDITION_KEYS.iter().all(|key| self.get(key).is_some())
    }

    /// conditions for the engine, once every field is assigned
    pub fn build(&self) -> Option<ReactionConditions> {
        Some(ReactionConditions {
            reagent1_mass_g: self.reagent1_grams?,
            reagent2_mass_g: self.reagent2_grams?,
            volume_l: self.volume_l?,
            temperature_c: self.temperature_c?,
            ph: self.ph?,
            duration_min: self.duration_min?,
        })
    }
}

/// outcome of parsing one prompt line. Bad input becomes a Retry value that
/// drives the prompt loop around once more - no recursion, no panic
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Assigned { key: String, value: f64 },
    Quit,
    Retry(String),
}

/// parse a "condition = value" line, e.g. "duration_min = 60"
pub fn parse_assignment(line: &str) -> ParseOutcome {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") {
        return ParseOutcome::Quit;
    }
    let Some((key, value)) = line.split_once('=') else {
        return ParseOutcome::Retry(
            "expected 'condition = value', e.g. duration_min = 60".to_string(),
        );
    };
    let key = key.trim();
    let value = value.trim();
    if !CONDITION_KEYS.contains(&key) {
        return ParseOutcome::Retry(format!("'{}' is not a reaction condition", key));
    }
    match value.parse::<f64>() {
        Ok(value) => ParseOutcome::Assigned {
            key: key.to_string(),
            value,
        },
        Err(_) => ParseOutcome::Retry(format!("'{}' is not a number", value)),
    }
}
