use crate::model::Parameter;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Normalize a parameter name from a soil sheet to a lookup key.
///
/// Steps:
/// 1. Strip a short trailing symbol in parentheses: "Nitrogen (N)" -> "Nitrogen"
/// 2. Lowercase
/// 3. Replace spaces, hyphens, dots and other separators with underscores
/// 4. Collapse multiple underscores
pub fn normalize_parameter_name(raw: &str) -> String {
    let mut s = raw.trim();

    if let Some(idx) = s.rfind('(') {
        let after = &s[idx..];
        if idx > 0 && after.len() <= 8 && after.ends_with(')') {
            s = s[..idx].trim_end();
        }
    }

    let mut result = String::with_capacity(s.len());
    let mut prev_underscore = true; // skip leading separators
    for c in s.to_lowercase().chars() {
        if c.is_alphanumeric() {
            result.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            result.push('_');
            prev_underscore = true;
        }
    }
    if result.ends_with('_') {
        result.pop();
    }

    result
}

/// Resolve a sheet label to a parameter, if it names one.
pub fn resolve_parameter(raw: &str) -> Option<Parameter> {
    ALIASES.get(normalize_parameter_name(raw).as_str()).copied()
}

static ALIASES: LazyLock<HashMap<&'static str, Parameter>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    for p in Parameter::ALL {
        m.insert(p.key(), p);
    }

    m.insert("soil_ph", Parameter::Ph);
    m.insert("ph_value", Parameter::Ph);

    m.insert("n", Parameter::Nitrogen);
    m.insert("available_nitrogen", Parameter::Nitrogen);
    m.insert("available_n", Parameter::Nitrogen);
    m.insert("avail_n", Parameter::Nitrogen);

    m.insert("p", Parameter::Phosphorus);
    m.insert("phosphorous", Parameter::Phosphorus);
    m.insert("available_phosphorus", Parameter::Phosphorus);
    m.insert("available_p", Parameter::Phosphorus);
    m.insert("p2o5", Parameter::Phosphorus);

    m.insert("k", Parameter::Potassium);
    m.insert("potash", Parameter::Potassium);
    m.insert("available_potassium", Parameter::Potassium);
    m.insert("available_k", Parameter::Potassium);
    m.insert("k2o", Parameter::Potassium);

    m.insert("oc", Parameter::OrganicCarbon);
    m.insert("soc", Parameter::OrganicCarbon);
    m.insert("organic_c", Parameter::OrganicCarbon);
    m.insert("soil_organic_carbon", Parameter::OrganicCarbon);

    m.insert("ec", Parameter::ElectricalConductivity);
    m.insert("conductivity", Parameter::ElectricalConductivity);
    m.insert("salinity", Parameter::ElectricalConductivity);

    m.insert("soil_moisture", Parameter::Moisture);
    m.insert("moisture_content", Parameter::Moisture);
    m.insert("water_content", Parameter::Moisture);

    m.insert("sulphur", Parameter::Sulfur);
    m.insert("s", Parameter::Sulfur);
    m.insert("available_sulphur", Parameter::Sulfur);
    m.insert("available_sulfur", Parameter::Sulfur);

    m.insert("zn", Parameter::Zinc);
    m.insert("fe", Parameter::Iron);
    m.insert("mn", Parameter::Manganese);
    m.insert("b", Parameter::Boron);

    m
});
