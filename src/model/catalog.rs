/// A raw catalog ingredient (e.g. "onion"), referenced by step elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub plural_name: String,
}

/// A catalog instrument (e.g. "whisk").
///
/// `display_in_summary_lists` controls whether the instrument appears in
/// aggregated equipment lists and in the "Using ..." clause of step text;
/// trivial implements (hands, "own two eyes") are catalogued with it unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub id: String,
    pub name: String,
    pub plural_name: String,
    pub display_in_summary_lists: bool,
}

/// A catalog vessel (e.g. "mixing bowl").
#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    pub id: String,
    pub name: String,
    pub plural_name: String,
    pub display_in_summary_lists: bool,
}

/// A measurement unit with singular and plural display names.
///
/// The literal names `"unit"`/`"units"` act as the generic counting
/// placeholder and are suppressed entirely during quantity formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementUnit {
    pub name: String,
    pub plural_name: String,
}

impl MeasurementUnit {
    /// The generic placeholder unit used when an ingredient is counted
    /// rather than measured.
    pub fn generic() -> Self {
        Self {
            name: "unit".to_string(),
            plural_name: "units".to_string(),
        }
    }
}

impl Default for MeasurementUnit {
    fn default() -> Self {
        Self::generic()
    }
}
