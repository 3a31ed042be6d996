//! Quantity normalization and unit-aware display formatting.

/// Rounds a quantity to two decimal places, half away from zero.
///
/// Scaling a recipe multiplies quantities by arbitrary floats; this keeps
/// the displayed values sane ("0.67 cups", not "0.6666666666666666 cups").
pub fn clean_float(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a quantity for display, dropping the fractional part when it is
/// integral ("2", "2.5").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Picks the singular or plural form of a name for a cleaned, scaled
/// quantity. Singular applies only when the quantity is exactly 1.
pub fn pluralize<'a>(singular: &'a str, plural: &'a str, cleaned_quantity: f64) -> &'a str {
    if cleaned_quantity == 1.0 { singular } else { plural }
}

/// Whether a resolved unit name is the generic counting placeholder, which
/// is suppressed entirely ("3 eggs" reads better than "3 units eggs").
pub fn is_generic_unit(unit_name: &str) -> bool {
    unit_name == "unit" || unit_name == "units"
}

/// Whether a maximum quantity should be rendered as the upper end of a
/// range: it must exist, sit strictly above the minimum, and still differ
/// from the minimum once both are scaled and cleaned.
pub fn should_display_max(min: f64, max: Option<f64>, scale: f64) -> bool {
    match max {
        Some(max) => max > min && clean_float(max * scale) != clean_float(min * scale),
        None => false,
    }
}

/// Renders a scaled quantity with its unit: `"1 cup"`, `"2.5 cups"`,
/// `"2 to 3 cloves"`, or a bare `"3"` when the unit is the generic
/// placeholder.
pub fn format_quantity(
    min: f64,
    max: Option<f64>,
    unit_singular: &str,
    unit_plural: &str,
    scale: f64,
) -> String {
    let cleaned_min = clean_float(min * scale);

    let mut rendered = format_number(cleaned_min);
    if should_display_max(min, max, scale) {
        if let Some(max) = max {
            rendered.push_str(" to ");
            rendered.push_str(&format_number(clean_float(max * scale)));
        }
    }

    let unit_name = pluralize(unit_singular, unit_plural, cleaned_min);
    if !is_generic_unit(unit_name) && !unit_name.is_empty() {
        rendered.push(' ');
        rendered.push_str(unit_name);
    }
    rendered
}
