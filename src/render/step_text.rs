//! Natural-language instruction text for recipe steps.
//!
//! Composes, per step, a sentence of the shape
//! `"Using {tools}, {Preparation} {ingredients} {vessels} to yield {products}."`
//! from the step's structure, falling back to the step's verbatim
//! instruction text when there is nothing to compose from.

use super::english::{capitalize, join_english};
use crate::aggregate::step_instruments;
use crate::format::{clean_float, format_number, pluralize, should_display_max};
use crate::graph::ProductIndex;
use crate::model::{
    IngredientSource, InstrumentSource, ProductKind, QuantityRange, Recipe, RecipeStep,
    RecipeStepIngredient, RecipeStepInstrument, RecipeStepVessel, VesselSource,
};

/// Name, quantity, and provenance of one step element, flattened out of
/// the per-kind element types for phrase building.
struct ElementDisplay<'a> {
    singular: &'a str,
    plural: &'a str,
    quantity: QuantityRange,
    product_id: Option<&'a str>,
}

impl<'a> From<&'a RecipeStepIngredient> for ElementDisplay<'a> {
    fn from(ingredient: &'a RecipeStepIngredient) -> Self {
        match &ingredient.source {
            IngredientSource::Catalog(catalog) => Self {
                singular: &catalog.name,
                plural: &catalog.plural_name,
                quantity: ingredient.quantity,
                product_id: None,
            },
            IngredientSource::Product { id, name } => Self {
                singular: name,
                plural: name,
                quantity: ingredient.quantity,
                product_id: Some(id),
            },
        }
    }
}

impl<'a> From<&'a RecipeStepInstrument> for ElementDisplay<'a> {
    fn from(instrument: &'a RecipeStepInstrument) -> Self {
        match &instrument.source {
            InstrumentSource::Catalog(catalog) => Self {
                singular: &catalog.name,
                plural: &catalog.plural_name,
                quantity: instrument.quantity,
                product_id: None,
            },
            InstrumentSource::Product { id, name } => Self {
                singular: name,
                plural: name,
                quantity: instrument.quantity,
                product_id: Some(id),
            },
        }
    }
}

impl<'a> From<&'a RecipeStepVessel> for ElementDisplay<'a> {
    fn from(vessel: &'a RecipeStepVessel) -> Self {
        match &vessel.source {
            VesselSource::Catalog(catalog) => Self {
                singular: &catalog.name,
                plural: &catalog.plural_name,
                quantity: vessel.quantity,
                product_id: None,
            },
            VesselSource::Product { id, name } => Self {
                singular: name,
                plural: name,
                quantity: vessel.quantity,
                product_id: Some(id),
            },
        }
    }
}

/// Renders one element as a phrase.
///
/// Product-backed elements read `"the {name} from step #{N}"` (with `-1`
/// standing in for an unresolvable back-reference) and never show a
/// quantity. Catalog elements read `"a {name}"` at exactly 1, and
/// `"{min}{ to {max}} {plural name}"` otherwise.
fn element_phrase(
    element: &ElementDisplay<'_>,
    products: &ProductIndex,
    scale: f64,
    preposition: Option<&str>,
) -> String {
    let lead_in = |article: &str| match preposition {
        Some(preposition) => format!("{} {}", preposition, article),
        None => article.to_string(),
    };

    if let Some(product_id) = element.product_id {
        return format!(
            "{} {} from step #{}",
            lead_in("the"),
            element.singular,
            products.display_number(product_id)
        );
    }

    let cleaned_min = clean_float(element.quantity.min * scale);
    if cleaned_min == 1.0 {
        return format!("{} {}", lead_in("a"), element.singular);
    }

    let mut phrase = format_number(cleaned_min);
    if should_display_max(element.quantity.min, element.quantity.max, scale) {
        if let Some(max) = element.quantity.max {
            phrase.push_str(" to ");
            phrase.push_str(&format_number(clean_float(max * scale)));
        }
    }
    phrase.push(' ');
    phrase.push_str(pluralize(element.singular, element.plural, cleaned_min));
    phrase
}

/// Whether the step's instruments belong in the "Using ..." summary
/// clause: true only when every instrument on the step either has no
/// catalog reference or is marked for summary lists.
fn instruments_are_summary_listable(step: &RecipeStep) -> bool {
    step.instruments
        .iter()
        .all(|instrument| match instrument.catalog() {
            Some(catalog) => catalog.display_in_summary_lists,
            None => true,
        })
}

/// The "to yield ..." clause: the step's products grouped by kind.
fn yield_clause(step: &RecipeStep) -> String {
    let names_of = |kind: ProductKind| -> Vec<&str> {
        step.products
            .iter()
            .filter(|product| product.kind == kind)
            .map(|product| product.name.as_str())
            .collect()
    };

    let mut groups: Vec<String> = Vec::new();

    let ingredients = names_of(ProductKind::Ingredient);
    if !ingredients.is_empty() {
        let noun = if ingredients.len() == 1 {
            "ingredient"
        } else {
            "ingredients"
        };
        groups.push(format!("the {} {}", noun, join_english(&ingredients)));
    }

    for instrument in names_of(ProductKind::Instrument) {
        groups.push(format!("a {}", instrument));
    }
    for vessel in names_of(ProductKind::Vessel) {
        groups.push(format!("a {}", vessel));
    }

    join_english(&groups)
}

fn compose_step_text(products: &ProductIndex, step: &RecipeStep, scale: f64) -> String {
    let ingredient_phrases: Vec<String> = step
        .ingredients
        .iter()
        .map(|ingredient| element_phrase(&ingredient.into(), products, scale, None))
        .collect();

    let vessel_phrases: Vec<String> = step
        .vessels
        .iter()
        .map(|vessel| element_phrase(&vessel.into(), products, scale, Some("in")))
        .collect();

    let tool_phrases: Vec<String> = step_instruments(step)
        .into_iter()
        .map(|instrument| element_phrase(&instrument.into(), products, scale, None))
        .collect();

    let mut text = String::new();
    if instruments_are_summary_listable(step) && !tool_phrases.is_empty() {
        text.push_str("Using ");
        text.push_str(&join_english(&tool_phrases));
        text.push_str(", ");
    }

    text.push_str(&capitalize(&step.preparation));

    if !ingredient_phrases.is_empty() {
        text.push(' ');
        text.push_str(&join_english(&ingredient_phrases));
    }
    if !vessel_phrases.is_empty() {
        text.push(' ');
        text.push_str(&join_english(&vessel_phrases));
    }

    let products_clause = yield_clause(step);
    if !products_clause.is_empty() {
        text.push_str(" to yield ");
        text.push_str(&products_clause);
    }

    if text.trim().is_empty() {
        return step.explicit_instructions.clone();
    }
    text.push('.');
    text
}

/// Renders the instruction text for one step of a recipe at the given
/// serving-size scale.
pub fn render_step_text(recipe: &Recipe, step: &RecipeStep, scale: f64) -> String {
    let products = ProductIndex::new(recipe);
    compose_step_text(&products, step, scale)
}

/// Renders every step of a recipe as numbered instruction lines.
pub fn render_recipe_text(recipe: &Recipe, scale: f64) -> String {
    let products = ProductIndex::new(recipe);
    recipe
        .steps
        .iter()
        .map(|step| {
            format!(
                "{}. {}",
                step.display_number(),
                compose_step_text(&products, step, scale)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
