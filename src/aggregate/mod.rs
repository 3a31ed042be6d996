//! Cross-recipe aggregation of ingredient, instrument, and vessel usage.
//!
//! One aggregation pass walks every step of every input recipe and folds
//! usages of the same catalog entity into a single record with summed
//! quantities. Records live for the duration of the pass only; callers get
//! back plain element values in first-occurrence order.

use crate::model::{
    QuantityRange, Recipe, RecipeStep, RecipeStepIngredient, RecipeStepInstrument,
    RecipeStepVessel,
};
use ahash::{AHashMap, AHashSet};

/// A recipe paired with the serving-size multiplier it is being prepared
/// at. Quantities are pre-multiplied by the scale as they are folded in.
#[derive(Debug, Clone, Copy)]
pub struct ScaledRecipe<'a> {
    pub recipe: &'a Recipe,
    pub scale: f64,
}

impl<'a> ScaledRecipe<'a> {
    pub fn new(recipe: &'a Recipe, scale: f64) -> Self {
        Self { recipe, scale }
    }

    /// A recipe prepared as written.
    pub fn unscaled(recipe: &'a Recipe) -> Self {
        Self::new(recipe, 1.0)
    }
}

/// Insertion-ordered accumulator keyed by catalog entity id.
struct UsageTotals<T> {
    records: Vec<T>,
    by_id: AHashMap<String, usize>,
}

impl<T> UsageTotals<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            by_id: AHashMap::new(),
        }
    }

    fn fold(&mut self, id: &str, record: T, merge: impl FnOnce(&mut T, T)) {
        match self.by_id.get(id) {
            Some(&slot) => merge(&mut self.records[slot], record),
            None => {
                self.by_id.insert(id.to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    fn into_records(self) -> Vec<T> {
        self.records
    }
}

/// Adds a scaled quantity onto a running total: minimums sum, and a new
/// maximum adds onto the running maximum, treating an absent running
/// maximum as zero.
fn merge_quantity(total: &mut QuantityRange, incoming: QuantityRange) {
    total.min += incoming.min;
    if let Some(max) = incoming.max {
        total.max = Some(total.max.unwrap_or(0.0) + max);
    }
}

/// Merges every catalog-backed ingredient usage across the given recipes
/// into one quantity-summed record per ingredient id.
///
/// Elements without a catalog reference (product-backed, or detached) are
/// skipped entirely rather than surfacing as "unknown" entries.
pub fn aggregate_ingredients(recipes: &[ScaledRecipe<'_>]) -> Vec<RecipeStepIngredient> {
    let mut totals = UsageTotals::new();

    for scaled in recipes {
        for step in &scaled.recipe.steps {
            for ingredient in &step.ingredients {
                let Some(catalog) = ingredient.catalog() else {
                    continue;
                };

                let mut record = ingredient.clone();
                record.quantity = ingredient.quantity.scaled(scaled.scale);
                totals.fold(&catalog.id, record, |total, incoming| {
                    merge_quantity(&mut total.quantity, incoming.quantity);
                });
            }
        }
    }

    totals.into_records()
}

/// Merges instrument usage across recipes, keeping only instruments whose
/// catalog entry opts into summary lists. Product-backed instruments are
/// not surfaced at the cross-recipe level.
pub fn aggregate_instruments(recipes: &[ScaledRecipe<'_>]) -> Vec<RecipeStepInstrument> {
    let mut totals = UsageTotals::new();

    for scaled in recipes {
        for step in &scaled.recipe.steps {
            for instrument in &step.instruments {
                let Some(catalog) = instrument.catalog() else {
                    continue;
                };
                if !catalog.display_in_summary_lists {
                    log::debug!("Skipping non-summary instrument '{}'", catalog.name);
                    continue;
                }

                let mut record = instrument.clone();
                record.quantity = instrument.quantity.scaled(scaled.scale);
                totals.fold(&catalog.id, record, |total, incoming| {
                    merge_quantity(&mut total.quantity, incoming.quantity);
                });
            }
        }
    }

    totals.into_records()
}

/// Merges vessel usage across recipes, with the same summary-list gate as
/// instruments. Vessels whose catalog entity already appears in the
/// collected instrument set are dropped before merging, so a tool that a
/// recipe lists both ways shows up once, as an instrument.
pub fn aggregate_vessels(recipes: &[ScaledRecipe<'_>]) -> Vec<RecipeStepVessel> {
    let instrument_ids: AHashSet<String> = aggregate_instruments(recipes)
        .into_iter()
        .filter_map(|i| i.catalog().map(|c| c.id.clone()))
        .collect();

    let mut totals = UsageTotals::new();

    for scaled in recipes {
        for step in &scaled.recipe.steps {
            for vessel in &step.vessels {
                let Some(catalog) = vessel.catalog() else {
                    continue;
                };
                if !catalog.display_in_summary_lists {
                    continue;
                }
                if instrument_ids.contains(&catalog.id) {
                    log::debug!(
                        "Vessel '{}' already collected as an instrument",
                        catalog.name
                    );
                    continue;
                }

                let mut record = vessel.clone();
                record.quantity = vessel.quantity.scaled(scaled.scale);
                totals.fold(&catalog.id, record, |total, incoming| {
                    merge_quantity(&mut total.quantity, incoming.quantity);
                });
            }
        }
    }

    totals.into_records()
}

/// Instruments relevant to a single step's tool checklist: those opted
/// into summary lists, plus instruments produced by earlier steps (a
/// "heated pan" matters to the step using it even though the catalog never
/// lists heated pans).
pub fn step_instruments(step: &RecipeStep) -> Vec<&RecipeStepInstrument> {
    step.instruments
        .iter()
        .filter(|instrument| {
            instrument.is_product_backed()
                || instrument
                    .catalog()
                    .is_some_and(|catalog| catalog.display_in_summary_lists)
        })
        .collect()
}
