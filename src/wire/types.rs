//! Wire-format structures matching the surrounding application's JSON
//! payloads, and their conversion into the canonical model.
//!
//! The API serializes recipes with camelCase keys and expresses element
//! polymorphism by leaving the catalog reference null and populating
//! `recipeStepProductID`. Conversion resolves that duck typing into the
//! canonical tagged unions exactly once, here at the boundary.

use crate::error::RecipeConversionError;
use crate::model::{
    Ingredient, IngredientSource, Instrument, InstrumentSource, IntoRecipe, MeasurementUnit,
    ProductKind, QuantityRange, Recipe, RecipeStep, RecipeStepIngredient, RecipeStepInstrument,
    RecipeStepProduct, RecipeStepVessel, Vessel, VesselSource,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiIngredient {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "pluralName")]
    pub plural_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiInstrument {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "pluralName")]
    pub plural_name: String,
    #[serde(default, alias = "displayInSummaryLists")]
    pub display_in_summary_lists: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiVessel {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "pluralName")]
    pub plural_name: String,
    #[serde(default, alias = "displayInSummaryLists")]
    pub display_in_summary_lists: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMeasurementUnit {
    pub name: String,
    #[serde(default, alias = "pluralName")]
    pub plural_name: String,
}

impl Default for ApiMeasurementUnit {
    fn default() -> Self {
        Self {
            name: "unit".to_string(),
            plural_name: "units".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecipeStepIngredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredient: Option<ApiIngredient>,
    #[serde(default, alias = "recipeStepProductID")]
    pub recipe_step_product_id: String,
    #[serde(default, alias = "measurementUnit")]
    pub measurement_unit: ApiMeasurementUnit,
    #[serde(default, alias = "minimumQuantity")]
    pub minimum_quantity: f64,
    #[serde(default, alias = "maximumQuantity")]
    pub maximum_quantity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecipeStepInstrument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub instrument: Option<ApiInstrument>,
    #[serde(default, alias = "recipeStepProductID")]
    pub recipe_step_product_id: String,
    #[serde(default = "one", alias = "minimumQuantity")]
    pub minimum_quantity: f64,
    #[serde(default, alias = "maximumQuantity")]
    pub maximum_quantity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecipeStepVessel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vessel: Option<ApiVessel>,
    #[serde(default, alias = "recipeStepProductID")]
    pub recipe_step_product_id: String,
    #[serde(default = "one", alias = "minimumQuantity")]
    pub minimum_quantity: f64,
    #[serde(default, alias = "maximumQuantity")]
    pub maximum_quantity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecipeStepProduct {
    pub id: String,
    #[serde(rename = "type")]
    pub product_type: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPreparation {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecipeStep {
    pub index: usize,
    pub preparation: ApiPreparation,
    #[serde(default, alias = "explicitInstructions")]
    pub explicit_instructions: String,
    #[serde(default)]
    pub ingredients: Vec<ApiRecipeStepIngredient>,
    #[serde(default)]
    pub instruments: Vec<ApiRecipeStepInstrument>,
    #[serde(default)]
    pub vessels: Vec<ApiRecipeStepVessel>,
    #[serde(default)]
    pub products: Vec<ApiRecipeStepProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecipe {
    #[serde(default)]
    pub name: String,
    pub steps: Vec<ApiRecipeStep>,
}

impl ApiRecipe {
    /// Parses a recipe payload from JSON and converts it straight into the
    /// canonical model.
    pub fn parse(payload: &str) -> Result<Recipe, RecipeConversionError> {
        let api_recipe: ApiRecipe = serde_json::from_str(payload)
            .map_err(|e| RecipeConversionError::JsonParseError(e.to_string()))?;
        api_recipe.into_recipe()
    }
}

fn one() -> f64 {
    1.0
}

fn quantity(min: f64, max: Option<f64>) -> QuantityRange {
    QuantityRange { min, max }
}

impl IntoRecipe for ApiRecipe {
    fn into_recipe(self) -> Result<Recipe, RecipeConversionError> {
        let mut steps = Vec::with_capacity(self.steps.len());
        for step in self.steps {
            steps.push(convert_step(step)?);
        }
        Ok(Recipe::new(self.name, steps))
    }
}

fn convert_step(step: ApiRecipeStep) -> Result<RecipeStep, RecipeConversionError> {
    let step_index = step.index;

    let ingredients = step
        .ingredients
        .into_iter()
        .filter_map(|ingredient| convert_ingredient(ingredient, step_index))
        .collect();
    let instruments = step
        .instruments
        .into_iter()
        .filter_map(|instrument| convert_instrument(instrument, step_index))
        .collect();
    let vessels = step
        .vessels
        .into_iter()
        .filter_map(|vessel| convert_vessel(vessel, step_index))
        .collect();

    let mut products = Vec::with_capacity(step.products.len());
    for product in step.products {
        let kind = match product.product_type.as_str() {
            "ingredient" => ProductKind::Ingredient,
            "instrument" => ProductKind::Instrument,
            "vessel" => ProductKind::Vessel,
            other => {
                return Err(RecipeConversionError::UnknownProductKind {
                    step_index,
                    type_name: other.to_string(),
                });
            }
        };
        products.push(RecipeStepProduct {
            id: product.id,
            kind,
            name: product.name,
        });
    }

    Ok(RecipeStep {
        index: step_index,
        preparation: step.preparation.name,
        explicit_instructions: step.explicit_instructions,
        ingredients,
        instruments,
        vessels,
        products,
    })
}

fn convert_ingredient(
    ingredient: ApiRecipeStepIngredient,
    step_index: usize,
) -> Option<RecipeStepIngredient> {
    let source = if !ingredient.recipe_step_product_id.is_empty() {
        IngredientSource::Product {
            id: ingredient.recipe_step_product_id,
            name: ingredient.name,
        }
    } else if let Some(catalog) = ingredient.ingredient {
        IngredientSource::Catalog(Ingredient {
            id: catalog.id,
            name: catalog.name,
            plural_name: catalog.plural_name,
        })
    } else {
        log::debug!(
            "Dropping step {} ingredient '{}': no catalog or product reference",
            step_index,
            ingredient.name
        );
        return None;
    };

    Some(RecipeStepIngredient {
        source,
        unit: MeasurementUnit {
            name: ingredient.measurement_unit.name,
            plural_name: ingredient.measurement_unit.plural_name,
        },
        quantity: quantity(ingredient.minimum_quantity, ingredient.maximum_quantity),
    })
}

fn convert_instrument(
    instrument: ApiRecipeStepInstrument,
    step_index: usize,
) -> Option<RecipeStepInstrument> {
    let source = if !instrument.recipe_step_product_id.is_empty() {
        InstrumentSource::Product {
            id: instrument.recipe_step_product_id,
            name: instrument.name,
        }
    } else if let Some(catalog) = instrument.instrument {
        InstrumentSource::Catalog(Instrument {
            id: catalog.id,
            name: catalog.name,
            plural_name: catalog.plural_name,
            display_in_summary_lists: catalog.display_in_summary_lists,
        })
    } else {
        log::debug!(
            "Dropping step {} instrument '{}': no catalog or product reference",
            step_index,
            instrument.name
        );
        return None;
    };

    Some(RecipeStepInstrument {
        source,
        quantity: quantity(instrument.minimum_quantity, instrument.maximum_quantity),
    })
}

fn convert_vessel(vessel: ApiRecipeStepVessel, step_index: usize) -> Option<RecipeStepVessel> {
    let source = if !vessel.recipe_step_product_id.is_empty() {
        VesselSource::Product {
            id: vessel.recipe_step_product_id,
            name: vessel.name,
        }
    } else if let Some(catalog) = vessel.vessel {
        VesselSource::Catalog(Vessel {
            id: catalog.id,
            name: catalog.name,
            plural_name: catalog.plural_name,
            display_in_summary_lists: catalog.display_in_summary_lists,
        })
    } else {
        log::debug!(
            "Dropping step {} vessel '{}': no catalog or product reference",
            step_index,
            vessel.name
        );
        return None;
    };

    Some(RecipeStepVessel {
        source,
        quantity: quantity(vessel.minimum_quantity, vessel.maximum_quantity),
    })
}
