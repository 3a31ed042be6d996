//! Common test utilities for building canonical recipes.
use souschef::prelude::*;

#[allow(dead_code)]
pub fn catalog_ingredient(id: &str, name: &str, plural: &str) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        plural_name: plural.to_string(),
    }
}

#[allow(dead_code)]
pub fn unit(name: &str, plural: &str) -> MeasurementUnit {
    MeasurementUnit {
        name: name.to_string(),
        plural_name: plural.to_string(),
    }
}

/// An ingredient usage backed by a catalog entry, counted with the
/// generic placeholder unit.
#[allow(dead_code)]
pub fn ingredient_use(catalog: Ingredient, min: f64, max: Option<f64>) -> RecipeStepIngredient {
    RecipeStepIngredient {
        source: IngredientSource::Catalog(catalog),
        unit: MeasurementUnit::generic(),
        quantity: QuantityRange { min, max },
    }
}

/// An ingredient usage consuming an earlier step's product.
#[allow(dead_code)]
pub fn product_ingredient(product_id: &str, name: &str) -> RecipeStepIngredient {
    RecipeStepIngredient {
        source: IngredientSource::Product {
            id: product_id.to_string(),
            name: name.to_string(),
        },
        unit: MeasurementUnit::generic(),
        quantity: QuantityRange::exact(1.0),
    }
}

#[allow(dead_code)]
pub fn catalog_instrument(id: &str, name: &str, plural: &str, summary: bool) -> Instrument {
    Instrument {
        id: id.to_string(),
        name: name.to_string(),
        plural_name: plural.to_string(),
        display_in_summary_lists: summary,
    }
}

#[allow(dead_code)]
pub fn instrument_use(catalog: Instrument, min: f64, max: Option<f64>) -> RecipeStepInstrument {
    RecipeStepInstrument {
        source: InstrumentSource::Catalog(catalog),
        quantity: QuantityRange { min, max },
    }
}

#[allow(dead_code)]
pub fn product_instrument(product_id: &str, name: &str) -> RecipeStepInstrument {
    RecipeStepInstrument {
        source: InstrumentSource::Product {
            id: product_id.to_string(),
            name: name.to_string(),
        },
        quantity: QuantityRange::exact(1.0),
    }
}

#[allow(dead_code)]
pub fn catalog_vessel(id: &str, name: &str, plural: &str, summary: bool) -> Vessel {
    Vessel {
        id: id.to_string(),
        name: name.to_string(),
        plural_name: plural.to_string(),
        display_in_summary_lists: summary,
    }
}

#[allow(dead_code)]
pub fn vessel_use(catalog: Vessel, min: f64) -> RecipeStepVessel {
    RecipeStepVessel {
        source: VesselSource::Catalog(catalog),
        quantity: QuantityRange::exact(min),
    }
}

#[allow(dead_code)]
pub fn product_vessel(product_id: &str, name: &str) -> RecipeStepVessel {
    RecipeStepVessel {
        source: VesselSource::Product {
            id: product_id.to_string(),
            name: name.to_string(),
        },
        quantity: QuantityRange::exact(1.0),
    }
}

/// A bare step with no elements or products.
#[allow(dead_code)]
pub fn step(index: usize, preparation: &str) -> RecipeStep {
    RecipeStep {
        index,
        preparation: preparation.to_string(),
        explicit_instructions: String::new(),
        ingredients: vec![],
        instruments: vec![],
        vessels: vec![],
        products: vec![],
    }
}

#[allow(dead_code)]
pub fn product(id: &str, kind: ProductKind, name: &str) -> RecipeStepProduct {
    RecipeStepProduct {
        id: id.to_string(),
        kind,
        name: name.to_string(),
    }
}

/// The 3-step linear recipe: step 1 yields `p1`, step 2 consumes `p1` and
/// yields `p2`, step 3 consumes `p2`.
#[allow(dead_code)]
pub fn linear_recipe() -> Recipe {
    let mut dice = step(0, "dice");
    dice.ingredients = vec![ingredient_use(
        catalog_ingredient("ing_onion", "onion", "onions"),
        1.0,
        None,
    )];
    dice.products = vec![product("p1", ProductKind::Ingredient, "diced onion")];

    let mut saute = step(1, "saute");
    saute.ingredients = vec![product_ingredient("p1", "diced onion")];
    saute.products = vec![product("p2", ProductKind::Ingredient, "sauteed onion")];

    let mut plate = step(2, "plate");
    plate.ingredients = vec![product_ingredient("p2", "sauteed onion")];

    Recipe::new("linear", vec![dice, saute, plate])
}
