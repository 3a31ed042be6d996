//! Integration tests: wire JSON payloads through conversion and the full
//! derivation surface.
mod common;
use souschef::prelude::*;

/// Two-step recipe in the surrounding application's wire format: dice an
/// onion into a product, then saute that product in a pan. The second
/// step also carries a detached ingredient (no catalog, no product) that
/// conversion must drop.
const ONION_RECIPE_JSON: &str = r#"{
    "name": "Caramelized onions",
    "steps": [
        {
            "index": 0,
            "preparation": { "name": "dice" },
            "explicitInstructions": "",
            "ingredients": [
                {
                    "name": "onion",
                    "ingredient": { "id": "ing_onion", "name": "onion", "pluralName": "onions" },
                    "recipeStepProductID": "",
                    "measurementUnit": { "name": "unit", "pluralName": "units" },
                    "minimumQuantity": 2
                }
            ],
            "instruments": [
                {
                    "name": "chef's knife",
                    "instrument": {
                        "id": "inst_knife",
                        "name": "chef's knife",
                        "pluralName": "chef's knives",
                        "displayInSummaryLists": true
                    },
                    "recipeStepProductID": "",
                    "minimumQuantity": 1
                }
            ],
            "vessels": [],
            "products": [
                { "id": "prod_diced", "type": "ingredient", "name": "diced onions" }
            ]
        },
        {
            "index": 1,
            "preparation": { "name": "saute" },
            "explicitInstructions": "Saute the diced onions until golden.",
            "ingredients": [
                {
                    "name": "diced onions",
                    "ingredient": null,
                    "recipeStepProductID": "prod_diced",
                    "measurementUnit": { "name": "unit", "pluralName": "units" },
                    "minimumQuantity": 1
                },
                {
                    "name": "ghost ingredient",
                    "ingredient": null,
                    "recipeStepProductID": "",
                    "minimumQuantity": 1
                }
            ],
            "instruments": [],
            "vessels": [
                {
                    "name": "skillet",
                    "vessel": {
                        "id": "ves_skillet",
                        "name": "skillet",
                        "pluralName": "skillets",
                        "displayInSummaryLists": true
                    },
                    "recipeStepProductID": "",
                    "minimumQuantity": 1
                }
            ],
            "products": []
        }
    ]
}"#;

const BAD_PRODUCT_JSON: &str = r#"{
    "name": "Broken",
    "steps": [
        {
            "index": 0,
            "preparation": { "name": "mix" },
            "products": [ { "id": "p1", "type": "beverage", "name": "slurry" } ]
        }
    ]
}"#;

fn onion_recipe() -> Recipe {
    let api: ApiRecipe = serde_json::from_str(ONION_RECIPE_JSON).expect("Failed to parse payload");
    api.into_recipe().expect("Failed to convert recipe")
}

#[test]
fn test_wire_conversion_resolves_element_polymorphism() {
    let recipe = onion_recipe();

    assert_eq!(recipe.name, "Caramelized onions");
    assert_eq!(recipe.steps.len(), 2);

    let dice = &recipe.steps[0];
    assert!(!dice.ingredients[0].is_product_backed());
    assert_eq!(
        dice.ingredients[0].catalog().map(|c| c.id.as_str()),
        Some("ing_onion")
    );

    let saute = &recipe.steps[1];
    // The detached "ghost ingredient" is dropped during conversion.
    assert_eq!(saute.ingredients.len(), 1);
    assert!(saute.ingredients[0].is_product_backed());
    assert_eq!(saute.ingredients[0].product_id(), Some("prod_diced"));
}

#[test]
fn test_wire_conversion_rejects_unknown_product_kind() {
    let api: ApiRecipe = serde_json::from_str(BAD_PRODUCT_JSON).expect("Failed to parse payload");
    let err = api.into_recipe().expect_err("conversion should fail");

    assert!(err.to_string().contains("beverage"));
    assert!(err.to_string().contains("0"));
}

#[test]
fn test_end_to_end_graph_and_readiness() {
    let recipe = onion_recipe();
    let graph = StepGraph::build(&recipe);

    assert_eq!(graph.predecessors(2), &[1]);
    assert!(!graph.step_is_blocked(1, &[true, true]));
    assert!(graph.step_is_blocked(2, &[true, true]));
    assert!(!graph.step_is_blocked(2, &[false, true]));
}

#[test]
fn test_end_to_end_step_text() {
    let recipe = onion_recipe();

    let first = render_step_text(&recipe, &recipe.steps[0], 1.0);
    let second = render_step_text(&recipe, &recipe.steps[1], 1.0);
    println!("1. {}", first);
    println!("2. {}", second);

    assert_eq!(
        first,
        "Using a chef's knife, Dice 2 onions to yield the ingredient diced onions."
    );
    assert_eq!(
        second,
        "Saute the diced onions from step #1 in a skillet."
    );
}

#[test]
fn test_end_to_end_aggregation() {
    let recipe = onion_recipe();
    let scaled = [ScaledRecipe::new(&recipe, 2.0)];

    let ingredients = aggregate_ingredients(&scaled);
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].quantity.min, 4.0);

    let instruments = aggregate_instruments(&scaled);
    assert_eq!(instruments.len(), 1);

    let vessels = aggregate_vessels(&scaled);
    assert_eq!(vessels.len(), 1);
    assert_eq!(vessels[0].catalog().map(|c| c.id.as_str()), Some("ves_skillet"));
}

#[test]
fn test_scaled_rendering_end_to_end() {
    let recipe = onion_recipe();
    let text = render_recipe_text(&recipe, 0.5);

    println!("{}", text);
    assert!(text.contains("Dice a onion"));
}
