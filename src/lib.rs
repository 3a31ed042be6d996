//! # Souschef - Recipe Step Dependency Graph & Derivation Engine
//!
//! **Souschef** treats a recipe as a directed acyclic graph of steps wired
//! together by producer/consumer relationships: a step's output "product"
//! is consumed by a later step as an ingredient, instrument, or vessel.
//! From that graph it derives everything a meal-planning frontend needs at
//! render time, without owning any of the surrounding CRUD machinery.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical in-memory
//! model of a recipe. The primary workflow is:
//!
//! 1.  **Load Your Data**: Deserialize recipes from your API payloads, either
//!     through the bundled [`wire`] types or your own structs.
//! 2.  **Convert to the Canonical Model**: Implement [`model::IntoRecipe`]
//!     for your structs (the bundled [`wire::ApiRecipe`] already does), which
//!     resolves catalog-vs-product element polymorphism once at the boundary.
//! 3.  **Derive**: Build a [`graph::StepGraph`] to answer readiness queries
//!     against a caller-owned completion vector, aggregate ingredient and
//!     equipment totals across recipes with [`aggregate`], and render
//!     per-step instruction text with [`render`].
//!
//! Every derivation is a pure, total function: malformed references degrade
//! to sentinels and detached elements are skipped, because this logic backs
//! interactive rendering where throwing would break the page.
//!
//! ## Quick Start
//!
//! ```rust
//! use souschef::prelude::*;
//!
//! // Step 1 dices an onion and yields "diced onion"; step 2 consumes it.
//! let recipe = Recipe::new(
//!     "French onion soup",
//!     vec![
//!         RecipeStep {
//!             index: 0,
//!             preparation: "dice".to_string(),
//!             explicit_instructions: String::new(),
//!             ingredients: vec![RecipeStepIngredient {
//!                 source: IngredientSource::Catalog(Ingredient {
//!                     id: "ing_onion".to_string(),
//!                     name: "onion".to_string(),
//!                     plural_name: "onions".to_string(),
//!                 }),
//!                 unit: MeasurementUnit::generic(),
//!                 quantity: QuantityRange::exact(1.0),
//!             }],
//!             instruments: vec![],
//!             vessels: vec![],
//!             products: vec![RecipeStepProduct {
//!                 id: "p1".to_string(),
//!                 kind: ProductKind::Ingredient,
//!                 name: "diced onion".to_string(),
//!             }],
//!         },
//!         RecipeStep {
//!             index: 1,
//!             preparation: "caramelize".to_string(),
//!             explicit_instructions: String::new(),
//!             ingredients: vec![RecipeStepIngredient {
//!                 source: IngredientSource::Product {
//!                     id: "p1".to_string(),
//!                     name: "diced onion".to_string(),
//!                 },
//!                 unit: MeasurementUnit::generic(),
//!                 quantity: QuantityRange::exact(1.0),
//!             }],
//!             instruments: vec![],
//!             vessels: vec![],
//!             products: vec![],
//!         },
//!     ],
//! );
//!
//! // Readiness against a caller-owned completion vector
//! // (`true` = step still needs doing).
//! let graph = StepGraph::build(&recipe);
//! let pending = vec![true, true];
//! assert!(!graph.step_is_blocked(1, &pending)); // no prerequisites
//! assert!(graph.step_is_blocked(2, &pending)); // waiting on step 1
//!
//! // Natural-language instruction text per step.
//! let text = render_step_text(&recipe, &recipe.steps[1], 1.0);
//! assert_eq!(text, "Caramelize the diced onion from step #1.");
//!
//! // Shopping-list aggregation, optionally across several scaled recipes.
//! let totals = aggregate_ingredients(&[ScaledRecipe::new(&recipe, 2.0)]);
//! assert_eq!(totals[0].quantity.min, 2.0);
//! ```

pub mod aggregate;
pub mod error;
pub mod format;
pub mod graph;
pub mod model;
pub mod prelude;
pub mod render;
pub mod wire;
