//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the souschef
//! crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use souschef::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let payload = std::fs::read_to_string("path/to/recipe.json")?;
//! let api_recipe: ApiRecipe = serde_json::from_str(&payload)?;
//! let recipe = api_recipe.into_recipe()?;
//!
//! let graph = StepGraph::build(&recipe);
//! println!("{}", render_recipe_text(&recipe, 1.0));
//! println!("{}", graph.to_dot());
//! # Ok(())
//! # }
//! ```

// Graph construction and readiness
pub use crate::graph::{ProductIndex, StepGraph, UNKNOWN_STEP};

// Canonical model
pub use crate::model::{
    Ingredient, IngredientSource, Instrument, InstrumentSource, IntoRecipe, MeasurementUnit,
    ProductKind, QuantityRange, Recipe, RecipeStep, RecipeStepIngredient, RecipeStepInstrument,
    RecipeStepProduct, RecipeStepVessel, Vessel, VesselSource,
};

// Wire format
pub use crate::wire::ApiRecipe;

// Aggregation
pub use crate::aggregate::{
    ScaledRecipe, aggregate_ingredients, aggregate_instruments, aggregate_vessels,
    step_instruments,
};

// Quantity formatting
pub use crate::format::{clean_float, format_number, format_quantity};

// Text rendering
pub use crate::render::{capitalize, join_english, render_recipe_text, render_step_text};

// Error types
pub use crate::error::RecipeConversionError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
