use super::recipe::Recipe;
use crate::error::RecipeConversionError;

/// A trait for custom wire formats that can be converted into a canonical
/// [`Recipe`].
///
/// The engine itself is format-agnostic: every derivation (graph building,
/// readiness, aggregation, text rendering) operates on the canonical model.
/// The crate ships a ready-made conversion from the surrounding
/// application's JSON payloads (see [`crate::wire`]); implement this trait
/// to feed the engine from any other source.
///
/// # Example
///
/// ```rust
/// use souschef::model::{IntoRecipe, Recipe, RecipeStep};
/// use souschef::error::RecipeConversionError;
///
/// struct MyStep { action: String }
/// struct MyRecipe { title: String, steps: Vec<MyStep> }
///
/// impl IntoRecipe for MyRecipe {
///     fn into_recipe(self) -> Result<Recipe, RecipeConversionError> {
///         let steps = self
///             .steps
///             .into_iter()
///             .enumerate()
///             .map(|(index, step)| RecipeStep {
///                 index,
///                 preparation: step.action,
///                 explicit_instructions: String::new(),
///                 ingredients: vec![],
///                 instruments: vec![],
///                 vessels: vec![],
///                 products: vec![],
///             })
///             .collect();
///
///         Ok(Recipe::new(self.title, steps))
///     }
/// }
/// ```
pub trait IntoRecipe {
    /// Consumes the object and converts it into a canonical recipe.
    fn into_recipe(self) -> Result<Recipe, RecipeConversionError>;
}
