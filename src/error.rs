use thiserror::Error;

/// Errors that can occur when converting a wire format into a canonical
/// `Recipe`.
///
/// This is the only fallible boundary in the crate. The derivation
/// functions themselves are total: malformed data inside an
/// already-converted recipe (dangling product references, missing
/// completion entries) degrades to sentinels or skips so that interactive
/// rendering never fails.
#[derive(Error, Debug, Clone)]
pub enum RecipeConversionError {
    #[error("Failed to parse recipe JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid recipe data: {0}")]
    ValidationError(String),

    #[error("Step {step_index} declares a product with unrecognized type '{type_name}'")]
    UnknownProductKind {
        step_index: usize,
        type_name: String,
    },
}
