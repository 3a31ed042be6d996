use super::element::{RecipeStepIngredient, RecipeStepInstrument, RecipeStepVessel};

/// What kind of thing a step yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Ingredient,
    Instrument,
    Vessel,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Ingredient => "ingredient",
            ProductKind::Instrument => "instrument",
            ProductKind::Vessel => "vessel",
        }
    }
}

/// An output of a recipe step, consumable by later steps via its `id`.
///
/// Product ids are unique within a recipe; uniqueness across recipes is
/// neither needed nor assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStepProduct {
    pub id: String,
    pub kind: ProductKind,
    pub name: String,
}

/// A single step of a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStep {
    /// 0-based position in the recipe, stable regardless of array order.
    pub index: usize,
    /// Name of the preparation performed ("dice", "whisk together").
    pub preparation: String,
    /// Verbatim instruction text, used as a fallback when no text can be
    /// composed from the step's structure.
    pub explicit_instructions: String,
    pub ingredients: Vec<RecipeStepIngredient>,
    pub instruments: Vec<RecipeStepInstrument>,
    pub vessels: Vec<RecipeStepVessel>,
    pub products: Vec<RecipeStepProduct>,
}

impl RecipeStep {
    /// The 1-based step number shown to users and used as the graph node key.
    pub fn display_number(&self) -> usize {
        self.index + 1
    }
}

/// A recipe: an ordered sequence of steps. Immutable input to the engine;
/// nothing in this crate mutates a recipe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    pub name: String,
    pub steps: Vec<RecipeStep>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, steps: Vec<RecipeStep>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }
}
