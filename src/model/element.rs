use super::catalog::{Ingredient, Instrument, MeasurementUnit, Vessel};

/// A minimum/maximum quantity pair attached to a step element.
///
/// `max` is `None` for exact quantities; a populated `max` represents a
/// range ("2 to 3 cloves").
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuantityRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl QuantityRange {
    pub fn exact(min: f64) -> Self {
        Self { min, max: None }
    }

    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Returns the quantity multiplied through by a serving-size scale.
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            min: self.min * scale,
            max: self.max.map(|m| m * scale),
        }
    }
}

/// Where a step ingredient comes from: the catalog, or the output of an
/// earlier step. Resolved once at the wire boundary; elements carrying
/// neither reference never reach the canonical model.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientSource {
    Catalog(Ingredient),
    Product { id: String, name: String },
}

/// Where a step instrument comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum InstrumentSource {
    Catalog(Instrument),
    Product { id: String, name: String },
}

/// Where a step vessel comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum VesselSource {
    Catalog(Vessel),
    Product { id: String, name: String },
}

/// An ingredient usage within a single recipe step.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStepIngredient {
    pub source: IngredientSource,
    pub unit: MeasurementUnit,
    pub quantity: QuantityRange,
}

/// An instrument usage within a single recipe step.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStepInstrument {
    pub source: InstrumentSource,
    pub quantity: QuantityRange,
}

/// A vessel usage within a single recipe step.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStepVessel {
    pub source: VesselSource,
    pub quantity: QuantityRange,
}

impl RecipeStepIngredient {
    pub fn catalog(&self) -> Option<&Ingredient> {
        match &self.source {
            IngredientSource::Catalog(ingredient) => Some(ingredient),
            IngredientSource::Product { .. } => None,
        }
    }

    pub fn product_id(&self) -> Option<&str> {
        match &self.source {
            IngredientSource::Product { id, .. } => Some(id),
            IngredientSource::Catalog(_) => None,
        }
    }

    /// Whether this element consumes the output of an earlier step rather
    /// than a raw catalog item.
    pub fn is_product_backed(&self) -> bool {
        matches!(self.source, IngredientSource::Product { .. })
    }

    /// Product-backed elements never display a quantity; the amount is
    /// implied by the "from step #N" back-reference instead.
    pub fn displays_quantity(&self) -> bool {
        !self.is_product_backed()
    }
}

impl RecipeStepInstrument {
    pub fn catalog(&self) -> Option<&Instrument> {
        match &self.source {
            InstrumentSource::Catalog(instrument) => Some(instrument),
            InstrumentSource::Product { .. } => None,
        }
    }

    pub fn product_id(&self) -> Option<&str> {
        match &self.source {
            InstrumentSource::Product { id, .. } => Some(id),
            InstrumentSource::Catalog(_) => None,
        }
    }

    pub fn is_product_backed(&self) -> bool {
        matches!(self.source, InstrumentSource::Product { .. })
    }

    pub fn displays_quantity(&self) -> bool {
        !self.is_product_backed()
    }
}

impl RecipeStepVessel {
    pub fn catalog(&self) -> Option<&Vessel> {
        match &self.source {
            VesselSource::Catalog(vessel) => Some(vessel),
            VesselSource::Product { .. } => None,
        }
    }

    pub fn product_id(&self) -> Option<&str> {
        match &self.source {
            VesselSource::Product { id, .. } => Some(id),
            VesselSource::Catalog(_) => None,
        }
    }

    pub fn is_product_backed(&self) -> bool {
        matches!(self.source, VesselSource::Product { .. })
    }

    pub fn displays_quantity(&self) -> bool {
        !self.is_product_backed()
    }
}
