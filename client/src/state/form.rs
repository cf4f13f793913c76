//! Form collection: raw input text to a validated [`PredictionRequest`].
//!
//! DESIGN
//! ======
//! Inputs are read through the [`FieldSource`] port so collection works the
//! same against live form signals ([`FormDraft`]) and test fixtures. Every
//! numeric field is parsed and checked before a request exists; a malformed
//! field never reaches the network as NaN or null.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use thiserror::Error;

use crate::net::types::{Dimensions, PredictionRequest};

/// Every input the prediction form collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Weight,
    Category,
    FragilityScore,
    ShelfLife,
    DimL,
    DimW,
    DimH,
}

impl FormField {
    pub const ALL: [Self; 7] =
        [Self::Weight, Self::Category, Self::FragilityScore, Self::ShelfLife, Self::DimL, Self::DimW, Self::DimH];

    /// DOM id of the input element.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Category => "category",
            Self::FragilityScore => "fragilityScore",
            Self::ShelfLife => "shelfLife",
            Self::DimL => "dimL",
            Self::DimW => "dimW",
            Self::DimH => "dimH",
        }
    }

    /// Human-readable name used in validation messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight capacity",
            Self::Category => "Category",
            Self::FragilityScore => "Fragility score",
            Self::ShelfLife => "Shelf life",
            Self::DimL => "Length",
            Self::DimW => "Width",
            Self::DimH => "Height",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{label} must be a number (got \"{raw}\")", label = .field.label())]
    NotANumber { field: FormField, raw: String },

    #[error("{label} must be a whole number (got \"{raw}\")", label = .field.label())]
    NotAnInteger { field: FormField, raw: String },

    #[error("{label} is required", label = .field.label())]
    Missing { field: FormField },
}

impl FormError {
    #[must_use]
    pub fn field(&self) -> FormField {
        match self {
            Self::NotANumber { field, .. } | Self::NotAnInteger { field, .. } | Self::Missing { field } => *field,
        }
    }
}

/// Port: reads the raw text currently entered for a field.
pub trait FieldSource {
    fn raw_value(&self, field: FormField) -> String;
}

/// In-memory form contents, bound to the inputs by the form component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormDraft {
    pub weight: String,
    pub category: String,
    pub fragility_score: String,
    pub shelf_life: String,
    pub dim_l: String,
    pub dim_w: String,
    pub dim_h: String,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            weight: String::new(),
            category: CATEGORIES[0].0.to_owned(),
            fragility_score: "5".to_owned(),
            shelf_life: String::new(),
            dim_l: String::new(),
            dim_w: String::new(),
            dim_h: String::new(),
        }
    }
}

impl FormDraft {
    /// Mutable slot for `field`, used by input handlers.
    pub fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Weight => &mut self.weight,
            FormField::Category => &mut self.category,
            FormField::FragilityScore => &mut self.fragility_score,
            FormField::ShelfLife => &mut self.shelf_life,
            FormField::DimL => &mut self.dim_l,
            FormField::DimW => &mut self.dim_w,
            FormField::DimH => &mut self.dim_h,
        }
    }
}

impl FieldSource for FormDraft {
    fn raw_value(&self, field: FormField) -> String {
        match field {
            FormField::Weight => self.weight.clone(),
            FormField::Category => self.category.clone(),
            FormField::FragilityScore => self.fragility_score.clone(),
            FormField::ShelfLife => self.shelf_life.clone(),
            FormField::DimL => self.dim_l.clone(),
            FormField::DimW => self.dim_w.clone(),
            FormField::DimH => self.dim_h.clone(),
        }
    }
}

/// Product categories offered by the form: (value sent, label shown).
pub const CATEGORIES: [(&str, &str); 5] = [
    ("food", "Food & Beverage"),
    ("electronics", "Electronics"),
    ("cosmetics", "Cosmetics"),
    ("pharma", "Pharmaceuticals"),
    ("apparel", "Apparel"),
];

/// Build a request from the current field values.
///
/// # Errors
///
/// Returns the first field, in form order, that is empty or does not parse.
pub fn collect_request(source: &impl FieldSource) -> Result<PredictionRequest, FormError> {
    Ok(PredictionRequest {
        weight_capacity: parse_float(source, FormField::Weight)?,
        category: parse_text(source, FormField::Category)?,
        fragility_score: parse_int(source, FormField::FragilityScore)?,
        shelf_life_days: parse_int(source, FormField::ShelfLife)?,
        dimensions: Dimensions {
            l: parse_float(source, FormField::DimL)?,
            w: parse_float(source, FormField::DimW)?,
            h: parse_float(source, FormField::DimH)?,
        },
    })
}

fn parse_text(source: &impl FieldSource, field: FormField) -> Result<String, FormError> {
    let raw = source.raw_value(field);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing { field });
    }
    Ok(trimmed.to_owned())
}

fn parse_float(source: &impl FieldSource, field: FormField) -> Result<f64, FormError> {
    let text = parse_text(source, field)?;
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormError::NotANumber { field, raw: text }),
    }
}

fn parse_int(source: &impl FieldSource, field: FormField) -> Result<i32, FormError> {
    let text = parse_text(source, field)?;
    text.parse::<i32>().map_err(|_| FormError::NotAnInteger { field, raw: text })
}
