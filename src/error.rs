use thiserror::Error;

pub type Result<T, E = ScribeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScribeError {
    /// A candidate color is not exactly four integers in `0..=255`.
    #[error("{0} is not a valid RGBA 4-tuple")]
    InvalidColor(String),

    /// A stroke width or coordinate could not be read as a number.
    #[error("cannot convert {value} to a number for `{field}`")]
    TypeConversion { field: String, value: String },

    #[error("unknown paint `{0}`")]
    UnknownPaint(String),

    #[error("invalid drawing script: {0}")]
    Script(String),
}

impl ScribeError {
    pub(crate) fn type_conversion(field: &str, value: impl std::fmt::Display) -> Self {
        Self::TypeConversion {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
