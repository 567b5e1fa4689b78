use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Invalid age input: {input:?} (expected a positive number of years)")]
    InvalidAgeInput { input: String },

    #[error("Body '{body}' has invalid {field}: {value}")]
    InvalidPeriod { body: String, field: &'static str, value: f64 },

    #[error("Marker '{city}' has out-of-range coordinate: lat={latitude}, long={longitude}")]
    InvalidCoordinate { city: String, latitude: f64, longitude: f64 },

    #[error("Body '{id}' appears more than once in the catalog")]
    DuplicateBody { id: String },

    #[error("No light travel time recorded for body '{id}'")]
    MissingLightTime { id: String },

    #[error("Body '{id}' not found")]
    UnknownBody { id: String },

    #[error("Invalid instant: {0}")]
    InvalidInstant(#[from] chrono::ParseError),
}

pub type OrreryResult<T> = Result<T, OrreryError>;
