//! sp-map: rail map file format and validation.

pub mod builtin;
pub mod schema;
pub mod validate;

pub use builtin::dutch_intercity;
pub use schema::*;
pub use validate::{ValidationError, validate_map};

pub type MapResult<T> = Result<T, MapError>;

#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> MapResult<RailMap> {
    let content = std::fs::read_to_string(path)?;
    let map: RailMap = serde_yaml::from_str(&content)?;
    validate_map(&map)?;
    Ok(map)
}

pub fn save_yaml(path: &std::path::Path, map: &RailMap) -> MapResult<()> {
    validate_map(map)?;
    let content = serde_yaml::to_string(map)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> MapResult<RailMap> {
    let content = std::fs::read_to_string(path)?;
    let map: RailMap = serde_json::from_str(&content)?;
    validate_map(&map)?;
    Ok(map)
}

pub fn save_json(path: &std::path::Path, map: &RailMap) -> MapResult<()> {
    validate_map(map)?;
    let content = serde_json::to_string_pretty(map)?;
    std::fs::write(path, content)?;
    Ok(())
}
