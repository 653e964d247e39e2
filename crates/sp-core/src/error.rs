use thiserror::Error;

pub type SpResult<T> = Result<T, SpError>;

#[derive(Error, Debug)]
pub enum SpError {
    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
