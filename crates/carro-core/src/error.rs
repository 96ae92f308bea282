use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarroError {
    /// A payload field was omitted while `require_all_fields` is set.
    #[error("payload field `{field}` is required but was not provided")]
    MissingField { field: &'static str },
}
