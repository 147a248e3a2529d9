/// Failures surfaced by engine construction. Calculation itself is total:
/// malformed profiles degrade to neutral values instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("scoring weights must sum to 1.0 (got {sum:.4})")]
    Configuration { sum: f64 },
}
