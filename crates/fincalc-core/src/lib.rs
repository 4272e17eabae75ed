pub mod calculator;
pub mod error;
pub mod time_value;
pub mod types;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
