//! Core module containing the record abstraction and the list-view engines

pub mod error;
pub mod field;
pub mod filter;
pub mod query;
pub mod record;
pub mod sort;
pub mod stats;
pub mod validation;

pub use error::{ClientError, FieldValidationError, ValidationError};
pub use field::{FieldFormat, FieldValue};
pub use filter::filter;
pub use query::{ApplicationStatus, ExperienceLevel, FilterCriteria, SalaryBucket, SortKey};
pub use record::Record;
pub use sort::sort;
pub use stats::{Counters, StatusBucket, summarize};
pub use validation::Validate;
