//! Module: engine
//! Responsibility: the target search engine's vocabulary: predicate algebra,
//! typed wire values, storage key form, and the composite request document.
//! Does not own: sending requests or reading results back.

mod key;
mod predicate;
mod request;
mod value;

pub use key::serialize_key;
pub use predicate::{RangeOperator, StructuredQuery};
pub use request::{ExtractDocumentData, ExtractSelection, Search, SearchOptions, SearchRequest};
pub use value::{ElementType, EngineValue};
