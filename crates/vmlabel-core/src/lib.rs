//! Normalization of loosely structured workload metadata.
//!
//! Two independent, stateless components:
//! - [`LabelTokenizer`] recovers `key=value` routing directives from free-text descriptions;
//! - [`InterfaceFlattener`] flattens a guest interface query result into one address list.
pub mod extract;
pub mod flatten;
pub mod tokenizer;

pub use extract::{AddressExtractor, LabelExtractor};
pub use flatten::{InterfaceFlattener, flatten_addresses};
pub use tokenizer::{DirectiveShape, LabelTokenizer, TokenizerConfig, tokenize};

pub mod prelude {
    pub use crate::extract::{AddressExtractor, LabelExtractor};
    pub use crate::flatten::InterfaceFlattener;
    pub use crate::tokenizer::{DirectiveShape, LabelTokenizer, TokenizerConfig};
    pub use vmlabel_model::{AddressRecord, ConfigMap, Directive, InterfaceQueryResult};
}
