//! Extractor traits.
//!
//! Callers that build service records depend on these traits rather than on the
//! concrete components, so either side can be swapped or stubbed.
use vmlabel_model::{AddressRecord, ConfigMap, InterfaceQueryResult};

use crate::{InterfaceFlattener, LabelTokenizer};

/// Recovers routing configuration from a workload description.
pub trait LabelExtractor: Send + Sync {
    /// Extractor name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    fn extract_labels(&self, description: &str) -> ConfigMap;
}

/// Recovers the address list from a guest interface query result.
pub trait AddressExtractor: Send + Sync {
    /// Extractor name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    fn extract_addresses(&self, res: &InterfaceQueryResult) -> Vec<AddressRecord>;
}

impl LabelExtractor for LabelTokenizer {
    fn name(&self) -> &'static str {
        "label-tokenizer"
    }

    fn extract_labels(&self, description: &str) -> ConfigMap {
        self.tokenize(description)
    }
}

impl AddressExtractor for InterfaceFlattener {
    fn name(&self) -> &'static str {
        "interface-flattener"
    }

    fn extract_addresses(&self, res: &InterfaceQueryResult) -> Vec<AddressRecord> {
        self.flatten(res)
    }
}
