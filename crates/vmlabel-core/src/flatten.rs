//! Flattening of guest interface query results.
use tracing::debug;
use vmlabel_model::{AddressRecord, InterfaceQueryResult};

/// Stateless flattener: concatenates every interface's addresses in reported order.
///
/// No filtering, deduplication or reordering is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceFlattener;

impl InterfaceFlattener {
    pub fn new() -> Self {
        Self
    }

    /// Borrowing, lazily flattened view over all address records.
    pub fn iter<'a>(&self, res: &'a InterfaceQueryResult) -> impl Iterator<Item = &'a AddressRecord> {
        res.iter().flat_map(|iface| iface.addresses.iter())
    }

    /// Owned, ordered list of all address records.
    pub fn flatten(&self, res: &InterfaceQueryResult) -> Vec<AddressRecord> {
        let out: Vec<AddressRecord> = self.iter(res).cloned().collect();
        debug!(
            interfaces = res.len(),
            addresses = out.len(),
            "interface query result flattened"
        );
        out
    }
}

/// Flatten a query result with the default flattener.
pub fn flatten_addresses(res: &InterfaceQueryResult) -> Vec<AddressRecord> {
    InterfaceFlattener.flatten(res)
}
