mod family;
pub use family::AddressFamily;

mod address;
pub use address::AddressRecord;

mod interface;
pub use interface::{Interface, InterfaceQueryResult};
