mod domain;
pub use domain::DIRECTIVE_PREFIX;
pub use domain::{ConfigMap, Directive};

mod error;
pub use error::{ModelError, ModelResult};

mod net;
pub use net::{AddressFamily, AddressRecord, Interface, InterfaceQueryResult};
