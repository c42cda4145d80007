mod directive;
pub use directive::Directive;

mod config_map;
pub use config_map::ConfigMap;

mod constants;
pub use constants::DIRECTIVE_PREFIX;
