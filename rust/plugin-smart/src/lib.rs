//! Loadable module exporting [`SmartStrategy`] through the plugin ABI.
//!
//! Build with `cargo build -p sevens-plugin-smart` and pass the resulting
//! `libsevens_plugin_smart.so` (or platform equivalent) to
//! `sevens competition`.

pub use sevens_ai::smart::SmartStrategy;

sevens_ai::export_strategy!(SmartStrategy);
