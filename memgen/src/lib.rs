//! Library interface for `tpie-memgen`.
//!
//! Generates TPIE's `tpie_unsafe_new` / `tpie_new` construction overloads:
//! one guarded allocate/construct/finalize template per arity, plus one
//! forwarding shim per arity and per combination of const and mutable
//! reference arguments.
//!
//! ```
//! use tpie_memgen::driver;
//! use tpie_memgen::emit::RenderOptions;
//!
//! let generated = driver::generate(&RenderOptions::default());
//! assert!(generated.text.starts_with(driver::HEADER));
//! assert_eq!(generated.stats.total(), 531);
//! ```

pub mod bounds;
pub mod config;
pub mod driver;
pub mod emit;
pub mod error;
pub mod logging;
pub mod output;
pub mod signature;
