//! # foundation-lint
//!
//! Usage-contract linter for Foundation UI components.
//!
//! This is the main facade crate: it re-exports the core framework and the
//! built-in rules, and adds a per-file [`Engine`]. The host owns parsing,
//! file discovery, and output rendering; this crate owns the checks.
//!
//! ## Quick Start
//!
//! ```ignore
//! use foundation_lint::{Engine, EngineConfig};
//! use foundation_lint::rules::Preset;
//!
//! let engine = Engine::builder()
//!     .config(EngineConfig::new("/repo"))
//!     .preset(Preset::Strict)
//!     .build();
//!
//! // per file: parse, then check
//! let result = engine.check_module(path, &module);
//! for diagnostic in &result.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use foundation_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use foundation_lint_rules::*;
}

mod engine;

pub use engine::{Engine, EngineBuilder};
