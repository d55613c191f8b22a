//! Mould copies named project templates to a new location, replacing
//! placeholder patterns with values supplied on the command line.

/// Command-line interface module for the Mould application
pub mod cli;

/// Template configuration (.mouldconfig.json) loading and validation
pub mod config;

/// Well-known file names
pub mod constants;

/// Error types and handling for the Mould application
pub mod error;

/// Writes a template tree to its destination
pub mod exporter;

/// File and directory exclusion rules
/// Hides built-in names and patterns listed in .mouldignore
pub mod ignore;

/// Parsing and checking of template input values
pub mod inputs;

/// Logger setup
pub mod logger;

/// Template lookup across sources
pub mod resolver;

/// A single template source directory
pub mod source;

/// Template source list loading
pub mod sources;

/// Ordered pattern substitution
pub mod substitution;

/// Named templates
pub mod template;

/// Recursive template tree listing
pub mod walker;
