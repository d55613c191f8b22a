//! Common constants used throughout the Mould application.

/// Per-template configuration file name
pub const CONFIG_FILE: &str = ".mouldconfig.json";

/// Per-template ignore file name
pub const IGNORE_FILE: &str = ".mouldignore";

/// File listing the template source directories
pub const SOURCES_FILE: &str = "template-sources.json";

/// Environment variable overriding the Mould home directory
pub const MOULD_HOME_ENV: &str = "MOULD_HOME";

/// Directory under `$HOME` used when `MOULD_HOME` is not set
pub const DEFAULT_HOME_DIR: &str = "mould";

/// Entry names that are never copied out of a template
pub const HIDDEN_NAMES: [&str; 4] = [".DS_Store", CONFIG_FILE, IGNORE_FILE, "node_modules"];
