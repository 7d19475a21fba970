//! Configuration and constants for the CLI.

/// Current cache/export schema version
pub const SCHEMA_VERSION: &str = "1.0";

// Default thresholds used by both `scan` annotation and `top` filtering
pub const DEFAULT_THRESHOLD_MS: f64 = 100.0;
pub const DEFAULT_THRESHOLD_MB: f64 = 50.0;

/// Default number of rows shown by `top`
pub const DEFAULT_TOP_COUNT: usize = 10;

// Cache location, relative to the scanned project root
pub const CACHE_DIR_NAME: &str = ".coldimport";
pub const CACHE_FILE_NAME: &str = "cache.json";

/// Advisory note attached to modules over either threshold
pub const HEAVY_IMPORT_NOTE: &str =
    "Heavy import; consider lazy loading or reducing transitive dependencies.";

/// Source file extension considered for discovery
pub const SOURCE_EXTENSION: &str = "py";

/// Package initializer; maps to the package's own dotted name
pub const PACKAGE_INIT_FILE: &str = "__init__.py";

/// Directories whose contents are never scanned
pub const EXCLUDED_DIRS: &[&str] = &[
    ".venv",
    "venv",
    "env",
    "site-packages",
    "__pycache__",
    ".git",
    "build",
    "dist",
    "tests",
];

/// Glob patterns applied when the caller does not supply any
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "alembic/**",
    "migrations/**",
    "**/alembic/**",
    "**/migrations/**",
];

/// Display labels for the built-in hidden/test-file rules
pub const BUILTIN_RULE_LABELS: &[&str] = &["hidden.*", "test_*.py", "*_test.py"];

/// Env files probed under the project root, in order
pub const DEFAULT_ENV_FILES: &[&str] = &[".env", ".env.local"];

// Per-project virtual environment interpreters, probed in order.
// POSIX layouts first, then Windows layouts.
pub const VENV_INTERPRETER_CANDIDATES: &[&[&str]] = &[
    &[".venv", "bin", "python"],
    &["venv", "bin", "python"],
    &["env", "bin", "python"],
    &[".venv", "Scripts", "python.exe"],
    &["venv", "Scripts", "python.exe"],
    &["env", "Scripts", "python.exe"],
];

/// Interpreter names looked up on PATH when no venv is found
pub const FALLBACK_INTERPRETERS: &[&str] = &["python3", "python"];
