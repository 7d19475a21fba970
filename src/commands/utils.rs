use crate::utils::config::{CACHE_DIR_NAME, CACHE_FILE_NAME, SCHEMA_VERSION};

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Coldimport Scan Payload Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!("Cache Location:  <project>/{}/{}", CACHE_DIR_NAME, CACHE_FILE_NAME);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  schema_version: string    - Schema version (e.g., '{}')", SCHEMA_VERSION);
        println!("  generated_at: string      - ISO 8601 UTC timestamp");
        println!("  project_root: string      - Scanned project directory");
        println!("  settings: object");
        println!("    threshold_ms: number    - Heavy-import time threshold");
        println!("    threshold_mb: number    - Heavy-import memory threshold");
        println!("    exclusions: array       - Effective exclusion labels");
        println!("  summary: object");
        println!("    total_modules: number");
        println!("    scanned_modules: number - Modules imported successfully");
        println!("    failed_modules: number  - Modules that failed to import");
        println!("  modules: array");
        println!("    name: string            - Dotted module name");
        println!("    file: string            - Source file path");
        println!("    import_time_ms: number? - Null when status is 'error'");
        println!("    memory_mb: number?      - Null when status is 'error'");
        println!("    status: string          - 'ok' or 'error'");
        println!("    error: string?          - '<kind>: <message>' on failure");
        println!("    notes: array            - Advisory annotations");
    } else {
        println!("Use --show for detailed schema information");
    }
}
