//! Fixed measurement routine executed by the child interpreter.
//!
//! Contract: `python -c PROBE_SCRIPT <module> <project_root>` prints exactly
//! one JSON object as its final stdout line, either
//! `{"status": "ok", "import_time_ms": f, "memory_mb": f}` or
//! `{"status": "error", "error_type": s, "error_message": s}`.

pub const PROBE_SCRIPT: &str = r#"
import importlib
import json
import sys
import time
import tracemalloc

module_name, project_root = sys.argv[1], sys.argv[2]
sys.path.insert(0, project_root)

tracemalloc.start()
try:
    started = time.perf_counter()
    try:
        importlib.import_module(module_name)
    except Exception as exc:
        record = {
            "status": "error",
            "error_type": type(exc).__name__,
            "error_message": str(exc),
        }
    else:
        elapsed_ms = (time.perf_counter() - started) * 1000.0
        _current, peak = tracemalloc.get_traced_memory()
        record = {
            "status": "ok",
            "import_time_ms": elapsed_ms,
            "memory_mb": peak / (1024 * 1024),
        }
finally:
    tracemalloc.stop()

print(json.dumps(record), flush=True)
"#;
