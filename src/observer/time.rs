use chrono::Local;

/// Local wall-clock time, e.g. `2025-03-01T14:05:09.123456`.
pub(super) fn now_iso() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Log line prefix, e.g. `2025-03-01 14:05:09,123`.
pub(super) fn log_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S,%3f").to_string()
}
