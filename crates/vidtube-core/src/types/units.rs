//! Binary byte-unit constants and human-readable size rendering.

/// Canonical KiB→bytes multiplier.
pub const BYTES_PER_KB: u64 = 1024;

/// Canonical MiB→bytes multiplier (1024 * KiB).
pub const BYTES_PER_MB: u64 = 1024 * BYTES_PER_KB;

/// Canonical GiB→bytes multiplier (1024 * MiB).
pub const BYTES_PER_GB: u64 = 1024 * BYTES_PER_MB;

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Round to two decimals, the precision every size string is shown with.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a byte count with the largest fitting binary unit.
///
/// `0` → `"0 Bytes"`, `1536` → `"1.5 KB"`, `7 GiB` → `"7 GB"`.
/// Values beyond the terabyte range stay in TB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= BYTES_PER_KB as f64 && unit < SIZE_UNITS.len() - 1 {
        value /= BYTES_PER_KB as f64;
        unit += 1;
    }

    format!("{} {}", round2(value), SIZE_UNITS[unit])
}

/// Render a byte count as gigabytes with two-decimal rounding, e.g. `"8.5GB"`.
pub fn format_gb(bytes: u64) -> String {
    format!("{}GB", round2(bytes as f64 / BYTES_PER_GB as f64))
}

/// Convert a (possibly fractional, possibly negative) gigabyte amount into
/// whole bytes, truncating toward zero.
pub fn gb_to_bytes(gb: f64) -> i64 {
    (gb * BYTES_PER_GB as f64) as i64
}
