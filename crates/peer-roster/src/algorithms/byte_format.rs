//! Human-scaled byte counters (binary units)

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Format a byte counter for display.
///
/// | Range            | Output        |
/// |------------------|---------------|
/// | `< 1 KiB`        | `"512 B"`     |
/// | `< 1 MiB`        | `"1.5 KB"`    |
/// | `< 1 GiB`        | `"1.00 MB"`   |
/// | otherwise        | `"2.25 GB"`   |
///
/// The unit is picked from the raw count, then the value is rounded half-up
/// to the unit's precision. Rounding can therefore yield `1024.0 KB` just
/// below the MiB threshold.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{} KB", scaled(bytes, KIB, 1))
    } else if bytes < GIB {
        format!("{} MB", scaled(bytes, MIB, 2))
    } else {
        format!("{} GB", scaled(bytes, GIB, 2))
    }
}

/// `bytes / unit` rounded half-up to `decimals` places, always printing
/// every decimal. u128 keeps `u64::MAX * 100` in range.
fn scaled(bytes: u64, unit: u64, decimals: u32) -> String {
    let factor = 10u128.pow(decimals);
    let unit = u128::from(unit);
    let rounded = (u128::from(bytes) * factor + unit / 2) / unit;

    format!(
        "{}.{:0width$}",
        rounded / factor,
        rounded % factor,
        width = decimals as usize
    )
}
