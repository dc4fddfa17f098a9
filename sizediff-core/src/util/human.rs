const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Human-readable byte string: SI units (base 1000), up to two decimals
/// with trailing zeros trimmed, sign preserved for negative deltas.
pub fn pretty_bytes(n: i64) -> String {
    let mag = n.unsigned_abs();
    let sign = if n < 0 { "-" } else { "" };
    if mag < 1000 {
        return format!("{sign}{mag} {}", UNITS[0]);
    }
    let mut v = mag as f64;
    let mut unit = 0;
    while v >= 1000.0 && unit < UNITS.len() - 1 {
        v /= 1000.0;
        unit += 1;
    }
    let mut r = (v * 100.0).round() / 100.0;
    // rounding can push the value back over the unit boundary, e.g. 999999 B
    if r >= 1000.0 && unit < UNITS.len() - 1 {
        r /= 1000.0;
        unit += 1;
    }
    format!("{sign}{r} {}", UNITS[unit])
}
