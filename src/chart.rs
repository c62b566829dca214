//! ASCII bar rendering for console reports.

/// Proportional bar of up to `width` blocks scaled against `max_count`.
/// Any non-zero count draws at least one block so small categories stay
/// visible next to the dominant one.
pub fn bar(count: u64, max_count: u64, width: usize) -> String {
    if max_count == 0 || count == 0 {
        return String::new();
    }
    let mut blocks = ((count * width as u64) / max_count) as usize;
    if blocks == 0 {
        blocks = 1;
    }
    "\u{2588}".repeat(blocks)
}

/// Bar of `value / scale` blocks, or `None` once that would exceed `cap`.
/// Callers render the `None` case as an off-scale marker.
pub fn scaled_bar(value: u64, scale: u64, cap: usize) -> Option<String> {
    if scale == 0 {
        return Some(String::new());
    }
    let blocks = (value / scale) as usize;
    if blocks > cap {
        return None;
    }
    Some("\u{2588}".repeat(blocks))
}
