use super::{lines::Source, region::Region};

/// Extracts a region's text, truncating to `max` bytes with "..." suffix if
/// needed. Truncation backs off to a char boundary.
///
/// Used for human-readable snapshot output.
pub fn preview(source: &Source, region: &Region, max: usize) -> String {
    let mut s = region.text(source);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
