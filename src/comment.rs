//! Line comment handling

/// Return the part of `line` before the first comment marker.
///
/// Markers inside string literals are not special: `"http://x"` is cut at
/// the `//` like any other occurrence.
pub fn strip_comment<'a>(line: &'a str, marker: &str) -> &'a str {
    match line.find(marker) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Whether a raw line belongs in the source listing.
///
/// Lines that open with a space, a `#`, or the comment marker are left out;
/// empty lines are kept.
pub fn is_listing_line(line: &str, marker: &str) -> bool {
    if line.is_empty() {
        return true;
    }
    !(line.starts_with(' ') || line.starts_with('#') || line.starts_with(marker))
}

/// Lines of `source` that belong in the source listing
pub fn source_listing<'a>(source: &'a str, marker: &'a str) -> impl Iterator<Item = &'a str> {
    source
        .lines()
        .filter(move |line| is_listing_line(line, marker))
}
