//! Completion text parser
//!
//! Splits the free-form answer of the completion service into landmarks and
//! activities. The text is scanned once, line by line. A line starting with
//! `Landmarks:` or `Activities:` switches the target list; a line whose trimmed
//! form starts with `-` is appended to the current target with its first two
//! characters removed. Everything else is ignored.
//!
//! The two-character cut assumes `"- item"`. Bullets written as `"-item"` lose
//! the first character of the item. This matches the output the web pages were
//! built against and is kept as is.

use crate::models::CityInfo;

const LANDMARKS_MARKER: &str = "Landmarks:";
const ACTIVITIES_MARKER: &str = "Activities:";
const BULLET: char = '-';
const BULLET_PREFIX_CHARS: usize = 2;

/// Which list bullet lines currently go to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Landmarks,
    Activities,
}

/// Classification of a single line
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Marker(Section),
    Bullet(&'a str),
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if line.starts_with(LANDMARKS_MARKER) {
        return Line::Marker(Section::Landmarks);
    }
    if line.starts_with(ACTIVITIES_MARKER) {
        return Line::Marker(Section::Activities);
    }

    let trimmed = line.trim();
    if trimmed.starts_with(BULLET) {
        let entry = trimmed
            .char_indices()
            .nth(BULLET_PREFIX_CHARS)
            .map_or("", |(offset, _)| &trimmed[offset..]);
        Line::Bullet(entry)
    } else {
        Line::Other
    }
}

/// Parse a completion into landmarks and activities.
///
/// Never fails: text without markers yields two empty lists.
#[must_use]
pub fn parse_city_info(content: &str) -> CityInfo {
    let mut info = CityInfo::default();
    let mut section = Section::None;

    for line in content.split('\n') {
        match classify(line) {
            Line::Marker(next) => section = next,
            Line::Bullet(entry) => match section {
                Section::Landmarks => info.landmarks.push(entry.to_string()),
                Section::Activities => info.activities.push(entry.to_string()),
                Section::None => {}
            },
            Line::Other => {}
        }
    }

    info
}
