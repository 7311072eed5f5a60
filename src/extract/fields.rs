//! Field pattern matching: turning a line sequence into typed field candidates.
//!
//! Each target field is filled by an ordered list of named rules, most
//! specific first. The first rule that matches any line (scanning lines in
//! document order) wins for that field; later rules and lines are not
//! consulted once a field is filled. Fields fill independently, so a single
//! line may supply several fields. Explicit labels always beat positional
//! heuristics.

use regex::Regex;

/// Plausible year range for artwork creation dates.
const YEAR_MIN: i32 = 1000;
const YEAR_MAX: i32 = 2100;

/// Minimum length for a line considered in positional heuristics.
const MIN_SUBSTANTIAL_LEN: usize = 3;

/// How many leading lines the positional title/artist heuristic inspects.
const POSITIONAL_WINDOW: usize = 5;

/// Material keywords that mark a line as a likely medium description.
const MEDIUM_KEYWORDS: [&str; 22] = [
    "oil",
    "canvas",
    "acrylic",
    "watercolor",
    "watercolour",
    "gouache",
    "ink",
    "charcoal",
    "pastel",
    "bronze",
    "marble",
    "ceramic",
    "lithograph",
    "etching",
    "screenprint",
    "woodcut",
    "collage",
    "mixed media",
    "photograph",
    "gelatin",
    "panel",
    "linen",
];

/// Boilerplate markers: lines carrying gallery plumbing, not artwork info.
const BOILERPLATE_MARKERS: [&str; 10] = [
    "page",
    "copyright",
    "\u{a9}",
    "all rights",
    "gallery",
    "contact",
    "email",
    "phone",
    "website",
    "www",
];

/// The fields the matcher extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Artist,
    Year,
    Medium,
    Dimensions,
    Price,
}

/// One extracted candidate: which field, its value, and the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCandidate {
    pub field: Field,
    pub value: String,
    pub line: usize,
}

/// The winning value per field. Absent fields stay `None`; they are never
/// filled with placeholders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub price: Option<String>,
}

impl FieldMap {
    /// Number of populated fields.
    pub fn len(&self) -> usize {
        [
            self.title.is_some(),
            self.artist.is_some(),
            self.year.is_some(),
            self.medium.is_some(),
            self.dimensions.is_some(),
            self.price.is_some(),
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }

    /// True when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_filled(&self, field: Field) -> bool {
        match field {
            Field::Title => self.title.is_some(),
            Field::Artist => self.artist.is_some(),
            Field::Year => self.year.is_some(),
            Field::Medium => self.medium.is_some(),
            Field::Dimensions => self.dimensions.is_some(),
            Field::Price => self.price.is_some(),
        }
    }

    /// First-match-wins insert: a candidate for an already-filled field is
    /// dropped.
    fn insert(&mut self, candidate: FieldCandidate) {
        if self.is_filled(candidate.field) {
            return;
        }
        match candidate.field {
            Field::Title => self.title = Some(candidate.value),
            Field::Artist => self.artist = Some(candidate.value),
            Field::Year => {
                if let Ok(year) = candidate.value.parse::<i32>() {
                    self.year = Some(year);
                }
            }
            Field::Medium => self.medium = Some(candidate.value),
            Field::Dimensions => self.dimensions = Some(candidate.value),
            Field::Price => self.price = Some(candidate.value),
        }
    }
}

/// Compiled pattern rules for field extraction.
///
/// Regexes are compiled once at construction; reuse one matcher across all
/// pages of a batch.
pub struct FieldMatcher {
    label: Regex,
    year: Regex,
    dimensions: Regex,
    price: Regex,
}

impl FieldMatcher {
    /// Build the matcher, compiling all rules.
    pub fn new() -> Self {
        Self {
            label: Regex::new(
                r"(?i)^(title|artist|year|date|medium|materials?|dimensions?|size|price)\s*[:\u{FF1A}]\s*(.+)$",
            )
            .unwrap(),
            year: Regex::new(r"\b(\d{4})\b").unwrap(),
            dimensions: Regex::new(
                r"(?i)\b\d+(?:[.,]\d+)?\s*[x\u{D7}]\s*\d+(?:[.,]\d+)?(?:\s*[x\u{D7}]\s*\d+(?:[.,]\d+)?)?(?:\s*(?:cm|mm|in|inches))?\b",
            )
            .unwrap(),
            price: Regex::new(
                r"(?i)[$\u{20AC}\u{A3}\u{A5}]\s*\d{1,3}(?:,\d{3})*(?:\.\d+)?|\b\d{1,3}(?:,\d{3})*(?:\.\d+)?\s*(?:USD|EUR|GBP)\b",
            )
            .unwrap(),
        }
    }

    /// Run all rules over a line sequence and return the winning value per
    /// field. Zero lines in, empty map out.
    pub fn match_lines(&self, lines: &[String]) -> FieldMap {
        let mut map = FieldMap::default();

        // Rule order: labels, then value patterns, then positional and
        // keyword fallbacks. Each pass only fills still-empty fields.
        for candidate in self.labeled_candidates(lines) {
            map.insert(candidate);
        }
        for candidate in self.pattern_candidates(lines) {
            map.insert(candidate);
        }
        self.positional_pass(lines, &mut map);
        self.medium_pass(lines, &mut map);

        map
    }

    /// Rule: explicitly labeled lines ("Artist: X", "Size: 24 x 36 in").
    fn labeled_candidates(&self, lines: &[String]) -> Vec<FieldCandidate> {
        let mut candidates = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            let Some(caps) = self.label.captures(line) else {
                continue;
            };
            let key = caps.get(1).map_or("", |m| m.as_str()).to_lowercase();
            let value = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
            if value.is_empty() {
                continue;
            }
            let field = match key.as_str() {
                "title" => Field::Title,
                "artist" => Field::Artist,
                "year" | "date" => Field::Year,
                "medium" | "material" | "materials" => Field::Medium,
                "dimension" | "dimensions" | "size" => Field::Dimensions,
                "price" => Field::Price,
                _ => continue,
            };
            // Labeled years still go through the plausibility check
            let value = if field == Field::Year {
                match self.plausible_year(&value) {
                    Some(year) => year.to_string(),
                    None => continue,
                }
            } else {
                value
            };
            candidates.push(FieldCandidate { field, value, line: idx });
        }
        candidates
    }

    /// Rules: bare value patterns for year, dimensions, and price.
    fn pattern_candidates(&self, lines: &[String]) -> Vec<FieldCandidate> {
        let mut candidates = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            let dims = self.dimensions.find(line);
            if let Some(m) = dims {
                candidates.push(FieldCandidate {
                    field: Field::Dimensions,
                    value: m.as_str().to_string(),
                    line: idx,
                });
            }
            // A 4-digit dimension component ("1200 x 800 mm") is not a year
            let excluded = dims.map(|m| (m.start(), m.end()));
            if let Some(year) = self.plausible_year_outside(line, excluded) {
                candidates.push(FieldCandidate {
                    field: Field::Year,
                    value: year.to_string(),
                    line: idx,
                });
            }
            if let Some(m) = self.price.find(line) {
                candidates.push(FieldCandidate {
                    field: Field::Price,
                    value: m.as_str().to_string(),
                    line: idx,
                });
            }
        }
        candidates
    }

    /// Rule: positional convention — the first substantial line is the
    /// title, the second is the artist. Skipped for fields a label already
    /// filled; a line that merely echoes the other, labeled field is passed
    /// over and the next candidate line is promoted.
    fn positional_pass(&self, lines: &[String], map: &mut FieldMap) {
        let mut candidates = Vec::new();
        for (idx, line) in lines.iter().take(POSITIONAL_WINDOW).enumerate() {
            if line.len() < MIN_SUBSTANTIAL_LEN || line.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            if is_boilerplate(line) || self.label.is_match(line) {
                continue;
            }
            // A line that is itself a year/dimension/price value cannot be a
            // title or artist
            if self.plausible_year(line).is_some()
                || self.dimensions.is_match(line)
                || self.price.is_match(line)
            {
                continue;
            }
            candidates.push((idx, line));
        }

        let mut candidates = candidates.into_iter();

        // First slot is the title; a line echoing the labeled artist is not
        // a title, the next candidate takes the slot instead
        let first = candidates.find(|(_, line)| map.artist.as_deref() != Some(line.as_str()));
        if let Some((idx, line)) = first {
            map.insert(FieldCandidate {
                field: Field::Title,
                value: line.clone(),
                line: idx,
            });
        }

        // Second slot is the artist, likewise never echoing the title
        let second = candidates.find(|(_, line)| map.title.as_deref() != Some(line.as_str()));
        if let Some((idx, line)) = second {
            map.insert(FieldCandidate {
                field: Field::Artist,
                value: line.clone(),
                line: idx,
            });
        }
    }

    /// Rules: medium by material keyword, then by elimination — a
    /// substantial unlabeled line matching no other field pattern.
    fn medium_pass(&self, lines: &[String], map: &mut FieldMap) {
        if map.medium.is_some() {
            return;
        }

        for (idx, line) in lines.iter().enumerate() {
            if self.taken_as_title_or_artist(line, map) {
                continue;
            }
            let lower = line.to_lowercase();
            if MEDIUM_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
                let value = self.strip_trailing_dimensions(line);
                map.insert(FieldCandidate {
                    field: Field::Medium,
                    value,
                    line: idx,
                });
                return;
            }
        }

        for (idx, line) in lines.iter().enumerate() {
            if line.len() <= 5
                || is_boilerplate(line)
                || self.taken_as_title_or_artist(line, map)
                || self.label.is_match(line)
                || self.plausible_year(line).is_some()
                || self.dimensions.is_match(line)
                || self.price.is_match(line)
            {
                continue;
            }
            map.insert(FieldCandidate {
                field: Field::Medium,
                value: line.clone(),
                line: idx,
            });
            return;
        }
    }

    fn taken_as_title_or_artist(&self, line: &str, map: &FieldMap) -> bool {
        map.title.as_deref() == Some(line) || map.artist.as_deref() == Some(line)
    }

    /// Drop a dimension tail from a combined "Oil on canvas, 24 x 36 in" line.
    fn strip_trailing_dimensions(&self, line: &str) -> String {
        match self.dimensions.find(line) {
            Some(m) if m.start() > 0 => line[..m.start()]
                .trim_end_matches([' ', ',', '-'])
                .to_string(),
            _ => line.to_string(),
        }
    }

    /// First 4-digit token within the plausible year range, if any.
    fn plausible_year(&self, line: &str) -> Option<i32> {
        self.plausible_year_outside(line, None)
    }

    /// Like [`Self::plausible_year`], but ignoring tokens inside an excluded
    /// byte span (a dimensions match on the same line).
    fn plausible_year_outside(&self, line: &str, excluded: Option<(usize, usize)>) -> Option<i32> {
        for caps in self.year.captures_iter(line) {
            let m = caps.get(1).expect("year rule has one capture group");
            if let Some((start, end)) = excluded {
                if m.start() >= start && m.end() <= end {
                    continue;
                }
            }
            if let Ok(year) = m.as_str().parse::<i32>() {
                if (YEAR_MIN..=YEAR_MAX).contains(&year) {
                    return Some(year);
                }
            }
        }
        None
    }
}

impl Default for FieldMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a line is gallery boilerplate rather than artwork information.
pub fn is_boilerplate(line: &str) -> bool {
    let lower = line.to_lowercase();
    BOILERPLATE_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_lines_empty_map() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&[]);
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_linebreak_layout() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&lines(&[
            "Starry Night",
            "Vincent van Gogh",
            "1889",
            "Oil on canvas",
            "73.7 x 92.1 cm",
        ]));

        assert_eq!(map.title.as_deref(), Some("Starry Night"));
        assert_eq!(map.artist.as_deref(), Some("Vincent van Gogh"));
        assert_eq!(map.year, Some(1889));
        assert_eq!(map.medium.as_deref(), Some("Oil on canvas"));
        assert_eq!(map.dimensions.as_deref(), Some("73.7 x 92.1 cm"));
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn test_labeled_lines_win_over_position() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&lines(&[
            "Spring Exhibition",
            "Hall B",
            "Artist: Yayoi Kusama",
            "Title: Infinity Nets",
        ]));

        assert_eq!(map.title.as_deref(), Some("Infinity Nets"));
        assert_eq!(map.artist.as_deref(), Some("Yayoi Kusama"));
    }

    #[test]
    fn test_one_line_supplies_two_fields() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&lines(&[
            "Medium: Oil on canvas",
            "Dimensions: 24 x 36 in",
        ]));

        assert_eq!(map.medium.as_deref(), Some("Oil on canvas"));
        assert_eq!(map.dimensions.as_deref(), Some("24 x 36 in"));
    }

    #[test]
    fn test_labeled_artist_not_echoed_as_title() {
        let matcher = FieldMatcher::new();
        // The artist name printed above the title, then repeated as a label
        let map = matcher.match_lines(&lines(&[
            "Yayoi Kusama",
            "Infinity Nets",
            "Artist: Yayoi Kusama",
        ]));

        assert_eq!(map.title.as_deref(), Some("Infinity Nets"));
        assert_eq!(map.artist.as_deref(), Some("Yayoi Kusama"));
    }

    #[test]
    fn test_dimension_component_not_a_year() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&lines(&["Tapestry", "Anni Albers", "1200 x 800 mm"]));
        assert_eq!(map.dimensions.as_deref(), Some("1200 x 800 mm"));
        assert_eq!(map.year, None);

        // A year outside the dimension span on the same line still counts
        let map = matcher.match_lines(&lines(&["1200 x 800 mm, woven 1949"]));
        assert_eq!(map.dimensions.as_deref(), Some("1200 x 800 mm"));
        assert_eq!(map.year, Some(1949));
    }

    #[test]
    fn test_elimination_medium_tolerates_implausible_year_tokens() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&lines(&[
            "Blue Vessel",
            "R. Ozeri",
            "stoneware form no. 4512",
        ]));
        assert_eq!(map.medium.as_deref(), Some("stoneware form no. 4512"));
        assert_eq!(map.year, None);
    }

    #[test]
    fn test_year_plausibility() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&lines(&["Lot 4512", "9999", "Painted in 1987"]));
        assert_eq!(map.year, Some(1987));

        let map = matcher.match_lines(&lines(&["0042", "5000"]));
        assert_eq!(map.year, None);
    }

    #[test]
    fn test_first_match_wins_per_field() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&lines(&["circa 1920", "reprinted 1975"]));
        assert_eq!(map.year, Some(1920));
    }

    #[test]
    fn test_dimensions_variants() {
        let matcher = FieldMatcher::new();

        let map = matcher.match_lines(&lines(&["100 \u{D7} 80 cm"]));
        assert_eq!(map.dimensions.as_deref(), Some("100 \u{D7} 80 cm"));

        let map = matcher.match_lines(&lines(&["12 X 18 in"]));
        assert_eq!(map.dimensions.as_deref(), Some("12 X 18 in"));

        let map = matcher.match_lines(&lines(&["30 x 40 x 25 cm"]));
        assert_eq!(map.dimensions.as_deref(), Some("30 x 40 x 25 cm"));
    }

    #[test]
    fn test_price_variants() {
        let matcher = FieldMatcher::new();

        let map = matcher.match_lines(&lines(&["$ 12,500"]));
        assert_eq!(map.price.as_deref(), Some("$ 12,500"));

        let map = matcher.match_lines(&lines(&["Price on request: 8,000 EUR"]));
        assert_eq!(map.price.as_deref(), Some("8,000 EUR"));

        let map = matcher.match_lines(&lines(&["\u{20AC}950"]));
        assert_eq!(map.price.as_deref(), Some("\u{20AC}950"));
    }

    #[test]
    fn test_medium_keyword_rule() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&lines(&[
            "Morning Light",
            "A. Painter",
            "gouache and ink on paper",
        ]));
        assert_eq!(map.medium.as_deref(), Some("gouache and ink on paper"));
    }

    #[test]
    fn test_boilerplate_skipped_positionally() {
        let matcher = FieldMatcher::new();
        let map = matcher.match_lines(&lines(&[
            "www.example-gallery.com",
            "The Red Studio",
            "Henri Matisse",
        ]));
        assert_eq!(map.title.as_deref(), Some("The Red Studio"));
        assert_eq!(map.artist.as_deref(), Some("Henri Matisse"));
    }

    #[test]
    fn test_is_boilerplate() {
        assert!(is_boilerplate("\u{a9} 2024 Example Gallery"));
        assert!(is_boilerplate("Contact: info@example.com"));
        assert!(!is_boilerplate("Oil on canvas"));
    }
}
