use crate::clipping::Clipping;
use crate::error::ParseResult;
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Clippings grouped by title.
///
/// Each group keeps the order clippings were added in, and titles are
/// listed in the order they were first seen.
#[derive(Debug, Default)]
pub struct TitleIndex {
    order: Vec<String>,
    groups: HashMap<String, Vec<Clipping>>,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_clippings(clippings: impl IntoIterator<Item = Clipping>) -> Self {
        let mut index = Self::new();
        for clipping in clippings {
            index.insert(clipping);
        }
        index
    }

    /// Build an index from parser output, stopping at the first error.
    pub fn try_from_results(
        results: impl IntoIterator<Item = ParseResult<Clipping>>,
    ) -> ParseResult<Self> {
        let mut index = Self::new();
        for clipping in results {
            index.insert(clipping?);
        }
        Ok(index)
    }

    pub fn insert(&mut self, clipping: Clipping) {
        match self.groups.get_mut(&clipping.title) {
            Some(group) => group.push(clipping),
            None => {
                self.order.push(clipping.title.clone());
                self.groups.insert(clipping.title.clone(), vec![clipping]);
            }
        }
    }

    /// Clippings for `title`, empty if the title is unknown.
    pub fn get(&self, title: &str) -> &[Clipping] {
        self.groups.get(title).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Clippings added strictly after `cutoff`; everything when there is no cutoff.
pub fn added_after(
    clippings: &[Clipping],
    cutoff: Option<NaiveDateTime>,
) -> impl Iterator<Item = &Clipping> {
    clippings
        .iter()
        .filter(move |clipping| cutoff.map_or(true, |cutoff| clipping.timestamp > cutoff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipping::ClippingKind;
    use crate::error::ParseError;
    use chrono::NaiveDate;

    fn clipping(title: &str, body: &str, day: u32) -> Clipping {
        Clipping {
            title: title.to_string(),
            attribution: "Author".to_string(),
            kind: ClippingKind::Highlight,
            timestamp: NaiveDate::from_ymd_opt(2018, 1, day)
                .and_then(|d| d.and_hms_opt(12, 0, 0))
                .unwrap(),
            body: body.to_string(),
        }
    }

    fn bodies<'a>(clippings: impl Iterator<Item = &'a Clipping>) -> Vec<&'a str> {
        clippings.map(|c| c.body.as_str()).collect()
    }

    #[test]
    fn test_groups_preserve_insertion_order() {
        let index = TitleIndex::from_clippings(vec![
            clipping("A", "first", 1),
            clipping("B", "second", 2),
            clipping("A", "third", 3),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.titles().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(bodies(index.get("A").iter()), vec!["first", "third"]);
        assert_eq!(bodies(index.get("B").iter()), vec!["second"]);
    }

    #[test]
    fn test_unknown_title_is_empty() {
        let index = TitleIndex::from_clippings(vec![clipping("A", "first", 1)]);
        assert!(index.get("Missing").is_empty());
        assert!(TitleIndex::new().is_empty());
    }

    #[test]
    fn test_try_from_results_stops_at_error() {
        let results = vec![
            Ok(clipping("A", "first", 1)),
            Err(ParseError::truncated_record(5, 1)),
            Ok(clipping("B", "second", 2)),
        ];
        assert!(matches!(
            TitleIndex::try_from_results(results),
            Err(ParseError::TruncatedRecord { line: 5, line_count: 1 })
        ));
    }

    #[test]
    fn test_added_after_is_strict() {
        let clippings = vec![
            clipping("A", "old", 1),
            clipping("A", "edge", 2),
            clipping("A", "new", 3),
        ];
        let cutoff = NaiveDate::from_ymd_opt(2018, 1, 2).and_then(|d| d.and_hms_opt(12, 0, 0));

        assert_eq!(bodies(added_after(&clippings, cutoff)), vec!["new"]);
        assert_eq!(
            bodies(added_after(&clippings, None)),
            vec!["old", "edge", "new"]
        );
    }
}
