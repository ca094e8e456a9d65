//! Right-aligned text pyramid.
//!
//! Line `i` of a pyramid with `n` rows is `n - i - 1` spaces followed by
//! `i + 1` markers, so every line is exactly `n` characters wide. Line
//! terminators are the writer's business.

use std::num::NonZeroUsize;

use crate::domain::DomainError;

/// Marker used when nothing else is configured.
pub const DEFAULT_MARKER: char = '#';

/// Pyramid height. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowCount(NonZeroUsize);

impl RowCount {
    /// `None` for zero.
    pub fn new(rows: usize) -> Option<Self> {
        NonZeroUsize::new(rows).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for RowCount {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(DomainError::OutOfRange { value, minimum: 1 })
    }
}

/// A pyramid ready to be rendered line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pyramid {
    rows: RowCount,
    marker: char,
}

impl Pyramid {
    pub fn new(rows: RowCount, marker: char) -> Self {
        Self { rows, marker }
    }

    pub fn rows(&self) -> RowCount {
        self.rows
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Render a single line. `index` must be below the row count.
    pub fn line(&self, index: usize) -> String {
        let width = self.rows.get();
        debug_assert!(index < width);
        let padding = width - index - 1;

        std::iter::repeat_n(' ', padding)
            .chain(std::iter::repeat_n(self.marker, index + 1))
            .collect()
    }

    /// Lines from the top (one marker) to the base (all markers).
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows.get()).map(|index| self.line(index))
    }
}

/// Render every line of the pyramid eagerly.
pub fn render_pyramid(rows: RowCount, marker: char) -> Vec<String> {
    Pyramid::new(rows, marker).lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> RowCount {
        RowCount::new(n).unwrap()
    }

    #[test]
    fn single_row_is_one_marker() {
        assert_eq!(render_pyramid(rows(1), '#'), vec!["#"]);
    }

    #[test]
    fn three_rows() {
        assert_eq!(render_pyramid(rows(3), '#'), vec!["  #", " ##", "###"]);
    }

    #[test]
    fn shape_holds_up_to_fifty_rows() {
        for n in 1..=50 {
            let lines = render_pyramid(rows(n), '#');
            assert_eq!(lines.len(), n);
            for (i, line) in lines.iter().enumerate() {
                let spaces = line.chars().take_while(|&c| c == ' ').count();
                let markers = line.chars().filter(|&c| c == '#').count();
                assert_eq!(spaces, n - i - 1, "rows {n}, line {i}");
                assert_eq!(markers, i + 1, "rows {n}, line {i}");
                assert_eq!(line.chars().count(), n);
            }
            assert!(lines[n - 1].chars().all(|c| c == '#'));
        }
    }

    #[test]
    fn custom_marker() {
        assert_eq!(render_pyramid(rows(2), '*'), vec![" *", "**"]);
    }

    #[test]
    fn multibyte_marker_keeps_char_width() {
        let lines = render_pyramid(rows(2), '█');
        assert_eq!(lines[0].chars().count(), 2);
        assert_eq!(lines[1], "██");
    }

    #[test]
    fn wide_base_with_multibyte_marker() {
        let pyramid = Pyramid::new(rows(100_000), '█');
        let base = pyramid.line(99_999);
        assert_eq!(base.chars().count(), 100_000);
        assert_eq!(base.len(), 300_000);
        assert_eq!(pyramid.line(0).trim_start(), "█");
    }

    #[test]
    fn lines_are_rendered_on_demand() {
        let pyramid = Pyramid::new(rows(usize::MAX), '#');
        let lines = pyramid.lines();
        assert_eq!(lines.size_hint(), (usize::MAX, Some(usize::MAX)));
    }

    #[test]
    fn zero_rows_rejected() {
        assert!(RowCount::new(0).is_none());
        assert_eq!(
            RowCount::try_from(0),
            Err(DomainError::OutOfRange {
                value: 0,
                minimum: 1
            })
        );
    }

    #[test]
    fn negative_rows_rejected() {
        assert!(RowCount::try_from(-4).is_err());
    }
}
