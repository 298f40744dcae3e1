//! Message and menu text from the terminal frame.
//!
//! The terminal shows the message line and any pop-up window on top of
//! the rendered map. The window's left edge is taken from the first row's
//! indentation; everything left of it is map. A row whose map run reaches
//! into the window column is split at the first gap of two or more blanks
//! and only the trailing fragment is kept.
//!
//! A window ends at a row carrying `(end)`, `--More--`, or a `(k of n)`
//! page marker, and that row is included. Without such a marker only the
//! first row is text; every row below it belongs to the map.

use nletext_core::TerminalGrid;

/// Configuration for [`ScreenTextExtractor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageConfig {
    /// Keep blank rows inside a terminated window as empty lines.
    ///
    /// Default: `false` (blank rows are dropped, so the output never
    /// contains two consecutive newlines).
    pub preserve_blank_lines: bool,
}

/// Extracts the message or menu text from a terminal frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenTextExtractor {
    config: MessageConfig,
}

impl ScreenTextExtractor {
    /// Create an extractor.
    pub fn new(config: MessageConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &MessageConfig {
        &self.config
    }

    /// The message text of `grid`, or an empty string.
    pub fn extract(&self, grid: &TerminalGrid<'_>) -> String {
        let Some(col0) = grid
            .row(0)
            .and_then(|row| row.iter().position(|&b| !is_blank(b)))
        else {
            return String::new();
        };
        let fragments: Vec<Option<String>> =
            grid.iter_rows().map(|row| fragment(row, col0)).collect();

        let terminator = fragments
            .iter()
            .position(|f| f.as_deref().is_some_and(is_terminator));
        let lines: Vec<&str> = match terminator {
            Some(last) => fragments[..=last]
                .iter()
                .filter_map(|f| match f {
                    Some(text) => Some(text.as_str()),
                    None if self.config.preserve_blank_lines => Some(""),
                    None => None,
                })
                .collect(),
            None => fragments
                .first()
                .and_then(|f| f.as_deref())
                .into_iter()
                .collect(),
        };
        lines.join("\n")
    }
}

fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | 0)
}

/// The text of `row` from column `col0` on, trimmed, or `None` if blank.
fn fragment(row: &[u8], col0: usize) -> Option<String> {
    let mut tail = row.get(col0..)?;
    let crosses = col0 > 0
        && !is_blank(row[col0 - 1])
        && tail.first().is_some_and(|&b| !is_blank(b));
    if crosses {
        let gap = tail.windows(2).position(|w| is_blank(w[0]) && is_blank(w[1]))?;
        tail = &tail[gap..];
    }
    let start = tail.iter().position(|&b| !is_blank(b))?;
    let end = tail.iter().rposition(|&b| !is_blank(b))?;
    Some(tail[start..=end].iter().map(|&b| char::from(b)).collect())
}

fn is_terminator(text: &str) -> bool {
    text.contains("(end)") || text.contains("--More--") || has_page_marker(text)
}

/// Whether `text` contains `(k of n)`.
fn has_page_marker(text: &str) -> bool {
    text.match_indices('(').any(|(i, _)| {
        strip_number(&text[i + 1..])
            .and_then(|rest| rest.strip_prefix(" of "))
            .and_then(strip_number)
            .is_some_and(|rest| rest.starts_with(')'))
    })
}

fn strip_number(text: &str) -> Option<&str> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0).then(|| &text[digits..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nletext_test_utils::strs_to_fitted_2d;

    fn extract_with(lines: &[&str], config: MessageConfig) -> String {
        let (chars, rows, cols) = strs_to_fitted_2d(lines, b' ');
        let grid = TerminalGrid::new(&chars, rows, cols).unwrap();
        ScreenTextExtractor::new(config).extract(&grid)
    }

    fn extract(lines: &[&str]) -> String {
        extract_with(lines, MessageConfig::default())
    }

    #[test]
    fn blank_frame_is_empty() {
        assert_eq!(extract(&["", "    ", "  |..@..|"]), "");
    }

    #[test]
    fn single_message_stops_at_blank_row() {
        assert_eq!(
            extract(&[" It's a wall. ", " ", "   -----|", "   |..@.|"]),
            "It's a wall."
        );
    }

    #[test]
    fn stops_at_map_row() {
        assert_eq!(
            extract(&["You see here a dagger.", "-----|...."]),
            "You see here a dagger."
        );
    }

    #[test]
    fn more_is_kept_and_ends_the_message() {
        assert_eq!(
            extract(&["Hello--More--", "   |..@..|", "   -------"]),
            "Hello--More--"
        );
    }

    #[test]
    fn blank_rows_collapse_by_default() {
        let menu = [
            "   Pick one   ",
            "              ",
            "   a - apple  ",
            "   (end)      ",
        ];
        assert_eq!(extract(&menu), "Pick one\na - apple\n(end)");
        assert_eq!(
            extract_with(
                &menu,
                MessageConfig {
                    preserve_blank_lines: true
                }
            ),
            "Pick one\n\na - apple\n(end)"
        );
    }

    #[test]
    fn map_run_into_window_is_cut() {
        let frame = ["      Things:", "|......  a rock", "      (end)"];
        assert_eq!(extract(&frame), "Things:\na rock\n(end)");
    }

    #[test]
    fn page_markers() {
        assert!(has_page_marker("(1 of 5)"));
        assert!(has_page_marker("more (12 of 130) here"));
        assert!(!has_page_marker("(For instructions type a '?')"));
        assert!(!has_page_marker("(1 of )"));
        assert!(!has_page_marker("( of 2)"));
    }

    #[test]
    fn unterminated_message_ignores_monster_rows() {
        assert_eq!(
            extract(&[
                " You hear some noises in the distance.",
                "   |..ddd..|",
                "   |...@...|",
            ]),
            "You hear some noises in the distance."
        );
        assert_eq!(
            extract(&[" You hear some noises.", "         F  ", ""]),
            "You hear some noises."
        );
    }

    #[test]
    fn unterminated_message_ignores_prose_below() {
        assert_eq!(
            extract(&["doorway      ", "", "      ------------ ", "      |..........| "]),
            "doorway"
        );
        assert_eq!(extract(&["Welcome!", "Second line"]), "Welcome!");
    }

    #[test]
    fn latin1_bytes_decode() {
        let chars = [0xe9u8, b'!'];
        let grid = TerminalGrid::new(&chars, 1, 2).unwrap();
        assert_eq!(ScreenTextExtractor::default().extract(&grid), "\u{e9}!");
    }
}
