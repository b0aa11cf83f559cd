use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::DdlViewerState;
use crate::ui::highlight::SqlHighlighter;
use crate::ui::theme::Theme;

const SPINNER_FRAMES: [&str; 6] = ["⠋", "⠙", "⠸", "⠴", "⠦", "⠇"];

/// Returns a spinner character based on elapsed time.
/// Cycles through frames every 120ms.
fn spinner_char(time_ms: u128) -> &'static str {
    SPINNER_FRAMES[(time_ms / 120) as usize % SPINNER_FRAMES.len()]
}

/// DDL pane: spinner while loading, highlighted DDL once loaded.
pub struct DdlPane;

impl DdlPane {
    /// Builds the pane content for one viewer state snapshot.
    ///
    /// Split out from `render` so tests can assert on lines without a
    /// terminal. "Loaded with no dialect" renders the text unhighlighted;
    /// "loaded with no text" renders a placeholder.
    pub fn build_lines(state: &DdlViewerState, time_ms: u128) -> Vec<Line<'static>> {
        if state.is_loading {
            return vec![Line::from(Span::styled(
                format!("{} Loading DDL...", spinner_char(time_ms)),
                Style::default().fg(Theme::LOADING),
            ))];
        }

        match &state.metadata {
            Some(ddl) => match &state.dialect {
                Some(dialect) => SqlHighlighter::new(dialect).highlight(ddl),
                None => ddl
                    .lines()
                    .map(|line| {
                        Line::from(Span::styled(
                            line.to_string(),
                            Style::default().fg(Theme::DDL_TEXT),
                        ))
                    })
                    .collect(),
            },
            None => vec![Line::from(Span::styled(
                "(no DDL available)",
                Style::default().fg(Theme::PLACEHOLDER),
            ))],
        }
    }

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &DdlViewerState,
        scroll_offset: usize,
        focused: bool,
        time_ms: u128,
    ) {
        let block = panel_block(" DDL ", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = Self::build_lines(state, time_ms);
        let total_lines = lines.len();
        let visible_lines = usize::from(inner.height);
        let max_scroll_offset = total_lines.saturating_sub(visible_lines);
        let clamped_scroll_offset = scroll_offset.min(max_scroll_offset);

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((clamped_scroll_offset as u16, 0));
        frame.render_widget(paragraph, inner);
    }
}

/// Creates the pane block with focus-aware border styling.
fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Theme::FOCUS_BORDER)
    } else {
        Style::default().fg(Theme::UNFOCUS_BORDER)
    };

    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SqlDialectInfo;

    fn dialect() -> SqlDialectInfo {
        SqlDialectInfo {
            name: "PostgreSQL".to_string(),
            reserved_words: vec!["CREATE".to_string(), "TABLE".to_string()],
            single_line_comments: vec!["--".to_string()],
            quote_strings: vec!['\''],
            identifier_quote: '"',
            script_delimiter: ";".to_string(),
        }
    }

    fn loading_state() -> DdlViewerState {
        DdlViewerState {
            is_loading: true,
            metadata: None,
            dialect: None,
        }
    }

    fn loaded_state(metadata: Option<&str>, dialect: Option<SqlDialectInfo>) -> DdlViewerState {
        DdlViewerState {
            is_loading: false,
            metadata: metadata.map(str::to_string),
            dialect,
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn loading_state_shows_spinner_line() {
        let lines = DdlPane::build_lines(&loading_state(), 0);

        assert_eq!(lines.len(), 1);
        assert!(line_text(&lines[0]).contains("Loading DDL..."));
    }

    #[test]
    fn spinner_advances_with_time() {
        let early = DdlPane::build_lines(&loading_state(), 0);
        let later = DdlPane::build_lines(&loading_state(), 120);

        assert_ne!(line_text(&early[0]), line_text(&later[0]));
    }

    #[test]
    fn loaded_state_with_dialect_highlights_keywords() {
        let state = loaded_state(Some("CREATE TABLE t ()"), Some(dialect()));

        let lines = DdlPane::build_lines(&state, 0);

        let first = &lines[0].spans[0];
        assert_eq!(first.content.as_ref(), "CREATE");
        assert_eq!(first.style.fg, Some(Theme::KEYWORD));
    }

    #[test]
    fn loaded_state_without_dialect_renders_plain_text() {
        let state = loaded_state(Some("CREATE TABLE t ()"), None);

        let lines = DdlPane::build_lines(&state, 0);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].spans[0].style.fg, Some(Theme::DDL_TEXT));
    }

    #[test]
    fn loaded_state_without_text_shows_placeholder() {
        let state = loaded_state(None, None);

        let lines = DdlPane::build_lines(&state, 0);

        assert_eq!(line_text(&lines[0]), "(no DDL available)");
    }

    #[test]
    fn multi_line_ddl_keeps_line_count() {
        let state = loaded_state(Some("CREATE TABLE t (\n  id int\n);"), Some(dialect()));

        let lines = DdlPane::build_lines(&state, 0);

        assert_eq!(lines.len(), 3);
    }
}
