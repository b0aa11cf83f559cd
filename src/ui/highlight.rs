//! Dialect-driven syntax highlighting for displayed DDL.
//!
//! A reduced display scanner: keywords come from the active dialect's
//! reserved words, string literals and quoted identifiers honor its quote
//! characters (with doubled-quote escapes), and line comments honor its
//! comment prefixes. String state carries across lines so multi-line
//! literals stay colored.

use std::collections::HashSet;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::domain::SqlDialectInfo;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString(char),
    InQuotedIdent,
}

pub struct SqlHighlighter {
    reserved: HashSet<String>,
    comment_prefixes: Vec<String>,
    string_quotes: Vec<char>,
    identifier_quote: char,
}

impl SqlHighlighter {
    pub fn new(dialect: &SqlDialectInfo) -> Self {
        Self {
            reserved: dialect
                .reserved_words
                .iter()
                .map(|word| word.to_uppercase())
                .collect(),
            comment_prefixes: dialect.single_line_comments.clone(),
            string_quotes: dialect.quote_strings.clone(),
            identifier_quote: dialect.identifier_quote,
        }
    }

    pub fn highlight(&self, text: &str) -> Vec<Line<'static>> {
        let mut state = ScanState::Normal;
        text.lines()
            .map(|line| self.highlight_line(line, &mut state))
            .collect()
    }

    fn highlight_line(&self, line: &str, state: &mut ScanState) -> Line<'static> {
        let chars: Vec<char> = line.chars().collect();
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut plain = String::new();
        let mut pos = 0;

        while pos < chars.len() {
            match *state {
                ScanState::InString(quote) => {
                    let (body, closed) = consume_quoted(&chars, &mut pos, quote);
                    push_styled(&mut spans, body, Theme::STRING_LITERAL);
                    if closed {
                        *state = ScanState::Normal;
                    }
                }
                ScanState::InQuotedIdent => {
                    let (body, closed) = consume_quoted(&chars, &mut pos, self.identifier_quote);
                    push_styled(&mut spans, body, Theme::QUOTED_IDENT);
                    if closed {
                        *state = ScanState::Normal;
                    }
                }
                ScanState::Normal => {
                    let c = chars[pos];

                    if self.comment_starts_at(&chars, pos) {
                        flush_plain(&mut spans, &mut plain);
                        let rest: String = chars[pos..].iter().collect();
                        push_styled(&mut spans, rest, Theme::COMMENT);
                        pos = chars.len();
                        continue;
                    }

                    if self.string_quotes.contains(&c) {
                        flush_plain(&mut spans, &mut plain);
                        pos += 1;
                        let (body, closed) = consume_quoted(&chars, &mut pos, c);
                        push_styled(&mut spans, format!("{}{}", c, body), Theme::STRING_LITERAL);
                        if !closed {
                            *state = ScanState::InString(c);
                        }
                        continue;
                    }

                    if c == self.identifier_quote {
                        flush_plain(&mut spans, &mut plain);
                        pos += 1;
                        let (body, closed) = consume_quoted(&chars, &mut pos, c);
                        push_styled(&mut spans, format!("{}{}", c, body), Theme::QUOTED_IDENT);
                        if !closed {
                            *state = ScanState::InQuotedIdent;
                        }
                        continue;
                    }

                    if c.is_ascii_digit() {
                        flush_plain(&mut spans, &mut plain);
                        let start = pos;
                        while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.')
                        {
                            pos += 1;
                        }
                        let number: String = chars[start..pos].iter().collect();
                        push_styled(&mut spans, number, Theme::NUMBER);
                        continue;
                    }

                    if c.is_alphabetic() || c == '_' {
                        let start = pos;
                        while pos < chars.len()
                            && (chars[pos].is_alphanumeric() || chars[pos] == '_')
                        {
                            pos += 1;
                        }
                        let word: String = chars[start..pos].iter().collect();
                        if self.reserved.contains(&word.to_uppercase()) {
                            flush_plain(&mut spans, &mut plain);
                            push_styled(&mut spans, word, Theme::KEYWORD);
                        } else {
                            plain.push_str(&word);
                        }
                        continue;
                    }

                    plain.push(c);
                    pos += 1;
                }
            }
        }

        flush_plain(&mut spans, &mut plain);
        Line::from(spans)
    }

    fn comment_starts_at(&self, chars: &[char], pos: usize) -> bool {
        self.comment_prefixes.iter().any(|prefix| {
            prefix
                .chars()
                .enumerate()
                .all(|(i, pc)| chars.get(pos + i) == Some(&pc))
        })
    }
}

/// Consumes up to and including the closing quote; a doubled quote is
/// escaped content, not a terminator. Returns the consumed text and
/// whether the closing quote was found on this line.
fn consume_quoted(chars: &[char], pos: &mut usize, quote: char) -> (String, bool) {
    let mut out = String::new();
    while *pos < chars.len() {
        let c = chars[*pos];
        out.push(c);
        *pos += 1;
        if c == quote {
            if *pos < chars.len() && chars[*pos] == quote {
                out.push(quote);
                *pos += 1;
            } else {
                return (out, true);
            }
        }
    }
    (out, false)
}

fn push_styled(spans: &mut Vec<Span<'static>>, text: String, color: ratatui::style::Color) {
    if !text.is_empty() {
        spans.push(Span::styled(text, Style::default().fg(color)));
    }
}

fn flush_plain(spans: &mut Vec<Span<'static>>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::styled(
            std::mem::take(plain),
            Style::default().fg(Theme::DDL_TEXT),
        ));
    }
}
