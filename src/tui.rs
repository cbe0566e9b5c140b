use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::fmt::signed_money;
use crate::models::{Transaction, TransactionType};

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const INCOME_STYLE: Style = Style::new().fg(Color::Rgb(80, 220, 100));
pub const EXPENSE_STYLE: Style = Style::new().fg(Color::Red);

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

/// Amount as a signed, colored span: green `+$…` for income, red `-$…`
/// for expense.
pub fn amount_span(txn: &Transaction) -> Span<'static> {
    let style = match txn.kind {
        TransactionType::Income => INCOME_STYLE,
        TransactionType::Expense => EXPENSE_STYLE,
    };
    Span::styled(signed_money(txn), style)
}

/// Wrap text to a given width. Returns (wrapped_string, line_count).
pub fn wrap_text(text: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (text.to_string(), 1);
    }
    let wrapped = textwrap::fill(text, width);
    let lines = wrapped.lines().count().max(1) as u16;
    (wrapped, lines)
}

// ---------------------------------------------------------------------------
// Advice markup rendering
// ---------------------------------------------------------------------------

/// Render the markup subset the advice endpoint produces (`**bold**`,
/// `*italic*`, and `- ` list lines) into styled lines, wrapped to the
/// given width. Anything else passes through as plain text.
pub fn render_markup(text: &str, width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for raw_line in text.lines() {
        let (prefix, rest) = match raw_line.strip_prefix("- ") {
            Some(rest) => ("  • ", rest),
            None => ("", raw_line),
        };
        let (wrapped, _) = wrap_text(rest, width.saturating_sub(prefix.len()).max(10));
        for (i, piece) in wrapped.lines().enumerate() {
            let mut spans = Vec::new();
            if !prefix.is_empty() {
                // Continuation lines hang under the bullet
                spans.push(Span::raw(if i == 0 { prefix } else { "    " }));
            }
            spans.extend(inline_spans(piece));
            out.push(Line::from(spans));
        }
        if wrapped.is_empty() {
            out.push(Line::from(""));
        }
    }
    out
}

/// Split one line into plain / bold / italic spans.
fn inline_spans(line: &str) -> Vec<Span<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let italic = Style::default().add_modifier(Modifier::ITALIC);

    let mut spans = Vec::new();
    let mut plain = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '*' {
            let double = i + 1 < chars.len() && chars[i + 1] == '*';
            let marker_len = if double { 2 } else { 1 };
            let marker = if double { "**" } else { "*" };
            let rest: String = chars[i + marker_len..].iter().collect();
            if let Some(end) = rest.find(marker) {
                if !plain.is_empty() {
                    spans.push(Span::raw(std::mem::take(&mut plain)));
                }
                let inner = &rest[..end];
                let style = if double { bold } else { italic };
                spans.push(Span::styled(inner.to_string(), style));
                // `end` is a byte offset; advance by chars
                i += marker_len + inner.chars().count() + marker_len;
                continue;
            }
        }
        plain.push(chars[i]);
        i += 1;
    }
    if !plain.is_empty() {
        spans.push(Span::raw(plain));
    }
    spans
}
