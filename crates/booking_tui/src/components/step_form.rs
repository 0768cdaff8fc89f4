//! Generic editor for one `StepForm`.
//!
//! The view owns only presentation state (which field has focus and the
//! text input for it). Every keystroke that changes a value is pushed into
//! the form right away, so the form's draft is always what the user sees.

use booking::{FieldKind, FieldValue, Schema, SchemaField, StepForm};
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{action::Action, tui::EventResponse};

const INDENT: &str = "  ";

pub struct StepFormView<S: Schema> {
    fields: Vec<S::Field>,
    focused: usize,
    input: Input,
}

impl<S: Schema> Default for StepFormView<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> StepFormView<S> {
    pub fn new() -> Self {
        Self {
            fields: S::fields(),
            focused: 0,
            input: Input::default(),
        }
    }

    pub fn focused_field(&self) -> Option<S::Field> {
        self.fields.get(self.focused).copied()
    }

    /// Reload the text input from the focused field of `form`.
    pub fn sync_input(&mut self, form: &StepForm<S>) {
        self.input = match self.focused_field().map(|field| S::value(form.draft(), field)) {
            Some(FieldValue::Text(value)) => Input::new(value),
            _ => Input::default(),
        };
    }

    pub fn focus_next(&mut self, form: &StepForm<S>) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
        self.sync_input(form);
    }

    pub fn focus_prev(&mut self, form: &StepForm<S>) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
        self.sync_input(form);
    }

    pub fn handle_key_events(
        &mut self,
        key: KeyEvent,
        form: &mut StepForm<S>,
    ) -> Option<EventResponse<Action>> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next(form);
                return Some(EventResponse::Stop(Action::Update));
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev(form);
                return Some(EventResponse::Stop(Action::Update));
            }
            KeyCode::Enter => return Some(EventResponse::Stop(Action::Submit)),
            _ => {}
        }

        let field = self.focused_field()?;
        match field.kind() {
            FieldKind::Checkbox => match (key.code, S::value(form.draft(), field)) {
                (KeyCode::Char(' '), FieldValue::Flag(checked)) => {
                    form.update_field(field, !checked);
                    Some(EventResponse::Stop(Action::Update))
                }
                _ => None,
            },
            FieldKind::Text => {
                let changed = self.input.handle_event(&CrosstermEvent::Key(key))?;
                if changed.value {
                    form.update_field(field, self.input.value());
                }
                Some(EventResponse::Stop(Action::Update))
            }
        }
    }

    pub fn draw(&self, f: &mut Frame<'_>, area: Rect, form: &StepForm<S>) {
        // one column stays free for the cursor after the last character
        let value_width = usize::from(area.width).saturating_sub(INDENT.len() + 1);
        let mut lines: Vec<Line> = Vec::new();
        // (index into `lines`, column) of the focused text input
        let mut cursor = None;

        for (idx, &field) in self.fields.iter().enumerate() {
            let focused = idx == self.focused;
            let marker = if focused { "› " } else { INDENT };
            let label_style = if focused {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            match S::value(form.draft(), field) {
                FieldValue::Flag(checked) => {
                    let mark = if checked { "[x] " } else { "[ ] " };
                    lines.push(Line::from(vec![
                        Span::raw(marker),
                        Span::styled(mark, label_style),
                        Span::styled(field.label(), label_style),
                    ]));
                }
                FieldValue::Text(value) => {
                    lines.push(Line::from(vec![
                        Span::raw(marker),
                        Span::styled(field.label(), label_style),
                    ]));
                    let shown = if focused {
                        let scroll = self.input.visual_scroll(value_width);
                        let column = self.input.visual_cursor().saturating_sub(scroll);
                        cursor = Some((lines.len(), INDENT.len() + column));
                        visible_columns(self.input.value(), scroll, value_width)
                    } else {
                        value
                    };
                    let value_span = if shown.is_empty() {
                        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
                    } else if focused {
                        Span::styled(shown, Style::default().fg(Color::Black).bg(Color::White))
                    } else {
                        Span::styled(shown, Style::default().fg(Color::Cyan))
                    };
                    lines.push(Line::from(vec![Span::raw(INDENT), value_span]));
                }
            }

            if let Some(err) = form.error(field) {
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(err.to_string(), Style::default().fg(Color::Red)),
                ]));
            }
            lines.push(Line::raw(""));
        }

        // Labels, errors and unfocused values above the input may wrap, so
        // the cursor row is the wrapped height of everything before it.
        let cursor = cursor.map(|(line, column)| {
            let rows = Paragraph::new(lines[..line].to_vec())
                .wrap(Wrap { trim: false })
                .line_count(area.width);
            (
                area.x.saturating_add(u16::try_from(column).unwrap_or(u16::MAX)),
                area.y.saturating_add(u16::try_from(rows).unwrap_or(u16::MAX)),
            )
        });

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
        if let Some((x, y)) = cursor {
            if x < area.right() && y < area.bottom() {
                f.set_cursor_position((x, y));
            }
        }
    }
}

/// The part of `value` that starts `scroll` display columns in and fits in
/// `width` columns. Keeps the focused input on one row.
fn visible_columns(value: &str, scroll: usize, width: usize) -> String {
    let mut skipped = 0;
    let mut taken = 0;
    let mut shown = String::new();
    for c in value.chars() {
        let w = Span::raw(c.to_string()).width();
        if skipped < scroll {
            skipped += w;
            continue;
        }
        if taken + w > width {
            break;
        }
        taken += w;
        shown.push(c);
    }
    shown
}
