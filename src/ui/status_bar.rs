use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::input::RawKey;
use crate::state::EditorState;

pub(super) struct StatusBarWidget {
	mode:        &'static str,
	status_line: String,
}

impl StatusBarWidget {
	pub(super) fn from_state(state: &EditorState, last_key: Option<RawKey>) -> Self {
		Self { mode: state.mode.label(), status_line: status_line(state, last_key) }
	}
}

impl Widget for StatusBarWidget {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let style = Style::default().add_modifier(Modifier::REVERSED);
		Paragraph::new(Line::from(vec![
			Span::styled(
				format!(" {} ", self.mode),
				Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
			),
			Span::styled(format!(" {}", self.status_line), style),
		]))
		.style(style)
		.render(area, buf);
	}
}

/// Everything after the mode badge: viewport size, last key code, cursor
/// position and the most recent command error.
pub(super) fn status_line(state: &EditorState, last_key: Option<RawKey>) -> String {
	let key = last_key.map(|key| key.0).unwrap_or(0);
	let mut line = format!(
		"w: {}, h: {}, key: {} | {}:{}",
		state.area.width,
		state.area.height,
		key,
		state.cursor.row + 1,
		state.cursor.col + 1
	);
	if let Some(err) = &state.command_error {
		line.push_str(" | ");
		line.push_str(&err.to_string());
	}
	line
}
