use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Paragraph, Widget};

use super::buffer_view::{display_width_of_char_prefix, visible_slice_by_display_width};
use crate::state::EditorState;

/// `:` prompt while in Command mode, blank otherwise.
pub(super) struct CommandLineWidget {
	text:   String,
	cursor: Option<Position>,
}

impl CommandLineWidget {
	pub(super) fn from_state(state: &EditorState, area: Rect) -> Self {
		if !state.is_command_mode() || area.width == 0 {
			return Self { text: String::new(), cursor: None };
		}

		let prompt = format!(":{}", state.command_text);
		let prompt_width = display_width_of_char_prefix(&prompt, prompt.chars().count());
		let skip = (prompt_width + 1).saturating_sub(area.width as usize);
		let x = (prompt_width - skip).min(area.width as usize - 1) as u16;

		Self {
			text:   visible_slice_by_display_width(&prompt, skip, area.width as usize),
			cursor: Some(Position::new(area.x.saturating_add(x), area.y)),
		}
	}

	pub(super) fn cursor(&self) -> Option<Position> { self.cursor }
}

impl Widget for CommandLineWidget {
	fn render(self, area: Rect, buf: &mut Buffer) { Paragraph::new(self.text).render(area, buf); }
}

#[cfg(test)]
mod tests {
	use ratatui::layout::{Position, Rect};

	use super::CommandLineWidget;
	use crate::state::{EditorMode, EditorSize, EditorState};

	#[test]
	fn command_line_should_be_blank_outside_command_mode() {
		let state = EditorState::new(EditorSize { width: 20, height: 5 }, Vec::new());
		let widget = CommandLineWidget::from_state(&state, Rect::new(0, 6, 20, 1));
		assert_eq!(widget.text, "");
		assert_eq!(widget.cursor(), None);
	}

	#[test]
	fn command_line_should_show_prompt_and_place_cursor_after_text() {
		let mut state = EditorState::new(EditorSize { width: 20, height: 5 }, Vec::new());
		state.mode = EditorMode::Command;
		state.command_text = "wq".to_string();
		let widget = CommandLineWidget::from_state(&state, Rect::new(0, 6, 20, 1));
		assert_eq!(widget.text, ":wq");
		assert_eq!(widget.cursor(), Some(Position::new(3, 6)));
	}

	#[test]
	fn long_command_should_scroll_to_keep_its_tail_visible() {
		let mut state = EditorState::new(EditorSize { width: 5, height: 5 }, Vec::new());
		state.mode = EditorMode::Command;
		state.command_text = "abcdefgh".to_string();
		let widget = CommandLineWidget::from_state(&state, Rect::new(0, 6, 5, 1));
		assert_eq!(widget.text, "efgh");
		assert_eq!(widget.cursor(), Some(Position::new(4, 6)));
	}
}
