use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use crate::state::EditorState;

/// Scroll offsets that keep the cursor visible between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct Viewport {
	pub(super) scroll_x: usize,
	pub(super) scroll_y: usize,
}

impl Viewport {
	pub(super) fn follow_cursor(&mut self, state: &EditorState, area: Rect) {
		let rows = area.height.max(1) as usize;
		let cols = area.width.max(1) as usize;
		let row = state.cursor.row;
		let col = display_width_of_char_prefix(state.current_line(), state.cursor.col);

		if row < self.scroll_y {
			self.scroll_y = row;
		} else if row >= self.scroll_y + rows {
			self.scroll_y = row + 1 - rows;
		}
		if col < self.scroll_x {
			self.scroll_x = col;
		} else if col >= self.scroll_x + cols {
			self.scroll_x = col + 1 - cols;
		}
	}
}

pub(super) struct BufferViewWidget {
	text:   String,
	cursor: Option<Position>,
}

impl BufferViewWidget {
	pub(super) fn from_state(state: &EditorState, viewport: Viewport, area: Rect) -> Self {
		let text = state
			.lines
			.iter()
			.skip(viewport.scroll_y)
			.take(area.height as usize)
			.map(|line| visible_slice_by_display_width(line, viewport.scroll_x, area.width as usize))
			.collect::<Vec<_>>()
			.join("\n");

		let cursor_col = display_width_of_char_prefix(state.current_line(), state.cursor.col);
		let cursor = (area.width > 0 && area.height > 0).then(|| {
			let x = cursor_col.saturating_sub(viewport.scroll_x).min(area.width as usize - 1) as u16;
			let y = state.cursor.row.saturating_sub(viewport.scroll_y).min(area.height as usize - 1) as u16;
			Position::new(area.x.saturating_add(x), area.y.saturating_add(y))
		});

		Self { text, cursor }
	}

	pub(super) fn cursor(&self) -> Option<Position> { self.cursor }
}

impl Widget for BufferViewWidget {
	fn render(self, area: Rect, buf: &mut Buffer) { Paragraph::new(self.text).render(area, buf); }
}

fn char_display_width(ch: char) -> usize {
	if ch == '\t' {
		return 1;
	}
	UnicodeWidthChar::width(ch).unwrap_or(0)
}

pub(super) fn display_width_of_char_prefix(line: &str, char_count: usize) -> usize {
	line.chars().take(char_count).map(char_display_width).sum()
}

pub(super) fn visible_slice_by_display_width(line: &str, skip_cols: usize, max_cols: usize) -> String {
	let mut consumed = 0usize;
	let mut used = 0usize;
	let mut out = String::new();

	for ch in line.chars() {
		let width = char_display_width(ch);
		if consumed < skip_cols {
			consumed += width;
			continue;
		}
		if used + width > max_cols {
			break;
		}
		used += width;
		out.push(if ch == '\t' { ' ' } else { ch });
	}

	out
}
