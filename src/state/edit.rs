use tracing::info;

use super::{CommandError, EditorMode, EditorState, FloatingPanel, Picker, motion};

impl EditorState {
	pub fn move_cursor_left(&mut self) {
		self.cursor.col = self.cursor.col.saturating_sub(1).min(self.max_navigable_col(self.cursor.row));
	}

	pub fn move_cursor_right(&mut self) {
		self.cursor.col = self.cursor.col.saturating_add(1).min(self.max_navigable_col(self.cursor.row));
	}

	pub fn move_cursor_up(&mut self) {
		let row = self.cursor.row.saturating_sub(1);
		self.move_cursor_to_row(row);
	}

	pub fn move_cursor_down(&mut self) {
		let row = self.cursor.row.saturating_add(1).min(self.lines.len().saturating_sub(1));
		self.move_cursor_to_row(row);
	}

	fn move_cursor_to_row(&mut self, row: usize) {
		self.cursor.row = row;
		self.cursor.col = self.cursor.col.min(self.max_navigable_col(row));
	}

	pub fn jump_word_forward(&mut self) { self.cursor = motion::next_word_start(&self.lines, self.cursor); }

	pub fn jump_word_backward(&mut self) {
		self.cursor = motion::previous_word_start(&self.lines, self.cursor);
	}

	/// Deletes the character under the caret. A caret left past the end steps
	/// back onto the new last character.
	pub fn delete_char_under_cursor(&mut self) {
		let row = self.cursor.row;
		let col = self.cursor.col;
		let Some(line) = self.lines.get_mut(row) else {
			return;
		};
		if line.is_empty() {
			return;
		}
		let Some(byte_idx) = char_byte_idx(line, col) else {
			return;
		};
		line.remove(byte_idx);
		self.cursor.col = col.min(self.max_navigable_col(row));
	}

	pub fn open_line_below(&mut self) {
		let row = self.cursor.row.saturating_add(1).min(self.lines.len());
		self.lines.insert(row, String::new());
		self.cursor.row = row;
		self.cursor.col = 0;
		self.enter_insert_mode();
	}

	pub fn open_line_above(&mut self) {
		let row = self.cursor.row.min(self.lines.len());
		self.lines.insert(row, String::new());
		self.cursor.row = row;
		self.cursor.col = 0;
		self.enter_insert_mode();
	}

	/// `a`: the caret moves onto Insert mode's wider bound, so on the last
	/// character it lands in the one-past-end slot.
	pub fn insert_after_cursor(&mut self) {
		self.cursor.col = self.cursor.col.saturating_add(1).min(self.max_insert_col(self.cursor.row));
		self.enter_insert_mode();
	}

	pub fn insert_at_line_end(&mut self) {
		self.cursor.col = self.max_insert_col(self.cursor.row);
		self.enter_insert_mode();
	}

	pub fn insert_at_line_start(&mut self) {
		let line = self.current_line();
		self.cursor.col =
			line.chars().position(|ch| !ch.is_whitespace()).unwrap_or_else(|| line.chars().count());
		self.enter_insert_mode();
	}

	pub fn enter_insert_mode(&mut self) {
		info!("enter insert mode");
		self.mode = EditorMode::Insert;
	}

	/// Leaves Insert or Command mode. The caret is pulled back onto the line
	/// if it sat in the one-past-end slot.
	pub fn enter_normal_mode(&mut self) {
		info!("enter normal mode");
		self.mode = EditorMode::Normal;
		self.clamp_cursor_to_navigable_col();
	}

	pub fn enter_command_mode(&mut self) {
		info!("enter command mode");
		self.command_text.clear();
		self.command_error = None;
		self.mode = EditorMode::Command;
	}

	pub(crate) fn clamp_cursor_to_navigable_col(&mut self) {
		self.cursor.row = self.cursor.row.min(self.lines.len().saturating_sub(1));
		self.cursor.col = self.cursor.col.min(self.max_navigable_col(self.cursor.row));
	}

	pub fn quit(&mut self) {
		info!("quit requested");
		self.stopped = true;
	}

	pub fn insert_char_at_cursor(&mut self, ch: char) {
		let col = self.cursor.col;
		let Some(line) = self.lines.get_mut(self.cursor.row) else {
			return;
		};
		let byte_idx = char_byte_idx(line, col).unwrap_or(line.len());
		line.insert(byte_idx, ch);
		self.cursor.col = col.saturating_add(1).min(self.max_insert_col(self.cursor.row));
	}

	/// Backspace: removes the character left of the caret.
	pub fn backspace_at_cursor(&mut self) {
		let col = self.cursor.col;
		if col == 0 {
			return;
		}
		let Some(line) = self.lines.get_mut(self.cursor.row) else {
			return;
		};
		let Some(byte_idx) = char_byte_idx(line, col - 1) else {
			return;
		};
		line.remove(byte_idx);
		self.cursor.col = col - 1;
	}

	/// Splits the current line at the caret. Always adds exactly one row and
	/// leaves the caret at column 0 of the row that follows the split.
	pub fn insert_newline_at_cursor(&mut self) {
		let row = self.cursor.row;
		let col = self.cursor.col;
		let Some(line) = self.lines.get_mut(row) else {
			return;
		};
		let len = line.chars().count();

		if col == 0 {
			self.lines.insert(row, String::new());
		} else if col >= len {
			self.lines.insert(row + 1, String::new());
		} else {
			let byte_idx = char_byte_idx(line, col).unwrap_or(line.len());
			let tail = line.split_off(byte_idx);
			self.lines.insert(row + 1, tail);
		}

		self.cursor.row = row + 1;
		self.cursor.col = 0;
	}

	pub fn push_command_char(&mut self, ch: char) { self.command_text.push(ch); }

	pub fn pop_command_char(&mut self) { let _ = self.command_text.pop(); }

	/// Runs the command line. Exactly `q` stops the editor; anything else
	/// returns to Normal mode, recording an error for unrecognised text.
	pub fn execute_command(&mut self) {
		match self.command_text.as_str() {
			"q" => self.quit(),
			"" => self.enter_normal_mode(),
			_ => {
				info!("unknown command: {:?}", self.command_text);
				self.enter_normal_mode();
				self.command_error = Some(CommandError::Unknown(self.command_text.clone()));
			}
		}
	}

	pub fn toggle_file_picker(&mut self, items: impl FnOnce() -> Vec<String>) {
		if self.floating_panel.take().is_some() {
			info!("close file picker");
			return;
		}
		let items = items();
		info!("open file picker: {} items", items.len());
		self.floating_panel = Some(FloatingPanel::FilePicker(Picker::new(items)));
	}
}

/// Byte offset of the `col`-th character, or `None` when `col` is past the
/// last character.
pub(crate) fn char_byte_idx(line: &str, col: usize) -> Option<usize> {
	line.char_indices().nth(col).map(|(idx, _)| idx)
}
