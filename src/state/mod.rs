use thiserror::Error;

mod edit;
pub mod motion;
mod picker;

pub use picker::Picker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
	pub row: usize,
	pub col: usize,
}

impl CursorState {
	pub fn new(row: usize, col: usize) -> Self { Self { row, col } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorSize {
	pub width:  u16,
	pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
	#[default]
	Normal,
	Insert,
	Command,
}

impl EditorMode {
	pub fn label(self) -> &'static str {
		match self {
			EditorMode::Normal => "NOR",
			EditorMode::Insert => "INS",
			EditorMode::Command => "CMD",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloatingPanel {
	FilePicker(Picker),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
	#[error("unknown command: {0}")]
	Unknown(String),
}

/// Whole editor state. Replaced in place once per processed key.
///
/// `lines` always holds at least one row and `cursor` always points at an
/// existing row. The column bound depends on `mode`: Normal and Command keep
/// the caret on a character, Insert allows the one-past-end slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
	pub mode:           EditorMode,
	pub area:           EditorSize,
	pub lines:          Vec<String>,
	pub cursor:         CursorState,
	pub command_text:   String,
	pub command_error:  Option<CommandError>,
	pub stopped:        bool,
	pub floating_panel: Option<FloatingPanel>,
}

impl EditorState {
	pub fn new(area: EditorSize, lines: Vec<String>) -> Self {
		let lines = if lines.is_empty() { vec![String::new()] } else { lines };
		Self {
			mode: EditorMode::Normal,
			area,
			lines,
			cursor: CursorState::default(),
			command_text: String::new(),
			command_error: None,
			stopped: false,
			floating_panel: None,
		}
	}

	pub fn resize(&mut self, width: u16, height: u16) { self.area = EditorSize { width, height }; }

	pub fn is_insert_mode(&self) -> bool { self.mode == EditorMode::Insert }

	pub fn is_command_mode(&self) -> bool { self.mode == EditorMode::Command }

	pub fn picker(&self) -> Option<&Picker> {
		match &self.floating_panel {
			Some(FloatingPanel::FilePicker(picker)) => Some(picker),
			None => None,
		}
	}

	pub(crate) fn picker_mut(&mut self) -> Option<&mut Picker> {
		match &mut self.floating_panel {
			Some(FloatingPanel::FilePicker(picker)) => Some(picker),
			None => None,
		}
	}

	pub fn current_line(&self) -> &str { self.lines.get(self.cursor.row).map(String::as_str).unwrap_or("") }

	pub fn line_len(&self, row: usize) -> usize {
		self.lines.get(row).map(|line| line.chars().count()).unwrap_or(0)
	}

	/// Last column the caret may rest on outside Insert mode.
	pub fn max_navigable_col(&self, row: usize) -> usize { self.line_len(row).saturating_sub(1) }

	/// Last column the caret may rest on in Insert mode, the slot after the
	/// final character.
	pub fn max_insert_col(&self, row: usize) -> usize { self.line_len(row) }

	/// Checks every cursor and buffer invariant for the active mode.
	pub fn cursor_in_bounds(&self) -> bool {
		if self.lines.is_empty() || self.cursor.row >= self.lines.len() {
			return false;
		}
		let max_col = match self.mode {
			EditorMode::Insert => self.max_insert_col(self.cursor.row),
			EditorMode::Normal | EditorMode::Command => self.max_navigable_col(self.cursor.row),
		};
		self.cursor.col <= max_col
	}
}

#[cfg(test)]
mod tests;
