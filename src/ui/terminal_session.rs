use std::io;

use crossterm::cursor::SetCursorStyle;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use thiserror::Error;

use crate::state::{EditorMode, EditorState};

#[derive(Debug, Error)]
pub enum TerminalSessionError {
	#[error("prepare terminal failed")]
	Setup {
		#[source]
		source: io::Error,
	},
	#[error("draw frame failed")]
	Draw {
		#[source]
		source: io::Error,
	},
	#[error("update cursor shape failed")]
	CursorShape {
		#[source]
		source: io::Error,
	},
}

/// Caret shape shown by the terminal. A bar marks places where typing
/// inserts text, a block marks the Normal-mode caret sitting on a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CursorShape {
	Block,
	Bar,
}

impl CursorShape {
	pub(crate) fn for_state(state: &EditorState) -> Self {
		if state.picker().is_some() {
			return Self::Bar;
		}
		match state.mode {
			EditorMode::Normal => Self::Block,
			EditorMode::Insert | EditorMode::Command => Self::Bar,
		}
	}

	fn style(self) -> SetCursorStyle {
		match self {
			Self::Block => SetCursorStyle::SteadyBlock,
			Self::Bar => SetCursorStyle::SteadyBar,
		}
	}
}

/// Puts the terminal back the way the shell expects it, even when the
/// editor exits through an error.
struct RestoreOnDrop;

impl Drop for RestoreOnDrop {
	fn drop(&mut self) {
		let _ = disable_raw_mode();
		let _ = execute!(io::stdout(), SetCursorStyle::DefaultUserShape, LeaveAlternateScreen);
	}
}

pub(crate) struct TerminalSession {
	terminal:     Terminal<CrosstermBackend<io::Stdout>>,
	cursor_shape: Option<CursorShape>,
	_restore:     RestoreOnDrop,
}

impl TerminalSession {
	pub(crate) fn enter(title: &str) -> Result<Self, TerminalSessionError> {
		enable_raw_mode().map_err(|source| TerminalSessionError::Setup { source })?;
		let restore = RestoreOnDrop;
		let mut stdout = io::stdout();
		execute!(stdout, EnterAlternateScreen, SetTitle(title))
			.map_err(|source| TerminalSessionError::Setup { source })?;
		let terminal = Terminal::new(CrosstermBackend::new(stdout))
			.map_err(|source| TerminalSessionError::Setup { source })?;
		Ok(Self { terminal, cursor_shape: None, _restore: restore })
	}

	pub(crate) fn draw(&mut self, render: impl FnOnce(&mut ratatui::Frame<'_>)) -> Result<(), TerminalSessionError> {
		self.terminal.draw(render).map_err(|source| TerminalSessionError::Draw { source })?;
		Ok(())
	}

	/// Emits a cursor-style escape only when the wanted shape changed.
	pub(crate) fn sync_cursor_shape(&mut self, state: &EditorState) -> Result<(), TerminalSessionError> {
		let shape = CursorShape::for_state(state);
		if self.cursor_shape == Some(shape) {
			return Ok(());
		}
		execute!(self.terminal.backend_mut(), shape.style())
			.map_err(|source| TerminalSessionError::CursorShape { source })?;
		self.cursor_shape = Some(shape);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::CursorShape;
	use crate::state::{EditorMode, EditorSize, EditorState};

	#[test]
	fn cursor_shape_should_be_block_only_in_normal_mode() {
		let mut state = EditorState::new(EditorSize { width: 80, height: 24 }, Vec::new());
		assert_eq!(CursorShape::for_state(&state), CursorShape::Block);

		state.mode = EditorMode::Insert;
		assert_eq!(CursorShape::for_state(&state), CursorShape::Bar);

		state.mode = EditorMode::Command;
		assert_eq!(CursorShape::for_state(&state), CursorShape::Bar);
	}

	#[test]
	fn open_picker_should_show_bar_cursor_over_normal_mode() {
		let mut state = EditorState::new(EditorSize { width: 80, height: 24 }, Vec::new());
		state.toggle_file_picker(|| vec!["a.rs".to_string()]);
		assert_eq!(CursorShape::for_state(&state), CursorShape::Bar);
	}
}
