use crate::state::{CursorState, EditorMode, EditorSize, EditorState};

pub(super) fn test_state(lines: &[&str]) -> EditorState {
	EditorState::new(EditorSize { width: 300, height: 300 }, lines.iter().map(|line| line.to_string()).collect())
}

pub(super) fn state_at(mode: EditorMode, lines: &[&str], row: usize, col: usize) -> EditorState {
	let mut state = test_state(lines);
	state.mode = mode;
	state.cursor = CursorState::new(row, col);
	state
}

pub(super) fn lines_of(state: &EditorState) -> Vec<&str> { state.lines.iter().map(String::as_str).collect() }
