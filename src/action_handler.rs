use std::ops::ControlFlow;

use tracing::{error, trace};

use crate::action::{Action, CommandAction, FilePickerAction, InsertAction, NormalAction};
use crate::catalog::FileCatalog;
use crate::state::{EditorMode, EditorState};

/// Routes decoded actions to the reducer of the active mode or overlay.
pub struct ActionHandler<C> {
	catalog: C,
}

impl<C: FileCatalog> ActionHandler<C> {
	pub fn new(catalog: C) -> Self { Self { catalog } }

	/// Applies one action. Breaks once the editor has been stopped; a stopped
	/// state takes no further edits.
	pub fn apply(&self, state: &mut EditorState, action: Action) -> ControlFlow<()> {
		if state.stopped {
			return ControlFlow::Break(());
		}
		trace!("apply {:?}", action);

		match action {
			Action::Insert(action) => {
				if Self::expect_mode(state, EditorMode::Insert, &action) {
					Self::reduce_insert(state, action);
				}
			}
			Action::Normal(action) => {
				if Self::expect_mode(state, EditorMode::Normal, &action) {
					Self::reduce_normal(state, action);
				}
			}
			Action::Command(action) => {
				if Self::expect_mode(state, EditorMode::Command, &action) {
					Self::reduce_command(state, action);
				}
			}
			Action::FilePicker(action) => Self::reduce_file_picker(state, action),
			Action::ToggleFilePicker => state.toggle_file_picker(|| self.catalog.items()),
		}

		if state.stopped { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
	}

	/// Mode and action family must agree; the decoder guarantees it, so a
	/// mismatch is a caller bug.
	fn expect_mode(state: &EditorState, mode: EditorMode, action: &dyn std::fmt::Debug) -> bool {
		debug_assert_eq!(state.mode, mode, "action {:?} dispatched in {:?} mode", action, state.mode);
		if state.mode != mode {
			error!("dropping {:?}: expected {:?} mode, editor is in {:?}", action, mode, state.mode);
			return false;
		}
		true
	}

	fn reduce_normal(state: &mut EditorState, action: NormalAction) {
		match action {
			NormalAction::Up => state.move_cursor_up(),
			NormalAction::Down => state.move_cursor_down(),
			NormalAction::Left => state.move_cursor_left(),
			NormalAction::Right => state.move_cursor_right(),
			NormalAction::Delete => state.delete_char_under_cursor(),
			NormalAction::NewLineBelow => state.open_line_below(),
			NormalAction::NewLineAbove => state.open_line_above(),
			NormalAction::InsertAfterCursor => state.insert_after_cursor(),
			NormalAction::InsertAtEnd => state.insert_at_line_end(),
			NormalAction::InsertAtStart => state.insert_at_line_start(),
			NormalAction::SetInsertMode => state.enter_insert_mode(),
			NormalAction::SetCommandMode => state.enter_command_mode(),
			NormalAction::JumpWordForward => state.jump_word_forward(),
			NormalAction::JumpWordBackward => state.jump_word_backward(),
			NormalAction::Quit => state.quit(),
		}
	}

	fn reduce_insert(state: &mut EditorState, action: InsertAction) {
		match action {
			InsertAction::Insert(ch) => state.insert_char_at_cursor(ch),
			InsertAction::Remove => state.backspace_at_cursor(),
			InsertAction::Cr => state.insert_newline_at_cursor(),
			InsertAction::SetNormalMode => state.enter_normal_mode(),
		}
	}

	fn reduce_command(state: &mut EditorState, action: CommandAction) {
		match action {
			CommandAction::Append(ch) => state.push_command_char(ch),
			CommandAction::RemoveLast => state.pop_command_char(),
			CommandAction::Exec => state.execute_command(),
			CommandAction::SetNormalMode => state.enter_normal_mode(),
		}
	}

	fn reduce_file_picker(state: &mut EditorState, action: FilePickerAction) {
		let Some(picker) = state.picker_mut() else {
			debug_assert!(false, "file picker action {:?} without an open picker", action);
			error!("dropping {:?}: file picker is not open", action);
			return;
		};
		match action {
			FilePickerAction::Append(ch) => picker.push_query_char(ch),
			FilePickerAction::RemoveLast => picker.pop_query_char(),
		}
	}
}
