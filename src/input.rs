use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::action::{Action, CommandAction, FilePickerAction, InsertAction, NormalAction};
use crate::state::{EditorMode, FloatingPanel};

/// Integer key code as delivered by the terminal layer. Printable keys carry
/// their Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawKey(pub i32);

impl RawKey {
	pub const ENTER: RawKey = RawKey(10);
	pub const CARRIAGE_RETURN: RawKey = RawKey(13);
	pub const ESCAPE: RawKey = RawKey(27);
	pub const BACKSPACE: RawKey = RawKey(127);
	/// Backspace as reported by curses-style keypads.
	pub const KEYPAD_BACKSPACE: RawKey = RawKey(263);
	/// F1, outside the character range, reserved for the file picker.
	pub const TOGGLE_PICKER: RawKey = RawKey(265);

	pub fn from_char(ch: char) -> Self { Self(ch as i32) }

	fn is_backspace(self) -> bool { self == Self::BACKSPACE || self == Self::KEYPAD_BACKSPACE }

	fn is_enter(self) -> bool { self == Self::ENTER || self == Self::CARRIAGE_RETURN }

	/// Printable character for this code. Codes outside the scalar range and
	/// control characters other than tab have none.
	pub fn to_char(self) -> Option<char> {
		let ch = u32::try_from(self.0).ok().and_then(char::from_u32)?;
		if ch.is_control() && ch != '\t' {
			return None;
		}
		Some(ch)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
	Key(RawKey),
	Resized { width: u16, height: u16 },
}

pub struct InputHandler;

impl InputHandler {
	pub fn new() -> Self { Self }

	pub fn event(&self, event: &Event) -> Option<AppEvent> {
		match event {
			Event::Resize(width, height) => Some(AppEvent::Resized { width: *width, height: *height }),
			Event::Key(_) => raw_key_from_event(event).map(AppEvent::Key),
			_ => None,
		}
	}
}

impl Default for InputHandler {
	fn default() -> Self { Self::new() }
}

/// Maps a crossterm key press onto the integer key-code table.
pub fn raw_key_from_event(event: &Event) -> Option<RawKey> {
	let Event::Key(key) = event else {
		return None;
	};
	if key.kind == KeyEventKind::Release {
		return None;
	}
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
	let alt = key.modifiers.contains(KeyModifiers::ALT);
	// AltGr arrives as Ctrl+Alt on Windows and still carries a character.
	let alt_gr = ctrl && alt && matches!(key.code, KeyCode::Char(_));
	if (ctrl || alt) && !alt_gr {
		return None;
	}

	match key.code {
		KeyCode::Char(ch) => Some(RawKey::from_char(ch)),
		KeyCode::Esc => Some(RawKey::ESCAPE),
		KeyCode::Enter => Some(RawKey::ENTER),
		KeyCode::Backspace => Some(RawKey::BACKSPACE),
		KeyCode::Tab => Some(RawKey::from_char('\t')),
		KeyCode::F(1) => Some(RawKey::TOGGLE_PICKER),
		_ => None,
	}
}

/// Turns a key into the action it means in the current context.
///
/// The picker toggle wins over everything. An open overlay takes all other
/// keys; otherwise the mode's grammar applies. `None` means the key is
/// ignored.
pub fn decode(key: RawKey, mode: EditorMode, floating_panel: Option<&FloatingPanel>) -> Option<Action> {
	if key == RawKey::TOGGLE_PICKER {
		return Some(Action::ToggleFilePicker);
	}

	if let Some(panel) = floating_panel {
		return match panel {
			FloatingPanel::FilePicker(_) => decode_file_picker_key(key),
		};
	}

	match mode {
		EditorMode::Normal => decode_normal_key(key),
		EditorMode::Insert => decode_insert_key(key),
		EditorMode::Command => decode_command_key(key),
	}
}

fn decode_file_picker_key(key: RawKey) -> Option<Action> {
	if key.is_backspace() {
		return Some(Action::FilePicker(FilePickerAction::RemoveLast));
	}
	printable(key).map(|ch| Action::FilePicker(FilePickerAction::Append(ch)))
}

fn decode_normal_key(key: RawKey) -> Option<Action> {
	let action = match key.to_char()? {
		'w' => NormalAction::JumpWordForward,
		'b' => NormalAction::JumpWordBackward,
		'q' => NormalAction::Quit,
		'k' => NormalAction::Up,
		'j' => NormalAction::Down,
		'h' => NormalAction::Left,
		'l' => NormalAction::Right,
		'x' => NormalAction::Delete,
		'o' => NormalAction::NewLineBelow,
		'O' => NormalAction::NewLineAbove,
		'a' => NormalAction::InsertAfterCursor,
		'A' => NormalAction::InsertAtEnd,
		'I' => NormalAction::InsertAtStart,
		'i' => NormalAction::SetInsertMode,
		':' => NormalAction::SetCommandMode,
		_ => return None,
	};
	Some(Action::Normal(action))
}

fn decode_insert_key(key: RawKey) -> Option<Action> {
	let action = match key {
		RawKey::ESCAPE => InsertAction::SetNormalMode,
		key if key.is_backspace() => InsertAction::Remove,
		key if key.is_enter() => InsertAction::Cr,
		key => InsertAction::Insert(printable(key)?),
	};
	Some(Action::Insert(action))
}

fn decode_command_key(key: RawKey) -> Option<Action> {
	let action = match key {
		RawKey::ESCAPE => CommandAction::SetNormalMode,
		key if key.is_backspace() => CommandAction::RemoveLast,
		key if key.is_enter() => CommandAction::Exec,
		key => CommandAction::Append(printable(key)?),
	};
	Some(Action::Command(action))
}

fn printable(key: RawKey) -> Option<char> {
	let ch = key.to_char();
	if ch.is_none() {
		debug!("ignoring key without printable character: {}", key.0);
	}
	ch
}
