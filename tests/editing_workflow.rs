use std::ops::ControlFlow;

use mote::action_handler::ActionHandler;
use mote::catalog::StaticCatalog;
use mote::input::{RawKey, decode};
use mote::state::{CommandError, CursorState, EditorMode, EditorSize, EditorState};

struct Session {
	state:   EditorState,
	handler: ActionHandler<StaticCatalog>,
}

impl Session {
	fn new(lines: &[&str]) -> Self {
		Self {
			state:   EditorState::new(
				EditorSize { width: 80, height: 24 },
				lines.iter().map(|line| line.to_string()).collect(),
			),
			handler: ActionHandler::new(StaticCatalog::new(["Cargo.toml", "src/lib.rs", "src/main.rs"])),
		}
	}

	fn press(&mut self, key: RawKey) -> ControlFlow<()> {
		match decode(key, self.state.mode, self.state.floating_panel.as_ref()) {
			Some(action) => self.handler.apply(&mut self.state, action),
			None => ControlFlow::Continue(()),
		}
	}

	fn type_keys(&mut self, keys: &str) -> ControlFlow<()> {
		for ch in keys.chars() {
			let key = match ch {
				'\u{1b}' => RawKey::ESCAPE,
				'\n' => RawKey::ENTER,
				'\u{7f}' => RawKey::BACKSPACE,
				_ => RawKey::from_char(ch),
			};
			self.press(key)?;
		}
		ControlFlow::Continue(())
	}

	fn feed(&mut self, keys: &str) { let _ = self.type_keys(keys); }
}

#[test]
fn typing_in_insert_mode_should_edit_and_return_to_normal() {
	let mut session = Session::new(&[""]);
	session.feed("ihello\u{1b}");

	assert_eq!(session.state.lines, vec!["hello"]);
	assert_eq!(session.state.mode, EditorMode::Normal);
	assert_eq!(session.state.cursor, CursorState::new(0, 4));
}

#[test]
fn enter_in_insert_mode_should_split_line_and_keep_content() {
	let mut session = Session::new(&["abcdef"]);
	session.feed("lllla\n\u{1b}");

	assert_eq!(session.state.lines, vec!["abcde", "f"]);
	assert_eq!(session.state.cursor, CursorState::new(1, 0));
}

#[test]
fn backspace_should_stop_at_line_start() {
	let mut session = Session::new(&["ab", "cd"]);
	session.feed("jAx\u{7f}\u{7f}\u{7f}\u{7f}");

	assert_eq!(session.state.lines, vec!["ab", ""]);
	assert_eq!(session.state.cursor, CursorState::new(1, 0));
	assert!(session.state.is_insert_mode());
}

#[test]
fn normal_mode_editing_commands_should_compose() {
	let mut session = Session::new(&["one two three"]);
	session.feed("wx");
	assert_eq!(session.state.lines, vec!["one wo three"]);

	session.feed("onew\u{1b}");
	assert_eq!(session.state.lines, vec!["one wo three", "new"]);

	session.feed("kOtop\u{1b}");
	assert_eq!(session.state.lines, vec!["top", "one wo three", "new"]);

	session.feed("jAend\u{1b}Istart\u{1b}");
	assert_eq!(session.state.lines, vec!["top", "startone wo threeend", "new"]);
}

#[test]
fn colon_q_enter_should_quit_and_freeze_state() {
	let mut session = Session::new(&["keep"]);
	assert_eq!(session.type_keys(":q\n"), ControlFlow::Break(()));
	assert!(session.state.stopped);

	let snapshot = session.state.clone();
	assert_eq!(session.type_keys("ix"), ControlFlow::Break(()));
	assert_eq!(session.state, snapshot);
}

#[test]
fn q_in_normal_mode_should_quit() {
	let mut session = Session::new(&[""]);
	assert_eq!(session.type_keys("q"), ControlFlow::Break(()));
}

#[test]
fn unknown_command_should_report_error_and_return_to_normal() {
	let mut session = Session::new(&[""]);
	assert_eq!(session.type_keys(":wq\n"), ControlFlow::Continue(()));

	assert_eq!(session.state.mode, EditorMode::Normal);
	assert_eq!(session.state.command_error, Some(CommandError::Unknown("wq".to_string())));

	session.feed(":");
	assert_eq!(session.state.command_error, None);
	assert_eq!(session.state.command_text, "");
}

#[test]
fn command_backspace_and_escape_should_edit_then_abandon() {
	let mut session = Session::new(&[""]);
	session.feed(":qx\u{7f}");
	assert_eq!(session.state.command_text, "q");

	session.feed("\u{1b}");
	assert_eq!(session.state.mode, EditorMode::Normal);
	assert!(!session.state.stopped);
}

#[test]
fn file_picker_should_capture_keys_until_toggled_off() {
	let mut session = Session::new(&["text"]);
	let _ = session.press(RawKey::TOGGLE_PICKER);
	let picker = session.state.picker().expect("picker open");
	assert_eq!(picker.filtered_items(), vec!["Cargo.toml", "src/lib.rs", "src/main.rs"]);

	session.feed("mainx\u{7f}");
	let picker = session.state.picker().expect("picker open");
	assert_eq!(picker.text, "main");
	assert_eq!(picker.filtered_items(), vec!["src/main.rs"]);
	assert_eq!(session.state.lines, vec!["text"]);
	assert_eq!(session.state.cursor, CursorState::new(0, 0));

	let _ = session.press(RawKey::TOGGLE_PICKER);
	assert!(session.state.picker().is_none());

	session.feed("x");
	assert_eq!(session.state.lines, vec!["ext"]);
}

#[test]
fn cursor_should_stay_in_bounds_across_a_key_storm() {
	let mut session = Session::new(&["short", "", "a much longer line", "\tx"]);
	for keys in ["lllllllllllllll", "jjjjjj", "kkk", "A\u{1b}", "bbbbbb", "wwwwwwwwww", "x", "hhhh", "o\u{1b}", "O\u{1b}"] {
		session.feed(keys);
		assert!(session.state.cursor_in_bounds(), "cursor {:?} out of bounds after {:?}", session.state.cursor, keys);
	}
}
