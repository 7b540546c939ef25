mod buffer_view;
mod command_line;
mod picker_panel;
mod status_bar;
mod terminal_session;

use ratatui::layout::{Constraint, Layout};

use crate::input::RawKey;
use crate::state::{EditorSize, EditorState};
use buffer_view::{BufferViewWidget, Viewport};
use command_line::CommandLineWidget;
use picker_panel::PickerPanelWidget;
use status_bar::StatusBarWidget;
pub(crate) use terminal_session::{TerminalSession, TerminalSessionError};

pub struct Renderer {
	viewport: Viewport,
}

impl Renderer {
	pub fn new() -> Self { Self { viewport: Viewport::default() } }

	/// Buffer view on top, then the status line and the command line. The
	/// picker, when open, floats over everything and owns the cursor.
	pub fn render(&mut self, frame: &mut ratatui::Frame<'_>, state: &EditorState, last_key: Option<RawKey>) {
		let area = frame.area();
		let chunks =
			Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)]).split(area);

		self.viewport.follow_cursor(state, chunks[0]);
		let buffer_view = BufferViewWidget::from_state(state, self.viewport, chunks[0]);
		let mut cursor_position = buffer_view.cursor();

		frame.render_widget(buffer_view, chunks[0]);
		frame.render_widget(StatusBarWidget::from_state(state, last_key), chunks[1]);
		let command_line = CommandLineWidget::from_state(state, chunks[2]);
		if let Some(position) = command_line.cursor() {
			cursor_position = Some(position);
		}
		frame.render_widget(command_line, chunks[2]);

		if let Some(picker) = state.picker() {
			let panel_area = PickerPanelWidget::area(area);
			let panel = PickerPanelWidget::from_picker(picker);
			cursor_position = panel.cursor(panel_area);
			frame.render_widget(panel, panel_area);
		}

		if let Some(position) = cursor_position {
			frame.set_cursor_position(position);
		}
	}

	/// Size of the text area for a given terminal size, i.e. what the state
	/// should see as its viewport.
	pub fn text_area_size(width: u16, height: u16) -> EditorSize {
		EditorSize { width, height: height.saturating_sub(2) }
	}
}

impl Default for Renderer {
	fn default() -> Self { Self::new() }
}
