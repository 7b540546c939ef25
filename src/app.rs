use std::ops::ControlFlow;
use std::thread;

use crossterm::event;
use thiserror::Error;
use tracing::{debug, error, info, trace, warn};

use crate::action_handler::ActionHandler;
use crate::catalog::FileCatalog;
use crate::input::{self, AppEvent, InputHandler, RawKey};
use crate::state::EditorState;
use crate::ui::{Renderer, TerminalSession, TerminalSessionError};

const FALLBACK_TERMINAL_SIZE: (u16, u16) = (80, 24);
const DEFAULT_TITLE: &str = "mote";

#[derive(Debug, Error)]
pub enum AppError {
	#[error("terminal session failed")]
	Terminal {
		#[source]
		source: TerminalSessionError,
	},
	#[error("event bus disconnected")]
	EventBusDisconnected,
}

impl From<TerminalSessionError> for AppError {
	fn from(source: TerminalSessionError) -> Self { Self::Terminal { source } }
}

pub struct App<C> {
	title:          String,
	state:          EditorState,
	renderer:       Renderer,
	action_handler: ActionHandler<C>,
	last_key:       Option<RawKey>,
	event_tx:       flume::Sender<AppEvent>,
	event_rx:       flume::Receiver<AppEvent>,
}

impl<C: FileCatalog> App<C> {
	pub fn new(lines: Vec<String>, catalog: C) -> Self {
		let (width, height) = crossterm::terminal::size().unwrap_or_else(|err| {
			warn!("query terminal size failed, assuming {:?}: {}", FALLBACK_TERMINAL_SIZE, err);
			FALLBACK_TERMINAL_SIZE
		});
		let (event_tx, event_rx) = flume::bounded(1024);

		Self {
			title: DEFAULT_TITLE.to_string(),
			state: EditorState::new(Renderer::text_area_size(width, height), lines),
			renderer: Renderer::new(),
			action_handler: ActionHandler::new(catalog),
			last_key: None,
			event_tx,
			event_rx,
		}
	}

	/// Terminal window title shown while the editor runs.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn run(mut self) -> Result<(), AppError> {
		let mut session = TerminalSession::enter(&self.title)?;
		session.sync_cursor_shape(&self.state)?;
		self.start_input_pump();
		info!("editor started with {} line(s)", self.state.lines.len());

		loop {
			session.draw(|frame| self.renderer.render(frame, &self.state, self.last_key))?;
			trace!("redraw");

			let event = self.event_rx.recv().map_err(|err| {
				error!("event bus disconnected while waiting for next event: {}", err);
				AppError::EventBusDisconnected
			})?;
			if self.handle_event(event).is_break() {
				break;
			}
			session.sync_cursor_shape(&self.state)?;
		}

		info!("editor stopped");
		Ok(())
	}

	fn handle_event(&mut self, event: AppEvent) -> ControlFlow<()> {
		match event {
			AppEvent::Resized { width, height } => {
				let size = Renderer::text_area_size(width, height);
				self.state.resize(size.width, size.height);
				ControlFlow::Continue(())
			}
			AppEvent::Key(key) => {
				self.last_key = Some(key);
				let Some(action) = input::decode(key, self.state.mode, self.state.floating_panel.as_ref()) else {
					debug!("key {} has no binding in {:?} mode", key.0, self.state.mode);
					return ControlFlow::Continue(());
				};
				self.action_handler.apply(&mut self.state, action)
			}
		}
	}

	fn start_input_pump(&self) {
		let event_tx = self.event_tx.clone();
		let input_handler = InputHandler::new();
		thread::spawn(move || {
			loop {
				let evt = match event::read() {
					Ok(evt) => evt,
					Err(err) => {
						error!("input pump stopped: failed to read terminal event: {}", err);
						break;
					}
				};
				let Some(app_event) = input_handler.event(&evt) else {
					continue;
				};
				if let Err(err) = event_tx.send(app_event) {
					error!("input pump stopped: failed to send event to event bus: {}", err);
					break;
				}
			}
		});
	}
}
