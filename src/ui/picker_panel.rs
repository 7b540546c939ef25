use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Widget};

use super::buffer_view::display_width_of_char_prefix;
use crate::state::Picker;

const PADDING_H: u16 = 16;
const PADDING_V: u16 = 4;

/// Query bar on the first row, matching items below it.
pub(super) struct PickerPanelWidget {
	query: String,
	items: Vec<String>,
}

impl PickerPanelWidget {
	pub(super) fn from_picker(picker: &Picker) -> Self {
		Self {
			query: format!("> {}", picker.text),
			items: picker.filtered_items().into_iter().map(str::to_string).collect(),
		}
	}

	/// Centred rectangle with fixed padding, shrinking the padding on small
	/// screens so at least one item row stays visible.
	pub(super) fn area(screen: Rect) -> Rect {
		let pad_h = PADDING_H.min(screen.width.saturating_sub(1) / 2);
		let pad_v = PADDING_V.min(screen.height.saturating_sub(2) / 2);
		Rect {
			x:      screen.x.saturating_add(pad_h),
			y:      screen.y.saturating_add(pad_v),
			width:  screen.width.saturating_sub(pad_h * 2),
			height: screen.height.saturating_sub(pad_v * 2),
		}
	}

	/// Cursor sits right after the query text.
	pub(super) fn cursor(&self, area: Rect) -> Option<Position> {
		if area.width == 0 || area.height == 0 {
			return None;
		}
		let width = display_width_of_char_prefix(&self.query, self.query.chars().count());
		let x = width.min(area.width as usize - 1) as u16;
		Some(Position::new(area.x.saturating_add(x), area.y))
	}
}

impl Widget for PickerPanelWidget {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		Clear.render(area, buf);

		let item_rows = area.height.saturating_sub(1) as usize;
		let mut lines = Vec::with_capacity(item_rows + 1);
		lines.push(Line::from(self.query).style(Style::default().add_modifier(Modifier::BOLD)));
		lines.extend(self.items.into_iter().take(item_rows).map(Line::from));

		Paragraph::new(lines).style(Style::default().add_modifier(Modifier::REVERSED)).render(area, buf);
	}
}
