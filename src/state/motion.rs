//! Word motions over whitespace-delimited runs.
//!
//! Both searches walk rows with an explicit loop, so a long stretch of blank
//! rows costs iterations rather than stack depth. When no target exists the
//! cursor comes back unchanged.

use super::CursorState;

/// `w`: start of the next run of non-whitespace characters.
///
/// On the cursor's row the caret first has to cross some whitespace. The end
/// of a row counts as whitespace, so any following row's first
/// non-whitespace character is a valid target.
pub fn next_word_start(lines: &[String], cursor: CursorState) -> CursorState {
	let Some(line) = lines.get(cursor.row) else {
		return cursor;
	};

	let chars = line.chars().collect::<Vec<_>>();
	let start = cursor.col.min(chars.len());
	let same_row = chars[start..]
		.iter()
		.position(|ch| ch.is_whitespace())
		.map(|offset| start + offset)
		.and_then(|gap| chars[gap..].iter().position(|ch| !ch.is_whitespace()).map(|offset| gap + offset));
	if let Some(col) = same_row {
		return CursorState::new(cursor.row, col);
	}

	for (row, line) in lines.iter().enumerate().skip(cursor.row + 1) {
		if let Some(col) = line.chars().position(|ch| !ch.is_whitespace()) {
			return CursorState::new(row, col);
		}
	}

	cursor
}

/// `b`: start of the nearest run of non-whitespace characters that begins
/// before the cursor, searching upward row by row. Stops at the first row.
pub fn previous_word_start(lines: &[String], cursor: CursorState) -> CursorState {
	if cursor.row >= lines.len() {
		return cursor;
	}

	let mut row = cursor.row;
	let mut limit = cursor.col;
	loop {
		let chars = lines[row].chars().collect::<Vec<_>>();
		let end = limit.min(chars.len());
		if let Some(last) = chars[..end].iter().rposition(|ch| !ch.is_whitespace()) {
			let col = chars[..last].iter().rposition(|ch| ch.is_whitespace()).map_or(0, |gap| gap + 1);
			return CursorState::new(row, col);
		}
		if row == 0 {
			return cursor;
		}
		row -= 1;
		limit = usize::MAX;
	}
}
