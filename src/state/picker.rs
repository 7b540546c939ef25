#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Picker {
	pub text:  String,
	pub items: Vec<String>,
}

impl Picker {
	pub fn new(items: Vec<String>) -> Self { Self { text: String::new(), items } }

	/// Items containing the query as a case-sensitive substring, in their
	/// original order. An empty query keeps everything.
	pub fn filtered_items(&self) -> Vec<&str> {
		self
			.items
			.iter()
			.map(String::as_str)
			.filter(|item| self.text.is_empty() || item.contains(self.text.as_str()))
			.collect()
	}

	pub fn push_query_char(&mut self, ch: char) { self.text.push(ch); }

	pub fn pop_query_char(&mut self) { let _ = self.text.pop(); }
}
