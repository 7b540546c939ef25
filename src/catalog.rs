use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::PickerConfig;

/// Supplies the entries offered by the file picker when it opens.
pub trait FileCatalog {
	fn items(&self) -> Vec<String>;
}

/// Fixed list, handy when the caller already knows the candidates.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
	items: Vec<String>,
}

impl StaticCatalog {
	pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self { items: items.into_iter().map(Into::into).collect() }
	}
}

impl FileCatalog for StaticCatalog {
	fn items(&self) -> Vec<String> { self.items.clone() }
}

/// Files below a root directory, listed as `/`-separated relative paths.
#[derive(Debug, Clone)]
pub struct WorkspaceCatalog {
	root:        PathBuf,
	max_items:   usize,
	max_depth:   usize,
	show_hidden: bool,
}

impl WorkspaceCatalog {
	pub fn new(root: impl Into<PathBuf>, config: &PickerConfig) -> Self {
		Self {
			root:        root.into(),
			max_items:   config.max_items,
			max_depth:   config.max_depth,
			show_hidden: config.show_hidden,
		}
	}

	fn is_visible(&self, name: &str) -> bool { self.show_hidden || !name.starts_with('.') }
}

impl FileCatalog for WorkspaceCatalog {
	/// Breadth-first walk, directory entries in name order. The walk stops as
	/// soon as `max_items` files are found, so shallow files win over deep
	/// ones and a huge root costs no more than the cap.
	fn items(&self) -> Vec<String> {
		let mut files = Vec::new();
		if self.max_items == 0 {
			return files;
		}
		let mut pending = VecDeque::from([(self.root.clone(), 0usize)]);

		'walk: while let Some((dir, depth)) = pending.pop_front() {
			let mut entries = match std::fs::read_dir(&dir) {
				Ok(entries) => entries.flatten().collect::<Vec<_>>(),
				Err(err) => {
					warn!("skip unreadable directory {}: {}", dir.display(), err);
					continue;
				}
			};
			entries.sort_by_key(|entry| entry.file_name());

			for entry in entries {
				if !self.is_visible(&entry.file_name().to_string_lossy()) {
					continue;
				}
				let path = entry.path();
				let Ok(file_type) = entry.file_type() else {
					continue;
				};
				if file_type.is_dir() {
					if depth + 1 < self.max_depth {
						pending.push_back((path, depth + 1));
					}
				} else if let Some(relative) = relative_display_path(&self.root, &path) {
					files.push(relative);
					if files.len() >= self.max_items {
						break 'walk;
					}
				}
			}
		}

		files.sort();
		files
	}
}

fn relative_display_path(root: &Path, path: &Path) -> Option<String> {
	let relative = path.strip_prefix(root).ok()?;
	let parts = relative.components().map(|part| part.as_os_str().to_string_lossy()).collect::<Vec<_>>();
	Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::{FileCatalog, StaticCatalog, WorkspaceCatalog};
	use crate::config::PickerConfig;

	fn workspace() -> tempfile::TempDir {
		let dir = tempfile::tempdir().expect("create temp dir");
		fs::create_dir_all(dir.path().join("src/state")).expect("create nested dirs");
		fs::create_dir_all(dir.path().join(".git")).expect("create hidden dir");
		fs::write(dir.path().join("README.md"), "readme").expect("write file");
		fs::write(dir.path().join("src/main.rs"), "fn main() {}").expect("write file");
		fs::write(dir.path().join("src/state/mod.rs"), "").expect("write file");
		fs::write(dir.path().join(".git/HEAD"), "ref").expect("write file");
		fs::write(dir.path().join(".env"), "").expect("write file");
		dir
	}

	#[test]
	fn workspace_catalog_should_list_sorted_relative_paths_without_hidden_entries() {
		let dir = workspace();
		let catalog = WorkspaceCatalog::new(dir.path(), &PickerConfig::default());
		assert_eq!(catalog.items(), vec!["README.md", "src/main.rs", "src/state/mod.rs"]);
	}

	#[test]
	fn workspace_catalog_should_include_hidden_entries_when_enabled() {
		let dir = workspace();
		let config = PickerConfig { show_hidden: true, ..PickerConfig::default() };
		let items = WorkspaceCatalog::new(dir.path(), &config).items();
		assert!(items.contains(&".env".to_string()));
		assert!(items.contains(&".git/HEAD".to_string()));
	}

	#[test]
	fn workspace_catalog_should_respect_depth_and_item_limits() {
		let dir = workspace();
		let shallow = PickerConfig { max_depth: 1, ..PickerConfig::default() };
		assert_eq!(WorkspaceCatalog::new(dir.path(), &shallow).items(), vec!["README.md"]);

		let capped = PickerConfig { max_items: 2, ..PickerConfig::default() };
		assert_eq!(WorkspaceCatalog::new(dir.path(), &capped).items(), vec!["README.md", "src/main.rs"]);
	}

	#[test]
	fn workspace_catalog_should_stop_walking_once_cap_is_reached() {
		let dir = tempfile::tempdir().expect("create temp dir");
		fs::create_dir_all(dir.path().join("a/deep")).expect("create nested dirs");
		fs::write(dir.path().join("a/deep/first.rs"), "").expect("write file");
		fs::write(dir.path().join("a/second.rs"), "").expect("write file");
		fs::write(dir.path().join("z.txt"), "").expect("write file");

		let capped = PickerConfig { max_items: 1, ..PickerConfig::default() };
		assert_eq!(WorkspaceCatalog::new(dir.path(), &capped).items(), vec!["z.txt"]);

		let two = PickerConfig { max_items: 2, ..PickerConfig::default() };
		assert_eq!(WorkspaceCatalog::new(dir.path(), &two).items(), vec!["a/second.rs", "z.txt"]);

		let none = PickerConfig { max_items: 0, ..PickerConfig::default() };
		assert!(WorkspaceCatalog::new(dir.path(), &none).items().is_empty());
	}

	#[test]
	fn workspace_catalog_should_return_nothing_for_missing_root() {
		let dir = workspace();
		let catalog = WorkspaceCatalog::new(dir.path().join("missing"), &PickerConfig::default());
		assert!(catalog.items().is_empty());
	}

	#[test]
	fn static_catalog_should_keep_order_and_duplicates() {
		let catalog = StaticCatalog::new(["b", "a", "b"]);
		assert_eq!(catalog.items(), vec!["b", "a", "b"]);
	}
}
