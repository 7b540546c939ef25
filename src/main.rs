use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mote::app::App;
use mote::catalog::WorkspaceCatalog;
use mote::config::Config;
use mote::{file_loader, logging};

/// Modal terminal text editor.
#[derive(Debug, Parser)]
#[command(name = "mote", version)]
struct Cli {
	/// File to open. Starts with an empty buffer when omitted.
	path: Option<PathBuf>,
}

fn main() {
	let cli = Cli::parse();
	if let Err(err) = run(cli) {
		eprintln!("{:#}", err);
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	let config = Config::load().context("load config failed")?;
	logging::init_logging(&config.log_level).context("initialize logging failed")?;

	let lines = match &cli.path {
		Some(path) => file_loader::load_lines(path).context("open file failed")?,
		None => vec![String::new()],
	};
	let root = match config.picker.root.clone() {
		Some(root) => root,
		None => std::env::current_dir().context("resolve working directory failed")?,
	};
	let catalog = WorkspaceCatalog::new(root, &config.picker);

	let title = match &cli.path {
		Some(path) => format!("mote: {}", path.display()),
		None => "mote".to_string(),
	};

	App::new(lines, catalog).with_title(title).run().context("run app failed")
}
