//! Non-ASCII scan over a source tree, one line per offending file.

use std::path::PathBuf;

use anyhow::Result;

use crate::{config::Config, scan};

pub fn run(root: PathBuf, ext: Option<String>) -> Result<()> {
    let cfg = Config::load();
    let ext = ext.unwrap_or_else(|| cfg.scan_extension());

    // Findings are the product and go to stdout; unreadable files are
    // reported on stderr and do not stop the walk. Exit status stays 0
    // either way.
    scan::scan_tree(
        &root,
        &ext,
        |finding| println!("{}: {}", finding.path.display(), finding.rendered_chars()),
        |path, err| eprintln!("⚠️ No se pudo leer {}: {}", path.display(), err),
    );

    Ok(())
}
