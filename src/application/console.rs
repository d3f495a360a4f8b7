//! User-facing progress lines printed while scaffolding

use std::path::Path;
use tracing::debug;

use crate::generation::WriteOutcome;

pub(crate) fn file_written(path: &Path, outcome: WriteOutcome) {
    debug!(path = %path.display(), %outcome, "Scaffold file");
    match outcome {
        WriteOutcome::Created => println!("✅ File created: {}", path.display()),
        WriteOutcome::Skipped => {
            println!("⚠️  File already exists, skipping: {}", path.display())
        }
    }
}

pub(crate) fn line(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}
