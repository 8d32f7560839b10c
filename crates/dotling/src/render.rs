//! Invocation of the external GraphViz renderer.
//!
//! This is the only I/O in the crate: one temporary file and one blocking
//! subprocess per export. Everything else is in-memory.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Writes `source` to a temp file and runs
/// `{renderer_dir/}dot -T<format> -o<destination> <tempfile>`.
///
/// The temp file is removed when this function returns, error paths
/// included (drop guard on [`NamedTempFile`]).
pub(crate) fn render_to_file(
    source: &str,
    renderer_dir: Option<&Path>,
    format: &str,
    destination: &Path,
) -> Result<()> {
    let mut dot_file = NamedTempFile::with_prefix("gvz")?;
    dot_file.write_all(source.as_bytes())?;
    dot_file.flush()?;

    let program = match renderer_dir {
        Some(dir) => dir.join("dot"),
        None => PathBuf::from("dot"),
    };

    tracing::debug!(
        renderer = %program.display(),
        format,
        destination = %destination.display(),
        "invoking graphviz"
    );

    let output = Command::new(&program)
        .arg(format!("-T{format}"))
        .arg(format!("-o{}", destination.display()))
        .arg(dot_file.path())
        .output()?;

    tracing::debug!(status = %output.status, "graphviz finished");

    if !output.status.success() {
        return Err(Error::Render {
            output: combined_output(&output.stdout, &output.stderr),
        });
    }

    Ok(())
}

fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).trim_end().to_string();
    let stderr = String::from_utf8_lossy(stderr);
    let stderr = stderr.trim_end();
    if !stderr.is_empty() {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(stderr);
    }
    combined
}
