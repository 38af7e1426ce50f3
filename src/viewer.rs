use crate::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Writes the html chart to `output`, or to a new temporary file that is kept after exit.
/// Returns the path of the written file.
pub fn write_chart(html: &str, output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(p) => {
            std::fs::write(p, html).map_err(|error| Error::Writing {
                error,
                path: p.to_path_buf(),
            })?;
            p.to_path_buf()
        }
        None => {
            let writing = |error: std::io::Error| Error::Writing {
                error,
                path: std::env::temp_dir(),
            };
            let mut file = tempfile::Builder::new()
                .prefix("bench_plot_")
                .suffix(".html")
                .tempfile()
                .map_err(writing)?;
            file.write_all(html.as_bytes()).map_err(writing)?;
            let (_, path) = file.keep().map_err(|e| writing(e.error))?;
            path
        }
    };
    info!("chart written to {}", path.display());
    Ok(path)
}

/// Opens the file with the default application of the platform, usually a web browser.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let (program, args) = OPENER;
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| Error::Viewer {
            path: path.to_path_buf(),
            reason: format!("could not run {}: {}", program, e),
        })?;
    if !status.success() {
        return Err(Error::Viewer {
            path: path.to_path_buf(),
            reason: format!("{} exited with {}", program, status),
        });
    }
    info!("opened {} with {}", path.display(), program);
    Ok(())
}
