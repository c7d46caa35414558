use crate::{
    models::{command::HELP, Comic},
    reader::Outcome,
};
use log::debug;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use url::Url;

/// Terminal rendition of the single reader screen.
pub struct Screen<W> {
    out: W,
    show_errors: bool,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, show_errors: bool) -> Self {
        Screen { out, show_errors }
    }

    pub fn render(&mut self, outcome: &Outcome) -> std::io::Result<()> {
        match outcome {
            Outcome::Displayed(comic) => writeln!(self.out, "\n{comic}")?,
            Outcome::Image { comic, bytes } => {
                writeln!(self.out, "Image: {} ({} bytes)", comic.image_url, bytes.len())?;
            }
            Outcome::Failed { what, error } => {
                if self.show_errors {
                    writeln!(self.out, "Could not load {what}: {error}")?;
                }
            }
            Outcome::Requested(target) => debug!("Requested comic {}", target),
            Outcome::Help => writeln!(self.out, "{HELP}")?,
            Outcome::Stale(_) | Outcome::Ignored | Outcome::Quit => {}
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Writes a loaded image into the export directory without blocking the
/// UI loop.
pub async fn save_image(dir: &Path, comic: &Comic, bytes: &[u8]) -> io::Result<PathBuf> {
    let path = dir.join(image_file_name(comic.number, &comic.title, &comic.image_url));
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

fn image_file_name(number: u32, title: &str, image_url: &str) -> String {
    let ext = Url::parse(image_url)
        .ok()
        .and_then(|url| {
            Path::new(url.path())
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "png".into());
    format!("{} - {}.{}", number, sanitize_name(title), ext)
}

fn sanitize_name(s: &str) -> String {
    s.replace([':', '/', '\\', '?', '*', '"', '<', '>', '|'], "")
        // Keep this last to remove duplicate spaces
        .replace("  ", " ")
}
