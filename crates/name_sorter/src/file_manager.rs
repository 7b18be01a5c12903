use ::std::borrow::Cow;
use ::std::fs::{self, File};
use ::std::io::{self, BufWriter, Write};
use ::std::path::{Path, PathBuf};

use ::log::{debug, warn};

/// File access used by the sort command.
pub trait FileManager {
    fn exists(&self, path: &Path) -> bool;

    fn read_all_lines(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Writes one line per entry, replacing any existing file.
    fn write(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileManager;

impl FileManager for LocalFileManager {
    fn exists(&self, path: &Path) -> bool {
        resolve_path(path).is_ok_and(|resolved| resolved.is_file())
    }

    /// Reads the file as text, replacing invalid UTF-8 with `U+FFFD`.
    fn read_all_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let file_path = resolve_path(path)?;
        debug!("Reading names from {}", file_path.display());

        let bytes = fs::read(&file_path)?;
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            warn!("{} is not valid UTF-8, decoding lossily", file_path.display());
        }

        Ok(split_lines(&content))
    }

    fn write(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        let file_path = expand_tilde(path);
        debug!("Writing {} lines to {}", lines.len(), file_path.display());

        let mut writer = BufWriter::new(File::create(file_path)?);
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

/// Splits text on `\n`, `\r\n` or a lone `\r`. A trailing line break does not
/// add an empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let Some(end) = rest.find(['\r', '\n']) else {
            lines.push(rest.to_string());
            break;
        };

        lines.push(rest[..end].to_string());
        let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + break_len..];
    }

    lines
}

/// Resolves the given file path by expanding user directories and
/// canonicalizing relative paths.
///
/// # Returns
/// - `Ok(PathBuf)`: The resolved absolute path.
/// - `Err(io::Error)`: If the path cannot be resolved, for example because it
///   does not exist.
pub fn resolve_path<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    fs::canonicalize(expand_tilde(path))
}

/// Expands a leading `~` to the home directory without touching the filesystem.
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match path.to_str() {
        Some(path_str) => PathBuf::from(shellexpand::tilde(path_str).into_owned()),
        None => path.to_path_buf(),
    }
}
