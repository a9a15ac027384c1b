//! Session script loading.
//!
//! Scripts are YAML. Files ending in `.gz` are decompressed transparently, and
//! piped input is checked for the gzip magic bytes.

use super::event::SessionScript;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Loads and parses a session script from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use navquill::script::loader::load_script_file;
///
/// let script = load_script_file("session.yaml").unwrap();
/// println!("{} events", script.events.len());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read (missing, permissions, corrupt gzip stream)
/// - The file contents are not a valid session script
pub fn load_script_file<P: AsRef<Path>>(path: P) -> Result<SessionScript> {
    let path_ref = path.as_ref();

    // Check if file is gzipped
    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read script {}", path_ref.display()))?
    };

    parse_script(&content)
}

/// Loads a session script from standard input.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or does not hold a valid script.
pub fn load_script_from_stdin() -> Result<SessionScript> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = decode_bytes(buffer)?;
    parse_script(&content)
}

/// Parses a session script from YAML text.
///
/// # Errors
///
/// Returns an error if the text is not a valid session script.
pub fn parse_script(content: &str) -> Result<SessionScript> {
    serde_yaml::from_str(content).context("Failed to parse session script")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open script {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip script")?;
    Ok(content)
}

/// Converts raw input to text, decompressing it if it starts with the gzip magic bytes.
fn decode_bytes(buffer: Vec<u8>) -> Result<String> {
    if buffer.starts_with(&[0x1f, 0x8b]) {
        let mut decoder = GzDecoder::new(buffer.as_slice());
        let mut content = String::new();
        decoder
            .read_to_string(&mut content)
            .context("Failed to decompress gzip input")?;
        Ok(content)
    } else {
        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
