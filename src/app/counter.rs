use std::fs;
use std::path::Path;

/// Counts non-blank lines in the file at `path`.
///
/// Invalid UTF-8 sequences are dropped rather than rejected. Read failures
/// count as zero lines.
pub fn count_lines(path: &Path) -> u64 {
    match fs::read(path) {
        Ok(bytes) => count_non_blank(&decode_valid_utf8(&bytes)),
        Err(err) => {
            log::debug!("Skipping unreadable file {}: {}", path.display(), err);
            0
        }
    }
}

/// Counts lines whose trimmed content is non-empty. `\n`, `\r\n` and a lone
/// `\r` all end a line.
pub fn count_non_blank(text: &str) -> u64 {
    text.split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .count() as u64
}

// Keeps only the valid UTF-8 runs.
fn decode_valid_utf8(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
