use std::fs;
use std::path::{Path, PathBuf};

/// Column stop tabs expand to.
pub const TAB_WIDTH: usize = 4;

const BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Brings raw input to the form the engines expect: no byte order mark,
/// valid UTF-8, `\n` line endings and no tabs.
///
/// Invalid UTF-8 is repaired lossily. Tabs expand to the next multiple of
/// [`TAB_WIDTH`] columns, counted in chars from the start of each line.
pub fn normalize(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    let text = String::from_utf8_lossy(bytes);
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                let width = TAB_WIDTH - column % TAB_WIDTH;
                out.extend(std::iter::repeat_n(' ', width));
                column += width;
            }
            '\n' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Reads a markdown file and returns its normalized content.
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(normalize(&bytes))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[rstest]
    #[case(b"plain\n", "plain\n")]
    #[case(b"\xEF\xBB\xBFbom", "bom")]
    #[case(b"a\r\nb\rc\n", "a\nb\nc\n")]
    #[case(b"\tx", "    x")]
    #[case(b"ab\tx", "ab  x")]
    #[case(b"abcd\tx\n\ty", "abcd    x\n    y")]
    fn normalizes(#[case] input: &[u8], #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(normalize(b"a\xFFb"), "a\u{FFFD}b");
    }

    #[test]
    fn tab_stops_count_chars_not_bytes() {
        assert_eq!(normalize("é\tx".as_bytes()), "é   x");
    }

    #[test]
    fn read_document_normalizes() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "doc.md", b"# Title\r\n\r\n\tcode\r\n");
        let content = read_document(&path).unwrap();
        assert_eq!(content, "# Title\n\n    code\n");
    }

    #[test]
    fn read_document_not_found() {
        let dir = create_test_dir();
        let result = read_document(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
