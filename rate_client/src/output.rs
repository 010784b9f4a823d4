//! Writing the quote line to disk.
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use rate_common::{QuoteError, Result};

/// Format the output line, e.g. `Dólar: 5.43`.
pub fn format_line(label: &str, bid: &str) -> String {
    format!("{}: {}", label, bid)
}

/// Replace the contents of `path` with `line`, creating it with mode 0644.
pub fn write_quote(path: &Path, line: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(QuoteError::FileWrite)?;
    file.write_all(line.as_bytes())
        .map_err(QuoteError::FileWrite)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn format_line_has_no_trailing_newline() {
        assert_eq!(format_line("Dólar", "5.43"), "Dólar: 5.43");
    }

    #[test]
    fn write_quote_truncates_longer_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");
        fs::write(&path, "Dólar: 5.432100000000000").unwrap();

        write_quote(&path, "Dólar: 5.1").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.1");
    }

    #[cfg(unix)]
    #[test]
    fn write_quote_creates_file_readable_by_all() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");

        write_quote(&path, "Dólar: 5.43").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o600, 0o600);
        assert_eq!(mode & !0o644, 0);
    }
}
