// util.rs

use std::io::{self, Write};

/// Write one line, treating a broken pipe as success so that piping
/// session output into e.g. `head` does not kill the loop.
pub fn writeln_ignore_broken_pipe(mut w: impl Write, s: impl AsRef<str>) -> io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_the_line_with_a_newline() {
        let mut buf = Vec::new();
        writeln_ignore_broken_pipe(&mut buf, "-49").unwrap();
        assert_eq!(buf, b"-49\n");
    }
}
