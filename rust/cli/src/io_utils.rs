//! Input helpers shared by the interactive commands.

use std::io::BufRead;

/// Reads one line from a buffered reader, blocking until available.
///
/// Returns the trimmed line (possibly empty), or `None` on EOF or a read
/// error. Interactive loops treat `None` as "the player left".
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn trims_and_returns_lines_until_eof() {
        let mut input = Cursor::new(b"  hit  \nstand\n");
        assert_eq!(read_stdin_line(&mut input).as_deref(), Some("hit"));
        assert_eq!(read_stdin_line(&mut input).as_deref(), Some("stand"));
        assert_eq!(read_stdin_line(&mut input), None);
    }
}
