use std::io::{self, BufRead};

/// Reads one line without its terminator; `None` once input is exhausted.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::read_line;

    #[test]
    fn strips_unix_and_windows_terminators() {
        let mut input = "Add\nSubtract\r\nExit".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("Add"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("Subtract"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("Exit"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn keeps_inner_whitespace() {
        let mut input = " my file.txt \n".as_bytes();
        assert_eq!(
            read_line(&mut input).unwrap().as_deref(),
            Some(" my file.txt ")
        );
    }
}
