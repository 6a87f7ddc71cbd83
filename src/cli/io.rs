//! JSON output for one-shot commands

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a value to stdout as pretty JSON followed by a newline
pub fn write_pretty<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    write_pretty_to(&mut stdout, value)
}

fn write_pretty_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_pretty_to_buffer() {
        let mut buffer = Vec::new();
        write_pretty_to(&mut buffer, &serde_json::json!({"a": 1})).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["a"], 1);
    }
}
