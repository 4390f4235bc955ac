//! Line oriented text files, one integer per line.
//!
//! Uncompressed files hold the row-major pixels of a square image, each in `[0, 255]`.
//! Compressed files hold the pixel count on the first line and the preorder tree tokens after it.

use std::fmt::Display;
use std::io::{Error as IoError, Write};

use crate::{Error, Result, Token, Value};

// parsing

/// Reads an uncompressed image, checking that every value is a byte and that the image is square.
///
/// Blank lines are ignored.
pub fn read_uncompressed(src: &str) -> Result<Vec<Value>> {
    let pixels = lines(src)
        .map(|(line, value)| {
            let value = value?;
            u8::try_from(value)
                .map(Value::from)
                .map_err(|_| Error::ValueOutOfRange { line, value })
        })
        .collect::<Result<Vec<_>>>()?;
    let count = pixels.len();
    if count.isqrt() * count.isqrt() != count {
        return Err(Error::NotSquare { count });
    }
    Ok(pixels)
}

/// Reads a compressed stream without checking it, that is left to [`crate::uncompress`].
///
/// Blank lines are ignored.
pub fn read_compressed(src: &str) -> Result<Vec<Token>> {
    lines(src).map(|(_line, value)| value).collect()
}

/// non-blank lines parsed as integers, along with their 0 based line index
fn lines(src: &str) -> impl Iterator<Item = (usize, Result<i64>)> + '_ {
    src.lines()
        .enumerate()
        .map(|(line, text)| (line, text.trim()))
        .filter(|(_line, text)| !text.is_empty())
        .map(|(line, text)| {
            let value = text.parse::<i64>().map_err(|_| Error::InvalidInteger {
                line,
                text: text.to_owned(),
            });
            (line, value)
        })
}

// formatting

/// Writes each value on its own line.
pub fn write_lines<T: Display>(
    mut write: impl Write,
    values: impl IntoIterator<Item = T>,
) -> Result<(), IoError> {
    for value in values {
        writeln!(write, "{value}")?;
    }
    write.flush()
}

// tests
