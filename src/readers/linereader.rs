// src/readers/linereader.rs

//! Implements a [`LineReader`], reads a file or STDIN one line at a time for
//! the _ldp_ program.

#![allow(non_snake_case)]

use crate::common::{Count, FPath, NLc, PATH_STDIN};

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Statistics of a [`LineReader`].
///
/// For CLI option `--summary`.
///
/// [`LineReader`]: self::LineReader
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryLineReader {
    /// count of lines read
    pub LineReader_lines: Count,
    /// count of bytes read
    pub LineReader_bytes: Count,
    /// count of lines that were not valid UTF-8
    pub LineReader_lines_lossy: Count,
}

impl fmt::Debug for SummaryLineReader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("")
            .field("lines", &self.LineReader_lines)
            .field("bytes", &self.LineReader_bytes)
            .field("lossy", &self.LineReader_lines_lossy)
            .finish()
    }
}

/// Reads lines from a file, or from STDIN for path [`PATH_STDIN`].
///
/// Each line is returned without its line ending. Bytes that are not valid
/// UTF-8 are replaced with `U+FFFD`.
///
/// [`PATH_STDIN`]: crate::common::PATH_STDIN
pub struct LineReader {
    path: FPath,
    reader: Box<dyn BufRead>,
    /// raw bytes of the current line
    buffer: Vec<u8>,
    /// the current line
    line: String,
    lines: Count,
    bytes: Count,
    lines_lossy: Count,
}

impl fmt::Debug for LineReader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("path", &self.path)
            .field("lines", &self.lines)
            .field("bytes", &self.bytes)
            .finish()
    }
}

impl LineReader {
    /// Open `path` for reading. The path `"-"` reads STDIN.
    pub fn new(path: &FPath) -> io::Result<LineReader> {
        defn!("({:?})", path);
        let reader: Box<dyn BufRead> = if path.as_str() == PATH_STDIN {
            Box::new(BufReader::new(io::stdin()))
        } else {
            let file = File::open(path)?;
            Box::new(BufReader::new(file))
        };
        defx!();

        Ok(LineReader::from_bufread(path.clone(), reader))
    }

    /// Wrap an already open `reader`.
    pub fn from_bufread(
        path: FPath,
        reader: Box<dyn BufRead>,
    ) -> LineReader {
        LineReader {
            path,
            reader,
            buffer: Vec::with_capacity(256),
            line: String::with_capacity(256),
            lines: 0,
            bytes: 0,
            lines_lossy: 0,
        }
    }

    pub fn path(&self) -> &FPath {
        &self.path
    }

    /// Read the next line, without `"\n"` or `"\r\n"`.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<&str>> {
        self.buffer.clear();
        let read = self
            .reader
            .read_until(NLc as u8, &mut self.buffer)?;
        if read == 0 {
            defñ!("{:?} EOF", self.path);
            return Ok(None);
        }
        self.bytes += read as Count;
        self.lines += 1;
        if self.buffer.last() == Some(&(NLc as u8)) {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }
        self.line.clear();
        match std::str::from_utf8(&self.buffer) {
            Ok(s) => self.line.push_str(s),
            Err(_) => {
                self.lines_lossy += 1;
                self.line
                    .push_str(&String::from_utf8_lossy(&self.buffer));
            }
        }

        Ok(Some(self.line.as_str()))
    }

    /// Statistics of this `LineReader`.
    pub fn summary(&self) -> SummaryLineReader {
        SummaryLineReader {
            LineReader_lines: self.lines,
            LineReader_bytes: self.bytes,
            LineReader_lines_lossy: self.lines_lossy,
        }
    }
}
