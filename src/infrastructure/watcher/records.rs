//! NUL-delimited record decoding

use std::io::{self, BufRead, BufReader, Read};

use crate::domain::value_objects::ChangeToken;

/// Pull-based iterator over the tokens of a NUL-separated stream
///
/// Ends when the underlying reader reaches end of file. A trailing record
/// without a terminator is still yielded; empty records are skipped.
pub struct ChangeTokens<R> {
    reader: BufReader<R>,
    record: Vec<u8>,
    done: bool,
}

impl<R: Read> ChangeTokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            record: Vec::new(),
            done: false,
        }
    }
}

impl<R: Read> Iterator for ChangeTokens<R> {
    type Item = io::Result<ChangeToken>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.record.clear();
            match self.reader.read_until(b'\0', &mut self.record) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    if self.record.last() == Some(&b'\0') {
                        self.record.pop();
                    }
                    if let Some(token) = ChangeToken::from_record(&self.record) {
                        return Some(Ok(token));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
