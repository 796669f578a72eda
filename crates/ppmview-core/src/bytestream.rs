/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! The reader keeps an in-memory slice and a position into it.
//! Reads past the end never panic, they either return a default
//! value (`get_u8`) or an error (`get_u8_err`, `get_as_ref`), it's up to the
//! caller to check `eof` or `has` before reading when the distinction matters.

static ERROR_MSG: &str = "No more bytes";

/// An encapsulation of a byte stream reader
///
/// The lifetime parameter is from the stream which we are reading from,
/// slices handed out by [`get_as_ref`](ByteReader::get_as_ref) borrow from it
/// and not from the reader.
pub struct ByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Skip `num` bytes ahead of the stream.
    ///
    /// Skipping past the end leaves the reader at eof
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }
    /// Undo a read by moving `num` bytes backwards.
    ///
    /// Rewinding past the start leaves the reader at position zero
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }
    /// Return true if there are at least `num` bytes left to read
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }
    /// Number of bytes that can still be read
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    /// Return true if all bytes have been consumed
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Current position in the stream
    pub const fn get_position(&self) -> usize {
        self.position
    }
    /// Read a single byte, returning zero if we are at eof
    ///
    /// The position is not advanced when nothing was read
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }
    /// Read a single byte or return an error if we are at eof
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, &'static str> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ERROR_MSG)
        }
    }
    /// Look at the next byte without consuming it
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }
    /// Look at `num` bytes starting `offset` bytes after the current position
    /// without consuming them
    pub fn peek_at(&self, offset: usize, num: usize) -> Result<&'a [u8], &'static str> {
        let start = self.position.checked_add(offset).ok_or(ERROR_MSG)?;
        let end = start.checked_add(num).ok_or(ERROR_MSG)?;

        self.stream.get(start..end).ok_or(ERROR_MSG)
    }
    /// Consume `num` bytes and return a reference to them
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], &'static str> {
        let bytes = self.peek_at(0, num)?;
        self.position += num;
        Ok(bytes)
    }
}
