// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::io::Write;
use crate::streams::Sink;

/// A [`Sink`] writing to a wrapped [`Write`]r, such as a file or socket.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
	writer: W,
}

impl<W: Write> From<W> for WriterSink<W> {
	fn from(writer: W) -> Self {
		Self { writer }
	}
}

impl<W: Write> WriterSink<W> {
	pub fn new(writer: W) -> Self { writer.into() }

	/// Returns a reference to the wrapped writer.
	pub fn get_ref(&self) -> &W { &self.writer }

	/// Returns a mutable reference to the wrapped writer.
	pub fn get_mut(&mut self) -> &mut W { &mut self.writer }

	/// Unwraps the writer.
	pub fn into_inner(self) -> W { self.writer }
}

impl<W: Write> Sink for WriterSink<W> {
	fn accept(&mut self, data: &[u8]) -> io::Result<()> {
		self.writer.write_all(data)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.writer.flush()
	}
}
