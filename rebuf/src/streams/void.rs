// SPDX-License-Identifier: Apache-2.0

use std::io;
use super::Sink;

/// Returns a [`Sink`] that writes to nowhere, dropping any data written to it.
pub fn void_sink() -> VoidSink { VoidSink::default() }

/// A [`Sink`] that writes to nowhere, dropping any data written to it. The
/// number of bytes dropped is counted.
#[derive(Copy, Clone, Debug, Default)]
pub struct VoidSink {
	count: usize,
}

impl VoidSink {
	/// Returns the number of bytes accepted so far.
	pub fn count(&self) -> usize { self.count }
}

impl Sink for VoidSink {
	/// Drops `data`.
	fn accept(&mut self, data: &[u8]) -> io::Result<()> {
		self.count += data.len();
		Ok(())
	}
}
