// SPDX-License-Identifier: Apache-2.0

use tracing::{debug, warn};
use crate::error::{Error, OperationKind, OverflowError, Result, ResultContext};
use crate::streams::Sink;

/// Decides what happens when buffered data can't grow to fit a write.
pub trait OverflowPolicy {
	/// Makes room by draining all `buffered` bytes. On success the buffer clears
	/// its storage; on error the buffer is left untouched. `requested` is the
	/// number of bytes that didn't fit, for reporting.
	fn drain(&mut self, op: OperationKind, buffered: &[u8], requested: usize, maximum: usize) -> Result;

	/// Handles a single write larger than the maximum capacity. Called only when
	/// the buffer is empty, either from the start or after being drained.
	fn bypass(&mut self, data: &[u8], maximum: usize) -> Result;

	/// Pushes drained data to its final destination.
	fn flush_target(&mut self) -> Result { Ok(()) }
}

/// Rejects writes that overflow the buffer with a capacity overflow error.
#[derive(Copy, Clone, Debug, Default)]
pub struct Reject;

impl OverflowPolicy for Reject {
	fn drain(&mut self, op: OperationKind, buffered: &[u8], requested: usize, maximum: usize) -> Result {
		Err(Error::overflow(op, OverflowError {
			requested,
			buffered: buffered.len(),
			maximum,
		}))
	}

	fn bypass(&mut self, data: &[u8], maximum: usize) -> Result {
		Err(Error::overflow(OperationKind::Write, OverflowError {
			requested: data.len(),
			buffered: 0,
			maximum,
		}))
	}
}

/// Flushes buffered data to a [`Sink`] when the buffer overflows, writing data
/// too large for the buffer directly to the sink.
#[derive(Clone, Debug, Default)]
pub struct FlushTo<S: Sink> {
	sink: S,
}

impl<S: Sink> FlushTo<S> {
	pub fn new(sink: S) -> Self { Self { sink } }

	pub fn sink(&self) -> &S { &self.sink }

	pub fn sink_mut(&mut self) -> &mut S { &mut self.sink }

	pub fn into_inner(self) -> S { self.sink }

	fn accept(&mut self, op: OperationKind, data: &[u8]) -> Result {
		self.sink.accept(data).context(op).inspect_err(|err|
			warn!(%err, count = data.len(), "Sink rejected data")
		)
	}
}

impl<S: Sink> OverflowPolicy for FlushTo<S> {
	fn drain(&mut self, op: OperationKind, buffered: &[u8], _requested: usize, _maximum: usize) -> Result {
		if buffered.is_empty() { return Ok(()) }

		self.accept(op, buffered)?;
		debug!(count = buffered.len(), "Flushed buffer to sink");
		Ok(())
	}

	fn bypass(&mut self, data: &[u8], maximum: usize) -> Result {
		self.accept(OperationKind::Bypass, data)?;
		debug!(count = data.len(), maximum, "Wrote past buffer directly to sink");
		Ok(())
	}

	fn flush_target(&mut self) -> Result {
		self.sink.flush().context(OperationKind::Flush)
	}
}
