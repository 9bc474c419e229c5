// SPDX-License-Identifier: Apache-2.0

mod options;
mod policy;
mod storage;
mod write;

pub use options::*;
pub use policy::*;
pub use write::FlushTarget;

use std::fmt;
use std::fmt::{Debug, Formatter};
use crate::error::{Error, OperationKind, Result};
use crate::streams::Sink;
use storage::Storage;
use OperationKind::{Flush, Reserve, Write};

/// An in-memory buffer which rejects writes past its maximum capacity.
pub type ReallocatingBuffer = Buffer<Reject>;

/// A buffer which flushes to a sink rather than overflowing.
pub type FlushingBuffer<S> = Buffer<FlushTo<S>>;

/// A byte buffer which grows in fixed steps up to a maximum capacity, handing
/// overflow to its [`OverflowPolicy`].
#[derive(Clone)]
pub struct Buffer<P: OverflowPolicy = Reject> {
	storage: Storage,
	policy: P,
}

impl<P: OverflowPolicy + Debug> Debug for Buffer<P> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Buffer")
			.field("storage", &self.storage)
			.field("policy", &self.policy)
			.finish()
	}
}

impl Default for Buffer {
	fn default() -> Self {
		Self::from_parts(Reject, BufferOptions::default())
	}
}

impl TryFrom<BufferOptions> for Buffer {
	type Error = Error;

	fn try_from(options: BufferOptions) -> Result<Self> {
		Self::new(options)
	}
}

impl Buffer {
	/// Creates a new in-memory buffer.
	pub fn new(options: BufferOptions) -> Result<Self> {
		Self::with_policy(Reject, options)
	}

	/// Creates a new in-memory buffer with the provided capacities. Shorthand
	/// for:
	///
	/// ```
	/// use rebuf::{Buffer, BufferOptions};
	///
	/// # fn main() -> rebuf::Result {
	/// let buf = Buffer::new(BufferOptions::with_capacities(32767, 8, 16))?;
	/// # Ok(())
	/// # }
	/// ```
	pub fn with_capacity(
		maximum_capacity: usize,
		starting_capacity: usize,
		capacity_increment: usize
	) -> Result<Self> {
		Self::new(BufferOptions::with_capacities(
			maximum_capacity,
			starting_capacity,
			capacity_increment
		))
	}
}

impl<S: Sink> Buffer<FlushTo<S>> {
	/// Creates a new buffer flushing to `sink`.
	pub fn flushing(sink: S, options: BufferOptions) -> Result<Self> {
		Self::with_policy(FlushTo::new(sink), options)
	}

	/// Creates a new buffer flushing to `sink` with the provided capacities.
	pub fn flushing_with_capacity(
		sink: S,
		maximum_capacity: usize,
		starting_capacity: usize,
		capacity_increment: usize
	) -> Result<Self> {
		Self::flushing(sink, BufferOptions::with_capacities(
			maximum_capacity,
			starting_capacity,
			capacity_increment
		))
	}

	/// Writes all buffered data to the sink, then clears the buffer. If the sink
	/// fails, the data is kept in the buffer so the flush can be retried.
	pub fn flush(&mut self) -> Result {
		self.drain(Flush, 0)
	}

	/// Returns a reference to the sink.
	pub fn sink(&self) -> &S { self.policy.sink() }

	/// Returns a mutable reference to the sink. Writing to the sink directly
	/// while data is buffered will reorder the data.
	pub fn sink_mut(&mut self) -> &mut S { self.policy.sink_mut() }

	/// Flushes the buffer, then returns the sink.
	pub fn into_inner(mut self) -> Result<S> {
		self.flush()?;
		self.policy.flush_target()?;
		Ok(self.policy.into_inner())
	}

	/// Returns the sink and any unflushed data, without flushing.
	pub fn into_parts(mut self) -> (S, Vec<u8>) {
		let data = self.storage.take();
		(self.policy.into_inner(), data)
	}
}

impl<P: OverflowPolicy> Buffer<P> {
	/// Creates a new buffer with an overflow policy, failing if `options` can't
	/// describe a valid buffer.
	pub fn with_policy(policy: P, options: BufferOptions) -> Result<Self> {
		options.validate()?;
		Ok(Self::from_parts(policy, options))
	}

	fn from_parts(policy: P, options: BufferOptions) -> Self {
		Self {
			storage: Storage::new(options),
			policy,
		}
	}

	/// Returns the options used to create the buffer, with the current maximum
	/// capacity.
	pub fn options(&self) -> BufferOptions { self.storage.options() }
	/// Returns the number of bytes in the buffer.
	pub fn len(&self) -> usize { self.storage.len() }
	/// Returns the number of bytes in the buffer. Alias of [`len`](Self::len).
	pub fn size(&self) -> usize { self.len() }
	/// Returns `true` if the buffer is empty.
	pub fn is_empty(&self) -> bool { self.len() == 0 }
	/// Returns the length of the current allocation.
	pub fn capacity(&self) -> usize { self.storage.capacity() }
	/// Returns the number of bytes that can be written before reallocating.
	pub fn limit(&self) -> usize { self.storage.limit() }
	pub fn maximum_capacity(&self) -> usize { self.storage.maximum() }
	pub fn starting_capacity(&self) -> usize { self.options().starting_capacity }
	pub fn capacity_increment(&self) -> usize { self.options().capacity_increment }

	/// Returns the buffered bytes.
	pub fn as_slice(&self) -> &[u8] { self.storage.as_slice() }

	/// Copies the buffered bytes into a new vector.
	pub fn to_vec(&self) -> Vec<u8> { self.as_slice().to_vec() }

	/// Returns a reference to the overflow policy.
	pub fn policy(&self) -> &P { &self.policy }

	/// Changes the maximum capacity. This limits the memory held by the buffer,
	/// not the number of bytes written in total. Lowering the maximum does not
	/// shrink the current allocation; the new limit applies from the next write.
	pub fn set_maximum_capacity(&mut self, value: usize) -> Result {
		self.options()
			.validate_maximum(value)
			.map_err(|err| Error::invalid_config(OperationKind::Configure, err))?;
		self.storage.set_maximum(value);
		Ok(())
	}

	/// Ensures `additional` more bytes can be written without reallocating,
	/// growing the allocation by whole increments if needed. If the bytes would
	/// push the buffer past its maximum capacity, the overflow policy decides
	/// whether to reject them or make room.
	///
	/// Unlike plain growth to the maximum, this never leaves the request only
	/// partly met: an in-memory buffer fails with a capacity overflow instead of
	/// growing to the ceiling. A flushing buffer flushes; if `additional` is more
	/// than the maximum capacity, it returns after flushing without growing.
	pub fn reserve(&mut self, additional: usize) -> Result {
		self.reserve_for(Reserve, additional)
	}

	fn reserve_for(&mut self, op: OperationKind, additional: usize) -> Result {
		if self.storage.exceeds_maximum(additional) {
			self.drain(op, additional)?;
			// No allocation can hold the request; draining is all that's possible.
			if additional > self.maximum_capacity() { return Ok(()) }
			// The cleared allocation may still be too small for the request.
		}

		// No-op if the allocation already fits.
		self.storage.grow(additional);
		Ok(())
	}

	/// Hands the buffered data to the policy, clearing on success.
	fn drain(&mut self, op: OperationKind, requested: usize) -> Result {
		let Self { storage, policy } = self;
		policy.drain(op, storage.as_slice(), requested, storage.maximum())?;
		storage.clear();
		Ok(())
	}

	/// Writes a single byte.
	pub fn write_u8(&mut self, value: u8) -> Result {
		self.write_from_slice(&[value])
	}

	/// Writes all of `value` to the buffer. Data larger than the maximum capacity
	/// can never be buffered; once any pending data is drained it's handed to the
	/// overflow policy instead, which rejects it for an in-memory buffer.
	pub fn write_from_slice(&mut self, value: &[u8]) -> Result {
		let maximum = self.maximum_capacity();
		if value.len() > maximum {
			if !self.is_empty() {
				self.drain(Write, value.len())?;
			}
			return self.policy.bypass(value, maximum)
		}

		self.reserve_for(Write, value.len())?;
		self.storage.push(value);
		Ok(())
	}

	/// Clears data from the buffer, resetting the allocation to the starting
	/// capacity.
	pub fn clear(&mut self) {
		if self.is_empty() && self.capacity() == self.starting_capacity() {
			return
		}

		self.storage.clear();
	}
}
