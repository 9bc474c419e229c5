// SPDX-License-Identifier: Apache-2.0

use std::cmp::min;
use std::fmt;
use std::fmt::{Debug, Formatter};
use all_asserts::debug_assert_le;
use tracing::trace;
use crate::BufferOptions;

/// A contiguous, fixed-length allocation which is replaced rather than resized
/// when it grows or is cleared.
#[derive(Clone)]
pub(crate) struct Storage {
	data: Box<[u8]>,
	len: usize,
	options: BufferOptions,
}

impl Debug for Storage {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Storage")
			.field("len", &self.len)
			.field("capacity", &self.data.len())
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}

/// Returns the smallest length reachable from `current` in steps of `increment`
/// that holds `required` bytes, capped at `maximum`.
#[inline]
pub(crate) fn grown_length(
	current: usize,
	required: usize,
	increment: usize,
	maximum: usize
) -> usize {
	let steps = (required.saturating_sub(current)).div_ceil(increment).max(1);
	let length = increment.saturating_mul(steps).saturating_add(current);
	min(length, maximum)
}

fn alloc(len: usize) -> Box<[u8]> {
	vec![0; len].into_boxed_slice()
}

impl Storage {
	/// Creates storage from options which must already be validated.
	pub fn new(options: BufferOptions) -> Self {
		Self {
			data: alloc(options.starting_capacity),
			len: 0,
			options,
		}
	}

	pub fn options(&self) -> BufferOptions { self.options }

	pub fn len(&self) -> usize { self.len }

	pub fn capacity(&self) -> usize { self.data.len() }

	pub fn maximum(&self) -> usize { self.options.maximum_capacity }

	pub fn set_maximum(&mut self, value: usize) {
		self.options.maximum_capacity = value;
	}

	/// Returns the number of bytes that fit before the allocation must grow.
	pub fn limit(&self) -> usize { self.capacity() - self.len }

	/// Returns `true` if `additional` bytes would push the buffer past its
	/// maximum capacity.
	pub fn exceeds_maximum(&self, additional: usize) -> bool {
		self.len.saturating_add(additional) > self.maximum()
	}

	pub fn as_slice(&self) -> &[u8] { &self.data[..self.len] }

	/// Grows the allocation to fit `additional` more bytes. The caller checks
	/// the request against the maximum capacity first.
	pub fn grow(&mut self, additional: usize) {
		let required = self.len + additional;
		if required <= self.capacity() { return }

		let BufferOptions {
			maximum_capacity,
			capacity_increment,
			..
		} = self.options;
		let length = grown_length(
			self.capacity(),
			required,
			capacity_increment,
			maximum_capacity
		);
		debug_assert_le!(required, length);

		let mut data = alloc(length);
		data[..self.len].copy_from_slice(self.as_slice());
		trace!(from = self.capacity(), to = length, "Reallocated buffer storage");
		self.data = data;
	}

	/// Appends `bytes`, which must fit in the current allocation.
	pub fn push(&mut self, bytes: &[u8]) {
		let end = self.len + bytes.len();
		self.data[self.len..end].copy_from_slice(bytes);
		self.len = end;
	}

	/// Replaces the allocation with a fresh one of the starting capacity.
	pub fn clear(&mut self) {
		trace!(discarded = self.len, "Cleared buffer storage");
		self.data = alloc(self.options.starting_capacity);
		self.len = 0;
	}

	/// Takes the buffered bytes, leaving the storage cleared.
	pub fn take(&mut self) -> Vec<u8> {
		let bytes = self.as_slice().to_vec();
		self.clear();
		bytes
	}
}
