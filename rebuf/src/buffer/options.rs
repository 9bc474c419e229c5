// SPDX-License-Identifier: Apache-2.0

use crate::error::ConfigError;

/// The default maximum capacity, 64KiB.
pub const DEFAULT_MAXIMUM_CAPACITY: usize = 64 * 1024;
/// The default starting capacity, 4KiB.
pub const DEFAULT_STARTING_CAPACITY: usize = 4 * 1024;
/// The default capacity increment, 4KiB.
pub const DEFAULT_CAPACITY_INCREMENT: usize = 4 * 1024;

/// Capacity options for [`Buffer`](super::Buffer).
///
/// # Maximum capacity
///
/// The hard ceiling on the buffer's allocation, and on any single write the
/// buffer will hold. Must be greater than the starting capacity. Defaults to
/// `64KiB`. This is the only option that can be changed after the buffer is
/// created.
///
/// # Starting capacity
///
/// The length of the allocation when the buffer is created, and the length it
/// returns to every time it is cleared or flushed. Defaults to `4KiB`.
///
/// # Capacity increment
///
/// The step by which the allocation grows. Larger steps mean fewer copies
/// when the buffer is written frequently in small pieces, at the cost of more
/// memory allocated at each step. Defaults to `4KiB`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct BufferOptions {
	pub maximum_capacity: usize,
	pub starting_capacity: usize,
	pub capacity_increment: usize,
}

impl Default for BufferOptions {
	fn default() -> Self { Self::new() }
}

impl BufferOptions {
	/// Creates a new set of buffer options.
	pub const fn new() -> Self {
		Self {
			maximum_capacity: DEFAULT_MAXIMUM_CAPACITY,
			starting_capacity: DEFAULT_STARTING_CAPACITY,
			capacity_increment: DEFAULT_CAPACITY_INCREMENT,
		}
	}

	/// Creates a set of buffer options from its three capacities.
	pub const fn with_capacities(
		maximum_capacity: usize,
		starting_capacity: usize,
		capacity_increment: usize
	) -> Self {
		Self {
			maximum_capacity,
			starting_capacity,
			capacity_increment,
		}
	}

	/// Returns the maximum capacity.
	#[inline]
	pub const fn maximum_capacity(&self) -> usize { self.maximum_capacity }

	/// Returns the starting capacity.
	#[inline]
	pub const fn starting_capacity(&self) -> usize { self.starting_capacity }

	/// Returns the capacity increment.
	#[inline]
	pub const fn capacity_increment(&self) -> usize { self.capacity_increment }

	/// Sets the maximum capacity.
	#[inline]
	pub fn set_maximum_capacity(&mut self, value: usize) {
		self.maximum_capacity = value;
	}

	/// Sets the starting capacity.
	#[inline]
	pub fn set_starting_capacity(&mut self, value: usize) {
		self.starting_capacity = value;
	}

	/// Sets the capacity increment.
	#[inline]
	pub fn set_capacity_increment(&mut self, value: usize) {
		self.capacity_increment = value;
	}

	/// Sets the maximum capacity.
	#[inline]
	pub const fn with_maximum_capacity(mut self, value: usize) -> Self {
		self.maximum_capacity = value;
		self
	}

	/// Sets the starting capacity.
	#[inline]
	pub const fn with_starting_capacity(mut self, value: usize) -> Self {
		self.starting_capacity = value;
		self
	}

	/// Sets the capacity increment.
	#[inline]
	pub const fn with_capacity_increment(mut self, value: usize) -> Self {
		self.capacity_increment = value;
		self
	}

	/// Checks that the options describe a valid buffer: a non-zero starting
	/// capacity and increment, and a maximum greater than the starting capacity.
	pub const fn validate(&self) -> Result<(), ConfigError> {
		let Self {
			maximum_capacity: maximum,
			starting_capacity: starting,
			capacity_increment: increment,
		} = *self;

		if starting == 0 {
			Err(ConfigError::ZeroStartingCapacity)
		} else if maximum <= starting {
			Err(ConfigError::MaximumNotAboveStarting { maximum, starting })
		} else if increment == 0 {
			Err(ConfigError::ZeroIncrement)
		} else {
			Ok(())
		}
	}

	/// Checks that `value` may replace the maximum capacity.
	pub(crate) const fn validate_maximum(&self, value: usize) -> Result<(), ConfigError> {
		if value <= self.starting_capacity {
			Err(ConfigError::MaximumNotAboveStarting {
				maximum: value,
				starting: self.starting_capacity
			})
		} else {
			Ok(())
		}
	}
}
