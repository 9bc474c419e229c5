// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ## How it works
//!
//! Data is written into one contiguous allocation which starts at a *starting
//! capacity* and grows in fixed *increments* up to a *maximum capacity*. Growth
//! is never speculative: the allocation only grows when a write doesn't fit,
//! and then by the fewest whole increments that fit it, truncated at the
//! maximum. Growing copies the buffered bytes into a fresh allocation; clearing
//! replaces the allocation with a new one of the starting capacity.
//!
//! What happens when a write would push the buffer past its maximum capacity is
//! decided by its *overflow policy*:
//!
//! - [`Reject`] fails the write with a capacity overflow, leaving the buffer as
//!   it was. This is the pure in-memory [`ReallocatingBuffer`].
//! - [`FlushTo`] flushes all buffered bytes to a [`Sink`](streams::Sink), then
//!   continues the write in the emptied buffer. This is the [`FlushingBuffer`].
//!   Writes larger than the maximum capacity can never be buffered, so they're
//!   written straight to the sink after flushing any pending data.
//!
//! Sink errors are always returned to the caller of the write or flush that
//! triggered them. When a flush fails the data stays buffered, so the flush can
//! be retried.
//!
//! Buffers are not thread-safe; every mutating operation takes `&mut self`.

mod buffer;
mod error;
mod std_io;
pub mod streams;

pub use buffer::*;
pub use error::*;
pub use std_io::*;
