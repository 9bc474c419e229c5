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

use std::io;
use crate::{Buffer, FlushTo, OverflowPolicy, Reject};
use crate::streams::Sink;

/// Flushes whatever the buffer's policy writes to, for [`io::Write::flush`].
pub trait FlushTarget: OverflowPolicy + Sized {
	fn flush_buffer(buffer: &mut Buffer<Self>) -> crate::Result;
}

impl FlushTarget for Reject {
	/// Does nothing; the data has nowhere to go.
	fn flush_buffer(_: &mut Buffer<Self>) -> crate::Result { Ok(()) }
}

impl<S: Sink> FlushTarget for FlushTo<S> {
	/// Flushes the buffer into the sink, then flushes the sink.
	fn flush_buffer(buffer: &mut Buffer<Self>) -> crate::Result {
		buffer.flush()?;
		buffer.policy.flush_target()
	}
}

impl<P: FlushTarget> io::Write for Buffer<P> {
	/// Writes all of `buf` into the buffer, returning its length. A capacity
	/// overflow surfaces as [`io::ErrorKind::WriteZero`].
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.write_from_slice(buf)?;
		Ok(buf.len())
	}

	fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
		Ok(self.write_from_slice(buf)?)
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(P::flush_buffer(self)?)
	}
}

#[cfg(test)]
mod test {
	use std::io::{ErrorKind, Write};
	use pretty_assertions::assert_eq;
	use crate::Buffer;

	#[test]
	fn write_fmt() {
		let mut buf = Buffer::with_capacity(64, 4, 4).unwrap();
		write!(buf, "{}-{}", 12, "ab").unwrap();
		assert_eq!(buf.as_slice(), b"12-ab");
	}

	#[test]
	fn overflow_is_write_zero() {
		let mut buf = Buffer::with_capacity(8, 4, 4).unwrap();
		assert_eq!(buf.write(&[0; 9]).unwrap_err().kind(), ErrorKind::WriteZero);
		assert!(buf.is_empty());
	}

	#[test]
	fn flushing_flush_drains() {
		let mut buf = Buffer::flushing_with_capacity(Vec::new(), 64, 4, 4).unwrap();
		buf.write_all(b"hello").unwrap();
		assert!(buf.sink().is_empty());
		Write::flush(&mut buf).unwrap();
		assert_eq!(buf.sink().as_slice(), b"hello");
		assert!(buf.is_empty());
	}
}
