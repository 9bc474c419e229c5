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

mod void;

pub use void::*;

use std::io;

/// A data sink, the destination of flushed buffer data.
pub trait Sink {
	/// Writes all of `data` into the sink, in order. Blocks until every byte has
	/// been accepted or an error occurs.
	fn accept(&mut self, data: &[u8]) -> io::Result<()>;

	/// Writes all accepted data to its final target.
	fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl<S: Sink + ?Sized> Sink for &mut S {
	#[inline]
	fn accept(&mut self, data: &[u8]) -> io::Result<()> {
		(**self).accept(data)
	}

	#[inline]
	fn flush(&mut self) -> io::Result<()> {
		(**self).flush()
	}
}

impl<S: Sink + ?Sized> Sink for Box<S> {
	#[inline]
	fn accept(&mut self, data: &[u8]) -> io::Result<()> {
		(**self).accept(data)
	}

	#[inline]
	fn flush(&mut self) -> io::Result<()> {
		(**self).flush()
	}
}

impl Sink for Vec<u8> {
	fn accept(&mut self, data: &[u8]) -> io::Result<()> {
		self.extend_from_slice(data);
		Ok(())
	}
}
