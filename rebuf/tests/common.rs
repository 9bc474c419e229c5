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

#![allow(dead_code)]

use std::fmt::{Arguments, Debug};
use std::io;
use rebuf::streams::Sink;

pub const MAXIMUM_CAPACITY: usize = i16::MAX as usize;
pub const STARTING_CAPACITY: usize = 8;
pub const CAPACITY_INCREMENT: usize = 16;

macro_rules! qc_assert_eq {
	($left:expr,$right:expr) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, None)
			)
		}
	}};
    ($left:expr,$right:expr,$($arg:tt)+) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, Some(format_args!($($arg)+)))
			)
		}
	}};
}

pub fn format_qc_assert_error<L: Debug, R: Debug>(left: &L, right: &R, msg: Option<Arguments>) -> String {
	if let Some(msg) = msg {
		format!(
			"assertion failed `(left == right)`: {msg}\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	} else {
		format!(
			"assertion failed `(left == right)`:\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	}
}

/// A sink recording every call it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
	pub data: Vec<u8>,
	pub accepts: Vec<usize>,
	pub flushes: usize,
}

impl Sink for RecordingSink {
	fn accept(&mut self, data: &[u8]) -> io::Result<()> {
		self.accepts.push(data.len());
		self.data.extend_from_slice(data);
		Ok(())
	}

	fn flush(&mut self) -> io::Result<()> {
		self.flushes += 1;
		Ok(())
	}
}

/// A sink which fails while `broken` is set, accepting nothing.
#[derive(Debug, Default)]
pub struct BrokenSink {
	pub broken: bool,
	pub data: Vec<u8>,
}

impl BrokenSink {
	pub fn broken() -> Self {
		Self { broken: true, data: Vec::new() }
	}
}

impl Sink for BrokenSink {
	fn accept(&mut self, data: &[u8]) -> io::Result<()> {
		if self.broken {
			Err(io::ErrorKind::BrokenPipe.into())
		} else {
			self.data.extend_from_slice(data);
			Ok(())
		}
	}
}
