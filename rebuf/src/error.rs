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

use std::{fmt, io, result};
use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use amplify_derive::Display;
use ErrorKind::{CapacityOverflow, InvalidConfiguration, Sink};

pub type ErrorBox = Box<dyn StdError + Send + Sync>;
pub type Result<T = ()> = result::Result<T, Error>;

/// The operation being performed when an error occurred.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum OperationKind {
	#[display("configure buffer")]
	Configure,
	#[display("reserve buffer capacity")]
	Reserve,
	#[display("write to buffer")]
	Write,
	#[display("flush buffer")]
	Flush,
	#[display("write past buffer")]
	Bypass,
}

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
	/// Inconsistent capacity parameters. Always a caller bug.
	#[display("invalid capacity configuration")]
	InvalidConfiguration,
	/// A write or reservation that no amount of growth can accommodate.
	#[display("capacity overflow")]
	CapacityOverflow,
	/// The sink rejected a flush or bypass write.
	#[display("sink error")]
	Sink,
}

/// Capacity parameters which can't describe a valid buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
	#[error("maximum capacity ({maximum}) must be greater than starting capacity ({starting})")]
	MaximumNotAboveStarting {
		maximum: usize,
		starting: usize,
	},
	#[error("starting capacity must be at least 1")]
	ZeroStartingCapacity,
	#[error("capacity increment must be at least 1")]
	ZeroIncrement,
}

/// A request for more bytes than the buffer may ever hold.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("cannot fit {requested} bytes on top of {buffered} buffered bytes with a maximum capacity of {maximum}")]
pub struct OverflowError {
	pub requested: usize,
	pub buffered: usize,
	pub maximum: usize,
}

#[derive(Debug)]
pub struct Error {
	op: OperationKind,
	kind: ErrorKind,
	source: Option<ErrorBox>,
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let Self { op, kind, source } = self;
		if let Some(source) = source {
			write!(f, "{op} failed; {kind} ({source})")
		} else {
			write!(f, "{op} failed; {kind}")
		}
	}
}

impl StdError for Error {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		if let Some(ref source) = self.source {
			Some(source.as_ref())
		} else {
			None
		}
	}
}

impl Error {
	fn new(
		op: OperationKind,
		kind: ErrorKind,
		source: Option<ErrorBox>
	) -> Self {
		Self { op, kind, source }
	}

	/// Creates a new "invalid configuration" error.
	pub fn invalid_config(op: OperationKind, error: ConfigError) -> Self {
		Self::new(op, InvalidConfiguration, Some(error.into()))
	}

	/// Creates a new "capacity overflow" error.
	pub fn overflow(op: OperationKind, error: OverflowError) -> Self {
		Self::new(op, CapacityOverflow, Some(error.into()))
	}

	/// Creates a new sink error.
	pub fn sink(op: OperationKind, error: io::Error) -> Self {
		Self::new(op, Sink, Some(error.into()))
	}

	/// Returns the operation kind.
	pub fn operation(&self) -> OperationKind { self.op }

	/// Returns the error kind.
	pub fn kind(&self) -> ErrorKind { self.kind }

	/// Returns `true` if the error is a capacity overflow.
	pub fn is_overflow(&self) -> bool { matches!(self.kind, CapacityOverflow) }

	/// Returns `true` if the error came from the sink.
	pub fn is_sink(&self) -> bool { matches!(self.kind, Sink) }

	/// Returns the source downcast into an IO Error, if possible.
	pub fn io_source(&self) -> Option<&io::Error> {
		self.source()?.downcast_ref()
	}

	/// Returns the source downcast into an overflow error, if possible.
	pub fn overflow_source(&self) -> Option<&OverflowError> {
		self.source()?.downcast_ref()
	}

	/// Returns the source downcast into a configuration error, if possible.
	pub fn config_source(&self) -> Option<&ConfigError> {
		self.source()?.downcast_ref()
	}
}

impl From<ConfigError> for Error {
	fn from(value: ConfigError) -> Self {
		Self::invalid_config(OperationKind::Configure, value)
	}
}

impl From<Error> for io::Error {
	fn from(value: Error) -> Self {
		let kind = match value.kind {
			InvalidConfiguration => io::ErrorKind::InvalidInput,
			CapacityOverflow => io::ErrorKind::WriteZero,
			Sink => value.io_source()
						 .map_or(io::ErrorKind::Other, io::Error::kind),
		};
		io::Error::new(kind, value)
	}
}

pub trait ResultContext<T> {
	/// Converts a sink result into a [`Result`], tagging errors with `op`.
	fn context(self, op: OperationKind) -> Result<T>;
}

impl<T> ResultContext<T> for io::Result<T> {
	fn context(self, op: OperationKind) -> Result<T> {
		self.map_err(|err| Error::sink(op, err))
	}
}
