//! Platform abstraction layer for reading the clock.
//!
//! This module allows switching between the real monotonic clock and a fake clock whose
//! time is set explicitly by tests.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
