//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's cryptographically secure random byte source.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same surface:
//!
//! ```ignore
//! pub(crate) fn sys_random(buf: &mut [u8]) -> std::io::Result<()>;
//! ```
//!
//! Failures are reported to the caller rather than aborting, so that
//! generator construction can surface them.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
