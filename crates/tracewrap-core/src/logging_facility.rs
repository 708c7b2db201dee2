//! Logging facility for tracewrap
//!
//! Provides:
//! - Single initialization point via `init(profile)`
//! - Profile-gated subscriber setup (human-readable or JSON)
//! - In-memory capture of rendered log lines for deterministic tests
//!
//! The engines in this workspace emit preformatted message lines with a
//! fixed wording contract, so the capture surface is message-centric:
//! tests assert on the rendered line text, not on structured fields.

pub mod init;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedLine, LogCapture};
