//! # dualview-bridge
//!
//! A **native messaging bridge** for the DualView browser extension: a short-lived
//! helper process that the browser spawns, which
//!
//! - reads **one** framed command from **stdin**,
//! - launches the DualView application as a **fully detached daemon**, and
//! - writes **one** framed status reply to **stdout**, then exits.
//!
//! ---
//!
//! ## Wire protocol
//!
//! Standard browser native messaging framing, identical in both directions:
//!
//! 1. A **4-byte length prefix** (`u32`) in **native endianness**.
//! 2. Then **that many bytes** of UTF-8 payload.
//!
//! The inbound payload is the raw command string (not JSON): a `;`-delimited
//! argument list, optionally wrapped in double quotes. The outbound payload is
//! a JSON envelope:
//!
//! ```json
//! { "length": 42, "content": "Plain received args: ...\nStarted process.\n" }
//! ```
//!
//! where `content` is the newline-joined status lines accumulated over the run.
//!
//! ### Gotchas worth knowing
//!
//! - **Disconnect is normal:** when the extension disconnects (or the browser
//!   exits), stdin closes. The bridge exits silently with status 0 and sends
//!   nothing — that path intentionally bypasses the status reply.
//! - **Never log to stdout:** stdout is reserved for framed protocol messages.
//!   Diagnostics go to `$HOME/dualview_bridge_out.txt` when the config enables
//!   them (see [`logger`]).
//! - **Child failures are invisible:** anything that goes wrong after the fork
//!   (session setup, `chdir`, `exec`) happens after the parent has already
//!   queued its reply. The child dies quietly; the host cannot be told. This
//!   is inherent to the detach design, not a bug.
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `0`  | Launch attempted and reported (also: silent disconnect exit) |
//! | `2`  | Empty command received |
//! | `3`  | Configuration could not be loaded |
//!
//! A fork failure is reported in the status content but still exits `0`; the
//! host distinguishes scenarios by code *plus* message content.
//!
//! ## Configuration
//!
//! JSON at `$XDG_DATA_HOME/dualview/bridge.json` (falling back to
//! `$HOME/.local/share/dualview/bridge.json`):
//!
//! ```json
//! {
//!     "workDir": "/absolute/path",
//!     "dualviewExecutable": "/absolute/path/to/dualview",
//!     "logging": false
//! }
//! ```
//!
//! `workDir` and `dualviewExecutable` are required; `logging` defaults to off.
//!
//! ## Crate layout
//!
//! - [`host`] — length-prefixed framing over any `Read`/`Write`.
//! - [`command`] — the `;`-delimited argument parser.
//! - [`config`] — config file resolution and parsing.
//! - [`launch`] — fork / new session / null stdio / `exec` detachment.
//! - [`response`] — status-line aggregation, flushed as one frame.
//! - [`logger`] — the optional diagnostic file log.
//! - [`bridge`] — the run loop tying it all together.

#[cfg(not(unix))]
compile_error!("dualview-bridge only supports Unix-like platforms");

pub mod bridge;
pub mod command;
pub mod config;
pub mod error;
pub mod host;
pub mod launch;
pub mod logger;
pub mod response;

#[doc(inline)]
pub use bridge::{run, Outcome};
#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use error::BridgeError;
#[doc(inline)]
pub use logger::Logger;
#[doc(inline)]
pub use response::ResponsePool;
