//! # lockwatch-core
//!
//! Watches for the game client's lockfile and turns its presence into a
//! connection status for a display layer.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime. The poll loop owns one timer thread.
//! - **Graceful degradation**: Missing, unreadable or corrupt lockfiles all mean
//!   "Waiting for Client", never an error.
//! - **Read-only**: The lockfile belongs to the client process. We never write it.
//! - **Secret-aware**: The lockfile password never leaves [`LockfileRecord`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lockwatch_core::{FnConsumer, PollLoop};
//!
//! let mut poll = PollLoop::default();
//! poll.subscribe(FnConsumer(|n: &lockwatch_core::StatusNotification| println!("{:?}", n)));
//! poll.start();
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lockfile;
pub mod poller;
pub mod status;

pub use config::{load_config, LockwatchConfig};
pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use error::{LockwatchError, ReadFailure, Result};
pub use lockfile::{parse_lockfile, LockfileLocator, LockfileReader, LockfileRecord};
pub use poller::{FnConsumer, PollLoop, PollState, StatusConsumer};
pub use status::{ConnectionInfo, ConnectionStatus, StatusLabel, StatusNotification};
