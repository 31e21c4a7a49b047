//! ghosted-sessions
//!
//! In-process session store: bounded capacity with least-recently-used
//! eviction, TTL expiry, and a per-session async mutex so concurrent sends
//! on one session cannot interleave their history writes.

pub mod error;
pub mod session;
pub mod store;

pub use error::SessionError;
pub use session::{Session, MAX_CONTEXT};
pub use store::{SessionHandle, SessionStore};
