//! Client side of the cookie session: HTTP calls that carry the session cookie, a local
//! countdown that mirrors the server's expiry, and a controller binding both to a view.
//!
//! The countdown is advisory only. The server's expiry check is authoritative and any 401 or
//! 403 from a protected call ends the local session immediately.

pub mod api;
pub mod controller;
pub mod lifecycle;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{ApiError, SessionApi};
pub use controller::SessionController;
pub use lifecycle::SessionLifecycle;
pub use view::{Action, NoticeKind, SessionView};
