//! Session access for the current-user lookup.
//!
//! Linkpage only reads the session: establishing it (login, OAuth, whatever the
//! deployment uses) is an external collaborator's job.

mod session;

pub use session::SESSION_USER_ID_KEY;
