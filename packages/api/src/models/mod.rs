//! Data models for the application.

mod page;
mod user;

#[cfg(feature = "server")]
pub use page::{Page, PageLink};
pub use page::{PageInfo, PageLinkInfo, SharedPage};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
