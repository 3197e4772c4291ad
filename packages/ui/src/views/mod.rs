mod account;
pub use account::AccountView;

mod share;
pub use share::SharePageView;
