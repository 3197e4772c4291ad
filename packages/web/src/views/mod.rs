mod account;
pub use account::Account;

mod share;
pub use share::Share;
