pub mod fallback;
pub mod health;
pub mod login;
pub mod logout;
pub mod session;
