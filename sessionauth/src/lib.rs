//--------------------------------------------------------------------------------------------------

pub mod codec;
#[cfg(feature = "axum-extract")]
pub mod cookie;
#[cfg(feature = "axum-extract")]
pub mod extract;
pub mod internal;
mod role;
mod types;

pub use codec::{Rejected, SigningKey, TokenString};
pub use internal::claims::ClaimSet;
pub use role::Role;
pub use types::*;

//--------------------------------------------------------------------------------------------------
