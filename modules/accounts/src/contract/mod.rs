pub mod client;
pub mod error;
pub mod model;

pub use client::AccountsApi;
pub use error::{AccountsError, AuthRejection};
pub use model::{
    AccountKind, AccountResolution, Identity, OwnerSignupRequest, Session, SignupReceipt,
    SignupRequest,
};
