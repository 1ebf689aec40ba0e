pub mod candidate;
pub mod classifier;
pub mod client;
pub mod form;
pub mod request;
pub mod validator;

pub use crate::domain::model::{Credentials, RegistrationDraft, SubmissionResult};
pub use crate::domain::ports::{ClientConfig, NavigationEffect, TokenStore};
pub use crate::utils::error::Result;
