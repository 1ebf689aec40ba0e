pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::FileTokenStore, TomlConfig};

pub use core::candidate::CandidateClient;
pub use core::client::SubmissionClient;
pub use core::form::{LoginForm, ScreenGate, SignupFlow, SubmitOutcome, TriggerControl};
pub use domain::model::{
    Certificate, Credentials, Destination, NetworkErrorKind, RegistrationDraft, Role,
    SubmissionResult,
};
pub use domain::ports::{ClientConfig, NavigationEffect, TokenStore};
pub use utils::error::{ClientError, Result};
