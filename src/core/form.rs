use crate::core::client::SubmissionClient;
use crate::core::request;
use crate::core::validator::{self, FieldErrors};
use crate::domain::model::{Credentials, Destination, RegistrationDraft, Role, SubmissionResult};
use crate::domain::ports::{NavigationEffect, TokenStore};
use crate::utils::error::Result;
use secrecy::SecretString;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Submit-trigger state. Armed for the lifetime of the guard; a second arm
/// attempt inside that window fails, so at most one submission per form is in
/// flight.
#[derive(Default)]
pub struct TriggerControl {
    in_flight: AtomicBool,
}

impl TriggerControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// The returned guard re-enables the trigger when dropped, on every
    /// completion path.
    pub fn try_arm(&self) -> Option<TriggerGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then(|| TriggerGuard { control: self })
    }

    pub fn is_armed(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

pub struct TriggerGuard<'a> {
    control: &'a TriggerControl,
}

impl Drop for TriggerGuard<'_> {
    fn drop(&mut self) {
        self.control.in_flight.store(false, Ordering::Release);
    }
}

/// Teardown guard for a screen. Retiring the gate bumps the generation;
/// completions holding a ticket from an earlier generation are dropped
/// without side effects.
#[derive(Clone, Default)]
pub struct ScreenGate {
    generation: Arc<AtomicU64>,
}

impl ScreenGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> GateTicket {
        GateTicket {
            gate: self.clone(),
            generation: self.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidates every outstanding ticket.
    pub fn retire(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

pub struct GateTicket {
    gate: ScreenGate,
    generation: u64,
}

impl GateTicket {
    pub fn is_live(&self) -> bool {
        self.gate.generation.load(Ordering::Acquire) == self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission on this form is still in flight; nothing was sent.
    Blocked,
    /// Field validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The screen was retired while the request was in flight; the response
    /// was dropped without side effects.
    Abandoned,
    Completed(SubmissionResult),
}

/// Role-selection screen: an unknown label keeps the user in place.
pub fn role_destination(label: &str) -> Option<Destination> {
    Role::from_label(label).map(|role| role.home())
}

pub struct LoginForm<S: TokenStore, N: NavigationEffect> {
    client: SubmissionClient,
    token_store: S,
    navigator: N,
    trigger: TriggerControl,
    gate: ScreenGate,
}

impl<S: TokenStore, N: NavigationEffect> LoginForm<S, N> {
    pub fn new(client: SubmissionClient, token_store: S, navigator: N) -> Self {
        Self {
            client,
            token_store,
            navigator,
            trigger: TriggerControl::new(),
            gate: ScreenGate::new(),
        }
    }

    /// Shared handle for the host to retire on screen teardown.
    pub fn gate(&self) -> ScreenGate {
        self.gate.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.trigger.is_armed()
    }

    /// Validates, dispatches once, classifies, and on success persists the
    /// token and emits the role-selection destination. `Err` is reserved for
    /// infrastructure failures such as the token store.
    pub async fn submit(&self, identifier: &str, password: &str) -> Result<SubmitOutcome> {
        let Some(_guard) = self.trigger.try_arm() else {
            tracing::debug!("Submission already in flight, trigger ignored");
            return Ok(SubmitOutcome::Blocked);
        };

        let errors = validator::validate_login(identifier, password);
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Invalid(errors));
        }

        let credentials = Credentials::new(identifier.trim(), password.trim());
        let payload = request::login_payload(&credentials);

        let ticket = self.gate.ticket();
        let result = self.client.login(&payload).await;

        if !ticket.is_live() {
            tracing::debug!("Screen retired while request was in flight, result dropped");
            return Ok(SubmitOutcome::Abandoned);
        }

        if let SubmissionResult::Success {
            token: Some(token), ..
        } = &result
        {
            self.token_store.save_token(token).await?;
            tracing::info!("Login succeeded, token persisted");
            self.navigator.navigate(Destination::RoleSelection);
        }

        Ok(SubmitOutcome::Completed(result))
    }
}

/// Multi-screen registration flow. Owns the draft; the name screen fills it,
/// the email/phone screens complete and submit it.
pub struct SignupFlow<N: NavigationEffect> {
    client: SubmissionClient,
    navigator: N,
    draft: RegistrationDraft,
    trigger: TriggerControl,
    gate: ScreenGate,
}

impl<N: NavigationEffect> SignupFlow<N> {
    pub fn new(client: SubmissionClient, navigator: N) -> Self {
        Self {
            client,
            navigator,
            draft: RegistrationDraft::default(),
            trigger: TriggerControl::new(),
            gate: ScreenGate::new(),
        }
    }

    pub fn gate(&self) -> ScreenGate {
        self.gate.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.trigger.is_armed()
    }

    pub fn set_name(&mut self, first_name: &str, last_name: &str) {
        self.draft.first_name = first_name.trim().to_string();
        self.draft.last_name = last_name.trim().to_string();
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub async fn submit_email(&mut self, email: &str, password: &str) -> Result<SubmitOutcome> {
        let Some(_guard) = self.trigger.try_arm() else {
            return Ok(SubmitOutcome::Blocked);
        };

        let errors = validator::validate_email_signup(email, password);
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Invalid(errors));
        }

        self.draft.identifier = email.trim().to_string();
        self.draft.password = SecretString::from(password.trim().to_string());

        let payload = request::register_email_payload(&self.draft);
        let ticket = self.gate.ticket();
        let result = self.client.register_email(&payload).await;

        if !ticket.is_live() {
            return Ok(SubmitOutcome::Abandoned);
        }

        if result.is_success() {
            tracing::info!("Registration accepted, moving to OTP verification");
            self.navigator.navigate(Destination::OtpVerification);
        }
        Ok(SubmitOutcome::Completed(result))
    }

    pub async fn submit_phone(&mut self, phone: &str, password: &str) -> Result<SubmitOutcome> {
        let Some(_guard) = self.trigger.try_arm() else {
            return Ok(SubmitOutcome::Blocked);
        };

        let errors = validator::validate_phone_signup(phone, password);
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Invalid(errors));
        }

        // The draft keeps the normalized form so later screens see what the
        // server saw.
        self.draft.identifier = request::normalize_identifier(phone);
        self.draft.password = SecretString::from(password.trim().to_string());

        let payload = request::register_phone_payload(&self.draft);
        let ticket = self.gate.ticket();
        let result = self.client.register_phone(&payload).await;

        if !ticket.is_live() {
            return Ok(SubmitOutcome::Abandoned);
        }

        if result.is_success() {
            tracing::info!("Registration accepted, moving to OTP verification");
            self.navigator.navigate(Destination::OtpVerification);
        }
        Ok(SubmitOutcome::Completed(result))
    }

    /// Flow exit: outstanding tickets are invalidated and the draft is
    /// cleared so nothing leaks into the next registration.
    pub fn finish(&mut self) {
        self.gate.retire();
        self.draft.clear();
    }
}
