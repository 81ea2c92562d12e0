//! Auth step state machine.
//!
//! Defines a pure state transition function for the signup flow. Side
//! effects (notifications, completing the session) are returned as actions
//! and executed by the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::notification::{messages, Notification};
use crate::profile::{is_known_complex, ResidentStatus, UserProfile};
use crate::validation::ValidationError;

pub const MIN_PHONE_LEN: usize = 10;
pub const CODE_LEN: usize = 4;

/// Active step of the signup flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStep {
    #[default]
    Phone,
    Code,
    Apartment,
}

/// Fields entered on the apartment step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentForm {
    pub apartment: String,
    pub entrance: String,
    pub complex: String,
    pub status: ResidentStatus,
}

/// Flow state: the active step plus everything entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub step: AuthStep,
    pub phone: String,
    pub code: String,
    pub apartment: ApartmentForm,
    /// Last validation failure on the current step.
    pub error: Option<ValidationError>,
}

/// Events that drive the signup flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthEvent {
    SubmitPhone { phone: String },
    SubmitCode { code: String },
    /// "Change number": return from the code step to the phone step.
    ChangeNumber,
    SubmitApartment(ApartmentForm),
}

/// Side-effects produced by transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthAction {
    /// Show a transient toast.
    Notify(Notification),
    /// Persist the profile and enter the main app. The welcome toast follows
    /// only once the profile is stored.
    CompleteAuth { profile: UserProfile },
}

/// Pure auth state machine.
pub struct AuthStateMachine;

impl AuthStateMachine {
    pub fn transition(state: AuthState, event: AuthEvent) -> (AuthState, Vec<AuthAction>) {
        match (state.step, event) {
            (AuthStep::Phone, AuthEvent::SubmitPhone { phone }) => {
                let mut next = AuthState { phone, ..state };
                if next.phone.chars().count() < MIN_PHONE_LEN {
                    return reject(
                        next,
                        ValidationError::PhoneTooShort {
                            min_len: MIN_PHONE_LEN,
                        },
                    );
                }
                next.step = AuthStep::Code;
                next.error = None;
                (
                    next,
                    vec![AuthAction::Notify(Notification::success(messages::CODE_SENT))],
                )
            }
            (AuthStep::Code, AuthEvent::SubmitCode { code }) => {
                let mut next = AuthState { code, ..state };
                if next.code.chars().count() != CODE_LEN {
                    return reject(next, ValidationError::CodeLength { len: CODE_LEN });
                }
                next.step = AuthStep::Apartment;
                next.error = None;
                (next, Vec::new())
            }
            (AuthStep::Code, AuthEvent::ChangeNumber) => (
                AuthState {
                    step: AuthStep::Phone,
                    error: None,
                    ..state
                },
                Vec::new(),
            ),
            (AuthStep::Apartment, AuthEvent::SubmitApartment(form)) => {
                let next = AuthState {
                    apartment: form,
                    ..state
                };
                if let Err(err) = check_apartment(&next.apartment) {
                    return reject(next, err);
                }
                let profile = UserProfile {
                    phone: next.phone.clone(),
                    apartment: next.apartment.apartment.clone(),
                    entrance: next.apartment.entrance.clone(),
                    status: next.apartment.status,
                    complex: next.apartment.complex.clone(),
                };
                (
                    AuthState { error: None, ..next },
                    vec![AuthAction::CompleteAuth { profile }],
                )
            }
            (step, event) => {
                debug!(?step, ?event, "ignored auth transition");
                (state, Vec::new())
            }
        }
    }
}

fn reject(mut state: AuthState, err: ValidationError) -> (AuthState, Vec<AuthAction>) {
    let notification = Notification::from(&err);
    state.error = Some(err);
    (state, vec![AuthAction::Notify(notification)])
}

fn check_apartment(form: &ApartmentForm) -> Result<(), ValidationError> {
    let required = [&form.apartment, &form.entrance, &form.complex];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err(ValidationError::MissingApartmentFields);
    }
    if !is_known_complex(&form.complex) {
        return Err(ValidationError::UnknownComplex(form.complex.clone()));
    }
    Ok(())
}
