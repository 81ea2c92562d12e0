//! Auth domain module.
//!
//! This module defines the phone → code → apartment signup state machine types.

pub mod state_machine;

pub use state_machine::{
    ApartmentForm, AuthAction, AuthEvent, AuthState, AuthStateMachine, AuthStep, CODE_LEN,
    MIN_PHONE_LEN,
};
