//! Contact submission pipeline: outcome source, timers, and the
//! loading -> success/error -> auto-hide sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ContactForm` calls `ContactFormState::handle_submit`, then spawns
//! [`run_submission`] with the configured [`ContactSubmitter`]. The simulated
//! submitter waits out a fixed delay and always succeeds; the HTTP submitter
//! posts to the contact endpoint. Both feed the same UI sequence.
//!
//! DESIGN
//! ======
//! Timers and state access sit behind [`Timer`] and [`FormStore`] so the
//! whole sequence can run natively against a virtual clock.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use leptos::prelude::{RwSignal, Update};

use super::api::HttpSubmitter;
use super::error::SubmitError;
use super::types::{ContactRequest, ContactResponse};
use crate::config::SiteConfig;
use crate::state::contact::{BannerToken, ContactFormState};

/// Source of a submission outcome.
pub trait Submitter {
    fn submit(&self, request: &ContactRequest) -> impl Future<Output = Result<ContactResponse, SubmitError>>;
}

/// Deferred wake-up on the UI thread.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Mutable access to the contact form state.
pub trait FormStore {
    /// Apply `f` to the state; `None` if the state is gone.
    fn modify<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R>;
}

impl FormStore for RwSignal<ContactFormState> {
    fn modify<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormStore for RefCell<ContactFormState> {
    fn modify<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Browser timer backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[cfg(feature = "csr")]
impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}

#[cfg(not(feature = "csr"))]
impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let _ = duration;
        std::future::ready(())
    }
}

/// Stand-in submitter: waits `delay`, then reports success.
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter<T> {
    timer: T,
    delay: Duration,
}

impl<T: Timer> SimulatedSubmitter<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

impl<T: Timer> Submitter for SimulatedSubmitter<T> {
    async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
        log::debug!("simulating contact submission for {}", request.email);
        self.timer.sleep(self.delay).await;
        Ok(ContactResponse::accepted())
    }
}

/// Submitter selected from [`SiteConfig`].
#[derive(Clone, Debug)]
pub enum ContactSubmitter {
    Simulated(SimulatedSubmitter<BrowserTimer>),
    Http(HttpSubmitter),
}

impl ContactSubmitter {
    /// HTTP when a contact endpoint is configured, simulated otherwise.
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.contact_endpoint {
            Some(endpoint) => Self::Http(HttpSubmitter::new(endpoint.clone())),
            None => Self::Simulated(SimulatedSubmitter::new(BrowserTimer, config.submit_delay)),
        }
    }
}

impl Submitter for ContactSubmitter {
    async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
        match self {
            Self::Simulated(submitter) => submitter.submit(request).await,
            Self::Http(submitter) => submitter.submit(request).await,
        }
    }
}

/// Drive one accepted submission to completion.
///
/// Expects the form to already be in the loading state (see
/// `ContactFormState::handle_submit`). Shows the outcome banner once the
/// submitter resolves, then hides it after `hide_after`.
pub async fn run_submission<S, U, T>(store: &S, submitter: &U, timer: &T, request: ContactRequest, hide_after: Duration)
where
    S: FormStore,
    U: Submitter,
    T: Timer,
{
    let outcome = submitter.submit(&request).await.and_then(ContactResponse::into_result);
    match &outcome {
        Ok(_) => log::info!("contact message sent"),
        Err(err) => log::warn!("contact message not sent: {err}"),
    }
    let Some(token) = store.modify(|form| form.finish_submit(outcome)) else {
        return;
    };
    hide_banner_after(store, timer, token, hide_after).await;
}

/// Show `message` in the error banner and hide it after `hide_after`.
pub async fn show_error<S: FormStore, T: Timer>(store: &S, timer: &T, message: String, hide_after: Duration) {
    let Some(token) = store.modify(|form| form.show_error(message)) else {
        return;
    };
    hide_banner_after(store, timer, token, hide_after).await;
}

async fn hide_banner_after<S: FormStore, T: Timer>(store: &S, timer: &T, token: BannerToken, hide_after: Duration) {
    timer.sleep(hide_after).await;
    if store.modify(|form| form.hide_banner(token)) == Some(false) {
        log::debug!("banner hide skipped: superseded by a newer banner");
    }
}
