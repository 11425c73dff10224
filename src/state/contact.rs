//! Contact form state: field values, validation markers, label effects,
//! and the loading/success/error banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `ContactForm` component renders this state and forwards DOM events to
//! it. Submission is split in two: `handle_submit` validates and shows the
//! loading banner, `finish_submit` applies the outcome once the submitter
//! resolves. Banner auto-hide is driven by `net::submission`.
//!
//! DESIGN
//! ======
//! Each field carries at most one inline error by construction
//! (`FieldStatus::Invalid` holds a single message). Hide timers carry a
//! `BannerToken`; re-showing or resetting a banner invalidates its older
//! tokens so a stale timer never hides a fresh banner.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::error::SubmitError;
use crate::net::types::{ContactRequest, ContactResponse};
use crate::util::validation::{self, trim_input};

/// The four inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKind {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// DOM id of the input element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Message shown when the field is left blank.
    #[must_use]
    pub fn required_message(self) -> &'static str {
        match self {
            Self::Name => validation::NAME_REQUIRED,
            Self::Email => validation::EMAIL_REQUIRED,
            Self::Subject => validation::SUBJECT_REQUIRED,
            Self::Message => validation::MESSAGE_REQUIRED,
        }
    }
}

/// Validation marker for one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// No marker (never validated, or cleared after a successful send).
    #[default]
    Untouched,
    Valid,
    /// Invalid with its single inline error message.
    Invalid(&'static str),
}

impl FieldStatus {
    #[must_use]
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            Self::Invalid(message) => Some(message),
            Self::Untouched | Self::Valid => None,
        }
    }

    /// Full `class` attribute for the input element.
    #[must_use]
    pub fn input_class(self) -> &'static str {
        match self {
            Self::Untouched => "form-control",
            Self::Valid => "form-control is-valid",
            Self::Invalid(_) => "form-control is-invalid",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub status: FieldStatus,
    /// Floating-label `active` class.
    pub label_active: bool,
}

impl FieldState {
    /// Field pre-filled with `value`; the label starts active iff it is non-blank.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let label_active = !trim_input(&value).is_empty();
        Self { value, status: FieldStatus::Untouched, label_active }
    }
}

/// Banner targeted by a hide timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Sent,
    Error,
}

/// Handle for one scheduled banner hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerToken {
    pub banner: Banner,
    generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banners {
    pub loading: bool,
    pub sent: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: FieldState,
    pub email: FieldState,
    pub subject: FieldState,
    pub message: FieldState,
    pub banners: Banners,
    /// True between an accepted submit and its outcome.
    pub in_flight: bool,
    sent_generation: u64,
    error_generation: u64,
}

impl ContactFormState {
    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &FieldState {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Subject => &self.subject,
            FieldKind::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> &mut FieldState {
        match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::Subject => &mut self.subject,
            FieldKind::Message => &mut self.message,
        }
    }

    pub fn set_value(&mut self, kind: FieldKind, value: String) {
        self.field_mut(kind).value = value;
    }

    pub fn focus(&mut self, kind: FieldKind) {
        self.field_mut(kind).label_active = true;
    }

    /// Validate the field and drop its label if it was left blank.
    pub fn blur(&mut self, kind: FieldKind) -> bool {
        let valid = self.validate(kind);
        let field = self.field_mut(kind);
        if trim_input(&field.value).is_empty() {
            field.label_active = false;
        }
        valid
    }

    /// Run the rule for `kind` and update its marker.
    pub fn validate(&mut self, kind: FieldKind) -> bool {
        match kind {
            FieldKind::Email => self.validate_email(),
            other => self.validate_required(other, other.required_message()),
        }
    }

    pub fn validate_required(&mut self, kind: FieldKind, message: &'static str) -> bool {
        let field = self.field_mut(kind);
        let result = validation::validate_required(&field.value, message);
        apply_result(field, result)
    }

    pub fn validate_email(&mut self) -> bool {
        let result = validation::validate_email(&self.email.value);
        apply_result(&mut self.email, result)
    }

    /// Hide every banner and invalidate pending hide timers.
    pub fn reset_banners(&mut self) {
        self.banners = Banners::default();
        self.sent_generation += 1;
        self.error_generation += 1;
    }

    /// Validate every field and, if all pass, enter the loading state.
    ///
    /// All four validators always run so every invalid field gets its
    /// marker. Returns the request to send, or `None` when validation failed
    /// or a submission is already in flight.
    pub fn handle_submit(&mut self) -> Option<ContactRequest> {
        if self.in_flight {
            log::debug!("contact submit ignored: previous submission in flight");
            return None;
        }
        self.reset_banners();
        let results = FieldKind::ALL.map(|kind| self.validate(kind));
        if !results.iter().all(|valid| *valid) {
            return None;
        }
        self.banners.loading = true;
        self.in_flight = true;
        Some(self.request())
    }

    /// Payload built from the current raw field values.
    #[must_use]
    pub fn request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            subject: self.subject.value.clone(),
            message: self.message.value.clone(),
        }
    }

    /// Leave the loading state and show the outcome banner.
    ///
    /// On success every value is cleared and every marker removed. Returns
    /// the token for the banner's auto-hide.
    pub fn finish_submit(&mut self, outcome: Result<ContactResponse, SubmitError>) -> BannerToken {
        self.banners.loading = false;
        self.in_flight = false;
        match outcome {
            Ok(_) => {
                self.banners.sent = true;
                for kind in FieldKind::ALL {
                    let field = self.field_mut(kind);
                    field.value.clear();
                    field.status = FieldStatus::Untouched;
                }
                self.next_token(Banner::Sent)
            }
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                self.show_error(err.banner_message())
            }
        }
    }

    /// Show the error banner with `message`.
    pub fn show_error(&mut self, message: impl Into<String>) -> BannerToken {
        self.banners.error = Some(message.into());
        self.next_token(Banner::Error)
    }

    /// Hide the banner `token` refers to, unless a newer change superseded it.
    pub fn hide_banner(&mut self, token: BannerToken) -> bool {
        if token.generation != *self.generation_mut(token.banner) {
            return false;
        }
        match token.banner {
            Banner::Sent => self.banners.sent = false,
            Banner::Error => self.banners.error = None,
        }
        true
    }

    fn generation_mut(&mut self, banner: Banner) -> &mut u64 {
        match banner {
            Banner::Sent => &mut self.sent_generation,
            Banner::Error => &mut self.error_generation,
        }
    }

    fn next_token(&mut self, banner: Banner) -> BannerToken {
        let generation = self.generation_mut(banner);
        *generation += 1;
        BannerToken { banner, generation: *generation }
    }
}

fn apply_result(field: &mut FieldState, result: Result<(), &'static str>) -> bool {
    match result {
        Ok(()) => {
            field.status = FieldStatus::Valid;
            true
        }
        Err(message) => {
            field.status = FieldStatus::Invalid(message);
            false
        }
    }
}
