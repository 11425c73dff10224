use super::*;
use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use crate::state::contact::{Banners, FieldKind, FieldStatus};

/// Point-in-time view of the form taken when a sleep starts.
#[derive(Clone, Debug)]
struct Snapshot {
    at_ms: u128,
    banners: Banners,
    values_empty: bool,
}

/// Timer that advances a virtual clock instantly and records the form state
/// each time a sleep begins.
#[derive(Clone)]
struct VirtualTimer {
    now_ms: Rc<Cell<u128>>,
    form: Rc<RefCell<ContactFormState>>,
    snapshots: Rc<RefCell<Vec<Snapshot>>>,
}

impl VirtualTimer {
    fn new(form: Rc<RefCell<ContactFormState>>) -> Self {
        Self { now_ms: Rc::new(Cell::new(0)), form, snapshots: Rc::new(RefCell::new(Vec::new())) }
    }

    fn snapshots(&self) -> Vec<Snapshot> {
        self.snapshots.borrow().clone()
    }
}

impl Timer for VirtualTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let form = self.form.borrow();
        let values_empty = FieldKind::ALL.iter().all(|kind| form.field(*kind).value.is_empty());
        self.snapshots.borrow_mut().push(Snapshot {
            at_ms: self.now_ms.get(),
            banners: form.banners.clone(),
            values_empty,
        });
        self.now_ms.set(self.now_ms.get() + duration.as_millis());
        std::future::ready(())
    }
}

struct FixedSubmitter(Result<ContactResponse, SubmitError>);

impl Submitter for FixedSubmitter {
    async fn submit(&self, _request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
        self.0.clone()
    }
}

fn filled_form() -> Rc<RefCell<ContactFormState>> {
    let mut form = ContactFormState::default();
    form.set_value(FieldKind::Name, "Ada Lovelace".to_owned());
    form.set_value(FieldKind::Email, "ada@example.com".to_owned());
    form.set_value(FieldKind::Subject, "Engines".to_owned());
    form.set_value(FieldKind::Message, "Let's talk.".to_owned());
    Rc::new(RefCell::new(form))
}

// =============================================================
// End-to-end simulated submission
// =============================================================

#[test]
fn simulated_submission_runs_loading_success_hide_sequence() {
    let form = filled_form();
    let timer = VirtualTimer::new(form.clone());
    let submitter = SimulatedSubmitter::new(timer.clone(), Duration::from_millis(2000));

    let request = form.borrow_mut().handle_submit().expect("valid form submits");
    assert!(form.borrow().banners.loading);

    block_on(run_submission(&*form, &submitter, &timer, request, Duration::from_millis(5000)));

    let snapshots = timer.snapshots();
    assert_eq!(snapshots.len(), 2);

    assert_eq!(snapshots[0].at_ms, 0);
    assert!(snapshots[0].banners.loading);
    assert!(!snapshots[0].banners.sent);
    assert!(!snapshots[0].values_empty);

    assert_eq!(snapshots[1].at_ms, 2000);
    assert!(!snapshots[1].banners.loading);
    assert!(snapshots[1].banners.sent);
    assert!(snapshots[1].values_empty);

    assert_eq!(timer.now_ms.get(), 7000);
    let form = form.borrow();
    assert_eq!(form.banners, Banners::default());
    assert!(!form.in_flight);
    assert!(FieldKind::ALL.iter().all(|kind| form.field(*kind).status == FieldStatus::Untouched));
}

#[test]
fn run_submission_shows_and_hides_rejection_message() {
    let form = filled_form();
    let timer = VirtualTimer::new(form.clone());
    let submitter = FixedSubmitter(Ok(ContactResponse { success: false, message: Some("Inbox full".to_owned()) }));

    let request = form.borrow_mut().handle_submit().expect("valid form submits");
    block_on(run_submission(&*form, &submitter, &timer, request, Duration::from_millis(5000)));

    let snapshots = timer.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].banners.error.as_deref(), Some("Inbox full"));
    assert!(!snapshots[0].banners.loading);
    assert!(!snapshots[0].values_empty, "failed submission keeps field values");
    assert_eq!(form.borrow().banners.error, None);
}

#[test]
fn run_submission_transport_failure_uses_generic_message() {
    let form = filled_form();
    let timer = VirtualTimer::new(form.clone());
    let submitter = FixedSubmitter(Err(SubmitError::Transport("offline".to_owned())));

    let request = form.borrow_mut().handle_submit().expect("valid form submits");
    block_on(run_submission(&*form, &submitter, &timer, request, Duration::from_millis(5000)));

    let snapshots = timer.snapshots();
    assert_eq!(snapshots[0].banners.error.as_deref(), Some("An error occurred. Please try again."));
}

// =============================================================
// show_error
// =============================================================

#[test]
fn show_error_hides_after_delay() {
    let form = Rc::new(RefCell::new(ContactFormState::default()));
    let timer = VirtualTimer::new(form.clone());

    block_on(show_error(&*form, &timer, "Something broke".to_owned(), Duration::from_millis(5000)));

    let snapshots = timer.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].banners.error.as_deref(), Some("Something broke"));
    assert_eq!(timer.now_ms.get(), 5000);
    assert_eq!(form.borrow().banners.error, None);
}

// =============================================================
// ContactSubmitter
// =============================================================

#[test]
fn contact_submitter_defaults_to_simulation() {
    let submitter = ContactSubmitter::from_config(&SiteConfig::default());
    assert!(matches!(submitter, ContactSubmitter::Simulated(_)));
}

#[test]
fn contact_submitter_uses_http_when_endpoint_configured() {
    let config = SiteConfig { contact_endpoint: Some("/api/contact".to_owned()), ..SiteConfig::default() };
    match ContactSubmitter::from_config(&config) {
        ContactSubmitter::Http(http) => assert_eq!(http.endpoint(), "/api/contact"),
        ContactSubmitter::Simulated(_) => panic!("expected http submitter"),
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn simulated_contact_submitter_succeeds() {
    let submitter = ContactSubmitter::from_config(&SiteConfig::default());
    let result = block_on(submitter.submit(&ContactRequest::default()));
    assert_eq!(result, Ok(ContactResponse::accepted()));
}
