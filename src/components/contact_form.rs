//! Contact form with inline validation and submission banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ContactFormState` from context. Blur validates one field, submit
//! validates all four and, when they pass, spawns the submission sequence
//! from `net::submission`.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::contact::{ContactFormState, FieldKind};
use crate::util::visibility::Visibility;

const SENT_MESSAGE: &str = "Your message has been sent. Thank you!";

/// Contact form bound to the shared `ContactFormState`.
#[component]
pub fn ContactForm() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();
    let config = expect_context::<SiteConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(ContactFormState::handle_submit).flatten() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            use crate::net::submission::{BrowserTimer, ContactSubmitter, run_submission};

            let submitter = ContactSubmitter::from_config(&config);
            let hide_after = config.banner_hide;
            leptos::task::spawn_local(async move {
                run_submission(&form, &submitter, &BrowserTimer, request, hide_after).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &config);
        }
    };

    let banner_style = move |shown: bool| format!("display: {}", Visibility::from_shown(shown).display());

    view! {
        <form id="contact-form" class="php-email-form" novalidate=true on:submit=on_submit>
            <div class="row">
                <div class="col-md-6">
                    <FormField kind=FieldKind::Name/>
                </div>
                <div class="col-md-6">
                    <FormField kind=FieldKind::Email/>
                </div>
            </div>
            <FormField kind=FieldKind::Subject/>
            <FormField kind=FieldKind::Message/>
            <div class="my-3">
                <div class="loading" style=move || banner_style(form.with(|f| f.banners.loading))>
                    "Loading"
                </div>
                <div class="error-message" style=move || banner_style(form.with(|f| f.banners.error.is_some()))>
                    {move || form.with(|f| f.banners.error.clone().unwrap_or_default())}
                </div>
                <div class="sent-message" style=move || banner_style(form.with(|f| f.banners.sent))>
                    {SENT_MESSAGE}
                </div>
            </div>
            <div class="text-center">
                <button type="submit" disabled=move || form.with(|f| f.in_flight)>
                    "Send Message"
                </button>
            </div>
        </form>
    }
}

/// One labelled input with its inline error.
#[component]
fn FormField(kind: FieldKind) -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();

    let value = move || form.with(|f| f.field(kind).value.clone());
    let input_class = move || form.with(|f| f.field(kind).status.input_class());
    let label_active = move || form.with(|f| f.field(kind).label_active);
    let error = move || form.with(|f| f.field(kind).status.error_message());

    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        form.update(|f| f.set_value(kind, next));
    };
    let on_focus = move |_: leptos::ev::FocusEvent| form.update(|f| f.focus(kind));
    let on_blur = move |_: leptos::ev::FocusEvent| {
        form.update(|f| {
            f.blur(kind);
        });
    };

    let control = if kind == FieldKind::Message {
        view! {
            <textarea
                id=kind.id()
                name=kind.id()
                rows="5"
                class=input_class
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        let input_type = if kind == FieldKind::Email { "email" } else { "text" };
        view! {
            <input
                type=input_type
                id=kind.id()
                name=kind.id()
                class=input_class
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=kind.id() class:active=label_active>{kind.label()}</label>
            {control}
            {move || error().map(|message| view! { <div class="invalid-feedback">{message}</div> })}
        </div>
    }
}
