//! Contact page: office details plus the inquiry form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `ContactForm` state machine for as long as the page is mounted.
//! Delivery goes through an injected `InquirySubmitter`; the shell passes the
//! simulated one.
//!
//! The form is gone once the user navigates away, so a delivery still in
//! flight at that point must not write back. An `on_cleanup` liveness flag
//! (plus `try_update` on the disposed signal) drops the late outcome.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, HEADQUARTERS};
use crate::net::inquiry::InquirySubmitter;
use crate::state::contact::{ContactField, ContactForm, SubmissionStatus};

#[component]
pub fn ContactPage<S>(submitter: S) -> impl IntoView
where
    S: InquirySubmitter + Clone + Send + Sync + 'static,
{
    let form = RwSignal::new(ContactForm::default());
    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    let submit = Callback::new(move |()| {
        let Some(ticket) = form.try_update(ContactForm::submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let submitter = submitter.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = submitter.submit_inquiry(ticket.fields().clone()).await;
                if !alive.load(Ordering::Relaxed) {
                    leptos::logging::log!("contact page unmounted; dropping inquiry #{}", ticket.attempt());
                    return;
                }
                if let Some(false) = form.try_update(|f| f.complete(&ticket, outcome)) {
                    leptos::logging::warn!("stale inquiry #{} ignored", ticket.attempt());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&submitter, &alive, ticket);
        }
    });

    let status = move || form.with(ContactForm::status);

    view! {
        <section class="page contact">
            <div class="contact__grid">
                <div class="contact__info">
                    <h2 class="eyebrow">"Contact Us"</h2>
                    <h3 class="block__title">"Let's Discuss Your Strategy"</h3>
                    <p class="block__body">
                        "If you're an early-stage startup in the area of cybersecurity, AI or blockchain, and you're ready to penetrate the Asian market, Eikon Partners is the partner for you."
                    </p>
                    <div class="contact__detail">
                        <h5>"Headquarters"</h5>
                        <p>
                            {HEADQUARTERS.into_iter().map(|line| view! { {line} <br /> }).collect_view()}
                        </p>
                    </div>
                    <div class="contact__detail">
                        <h5>"Email"</h5>
                        <p>{CONTACT_EMAIL}</p>
                    </div>
                </div>

                <div class="contact__panel">
                    <Show
                        when=move || status() == SubmissionStatus::Submitted
                        fallback=move || view! { <InquiryForm form=form on_submit=submit /> }
                    >
                        <div class="contact__success">
                            <h4>"Message Received"</h4>
                            <p>
                                "Thank you for reaching out. One of our partners will review your inquiry and respond within 24 hours."
                            </p>
                            <button
                                type="button"
                                class="link-button"
                                on:click=move |_| {
                                    form.update(|f| {
                                        f.reset();
                                    });
                                }
                            >
                                "Send another message"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InquiryForm(form: RwSignal<ContactForm>, on_submit: Callback<()>) -> impl IntoView {
    let disabled = move || form.with(ContactForm::inputs_disabled);
    let last_error = move || form.with(|f| f.last_error().map(str::to_owned));

    view! {
        <form
            class="inquiry"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            {ContactField::ALL
                .into_iter()
                .map(|field| view! { <FormField form=form field=field /> })
                .collect_view()}
            <Show when=move || last_error().is_some()>
                <p class="inquiry__error">{move || last_error().unwrap_or_default()}</p>
            </Show>
            <button type="submit" class="button button--primary button--block" disabled=disabled>
                <Show when=disabled>
                    <span class="spinner" aria-hidden="true"></span>
                </Show>
                {move || if disabled() { "Sending..." } else { "Send Inquiry" }}
            </button>
        </form>
    }
}

/// Labelled input bound to one `ContactField`. Inputs are disabled while a
/// submission is pending; `required` comes from the field metadata.
#[component]
fn FormField(form: RwSignal<ContactForm>, field: ContactField) -> impl IntoView {
    let id = format!("contact-{}", field.key());
    let value = move || form.with(|f| f.fields().get(field).to_owned());
    let disabled = move || form.with(ContactForm::inputs_disabled);
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        form.update(|f| f.update_field(field, next));
    };

    let control = if field.is_multiline() {
        view! {
            <textarea
                id=id.clone()
                class="inquiry__input"
                rows="4"
                required=field.is_required()
                disabled=disabled
                prop:value=value
                on:input=on_input
            ></textarea>
        }
            .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                class="inquiry__input"
                type=field.input_type()
                required=field.is_required()
                disabled=disabled
                prop:value=value
                on:input=on_input
            />
        }
            .into_any()
    };

    view! {
        <div class="inquiry__field">
            <label class="inquiry__label" for=id>
                {field.label()}
            </label>
            {control}
        </div>
    }
}
