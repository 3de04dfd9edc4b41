//! Landing page: hero, "What We Do" and the expertise grid.

use leptos::prelude::*;

use crate::content::{HERO_IMAGE_SRC, expertise};
use crate::state::page::ActivePage;

#[component]
pub fn HomePage(on_select: Callback<ActivePage>) -> impl IntoView {
    view! {
        <Hero on_select=on_select />
        <WhatWeDo />
        <OurExpertise />
    }
}

#[component]
fn Hero(on_select: Callback<ActivePage>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__backdrop" style=format!("background-image: url('{HERO_IMAGE_SRC}')")>
                <div class="hero__shade"></div>
            </div>
            <div class="hero__content">
                <h1 class="hero__title">
                    "Bridging " <span class="hero__accent">"Bold Tech"</span> <br /> "to Asia"
                </h1>
                <p class="hero__lede">
                    "Eikon Partners is a bespoke consultancy that acts as the strategic nexus between high-growth early-stage startups and Asia's most prestigious institutions."
                </p>
                <div class="hero__actions">
                    <button
                        type="button"
                        class="button button--primary"
                        on:click=move |_| on_select.run(ActivePage::Contact)
                    >
                        "Start the Conversation"
                        <span class="button__arrow" aria-hidden="true">"→"</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn WhatWeDo() -> impl IntoView {
    view! {
        <section class="block block--white">
            <div class="block__split">
                <div>
                    <h2 class="eyebrow">"What We Do"</h2>
                    <h3 class="block__title">"The Power of " <br /> "Trusted Networks"</h3>
                </div>
                <p class="block__body">
                    "We don't just advise; We engineer Go-To-Market motion through our trusted connections in Asia. Eikon Partners help bridge breakthrough technologies in Cybersecurity, AI and Blockchain to Asia's largest Web2 and Web3 financial institutions and government agencies. Leverage networks built over 20 years of trust advisory and relationships."
                </p>
            </div>
        </section>
    }
}

#[component]
fn OurExpertise() -> impl IntoView {
    view! {
        <section class="block block--muted">
            <div class="block__header">
                <h2 class="eyebrow">"Our Expertise"</h2>
                <h3 class="block__title">"Core Capabilities"</h3>
            </div>
            <div class="card-grid">
                {expertise()
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="card">
                                <div class=format!("card__icon {}", item.icon)></div>
                                <h4 class="card__title">{item.title}</h4>
                                <p class="card__body">{item.desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
