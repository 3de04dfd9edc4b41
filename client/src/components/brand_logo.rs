//! Theme-aware logo with a wordmark fallback.
//!
//! ERROR HANDLING
//! ==============
//! A failed `<img>` load flips a local flag once; from then on this mount
//! renders the text wordmark for both chrome modes. The server-rendered image
//! can fail before hydration attaches `on:error`, so a post-mount effect also
//! inspects the element and catches failures that already happened.

use leptos::html::Img;
use leptos::prelude::*;

use crate::state::theme::{BrandMark, ThemeMode};

fn mark_failed(image_failed: RwSignal<bool>) {
    if !image_failed.get_untracked() {
        leptos::logging::warn!("logo failed to load; using wordmark");
        image_failed.set(true);
    }
}

#[component]
pub fn BrandLogo(#[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let image_failed = RwSignal::new(false);
    let logo_ref = NodeRef::<Img>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(img) = logo_ref.get() {
            if crate::state::theme::image_settled_broken(img.complete(), img.natural_width()) {
                mark_failed(image_failed);
            }
        }
    });

    view! {
        {move || {
            let mode = theme.get();
            match mode.brand_mark(image_failed.get()) {
                BrandMark::Image { src } => {
                    view! {
                        <img
                            class="brand__logo"
                            node_ref=logo_ref
                            src=src
                            alt="Eikon Partners Asia"
                            on:error=move |_| mark_failed(image_failed)
                        />
                    }
                        .into_any()
                }
                BrandMark::Wordmark => {
                    view! {
                        <span class=format!("wordmark wordmark--{}", mode.css_modifier())>
                            <span class="wordmark__badge" aria-hidden="true">"◎"</span>
                            <span class="wordmark__text">
                                <span class="wordmark__name">"EIKON"</span>
                                <span class="wordmark__tag">"Partners"</span>
                            </span>
                        </span>
                    }
                        .into_any()
                }
            }
        }}
    }
}
