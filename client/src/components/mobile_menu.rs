//! Collapsible link panel shown below the navbar on narrow viewports.
//!
//! Mounted only while the menu is open so it never intercepts input when
//! closed.

use leptos::prelude::*;

use crate::state::page::ActivePage;

#[component]
pub fn MobileMenuPanel(#[prop(into)] page: Signal<ActivePage>, on_select: Callback<ActivePage>) -> impl IntoView {
    view! {
        <div class="mobile-menu">
            {ActivePage::NAVIGABLE
                .into_iter()
                .map(|target| {
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if page.get() == target {
                                    "mobile-menu__link mobile-menu__link--active"
                                } else {
                                    "mobile-menu__link"
                                }
                            }
                            on:click=move |_| on_select.run(target)
                        >
                            {target.nav_label()}
                        </button>
                    }
                })
                .collect_view()}
            <button
                type="button"
                class="mobile-menu__cta"
                on:click=move |_| on_select.run(ActivePage::Contact)
            >
                "Get In Touch"
            </button>
        </div>
    }
}
