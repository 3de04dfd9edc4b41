//! Site footer with brand, navigation and office locations.

use leptos::prelude::*;

use crate::content::LOCATIONS;
use crate::state::page::ActivePage;
use crate::state::theme::LOGO_WHITE_SRC;

#[component]
pub fn Footer(on_select: Callback<ActivePage>) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <img class="footer__logo" src=LOGO_WHITE_SRC alt="Eikon Partners" />
                    <p class="footer__tagline">"Bridging Bold Tech to Asia."</p>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Navigation"</h4>
                    <ul class="footer__list">
                        {ActivePage::NAVIGABLE
                            .into_iter()
                            .map(|target| {
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="footer__link"
                                            on:click=move |_| on_select.run(target)
                                        >
                                            {target.footer_label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Locations"</h4>
                    <ul class="footer__list">
                        {LOCATIONS.into_iter().map(|city| view! { <li>{city}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
            <div class="footer__legal">
                <p>"© 2024 Eikon Partners Asia. All Rights Reserved."</p>
            </div>
        </footer>
    }
}
