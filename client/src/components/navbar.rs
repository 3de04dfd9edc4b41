//! Fixed navigation bar: brand, desktop links, CTA and mobile menu toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Receives the active page, derived theme and menu flag from the shell.
//! Every link reports through `on_select`, which also closes the mobile menu.

use leptos::prelude::*;

use crate::components::brand_logo::BrandLogo;
use crate::components::mobile_menu::MobileMenuPanel;
use crate::state::page::ActivePage;
use crate::state::theme::ThemeMode;

#[component]
pub fn Navbar(
    #[prop(into)] page: Signal<ActivePage>,
    #[prop(into)] theme: Signal<ThemeMode>,
    #[prop(into)] menu_open: Signal<bool>,
    on_select: Callback<ActivePage>,
    on_toggle_menu: Callback<()>,
) -> impl IntoView {
    let links = ActivePage::NAVIGABLE
        .into_iter()
        .map(|target| {
            view! {
                <button
                    type="button"
                    class=move || theme.get().nav_link_class(page.get() == target)
                    on:click=move |_| on_select.run(target)
                >
                    {target.nav_label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || theme.get().navbar_class()>
            <div class="navbar__inner">
                <button type="button" class="brand" on:click=move |_| on_select.run(ActivePage::Home)>
                    <BrandLogo theme=theme />
                </button>

                <div class="navbar__links">
                    {links}
                    <button
                        type="button"
                        class=move || format!("navbar__cta navbar__cta--{}", theme.get().css_modifier())
                        on:click=move |_| on_select.run(ActivePage::Contact)
                    >
                        "Get in Touch"
                    </button>
                </div>

                // Icon color tracks the bar theme, not the panel state.
                <button
                    type="button"
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    style:color=move || theme.get().menu_icon_color()
                    on:click=move |_| on_toggle_menu.run(())
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <MobileMenuPanel page=page on_select=on_select />
            </Show>
        </nav>
    }
}
