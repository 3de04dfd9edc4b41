//! Root shell: owns page, menu and scroll state and composes the site.
//!
//! DESIGN
//! ======
//! `ShellState` and `ScrollObserver` are created here and never provided as
//! context. Children get read-only signals (`Memo`/`Signal`) and `Callback`
//! handles, so the shell stays the single writer.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config::SiteConfig;
use crate::net::inquiry::SimulatedInquiry;
use crate::pages::{contact::ContactPage, home::HomePage, team::TeamPage};
use crate::state::page::ActivePage;
use crate::state::scroll::ScrollObserver;
use crate::state::shell::ShellState;
use crate::util::viewport;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    let shell_state = RwSignal::new(ShellState::default());
    let scroll = RwSignal::new(ScrollObserver::default());

    let page = Memo::new(move |_| shell_state.with(ShellState::active_page));
    let menu_open = Memo::new(move |_| shell_state.with(|s| s.menu.is_open()));
    let theme = Memo::new(move |_| shell_state.with(|s| s.theme(scroll.get(), config.scroll_threshold)));

    let on_select = Callback::new(move |target: ActivePage| shell_state.update(|s| s.select_page(target)));
    let on_toggle_menu = Callback::new(move |()| shell_state.update(ShellState::toggle_menu));

    // Scroll subscription lives exactly as long as the shell.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = viewport::scroll_offset();
            scroll.maybe_update(|s| s.record(offset));
        });
        on_cleanup(move || handle.remove());
    }

    // Effects run after the DOM update, so the new page is already composed
    // when the viewport jumps back to the top.
    Effect::new(move |seen: Option<u64>| {
        let mut observed = scroll.get_untracked();
        let settle = shell_state.with(|s| s.settle_scroll(seen, &mut observed));
        if settle.jump {
            viewport::scroll_to_origin();
            scroll.maybe_update(|s| s.record(observed.offset()));
        }
        settle.transitions
    });

    let submitter = SimulatedInquiry::new(config.inquiry_delay);

    view! {
        <Stylesheet id="leptos" href="/pkg/eikon-site.css"/>
        <Title text="Eikon Partners Asia"/>

        <div class="site">
            <Navbar page=page theme=theme menu_open=menu_open on_select=on_select on_toggle_menu=on_toggle_menu />
            <main>
                {move || match page.get() {
                    ActivePage::Home => view! { <HomePage on_select=on_select /> }.into_any(),
                    ActivePage::Team => view! { <TeamPage /> }.into_any(),
                    ActivePage::Contact => view! { <ContactPage submitter=submitter /> }.into_any(),
                }}
            </main>
            <Footer on_select=on_select />
        </div>
    }
}
