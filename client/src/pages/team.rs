//! Partner gallery. Rendered when `ActivePage::Team` is active, but no link
//! currently points here.

use leptos::prelude::*;

use crate::content::team;

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <section class="page team">
            <div class="block__header">
                <h2 class="eyebrow">"Our Leadership"</h2>
                <h3 class="block__title">"Experience You Can Trust"</h3>
                <p class="block__body">
                    "A collective of veterans from tier-one investment banks, government defense sectors, and unicorn startups."
                </p>
            </div>
            <div class="card-grid">
                {team()
                    .into_iter()
                    .map(|member| {
                        view! {
                            <article class="member">
                                <div class="member__portrait">
                                    <img src=member.img alt=member.name loading="lazy" />
                                </div>
                                <div class="member__body">
                                    <span class="member__title">{member.title}</span>
                                    <h4 class="member__name">{member.name}</h4>
                                    <p class="member__bio">{member.bio}</p>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
