//! Missing keywords rendered as chips.

use feedback::{Section, SectionView};
use leptos::prelude::*;

#[component]
pub fn KeywordChips(section: SectionView) -> impl IntoView {
    let body = match section.body {
        Section::Items(keywords) => view! {
            <div class="keyword-chips__list">
                {keywords
                    .into_iter()
                    .map(|keyword| view! { <span class="chip">{keyword}</span> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Section::Empty(message) => view! { <p class="keyword-chips__empty">{message}</p> }.into_any(),
    };

    view! {
        <section class="keyword-chips">
            <h3 class="keyword-chips__title">{section.title}</h3>
            {body}
        </section>
    }
}
