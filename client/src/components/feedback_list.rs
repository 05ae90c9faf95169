//! Titled bulleted list with an empty-state fallback.

use feedback::{Section, SectionView};
use leptos::prelude::*;

#[component]
pub fn FeedbackList(section: SectionView) -> impl IntoView {
    let body = match section.body {
        Section::Items(items) => view! {
            <ul class="feedback-list__items">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        Section::Empty(message) => view! { <p class="feedback-list__empty">{message}</p> }.into_any(),
    };

    view! {
        <section class="feedback-list">
            <h3 class="feedback-list__title">{section.title}</h3>
            {body}
        </section>
    }
}
