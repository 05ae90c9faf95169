//! Overall score badge.

use leptos::prelude::*;

/// Clamped score with tier styling. Only rendered when the payload carried a number.
#[component]
pub fn ScorePanel(badge: feedback::ScoreBadge) -> impl IntoView {
    let class = format!("score-badge score-badge--{}", badge.tier.as_str());
    view! {
        <div class=class>
            <span class="score-badge__value">{badge.value}</span>
            <span class="score-badge__scale">"/100"</span>
        </div>
    }
}
