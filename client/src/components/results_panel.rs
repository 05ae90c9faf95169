//! Results section for a returned analysis.
//!
//! DESIGN
//! ======
//! Every field is rendered independently from the `Report` view-model, so a
//! payload missing any part still renders the rest (absent score hides the
//! badge, empty lists show their empty-state message).

#[cfg(test)]
#[path = "results_panel_test.rs"]
mod results_panel_test;

use feedback::Report;
use leptos::prelude::*;

use crate::components::feedback_list::FeedbackList;
use crate::components::keyword_chips::KeywordChips;
use crate::components::score_panel::ScorePanel;

/// One-line context under the heading: role and upload time when known.
fn meta_line(report: &Report) -> Option<String> {
    match (report.target_role.as_deref(), report.uploaded_at.as_deref()) {
        (Some(role), Some(at)) => Some(format!("Target role: {role} · Uploaded {at}")),
        (Some(role), None) => Some(format!("Target role: {role}")),
        (None, Some(at)) => Some(format!("Uploaded {at}")),
        (None, None) => None,
    }
}

#[component]
pub fn ResultsPanel(report: Report) -> impl IntoView {
    let meta = meta_line(&report);
    let Report { blob_url, score, summary, strengths, weaknesses, missing_keywords, suggestions, raw, .. } = report;

    view! {
        <section class="results-panel">
            <header class="results-panel__header">
                <h2>"Analysis"</h2>
                {score.map(|badge| view! { <ScorePanel badge/> })}
            </header>
            {meta.map(|line| view! { <p class="results-panel__meta">{line}</p> })}
            {blob_url.map(|href| {
                view! {
                    <a class="results-panel__blob" href=href target="_blank" rel="noopener noreferrer">
                        "View uploaded file"
                    </a>
                }
            })}
            {summary.map(|text| view! { <p class="results-panel__summary">{text}</p> })}
            <div class="results-panel__grid">
                <FeedbackList section=strengths/>
                <FeedbackList section=weaknesses/>
            </div>
            <KeywordChips section=missing_keywords/>
            <FeedbackList section=suggestions/>
            {raw.map(|text| {
                view! {
                    <details class="results-panel__raw">
                        <summary>"Unstructured model output"</summary>
                        <pre>{text}</pre>
                    </details>
                }
            })}
        </section>
    }
}
