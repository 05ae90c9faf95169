//! Resume analysis page: the Submission View.
//!
//! Owns the browser `File` handle for the current selection and the submit
//! flow. Everything else (validation, loading flag, result, error) is held in
//! the `SubmissionState` context and rendered by components.

use leptos::prelude::*;

use crate::components::results_panel::ResultsPanel;
use crate::components::upload_form::UploadForm;
use crate::state::submission::SubmissionState;

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let state = expect_context::<RwSignal<SubmissionState>>();

    #[cfg(feature = "hydrate")]
    let file_handle = StoredValue::new_local(None::<web_sys::File>);

    let on_file_change = Callback::new(move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let picked = crate::util::file::file_from_event(&ev);
            let described = picked.as_ref().map(crate::util::file::describe);
            file_handle.set_value(picked);
            state.update(|s| s.select_file(described));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    });

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(pending)) = state.try_update(SubmissionState::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_handle.get_value() else {
                state.update(|s| s.finish_submit(Err("selected file is no longer available".to_owned())));
                return;
            };
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::analyze_resume(&file, &pending).await;
                if let Err(e) = &outcome {
                    log::warn!("resume analysis failed: {e}");
                }
                state.update(|s| s.finish_submit(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = pending;
    });

    view! {
        <main class="analyze-page">
            <header class="analyze-page__header">
                <h1>"CV Lens"</h1>
                <p class="analyze-page__subtitle">
                    "Upload your resume and a target role to get tailored feedback."
                </p>
            </header>
            <UploadForm on_submit on_file_change/>
            {move || state.with(SubmissionState::report).map(|report| view! { <ResultsPanel report/> })}
        </main>
    }
}
