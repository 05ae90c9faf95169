//! Upload form: file picker, target role input, submit button.
//!
//! Always rendered. Reads the submission state from context; the page owns
//! the handlers because it also owns the browser file handle.

#[cfg(test)]
#[path = "upload_form_test.rs"]
mod upload_form_test;

use leptos::prelude::*;

use crate::state::submission::SubmissionState;
use crate::util::file::{PDF_ACCEPT, selection_label};

fn submit_label(loading: bool) -> &'static str {
    if loading { "Analyzing..." } else { "Analyze Resume" }
}

#[component]
pub fn UploadForm(on_submit: Callback<leptos::ev::SubmitEvent>, on_file_change: Callback<leptos::ev::Event>) -> impl IntoView {
    let state = expect_context::<RwSignal<SubmissionState>>();
    let loading = move || state.with(|s| s.loading);

    view! {
        <form class="upload-form" on:submit=move |ev| on_submit.run(ev)>
            <label class="upload-form__field">
                <span class="upload-form__label">"Resume (PDF)"</span>
                <input
                    class="upload-form__file"
                    type="file"
                    accept=PDF_ACCEPT
                    on:change=move |ev| on_file_change.run(ev)
                />
                <span class="upload-form__selection">
                    {move || state.with(|s| selection_label(s.file.as_ref()))}
                </span>
            </label>
            <label class="upload-form__field">
                <span class="upload-form__label">"Target role"</span>
                <input
                    class="upload-form__role"
                    type="text"
                    prop:value=move || state.with(|s| s.target_role.clone())
                    on:input=move |ev| state.update(|s| s.edit_role(event_target_value(&ev)))
                />
            </label>
            <button class="btn btn--primary upload-form__submit" type="submit" disabled=loading>
                {move || submit_label(loading())}
            </button>
            <Show when=loading>
                <div class="upload-form__busy" role="status">
                    <span class="spinner" aria-hidden="true"></span>
                    "Analyzing your resume..."
                </div>
            </Show>
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <p class="upload-form__error" role="alert">{message}</p> })
            }}
        </form>
    }
}
