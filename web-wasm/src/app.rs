//! Main application component

use gloo::{console, dialogs};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::{
    header::Header, results_view::ResultsView, topic_input::TopicInput, upload_area::UploadArea,
};
use mars_common::AnalysisResult;

/// Where the screening workflow currently is. One submission may be in
/// flight at a time; `Processing` gates the intake surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Processing,
    Complete(AnalysisResult),
    Failed(String),
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let (phase, set_phase) = signal(Phase::default());
    let (topic_query, set_topic_query) = signal(String::new());
    let (selected_names, set_selected_names) = signal(Vec::<String>::new());

    let is_processing = move || matches!(phase.get(), Phase::Processing);

    // An accepted batch replaces the previous selection and goes straight
    // to the screening service.
    let on_batch_accepted = move |files: Vec<web_sys::File>| {
        if matches!(phase.get_untracked(), Phase::Processing) {
            return;
        }
        set_selected_names.set(files.iter().map(|f| f.name()).collect());
        set_phase.set(Phase::Processing);

        let topic = topic_query.get_untracked();
        spawn_local(async move {
            match api::submit_batch(&files, &topic).await {
                Ok(result) => set_phase.set(Phase::Complete(result)),
                Err(err) => {
                    console::error!(format!("Upload failed: {err}"));
                    dialogs::alert("Error processing PDFs. Please try again.");
                    set_phase.set(Phase::Failed(err.to_string()));
                }
            }
        });
    };

    let on_reset = move |_: ()| {
        set_selected_names.set(Vec::new());
        set_phase.set(Phase::Idle);
    };

    view! {
        <div class="main-container">
            <Show
                when=move || matches!(phase.get(), Phase::Complete(_))
                fallback=move || view! {
                    <div class="upload-card">
                        <Header />

                        <TopicInput query=topic_query set_query=set_topic_query />

                        <UploadArea
                            disabled=Signal::derive(is_processing)
                            selected_names=selected_names
                            on_batch=on_batch_accepted
                        />

                        <Show when=is_processing>
                            <div class="loading-spinner"></div>
                        </Show>

                        <Show when=move || matches!(phase.get(), Phase::Failed(_))>
                            <p class="upload-error">
                                {move || match phase.get() {
                                    Phase::Failed(message) => message,
                                    _ => String::new(),
                                }}
                            </p>
                        </Show>
                    </div>
                }
            >
                <ResultsView
                    result=Signal::derive(move || match phase.get() {
                        Phase::Complete(result) => Some(result),
                        _ => None,
                    })
                    on_reset=on_reset
                />
            </Show>
        </div>
    }
}
