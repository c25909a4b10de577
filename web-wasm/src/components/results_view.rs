//! Results view component

use gloo::{console, dialogs};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::pie_chart::PieChart;
use mars_common::AnalysisResult;

/// Screening summary screen: topic heading, good/bad pie, counts,
/// confidence, and the archive download. With no result to show (the
/// upload never completed) only the fallback message renders.
#[component]
pub fn ResultsView<F>(result: Signal<Option<AnalysisResult>>, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let current = move || result.get().unwrap_or_default();

    let on_download = move |_| {
        spawn_local(async {
            if let Err(err) = api::download_archive().await {
                console::error!(format!("Download failed: {err}"));
                dialogs::alert("Download failed. Please try again.");
            }
        });
    };

    view! {
        <Show
            when=move || result.get().is_some()
            fallback=|| view! {
                <div class="error-message">
                    "No analysis results found. Please upload PDFs first."
                </div>
            }
        >
            <div class="results-container">
                <h1>"Topic: " {move || current().topic}</h1>
                {move || {
                    let r = current();
                    view! { <PieChart good=r.good_count bad=r.bad_count /> }
                }}
                <div class="summary-section">
                    <div class="counts">
                        <p>"Good PDFs: " <strong>{move || current().good_count}</strong></p>
                        <p>"Bad PDFs: " <strong>{move || current().bad_count}</strong></p>
                        <p>"Total PDFs: " <strong>{move || current().pdf_count}</strong></p>
                        <p>
                            "Confidence: "
                            <strong>{move || format!("{}%", current().confidence_percent())}</strong>
                        </p>
                    </div>
                    <button class="download-button" on:click=on_download>
                        "Download ZIP file of PDFs"
                    </button>
                    <button
                        class="reset-button"
                        on:click={
                            let on_reset = on_reset.clone();
                            move |_| on_reset(())
                        }
                    >
                        "Screen another batch"
                    </button>
                </div>
            </div>
        </Show>
    }
}
