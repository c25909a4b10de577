//! Upload area component

use gloo::dialogs;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList};

use mars_common::intake::{validate_batch, CandidateFile, IntakeError, PDF_MIME};

/// User-facing message for a rejected batch, or `None` when the event
/// carried no files at all (nothing was offered, nothing to warn about).
fn rejection_message(err: &IntakeError) -> Option<String> {
    match err {
        IntakeError::Empty => None,
        IntakeError::NotPdf(_) => Some("Please upload only PDF files".to_string()),
        IntakeError::TooMany { limit, .. } => {
            Some(format!("You can upload at most {limit} PDFs at a time"))
        }
    }
}

fn collect_files(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn UploadArea<F>(
    disabled: Signal<bool>,
    selected_names: ReadSignal<Vec<String>>,
    on_batch: F,
) -> impl IntoView
where
    F: Fn(Vec<File>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    // validates the whole batch before anything leaves this component;
    // a rejected batch leaves the previous selection untouched
    let handle_files = {
        let on_batch = on_batch.clone();
        move |files: Vec<File>| {
            let candidates: Vec<CandidateFile> = files
                .iter()
                .map(|f| CandidateFile::new(f.name(), f.type_()))
                .collect();
            match validate_batch(&candidates) {
                Ok(()) => on_batch(files),
                Err(err) => {
                    if let Some(message) = rejection_message(&err) {
                        dialogs::alert(&message);
                    }
                }
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if disabled.get_untracked() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(collect_files(&files));
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            if disabled.get_untracked() {
                return;
            }

            // open the file picker
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept(PDF_MIME);
            input.set_multiple(true);

            let handle_files = handle_files.clone();
            let picker = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = picker.files() {
                    handle_files(collect_files(&files));
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <section
            class=move || {
                let mut classes = vec!["upload-zone"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if disabled.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <p>"Drag & drop biomedical PDFs here, or click to upload"</p>
            <Show when=move || !selected_names.get().is_empty()>
                <p>
                    "Selected files: "
                    <strong>{move || selected_names.get().join(", ")}</strong>
                </p>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pdf_rejection_message() {
        let message = rejection_message(&IntakeError::NotPdf("notes.txt".to_string()));
        assert_eq!(message.as_deref(), Some("Please upload only PDF files"));
    }

    #[test]
    fn test_oversize_rejection_message() {
        let message = rejection_message(&IntakeError::TooMany { count: 12, limit: 10 });
        assert_eq!(
            message.as_deref(),
            Some("You can upload at most 10 PDFs at a time")
        );
    }

    #[test]
    fn test_empty_batch_is_silent() {
        assert_eq!(rejection_message(&IntakeError::Empty), None);
    }
}
