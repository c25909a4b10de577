//! Topic autocomplete component

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use mars_common::topics::{filter_topics, TOPIC_CATALOG};

/// Free-text topic input with prefix autocomplete over the predefined
/// catalog. The dropdown opens on focus or edit and closes when an entry
/// is picked or the pointer goes down outside the component.
#[component]
pub fn TopicInput(query: ReadSignal<String>, set_query: WriteSignal<String>) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let wrapper_ref = NodeRef::<html::Div>::new();

    let filtered = Memo::new(move |_| {
        filter_topics(TOPIC_CATALOG, &query.get())
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    });

    // close the dropdown when the pointer goes down outside the wrapper
    let outside_click = window_event_listener(ev::mousedown, move |ev| {
        let inside = wrapper_ref
            .get_untracked()
            .zip(ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()))
            .is_some_and(|(wrapper, target)| wrapper.contains(Some(&target)));
        if !inside {
            set_is_open.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    view! {
        <div class="topic-input" node_ref=wrapper_ref>
            <input
                type="text"
                placeholder="Select topic (optional)"
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_is_open.set(true);
                }
                on:focus=move |_| set_is_open.set(true)
            />
            <Show when=move || is_open.get() && !query.get().is_empty()>
                <ul class="topic-list">
                    <Show
                        when=move || !filtered.get().is_empty()
                        fallback=|| view! { <li class="no-matches">"No matches"</li> }
                    >
                        <For
                            each=move || filtered.get()
                            key=|topic| topic.clone()
                            children=move |topic| {
                                let label = topic.clone();
                                view! {
                                    <li on:click=move |_| {
                                        set_query.set(topic.clone());
                                        set_is_open.set(false);
                                    }>
                                        {label}
                                    </li>
                                }
                            }
                        />
                    </Show>
                </ul>
            </Show>
        </div>
    }
}
