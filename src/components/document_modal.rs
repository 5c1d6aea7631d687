use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ClientConfig;
use crate::search::client::{HttpQueryService, QueryService};
use crate::view::render_json;

/// Shows one document's JSON while `doc_id` is set.
///
/// Closed by the close button or a click on the backdrop outside the
/// content box. Detail payloads are never cached; every open fetches.
#[component]
pub fn DocumentModal(doc_id: RwSignal<Option<i64>>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let (content, set_content) = signal(None::<Result<String, String>>);

    Effect::new(move |_| {
        let Some(id) = doc_id.get() else {
            return;
        };
        set_content.set(None);
        let service = HttpQueryService::from_config(&config);
        spawn_local(async move {
            let rendered = service
                .fetch_document(id)
                .await
                .map(|value| render_json(&value))
                .map_err(|e| e.user_message());
            // A different document may have been opened meanwhile.
            if doc_id.get_untracked() == Some(id) {
                set_content.set(Some(rendered));
            }
        });
    });

    view! {
        <Show when=move || doc_id.with(Option::is_some)>
            <div class="modal" on:click=move |_| doc_id.set(None)>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button class="close" on:click=move |_| doc_id.set(None)>"×"</button>
                    {move || match content.get() {
                        None => view! { <p>"Loading..."</p> }.into_any(),
                        Some(Ok(json)) => view! { <pre class="json">{json}</pre> }.into_any(),
                        Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}
