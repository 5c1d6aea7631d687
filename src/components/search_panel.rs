use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::document_modal::DocumentModal;
use crate::config::ClientConfig;
use crate::search::client::{HttpQueryService, QueryService};
use crate::state::{parse_document_id, validate_community_code, ListView, SearchSession};
use crate::view::{button_label, list_row};

/// Community search: code input, one button per status group, the
/// document list, an id filter and the detail modal.
#[component]
pub fn SearchPanel() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = RwSignal::new(SearchSession::new());
    let (code, set_code) = signal(String::new());
    let (id_input, set_id_input) = signal(String::new());
    let (notice, set_notice) = signal(None::<String>);
    let open_doc = RwSignal::new(None::<i64>);

    let on_search = move |_| {
        set_notice.set(None);
        let code = match validate_community_code(&code.get_untracked()) {
            Ok(code) => code,
            Err(e) => {
                set_notice.set(Some(e.to_string()));
                return;
            }
        };
        let service = HttpQueryService::from_config(&config);
        // Overlapping searches are not cancelled; the last one to resolve wins.
        spawn_local(async move {
            let result = service.search_by_community(&code).await;
            if let Some(Err(e)) = session.try_update(|s| s.apply_search(&code, result)) {
                set_notice.set(Some(e.user_message()));
            }
        });
    };

    let on_filter_id = move |_| match parse_document_id(&id_input.get_untracked()) {
        Ok(id) => {
            let outcome = session.try_update(|s| s.filter_by_id(id));
            set_notice.set(outcome.and_then(|o| o.notice()));
        }
        Err(e) => set_notice.set(Some(e.to_string())),
    };

    let loaded = move || session.with(|s| s.view() != &ListView::Empty);

    view! {
        <div class="search-container">
            <input
                type="text"
                placeholder="Community code"
                prop:value=code
                on:input=move |ev| set_code.set(event_target_value(&ev))
            />
            <button on:click=on_search>"Search"</button>

            {move || notice.get().map(|msg| view! { <p class="notice">{msg}</p> })}

            <Show when=loaded>
                <div class="result-buttons">
                    {move || {
                        session
                            .with(|s| s.groups())
                            .into_iter()
                            .map(|group| {
                                let text = button_label(&group);
                                let label = group.label;
                                view! {
                                    <button on:click=move |_| session.update(|s| s.select_status(&label))>
                                        {text}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="filter-bar">
                    <button on:click=move |_| session.update(SearchSession::show_all)>"All"</button>
                    <input
                        type="number"
                        placeholder="Document ID"
                        prop:value=id_input
                        on:input=move |ev| set_id_input.set(event_target_value(&ev))
                    />
                    <button on:click=on_filter_id>"Find by ID"</button>
                </div>

                <section class="documents">
                    <h2>{move || session.with(|s| s.title())}</h2>
                    <ul class="doc-list">
                        {move || {
                            session
                                .with(|s| s.visible())
                                .into_iter()
                                .map(|doc| {
                                    let id = doc.id;
                                    view! {
                                        <li class="doc-row" on:click=move |_| open_doc.set(Some(id))>
                                            {list_row(&doc)}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </Show>

            <DocumentModal doc_id=open_doc/>
        </div>
    }
}
