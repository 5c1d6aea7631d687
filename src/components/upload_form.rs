use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::config::ClientConfig;
use crate::error::{InputError, UploadError};
use crate::upload::client::{HttpUploadClient, UploadService};
use crate::view::render_json;

#[component]
pub fn UploadForm() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let file_input = NodeRef::<leptos::html::Input>::new();
    let (status, set_status) = signal(String::new());
    let (output, set_output) = signal(String::new());

    let on_upload = move |_| {
        let Some(file) = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            set_status.set(InputError::NoFileSelected.to_string());
            return;
        };

        set_status.set("Uploading...".to_string());
        set_output.set(String::new());
        let client = HttpUploadClient::from_config(&config);

        spawn_local(async move {
            let name = file.name();
            let result = match read_file(&file).await {
                Ok(bytes) => client.upload(&name, bytes).await,
                Err(e) => Err(UploadError::Network(format!("Failed to read file: {e:?}"))),
            };
            match result {
                Ok(receipt) => {
                    set_status.set(receipt.message.clone());
                    set_output.set(render_json(&receipt.data));
                }
                Err(e) => {
                    tracing::error!("Upload failed: {e}");
                    set_status.set(e.user_message());
                }
            }
        });
    };

    view! {
        <div class="upload-container">
            <input type="file" accept="application/pdf" node_ref=file_input/>
            <button on:click=on_upload>"Upload"</button>
            <p class="status">{status}</p>
            <pre class="json">{output}</pre>
        </div>
    }
}

async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, JsValue> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
