pub mod config;
pub mod error;
pub mod models {
    pub mod document;
    pub mod map;
    pub mod search;
    pub mod upload;
}
pub mod search {
    pub mod client;
}
pub mod upload {
    pub mod client;
}
pub mod state;
pub mod store;
pub mod view;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components {
    pub mod document_modal;
    pub mod search_panel;
    pub mod upload_form;
}

/// Browser entry point: mounts the UI on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
