use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::features::registration::{
    format_file_size, mime_from_name, FileKind, NewAttachment, RegistrationAction,
    RegistrationState,
};

const FILE_INPUT_ID: &str = "document-file-input";

#[derive(Props, PartialEq, Clone)]
pub struct DocumentUploadProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
}

/// Drag-and-drop plus file-picker document upload. Both input paths land in
/// the same `AddFiles` action; default browser drop handling is suppressed
/// so the page never navigates to a dropped file.
#[component]
pub fn DocumentUpload(props: DocumentUploadProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let dropzone_class = if state().drag_active {
        "dropzone drag-active"
    } else {
        "dropzone"
    };
    let attachments = state().attachments.clone();
    let file_count = attachments.len();
    let documents_error = state().field_error("documents").map(str::to_string);

    rsx! {
        div {
            class: "upload-section",
            div {
                class: "upload-header",
                label {
                    class: "field-label",
                    "Required Documents"
                    span { class: "required-mark", " *" }
                }
                if file_count > 0 {
                    span { class: "upload-count", "{file_count} file(s) selected" }
                }
            }

            div {
                class: "{dropzone_class}",
                ondragenter: move |event| {
                    event.prevent_default();
                    dispatch.call(RegistrationAction::SetDragActive(true));
                },
                ondragover: move |event| {
                    event.prevent_default();
                    dispatch.call(RegistrationAction::SetDragActive(true));
                },
                ondragleave: move |event| {
                    event.prevent_default();
                    dispatch.call(RegistrationAction::SetDragActive(false));
                },
                ondrop: move |event| {
                    event.prevent_default();
                    dispatch.call(RegistrationAction::SetDragActive(false));
                    if let Some(engine) = event.files() {
                        ingest_files(engine, dispatch);
                    }
                },
                onclick: move |_| open_file_dialog(),

                div {
                    class: "dropzone-body",
                    div { class: "dropzone-icon", "⬆" }
                    p { class: "dropzone-title", "Drag and drop your documents here" }
                    p { class: "dropzone-subtitle", "or click to browse your files" }
                    p {
                        class: "dropzone-hint",
                        "Upload Tax Exemption Certificate, Health Permit, Non-Profit \
                         registration, and any other relevant documentation"
                    }
                }
            }

            // The picker input lives outside the dropzone so its synthetic
            // click does not bubble back into the dialog opener.
            input {
                id: "{FILE_INPUT_ID}",
                class: "file-input-hidden",
                r#type: "file",
                multiple: true,
                onchange: move |event| {
                    if let Some(engine) = event.files() {
                        ingest_files(engine, dispatch);
                    }
                }
            }

            if let Some(message) = &documents_error {
                p { class: "field-error", "{message}" }
            }

            if file_count > 0 {
                div {
                    class: "uploaded-files",
                    h3 { class: "uploaded-files-title", "Uploaded Documents" }
                    div {
                        class: "uploaded-files-grid",
                        for file in attachments.iter() {
                            UploadedFileRow {
                                key: "{file.id}",
                                id: file.id,
                                name: file.name.clone(),
                                size: file.size,
                                mime: file.mime.clone(),
                                dispatch: dispatch,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct UploadedFileRowProps {
    id: u64,
    name: String,
    size: u64,
    mime: String,
    dispatch: EventHandler<RegistrationAction>,
}

#[component]
fn UploadedFileRow(props: UploadedFileRowProps) -> Element {
    let icon_class = FileKind::from_mime(&props.mime).icon_class();
    let formatted_size = format_file_size(props.size);
    let id = props.id;

    rsx! {
        div {
            class: "uploaded-file",
            div {
                class: "uploaded-file-info",
                span { class: "{icon_class}" }
                div {
                    p { class: "uploaded-file-name", "{props.name}" }
                    p { class: "uploaded-file-size", "{formatted_size}" }
                }
            }
            button {
                class: "uploaded-file-remove",
                aria_label: "Remove file",
                onclick: move |event| {
                    event.stop_propagation();
                    props.dispatch.call(RegistrationAction::RemoveFile(id));
                },
                "✕"
            }
        }
    }
}

/// Reads every file from the engine and appends the batch in one action so
/// insertion order matches selection order.
fn ingest_files(engine: Arc<dyn FileEngine>, dispatch: EventHandler<RegistrationAction>) {
    spawn(async move {
        let mut collected = Vec::new();
        for name in engine.files() {
            let size = engine.file_size(&name).await.unwrap_or(0);
            let bytes = engine.read_file(&name).await.unwrap_or_default();
            let mime = mime_from_name(&name);
            collected.push(NewAttachment {
                name,
                size,
                mime,
                bytes,
            });
        }
        if !collected.is_empty() {
            crate::console_info!("[Register] Attached {} document(s)", collected.len());
            dispatch.call(RegistrationAction::AddFiles(collected));
        }
    });
}

/// Forwards a dropzone click to the hidden file input.
fn open_file_dialog() {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(FILE_INPUT_ID));
    if let Some(element) = input {
        if let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() {
            input.click();
        }
    }
}
