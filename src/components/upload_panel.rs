use gloo::file::File;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::components::data_status_panel::DataStatusPanel;
use crate::hooks::use_data_status::use_data_status;
use crate::hooks::use_upload::{FileSelection, use_upload};

#[derive(Properties, PartialEq)]
pub struct UploadPanelProps {
    /// Fired after the backend accepted new data
    pub on_upload_success: Callback<()>,
}

#[function_component(UploadPanel)]
pub fn upload_panel(props: &UploadPanelProps) -> Html {
    let form_ref = use_node_ref();
    let generation_ref = use_node_ref();
    let price_ref = use_node_ref();

    let data_status = use_data_status();

    let on_success = {
        let form_ref = form_ref.clone();
        let refresh_status = data_status.refetch.clone();
        let on_upload_success = props.on_upload_success.clone();

        use_callback(on_upload_success, move |(), on_upload_success: &Callback<()>| {
            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
            refresh_status.emit(());
            on_upload_success.emit(());
        })
    };

    let upload = use_upload(on_success);
    let uploading = upload.state.uploading;

    let onsubmit = {
        let submit = upload.submit.clone();
        let generation_ref = generation_ref.clone();
        let price_ref = price_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(FileSelection {
                generation: selected_file(&generation_ref),
                price: selected_file(&price_ref),
            });
        })
    };

    html! {
        <div class="upload-panel">
            <h2>{"Upload Historical Data"}</h2>
            <form ref={form_ref} {onsubmit}>
                <label class="upload-field">
                    {"Generation CSV"}
                    <input ref={generation_ref} type="file" accept=".csv" disabled={uploading} />
                </label>
                <label class="upload-field">
                    {"Price CSV"}
                    <input ref={price_ref} type="file" accept=".csv" disabled={uploading} />
                </label>
                <button type="submit" disabled={uploading}>
                    { if uploading { "Uploading..." } else { "Upload" } }
                </button>
            </form>

            if let Some(message) = upload.state.message.clone() {
                <p class="upload-message">{message}</p>
            }
            if let Some(error) = upload.state.error.clone() {
                <p class="upload-error">{"Error: "}{error}</p>
            }

            <DataStatusPanel state={(*data_status.state).clone()} />
        </div>
    }
}

fn selected_file(input_ref: &NodeRef) -> Option<File> {
    input_ref
        .cast::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
        .map(File::from)
}
