use std::rc::Rc;

use gloo::file::File;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    error::AppError,
    upload::{UploadFile, UploadForm, UploadOutcome},
};
use crate::services::api::{ForecastApiClient, Uploader};

/// Progress and feedback of the upload panel
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadState {
    pub uploading: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadAction {
    /// Refused locally, nothing was sent
    Rejected(String),
    Started,
    Succeeded(String),
    Failed(String),
    /// Always follows `Started`, whatever the outcome
    Finished,
}

impl Reducible for UploadState {
    type Action = UploadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            UploadAction::Rejected(error) => Self {
                uploading: self.uploading,
                message: None,
                error: Some(error),
            },
            UploadAction::Started => Self {
                uploading: true,
                message: None,
                error: None,
            },
            UploadAction::Succeeded(message) => Self {
                message: Some(message),
                error: None,
                ..(*self).clone()
            },
            UploadAction::Failed(error) => Self {
                message: None,
                error: Some(error),
                ..(*self).clone()
            },
            UploadAction::Finished => Self {
                uploading: false,
                ..(*self).clone()
            },
        };
        Rc::new(next)
    }
}

// Emits `Finished` when dropped, so every exit path clears `uploading`
struct FinishOnDrop<'a, D: Fn(UploadAction)>(&'a D);

impl<D: Fn(UploadAction)> Drop for FinishOnDrop<'_, D> {
    fn drop(&mut self) {
        (self.0)(UploadAction::Finished);
    }
}

/// Validates and submits one upload, reporting each step through `dispatch`.
///
/// An empty form is rejected before `uploader` is touched. `on_success` runs
/// after the confirmation message is recorded and before `Finished`.
pub async fn submit_upload<U, D, S>(
    uploader: &U,
    form: UploadForm,
    dispatch: D,
    on_success: S,
) -> Result<UploadOutcome, AppError>
where
    U: Uploader,
    D: Fn(UploadAction),
    S: FnOnce(&UploadOutcome),
{
    if let Err(e) = form.validate() {
        dispatch(UploadAction::Rejected(e.to_string()));
        return Err(e);
    }

    dispatch(UploadAction::Started);
    let _finish = FinishOnDrop(&dispatch);

    match uploader.upload(&form).await {
        Ok(outcome) => {
            log::info!("Upload accepted: {}", outcome.message);
            dispatch(UploadAction::Succeeded(outcome.message.clone()));
            on_success(&outcome);
            Ok(outcome)
        }
        Err(e) => {
            log::warn!("Upload failed: {e}");
            dispatch(UploadAction::Failed(e.to_string()));
            Err(e)
        }
    }
}

/// Files picked in the form, not yet read into memory
#[derive(Clone, Default)]
pub struct FileSelection {
    pub generation: Option<File>,
    pub price: Option<File>,
}

async fn read_file(file: Option<File>) -> Result<Option<UploadFile>, AppError> {
    let Some(file) = file else {
        return Ok(None);
    };

    let bytes = gloo::file::futures::read_as_bytes(&file)
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read {}: {e}", file.name())))?;

    Ok(Some(UploadFile::new(file.name(), bytes)))
}

async fn read_form(selection: FileSelection) -> Result<UploadForm, AppError> {
    Ok(UploadForm::new(
        read_file(selection.generation).await?,
        read_file(selection.price).await?,
    ))
}

pub struct UploadHandle {
    pub state: UseReducerHandle<UploadState>,
    pub submit: Callback<FileSelection>,
}

/// Upload coordinator; `on_success` fires once per accepted upload
#[hook]
pub fn use_upload(on_success: Callback<()>) -> UploadHandle {
    let state = use_reducer(UploadState::default);

    let submit = {
        let dispatcher = state.dispatcher();

        use_callback(
            on_success,
            move |selection: FileSelection, on_success: &Callback<()>| {
                let dispatcher = dispatcher.clone();
                let on_success = on_success.clone();

                spawn_local(async move {
                    let dispatch = |action: UploadAction| dispatcher.dispatch(action);

                    let form = match read_form(selection).await {
                        Ok(form) => form,
                        Err(e) => return dispatch(UploadAction::Rejected(e.to_string())),
                    };

                    let client = match ForecastApiClient::new() {
                        Ok(client) => client,
                        Err(e) => return dispatch(UploadAction::Rejected(e.to_string())),
                    };

                    if let Ok(outcome) =
                        submit_upload(&client, form, dispatch, |_| on_success.emit(())).await
                    {
                        log::debug!("{} file(s) stored", outcome.uploaded.len());
                    }
                });
            },
        )
    };

    UploadHandle { state, submit }
}
