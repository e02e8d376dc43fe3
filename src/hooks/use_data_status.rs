use yew::prelude::*;

use super::use_fetch::{FetchHandle, use_fetch};
use crate::models::status::DataStatus;
use crate::services::api::fetch_data_status;

#[hook]
pub fn use_data_status() -> FetchHandle<DataStatus> {
    use_fetch("data status", (), |()| fetch_data_status())
}
