use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, HtmlElement};
use yew::prelude::*;

pub const FILE_INPUT_ID: &str = "file-input";

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

/// Only the first file of a multi-file drop or selection is considered.
pub fn first_file(file_list: Option<FileList>) -> Option<File> {
    file_list.and_then(|files| files.item(0))
}

pub fn open_file_picker() {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(FILE_INPUT_ID))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    match input {
        Some(input) => input.click(),
        None => log::warn!("File input #{} is not mounted", FILE_INPUT_ID),
    }
}

pub fn render_error_message(message: &str) -> Html {
    html! {
        <div class="error-message" role="alert">
            <i class="fa-solid fa-circle-exclamation"></i>
            <p class="error-title">{"Error"}</p>
            <p>{ message }</p>
        </div>
    }
}
