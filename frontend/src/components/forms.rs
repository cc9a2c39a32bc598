use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Keeps a text state in sync with an `<input>`
pub fn bind_input(value: &UseStateHandle<String>) -> Callback<InputEvent> {
    let value = value.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        value.set(input.value());
    })
}

pub fn bind_textarea(value: &UseStateHandle<String>) -> Callback<InputEvent> {
    let value = value.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        value.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub message: Option<String>,
}

/// Validation message rendered under an input
#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match &props.message {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}
