use shared::AlertDialog;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertDialogModalProps {
    pub dialog: Option<AlertDialog>,
    pub on_close: Callback<()>,
}

/// Blocking error dialog showing the server's payload verbatim
#[function_component(AlertDialogModal)]
pub fn alert_dialog_modal(props: &AlertDialogModalProps) -> Html {
    let Some(dialog) = &props.dialog else {
        return html! {};
    };

    let on_ok = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="alert-modal-backdrop">
            <div class="alert-modal" role="alertdialog" onclick={on_modal_click}>
                <div class="alert-icon">{"✖"}</div>
                <h3 class="alert-title">{&dialog.title}</h3>
                <pre class="alert-message">{&dialog.message}</pre>
                <div class="alert-buttons">
                    <button type="button" class="btn btn-primary" onclick={on_ok}>{"OK"}</button>
                </div>
            </div>
        </div>
    }
}
