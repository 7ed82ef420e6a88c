use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Overlay dialog shell shared by the plan and tenant forms.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_overlay_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h2>{ &props.title }</h2>
                    <button class="modal-close" onclick={on_overlay_close}>{ "\u{00d7}" }</button>
                </div>
                <div class="modal-body">
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}
