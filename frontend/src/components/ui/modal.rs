//! Overlay dialog. Rendered only while open; clicking the backdrop or the
//! close button asks the owner to close it.

use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

pub struct Modal {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.is_open {
            return html! {};
        }

        let close = props.on_close.reform(|_: MouseEvent| ());
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="top-sheet show fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50"
                id={self.id.clone()}
                onclick={close.clone()}
            >
                <div class="bg-white rounded-lg shadow-xl max-w-md w-full mx-4" onclick={keep_open}>
                    <div class="flex justify-between items-center px-6 py-4 border-b border-gray-200">
                        <h3 class="text-lg font-semibold text-gray-900">{ props.title.clone() }</h3>
                        <button class="text-gray-400 hover:text-gray-600" onclick={close}>{ "✕" }</button>
                    </div>
                    <div class="p-6">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
