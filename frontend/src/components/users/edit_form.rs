//! Edit form shown inside the user modal. Keeps its own draft of the user
//! and hands the edited copy back on submit.

use common::model::user::User;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum FormMsg {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Active(bool),
    Staff(bool),
    Submit,
    Cancel,
}

#[derive(Properties, PartialEq)]
pub struct EditUserFormProps {
    pub user: User,
    pub on_submit: Callback<User>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub saving: bool,
}

pub struct EditUserForm {
    draft: User,
}

impl Component for EditUserForm {
    type Message = FormMsg;
    type Properties = EditUserFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            draft: ctx.props().user.clone(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().user.id != old_props.user.id {
            self.draft = ctx.props().user.clone();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FormMsg::FirstName(value) => self.draft.first_name = value,
            FormMsg::LastName(value) => self.draft.last_name = value,
            FormMsg::Email(value) => self.draft.email = value,
            FormMsg::Phone(value) => {
                self.draft.phone = (!value.trim().is_empty()).then_some(value);
            }
            FormMsg::Active(value) => self.draft.is_active = value,
            FormMsg::Staff(value) => self.draft.is_staff = value,
            FormMsg::Submit => {
                ctx.props().on_submit.emit(self.draft.clone());
                return false;
            }
            FormMsg::Cancel => {
                ctx.props().on_cancel.emit(());
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let draft = &self.draft;

        html! {
            <form
                class="space-y-4"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    FormMsg::Submit
                })}
            >
                <div class="grid grid-cols-2 gap-4">
                    { text_field("First name", "text", draft.first_name.clone(), link.callback(FormMsg::FirstName)) }
                    { text_field("Last name", "text", draft.last_name.clone(), link.callback(FormMsg::LastName)) }
                </div>
                { text_field("Email", "email", draft.email.clone(), link.callback(FormMsg::Email)) }
                { text_field("Phone", "tel", draft.phone.clone().unwrap_or_default(), link.callback(FormMsg::Phone)) }
                <div class="flex gap-6">
                    { checkbox("Active", draft.is_active, link.callback(FormMsg::Active)) }
                    { checkbox("Staff", draft.is_staff, link.callback(FormMsg::Staff)) }
                </div>
                <div class="flex justify-end gap-3 pt-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50"
                        onclick={link.callback(|_| FormMsg::Cancel)}
                    >
                        { "Cancel" }
                    </button>
                    <button
                        type="submit"
                        disabled={ctx.props().saving}
                        class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-semibold"
                    >
                        { if ctx.props().saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        }
    }
}

fn text_field(label: &'static str, kind: &'static str, value: String, on_change: Callback<String>) -> Html {
    html! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{ label }</label>
            <input
                type={kind}
                class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                value={value}
                oninput={on_change.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
            />
        </div>
    }
}

fn checkbox(label: &'static str, checked: bool, on_change: Callback<bool>) -> Html {
    html! {
        <label class="flex items-center gap-2 text-sm text-gray-700">
            <input
                type="checkbox"
                class="h-4 w-4"
                checked={checked}
                onchange={on_change.reform(|e: Event| e.target_unchecked_into::<HtmlInputElement>().checked())}
            />
            { label }
        </label>
    }
}
