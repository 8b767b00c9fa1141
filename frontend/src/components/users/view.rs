use common::model::user::User;
use yew::html::Scope;
use yew::prelude::*;

use super::edit_form::EditUserForm;
use super::messages::Msg;
use super::state::UsersView;
use crate::components::ui::badge::badge;
use crate::components::ui::modal::Modal;
use crate::components::ui::spinner::LoadingSpinner;
use crate::components::ui::table::Table;

pub fn view(view: &UsersView, ctx: &Context<UsersView>) -> Html {
    let link = ctx.link();

    if view.store.is_loading() && view.store.all_items().is_empty() {
        return html! { <LoadingSpinner full_screen={true} /> };
    }

    let users = view.store.items();
    let subtitle = if view.store.is_loading() {
        "Refreshing...".to_string()
    } else {
        format!("{} total", users.len())
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="bg-white shadow">
                <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                    <h1 class="text-3xl font-bold text-gray-800">{ "Users" }</h1>
                    <button
                        class="bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-lg transition duration-200"
                        onclick={link.callback(|_| Msg::Logout)}
                    >
                        { "Logout" }
                    </button>
                </div>
            </div>
            <div class="max-w-7xl mx-auto px-6 py-8">
                <Table
                    headers={vec!["User Info", "Contact", "Status", "Actions"]}
                    title={Some("All Users".to_string())}
                    subtitle={Some(subtitle)}
                >
                    if users.is_empty() {
                        <tr>
                            <td colspan="4" class="px-6 py-12 text-center text-gray-500">{ "No users found" }</td>
                        </tr>
                    } else {
                        { for users.iter().map(|user| build_row(user, link)) }
                    }
                </Table>
            </div>
            { build_modal(view, link) }
        </div>
    }
}

fn build_row(user: &User, link: &Scope<UsersView>) -> Html {
    let id = user.id;
    let role = user.role();

    html! {
        <tr key={id.to_string()} class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex items-center">
                    <div class="h-10 w-10 rounded-full bg-blue-500 flex items-center justify-center">
                        <span class="text-white font-semibold">{ user.initial() }</span>
                    </div>
                    <div class="ml-4">
                        <div class="text-sm font-medium text-gray-900">{ user.display_name() }</div>
                        <div class="text-sm text-gray-500">{ format!("@{}", user.username) }</div>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm text-gray-900">{ user.email.clone() }</div>
                <div class="text-sm text-gray-500">{ user.phone.clone().unwrap_or_else(|| "-".to_string()) }</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap space-x-1">
                { badge(user.active_category(), user.active_label()) }
                { badge(role.category(), role.label()) }
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium space-x-3">
                <button class="text-blue-600 hover:text-blue-900" onclick={link.callback(move |_| Msg::Edit(id))}>
                    { "Edit" }
                </button>
                <button class="text-red-600 hover:text-red-900" onclick={link.callback(move |_| Msg::Delete(id))}>
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

fn build_modal(view: &UsersView, link: &Scope<UsersView>) -> Html {
    let Some(user) = view.editing.clone() else {
        return html! {};
    };
    let title = format!("Edit {}", user.display_name());

    html! {
        <Modal is_open={true} title={title} on_close={link.callback(|_| Msg::CloseEdit)}>
            <EditUserForm
                user={user}
                saving={view.saving}
                on_submit={link.callback(Msg::Save)}
                on_cancel={link.callback(|_| Msg::CloseEdit)}
            />
        </Modal>
    }
}
