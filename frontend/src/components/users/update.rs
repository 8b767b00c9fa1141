use common::model::user::UserPatch;
use log::debug;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UsersView;
use crate::components::ui::toast::{delete_outcome, show_toast};
use crate::host;

pub fn update(view: &mut UsersView, ctx: &Context<UsersView>, msg: Msg) -> bool {
    match msg {
        Msg::StoreChanged => true,
        Msg::Edit(id) => {
            view.editing = view.store.find(&id);
            true
        }
        Msg::CloseEdit => {
            view.editing = None;
            true
        }
        Msg::Save(edited) => {
            let Some(original) = view.editing.clone() else {
                return false;
            };
            let patch = UserPatch::diff(&original, &edited);
            if patch.is_empty() {
                debug!("no changes for user {}", original.id);
                view.editing = None;
                return true;
            }

            view.saving = true;
            let store = view.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store
                    .update_field(&original.id, &patch)
                    .await
                    .map_err(|err| err.to_string());
                link.send_message(Msg::Saved(result));
            });
            true
        }
        Msg::Saved(result) => {
            show_toast(&view.finish_save(result));
            true
        }
        Msg::Delete(id) => {
            let store = view.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let confirm = |prompt: &str| host::confirm(prompt);
                let result = store.try_delete(&id, &confirm).await;
                if let Some(message) = delete_outcome("User", id, &result) {
                    link.send_message(Msg::ActionFinished(message));
                }
            });
            false
        }
        Msg::ActionFinished(message) => {
            show_toast(&message);
            false
        }
        Msg::Logout => {
            ctx.props().context.on_logout.emit(());
            false
        }
    }
}
