//! User administration: table of all users, edit modal and delete action.

use common::store::ResourceStore;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::AppContext;

mod edit_form;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::UsersView;

#[derive(Properties, PartialEq)]
pub struct UsersViewProps {
    pub context: AppContext,
}

impl Component for UsersView {
    type Message = Msg;
    type Properties = UsersViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let store = ResourceStore::new(ctx.props().context.client.clone());
        let on_change = ctx.link().callback(|_: ()| Msg::StoreChanged);
        store.subscribe(move || on_change.emit(()));
        UsersView::new(store)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let store = self.store.clone();
            spawn_local(async move { store.refresh().await });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.store.detach();
    }
}
