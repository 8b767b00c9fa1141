//! Reservation list and booking form.
//!
//! The component owns a `ResourceStore<Reservation>`; every data operation
//! goes through it and the view re-renders whenever the store reports a
//! change. The store is detached on destroy so responses that arrive after
//! the view is gone are ignored.

use common::store::ResourceStore;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::AppContext;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ReservationView;

#[derive(Properties, PartialEq)]
pub struct ReservationViewProps {
    pub context: AppContext,
}

impl Component for ReservationView {
    type Message = Msg;
    type Properties = ReservationViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let store = ResourceStore::new(ctx.props().context.client.clone());
        let on_change = ctx.link().callback(|_: ()| Msg::StoreChanged);
        store.subscribe(move || on_change.emit(()));
        ReservationView::new(store)
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
