//! Root component: loads configuration and session from the host page,
//! installs the logger and switches between the two admin views.

use std::rc::Rc;

use log::info;
use yew::{classes, html, Component, Context, Html};

use crate::api;
use crate::components::reservations::ReservationView;
use crate::components::users::UsersView;
use crate::context::AppContext;
use crate::host;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Reservations,
    Users,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Reservations => "Reservations",
            Tab::Users => "Users",
        }
    }
}

pub enum Msg {
    SetTab(Tab),
    Logout,
}

pub struct App {
    context: AppContext,
    active_tab: Tab,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = Rc::new(host::load_config());
        wasm_logger::init(wasm_logger::Config::new(config.log_level.into()));

        let session = Rc::new(host::load_session(&config));
        if !session.is_authenticated() {
            info!("no stored session token; requests go out anonymous");
        }
        let client = api::connect(config.clone(), session.clone());

        Self {
            context: AppContext {
                config,
                session,
                client,
                on_logout: ctx.link().callback(|_: ()| Msg::Logout),
            },
            active_tab: Tab::Reservations,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                let changed = self.active_tab != tab;
                self.active_tab = tab;
                changed
            }
            Msg::Logout => {
                info!("logging out");
                host::logout(&self.context.config);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let context = self.context.clone();

        html! {
            <div>
                <nav class="tab-bar bg-gray-800 px-6 flex gap-2">
                    { for [Tab::Reservations, Tab::Users].into_iter().map(|tab| html! {
                        <button
                            class={classes!(
                                "tab-btn", "px-4", "py-3", "text-sm", "font-medium",
                                if self.active_tab == tab { "active text-white border-b-2 border-blue-400" } else { "text-gray-300" }
                            )}
                            onclick={link.callback(move |_| Msg::SetTab(tab))}
                        >
                            { tab.label() }
                        </button>
                    }) }
                </nav>
                {
                    match self.active_tab {
                        Tab::Reservations => html! { <ReservationView context={context} /> },
                        Tab::Users => html! { <UsersView context={context} /> },
                    }
                }
            </div>
        }
    }
}
