use std::rc::Rc;

use common::config::ApiConfig;
use common::session::Session;
use common::store::RestClient;
use yew::Callback;

/// Everything a view needs from its surroundings, passed down as a prop.
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<ApiConfig>,
    pub session: Rc<Session>,
    pub client: Rc<dyn RestClient>,
    pub on_logout: Callback<()>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(&self.client, &other.client)
            && self.on_logout == other.on_logout
    }
}
