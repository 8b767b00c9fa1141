use common::model::user::User;
use common::store::ResourceStore;

pub struct UsersView {
    pub store: ResourceStore<User>,
    /// Snapshot of the user open in the edit modal.
    pub editing: Option<User>,
    pub saving: bool,
}

impl UsersView {
    pub fn new(store: ResourceStore<User>) -> Self {
        Self {
            store,
            editing: None,
            saving: false,
        }
    }

    /// Settles a save and returns the toast text. The modal closes only on
    /// success; a failed save keeps it open with the draft intact.
    pub fn finish_save(&mut self, result: Result<(), String>) -> String {
        self.saving = false;
        match result {
            Ok(()) => {
                self.editing = None;
                "User updated.".to_string()
            }
            Err(err) => format!("Could not update the user: {}", err),
        }
    }
}
