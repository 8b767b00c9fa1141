use common::model::user::{User, UserId};

#[derive(Clone)]
pub enum Msg {
    StoreChanged,
    Edit(UserId),
    CloseEdit,
    /// Edited copy of the user being edited.
    Save(User),
    Saved(Result<(), String>),
    Delete(UserId),
    /// A delete finished; the message is shown as a toast.
    ActionFinished(String),
    Logout,
}
