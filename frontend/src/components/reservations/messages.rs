use common::model::reservation::{ReservationId, ReservationStatus};

#[derive(Clone)]
pub enum Msg {
    /// The store changed (items or loading flag).
    StoreChanged,
    DateTyped(String),
    /// `YYYY-MM-DD` from the native date picker.
    DatePicked(String),
    OpenDatePicker,
    TimeChanged(String),
    NotesChanged(String),
    Submit,
    Submitted(Result<(), String>),
    SetFilter(Option<ReservationStatus>),
    ChangeStatus(ReservationId, ReservationStatus),
    Delete(ReservationId),
    /// A status change or delete finished; the message is shown as a toast.
    ActionFinished(String),
    Logout,
}
