//! State of the reservation view: the store it owns and the booking form
//! buffer.

use common::datetime::DateInput;
use common::model::reservation::{Reservation, ReservationStatus};
use common::store::ResourceStore;
use yew::NodeRef;

/// Transient input of the booking form, cleared after a successful submit.
#[derive(Clone, Default, PartialEq)]
pub struct BookingForm {
    pub date: DateInput,
    /// `HH:MM` as produced by `<input type="time">`.
    pub time: String,
    pub notes: String,
}

pub struct ReservationView {
    pub store: ResourceStore<Reservation>,
    pub form: BookingForm,
    /// `None` shows every status.
    pub filter: Option<ReservationStatus>,
    pub submitting: bool,
    pub form_error: Option<String>,
    /// Hidden `<input type="date">` driven by the calendar button.
    pub date_picker_ref: NodeRef,
}

impl ReservationView {
    pub fn new(store: ResourceStore<Reservation>) -> Self {
        Self {
            store,
            form: BookingForm::default(),
            filter: None,
            submitting: false,
            form_error: None,
            date_picker_ref: NodeRef::default(),
        }
    }
}
