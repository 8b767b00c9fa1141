//! Update function for the reservation view.
//!
//! Form messages only touch the local buffer. Submit validates the buffer
//! through the date normaliser before anything reaches the store; store
//! operations run in `spawn_local` and report back with a message.

use common::datetime::{to_backend_instant, to_display_date, DateInput};
use common::model::reservation::{NewReservation, ReservationPatch, ReservationStatus};
use js_sys::{Function, Reflect};
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{BookingForm, ReservationView};
use crate::components::ui::toast::{delete_outcome, show_toast};
use crate::host;

pub fn update(view: &mut ReservationView, ctx: &Context<ReservationView>, msg: Msg) -> bool {
    match msg {
        Msg::StoreChanged => true,
        Msg::DateTyped(raw) => {
            view.form.date = DateInput::parse(&raw);
            view.form_error = None;
            true
        }
        Msg::DatePicked(value) => {
            if value.is_empty() {
                return false;
            }
            match to_display_date(&value) {
                Ok(display) => view.form.date = DateInput::parse(&display),
                Err(err) => warn!("date picker returned {:?}: {}", value, err),
            }
            view.form_error = None;
            true
        }
        Msg::OpenDatePicker => {
            open_date_picker(view);
            false
        }
        Msg::TimeChanged(time) => {
            view.form.time = time;
            view.form_error = None;
            true
        }
        Msg::NotesChanged(notes) => {
            view.form.notes = notes;
            false
        }
        Msg::Submit => {
            if view.submitting {
                return false;
            }
            let slot = match to_backend_instant(&view.form.date.text(), &view.form.time) {
                Ok(slot) => slot,
                Err(err) => {
                    debug!("booking form rejected: {}", err);
                    view.form_error = Some(format!("Please check the date and time: {}", err));
                    return true;
                }
            };

            view.submitting = true;
            let payload = NewReservation::pending(slot, &view.form.notes);
            let store = view.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.create(&payload).await.map_err(|err| err.to_string());
                link.send_message(Msg::Submitted(result));
            });
            true
        }
        Msg::Submitted(result) => {
            view.submitting = false;
            match result {
                Ok(()) => {
                    view.form = BookingForm::default();
                    view.form_error = None;
                    show_toast("Reservation created.");
                }
                Err(err) => show_toast(&format!("Could not create the reservation: {}", err)),
            }
            true
        }
        Msg::SetFilter(filter) => {
            view.filter = filter;
            match filter {
                Some(status) => view.store.set_filter(move |r| r.status == status),
                None => view.store.clear_filter(),
            }
            true
        }
        Msg::ChangeStatus(id, status) => {
            let store = view.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = match store.update_field(&id, &ReservationPatch::status(status)).await {
                    Ok(()) => format!("Reservation {} marked {}.", id, status_verb(status)),
                    Err(err) => format!("Could not update reservation {}: {}", id, err),
                };
                link.send_message(Msg::ActionFinished(outcome));
            });
            false
        }
        Msg::Delete(id) => {
            let store = view.store.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let confirm = |prompt: &str| host::confirm(prompt);
                let result = store.try_delete(&id, &confirm).await;
                if let Some(message) = delete_outcome("Reservation", id, &result) {
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

fn status_verb(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "pending",
        ReservationStatus::Confirmed => "confirmed",
        ReservationStatus::Completed => "completed",
        ReservationStatus::Cancelled => "cancelled",
        ReservationStatus::Unknown => "updated",
    }
}

/// Opens the browser's native picker on the hidden date input, pre-filled
/// with the current buffer when it holds a complete date.
fn open_date_picker(view: &ReservationView) {
    let Some(input) = view.date_picker_ref.cast::<HtmlInputElement>() else {
        return;
    };
    input.set_value(&view.form.date.picker_value().unwrap_or_default());

    let show_picker = Reflect::get(&input, &JsValue::from_str("showPicker"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());
    match show_picker {
        Some(show_picker) => {
            if let Err(err) = show_picker.call0(&input) {
                warn!("showPicker failed: {:?}", err);
                input.click();
            }
        }
        None => input.click(),
    }
}
