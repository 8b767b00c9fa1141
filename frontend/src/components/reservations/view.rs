//! Rendering for the reservation view: header, booking form, status filter
//! and the reservation list.

use common::model::reservation::{Reservation, ReservationStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ReservationView;
use crate::components::ui::badge::badge;
use crate::components::ui::spinner::LoadingSpinner;

pub fn view(view: &ReservationView, ctx: &Context<ReservationView>) -> Html {
    let link = ctx.link();
    let items = view.store.items();

    // Full-page spinner only until the first list arrives.
    if view.store.is_loading() && view.store.all_items().is_empty() {
        return html! { <LoadingSpinner full_screen={true} /> };
    }

    html! {
        <div class="min-h-screen bg-gray-50">
            { build_header(link) }
            <div class="max-w-7xl mx-auto px-6 py-8">
                { build_form(view, link) }
                { build_list(view, &items, link) }
            </div>
        </div>
    }
}

fn build_header(link: &Scope<ReservationView>) -> Html {
    html! {
        <div class="bg-white shadow">
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <h1 class="text-3xl font-bold text-gray-800">{ "Reservations" }</h1>
                    <button
                        class="bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-lg transition duration-200"
                        onclick={link.callback(|_| Msg::Logout)}
                    >
                        { "Logout" }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn build_form(view: &ReservationView, link: &Scope<ReservationView>) -> Html {
    let form = &view.form;
    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none";

    html! {
        <div class="bg-white rounded-lg shadow p-6 mb-8">
            <h2 class="text-2xl font-semibold text-gray-800 mb-6">{ "Book New Reservation" }</h2>
            <form
                class="grid grid-cols-1 md:grid-cols-3 gap-4"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">{ "Date (DD/MM/YYYY)" }</label>
                    <div class="relative">
                        <input
                            type="text"
                            name="date"
                            placeholder="DD/MM/YYYY (e.g., 24/12/2025)"
                            maxlength="10"
                            required={true}
                            class={classes!(input_class, "pr-12")}
                            value={form.date.text()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::DateTyped(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                        <button
                            type="button"
                            title="Pick a date"
                            class="absolute right-3 top-1/2 transform -translate-y-1/2 text-gray-400 hover:text-blue-500 p-1"
                            onclick={link.callback(|_| Msg::OpenDatePicker)}
                        >
                            { "📅" }
                        </button>
                        <input
                            type="date"
                            tabindex="-1"
                            style="position:absolute;visibility:hidden;width:0;height:0;"
                            ref={view.date_picker_ref.clone()}
                            onchange={link.callback(|e: Event| {
                                Msg::DatePicked(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">{ "Time" }</label>
                    <input
                        type="time"
                        name="time"
                        required={true}
                        class={input_class}
                        value={form.time.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::TimeChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">{ "Notes (Optional)" }</label>
                    <input
                        type="text"
                        name="notes"
                        placeholder="Any special requests..."
                        class={input_class}
                        value={form.notes.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::NotesChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
                <div class="md:col-span-3 flex items-center gap-4">
                    <button
                        type="submit"
                        disabled={view.submitting}
                        class="bg-blue-600 hover:bg-blue-700 text-white font-semibold py-3 px-8 rounded-lg transition duration-200"
                    >
                        { if view.submitting { "Saving..." } else { "Create Reservation" } }
                    </button>
                    if let Some(error) = &view.form_error {
                        <span class="text-sm text-red-600">{ error.clone() }</span>
                    }
                </div>
            </form>
        </div>
    }
}

fn build_filter(view: &ReservationView, link: &Scope<ReservationView>) -> Html {
    let selected = view.filter.map(ReservationStatus::as_str).unwrap_or("all");
    html! {
        <select
            class="border border-gray-300 rounded-md px-3 py-1 text-sm"
            onchange={link.callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                Msg::SetFilter(match value.as_str() {
                    "all" => None,
                    other => Some(ReservationStatus::from_wire(other)),
                })
            })}
        >
            <option value="all" selected={selected == "all"}>{ "All statuses" }</option>
            { for ReservationStatus::FILTERABLE.iter().map(|status| html! {
                <option value={status.as_str()} selected={selected == status.as_str()}>
                    { status.label() }
                </option>
            }) }
        </select>
    }
}

fn build_list(view: &ReservationView, items: &[Reservation], link: &Scope<ReservationView>) -> Html {
    let body = if items.is_empty() {
        html! {
            <div class="text-center py-12">
                <div class="text-gray-500 text-lg">{ "No reservations yet" }</div>
                <p class="text-gray-400 mt-2">{ "Create your first reservation above!" }</p>
            </div>
        }
    } else {
        html! {
            <div class="divide-y divide-gray-200">
                { for items.iter().map(|reservation| build_row(reservation, link)) }
            </div>
        }
    };

    html! {
        <div class="bg-white rounded-lg shadow overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 bg-gray-50 flex justify-between items-center">
                <h2 class="text-xl font-semibold text-gray-800">
                    { format!("Your Reservations ({})", items.len()) }
                </h2>
                <div class="flex items-center gap-3">
                    if view.store.is_loading() {
                        <span class="text-xs text-gray-400">{ "Refreshing..." }</span>
                    }
                    { build_filter(view, link) }
                </div>
            </div>
            { body }
        </div>
    }
}

fn build_row(reservation: &Reservation, link: &Scope<ReservationView>) -> Html {
    let id = reservation.id;
    let start = reservation.start_time.display();
    let end = reservation.end_time.display();
    let created = reservation.created_at.display();

    html! {
        <div key={id.to_string()} class="p-6 hover:bg-gray-50 transition duration-200">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-4">
                    <div class="flex-shrink-0">
                        <div class="h-12 w-12 rounded-full bg-blue-500 flex items-center justify-center">
                            <span class="text-white font-semibold text-lg">
                                { reservation.start_time.day_of_month() }
                            </span>
                        </div>
                    </div>
                    <div>
                        <div class="text-lg font-semibold text-gray-900">
                            { reservation.start_time.long_date() }
                        </div>
                        <div class="text-gray-600">
                            { format!("{} - {} • ID: {}", start.time, end.time, id) }
                            if let Some(customer) = customer_label(reservation) {
                                <span>{ format!(" • Customer: {}", customer) }</span>
                            }
                        </div>
                        if let Some(notes) = &reservation.notes {
                            <div class="text-sm text-gray-500 italic">{ notes.clone() }</div>
                        }
                    </div>
                </div>
                <div class="text-right space-y-1">
                    { badge(reservation.status.category(), reservation.status.label()) }
                    <div class="text-xs text-gray-500">{ format!("Created: {}", created.date) }</div>
                    <div class="space-x-2">
                        { for reservation.status.transitions().iter().map(|next| {
                            let next = *next;
                            html! {
                                <button
                                    class="bg-blue-600 hover:bg-blue-700 text-white px-3 py-1 rounded-md text-xs"
                                    onclick={link.callback(move |_| Msg::ChangeStatus(id, next))}
                                >
                                    { action_label(next) }
                                </button>
                            }
                        }) }
                        <button
                            class="bg-red-600 hover:bg-red-700 text-white px-3 py-1 rounded-md text-xs"
                            onclick={link.callback(move |_| Msg::Delete(id))}
                        >
                            { "Delete" }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn customer_label(reservation: &Reservation) -> Option<String> {
    match (&reservation.customer_name, reservation.customer) {
        (Some(name), _) => Some(name.clone()),
        (None, Some(id)) => Some(format!("#{}", id)),
        (None, None) => None,
    }
}

fn action_label(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Confirmed => "Confirm",
        ReservationStatus::Completed => "Complete",
        ReservationStatus::Cancelled => "Cancel",
        _ => status.label(),
    }
}
