pub mod reservations;
pub mod ui;
pub mod users;
