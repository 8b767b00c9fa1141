pub mod badge;
pub mod modal;
pub mod spinner;
pub mod table;
pub mod toast;
