//! Application controller and action dispatch

mod action;
mod controller;


pub use action::{Action, Dispatched};
pub use controller::{Activity, App, AppError, Ui, ViewState};
