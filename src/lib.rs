//! Interactive pizza-order widget: flavor and border chips, a wrapping size
//! cycler, and a live circular diagram of the current selection.

pub mod catalog;
pub mod gui;
pub mod order;
