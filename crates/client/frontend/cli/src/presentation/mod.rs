//! Terminal rendering layer: setup/teardown, layout, and widgets.
pub mod terminal;
pub mod ui;
pub mod widgets;
