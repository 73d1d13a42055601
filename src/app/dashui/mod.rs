//! Desktop user interface implementation for postdeck.
//!
//! The interface is a single main surface: the carousel input form on the
//! left ([`form_panel`]) and the generated output on the right
//! ([`output_panel`]), with a menu bar for theme/help/quit and a bottom
//! status bar fed by the notification manager. On narrow windows the two
//! panels swap in place of sitting side by side.
//!
//! [`app::PostdeckApp`] is the explicit state container: every piece of
//! mutable UI state (form input, held result, active tab, copy
//! confirmations, loading/output flags) lives in its fields and is passed
//! down into the panel modules — there is no process-wide singleton.

pub mod app;
pub mod copy_state;
pub mod form_panel;
pub mod help_window;
pub mod menu;
pub mod output_panel;
