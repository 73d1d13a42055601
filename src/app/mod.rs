//! Core application modules for postdeck.
//!
//! # Module Organization
//!
//! - [`carousel`] - Input model, field enums, prompt assembly and the typed
//!   result shape
//! - [`agent_client`] - HTTP client for the external generation agent
//!   service, including envelope validation
//! - [`generation`] - Background generation lifecycle (worker thread +
//!   channel updates)
//! - [`notifications`] - Notification system for user feedback
//! - [`dashui`] - Complete user interface implementation
//!
//! # Architecture
//!
//! The application follows a simple layered architecture: [`carousel`] owns
//! the data model, [`agent_client`] talks to the outside world, [`generation`]
//! bridges the blocking request onto a worker thread, and [`dashui`]
//! coordinates all of it from the top-level [`PostdeckApp`] state container.

pub mod agent_client;
pub mod carousel;
pub mod dashui;
pub mod generation;
pub mod notifications;

pub use dashui::app::PostdeckApp;
