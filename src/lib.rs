//! postdeck - LinkedIn Carousel Post Generator
//!
//! postdeck is a desktop application for generating LinkedIn carousel posts.
//! The user describes the post they want through a structured form (topic,
//! audience, goal, tone, depth, CTA), postdeck composes a natural-language
//! prompt and sends it to an external AI agent service, and the structured
//! result is rendered across tabbed views with copy-to-clipboard affordances
//! for every piece.
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::dashui`]): egui-based desktop interface built
//!   around a single form/output surface
//! - **Generation** ([`app::generation`]): background worker threads driving
//!   one agent request per invocation, reporting over channels
//! - **Agent Integration** ([`app::agent_client`]): the single outbound HTTP
//!   call, with schema validation at the network boundary
//! - **Data Model** ([`app::carousel`]): form input, prompt assembly and the
//!   typed carousel result
//!
//! The main entry point is [`PostdeckApp`], which owns all mutable UI state
//! and coordinates the panels each frame.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub use app::PostdeckApp;
