//! Background generation lifecycle.
//!
//! One invocation spawns one worker thread which performs one agent request
//! and reports back over an `mpsc` channel. The UI polls the receiver every
//! frame, so the interface stays responsive while the request is in flight.
//! There is no cancellation: a spawned request runs to completion or failure.

use std::sync::mpsc;
use std::thread;
use tracing::{error, info};

use crate::app::agent_client::AgentClient;
use crate::app::carousel::{CarouselInput, CarouselResult};

/// Updates sent from a generation worker back to the UI thread.
///
/// `Started` is sent as soon as the worker begins; exactly one of
/// `Completed` or `Failed` follows and terminates the exchange. `Failed`
/// carries a user-displayable reason.
#[derive(Debug, Clone)]
pub enum GenerationUpdate {
    Started,
    Completed(CarouselResult),
    Failed(String),
}

impl GenerationUpdate {
    /// Whether this update ends the exchange.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GenerationUpdate::Started)
    }
}

/// Spawn a generation against the default agent service deployment.
pub fn spawn_generation(input: CarouselInput) -> mpsc::Receiver<GenerationUpdate> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        tx.send(GenerationUpdate::Started).unwrap_or_default();

        match AgentClient::new() {
            Ok(client) => run_generation(&tx, &client, &input),
            Err(e) => {
                error!("Failed to initialize agent client: {:#}", e);
                tx.send(GenerationUpdate::Failed(format!(
                    "Could not set up the agent connection: {e}"
                )))
                .unwrap_or_default();
            }
        }
    });

    rx
}

/// Spawn a generation using an already-constructed client.
pub fn spawn_generation_with(
    client: AgentClient,
    input: CarouselInput,
) -> mpsc::Receiver<GenerationUpdate> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        tx.send(GenerationUpdate::Started).unwrap_or_default();
        run_generation(&tx, &client, &input);
    });

    rx
}

fn run_generation(
    tx: &mpsc::Sender<GenerationUpdate>,
    client: &AgentClient,
    input: &CarouselInput,
) {
    info!("Generation started for topic: {}", preview(&input.topic));

    match client.generate_carousel(input) {
        Ok(result) => {
            info!(
                "Generation completed with {} slides",
                result.carousel_slides.len()
            );
            tx.send(GenerationUpdate::Completed(result))
                .unwrap_or_default();
        }
        Err(e) => {
            error!("Carousel generation failed: {:#}", e);
            tx.send(GenerationUpdate::Failed(format!("{e:#}")))
                .unwrap_or_default();
        }
    }
}

/// First few characters of the topic for log lines, without the full content.
fn preview(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(40)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[..end]
}
