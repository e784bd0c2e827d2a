//! Prompt-driven element generation.
//!
//! [`generate`] turns free text into element drafts with a deterministic
//! keyword matcher. [`service`] and [`chat`] run it against a canvas store.

mod build;
pub mod chat;
pub mod palette;
pub mod parse;
pub mod placement;
pub mod service;

use easel_core::{ContextElement, ElementDraft};

use crate::parse::Prompt;

pub use chat::{send_message, ChatExchange};
pub use service::{generate_elements, GenerateRequest};

/// Derive element drafts from a prompt.
///
/// Pure and total: the same arguments always give the same drafts, and a
/// prompt with no recognised keyword still yields a default rectangle. When
/// `context` is non-empty, drafts are shifted away from existing content
/// (see [`placement::adjust`]).
pub fn generate(
    prompt: &str,
    canvas_width: f64,
    canvas_height: f64,
    context: &[ContextElement],
) -> Vec<ElementDraft> {
    let prompt = Prompt::new(prompt);
    let detected = parse::detect(&prompt);
    let centre = build::centre(canvas_width, canvas_height);

    let mut drafts = vec![build::build(detected, &prompt, centre)];
    placement::adjust(&mut drafts, context);

    log::debug!(
        "generated {} draft(s) ({:?}) from {:?}",
        drafts.len(),
        detected,
        prompt.lowered()
    );
    drafts
}
