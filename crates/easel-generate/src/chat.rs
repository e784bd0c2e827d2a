//! Chat messages that drive generation.

use serde::Serialize;

use easel_core::{
    CanvasStore, ChatMessage, Element, ElementDraft, NewChatMessage, Result, ShapeProps,
};

use crate::palette;
use crate::service::{generate_elements, GenerateRequest};

/// Everything one chat turn produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
    pub elements: Vec<Element>,
}

/// Record a user message, generate elements from it and record the reply.
///
/// The user message is stored before generation runs, so it stays in the log
/// even if storing the elements fails.
pub fn send_message<S>(
    store: &S,
    canvas_id: &str,
    content: &str,
    context_element_ids: Vec<String>,
) -> Result<ChatExchange>
where
    S: CanvasStore + ?Sized,
{
    let user_message = store.append_message(canvas_id, NewChatMessage::user(content))?;

    let req = GenerateRequest::new(canvas_id, content).with_context(context_element_ids);
    let elements = generate_elements(store, &req)?;

    let reply = reply_for(&elements);
    let ids = elements.iter().map(|e| e.id.clone()).collect();
    let assistant_message =
        store.append_message(canvas_id, NewChatMessage::assistant(reply, ids))?;

    Ok(ChatExchange {
        user_message,
        assistant_message,
        elements,
    })
}

fn reply_for(elements: &[Element]) -> String {
    let parts: Vec<String> = elements.iter().map(|e| describe(&e.draft)).collect();
    if parts.is_empty() {
        "Nothing was added.".to_string()
    } else {
        format!("Added {}.", parts.join(", "))
    }
}

/// Short description of a draft, e.g. `a red circle` or `text "Hello"`.
pub fn describe(draft: &ElementDraft) -> String {
    let color = draft
        .fill
        .as_ref()
        .map(|f| f.color.as_str())
        .or_else(|| draft.stroke.as_ref().map(|s| s.color.as_str()))
        .and_then(palette::color_name);

    match &draft.shape {
        ShapeProps::Text { content, .. } => format!("text \"{}\"", content),
        shape => {
            let noun = match shape {
                ShapeProps::Rectangle { border_radius } if *border_radius > 0.0 => {
                    "rounded rectangle"
                }
                _ => draft.element_type().as_str(),
            };
            match color {
                Some(name) => format!("{} {} {}", article(name), name, noun),
                None => format!("{} {}", article(noun), noun),
            }
        }
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
