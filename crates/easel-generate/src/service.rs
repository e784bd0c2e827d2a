use serde::{Deserialize, Serialize};

use easel_core::{CanvasStore, ContextElement, Element, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub canvas_id: String,
    pub prompt: String,
    /// Existing elements to place the new ones around. Unknown ids are ignored.
    #[serde(default)]
    pub context_element_ids: Vec<String>,
}

impl GenerateRequest {
    pub fn new(canvas_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            prompt: prompt.into(),
            context_element_ids: Vec::new(),
        }
    }

    pub fn with_context(mut self, ids: Vec<String>) -> Self {
        self.context_element_ids = ids;
        self
    }
}

/// Generate elements from a prompt and store them on the canvas.
///
/// Fails with `CanvasNotFound` for an unknown canvas; store errors pass
/// through unchanged. The returned elements carry their new ids.
pub fn generate_elements<S>(store: &S, req: &GenerateRequest) -> Result<Vec<Element>>
where
    S: CanvasStore + ?Sized,
{
    let canvas = store.get_canvas(&req.canvas_id)?;

    let context: Vec<ContextElement> = if req.context_element_ids.is_empty() {
        Vec::new()
    } else {
        store
            .find_elements(&canvas.id, &req.context_element_ids)?
            .iter()
            .map(ContextElement::from)
            .collect()
    };
    if context.len() < req.context_element_ids.len() {
        log::debug!(
            "resolved {} of {} context element(s) on canvas {}",
            context.len(),
            req.context_element_ids.len(),
            canvas.id
        );
    }

    let drafts = crate::generate(&req.prompt, canvas.width, canvas.height, &context);
    let elements = store.insert_elements(&canvas.id, drafts)?;

    log::info!(
        "generated {} element(s) on canvas {}",
        elements.len(),
        canvas.id
    );
    Ok(elements)
}
