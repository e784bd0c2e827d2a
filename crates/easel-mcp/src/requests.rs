use easel_core::{CanvasPatch, ElementDraft, ElementPatch};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CanvasIdRequest {
    /// ID of the canvas
    pub canvas_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateCanvasRequest {
    /// Display name for the canvas
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Canvas width. Default comes from settings (1920).
    pub width: Option<f64>,
    /// Canvas height. Default comes from settings (1080).
    pub height: Option<f64>,
    /// Background as a hex color, e.g. "#FFFFFF". Default comes from settings.
    pub background_color: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateCanvasRequest {
    /// ID of the canvas to update
    pub canvas_id: String,
    /// Fields to change: name, description, width, height, backgroundColor, zoom. Omitted fields are kept; a null description clears it.
    pub changes: CanvasPatch,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddElementsRequest {
    /// ID of the canvas to add elements to
    pub canvas_id: String,
    /// Elements to add. Each has "type" (rectangle, circle, line, text), its shape fields (borderRadius; x1/y1/x2/y2; content/maxWidth), "position", and optional "size", "fill", "stroke", "textStyle". Lines have no size.
    pub elements: Vec<ElementDraft>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateElementItem {
    /// ID of the element to update
    pub element_id: String,
    /// Fields to change. Omitted fields are kept; null clears size, fill, stroke or textStyle.
    pub changes: ElementPatch,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateElementsRequest {
    /// ID of the canvas
    pub canvas_id: String,
    /// Element updates to apply, in order
    pub elements: Vec<UpdateElementItem>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteElementsRequest {
    /// ID of the canvas
    pub canvas_id: String,
    /// IDs of elements to delete. Unknown IDs are ignored.
    pub element_ids: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateElementsRequest {
    /// ID of the canvas to generate on
    pub canvas_id: String,
    /// Free-text description, e.g. "Add a red circle" or "a bold title that says 'Welcome'"
    pub prompt: String,
    /// Existing element IDs to place the new elements around. Unknown IDs are ignored.
    pub context_element_ids: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SendMessageRequest {
    /// ID of the canvas whose chat to post to
    pub canvas_id: String,
    /// Message text. Elements are generated from it and a reply is recorded.
    pub content: String,
    /// Existing element IDs to place the new elements around
    pub context_element_ids: Option<Vec<String>>,
}
