pub mod error;
pub mod fixed;
pub mod patch;
mod record;
pub mod settings;
pub mod store;
pub mod validate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use error::{Result, StoreError, ValidationError};
pub use fixed::Fixed;
pub use patch::Patch;
pub use settings::Settings;
pub use store::{CanvasStore, FileStore};

// --- Element types ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Rectangle,
    Circle,
    Line,
    Text,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Rectangle => "rectangle",
            ElementType::Circle => "circle",
            ElementType::Line => "line",
            ElementType::Text => "text",
        }
    }
}

/// Canvas-space coordinates. No unit conversion is applied anywhere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, schemars::JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
pub struct FillStyle {
    /// Hex RGB color, e.g. "#3B82F6"
    pub color: String,
    /// Opacity in [0, 1]
    pub opacity: f64,
}

impl FillStyle {
    pub fn solid(color: &str) -> Self {
        Self {
            color: color.to_string(),
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
pub struct StrokeStyle {
    /// Hex RGB color, e.g. "#000000"
    pub color: String,
    pub width: f64,
    /// Opacity in [0, 1]
    pub opacity: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    /// CSS font weight, 100 to 900
    pub font_weight: u16,
    pub text_align: TextAlign,
    pub line_height: f64,
}

/// Shape-specific properties. The `type` tag doubles as the element type, so
/// an element's type and its props can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeProps {
    Rectangle {
        #[serde(rename = "borderRadius", default)]
        border_radius: f64,
    },
    Circle,
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Text {
        content: String,
        #[serde(rename = "maxWidth", default, skip_serializing_if = "Option::is_none")]
        max_width: Option<f64>,
    },
}

impl ShapeProps {
    pub fn element_type(&self) -> ElementType {
        match self {
            ShapeProps::Rectangle { .. } => ElementType::Rectangle,
            ShapeProps::Circle => ElementType::Circle,
            ShapeProps::Line { .. } => ElementType::Line,
            ShapeProps::Text { .. } => ElementType::Text,
        }
    }
}

/// An element description that has not been stored yet. It carries no id,
/// canvas reference or timestamps; the store adds those on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElementDraft {
    #[serde(flatten)]
    pub shape: ShapeProps,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl ElementDraft {
    pub fn element_type(&self) -> ElementType {
        self.shape.element_type()
    }

    /// Move the draft by (dx, dy). Line endpoints move with the position.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.x += dx;
        self.position.y += dy;
        if let ShapeProps::Line { x1, y1, x2, y2 } = &mut self.shape {
            *x1 += dx;
            *y1 += dy;
            *x2 += dx;
            *y2 += dy;
        }
    }
}

/// Read-only view of a stored element, used to bias placement of new drafts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ContextElement {
    pub position: Point,
    pub size: Option<Size>,
}

impl From<&Element> for ContextElement {
    fn from(element: &Element) -> Self {
        Self {
            position: element.draft.position,
            size: element.draft.size,
        }
    }
}

// --- Stored entities ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub width: f64,
    pub height: f64,
    pub background_color: String,
    pub zoom: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCanvas {
    pub name: String,
    pub description: Option<String>,
    pub width: f64,
    pub height: f64,
    pub background_color: String,
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanvasPatch {
    #[serde(default)]
    pub name: Option<String>,
    /// Absent keeps the description, null clears it
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub zoom: Option<f64>,
}

/// A persisted element. Matches the draft it was created from plus identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    pub canvas_id: String,
    #[serde(flatten)]
    pub draft: ElementDraft,
    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f64,
    pub z_index: i64,
    #[serde(default)]
    pub locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Element {
    pub fn element_type(&self) -> ElementType {
        self.draft.element_type()
    }
}

/// Partial element update. `Patch` fields tell "leave alone" (absent) apart
/// from "clear" (null).
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    /// Replaces the shape props, which may change the element type
    #[serde(default)]
    pub shape: Option<ShapeProps>,
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(default)]
    pub size: Patch<Size>,
    #[serde(default)]
    pub fill: Patch<FillStyle>,
    #[serde(default)]
    pub stroke: Patch<StrokeStyle>,
    #[serde(default)]
    pub text_style: Patch<TextStyle>,
    #[serde(default)]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub z_index: Option<i64>,
    #[serde(default)]
    pub locked: Option<bool>,
}

impl ElementPatch {
    /// True when the patch changes anything besides the lock flag.
    pub fn touches_content(&self) -> bool {
        self.shape.is_some()
            || self.position.is_some()
            || !self.size.is_unset()
            || !self.fill.is_unset()
            || !self.stroke.is_unset()
            || !self.text_style.is_unset()
            || self.rotation.is_some()
            || self.z_index.is_some()
    }

    pub fn apply(self, element: &mut Element) {
        let draft = &mut element.draft;
        if let Some(shape) = self.shape {
            draft.shape = shape;
        }
        if let Some(position) = self.position {
            draft.position = position;
        }
        self.size.apply(&mut draft.size);
        self.fill.apply(&mut draft.fill);
        self.stroke.apply(&mut draft.stroke);
        self.text_style.apply(&mut draft.text_style);
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        if let Some(z) = self.z_index {
            element.z_index = z;
        }
        if let Some(locked) = self.locked {
            element.locked = locked;
        }
    }
}

// --- Chat ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub canvas_id: String,
    pub role: ChatRole,
    pub content: String,
    /// Elements generated in response to this message
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub element_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub element_ids: Vec<String>,
}

impl NewChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            element_ids: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, element_ids: Vec<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            element_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_draft() -> ElementDraft {
        ElementDraft {
            shape: ShapeProps::Line {
                x1: 10.0,
                y1: 20.0,
                x2: 160.0,
                y2: 20.0,
            },
            position: Point::new(10.0, 20.0),
            size: None,
            fill: None,
            stroke: None,
            text_style: None,
        }
    }

    #[test]
    fn draft_serializes_type_tag_flat() {
        let draft = ElementDraft {
            shape: ShapeProps::Rectangle { border_radius: 10.0 },
            position: Point::new(1.0, 2.0),
            size: Some(Size::new(150.0, 100.0)),
            fill: Some(FillStyle::solid("#EF4444")),
            stroke: None,
            text_style: None,
        };
        let val = serde_json::to_value(&draft).unwrap();
        assert_eq!(val["type"], "rectangle");
        assert_eq!(val["borderRadius"], 10.0);
        assert_eq!(val["size"]["width"], 150.0);
        assert!(val.get("stroke").is_none());

        let back: ElementDraft = serde_json::from_value(val).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn translate_moves_line_endpoints() {
        let mut draft = line_draft();
        draft.translate(50.0, 50.0);
        assert_eq!(draft.position, Point::new(60.0, 70.0));
        assert_eq!(
            draft.shape,
            ShapeProps::Line {
                x1: 60.0,
                y1: 70.0,
                x2: 210.0,
                y2: 70.0
            }
        );
    }

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let patch: ElementPatch = serde_json::from_str(r#"{"fill": null}"#).unwrap();
        assert_eq!(patch.fill, Patch::Null);
        assert!(patch.stroke.is_unset());
        assert!(patch.touches_content());

        let lock_only: ElementPatch = serde_json::from_str(r#"{"locked": false}"#).unwrap();
        assert!(!lock_only.touches_content());
    }
}
