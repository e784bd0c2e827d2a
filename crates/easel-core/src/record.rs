//! On-disk layout of a canvas file.
//!
//! Geometry and zoom are written as `Fixed` decimal strings. Style values
//! (opacity, stroke width, font size) are written as plain JSON numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Canvas, ChatMessage, Element, ElementDraft, FillStyle, Fixed, Point, ShapeProps, Size,
    StrokeStyle, TextStyle,
};

/// A canvas with everything it owns, as held in memory by the store.
#[derive(Debug, Clone)]
pub(crate) struct Document {
    pub canvas: Canvas,
    pub elements: Vec<Element>,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CanvasFile {
    canvas: CanvasRecord,
    #[serde(default)]
    elements: Vec<ElementRecord>,
    #[serde(default)]
    messages: Vec<MessageRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CanvasRecord {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    width: Fixed,
    height: Fixed,
    background_color: String,
    zoom: Fixed,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PointRecord {
    x: Fixed,
    y: Fixed,
}

#[derive(Debug, Serialize, Deserialize)]
struct SizeRecord {
    width: Fixed,
    height: Fixed,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ShapeRecord {
    Rectangle {
        #[serde(rename = "borderRadius")]
        border_radius: Fixed,
    },
    Circle,
    Line {
        x1: Fixed,
        y1: Fixed,
        x2: Fixed,
        y2: Fixed,
    },
    Text {
        content: String,
        #[serde(rename = "maxWidth", default, skip_serializing_if = "Option::is_none")]
        max_width: Option<Fixed>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementRecord {
    id: String,
    #[serde(flatten)]
    shape: ShapeRecord,
    position: PointRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<SizeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill: Option<FillStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stroke: Option<StrokeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_style: Option<TextStyle>,
    rotation: Fixed,
    z_index: i64,
    #[serde(default)]
    locked: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Messages are stored without their canvas id, which the file name implies.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageRecord {
    id: String,
    role: crate::ChatRole,
    content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    element_ids: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<Point> for PointRecord {
    fn from(p: Point) -> Self {
        Self {
            x: p.x.into(),
            y: p.y.into(),
        }
    }
}

impl From<PointRecord> for Point {
    fn from(p: PointRecord) -> Self {
        Point::new(p.x.into(), p.y.into())
    }
}

impl From<Size> for SizeRecord {
    fn from(s: Size) -> Self {
        Self {
            width: s.width.into(),
            height: s.height.into(),
        }
    }
}

impl From<SizeRecord> for Size {
    fn from(s: SizeRecord) -> Self {
        Size::new(s.width.into(), s.height.into())
    }
}

impl From<&ShapeProps> for ShapeRecord {
    fn from(shape: &ShapeProps) -> Self {
        match shape {
            ShapeProps::Rectangle { border_radius } => ShapeRecord::Rectangle {
                border_radius: (*border_radius).into(),
            },
            ShapeProps::Circle => ShapeRecord::Circle,
            ShapeProps::Line { x1, y1, x2, y2 } => ShapeRecord::Line {
                x1: (*x1).into(),
                y1: (*y1).into(),
                x2: (*x2).into(),
                y2: (*y2).into(),
            },
            ShapeProps::Text { content, max_width } => ShapeRecord::Text {
                content: content.clone(),
                max_width: max_width.map(Fixed::from),
            },
        }
    }
}

impl From<ShapeRecord> for ShapeProps {
    fn from(shape: ShapeRecord) -> Self {
        match shape {
            ShapeRecord::Rectangle { border_radius } => ShapeProps::Rectangle {
                border_radius: border_radius.into(),
            },
            ShapeRecord::Circle => ShapeProps::Circle,
            ShapeRecord::Line { x1, y1, x2, y2 } => ShapeProps::Line {
                x1: x1.into(),
                y1: y1.into(),
                x2: x2.into(),
                y2: y2.into(),
            },
            ShapeRecord::Text { content, max_width } => ShapeProps::Text {
                content,
                max_width: max_width.map(f64::from),
            },
        }
    }
}

impl From<&Element> for ElementRecord {
    fn from(e: &Element) -> Self {
        Self {
            id: e.id.clone(),
            shape: (&e.draft.shape).into(),
            position: e.draft.position.into(),
            size: e.draft.size.map(SizeRecord::from),
            fill: e.draft.fill.clone(),
            stroke: e.draft.stroke.clone(),
            text_style: e.draft.text_style.clone(),
            rotation: e.rotation.into(),
            z_index: e.z_index,
            locked: e.locked,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl ElementRecord {
    fn into_element(self, canvas_id: &str) -> Element {
        Element {
            id: self.id,
            canvas_id: canvas_id.to_string(),
            draft: ElementDraft {
                shape: self.shape.into(),
                position: self.position.into(),
                size: self.size.map(Size::from),
                fill: self.fill,
                stroke: self.stroke,
                text_style: self.text_style,
            },
            rotation: self.rotation.into(),
            z_index: self.z_index,
            locked: self.locked,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&Canvas> for CanvasRecord {
    fn from(c: &Canvas) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            width: c.width.into(),
            height: c.height.into(),
            background_color: c.background_color.clone(),
            zoom: c.zoom.into(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<CanvasRecord> for Canvas {
    fn from(c: CanvasRecord) -> Self {
        Canvas {
            id: c.id,
            name: c.name,
            description: c.description,
            width: c.width.into(),
            height: c.height.into(),
            background_color: c.background_color,
            zoom: c.zoom.into(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// The element exactly as a canvas file will hold it: geometry and rotation
/// rounded to [`Fixed`] precision.
pub(crate) fn stored_element(element: &Element) -> Element {
    ElementRecord::from(element).into_element(&element.canvas_id)
}

/// The canvas exactly as a canvas file will hold it.
pub(crate) fn stored_canvas(canvas: &Canvas) -> Canvas {
    CanvasRecord::from(canvas).into()
}

impl From<&Document> for CanvasFile {
    fn from(doc: &Document) -> Self {
        Self {
            canvas: (&doc.canvas).into(),
            elements: doc.elements.iter().map(ElementRecord::from).collect(),
            messages: doc
                .messages
                .iter()
                .map(|m| MessageRecord {
                    id: m.id.clone(),
                    role: m.role,
                    content: m.content.clone(),
                    element_ids: m.element_ids.clone(),
                    created_at: m.created_at,
                })
                .collect(),
        }
    }
}

impl From<CanvasFile> for Document {
    fn from(file: CanvasFile) -> Self {
        let canvas = Canvas::from(file.canvas);
        let elements = file
            .elements
            .into_iter()
            .map(|e| e.into_element(&canvas.id))
            .collect();
        let messages = file
            .messages
            .into_iter()
            .map(|m| ChatMessage {
                id: m.id,
                canvas_id: canvas.id.clone(),
                role: m.role,
                content: m.content,
                element_ids: m.element_ids,
                created_at: m.created_at,
            })
            .collect();
        Document {
            canvas,
            elements,
            messages,
        }
    }
}
