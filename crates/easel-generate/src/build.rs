//! Per-type element builders. Every shape is centred on the canvas midpoint.

use easel_core::{
    ElementDraft, FillStyle, LineCap, LineJoin, Point, ShapeProps, Size, StrokeStyle, TextAlign,
    TextStyle,
};

use crate::palette;
use crate::parse::{Detected, Prompt};

pub const RECTANGLE_SIZE: Size = Size {
    width: 150.0,
    height: 100.0,
};
pub const SQUARE_SIZE: Size = Size {
    width: 100.0,
    height: 100.0,
};
pub const ROUNDED_RADIUS: f64 = 10.0;
pub const CIRCLE_RADIUS: f64 = 50.0;
pub const LINE_LENGTH: f64 = 150.0;
pub const TEXT_BOX_WIDTH: f64 = 200.0;
pub const DEFAULT_TEXT: &str = "Sample Text";
pub const FONT_FAMILY: &str = "Inter, sans-serif";

const OUTLINE_COLOR: &str = "#000000";
const FALLBACK_OUTLINE_COLOR: &str = "#1E40AF";
const STROKE_WIDTH: f64 = 2.0;

/// Canvas midpoint.
pub fn centre(canvas_width: f64, canvas_height: f64) -> Point {
    Point::new(canvas_width / 2.0, canvas_height / 2.0)
}

pub fn build(detected: Detected, prompt: &Prompt<'_>, centre: Point) -> ElementDraft {
    let color = palette::resolve_color(prompt);
    match detected {
        Detected::Rectangle => rectangle(prompt, centre, color),
        Detected::Circle => circle(centre, color),
        Detected::Line => line(centre, color),
        Detected::Text => text(prompt, centre, color),
        Detected::Fallback => fallback(centre, color),
    }
}

fn outline(color: &str) -> StrokeStyle {
    StrokeStyle {
        color: color.to_string(),
        width: STROKE_WIDTH,
        opacity: 1.0,
        cap: LineCap::Butt,
        join: LineJoin::Miter,
    }
}

fn centred_at(centre: Point, size: Size) -> Point {
    Point::new(centre.x - size.width / 2.0, centre.y - size.height / 2.0)
}

fn rectangle(prompt: &Prompt<'_>, centre: Point, color: &str) -> ElementDraft {
    let size = if prompt.mentions("square") {
        SQUARE_SIZE
    } else {
        RECTANGLE_SIZE
    };
    let border_radius = if prompt.mentions("rounded") {
        ROUNDED_RADIUS
    } else {
        0.0
    };
    ElementDraft {
        shape: ShapeProps::Rectangle { border_radius },
        position: centred_at(centre, size),
        size: Some(size),
        fill: Some(FillStyle::solid(color)),
        stroke: Some(outline(OUTLINE_COLOR)),
        text_style: None,
    }
}

fn circle(centre: Point, color: &str) -> ElementDraft {
    let diameter = CIRCLE_RADIUS * 2.0;
    ElementDraft {
        shape: ShapeProps::Circle,
        position: Point::new(centre.x - CIRCLE_RADIUS, centre.y - CIRCLE_RADIUS),
        size: Some(Size::new(diameter, diameter)),
        fill: Some(FillStyle::solid(color)),
        stroke: Some(outline(OUTLINE_COLOR)),
        text_style: None,
    }
}

fn line(centre: Point, color: &str) -> ElementDraft {
    let half = LINE_LENGTH / 2.0;
    let (x1, y1) = (centre.x - half, centre.y);
    let (x2, y2) = (centre.x + half, centre.y);
    ElementDraft {
        shape: ShapeProps::Line { x1, y1, x2, y2 },
        position: Point::new(x1.min(x2), y1.min(y2)),
        size: None,
        fill: None,
        stroke: Some(StrokeStyle {
            color: color.to_string(),
            width: STROKE_WIDTH,
            opacity: 1.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }),
        text_style: None,
    }
}

fn font_size(prompt: &Prompt<'_>) -> f64 {
    if prompt.mentions("title") {
        24.0
    } else if prompt.mentions("large") {
        20.0
    } else {
        16.0
    }
}

fn text(prompt: &Prompt<'_>, centre: Point, color: &str) -> ElementDraft {
    let font_size = font_size(prompt);
    let font_weight = if prompt.mentions("bold") { 700 } else { 400 };
    let size = Size::new(TEXT_BOX_WIDTH, font_size * 1.5);
    let content = prompt.quoted_text().unwrap_or(DEFAULT_TEXT).to_string();
    ElementDraft {
        shape: ShapeProps::Text {
            content,
            max_width: Some(TEXT_BOX_WIDTH),
        },
        position: centred_at(centre, size),
        size: Some(size),
        fill: Some(FillStyle::solid(color)),
        stroke: None,
        text_style: Some(TextStyle {
            font_family: FONT_FAMILY.to_string(),
            font_size,
            font_weight,
            text_align: TextAlign::Left,
            line_height: 1.2,
        }),
    }
}

/// Rectangle produced when no type keyword matched.
fn fallback(centre: Point, color: &str) -> ElementDraft {
    ElementDraft {
        shape: ShapeProps::Rectangle { border_radius: 0.0 },
        position: centred_at(centre, RECTANGLE_SIZE),
        size: Some(RECTANGLE_SIZE),
        fill: Some(FillStyle::solid(color)),
        stroke: Some(outline(FALLBACK_OUTLINE_COLOR)),
        text_style: None,
    }
}
