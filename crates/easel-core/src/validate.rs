//! Field checks applied by the store before anything is written.

use crate::{
    Canvas, Element, ElementDraft, FillStyle, Fixed, ShapeProps, StrokeStyle, TextStyle,
    ValidationError,
};

/// `#` followed by exactly six hex digits.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

fn check_color(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_hex_color(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor {
            field,
            value: value.to_string(),
        })
    }
}

// Numbers share the range of persisted geometry so nothing saturates on save.
fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if Fixed::in_range(value) && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            expected: "a positive number no larger than 1e12",
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if Fixed::in_range(value) && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            expected: "between 0 and 1e12",
        })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if Fixed::in_range(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            expected: "a finite number no larger than 1e12",
        })
    }
}

fn check_opacity(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            expected: "between 0 and 1",
        })
    }
}

fn check_fill(fill: &FillStyle) -> Result<(), ValidationError> {
    check_color("fill.color", &fill.color)?;
    check_opacity("fill.opacity", fill.opacity)
}

fn check_stroke(stroke: &StrokeStyle) -> Result<(), ValidationError> {
    check_color("stroke.color", &stroke.color)?;
    check_non_negative("stroke.width", stroke.width)?;
    check_opacity("stroke.opacity", stroke.opacity)
}

fn check_text_style(style: &TextStyle) -> Result<(), ValidationError> {
    if style.font_family.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: "textStyle.fontFamily",
        });
    }
    check_positive("textStyle.fontSize", style.font_size)?;
    check_positive("textStyle.lineHeight", style.line_height)?;
    if !(100..=900).contains(&style.font_weight) {
        return Err(ValidationError::OutOfRange {
            field: "textStyle.fontWeight",
            value: f64::from(style.font_weight),
            expected: "between 100 and 900",
        });
    }
    Ok(())
}

/// Check a draft (or the draft part of a patched element).
pub fn validate_draft(draft: &ElementDraft) -> Result<(), ValidationError> {
    check_finite("position.x", draft.position.x)?;
    check_finite("position.y", draft.position.y)?;

    match (&draft.shape, draft.size) {
        (ShapeProps::Line { .. }, Some(_)) => return Err(ValidationError::LineWithSize),
        (_, Some(size)) => {
            check_positive("size.width", size.width)?;
            check_positive("size.height", size.height)?;
        }
        (_, None) if draft.fill.is_some() => {
            return Err(ValidationError::MissingSize(draft.element_type().as_str()));
        }
        _ => {}
    }

    match &draft.shape {
        ShapeProps::Rectangle { border_radius } => {
            check_non_negative("borderRadius", *border_radius)?;
        }
        ShapeProps::Line { x1, y1, x2, y2 } => {
            for (field, value) in [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)] {
                check_finite(field, *value)?;
            }
        }
        ShapeProps::Text { max_width, .. } => {
            if let Some(width) = max_width {
                check_positive("maxWidth", *width)?;
            }
        }
        ShapeProps::Circle => {}
    }

    if let Some(fill) = &draft.fill {
        check_fill(fill)?;
    }
    if let Some(stroke) = &draft.stroke {
        check_stroke(stroke)?;
    }
    if let Some(style) = &draft.text_style {
        check_text_style(style)?;
    }
    Ok(())
}

/// Check a stored element: its draft plus rotation.
pub fn validate_element(element: &Element) -> Result<(), ValidationError> {
    check_finite("rotation", element.rotation)?;
    validate_draft(&element.draft)
}

pub fn validate_canvas(canvas: &Canvas) -> Result<(), ValidationError> {
    if canvas.name.trim().is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }
    check_positive("width", canvas.width)?;
    check_positive("height", canvas.height)?;
    check_positive("zoom", canvas.zoom)?;
    check_color("backgroundColor", &canvas.background_color)
}
