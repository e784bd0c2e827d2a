//! Tool bodies. Each returns the text sent back to the client.

use easel_core::{CanvasStore, NewCanvas, Result, Settings};
use easel_generate::{send_message, GenerateRequest};
use serde::Serialize;

use crate::requests::*;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn list_canvases<S: CanvasStore + ?Sized>(store: &S) -> Result<String> {
    let canvases = store.list_canvases()?;
    if canvases.is_empty() {
        return Ok("No canvases found. Use create_canvas to create one.".to_string());
    }
    Ok(canvases
        .iter()
        .map(|c| format!("{}  {} ({}x{})", c.id, c.name, c.width, c.height))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn create_canvas<S: CanvasStore + ?Sized>(
    store: &S,
    settings: &Settings,
    req: CreateCanvasRequest,
) -> Result<String> {
    let canvas = store.create_canvas(NewCanvas {
        name: req.name,
        description: req.description,
        width: req.width.unwrap_or(settings.default_canvas_width),
        height: req.height.unwrap_or(settings.default_canvas_height),
        background_color: req
            .background_color
            .unwrap_or_else(|| settings.default_background_color.clone()),
    })?;
    to_json(&canvas)
}

/// Canvas with its elements, as one JSON object.
pub fn get_canvas<S: CanvasStore + ?Sized>(store: &S, req: CanvasIdRequest) -> Result<String> {
    let canvas = store.get_canvas(&req.canvas_id)?;
    let elements = store.list_elements(&req.canvas_id)?;
    to_json(&serde_json::json!({
        "canvas": canvas,
        "elements": elements,
    }))
}

pub fn update_canvas<S: CanvasStore + ?Sized>(
    store: &S,
    req: UpdateCanvasRequest,
) -> Result<String> {
    let canvas = store.update_canvas(&req.canvas_id, req.changes)?;
    to_json(&canvas)
}

pub fn delete_canvas<S: CanvasStore + ?Sized>(store: &S, req: CanvasIdRequest) -> Result<String> {
    store.delete_canvas(&req.canvas_id)?;
    Ok(format!("Deleted canvas {}", req.canvas_id))
}

pub fn add_elements<S: CanvasStore + ?Sized>(store: &S, req: AddElementsRequest) -> Result<String> {
    let elements = store.insert_elements(&req.canvas_id, req.elements)?;
    to_json(&elements)
}

/// Updates are applied one by one; the first failure stops the batch and
/// earlier updates stay applied.
pub fn update_elements<S: CanvasStore + ?Sized>(
    store: &S,
    req: UpdateElementsRequest,
) -> Result<String> {
    let mut updated = Vec::with_capacity(req.elements.len());
    for item in req.elements {
        updated.push(store.update_element(&req.canvas_id, &item.element_id, item.changes)?);
    }
    to_json(&updated)
}

pub fn delete_elements<S: CanvasStore + ?Sized>(
    store: &S,
    req: DeleteElementsRequest,
) -> Result<String> {
    let removed = store.delete_elements(&req.canvas_id, &req.element_ids)?;
    Ok(format!("Deleted {} element(s)", removed))
}

pub fn generate_elements<S: CanvasStore + ?Sized>(
    store: &S,
    req: GenerateElementsRequest,
) -> Result<String> {
    let request = GenerateRequest::new(req.canvas_id, req.prompt)
        .with_context(req.context_element_ids.unwrap_or_default());
    let elements = easel_generate::generate_elements(store, &request)?;
    to_json(&elements)
}

pub fn list_messages<S: CanvasStore + ?Sized>(store: &S, req: CanvasIdRequest) -> Result<String> {
    to_json(&store.list_messages(&req.canvas_id)?)
}

pub fn send_chat_message<S: CanvasStore + ?Sized>(
    store: &S,
    req: SendMessageRequest,
) -> Result<String> {
    let exchange = send_message(
        store,
        &req.canvas_id,
        &req.content,
        req.context_element_ids.unwrap_or_default(),
    )?;
    to_json(&exchange)
}

pub fn clear_messages<S: CanvasStore + ?Sized>(store: &S, req: CanvasIdRequest) -> Result<String> {
    let removed = store.clear_messages(&req.canvas_id)?;
    Ok(format!("Cleared {} message(s)", removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::{FileStore, StoreError};

    fn setup() -> (tempfile::TempDir, FileStore, String) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let text = create_canvas(
            &store,
            &Settings::default(),
            CreateCanvasRequest {
                name: "Board".to_string(),
                description: None,
                width: None,
                height: None,
                background_color: None,
            },
        )
        .unwrap();
        let canvas: serde_json::Value = serde_json::from_str(&text).unwrap();
        let id = canvas["id"].as_str().unwrap().to_string();
        (dir, store, id)
    }

    fn canvas_req(id: &str) -> CanvasIdRequest {
        CanvasIdRequest {
            canvas_id: id.to_string(),
        }
    }

    #[test]
    fn create_uses_settings_defaults() {
        let (_dir, store, id) = setup();
        let canvas = store.get_canvas(&id).unwrap();
        assert_eq!(canvas.width, 1920.0);
        assert_eq!(canvas.height, 1080.0);
        assert_eq!(canvas.background_color, "#FFFFFF");
        assert!(list_canvases(&store).unwrap().contains("Board (1920x1080)"));
    }

    #[test]
    fn empty_store_lists_hint() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(list_canvases(&store).unwrap().starts_with("No canvases found"));
    }

    #[test]
    fn add_elements_from_json_arguments() {
        let (_dir, store, id) = setup();
        let req: AddElementsRequest = serde_json::from_value(serde_json::json!({
            "canvas_id": id,
            "elements": [{
                "type": "line",
                "x1": 0, "y1": 0, "x2": 100, "y2": 0,
                "position": {"x": 0, "y": 0},
                "stroke": {"color": "#000000", "width": 1, "opacity": 1, "cap": "round", "join": "bevel"}
            }]
        }))
        .unwrap();
        add_elements(&store, req).unwrap();

        let out: serde_json::Value =
            serde_json::from_str(&get_canvas(&store, canvas_req(&id)).unwrap()).unwrap();
        assert_eq!(out["elements"][0]["type"], "line");
        assert_eq!(out["elements"][0]["canvasId"], id.as_str());
    }

    #[test]
    fn update_elements_clears_fill_with_null() {
        let (_dir, store, id) = setup();
        let generated = generate_elements(
            &store,
            GenerateElementsRequest {
                canvas_id: id.clone(),
                prompt: "a yellow circle".to_string(),
                context_element_ids: None,
            },
        )
        .unwrap();
        let generated: serde_json::Value = serde_json::from_str(&generated).unwrap();
        let element_id = generated[0]["id"].as_str().unwrap();
        assert_eq!(generated[0]["fill"]["color"], "#F59E0B");

        let req: UpdateElementsRequest = serde_json::from_value(serde_json::json!({
            "canvas_id": id,
            "elements": [{"element_id": element_id, "changes": {"fill": null, "rotation": 45}}]
        }))
        .unwrap();
        let out: serde_json::Value =
            serde_json::from_str(&update_elements(&store, req).unwrap()).unwrap();
        assert!(out[0].get("fill").is_none());
        assert_eq!(out[0]["rotation"], 45.0);
        assert!(out[0].get("stroke").is_some());
    }

    #[test]
    fn update_canvas_changes_only_given_fields() {
        let (_dir, store, id) = setup();
        let req: UpdateCanvasRequest = serde_json::from_value(serde_json::json!({
            "canvas_id": id,
            "changes": {"backgroundColor": "#111827"}
        }))
        .unwrap();
        update_canvas(&store, req).unwrap();
        let canvas = store.get_canvas(&id).unwrap();
        assert_eq!(canvas.background_color, "#111827");
        assert_eq!(canvas.name, "Board");
    }

    #[test]
    fn chat_message_round_trip() {
        let (_dir, store, id) = setup();
        let out = send_chat_message(
            &store,
            SendMessageRequest {
                canvas_id: id.clone(),
                content: "Add a red circle".to_string(),
                context_element_ids: None,
            },
        )
        .unwrap();
        let out: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(out["assistantMessage"]["content"], "Added a red circle.");

        let log: serde_json::Value =
            serde_json::from_str(&list_messages(&store, canvas_req(&id)).unwrap()).unwrap();
        assert_eq!(log.as_array().unwrap().len(), 2);
        assert_eq!(
            clear_messages(&store, canvas_req(&id)).unwrap(),
            "Cleared 2 message(s)"
        );
    }

    #[test]
    fn missing_canvas_surfaces_store_error() {
        let (_dir, store, _) = setup();
        let err = get_canvas(&store, canvas_req("missing")).unwrap_err();
        assert!(matches!(err, StoreError::CanvasNotFound(_)));
        assert_eq!(err.to_string(), "Canvas 'missing' not found");
    }

    #[test]
    fn delete_canvas_then_elements_fail() {
        let (_dir, store, id) = setup();
        assert_eq!(
            delete_canvas(&store, canvas_req(&id)).unwrap(),
            format!("Deleted canvas {}", id)
        );
        let err = delete_elements(
            &store,
            DeleteElementsRequest {
                canvas_id: id,
                element_ids: vec![],
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
