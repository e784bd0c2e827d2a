//! Canvas persistence.
//!
//! [`CanvasStore`] is the interface the generation handler and the MCP server
//! talk to. [`FileStore`] keeps one JSON file per canvas holding the canvas,
//! its elements and its chat log.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use uuid::Uuid;

use crate::record::{stored_canvas, stored_element, CanvasFile, Document};
use crate::validate::{validate_canvas, validate_element};
use crate::{
    Canvas, CanvasPatch, ChatMessage, Element, ElementDraft, ElementPatch, NewCanvas,
    NewChatMessage, Result, StoreError,
};

pub trait CanvasStore {
    /// All canvases, oldest first.
    fn list_canvases(&self) -> Result<Vec<Canvas>>;

    fn create_canvas(&self, new: NewCanvas) -> Result<Canvas>;

    fn get_canvas(&self, id: &str) -> Result<Canvas>;

    fn update_canvas(&self, id: &str, patch: CanvasPatch) -> Result<Canvas>;

    /// Delete a canvas together with its elements and chat log.
    fn delete_canvas(&self, id: &str) -> Result<()>;

    /// Elements of a canvas ordered by z-index.
    fn list_elements(&self, canvas_id: &str) -> Result<Vec<Element>>;

    /// Look up elements by id, in request order. Unknown ids are skipped.
    fn find_elements(&self, canvas_id: &str, ids: &[String]) -> Result<Vec<Element>>;

    /// Persist drafts, assigning ids, timestamps and stacking order. Either
    /// every draft is stored or none is. The returned elements are exactly
    /// what later reads give back.
    fn insert_elements(&self, canvas_id: &str, drafts: Vec<ElementDraft>) -> Result<Vec<Element>>;

    fn update_element(&self, canvas_id: &str, element_id: &str, patch: ElementPatch)
        -> Result<Element>;

    /// Returns how many of the given ids were removed.
    fn delete_elements(&self, canvas_id: &str, ids: &[String]) -> Result<usize>;

    fn list_messages(&self, canvas_id: &str) -> Result<Vec<ChatMessage>>;

    fn append_message(&self, canvas_id: &str, message: NewChatMessage) -> Result<ChatMessage>;

    /// Returns how many messages were removed.
    fn clear_messages(&self, canvas_id: &str) -> Result<usize>;
}

/// File-backed store rooted at a directory (normally `~/.easel/canvases/`).
pub struct FileStore {
    root: PathBuf,
    // Serializes read-modify-write cycles on canvas files
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store under the configured Easel directory.
    pub fn open_default() -> Self {
        Self::new(crate::settings::canvases_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Canvas ids are generated UUIDs; anything that could escape the root
    /// directory simply does not exist.
    fn path_for(&self, id: &str) -> Option<PathBuf> {
        let plain = !id.is_empty()
            && !id.starts_with('.')
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        plain.then(|| self.root.join(format!("{}.json", id)))
    }

    fn read_document(&self, id: &str) -> Result<Document> {
        let path = self
            .path_for(id)
            .filter(|p| p.exists())
            .ok_or_else(|| StoreError::CanvasNotFound(id.to_string()))?;
        read_file(&path)
    }

    /// Atomic write (temp file + rename) so readers never see a partial file.
    fn write_document(&self, doc: &Document) -> Result<()> {
        let path = self
            .path_for(&doc.canvas.id)
            .ok_or_else(|| StoreError::CanvasNotFound(doc.canvas.id.clone()))?;
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(&CanvasFile::from(doc))?;
        let tmp = self.root.join(format!(".{}.json.tmp", doc.canvas.id));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn view<T>(&self, id: &str, f: impl FnOnce(Document) -> T) -> Result<T> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_document(id).map(f)
    }

    /// Load, change and save one canvas file. Nothing is written if `f` fails.
    fn modify<T>(&self, id: &str, f: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut doc = self.read_document(id)?;
        let out = f(&mut doc)?;
        self.write_document(&doc)?;
        Ok(out)
    }
}

fn read_file(path: &Path) -> Result<Document> {
    let raw = fs::read_to_string(path)?;
    let file: CanvasFile = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(file.into())
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// Validation runs before and after rounding to storage precision: the first
// pass bounds the range, the second rejects values that round to zero.
fn settle_canvas(canvas: &Canvas) -> Result<Canvas> {
    validate_canvas(canvas)?;
    let stored = stored_canvas(canvas);
    validate_canvas(&stored)?;
    Ok(stored)
}

fn settle_element(element: &Element) -> Result<Element> {
    validate_element(element)?;
    let stored = stored_element(element);
    validate_element(&stored)?;
    Ok(stored)
}

impl CanvasStore for FileStore {
    fn list_canvases(&self) -> Result<Vec<Canvas>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if !self.root.exists() {
            return Ok(vec![]);
        }
        let mut canvases: Vec<Canvas> = fs::read_dir(&self.root)?
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                let name = path.file_name()?.to_str()?;
                if name.starts_with('.') || !name.ends_with(".json") {
                    return None;
                }
                match read_file(&path) {
                    Ok(doc) => Some(doc.canvas),
                    Err(e) => {
                        log::warn!("skipping unreadable canvas file: {}", e);
                        None
                    }
                }
            })
            .collect();
        canvases.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(canvases)
    }

    fn create_canvas(&self, new: NewCanvas) -> Result<Canvas> {
        let now = Utc::now();
        let canvas = Canvas {
            id: new_id(),
            name: new.name,
            description: new.description,
            width: new.width,
            height: new.height,
            background_color: new.background_color,
            zoom: 1.0,
            created_at: now,
            updated_at: now,
        };
        let canvas = settle_canvas(&canvas)?;

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.write_document(&Document {
            canvas: canvas.clone(),
            elements: Vec::new(),
            messages: Vec::new(),
        })?;
        log::info!("created canvas {} ({})", canvas.id, canvas.name);
        Ok(canvas)
    }

    fn get_canvas(&self, id: &str) -> Result<Canvas> {
        self.view(id, |doc| doc.canvas)
    }

    fn update_canvas(&self, id: &str, patch: CanvasPatch) -> Result<Canvas> {
        self.modify(id, |doc| {
            let mut canvas = doc.canvas.clone();
            if let Some(name) = patch.name {
                canvas.name = name;
            }
            patch.description.apply(&mut canvas.description);
            if let Some(width) = patch.width {
                canvas.width = width;
            }
            if let Some(height) = patch.height {
                canvas.height = height;
            }
            if let Some(color) = patch.background_color {
                canvas.background_color = color;
            }
            if let Some(zoom) = patch.zoom {
                canvas.zoom = zoom;
            }
            let mut canvas = settle_canvas(&canvas)?;
            canvas.updated_at = Utc::now();
            doc.canvas = canvas.clone();
            Ok(canvas)
        })
    }

    fn delete_canvas(&self, id: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let path = self
            .path_for(id)
            .filter(|p| p.exists())
            .ok_or_else(|| StoreError::CanvasNotFound(id.to_string()))?;
        fs::remove_file(&path)?;
        log::info!("deleted canvas {}", id);
        Ok(())
    }

    fn list_elements(&self, canvas_id: &str) -> Result<Vec<Element>> {
        self.view(canvas_id, |doc| {
            let mut elements = doc.elements;
            elements.sort_by_key(|e| e.z_index);
            elements
        })
    }

    fn find_elements(&self, canvas_id: &str, ids: &[String]) -> Result<Vec<Element>> {
        self.view(canvas_id, |doc| {
            ids.iter()
                .filter_map(|id| {
                    let found = doc.elements.iter().find(|e| &e.id == id).cloned();
                    if found.is_none() {
                        log::debug!("element {} not on canvas {}; skipped", id, canvas_id);
                    }
                    found
                })
                .collect()
        })
    }

    fn insert_elements(&self, canvas_id: &str, drafts: Vec<ElementDraft>) -> Result<Vec<Element>> {
        self.modify(canvas_id, |doc| {
            let now = Utc::now();
            let mut z_index = doc.elements.iter().map(|e| e.z_index).max().unwrap_or(0);
            let inserted = drafts
                .into_iter()
                .map(|draft| {
                    z_index += 1;
                    settle_element(&Element {
                        id: new_id(),
                        canvas_id: doc.canvas.id.clone(),
                        draft,
                        rotation: 0.0,
                        z_index,
                        locked: false,
                        created_at: now,
                        updated_at: now,
                    })
                })
                .collect::<Result<Vec<Element>>>()?;
            doc.elements.extend(inserted.iter().cloned());
            doc.canvas.updated_at = now;
            log::debug!("stored {} element(s) on canvas {}", inserted.len(), canvas_id);
            Ok(inserted)
        })
    }

    fn update_element(
        &self,
        canvas_id: &str,
        element_id: &str,
        patch: ElementPatch,
    ) -> Result<Element> {
        self.modify(canvas_id, |doc| {
            let element = doc
                .elements
                .iter_mut()
                .find(|e| e.id == element_id)
                .ok_or_else(|| StoreError::ElementNotFound(element_id.to_string()))?;
            // Unlocking and editing in the same patch is allowed
            if element.locked && patch.locked != Some(false) && patch.touches_content() {
                return Err(StoreError::ElementLocked(element_id.to_string()));
            }
            let mut updated = element.clone();
            patch.apply(&mut updated);
            let mut updated = settle_element(&updated)?;
            updated.updated_at = Utc::now();
            *element = updated.clone();
            doc.canvas.updated_at = updated.updated_at;
            Ok(updated)
        })
    }

    fn delete_elements(&self, canvas_id: &str, ids: &[String]) -> Result<usize> {
        self.modify(canvas_id, |doc| {
            let before = doc.elements.len();
            doc.elements.retain(|e| !ids.contains(&e.id));
            for message in &mut doc.messages {
                message.element_ids.retain(|id| !ids.contains(id));
            }
            let removed = before - doc.elements.len();
            if removed > 0 {
                doc.canvas.updated_at = Utc::now();
            }
            Ok(removed)
        })
    }

    fn list_messages(&self, canvas_id: &str) -> Result<Vec<ChatMessage>> {
        self.view(canvas_id, |doc| doc.messages)
    }

    fn append_message(&self, canvas_id: &str, message: NewChatMessage) -> Result<ChatMessage> {
        self.modify(canvas_id, |doc| {
            let message = ChatMessage {
                id: new_id(),
                canvas_id: doc.canvas.id.clone(),
                role: message.role,
                content: message.content,
                element_ids: message.element_ids,
                created_at: Utc::now(),
            };
            doc.messages.push(message.clone());
            Ok(message)
        })
    }

    fn clear_messages(&self, canvas_id: &str) -> Result<usize> {
        self.modify(canvas_id, |doc| {
            let removed = doc.messages.len();
            doc.messages.clear();
            Ok(removed)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FillStyle, Patch, Point, ShapeProps, Size, ValidationError};

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("canvases"));
        (dir, store)
    }

    fn new_canvas(name: &str) -> NewCanvas {
        NewCanvas {
            name: name.to_string(),
            description: None,
            width: 1920.0,
            height: 1080.0,
            background_color: "#FFFFFF".to_string(),
        }
    }

    fn circle_at(x: f64, y: f64) -> ElementDraft {
        ElementDraft {
            shape: ShapeProps::Circle,
            position: Point::new(x, y),
            size: Some(Size::new(100.0, 100.0)),
            fill: Some(FillStyle::solid("#EF4444")),
            stroke: None,
            text_style: None,
        }
    }

    #[test]
    fn create_then_get_canvas() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        assert_eq!(canvas.zoom, 1.0);
        assert_eq!(canvas.created_at, canvas.updated_at);
        assert_eq!(store.get_canvas(&canvas.id).unwrap(), canvas);
        assert_eq!(store.list_canvases().unwrap(), vec![canvas]);
    }

    #[test]
    fn unknown_canvas_is_not_found() {
        let (_dir, store) = store();
        assert!(matches!(
            store.get_canvas("missing"),
            Err(StoreError::CanvasNotFound(id)) if id == "missing"
        ));
        assert!(matches!(
            store.get_canvas("../etc/passwd"),
            Err(StoreError::CanvasNotFound(_))
        ));
        assert!(store.list_canvases().unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_canvas() {
        let (_dir, store) = store();
        let mut bad = new_canvas("Poster");
        bad.width = 0.0;
        assert!(matches!(store.create_canvas(bad), Err(StoreError::Invalid(_))));
        assert!(store.list_canvases().unwrap().is_empty());
    }

    #[test]
    fn update_canvas_applies_patch() {
        let (_dir, store) = store();
        let mut new = new_canvas("Poster");
        new.description = Some("draft".to_string());
        let canvas = store.create_canvas(new).unwrap();

        let patch = CanvasPatch {
            zoom: Some(1.5),
            description: Patch::Null,
            ..Default::default()
        };
        let updated = store.update_canvas(&canvas.id, patch).unwrap();
        assert_eq!(updated.zoom, 1.5);
        assert_eq!(updated.description, None);
        assert_eq!(updated.name, "Poster");
        assert_eq!(store.get_canvas(&canvas.id).unwrap(), updated);
    }

    #[test]
    fn insert_assigns_identity_and_stacking() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let stored = store
            .insert_elements(&canvas.id, vec![circle_at(0.0, 0.0), circle_at(10.0, 10.0)])
            .unwrap();
        assert_eq!(stored.len(), 2);
        assert_ne!(stored[0].id, stored[1].id);
        assert!(stored.iter().all(|e| e.canvas_id == canvas.id));
        assert!(stored.iter().all(|e| e.created_at == e.updated_at));
        assert_eq!(stored[0].z_index, 1);
        assert_eq!(stored[1].z_index, 2);
        assert_eq!(store.list_elements(&canvas.id).unwrap(), stored);
    }

    #[test]
    fn insert_is_all_or_nothing() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let mut bad = circle_at(0.0, 0.0);
        bad.size = None;
        let result = store.insert_elements(&canvas.id, vec![circle_at(0.0, 0.0), bad]);
        assert!(matches!(result, Err(StoreError::Invalid(_))));
        assert!(store.list_elements(&canvas.id).unwrap().is_empty());
    }

    #[test]
    fn find_skips_unknown_ids() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let stored = store
            .insert_elements(&canvas.id, vec![circle_at(0.0, 0.0)])
            .unwrap();
        let ids = vec!["nope".to_string(), stored[0].id.clone()];
        let found = store.find_elements(&canvas.id, &ids).unwrap();
        assert_eq!(found, stored);
    }

    #[test]
    fn update_element_and_clear_fill() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let id = store
            .insert_elements(&canvas.id, vec![circle_at(0.0, 0.0)])
            .unwrap()[0]
            .id
            .clone();

        let patch = ElementPatch {
            position: Some(Point::new(5.0, 6.0)),
            fill: Patch::Null,
            ..Default::default()
        };
        let updated = store.update_element(&canvas.id, &id, patch).unwrap();
        assert_eq!(updated.draft.position, Point::new(5.0, 6.0));
        assert_eq!(updated.draft.fill, None);
        assert_eq!(updated.draft.size, Some(Size::new(100.0, 100.0)));
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn update_unknown_element_is_not_found() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let result = store.update_element(&canvas.id, "ghost", ElementPatch::default());
        assert!(matches!(result, Err(StoreError::ElementNotFound(id)) if id == "ghost"));
    }

    #[test]
    fn locked_element_rejects_edits_until_unlocked() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let id = store
            .insert_elements(&canvas.id, vec![circle_at(0.0, 0.0)])
            .unwrap()[0]
            .id
            .clone();
        let lock = ElementPatch {
            locked: Some(true),
            ..Default::default()
        };
        store.update_element(&canvas.id, &id, lock).unwrap();

        let nudge = ElementPatch {
            position: Some(Point::new(1.0, 1.0)),
            ..Default::default()
        };
        assert!(matches!(
            store.update_element(&canvas.id, &id, nudge.clone()),
            Err(StoreError::ElementLocked(_))
        ));

        let unlock_and_move = ElementPatch {
            locked: Some(false),
            ..nudge
        };
        let moved = store.update_element(&canvas.id, &id, unlock_and_move).unwrap();
        assert!(!moved.locked);
        assert_eq!(moved.draft.position, Point::new(1.0, 1.0));
    }

    #[test]
    fn delete_elements_unlinks_messages() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let stored = store
            .insert_elements(&canvas.id, vec![circle_at(0.0, 0.0)])
            .unwrap();
        let ids = vec![stored[0].id.clone()];
        store
            .append_message(&canvas.id, NewChatMessage::assistant("Added a circle.", ids.clone()))
            .unwrap();

        assert_eq!(store.delete_elements(&canvas.id, &ids).unwrap(), 1);
        assert_eq!(store.delete_elements(&canvas.id, &ids).unwrap(), 0);
        let messages = store.list_messages(&canvas.id).unwrap();
        assert!(messages[0].element_ids.is_empty());
    }

    #[test]
    fn chat_log_appends_and_clears() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        store
            .append_message(&canvas.id, NewChatMessage::user("Add a red circle"))
            .unwrap();
        store
            .append_message(&canvas.id, NewChatMessage::assistant("Added a red circle.", vec![]))
            .unwrap();
        let messages = store.list_messages(&canvas.id).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "Add a red circle");
        assert_eq!(store.clear_messages(&canvas.id).unwrap(), 2);
        assert!(store.list_messages(&canvas.id).unwrap().is_empty());
    }

    #[test]
    fn delete_canvas_removes_file() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        store.delete_canvas(&canvas.id).unwrap();
        assert!(matches!(
            store.get_canvas(&canvas.id),
            Err(StoreError::CanvasNotFound(_))
        ));
        assert!(matches!(
            store.delete_canvas(&canvas.id),
            Err(StoreError::CanvasNotFound(_))
        ));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let path = store.root().join(format!("{}.json", canvas.id));
        let raw = fs::read_to_string(&path).unwrap();
        fs::write(&path, raw.replace("\"1920\"", "\"wide\"")).unwrap();
        assert!(matches!(
            store.get_canvas(&canvas.id),
            Err(StoreError::Corrupt { .. })
        ));
        // Listing skips it rather than failing
        assert!(store.list_canvases().unwrap().is_empty());
    }

    #[test]
    fn geometry_survives_many_saves() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let id = store
            .insert_elements(&canvas.id, vec![circle_at(910.1, 490.3)])
            .unwrap()[0]
            .id
            .clone();
        for _ in 0..5 {
            store
                .update_element(&canvas.id, &id, ElementPatch::default())
                .unwrap();
        }
        let element = &store.list_elements(&canvas.id).unwrap()[0];
        assert_eq!(element.draft.position, Point::new(910.1, 490.3));
    }

    #[test]
    fn sizes_that_round_to_zero_are_rejected() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let mut speck = circle_at(0.0, 0.0);
        speck.size = Some(Size::new(0.00001, 0.00001));
        assert!(matches!(
            store.insert_elements(&canvas.id, vec![speck]),
            Err(StoreError::Invalid(ValidationError::OutOfRange { field: "size.width", .. }))
        ));
        assert!(store.list_elements(&canvas.id).unwrap().is_empty());

        let mut thin = new_canvas("Thin");
        thin.width = 0.00001;
        assert!(matches!(store.create_canvas(thin), Err(StoreError::Invalid(_))));
        assert_eq!(store.list_canvases().unwrap().len(), 1);

        let shrink = CanvasPatch {
            zoom: Some(0.00004),
            ..Default::default()
        };
        assert!(matches!(
            store.update_canvas(&canvas.id, shrink),
            Err(StoreError::Invalid(_))
        ));
        assert_eq!(store.get_canvas(&canvas.id).unwrap().zoom, 1.0);
    }

    #[test]
    fn values_too_large_to_store_are_rejected() {
        let (_dir, store) = store();
        let canvas = store.create_canvas(new_canvas("Poster")).unwrap();
        let mut huge = circle_at(0.0, 0.0);
        huge.size = Some(Size::new(1e300, 100.0));
        assert!(matches!(
            store.insert_elements(&canvas.id, vec![huge]),
            Err(StoreError::Invalid(_))
        ));

        let mut wide = new_canvas("Wide");
        wide.width = 1e300;
        assert!(matches!(store.create_canvas(wide), Err(StoreError::Invalid(_))));

        let id = store
            .insert_elements(&canvas.id, vec![circle_at(0.0, 0.0)])
            .unwrap()[0]
            .id
            .clone();
        let spin = ElementPatch {
            rotation: Some(1e300),
            ..Default::default()
        };
        assert!(matches!(
            store.update_element(&canvas.id, &id, spin),
            Err(StoreError::Invalid(_))
        ));
        assert_eq!(store.list_elements(&canvas.id).unwrap()[0].rotation, 0.0);
    }

    #[test]
    fn returned_values_match_what_is_read_back() {
        let (_dir, store) = store();
        let mut new = new_canvas("Poster");
        new.width = 1000.00007;
        let canvas = store.create_canvas(new).unwrap();
        assert_eq!(canvas.width, 1000.0001);
        assert_eq!(store.get_canvas(&canvas.id).unwrap(), canvas);

        let inserted = store
            .insert_elements(&canvas.id, vec![circle_at(450.00007, 0.123456)])
            .unwrap();
        assert_eq!(inserted[0].draft.position, Point::new(450.0001, 0.1235));
        assert_eq!(store.list_elements(&canvas.id).unwrap(), inserted);

        let patch = ElementPatch {
            rotation: Some(12.34567),
            ..Default::default()
        };
        let updated = store.update_element(&canvas.id, &inserted[0].id, patch).unwrap();
        assert_eq!(updated.rotation, 12.3457);
        assert_eq!(store.list_elements(&canvas.id).unwrap(), vec![updated]);

        let zoom = CanvasPatch {
            zoom: Some(1.33333),
            ..Default::default()
        };
        let zoomed = store.update_canvas(&canvas.id, zoom).unwrap();
        assert_eq!(zoomed.zoom, 1.3333);
        assert_eq!(store.get_canvas(&canvas.id).unwrap(), zoomed);
    }
}
