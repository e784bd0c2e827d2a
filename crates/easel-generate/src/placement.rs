use easel_core::{ContextElement, ElementDraft};

/// Offset applied to every draft when the canvas already has content.
pub const CONTEXT_OFFSET: f64 = 50.0;
/// Extra offset per draft index, so several drafts do not stack exactly.
pub const STAGGER: f64 = 20.0;

/// Nudge drafts away from existing content. The shift is the same whatever
/// the context elements' own geometry; an empty context leaves drafts alone.
pub fn adjust(drafts: &mut [ElementDraft], context: &[ContextElement]) {
    if context.is_empty() {
        return;
    }
    for (index, draft) in drafts.iter_mut().enumerate() {
        let shift = CONTEXT_OFFSET + STAGGER * index as f64;
        draft.translate(shift, shift);
    }
}
