use crate::model::{Element, ElementSource, Track};

/// Find an element anywhere in a track tree by its id.
pub fn find_element<'a>(tracks: &'a [Track], element_id: &str) -> Option<&'a Element> {
    for track in tracks {
        if let Some(element) = track.elements.iter().find(|e| e.id == element_id) {
            return Some(element);
        }
        if let Some(element) = find_element(&track.children, element_id) {
            return Some(element);
        }
    }
    None
}

/// Resolve a clicked element id back to the domain record it was built
/// from, so the host can open a detail view without re-searching its
/// task collection.
pub fn resolve_source<'a>(tracks: &'a [Track], element_id: &str) -> Option<&'a ElementSource> {
    find_element(tracks, element_id).map(|element| &element.source)
}
