//! Object name resolution.

use fw_world::GameObject;

use crate::inventory::ObjectKey;

/// Resolve a typed target among candidate objects.
///
/// A full-name match wins over a short-name alias match; ties go to the
/// first candidate. Matching ignores case and surrounding whitespace.
pub fn resolve_object<'a, I>(candidates: I, target: &str) -> Option<ObjectKey>
where
    I: IntoIterator<Item = (ObjectKey, &'a GameObject)>,
{
    let target = target.trim().to_lowercase();
    if target.is_empty() {
        return None;
    }
    let candidates: Vec<_> = candidates.into_iter().collect();

    candidates
        .iter()
        .find(|(_, object)| object.name.to_lowercase() == target)
        .or_else(|| {
            candidates
                .iter()
                .find(|(_, object)| object.answers_to(&target))
        })
        .map(|(key, _)| *key)
}
