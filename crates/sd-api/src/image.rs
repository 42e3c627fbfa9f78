//! Astronaut image resolution.
//!
//! The upstream astronaut payload carries its picture under one of many
//! field names depending on API version and record age. Resolution walks an
//! ordered list of key paths and returns the first present, non-empty
//! string (whitespace counts as present). It is pure: the same payload always yields the same answer.

use serde_json::Value;

/// Key paths tried in priority order.
pub const ASTRONAUT_IMAGE_PATHS: [&[&str]; 10] = [
    &["profile_image"],
    &["profile_image_thumbnail"],
    &["profile_image_url"],
    &["profile_image_thumbnail_url"],
    &["profile_img"],
    &["profile_img_url"],
    &["thumbnail"],
    &["thumbnail_url"],
    &["image_url"],
    &["image", "image_url"],
];

/// Resolve the display image of a raw astronaut payload.
///
/// `None` means "render a placeholder"; it is never an error.
#[must_use]
pub fn astronaut_image(payload: &Value) -> Option<String> {
    first_present(payload, &ASTRONAUT_IMAGE_PATHS).map(str::to_string)
}

/// Return the first path in `paths` that leads to a non-empty string.
#[must_use]
pub fn first_present<'a>(payload: &'a Value, paths: &[&[&str]]) -> Option<&'a str> {
    paths.iter().find_map(|path| lookup(payload, path))
}

fn lookup<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(payload, |value, key| value.get(*key))?
        .as_str()
        .filter(|s| !s.is_empty())
}
