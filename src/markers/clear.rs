//! Delete-action markers

use super::{Marker, MarkerAction, MarkerKind};
use crate::config::ClearOptions;
use crate::error::Result;

/// Delete the marker `ns`/`id` of `kind`
pub fn build_delete_marker(kind: MarkerKind, frame: &str, ns: &str, id: i32) -> Marker {
    Marker::new(kind, MarkerAction::Delete, frame, ns, id)
}

/// Delete one points marker
pub fn clear_points(frame: &str, ns: &str, id: i32) -> Marker {
    build_delete_marker(MarkerKind::Points, frame, ns, id)
}

/// Delete grasp arrows with ids `0..options.num`.
///
/// Nothing records which ids were drawn, so every id below the bound is
/// deleted whether or not it was ever used.
pub fn clear_grasps(options: &ClearOptions) -> Result<Vec<Marker>> {
    options.validate()?;
    Ok((0..options.num as i32)
        .map(|id| build_delete_marker(MarkerKind::Arrow, &options.frame, &options.ns, id))
        .collect())
}

/// Delete exactly `ids`, in the order given
pub fn clear_ids(kind: MarkerKind, frame: &str, ns: &str, ids: &[i32]) -> Vec<Marker> {
    ids.iter()
        .map(|&id| build_delete_marker(kind, frame, ns, id))
        .collect()
}
