//! Destinations for built markers

#[cfg(feature = "ros")]
pub mod ros;

use crate::markers::Marker;

/// Anything that accepts markers for rendering or removal.
///
/// Delivery is fire-and-forget: a sink that fails to forward a marker deals
/// with it internally and never reports back to the caller.
pub trait MarkerSink {
    fn send(&mut self, marker: Marker);
}

/// Lets a caller lend its sink to a `DrawFunctions` and keep ownership
impl<S: MarkerSink + ?Sized> MarkerSink for &mut S {
    fn send(&mut self, marker: Marker) {
        (**self).send(marker);
    }
}

/// Sink that keeps every marker it receives, in order
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    markers: Vec<Marker>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Hand back everything recorded so far and start empty
    pub fn take(&mut self) -> Vec<Marker> {
        std::mem::take(&mut self.markers)
    }
}

impl MarkerSink for RecordingSink {
    fn send(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{build_delete_marker, MarkerKind};

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        for id in [3, 1, 2] {
            sink.send(build_delete_marker(MarkerKind::Cube, "base", "boxes", id));
        }
        let ids: Vec<i32> = sink.markers().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        assert_eq!(sink.take().len(), 3);
        assert!(sink.is_empty());
    }

    fn send_one<S: MarkerSink>(mut sink: S) {
        sink.send(build_delete_marker(MarkerKind::Points, "base", "points", 0));
    }

    #[test]
    fn borrowed_sinks_forward() {
        let mut sink = RecordingSink::new();
        send_one(&mut sink);
        send_one(&mut sink);
        assert_eq!(sink.len(), 2);
    }
}
