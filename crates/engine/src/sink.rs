//! Presentation capability.

use tui_flyer_core::GameSnapshot;

/// Consumes one read-only snapshot per tick.
///
/// Sinks handle their own failures; nothing is reported back to the loop.
pub trait FrameSink {
    fn present(&mut self, snapshot: &GameSnapshot);
}

impl<K: FrameSink + ?Sized> FrameSink for &mut K {
    fn present(&mut self, snapshot: &GameSnapshot) {
        (**self).present(snapshot)
    }
}

/// Discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _snapshot: &GameSnapshot) {}
}

/// Keeps a copy of every presented snapshot.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    frames: Vec<GameSnapshot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[GameSnapshot] {
        &self.frames
    }

    pub fn last(&self) -> Option<&GameSnapshot> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn into_frames(self) -> Vec<GameSnapshot> {
        self.frames
    }
}

impl FrameSink for RecordingSink {
    fn present(&mut self, snapshot: &GameSnapshot) {
        self.frames.push(snapshot.clone());
    }
}
