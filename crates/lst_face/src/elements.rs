//! Caller-owned display-element handles.
//!
//! The renderer creates one handle per layout entry and owns the whole
//! collection; teardown is a single drop (or an explicit `clear`) in
//! reverse creation order. No global registry.

use crate::layout::{Content, ElementSpec, FACE_LAYOUT, Slot, TargetProfile};
use crate::readout::Readout;

/// A created display element, bound to its layout entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementHandle {
    pub spec: &'static ElementSpec,
    pub profile: TargetProfile,
}

impl ElementHandle {
    pub fn slot(&self) -> Slot {
        self.spec.slot
    }

    /// The readout this element displays, if it is not a static label.
    pub fn readout(&self) -> Option<Readout> {
        match self.spec.content {
            Content::Readout(r) => Some(r),
            Content::Label(_) => None,
        }
    }
}

/// The full set of created elements, owned by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayElements {
    elements: Vec<ElementHandle>,
}

impl DisplayElements {
    /// Create one handle per layout entry, in creation order.
    pub fn create(profile: TargetProfile) -> Self {
        let elements = FACE_LAYOUT
            .iter()
            .map(|spec| ElementHandle { spec, profile })
            .collect();
        Self { elements }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementHandle> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Find the element displaying a given readout.
    pub fn for_readout(&self, readout: Readout) -> Option<&ElementHandle> {
        self.elements
            .iter()
            .find(|e| e.readout() == Some(readout))
    }

    /// Tear everything down, in reverse creation order.
    pub fn clear(&mut self) {
        while self.elements.pop().is_some() {}
    }
}
