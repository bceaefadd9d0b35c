//! Stable handles into the type model arena.

use std::fmt;

/// Handle of a content type within one [`TypeModelGraph`](crate::TypeModelGraph).
///
/// Assigned in descriptor order when the graph is built and never reused,
/// so it can stand in for a model type whose CLR name is not known yet.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ContentTypeId(u32);

impl ContentTypeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ContentTypeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentTypeId({})", self.0)
    }
}

/// A property addressed by its owning type and position in that type's
/// locally-declared property list.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct PropertyRef {
    pub owner: ContentTypeId,
    pub index: usize,
}

impl PropertyRef {
    pub const fn new(owner: ContentTypeId, index: usize) -> Self {
        PropertyRef { owner, index }
    }
}
