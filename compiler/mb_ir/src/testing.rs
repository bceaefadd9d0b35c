//! Descriptor builders for tests across the workspace.
//!
//! ```ignore
//! use mb_ir::testing::{content_type, graph};
//!
//! let graph = graph(vec![
//!     content_type(1, "page").property("title", "string").build(),
//!     content_type(2, "newsPage").parent(1).build(),
//! ]);
//! ```

use crate::{
    ClrType, ContentKind, ContentTypeDescriptor, PropertyDescriptor, TypeModelGraph, Variations,
};

/// Fluent builder for a [`ContentTypeDescriptor`].
pub struct DescriptorBuilder {
    descriptor: ContentTypeDescriptor,
}

/// Start a content type whose display name equals its alias.
pub fn content_type(id: i32, alias: &str) -> DescriptorBuilder {
    DescriptorBuilder {
        descriptor: ContentTypeDescriptor {
            id,
            alias: alias.to_string(),
            name: alias.to_string(),
            ..ContentTypeDescriptor::default()
        },
    }
}

/// An invariant property whose name equals its alias.
///
/// # Panics
/// Panics if `clr_type` does not parse.
pub fn property(alias: &str, clr_type: &str) -> PropertyDescriptor {
    PropertyDescriptor {
        alias: alias.to_string(),
        name: alias.to_string(),
        description: None,
        clr_type: ClrType::parse(clr_type).unwrap_or_else(|e| panic!("{e}")),
        variations: Variations::empty(),
    }
}

impl DescriptorBuilder {
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.descriptor.name = name.to_string();
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ContentKind) -> Self {
        self.descriptor.kind = kind;
        self
    }

    #[must_use]
    pub fn element(self) -> Self {
        self.kind(ContentKind::Element)
    }

    #[must_use]
    pub fn parent(mut self, id: i32) -> Self {
        self.descriptor.parent_id = Some(id);
        self
    }

    #[must_use]
    pub fn mixin(mut self, id: i32) -> Self {
        self.descriptor.mixin_ids.push(id);
        self
    }

    #[must_use]
    pub fn property(mut self, alias: &str, clr_type: &str) -> Self {
        self.descriptor.properties.push(property(alias, clr_type));
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.descriptor.properties.push(property);
        self
    }

    pub fn build(self) -> ContentTypeDescriptor {
        self.descriptor
    }
}

/// Build a graph, panicking on invalid test data.
pub fn graph(descriptors: Vec<ContentTypeDescriptor>) -> TypeModelGraph {
    TypeModelGraph::from_descriptors(descriptors).unwrap_or_else(|e| panic!("{e}"))
}
