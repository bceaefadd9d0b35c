//! Content type and property models.
//!
//! Descriptors are what the host hands over; models are the graph nodes
//! the builder annotates in place.

use crate::{ClrType, ContentKind, ContentTypeId, PropertyRef, Variations};

/// A content type as enumerated by the host.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ContentTypeDescriptor {
    pub id: i32,
    pub alias: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ContentKind,
    /// Parent content type; `None` or `Some(0)` mean no parent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent_id: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mixin_ids: Vec<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<PropertyDescriptor>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub variations: Variations,
}

/// A property as enumerated by the host.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PropertyDescriptor {
    pub alias: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    pub clr_type: ClrType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub variations: Variations,
}

/// A node of the type model graph.
#[derive(Clone, Debug)]
pub struct ContentTypeModel {
    pub id: ContentTypeId,
    /// Host-assigned identifier.
    pub host_id: i32,
    pub alias: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: ContentKind,
    pub variations: Variations,
    /// Single-inheritance parent.
    pub base: Option<ContentTypeId>,
    /// Types composed into this one.
    pub mixins: Vec<ContentTypeId>,
    /// Whether some other type composes this one.
    pub is_mixin: bool,
    /// Locally-declared properties only.
    pub properties: Vec<PropertyModel>,

    // Computed by the builder.
    pub clr_name: String,
    pub is_content_ignored: bool,
    pub is_renamed: bool,
    /// Developer code already declares a base class for this model.
    pub has_base: bool,
    /// Developer code declares the model class through `ImplementContentType`.
    pub has_implement: bool,
    /// Developer code already declares the content constructor.
    pub has_ctor: bool,
    /// Mixins this type must declare (not already guaranteed by its parent).
    pub declaring_interfaces: Vec<ContentTypeId>,
    /// Every type whose properties this class must implement beyond its own.
    pub implementing_interfaces: Vec<ContentTypeId>,
    /// Mixin properties hand-written in developer code.
    pub ignored_mixin_properties: Vec<PropertyRef>,
    pub base_class_name: String,
}

impl ContentTypeModel {
    /// Name of the interface generated for a mixin.
    pub fn interface_name(&self) -> String {
        format!("I{}", self.clr_name.trim_start_matches('@'))
    }

    /// Whether this property is live on this type: not ignored and
    /// representable.
    pub fn is_live_property(&self, index: usize) -> bool {
        self.properties
            .get(index)
            .is_some_and(PropertyModel::is_generated)
    }
}

/// A property owned by exactly one content type.
#[derive(Clone, Debug)]
pub struct PropertyModel {
    pub alias: String,
    pub name: String,
    pub description: Option<String>,
    pub clr_type: ClrType,
    pub variations: Variations,

    // Computed by the builder.
    pub clr_name: String,
    pub is_ignored: bool,
    /// Developer code already provides the extension accessor.
    pub is_extension_implemented: bool,
    /// Why this property cannot be generated; `Some` means it is skipped.
    pub errors: Option<Vec<String>>,
}

impl PropertyModel {
    pub(crate) fn from_descriptor(descriptor: PropertyDescriptor) -> Self {
        PropertyModel {
            alias: descriptor.alias,
            name: descriptor.name,
            description: descriptor.description,
            clr_type: descriptor.clr_type,
            variations: descriptor.variations,
            clr_name: String::new(),
            is_ignored: false,
            is_extension_implemented: false,
            errors: None,
        }
    }

    /// Neither ignored nor in error.
    pub fn is_generated(&self) -> bool {
        !self.is_ignored && self.errors.is_none()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.get_or_insert_with(Vec::new).push(message.into());
    }
}
