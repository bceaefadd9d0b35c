//! Content type kinds.

use std::fmt;

/// The kind of a content type, as enumerated by the host.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContentKind {
    /// Embeddable content without its own URL.
    Element,
    #[default]
    Content,
    Media,
    Member,
}

impl ContentKind {
    pub fn is_element(self) -> bool {
        self == ContentKind::Element
    }

    /// Interface every model of this kind exposes.
    pub fn root_interface(self) -> &'static str {
        match self {
            ContentKind::Element => "IPublishedElement",
            ContentKind::Content | ContentKind::Media | ContentKind::Member => {
                "IPublishedContent"
            }
        }
    }

    /// Base class used when nothing more specific applies.
    pub fn default_base_class(self) -> &'static str {
        match self {
            ContentKind::Element => "PublishedElementModel",
            ContentKind::Content | ContentKind::Media | ContentKind::Member => {
                "PublishedContentModel"
            }
        }
    }

    /// Member name on the host's `PublishedItemType` enumeration.
    pub fn item_type(self) -> &'static str {
        match self {
            ContentKind::Element => "Element",
            ContentKind::Content => "Content",
            ContentKind::Media => "Media",
            ContentKind::Member => "Member",
        }
    }

    /// Parse a `PublishedItemType` member name.
    pub fn from_item_type(name: &str) -> Option<Self> {
        match name {
            "Element" => Some(ContentKind::Element),
            "Content" => Some(ContentKind::Content),
            "Media" => Some(ContentKind::Media),
            "Member" => Some(ContentKind::Member),
            _ => None,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item_type())
    }
}
