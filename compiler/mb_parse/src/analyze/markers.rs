//! Recognition of the generator's marker attributes.

use mb_symbols::MARKER_NAMESPACE;

/// A marker attribute the generator understands.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Marker {
    IgnoreContentType,
    RenameContentType,
    ImplementContentType,
    IgnorePropertyType,
    RenamePropertyType,
    ImplementPropertyType,
    ModelsBaseClass,
    ModelsNamespace,
    ModelsUsing,
    ModelInfosClass,
}

/// Where an attribute was written.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Site {
    Assembly,
    Class,
    Property,
}

impl Marker {
    /// Recognize `Name`, `NameAttribute`, or either qualified by the
    /// marker namespace.
    pub(crate) fn recognize(name: &str) -> Option<Marker> {
        let (qualifier, last) = match name.rsplit_once('.') {
            Some((qualifier, last)) => (Some(qualifier), last),
            None => (None, name),
        };
        if qualifier.is_some_and(|qualifier| qualifier != MARKER_NAMESPACE) {
            return None;
        }
        let last = match last.strip_suffix("Attribute") {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => last,
        };
        let marker = match last {
            "IgnoreContentType" => Marker::IgnoreContentType,
            "RenameContentType" => Marker::RenameContentType,
            "ImplementContentType" => Marker::ImplementContentType,
            "IgnorePropertyType" => Marker::IgnorePropertyType,
            "RenamePropertyType" => Marker::RenamePropertyType,
            "ImplementPropertyType" => Marker::ImplementPropertyType,
            "ModelsBaseClass" => Marker::ModelsBaseClass,
            "ModelsNamespace" => Marker::ModelsNamespace,
            "ModelsUsing" => Marker::ModelsUsing,
            "ModelInfosClass" => Marker::ModelInfosClass,
            _ => return None,
        };
        Some(marker)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Marker::IgnoreContentType => "IgnoreContentType",
            Marker::RenameContentType => "RenameContentType",
            Marker::ImplementContentType => "ImplementContentType",
            Marker::IgnorePropertyType => "IgnorePropertyType",
            Marker::RenamePropertyType => "RenamePropertyType",
            Marker::ImplementPropertyType => "ImplementPropertyType",
            Marker::ModelsBaseClass => "ModelsBaseClass",
            Marker::ModelsNamespace => "ModelsNamespace",
            Marker::ModelsUsing => "ModelsUsing",
            Marker::ModelInfosClass => "ModelInfosClass",
        }
    }

    /// Whether the marker may be written at `site`.
    pub(crate) fn allowed_at(self, site: Site) -> bool {
        match self {
            Marker::IgnoreContentType
            | Marker::ModelsBaseClass
            | Marker::ModelsNamespace
            | Marker::ModelsUsing
            | Marker::ModelInfosClass => site == Site::Assembly,
            Marker::RenameContentType => matches!(site, Site::Assembly | Site::Class),
            Marker::ImplementContentType
            | Marker::IgnorePropertyType
            | Marker::RenamePropertyType => site == Site::Class,
            Marker::ImplementPropertyType => site == Site::Property,
        }
    }
}

impl Site {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            Site::Assembly => "an assembly",
            Site::Class => "a class",
            Site::Property => "a property",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_spellings() {
        for name in [
            "IgnoreContentType",
            "IgnoreContentTypeAttribute",
            "Umbraco.ModelsBuilder.IgnoreContentType",
            "Umbraco.ModelsBuilder.IgnoreContentTypeAttribute",
        ] {
            assert_eq!(Marker::recognize(name), Some(Marker::IgnoreContentType), "{name}");
        }
    }

    #[test]
    fn other_attributes_are_not_markers() {
        assert_eq!(Marker::recognize("Serializable"), None);
        assert_eq!(Marker::recognize("Other.IgnoreContentType"), None);
        assert_eq!(Marker::recognize("Attribute"), None);
    }

    #[test]
    fn sites() {
        assert!(Marker::RenameContentType.allowed_at(Site::Class));
        assert!(Marker::RenameContentType.allowed_at(Site::Assembly));
        assert!(!Marker::ImplementPropertyType.allowed_at(Site::Class));
        assert!(!Marker::ModelsNamespace.allowed_at(Site::Property));
    }
}
