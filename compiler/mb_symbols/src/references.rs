//! Types from the assemblies every generation run references.

use crate::{Symbol, SymbolKind};

/// Namespace holding the generator's attributes.
pub const MARKER_NAMESPACE: &str = "Umbraco.ModelsBuilder";

const CLASSES: &[&str] = &[
    "System.Object",
    "System.String",
    "System.Type",
    "System.Attribute",
    "System.StringComparer",
    "System.Uri",
    "System.Text.StringBuilder",
    "System.Collections.Generic.List`1",
    "System.Collections.Generic.Dictionary`2",
    "System.Linq.Expressions.Expression",
    "System.Linq.Expressions.Expression`1",
    "System.CodeDom.Compiler.GeneratedCodeAttribute",
    "System.Diagnostics.DebuggerNonUserCodeAttribute",
    "System.Web.HtmlString",
    "Umbraco.Core.Models.PublishedContent.PublishedContentModel",
    "Umbraco.Core.Models.PublishedContent.PublishedElementModel",
    "Umbraco.Core.Models.PublishedContent.PublishedContentType",
    "Umbraco.Core.Models.PublishedContent.PublishedPropertyType",
    "Umbraco.Web.PublishedContentExtensions",
    "Umbraco.ModelsBuilder.IgnoreContentTypeAttribute",
    "Umbraco.ModelsBuilder.IgnorePropertyTypeAttribute",
    "Umbraco.ModelsBuilder.RenameContentTypeAttribute",
    "Umbraco.ModelsBuilder.RenamePropertyTypeAttribute",
    "Umbraco.ModelsBuilder.ImplementContentTypeAttribute",
    "Umbraco.ModelsBuilder.ImplementPropertyTypeAttribute",
    "Umbraco.ModelsBuilder.ModelsBaseClassAttribute",
    "Umbraco.ModelsBuilder.ModelsNamespaceAttribute",
    "Umbraco.ModelsBuilder.ModelsUsingAttribute",
    "Umbraco.ModelsBuilder.PublishedModelAttribute",
    "Umbraco.ModelsBuilder.ModelInfosClassAttribute",
    "Umbraco.ModelsBuilder.PublishedModelUtility",
];

const INTERFACES: &[&str] = &[
    "System.IDisposable",
    "System.Web.IHtmlString",
    "System.Collections.Generic.IEnumerable`1",
    "System.Collections.Generic.IList`1",
    "System.Collections.Generic.IReadOnlyDictionary`2",
    "Umbraco.Core.Models.PublishedContent.IPublishedContent",
    "Umbraco.Core.Models.PublishedContent.IPublishedElement",
    "Umbraco.Core.Models.PublishedContent.IPublishedContentType",
    "Umbraco.Core.Models.PublishedContent.IPublishedPropertyType",
];

const STRUCTS: &[&str] = &[
    "System.Boolean",
    "System.Byte",
    "System.Char",
    "System.DateTime",
    "System.Decimal",
    "System.Double",
    "System.Guid",
    "System.Int16",
    "System.Int32",
    "System.Int64",
    "System.Nullable`1",
    "System.Single",
    "System.TimeSpan",
];

const ENUMS: &[&str] = &["Umbraco.Core.Models.PublishedContent.PublishedItemType"];

/// Every referenced type, delegates included as classes.
pub fn builtin_references() -> Vec<Symbol> {
    let delegates = ["System.Func`1", "System.Func`2", "System.Action"];
    CLASSES
        .iter()
        .chain(delegates.iter())
        .map(|name| Symbol::new(*name, SymbolKind::Class))
        .chain(INTERFACES.iter().map(|name| Symbol::new(*name, SymbolKind::Interface)))
        .chain(STRUCTS.iter().map(|name| Symbol::new(*name, SymbolKind::Struct)))
        .chain(ENUMS.iter().map(|name| Symbol::new(*name, SymbolKind::Enum)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolTable;

    #[test]
    fn references_cover_generated_code() {
        let table = SymbolTable::from_symbols(builtin_references());
        assert!(table.contains_namespace("Umbraco.Core.Models"));
        assert!(table.contains_namespace(MARKER_NAMESPACE));
        assert_eq!(
            table.kind_of("Umbraco.Core.Models.PublishedContent.IPublishedContent"),
            Some(SymbolKind::Interface)
        );
        assert!(table.contains_type("System.Collections.Generic.IEnumerable`1"));
    }
}
