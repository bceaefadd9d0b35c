//! Per-type model files.

use mb_diagnostic::{Error, Result};
use mb_ir::{ContentTypeId, ContentTypeModel, PropertyModel};

use super::{CodeWriter, PUBLISHED_CONTENT};
use crate::text::{string_literal, xml_text};

/// The name to document a type or property with.
fn summary(name: &str, description: Option<&String>) -> String {
    xml_text(description.map_or(name, String::as_str))
}

/// Accessor method name for a property.
fn accessor(property: &PropertyModel) -> String {
    format!("Get{}", property.clr_name.trim_start_matches('@'))
}

impl CodeWriter<'_> {
    /// Append the file of one live content type to the buffer.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn write_model_file(&mut self, id: ContentTypeId) -> Result<()> {
        let model = self.model;
        let ty = model.graph.get(id);
        if ty.is_content_ignored {
            return Err(Error::panic(format!(
                "content type \"{}\" is ignored and has no model file",
                ty.alias
            )));
        }

        self.write_header();
        self.write_property_warnings(ty);
        self.write_usings();
        self.line(0, &format!("namespace {}", model.namespace));
        self.line(0, "{");
        if ty.is_mixin {
            self.write_mixin_interface(ty)?;
            self.line(0, "");
        }
        if self.write_extensions(ty)? {
            self.line(0, "");
        }
        self.write_model_class(ty)?;
        self.line(0, "}");
        Ok(())
    }

    /// The interface of a type other types compose.
    fn write_mixin_interface(&mut self, ty: &ContentTypeModel) -> Result<()> {
        let model = self.model;
        let graph = &model.graph;

        let mut extends = Vec::new();
        match ty.base.map(|parent| graph.get(parent)) {
            Some(parent) if parent.is_mixin && !parent.is_content_ignored => {
                extends.push(parent.interface_name());
            }
            _ => extends.push(self.spell(&format!(
                "{PUBLISHED_CONTENT}.{}",
                ty.kind.root_interface()
            ))?),
        }
        let mut declaring: Vec<&ContentTypeModel> =
            ty.declaring_interfaces.iter().map(|&id| graph.get(id)).collect();
        declaring.sort_by(|a, b| a.clr_name.cmp(&b.clr_name));
        extends.extend(declaring.iter().map(|mixin| mixin.interface_name()));

        let doc = summary(&ty.name, ty.description.as_ref());
        self.line(1, &format!("/// <summary>Mixin content type {doc}</summary>"));
        self.line(
            1,
            &format!(
                "public partial interface {} : {}",
                ty.interface_name(),
                extends.join(", ")
            ),
        );
        self.line(1, "{");
        let mut first = true;
        for property in sorted_live(&ty.properties) {
            if !first {
                self.line(0, "");
            }
            first = false;
            let value_type = self.render_type(&property.clr_type, &[])?;
            let doc = summary(&property.name, property.description.as_ref());
            self.line(2, &format!("/// <summary>{doc}</summary>"));
            self.line(2, &format!("{value_type} {} {{ get; }}", property.clr_name));
        }
        self.line(1, "}");
        Ok(())
    }

    /// Static accessors for the type's own properties. Returns whether a
    /// class was written.
    fn write_extensions(&mut self, ty: &ContentTypeModel) -> Result<bool> {
        let properties: Vec<&PropertyModel> = sorted_live(&ty.properties)
            .into_iter()
            .filter(|property| !property.is_extension_implemented)
            .collect();
        if properties.is_empty() {
            return Ok(false);
        }

        let owner = if ty.is_mixin {
            ty.interface_name()
        } else {
            ty.clr_name.clone()
        };
        let bare = ty.clr_name.trim_start_matches('@');
        let doc = summary(&ty.name, None);
        self.line(1, &format!("/// <summary>Property accessors of {doc}.</summary>"));
        self.line(1, &format!("public static partial class {bare}Extensions"));
        self.line(1, "{");
        let mut first = true;
        for property in properties {
            if !first {
                self.line(0, "");
            }
            first = false;
            let value_type = self.render_type(&property.clr_type, &[])?;
            let mut params = vec![format!("this {owner} that")];
            let culture = if property.variations.varies_by_culture() {
                params.push("string culture = null".to_string());
                "culture"
            } else {
                "null"
            };
            let segment = if property.variations.varies_by_segment() {
                params.push("string segment = null".to_string());
                "segment"
            } else {
                "null"
            };
            let doc = summary(&property.name, property.description.as_ref());
            self.line(2, &format!("/// <summary>{doc}</summary>"));
            self.line(
                2,
                &format!(
                    "public static {value_type} {}({})",
                    accessor(property),
                    params.join(", ")
                ),
            );
            self.line(
                3,
                &format!(
                    "=> that.Value<{value_type}>({}, {culture}, {segment});",
                    string_literal(&property.alias)
                ),
            );
        }
        self.line(1, "}");
        Ok(true)
    }

    fn write_model_class(&mut self, ty: &ContentTypeModel) -> Result<()> {
        let model = self.model;
        let graph = &model.graph;

        let mut supertypes = Vec::new();
        if !ty.has_base {
            supertypes.push(if ty.base_class_name.contains('.') {
                self.spell(&ty.base_class_name)?
            } else {
                ty.base_class_name.clone()
            });
        }
        if ty.is_mixin {
            supertypes.push(ty.interface_name());
        } else {
            let mut declaring: Vec<&ContentTypeModel> =
                ty.declaring_interfaces.iter().map(|&id| graph.get(id)).collect();
            declaring.sort_by(|a, b| a.clr_name.cmp(&b.clr_name));
            supertypes.extend(declaring.iter().map(|mixin| mixin.interface_name()));
        }

        let doc = summary(&ty.name, ty.description.as_ref());
        self.line(1, &format!("/// <summary>{doc}</summary>"));
        if !ty.has_implement {
            let attribute = self.spell_attribute("PublishedModel")?;
            self.line(1, &format!("[{attribute}({})]", string_literal(&ty.alias)));
        }
        if supertypes.is_empty() {
            self.line(1, &format!("public partial class {}", ty.clr_name));
        } else {
            self.line(
                1,
                &format!(
                    "public partial class {} : {}",
                    ty.clr_name,
                    supertypes.join(", ")
                ),
            );
        }
        self.line(1, "{");

        let item_type = self.spell(&format!("{PUBLISHED_CONTENT}.PublishedItemType"))?;
        self.line(2, "// helpers");
        self.line(0, "#pragma warning disable 0109 // new is redundant");
        self.line(
            2,
            &format!(
                "public new const string ModelTypeAlias = {};",
                string_literal(&ty.alias)
            ),
        );
        self.line(
            2,
            &format!(
                "public new const {item_type} ModelItemType = {item_type}.{};",
                ty.kind.item_type()
            ),
        );
        self.line(0, "#pragma warning restore 0109");

        if !ty.has_ctor {
            let parameter =
                self.spell(&format!("{PUBLISHED_CONTENT}.{}", ty.kind.root_interface()))?;
            self.line(0, "");
            self.line(2, "// ctor");
            self.line(2, &format!("public {}({parameter} content)", ty.clr_name));
            self.line(3, ": base(content)");
            self.line(2, "{ }");
        }

        let mut properties: Vec<&PropertyModel> = graph
            .expanded_properties(ty.id)
            .into_iter()
            .map(|property| graph.property(property))
            .collect();
        properties.sort_by(|a, b| a.clr_name.cmp(&b.clr_name));
        if !properties.is_empty() {
            self.line(0, "");
            self.line(2, "// properties");
        }
        let implement = self.spell_attribute("ImplementPropertyType")?;
        for property in properties {
            let value_type = self.render_type(&property.clr_type, &[])?;
            self.line(0, "");
            self.line(2, "///<summary>");
            let doc = summary(&property.name, property.description.as_ref());
            self.line(2, &format!("/// {doc}"));
            self.line(2, "///</summary>");
            self.line(2, &format!("[{implement}({})]", string_literal(&property.alias)));
            self.line(
                2,
                &format!(
                    "public {value_type} {} => this.{}();",
                    property.clr_name,
                    accessor(property)
                ),
            );
        }
        self.line(1, "}");
        Ok(())
    }
}

/// Generated properties ordered by CLR name.
fn sorted_live(properties: &[PropertyModel]) -> Vec<&PropertyModel> {
    let mut live: Vec<&PropertyModel> = properties.iter().filter(|p| p.is_generated()).collect();
    live.sort_by(|a, b| a.clr_name.cmp(&b.clr_name));
    live
}
