//! The batch metadata file.

use mb_diagnostic::Result;
use mb_ir::{ClrType, ContentTypeModel, PropertyModel};

use super::{generated_full_name, CodeWriter, PUBLISHED_CONTENT};
use crate::text::string_literal;

const SYSTEM_TYPE: &str = "System.Type";

impl CodeWriter<'_> {
    /// Append the metadata file of every live content type to the buffer.
    #[tracing::instrument(level = "debug", skip_all, fields(class = %self.model.model_infos_class))]
    pub fn write_model_infos_file(&mut self) -> Result<()> {
        let model = self.model;
        let infos = generated_full_name(&model.namespace, &model.model_infos_class);

        let mut types: Vec<&ContentTypeModel> = model.graph.live_types().collect();
        types.sort_by(|a, b| a.clr_name.cmp(&b.clr_name));
        let outer: Vec<String> = types
            .iter()
            .map(|ty| format!("{infos}+{}", ty.clr_name.trim_start_matches('@')))
            .collect();

        self.write_header();
        self.write_usings();
        self.line(0, &format!("namespace {}", model.namespace));
        self.line(0, "{");
        self.line(1, "/// <summary>Names and CLR types of the generated models.</summary>");
        self.line(
            1,
            &format!("public static partial class {}", model.model_infos_class),
        );
        self.line(1, "{");
        for ty in &types {
            self.write_type_infos(ty, &infos, &outer)?;
            self.line(0, "");
        }
        self.write_lookups(&types, &outer)?;
        self.line(1, "}");
        self.line(0, "}");
        Ok(())
    }

    fn write_type_infos(
        &mut self,
        ty: &ContentTypeModel,
        infos: &str,
        outer: &[String],
    ) -> Result<()> {
        let model = self.model;
        let graph = &model.graph;
        let nested = format!("{infos}+{}", ty.clr_name.trim_start_matches('@'));

        let mut properties: Vec<&PropertyModel> = graph
            .expanded_properties(ty.id)
            .into_iter()
            .map(|property| graph.property(property))
            .collect();
        properties.sort_by(|a, b| a.clr_name.cmp(&b.clr_name));

        // Every nested class visible from inside this one.
        let mut members = outer.to_vec();
        members.push(format!("{nested}+Properties"));
        members.extend(properties.iter().map(|property| {
            format!(
                "{nested}+Properties+{}",
                property.clr_name.trim_start_matches('@')
            )
        }));

        let system_type = self.spell_in(SYSTEM_TYPE, &members)?;
        let item_type =
            self.spell_in(&format!("{PUBLISHED_CONTENT}.PublishedItemType"), &members)?;
        let clr_type = self.render_type(&ClrType::Model(ty.id), &members)?;

        self.line(2, &format!("public static partial class {}", ty.clr_name));
        self.line(2, "{");
        self.line(
            3,
            &format!("public const string Alias = {};", string_literal(&ty.alias)),
        );
        self.line(
            3,
            &format!("public const string Name = {};", string_literal(&ty.name)),
        );
        self.line(
            3,
            &format!("public static readonly {system_type} ClrType = typeof({clr_type});"),
        );
        self.line(
            3,
            &format!(
                "public const {item_type} ItemType = {item_type}.{};",
                ty.kind.item_type()
            ),
        );

        if !properties.is_empty() {
            self.line(0, "");
            self.line(3, "public static partial class Properties");
            self.line(3, "{");
            let mut first = true;
            for property in properties {
                if !first {
                    self.line(0, "");
                }
                first = false;
                let value_type = self.render_type(&property.clr_type, &members)?;
                self.line(4, &format!("public static partial class {}", property.clr_name));
                self.line(4, "{");
                self.line(
                    5,
                    &format!(
                        "public const string Alias = {};",
                        string_literal(&property.alias)
                    ),
                );
                self.line(
                    5,
                    &format!(
                        "public const string Name = {};",
                        string_literal(&property.name)
                    ),
                );
                self.line(
                    5,
                    &format!(
                        "public static readonly {system_type} ClrType = typeof({value_type});"
                    ),
                );
                self.line(4, "}");
            }
            self.line(3, "}");
        }
        self.line(2, "}");
        Ok(())
    }

    /// `ByAlias` (case-insensitive) and `ByClrType` tables.
    fn write_lookups(&mut self, types: &[&ContentTypeModel], outer: &[String]) -> Result<()> {
        let string = ClrType::string();
        let system_type = ClrType::named(SYSTEM_TYPE);
        let by_alias_type = self.render_type(
            &ClrType::generic(
                "System.Collections.Generic.IReadOnlyDictionary",
                vec![string.clone(), system_type.clone()],
            ),
            outer,
        )?;
        let by_alias_init = self.render_type(
            &ClrType::generic(
                "System.Collections.Generic.Dictionary",
                vec![string.clone(), system_type.clone()],
            ),
            outer,
        )?;
        let by_type_type = self.render_type(
            &ClrType::generic(
                "System.Collections.Generic.IReadOnlyDictionary",
                vec![system_type.clone(), string.clone()],
            ),
            outer,
        )?;
        let by_type_init = self.render_type(
            &ClrType::generic(
                "System.Collections.Generic.Dictionary",
                vec![system_type, string],
            ),
            outer,
        )?;
        let comparer = self.spell_in("System.StringComparer", outer)?;

        let mut entries = Vec::with_capacity(types.len());
        for ty in types {
            let clr_type = self.render_type(&ClrType::Model(ty.id), outer)?;
            entries.push((string_literal(&ty.alias), clr_type));
        }

        self.line(2, "/// <summary>Model types by content type alias.</summary>");
        self.line(
            2,
            &format!("public static readonly {by_alias_type} ByAlias ="),
        );
        self.line(
            3,
            &format!("new {by_alias_init}({comparer}.OrdinalIgnoreCase)"),
        );
        self.line(3, "{");
        for (alias, clr_type) in &entries {
            self.line(4, &format!("[{alias}] = typeof({clr_type}),"));
        }
        self.line(3, "};");
        self.line(0, "");
        self.line(2, "/// <summary>Content type aliases by model type.</summary>");
        self.line(
            2,
            &format!("public static readonly {by_type_type} ByClrType ="),
        );
        self.line(3, &format!("new {by_type_init}"));
        self.line(3, "{");
        for (alias, clr_type) in &entries {
            self.line(4, &format!("[typeof({clr_type})] = {alias},"));
        }
        self.line(3, "};");
        Ok(())
    }
}
