//! Invariant checks over the annotated graph.

use std::collections::BTreeMap;

use mb_diagnostic::{Diagnostic, Error, ErrorCode, NameKind, Relation, Result};
use mb_ir::ContentTypeModel;
use tracing::warn;

use crate::Builder;

/// Every name claimed by more than one alias, sorted by name.
fn collisions<'a>(
    names: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<(String, Vec<String>)> {
    let mut by_name: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (name, alias) in names {
        by_name
            .entry(name.trim_start_matches('@'))
            .or_default()
            .push(alias.to_string());
    }
    by_name
        .into_iter()
        .filter(|(_, aliases)| aliases.len() > 1)
        .map(|(name, aliases)| (name.to_string(), aliases))
        .collect()
}

/// Indices of live properties whose name is the name of their type.
fn clashing_properties(ty: &ContentTypeModel) -> Vec<usize> {
    let type_name = ty.clr_name.trim_start_matches('@');
    ty.properties
        .iter()
        .enumerate()
        .filter(|(_, property)| {
            !property.is_ignored && property.clr_name.trim_start_matches('@') == type_name
        })
        .map(|(index, _)| index)
        .collect()
}

impl Builder<'_> {
    #[tracing::instrument(level = "debug", skip_all)]
    pub(crate) fn check_names(&mut self) -> Result<()> {
        let duplicates = collisions(
            self.graph
                .live_types()
                .map(|ty| (ty.clr_name.as_str(), ty.alias.as_str())),
        );
        if !duplicates.is_empty() {
            return Err(Error::DuplicateName {
                kind: NameKind::ContentType,
                collisions: duplicates,
            });
        }

        for ty in self.graph.live_types() {
            let duplicates = collisions(
                ty.properties
                    .iter()
                    .filter(|property| !property.is_ignored)
                    .map(|property| (property.clr_name.as_str(), property.alias.as_str())),
            );
            if !duplicates.is_empty() {
                return Err(Error::DuplicateName {
                    kind: NameKind::Property {
                        type_alias: ty.alias.clone(),
                    },
                    collisions: duplicates,
                });
            }
        }

        let clashes: Vec<_> = self
            .graph
            .live_types()
            .map(|ty| (ty.id, clashing_properties(ty)))
            .filter(|(_, indices)| !indices.is_empty())
            .collect();
        let tolerant = self.config.is_tolerant();
        for (id, indices) in clashes {
            let ty = self.graph.get_mut(id);
            for index in indices {
                let property = &mut ty.properties[index];
                if !tolerant {
                    return Err(Error::UnrepresentableProperty {
                        type_alias: ty.alias.clone(),
                        property_alias: property.alias.clone(),
                        clr_name: property.clr_name.clone(),
                    });
                }
                warn!(owner = %ty.alias, property = %property.alias, "property skipped");
                property.add_error(format!(
                    "The property \"{}\" of content type \"{}\" cannot be generated because its \
                     CLR name \"{}\" is also the name of the model class. Rename the property, \
                     or ignore it with [IgnorePropertyType(\"{}\")] on the model class.",
                    property.alias, ty.alias, property.clr_name, property.alias
                ));
                self.report.warnings.push(Diagnostic::warning(
                    ErrorCode::E2002,
                    format!(
                        "property \"{}\" of content type \"{}\" was skipped: its CLR name \
                         \"{}\" is the name of its type",
                        property.alias, ty.alias, property.clr_name
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Element types may only inherit from and compose element types.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(crate) fn check_composition(&self) -> Result<()> {
        for ty in self.graph.live_types().filter(|ty| ty.kind.is_element()) {
            let parent = ty.base.map(|id| (self.graph.get(id), Relation::Parent));
            let mixins = ty
                .mixins
                .iter()
                .map(|&id| (self.graph.get(id), Relation::Mixin));
            if let Some((offending, relation)) = parent
                .into_iter()
                .chain(mixins)
                .find(|(other, _)| !other.kind.is_element())
            {
                return Err(Error::CompositionRule {
                    alias: ty.alias.clone(),
                    offending: offending.alias.clone(),
                    relation,
                });
            }
        }
        Ok(())
    }
}
