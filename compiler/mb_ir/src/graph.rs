//! The type model graph.
//!
//! Content types live in a flat arena indexed by [`ContentTypeId`].
//! Parent and mixin edges are stored as handles, so nodes can be
//! annotated in place without fighting shared ownership.

use mb_diagnostic::{Error, NameKind, Result};
use rustc_hash::FxHashMap;

use crate::{
    ContentTypeDescriptor, ContentTypeId, ContentTypeModel, PropertyModel, PropertyRef,
};

/// All content types of one generation run.
#[derive(Clone, Debug, Default)]
pub struct TypeModelGraph {
    types: Vec<ContentTypeModel>,
    /// Lowercased alias to handle.
    by_alias: FxHashMap<String, ContentTypeId>,
}

impl TypeModelGraph {
    /// Build the graph from host descriptors.
    ///
    /// Links parent and mixin ids to handles and marks every composed type,
    /// and every ancestor of one, as a mixin. Fails on duplicate aliases, dangling ids and
    /// inheritance cycles.
    pub fn from_descriptors(descriptors: Vec<ContentTypeDescriptor>) -> Result<Self> {
        let mut by_host_id = FxHashMap::default();
        let mut by_alias: FxHashMap<String, ContentTypeId> = FxHashMap::default();
        let mut alias_collisions: FxHashMap<String, Vec<String>> = FxHashMap::default();
        let mut ids = Vec::with_capacity(descriptors.len());

        for (index, descriptor) in descriptors.iter().enumerate() {
            let id = ContentTypeId::new(u32::try_from(index).map_err(|_| {
                Error::panic("too many content types for one generation run")
            })?);
            ids.push(id);
            if by_host_id.insert(descriptor.id, id).is_some() {
                return Err(Error::panic(format!(
                    "content type id {} is used more than once",
                    descriptor.id
                )));
            }
            let key = descriptor.alias.to_lowercase();
            if let Some(existing) = by_alias.get(&key) {
                alias_collisions
                    .entry(key.clone())
                    .or_insert_with(|| vec![descriptors[existing.index()].alias.clone()])
                    .push(descriptor.alias.clone());
            } else {
                by_alias.insert(key, id);
            }
        }

        if !alias_collisions.is_empty() {
            let mut collisions: Vec<_> = alias_collisions.into_iter().collect();
            collisions.sort();
            return Err(Error::DuplicateName {
                kind: NameKind::ContentType,
                collisions,
            });
        }

        let lookup = |host_id: i32, what: &str, alias: &str| {
            by_host_id.get(&host_id).copied().ok_or_else(|| {
                Error::panic(format!(
                    "content type \"{alias}\" references unknown {what} id {host_id}"
                ))
            })
        };

        let mut types = Vec::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.into_iter().enumerate() {
            let base = match descriptor.parent_id {
                None | Some(0) => None,
                Some(parent) => Some(lookup(parent, "parent", &descriptor.alias)?),
            };
            let mixins = descriptor
                .mixin_ids
                .iter()
                .map(|&mixin| lookup(mixin, "mixin", &descriptor.alias))
                .collect::<Result<Vec<_>>>()?;

            types.push(ContentTypeModel {
                id: ids[index],
                host_id: descriptor.id,
                alias: descriptor.alias,
                name: descriptor.name,
                description: descriptor.description,
                kind: descriptor.kind,
                variations: descriptor.variations,
                base,
                mixins,
                is_mixin: false,
                properties: descriptor
                    .properties
                    .into_iter()
                    .map(PropertyModel::from_descriptor)
                    .collect(),
                clr_name: String::new(),
                is_content_ignored: false,
                is_renamed: false,
                has_base: false,
                has_implement: false,
                has_ctor: false,
                declaring_interfaces: Vec::new(),
                implementing_interfaces: Vec::new(),
                ignored_mixin_properties: Vec::new(),
                base_class_name: String::new(),
            });
        }

        let composed: Vec<ContentTypeId> = types
            .iter()
            .flat_map(|ty| ty.mixins.iter().copied())
            .collect();
        for id in composed {
            types[id.index()].is_mixin = true;
        }

        let mut graph = TypeModelGraph { types, by_alias };
        graph.check_acyclic()?;
        graph.mark_mixin_ancestors();
        Ok(graph)
    }

    /// A mixin's interface extends its parent's, so every ancestor of a
    /// mixin is a mixin too.
    fn mark_mixin_ancestors(&mut self) {
        for index in 0..self.types.len() {
            if !self.types[index].is_mixin {
                continue;
            }
            let mut current = self.types[index].base;
            while let Some(id) = current {
                let ancestor = &mut self.types[id.index()];
                if ancestor.is_mixin {
                    break;
                }
                ancestor.is_mixin = true;
                current = ancestor.base;
            }
        }
    }

    fn check_acyclic(&self) -> Result<()> {
        for ty in &self.types {
            let mut steps = 0;
            let mut current = ty.base;
            while let Some(id) = current {
                steps += 1;
                if steps > self.types.len() {
                    return Err(Error::panic(format!(
                        "content type \"{}\" is part of an inheritance cycle",
                        ty.alias
                    )));
                }
                current = self.types[id.index()].base;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ContentTypeId) -> &ContentTypeModel {
        &self.types[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: ContentTypeId) -> &mut ContentTypeModel {
        &mut self.types[id.index()]
    }

    pub fn property(&self, property: PropertyRef) -> &PropertyModel {
        &self.types[property.owner.index()].properties[property.index]
    }

    pub fn find_by_alias(&self, alias: &str) -> Option<ContentTypeId> {
        self.by_alias.get(&alias.to_lowercase()).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = ContentTypeId> + '_ {
        self.types.iter().map(|ty| ty.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentTypeModel> {
        self.types.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ContentTypeModel> {
        self.types.iter_mut()
    }

    /// Types that are not ignored, in host order.
    pub fn live_types(&self) -> impl Iterator<Item = &ContentTypeModel> {
        self.types.iter().filter(|ty| !ty.is_content_ignored)
    }

    /// Parent chain of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: ContentTypeId) -> Ancestors<'_> {
        Ancestors {
            graph: self,
            next: self.get(id).base,
        }
    }

    /// The properties the model class of `id` declares: its own generated
    /// properties, then those of every implemented interface minus the
    /// ones developer code already provides.
    pub fn expanded_properties(&self, id: ContentTypeId) -> Vec<PropertyRef> {
        let ty = self.get(id);
        let mut expanded: Vec<PropertyRef> = (0..ty.properties.len())
            .filter(|&index| ty.is_live_property(index))
            .map(|index| PropertyRef::new(id, index))
            .collect();

        for &mixin in &ty.implementing_interfaces {
            let mixin_type = self.get(mixin);
            expanded.extend(
                (0..mixin_type.properties.len())
                    .filter(|&index| mixin_type.is_live_property(index))
                    .map(|index| PropertyRef::new(mixin, index))
                    .filter(|property| !ty.ignored_mixin_properties.contains(property)),
            );
        }
        expanded
    }
}

/// Iterator over a type's parent chain.
pub struct Ancestors<'a> {
    graph: &'a TypeModelGraph,
    next: Option<ContentTypeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ContentTypeModel;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.graph.get(self.next?);
        self.next = current.base;
        Some(current)
    }
}

#[cfg(test)]
mod tests;
