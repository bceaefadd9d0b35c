//! Mixin interface resolution.
//!
//! A type must *declare* the interfaces of its own mixins that its parent
//! does not already provide, and its class must *implement* the properties
//! of every type reachable from those declared mixins, again minus what
//! the parent provides.

use mb_ir::{ContentTypeId, PropertyRef, TypeModelGraph};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::Builder;

/// Types implemented by `id`: itself, its live ancestors and everything they
/// compose, transitively. Ignored types and everything behind them are
/// skipped.
fn collect_implems(graph: &TypeModelGraph, id: ContentTypeId, into: &mut Vec<ContentTypeId>) {
    let mut seen: FxHashSet<ContentTypeId> = into.iter().copied().collect();
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        let ty = graph.get(current);
        if ty.is_content_ignored || !seen.insert(current) {
            continue;
        }
        into.push(current);
        stack.extend(ty.mixins.iter().rev().copied());
        stack.extend(ty.base);
    }
}

impl Builder<'_> {
    #[tracing::instrument(level = "debug", skip_all)]
    pub(crate) fn resolve_interfaces(&mut self) {
        let parse = self.parse;
        let ids: Vec<_> = self.graph.live_types().map(|ty| ty.id).collect();
        for id in ids {
            let graph = &*self.graph;
            let ty = graph.get(id);

            let mut parent_implems = Vec::new();
            if let Some(base) = ty.base {
                collect_implems(graph, base, &mut parent_implems);
            }

            let mut declaring: Vec<ContentTypeId> = Vec::new();
            for &mixin in &ty.mixins {
                if !graph.get(mixin).is_content_ignored
                    && !parent_implems.contains(&mixin)
                    && !declaring.contains(&mixin)
                {
                    declaring.push(mixin);
                }
            }

            let mut reachable = Vec::new();
            for &mixin in &declaring {
                collect_implems(graph, mixin, &mut reachable);
            }
            let implementing: Vec<ContentTypeId> = reachable
                .into_iter()
                .filter(|other| *other != id && !parent_implems.contains(other))
                .collect();

            let chain: Vec<&str> = std::iter::once(ty)
                .chain(graph.ancestors(id))
                .map(|ty| ty.clr_name.as_str())
                .collect();
            let mut ignored = Vec::new();
            for &mixin in &implementing {
                let mixin_type = graph.get(mixin);
                for (index, property) in mixin_type.properties.iter().enumerate() {
                    if !property.is_generated() {
                        continue;
                    }
                    if chain
                        .iter()
                        .any(|class| parse.is_ignored_property(class, &property.alias))
                    {
                        trace!(
                            owner = %ty.alias,
                            property = %property.alias,
                            "mixin property implemented by hand"
                        );
                        ignored.push(PropertyRef::new(mixin, index));
                    }
                }
            }

            let ty = self.graph.get_mut(id);
            ty.declaring_interfaces = declaring;
            ty.implementing_interfaces = implementing;
            ty.ignored_mixin_properties = ignored;
        }
    }
}
