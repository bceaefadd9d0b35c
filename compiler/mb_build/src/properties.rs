//! Property-level developer overrides.

use tracing::{debug, trace};

use crate::Builder;

impl Builder<'_> {
    /// Ignore, rename and extension flags for every property.
    ///
    /// Overrides are looked up on the type's own class first, then on each
    /// ancestor's class, nearest first.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(crate) fn resolve_properties(&mut self) {
        let parse = self.parse;
        let ids: Vec<_> = self.graph.ids().collect();
        for id in ids {
            let chain: Vec<String> = std::iter::once(self.graph.get(id))
                .chain(self.graph.ancestors(id))
                .map(|ty| ty.clr_name.clone())
                .collect();

            let ty = self.graph.get_mut(id);
            let mut owners = vec![ty.clr_name.clone()];
            if ty.is_mixin {
                owners.push(ty.interface_name());
            }

            for property in &mut ty.properties {
                property.is_ignored = chain
                    .iter()
                    .any(|class| parse.is_ignored_property(class, &property.alias));
                if property.is_ignored {
                    trace!(owner = %ty.alias, property = %property.alias, "property ignored");
                }

                if let Some(name) = chain
                    .iter()
                    .find_map(|class| parse.property_clr_name(class, &property.alias))
                {
                    debug!(
                        owner = %ty.alias,
                        property = %property.alias,
                        clr_name = name,
                        "property renamed"
                    );
                    property.clr_name = name.to_string();
                }

                let accessor = property.clr_name.trim_start_matches('@');
                property.is_extension_implemented = owners
                    .iter()
                    .any(|owner| parse.is_extension_implemented(owner, accessor));
            }
        }
    }
}
