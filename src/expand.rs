//! The syntax expansion build step.
//!
//! For every module definition in a [`BuildUnit`]:
//!
//! 1. asset markers in string literals are interpolated ([`crate::assets`])
//! 2. the `behaviors` and `events` facets are expanded ([`crate::facets`])
//! 3. the expanded tree replaces the definition argument of the module's
//!    library invocation
//!
//! Then every library invocation gets the version reference as its second
//! argument ([`crate::invocation`]). Trees are rewritten in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    assets::interpolate_asset_strings,
    ast::Expr,
    directive::DirectiveError,
    facets::process_syntactical_sugar,
    filters::FilterRegistry,
    invocation::{add_version_ref, write_back_definition},
    options::Options,
    pathing::AssetPathing,
};

/// Everything the pass reads besides the trees themselves.
#[derive(Clone, Copy)]
pub struct ExpandContext<'a> {
    pub options: &'a Options,
    pub filters: &'a FilterRegistry,
    pub pathing: &'a dyn AssetPathing,
}

impl<'a> ExpandContext<'a> {
    /// Context resolving asset URLs with the options' CDN pathing.
    pub fn new(options: &'a Options, filters: &'a FilterRegistry) -> Self {
        ExpandContext {
            options,
            filters,
            pathing: &options.pathing,
        }
    }

    pub fn with_pathing(self, pathing: &'a dyn AssetPathing) -> Self {
        ExpandContext { pathing, ..self }
    }
}

/// The trees of one build, keyed by module name.
///
/// Serialized with the field names the build pipeline uses:
///
/// ```json
/// {
///   "moduleDefinitionASTs": { "famous:demo": { "type": "ObjectExpression", ... } },
///   "moduleConfigASTs":     { "famous:demo": { "type": "ObjectExpression", ... } },
///   "libraryInvocations":   { "famous:demo": { "type": "CallExpression", ... } },
///   "versionRef": "HEAD"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildUnit {
    #[serde(rename = "moduleDefinitionASTs", default)]
    pub module_definitions: BTreeMap<String, Expr>,
    #[serde(rename = "moduleConfigASTs", default)]
    pub module_configs: BTreeMap<String, Expr>,
    #[serde(rename = "libraryInvocations", default)]
    pub library_invocations: BTreeMap<String, Expr>,
    #[serde(rename = "versionRef")]
    pub version_ref: String,
}

impl BuildUnit {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Errors that abort the expansion of a build unit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpandError {
    /// A shorthand directive could not be resolved
    #[error("module `{module}`: {source}")]
    Directive {
        module: String,
        #[source]
        source: DirectiveError,
    },
}

/// Runs the pass over `unit` and returns it rewritten.
///
/// The first unresolvable directive aborts the whole unit. There is no
/// partial result.
pub fn expand(ctx: &ExpandContext<'_>, mut unit: BuildUnit) -> Result<BuildUnit, ExpandError> {
    let BuildUnit {
        module_definitions,
        module_configs,
        library_invocations,
        version_ref,
    } = &mut unit;

    for (module_name, definition) in module_definitions.iter_mut() {
        debug!(module = %module_name, "expanding module definition");
        let invocation = library_invocations.get_mut(module_name);
        let original = invocation.as_ref().map(|_| definition.clone());

        interpolate_asset_strings(ctx, module_name, version_ref, definition);
        process_syntactical_sugar(ctx, definition, module_configs.get(module_name)).map_err(|source| {
            ExpandError::Directive {
                module: module_name.clone(),
                source,
            }
        })?;

        if let (Some(invocation), Some(original)) = (invocation, original) {
            if !write_back_definition(invocation, &original, definition) {
                debug!(module = %module_name, "definition not found among invocation arguments");
            }
        }
    }

    for (module_name, invocation) in library_invocations.iter_mut() {
        debug!(module = %module_name, version_ref = %version_ref, "versioning library invocation");
        add_version_ref(version_ref, invocation);
    }

    Ok(unit)
}

/// Build-step form of [`expand`]: on success `completion` is called with no
/// error and the rewritten unit before this returns. A directive error is
/// returned directly and `completion` is never called.
pub fn expand_syntax<F>(ctx: &ExpandContext<'_>, unit: BuildUnit, completion: F) -> Result<(), ExpandError>
where
    F: FnOnce(Option<ExpandError>, BuildUnit),
{
    let unit = expand(ctx, unit)?;
    completion(None, unit);
    Ok(())
}
