//! Expansion of the `behaviors` and `events` facets.
//!
//! ```text
//! behaviors: { '#title': { content: '[[identity|camel|title-text]]' } }
//!   → behaviors: { '#title': { content: function(titleText){return titleText;} } }
//!
//! events: { '$public': { 'title-text': '[[setter|camel]]' } }
//!   → events: { '$public': { 'title-text': function($state,$payload){$state.set('titleText',$payload);} } }
//! ```

use tracing::debug;

use crate::{
    ast::Expr,
    directive::DirectiveError,
    expand::ExpandContext,
    shorthand::{Template, build_function},
    visit::each_object_property_mut,
};

/// Expands both facets of a module definition.
///
/// `_config` is the module's configuration tree; no option read from it yet.
pub fn process_syntactical_sugar(
    ctx: &ExpandContext<'_>,
    definition: &mut Expr,
    _config: Option<&Expr>,
) -> Result<(), DirectiveError> {
    let options = ctx.options;
    each_object_property_mut(definition, |facet| {
        let Some(facet_name) = facet.key_name() else {
            return Ok(());
        };
        if facet_name == options.behaviors_facet_key {
            debug!(facet = %facet_name, "expanding behaviors");
            expand_behaviors(ctx, &mut facet.value)
        } else if facet_name == options.events_facet_key {
            debug!(facet = %facet_name, "expanding events");
            expand_events(ctx, &mut facet.value)
        } else {
            Ok(())
        }
    })
}

/// Replaces behavior values matching the setter pattern with identity-shaped
/// functions. Behaviors are grouped by selector, so the walk is two levels.
pub fn expand_behaviors(ctx: &ExpandContext<'_>, behaviors: &mut Expr) -> Result<(), DirectiveError> {
    each_object_property_mut(behaviors, |selector| {
        each_object_property_mut(&mut selector.value, |behavior| {
            let Some(key) = behavior.key_name() else {
                return Ok(());
            };
            let Some(value) = behavior.value.as_str() else {
                return Ok(());
            };
            if ctx.options.behavior_setter_regex.is_match(value) {
                let func = build_function(ctx.filters, &key, value, Template::Identity)?;
                behavior.value = func;
            }
            Ok(())
        })
    })
}

/// Replaces literal event values with state-setter functions, recursing into
/// nested objects except the pass-through one.
pub fn expand_events(ctx: &ExpandContext<'_>, events: &mut Expr) -> Result<(), DirectiveError> {
    each_object_property_mut(events, |event| {
        let Some(key) = event.key_name() else {
            return Ok(());
        };

        if let Expr::Literal(lit) = &event.value {
            let value = lit.to_key_string();
            // Reserved values are interpreted by the runtime
            if !ctx.options.is_reserved_event_value(&value) {
                let func = build_function(ctx.filters, &key, &value, Template::StateSetter)?;
                event.value = func;
            }
        } else if event.value.is_object() && key != ctx.options.pass_through_key {
            expand_events(ctx, &mut event.value)?;
        }
        Ok(())
    })
}
