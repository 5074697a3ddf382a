//! Asset reference interpolation in string literals.
//!
//! Two marker forms are recognised (patterns come from [`Options`]):
//!
//! ```text
//! '{{@img/logo.png}}'               → <asset URL for current module>/img/logo.png
//! '{{@CDN_PATH|famous:core:ui}}'    → <asset URL root for famous:core:ui>
//! '{{@CDN_PATH}}'                   → <asset URL root for current module>
//! ```
//!
//! A string containing a CDN marker is handled by the CDN rule alone.

use crate::{ast::Expr, expand::ExpandContext, visit::each_string_literal_mut};

/// Rewrites asset markers in every string literal of `tree`.
pub fn interpolate_asset_strings(ctx: &ExpandContext<'_>, module_name: &str, version_ref: &str, tree: &mut Expr) {
    each_string_literal_mut(tree, &mut |value: &mut String| {
        if let Some(rewritten) = interpolate_string(ctx, module_name, version_ref, value) {
            *value = rewritten;
        }
    });
}

/// The interpolated form of `value`, or `None` when it holds no marker.
pub fn interpolate_string(
    ctx: &ExpandContext<'_>,
    module_name: &str,
    version_ref: &str,
    value: &str,
) -> Option<String> {
    let options = ctx.options;

    if let Some(caps) = options.cdn_marker_regex.captures(value) {
        let marker = caps.get(0)?.as_str();
        let asset_module = caps
            .get(1)
            .map(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or(module_name);
        let url = ctx.pathing.build_asset_url(asset_module, version_ref, "");
        return Some(value.replace(marker, &url));
    }

    let matches: Vec<(String, String)> = options
        .asset_marker_regex
        .captures_iter(value)
        .filter_map(|caps| Some((caps.get(0)?.as_str().to_string(), caps.get(1)?.as_str().to_string())))
        .collect();
    if matches.is_empty() {
        return None;
    }

    let mut result = value.to_string();
    for (marker, path) in matches {
        let url = ctx.pathing.build_asset_url(module_name, version_ref, &path);
        result = result.replace(&marker, &url);
    }
    Some(result)
}
