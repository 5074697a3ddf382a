//! Listing of registered filters

use crate::FilterRegistry;

/// Describe the filters usable in `[[name|filter...]]` directives
pub fn filters_overview(registry: &FilterRegistry) -> String {
    let mut out = String::from("REGISTERED FILTERS\n\n");
    for name in registry.names() {
        let sample = registry.apply(name, "my-prop");
        out.push_str(&format!("  {:<14}my-prop -> {}\n", name, sample));
    }
    out.push_str("\nUnknown filter names are skipped.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_camel_and_alias() {
        let text = filters_overview(&FilterRegistry::standard());
        assert!(text.contains("camel         my-prop -> myProp"));
        assert!(text.contains("camel-case    my-prop -> myProp"));
    }
}
