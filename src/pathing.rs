//! Asset URL construction.

/// Builds the URL an asset reference resolves to.
pub trait AssetPathing {
    fn build_asset_url(&self, module_name: &str, version_ref: &str, asset_path: &str) -> String;
}

/// Asset URLs served from the code manager's CDN:
///
/// ```text
/// <host>/<api_version>/blocks/<module>/versions/<version_ref>/assets/<path>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnPathing {
    host: String,
    api_version: String,
}

impl CdnPathing {
    pub fn new(host: &str, api_version: &str) -> Self {
        CdnPathing {
            host: host.trim_end_matches('/').to_string(),
            api_version: api_version.trim_matches('/').to_string(),
        }
    }
}

impl AssetPathing for CdnPathing {
    fn build_asset_url(&self, module_name: &str, version_ref: &str, asset_path: &str) -> String {
        format!(
            "{}/{}/blocks/{}/versions/{}/assets/{}",
            self.host,
            self.api_version,
            module_name,
            version_ref,
            asset_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments_without_doubled_slashes() {
        let pathing = CdnPathing::new("https://cdn.test/", "/v1/");
        assert_eq!(
            pathing.build_asset_url("famous:demo", "abc", "/img/a.png"),
            "https://cdn.test/v1/blocks/famous:demo/versions/abc/assets/img/a.png"
        );
        assert_eq!(
            pathing.build_asset_url("famous:demo", "abc", ""),
            "https://cdn.test/v1/blocks/famous:demo/versions/abc/assets/"
        );
    }
}
