use module_sugar::{
    AssetPathing, CdnPathing, ExpandContext, FilterRegistry, Options,
    assets::{interpolate_asset_strings, interpolate_string},
    ast::{CallExpr, Expr, Property},
    expr_from_json, expr_to_json,
};
use serde_json::json;

const HOST: &str = "https://assets.famo.us/v1/blocks";

fn url(module: &str, version: &str, path: &str) -> String {
    CdnPathing::new("https://assets.famo.us", "v1").build_asset_url(module, version, path)
}

fn interpolate(module: &str, version: &str, value: &str) -> Option<String> {
    let options = Options::standard().unwrap();
    let filters = FilterRegistry::standard();
    let ctx = ExpandContext::new(&options, &filters);
    interpolate_string(&ctx, module, version, value)
}

#[test]
fn test_default_url_layout() {
    assert_eq!(
        url("widgets", "3.2.1", "img/a.png"),
        format!("{}/widgets/versions/3.2.1/assets/img/a.png", HOST)
    );
}

// ============================================================================
// Ordinary markers
// ============================================================================

#[test]
fn test_single_marker_becomes_url() {
    assert_eq!(
        interpolate("widgets", "3.2.1", "{{@img/a.png}}"),
        Some(url("widgets", "3.2.1", "img/a.png"))
    );
}

#[test]
fn test_surrounding_text_is_preserved() {
    assert_eq!(
        interpolate("widgets", "3.2.1", "url({{@img/a.png}}) no-repeat"),
        Some(format!("url({}) no-repeat", url("widgets", "3.2.1", "img/a.png")))
    );
}

#[test]
fn test_multiple_markers() {
    assert_eq!(
        interpolate("w", "v", "<img src=\"{{@a.png}}\"><img src=\"{{@b.png}}\">"),
        Some(format!(
            "<img src=\"{}\"><img src=\"{}\">",
            url("w", "v", "a.png"),
            url("w", "v", "b.png")
        ))
    );
}

#[test]
fn test_repeated_marker_replaced_everywhere() {
    let expected = url("w", "v", "a.png");
    assert_eq!(
        interpolate("w", "v", "{{@a.png}} {{@a.png}}"),
        Some(format!("{} {}", expected, expected))
    );
}

#[test]
fn test_string_without_marker_is_untouched() {
    assert_eq!(interpolate("w", "v", "plain text"), None);
    assert_eq!(interpolate("w", "v", "{{not a marker}}"), None);
}

// ============================================================================
// CDN markers
// ============================================================================

#[test]
fn test_cdn_marker_with_module() {
    assert_eq!(
        interpolate("widgets", "3.2.1", "{{@CDN_PATH|otherMod}}"),
        Some(url("otherMod", "3.2.1", ""))
    );
}

#[test]
fn test_cdn_marker_defaults_to_current_module() {
    assert_eq!(
        interpolate("widgets", "3.2.1", "{{@CDN_PATH}}fonts/x.woff"),
        Some(format!("{}fonts/x.woff", url("widgets", "3.2.1", "")))
    );
}

#[test]
fn test_cdn_marker_excludes_ordinary_markers() {
    assert_eq!(
        interpolate("w", "v", "{{@CDN_PATH}} {{@a.png}}"),
        Some(format!("{} {{{{@a.png}}}}", url("w", "v", "")))
    );
}

// ============================================================================
// Tree walk
// ============================================================================

#[test]
fn test_every_string_literal_in_tree() {
    let mut tree = Expr::object(vec![
        Property::init("tree", Expr::string("<img src=\"{{@logo.png}}\">")),
        Property::init(
            "behaviors",
            Expr::object(vec![Property::init(
                "#logo",
                Expr::object(vec![Property::init(
                    "style",
                    Expr::Call(CallExpr::new(Expr::ident("bg"), vec![Expr::string("{{@bg.png}}")])),
                )]),
            )]),
        ),
        Property::init("untouched", Expr::string("plain")),
    ]);

    let options = Options::standard().unwrap();
    let filters = FilterRegistry::standard();
    let ctx = ExpandContext::new(&options, &filters);
    interpolate_asset_strings(&ctx, "w", "v", &mut tree);

    let obj = tree.as_object().unwrap();
    assert_eq!(obj.get("tree").unwrap().as_str().unwrap(), format!("<img src=\"{}\">", url("w", "v", "logo.png")));
    assert_eq!(obj.get("untouched").unwrap().as_str(), Some("plain"));

    let Some(Expr::Call(call)) = obj
        .get("behaviors")
        .and_then(Expr::as_object)
        .and_then(|b| b.get("#logo"))
        .and_then(Expr::as_object)
        .and_then(|l| l.get("style"))
    else {
        panic!("style call missing");
    };
    assert_eq!(call.arguments[0].as_str().unwrap(), url("w", "v", "bg.png"));
}

#[test]
fn test_string_literals_inside_opaque_nodes() {
    // Binary expressions are not modelled and travel as JSON
    let mut tree = expr_from_json(&json!({
        "type": "BinaryExpression",
        "operator": "+",
        "left": { "type": "Literal", "value": "{{@a.png}}", "raw": "'{{@a.png}}'" },
        "right": { "type": "Literal", "value": 1, "raw": "1" }
    }))
    .unwrap();
    assert!(matches!(tree, Expr::Opaque(_)));

    let options = Options::standard().unwrap();
    let filters = FilterRegistry::standard();
    let ctx = ExpandContext::new(&options, &filters);
    interpolate_asset_strings(&ctx, "w", "v", &mut tree);

    let json = expr_to_json(&tree);
    let expected = url("w", "v", "a.png");
    assert_eq!(json["left"]["value"], json!(expected));
    assert_eq!(json["left"]["raw"], json!(format!("'{}'", expected)));
    assert_eq!(json["right"]["value"], json!(1));
}

#[test]
fn test_custom_pathing() {
    struct Local;
    impl AssetPathing for Local {
        fn build_asset_url(&self, module: &str, version: &str, path: &str) -> String {
            format!("/local/{}@{}/{}", module, version, path)
        }
    }

    let options = Options::standard().unwrap();
    let filters = FilterRegistry::standard();
    let ctx = ExpandContext::new(&options, &filters).with_pathing(&Local);

    assert_eq!(
        interpolate_string(&ctx, "w", "v", "{{@a.png}}"),
        Some("/local/w@v/a.png".to_string())
    );
}
