use module_sugar::cli::{CliError, Emit, ExpandOptions, execute_expand};
use serde_json::json;
use std::io::Write;

fn unit() -> String {
    json!({
        "moduleDefinitionASTs": {
            "famous:demo": {
                "type": "ObjectExpression",
                "properties": [{
                    "type": "Property",
                    "key": { "type": "Identifier", "name": "events" },
                    "computed": false, "kind": "init", "method": false, "shorthand": false,
                    "value": { "type": "ObjectExpression", "properties": [{
                        "type": "Property",
                        "key": { "type": "Identifier", "name": "size" },
                        "computed": false, "kind": "init", "method": false, "shorthand": false,
                        "value": { "type": "Literal", "value": "[[setter]]", "raw": "'[[setter]]'" }
                    }]}
                }]
            }
        },
        "versionRef": "HEAD"
    })
    .to_string()
}

#[test]
fn test_expand_emits_js() {
    let options = ExpandOptions {
        input: Some(unit()),
        emit: Emit::Js,
        ..ExpandOptions::default()
    };

    let out = execute_expand(&options).unwrap();

    assert_eq!(
        out,
        "// famous:demo definition\n{events:{size:function($state,$payload){$state.set('size',$payload);}}}\n"
    );
}

#[test]
fn test_expand_emits_json() {
    let options = ExpandOptions {
        input: Some(unit()),
        ..ExpandOptions::default()
    };

    let out: serde_json::Value = serde_json::from_str(&execute_expand(&options).unwrap()).unwrap();

    assert_eq!(out["versionRef"], json!("HEAD"));
    assert_eq!(
        out["moduleDefinitionASTs"]["famous:demo"]["properties"][0]["value"]["properties"][0]["value"]["type"],
        json!("FunctionExpression")
    );
}

#[test]
fn test_expand_with_config_file() {
    let mut file = std::env::temp_dir();
    file.push(format!("sugar-config-{}.json", std::process::id()));
    std::fs::File::create(&file)
        .unwrap()
        .write_all(br#"{"reservedEventValues": ["[[setter]]"]}"#)
        .unwrap();

    let options = ExpandOptions {
        input: Some(unit()),
        config: Some(file.clone()),
        emit: Emit::Js,
        ..ExpandOptions::default()
    };
    let out = execute_expand(&options).unwrap();
    std::fs::remove_file(&file).unwrap();

    assert!(out.contains("{events:{size:'[[setter]]'}}"));
}

#[test]
fn test_expand_errors() {
    assert!(matches!(execute_expand(&ExpandOptions::default()), Err(CliError::NoInput)));

    let bad = ExpandOptions {
        input: Some("{ not json".to_string()),
        ..ExpandOptions::default()
    };
    assert!(matches!(execute_expand(&bad), Err(CliError::Json(_))));

    let missing = ExpandOptions {
        input: Some(unit()),
        config: Some("/nonexistent/sugar.json".into()),
        ..ExpandOptions::default()
    };
    assert!(matches!(execute_expand(&missing), Err(CliError::Config(_))));
}
