use module_sugar::{
    DirectiveError, FilterRegistry, Template, build_function,
    ast::{Expr, Stmt},
    output::to_js,
};

fn build(key: &str, value: &str, template: Template) -> Result<String, DirectiveError> {
    let filters = FilterRegistry::standard();
    build_function(&filters, key, value, template).map(|f| to_js(&f))
}

// ============================================================================
// Templates
// ============================================================================

#[test]
fn test_state_setter_template_shape() {
    let func = Template::StateSetter.instantiate("myProp");
    let Expr::Function(f) = &func else {
        panic!("expected function, got {:?}", func);
    };
    assert_eq!(f.params, vec!["$state", "$payload"]);
    assert_eq!(f.body.len(), 1);
    assert!(matches!(f.body[0], Stmt::Expression(Expr::Call(_))));
    assert_eq!(to_js(&func), "function($state,$payload){$state.set('myProp',$payload);}");
}

#[test]
fn test_identity_template_shape() {
    let func = Template::Identity.instantiate("myProp");
    assert_eq!(to_js(&func), "function(myProp){return myProp;}");
}

// ============================================================================
// setter
// ============================================================================

#[test]
fn test_setter_uses_property_key() {
    assert_eq!(
        build("title", "[[setter]]", Template::StateSetter).unwrap(),
        "function($state,$payload){$state.set('title',$payload);}"
    );
}

#[test]
fn test_setter_filters_property_key() {
    assert_eq!(
        build("my-prop", "[[setter|camel]]", Template::StateSetter).unwrap(),
        "function($state,$payload){$state.set('myProp',$payload);}"
    );
    assert_eq!(
        build("my-prop", "[[setter|camel-case]]", Template::StateSetter).unwrap(),
        "function($state,$payload){$state.set('myProp',$payload);}"
    );
}

#[test]
fn test_setter_with_identity_template() {
    assert_eq!(
        build("font-size", "[[setter|camel]]", Template::Identity).unwrap(),
        "function(fontSize){return fontSize;}"
    );
}

#[test]
fn test_setter_skips_unknown_filters() {
    // Segments that are not registered filters leave the key as is
    assert_eq!(
        build("x", "[[setter|my-prop]]", Template::StateSetter).unwrap(),
        "function($state,$payload){$state.set('x',$payload);}"
    );
    assert_eq!(
        build("a-b", "[[setter|upper|camel]]", Template::StateSetter).unwrap(),
        "function($state,$payload){$state.set('aB',$payload);}"
    );
}

// ============================================================================
// identity
// ============================================================================

#[test]
fn test_identity_names_by_last_segment() {
    assert_eq!(
        build("ignored", "[[identity|camel|my-prop]]", Template::StateSetter).unwrap(),
        "function(myProp){return myProp;}"
    );
}

#[test]
fn test_identity_without_filters() {
    assert_eq!(
        build("ignored", "[[identity|content]]", Template::Identity).unwrap(),
        "function(content){return content;}"
    );
}

#[test]
fn test_identity_without_segment_fails() {
    let err = build("title", "[[identity]]", Template::Identity).unwrap_err();
    assert_eq!(err, DirectiveError::MissingIdentifier { key: "title".into() });
}

#[test]
fn test_identity_rejects_names_that_are_not_identifiers() {
    let err = build("content", "[[identity|title-text]]", Template::Identity).unwrap_err();
    assert_eq!(
        err,
        DirectiveError::InvalidIdentifier {
            key: "content".into(),
            name: "title-text".into(),
        }
    );
    assert!(err.to_string().contains("title-text"));
}

#[test]
fn test_identity_rejects_reserved_words() {
    assert!(matches!(
        build("content", "[[identity|return]]", Template::Identity),
        Err(DirectiveError::InvalidIdentifier { .. })
    ));
    assert!(matches!(
        build("this", "[[setter]]", Template::Identity),
        Err(DirectiveError::InvalidIdentifier { .. })
    ));
}

#[test]
fn test_setter_with_identity_template_needs_identifier_key() {
    let err = build("font-size", "[[setter]]", Template::Identity).unwrap_err();
    assert_eq!(
        err,
        DirectiveError::InvalidIdentifier {
            key: "font-size".into(),
            name: "font-size".into(),
        }
    );
}

#[test]
fn test_state_setter_accepts_any_key() {
    // The name is only ever quoted in the state-setter shape
    assert_eq!(
        build("font-size", "[[setter]]", Template::StateSetter).unwrap(),
        "function($state,$payload){$state.set('font-size',$payload);}"
    );
}

// ============================================================================
// Delimiters and errors
// ============================================================================

#[test]
fn test_missing_brackets_are_healed() {
    assert_eq!(
        build("my-prop", "setter|camel", Template::StateSetter),
        build("my-prop", "[[setter|camel]]", Template::StateSetter)
    );
}

#[test]
fn test_missing_brackets_on_unknown_directive() {
    let bare = build("x", "my-prop", Template::StateSetter);
    let bracketed = build("x", "[[my-prop]]", Template::StateSetter);
    assert_eq!(bare, bracketed);
    assert_eq!(bare.unwrap_err(), DirectiveError::InvalidDirective { name: "my-prop".into() });
}

#[test]
fn test_unknown_directive_is_named() {
    let err = build("x", "[[frobnicate|y]]", Template::Identity).unwrap_err();
    assert_eq!(err, DirectiveError::InvalidDirective { name: "frobnicate".into() });
    assert!(err.to_string().contains("frobnicate"));
}
