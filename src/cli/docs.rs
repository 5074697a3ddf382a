//! Documentation content for the sugar CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Shorthand,
    Facets,
    Assets,
    Config,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "shorthand" | "directives" | "syntax" => Some(Self::Shorthand),
            "facets" | "behaviors" | "events" => Some(Self::Facets),
            "assets" | "asset" | "cdn" => Some(Self::Assets),
            "config" | "options" => Some(Self::Config),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SUGAR DOCUMENTATION

sugar expands the shorthand authoring syntax of component-module definitions
into plain JavaScript syntax trees, as one step of a module build.

DOCUMENTATION CATEGORIES

  shorthand         The [[directive|filter...]] mini-language
  facets            How the behaviors and events facets are expanded
  assets            Asset reference markers in string literals
  config            Options file fields and their defaults

QUICK REFERENCE

  [[setter]]                  event → function($state,$payload){$state.set('<key>',$payload);}
  [[setter|camel]]            same, key camel-cased
  [[identity|camel|my-prop]]  function(myProp){return myProp;}
  {{@img/a.png}}              asset URL of img/a.png in the current module
  {{@CDN_PATH|other:module}}  asset URL root of another module
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Shorthand) => Ok(SHORTHAND_DOC),
        Some(DocCategory::Facets) => Ok(FACETS_DOC),
        Some(DocCategory::Assets) => Ok(ASSETS_DOC),
        Some(DocCategory::Config) => Ok(CONFIG_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SHORTHAND_DOC: &str = r#"SHORTHAND DIRECTIVES

GRAMMAR
  "[[" name ("|" filter)* "]]"

  Values written without the double brackets are wrapped automatically and a
  warning is logged:  "setter|camel"  is read as  "[[setter|camel]]".

DIRECTIVES
  setter
    The property key, passed through the filters, names the state.
      'title-text': '[[setter|camel]]'
      → function($state,$payload){$state.set('titleText',$payload);}
    In the behaviors facet the identity shape is produced instead.

  identity
    The LAST segment, passed through the filters before it, names the
    parameter. The property key is not used.
      content: '[[identity|camel|title-text]]'
      → function(titleText){return titleText;}

  Any other name fails the build:
    `frobnicate` is not a valid value for an event.

  The identity shape binds the name as a parameter, so it must be a valid
  JavaScript identifier: '[[identity|title-text]]' fails, while
  '[[identity|camel|title-text]]' gives titleText.

FILTERS
  Run 'sugar filters' for the registered filters. Unknown filter names are
  skipped, not rejected.
"#;

const FACETS_DOC: &str = r#"FACETS

BEHAVIORS
  behaviors: { <selector>: { <behavior>: <value> } }

  Only string values matching behaviorSetterPattern are expanded. Values of
  any other shape are left as written.

EVENTS
  events: { <group>: { <event>: <value> } }

  Every literal value is expanded with the state-setter shape, unless it is
  one of reservedEventValues. Nested objects are expanded recursively, except
  the one under passThroughKey (default "$pass-through"), which is forwarded
  untouched.

Already expanded values are functions, so running the step twice changes
nothing in the facets.
"#;

const ASSETS_DOC: &str = r#"ASSET MARKERS

Every string literal of a module definition is scanned.

CDN MARKER
  '{{@CDN_PATH}}'              → <host>/<api>/blocks/<module>/versions/<ref>/assets/
  '{{@CDN_PATH|famous:other}}' → same, for module famous:other

  When a string holds a CDN marker, ordinary markers in it are not expanded.

ASSET MARKER
  'url({{@img/bg.png}})'       → 'url(<host>/<api>/blocks/<module>/versions/<ref>/assets/img/bg.png)'

  Any number of asset markers may appear in one string. Strings without
  markers are left untouched.
"#;

const CONFIG_DOC: &str = r#"CONFIGURATION

Pass --config <file> with a JSON object. Every field is optional.

  behaviorSetterPattern   regex     ^\[\[[\w\-|:]+\]\]$
  reservedEventValues     [string]  ["[[none]]"]
  passThroughKey          string    "$pass-through"
  behaviorsFacetKey       string    "behaviors"
  eventsFacetKey          string    "events"
  assetMarkerPattern      regex     \{\{@([^{}|]+)\}\}
  cdnMarkerPattern        regex     \{\{@CDN_PATH(?:\|([^{}|]+))?\}\}
  assetHost               string    "https://assets.famo.us"
  assetApiVersion         string    "v1"

LOGGING
  Set RUST_LOG (e.g. RUST_LOG=module_sugar=debug) to see per-module progress.
  Shorthand auto-corrections are logged at warn level.
"#;
