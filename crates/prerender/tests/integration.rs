//! Integration tests - Full pipeline from bundle to markup
//!
//! Tests the complete workflow: requests → program → QuickJS → DOM → HTML

use prerender::*;
use serde_json::json;

const BUNDLE: &str = include_str!("fixtures/app.bundle.js");
const FILE: &str = "fixtures/app.bundle.js";

fn renderer() -> Renderer {
    Renderer::new(BUNDLE, FILE, Config::default())
}

// ============================================================================
// SINGLE RENDER
// ============================================================================

#[test]
fn test_card_end_to_end() {
    let output = renderer()
        .render(vec![RenderRequest::new("Card").with_data(json!({ "title": "Hi" }))].into())
        .unwrap();

    let results = output.into_batch().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Card");
    assert_eq!(results[0].markup, r#"<div><div class="title">Hi</div></div>"#);
    assert_eq!(results[0].style, None);
}

#[test]
fn test_single_input_gives_single_output() {
    let output = renderer()
        .render(RenderRequest::new("Card").with_data(json!({ "title": "Solo" })).into())
        .unwrap();

    let result = output.into_single().expect("single result");
    assert_eq!(result.markup, r#"<div><div class="title">Solo</div></div>"#);
}

#[test]
fn test_list_with_anchor_and_style() {
    let result = renderer()
        .render_one(&RenderRequest::new("List").with_data(json!({ "list": ["Franny", "Millie", "Minnie"] })))
        .unwrap();

    assert_eq!(
        result.markup,
        r#"<div><ul class="svelte-list"><li>Franny</li><li>Millie</li><li>Minnie</li><!--  --></ul></div>"#
    );
    assert_eq!(result.style.as_deref(), Some("ul.svelte-list{margin:0}"));
}

#[test]
fn test_style_accumulates_in_order() {
    let result = renderer()
        .render_one(&RenderRequest::new("Greeting").with_data(json!({ "name": "Paul" })))
        .unwrap();

    assert_eq!(result.markup, "<div><h1>Hello Paul!</h1></div>");
    assert_eq!(result.style.as_deref(), Some("a{color:red}b{color:blue}"));
}

#[test]
fn test_missing_data_defaults_to_empty_object() {
    let result = renderer().render_one(&RenderRequest::new("Greeting")).unwrap();
    assert_eq!(result.markup, "<div><h1>Hello stranger!</h1></div>");
}

#[test]
fn test_query_selector_root_is_not_a_target() {
    let result = renderer().render_one(&RenderRequest::new("Mounted")).unwrap();
    assert_eq!(result.markup, "<div>target</div>");
}

// ============================================================================
// BATCHES
// ============================================================================

#[test]
fn test_repeated_component_renders_independently() {
    let results = renderer()
        .render_batch(&[
            RenderRequest::new("Greeting").with_data(json!({ "name": "Ann" })),
            RenderRequest::new("Card").with_data(json!({ "title": "Between" })),
            RenderRequest::new("Greeting").with_data(json!({ "name": "Bob" })),
        ])
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].markup, "<div><h1>Hello Ann!</h1></div>");
    assert_eq!(results[1].markup, r#"<div><div class="title">Between</div></div>"#);
    assert_eq!(results[2].markup, "<div><h1>Hello Bob!</h1></div>");

    // each occurrence owns its style entry
    assert_eq!(results[0].style.as_deref(), Some("a{color:red}b{color:blue}"));
    assert_eq!(results[1].style, None);
    assert_eq!(results[2].style.as_deref(), Some("a{color:red}b{color:blue}"));
}

#[test]
fn test_keyed_convention() {
    let keyed = renderer()
        .render_keyed(&[
            RenderRequest::new("Card").with_data(json!({ "title": "first" })),
            RenderRequest::new("List").with_data(json!({ "list": [] })),
            RenderRequest::new("Card").with_data(json!({ "title": "second" })),
        ])
        .unwrap();

    assert_eq!(keyed.len(), 2);
    assert_eq!(keyed["Card"].markup, r#"<div><div class="title">second</div></div>"#);
    assert_eq!(keyed["List"].markup, r#"<div><ul class="svelte-list"><!--  --></ul></div>"#);
}

#[test]
fn test_batches_do_not_share_state() {
    let renderer = renderer();
    let first = renderer.render_one(&RenderRequest::new("List").with_data(json!({ "list": ["x"] }))).unwrap();
    let second = renderer.render_one(&RenderRequest::new("List").with_data(json!({ "list": ["x"] }))).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.style.as_deref(), Some("ul.svelte-list{margin:0}"));
}

#[test]
fn test_data_with_quotes_and_unicode() {
    let title = r#"She said "hi" </script> ✓"#;
    let result = renderer()
        .render_one(&RenderRequest::new("Card").with_data(json!({ "title": title })))
        .unwrap();
    assert_eq!(result.markup, format!(r#"<div><div class="title">{title}</div></div>"#));
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_unknown_component_fails() {
    let err = renderer()
        .render_batch(&[
            RenderRequest::new("Card").with_data(json!({ "title": "ok" })),
            RenderRequest::new("Nope"),
        ])
        .unwrap_err();

    assert_eq!(err.file(), Some(FILE));
    match err {
        RenderError::Execution(js::JsError::UnresolvedReference { name, .. }) => assert_eq!(name, "Nope"),
        other => panic!("Expected unresolved reference, got {other:?}"),
    }
}

#[test]
fn test_throwing_component_fails_whole_batch() {
    let err = renderer()
        .render_batch(&[RenderRequest::new("Card"), RenderRequest::new("Broken").with_data(json!({ "n": 1 }))])
        .unwrap_err();

    match err {
        RenderError::Execution(js::JsError::Execution { file, message }) => {
            assert_eq!(file, FILE);
            assert!(message.contains("Broken cannot render"), "{message}");
        }
        other => panic!("Expected execution failure, got {other:?}"),
    }
}

#[test]
fn test_broken_bundle_fails() {
    let renderer = Renderer::new("exports.Card = function (", "broken.js", Config::default());
    let err = renderer.render_one(&RenderRequest::new("Card")).unwrap_err();
    assert_eq!(err.file(), Some("broken.js"));
    assert!(err.to_string().starts_with("broken.js: "));
}

#[test]
fn test_top_level_render_function() {
    let output = render(BUNDLE, FILE, RenderRequest::new("Card").with_data(json!({ "title": "Top" }))).unwrap();
    assert_eq!(
        output,
        RenderOutput::Single(RenderResult {
            name: "Card".to_string(),
            markup: r#"<div><div class="title">Top</div></div>"#.to_string(),
            style: None,
        })
    );
}
