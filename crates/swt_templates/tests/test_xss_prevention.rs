//! Escaping guarantees of the component template engine
//!
//! Component layouts receive two kinds of values: untrusted text (titles,
//! headers, labels, URLs) and pre-rendered markup passed in through
//! `Context::set_safe`. These tests pin down that only the second kind ever
//! reaches the output unescaped, including across `{% with %}`,
//! `{% include %}` and loops.

use std::collections::HashMap;
use swt_core::{Context, SwtError, Value};
use swt_templates::{MemoryLoader, Template, TemplateEngine};

const PAYLOAD: &str = r#""><script>alert('x')</script>"#;
const PAYLOAD_ESCAPED: &str = "&quot;&gt;&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;";

fn render(source: &str, ctx: &Context) -> String {
    Template::new(source)
        .and_then(|t| t.render(ctx))
        .unwrap_or_else(|e| panic!("rendering {source:?} failed: {e}"))
}

/// Render `source` with `engine` resolving its includes.
fn render_including(engine: &TemplateEngine, source: &str, ctx: &Context) -> String {
    Template::new(source)
        .and_then(|t| t.render_with_loader(ctx, engine))
        .unwrap_or_else(|e| panic!("rendering {source:?} failed: {e}"))
}

/// Engine holding a tooltip-like partial, the shape component templates use.
fn partials() -> TemplateEngine {
    TemplateEngine::new(MemoryLoader::new().with(
        "tooltip.html",
        r#"<span data-toggle="tooltip" title="{{ title }}">{{ body }}</span>"#,
    ))
}

// ============================================================================
// Attribute values
// ============================================================================

#[test]
fn quoted_title_cannot_close_the_attribute() {
    let ctx = Context::new().with("title", PAYLOAD);
    let html = render(r#"<span title="{{ title }}"></span>"#, &ctx);
    assert_eq!(html, format!(r#"<span title="{PAYLOAD_ESCAPED}"></span>"#));
}

#[test]
fn single_quoted_attribute_is_covered_too() {
    let ctx = Context::new().with("url", "/x' onclick='alert(1)");
    let html = render("<a href='{{ url }}'>", &ctx);
    assert_eq!(html, "<a href='/x&#x27; onclick=&#x27;alert(1)'>");
}

#[test]
fn dotted_lookup_is_escaped() {
    let mut header = HashMap::new();
    header.insert("title".to_string(), Value::from("<b>Report</b>"));
    let ctx = Context::new().with("header", Value::Object(header));
    assert_eq!(render("{{ header.title }}", &ctx), "&lt;b&gt;Report&lt;/b&gt;");
}

// ============================================================================
// Trusted markup through set_safe
// ============================================================================

#[test]
fn safe_key_renders_verbatim_next_to_escaped_text() {
    let ctx = Context::new()
        .with("title", "<i>")
        .with_safe("content", "<div class=\"card\">ok</div>");
    assert_eq!(
        render("{{ title }}{{ content }}", &ctx),
        "&lt;i&gt;<div class=\"card\">ok</div>"
    );
}

#[test]
fn include_with_keeps_safe_and_plain_apart() {
    let ctx = Context::new()
        .with("label", PAYLOAD)
        .with_safe("markup", "<i class=\"fa\"></i>");
    let html = render_including(
        &partials(),
        "{% include 'tooltip.html' with title=label body=markup %}",
        &ctx,
    );
    assert_eq!(
        html,
        format!(r#"<span data-toggle="tooltip" title="{PAYLOAD_ESCAPED}"><i class="fa"></i></span>"#)
    );
}

#[test]
fn rebinding_a_safe_name_to_plain_text_escapes_it() {
    let ctx = Context::new()
        .with("label", PAYLOAD)
        .with_safe("body", "<b>trusted</b>");

    let html = render_including(
        &partials(),
        "{% include 'tooltip.html' with title=label body=label %}",
        &ctx,
    );
    assert!(!html.contains("<script>"));
    assert!(html.ends_with(&format!(">{PAYLOAD_ESCAPED}</span>")));

    let with_block = render("{% with body=label %}{{ body }}{% endwith %}", &ctx);
    assert_eq!(with_block, PAYLOAD_ESCAPED);
}

#[test]
fn include_only_does_not_leak_parent_markup() {
    let ctx = Context::new()
        .with("label", "<u>")
        .with_safe("body", "<b>trusted</b>");
    let html = render_including(
        &partials(),
        "{% include 'tooltip.html' with title=label only %}",
        &ctx,
    );
    assert_eq!(html, r#"<span data-toggle="tooltip" title="&lt;u&gt;"></span>"#);
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn safe_filter_opts_out() {
    let ctx = Context::new().with("icon", "<i class=\"fa\"></i>");
    assert_eq!(render("{{ icon|safe }}", &ctx), "<i class=\"fa\"></i>");
}

#[test]
fn escape_and_force_escape_escape_once() {
    let ctx = Context::new().with("text", "a & <b>");
    assert_eq!(render("{{ text|escape }}", &ctx), "a &amp; &lt;b&gt;");
    assert_eq!(render("{{ text|force_escape }}", &ctx), "a &amp; &lt;b&gt;");
}

#[test]
fn force_escape_applies_to_safe_keys() {
    let ctx = Context::new().with_safe("content", "<b>x</b>");
    assert_eq!(render("{{ content|force_escape }}", &ctx), "&lt;b&gt;x&lt;/b&gt;");
}

#[test]
fn striptags_output_is_still_escaped() {
    let ctx = Context::new().with("text", "<scr<script>ipt>alert(1)</script> & more");
    let html = render("{{ text|striptags }}", &ctx);
    assert!(!html.contains('<'));
    assert!(!html.contains('>'));
    assert!(html.ends_with("&amp; more"));
}

#[test]
fn text_filters_keep_escaping() {
    let ctx = Context::new().with("name", "<em>");
    assert_eq!(render("{{ name|upper }}", &ctx), "&lt;EM&gt;");
    assert_eq!(render("{{ missing|default:name }}", &ctx), "&lt;em&gt;");
}

// ============================================================================
// Loops
// ============================================================================

#[test]
fn loop_items_are_escaped() {
    let ctx = Context::new().with("items", vec!["<a>", "b&c"]);
    let html = render("{% for i in items %}<li>{{ i }}</li>{% endfor %}", &ctx);
    assert_eq!(html, "<li>&lt;a&gt;</li><li>b&amp;c</li>");
}

#[test]
fn loop_variable_shadowing_a_safe_key_is_escaped() {
    let ctx = Context::new()
        .with_safe("item", "<b>trusted</b>")
        .with("items", vec!["<a>"]);
    let html = render("{% for item in items %}{{ item }}{% endfor %}|{{ item }}", &ctx);
    assert_eq!(html, "&lt;a&gt;|<b>trusted</b>");
}

#[test]
fn included_partial_escapes_each_loop_item() {
    let engine = TemplateEngine::new(
        MemoryLoader::new()
            .with("item.html", r#"<a href="{{ url }}">{{ label }}</a>"#)
            .with(
                "list.html",
                "{% for url in urls %}{% include 'item.html' with label=url %}{% endfor %}",
            ),
    );
    let ctx = Context::new().with("urls", vec![r#"/a"b"#]);
    assert_eq!(
        engine.render("list.html", &ctx).unwrap(),
        r#"<a href="/a&quot;b">/a&quot;b</a>"#
    );
}

#[test]
fn unknown_template_is_an_error_not_raw_output() {
    let result = partials().render("missing.html", &Context::new());
    assert!(matches!(result, Err(SwtError::TemplateNotFound(_))));
}
