//! Variable substitution engine for templates
//!
//! Rendering runs in two steps:
//! 1. every `{{name}}` with a defined value is replaced by its string form
//! 2. `{{#if name}} … {{/if}}` blocks are resolved against the variable map
//!
//! Block resolution is a single scan with an explicit stack of open blocks.
//! A closer always pairs with the nearest open block. Closers with nothing to
//! close are dropped, and blocks that are never closed lose their marker but
//! keep their content, so no block syntax reaches the output.

use super::types::VariableMap;

const MARKER_START: &str = "{{";
const OPEN_PREFIX: &str = "{{#if";
const CLOSE_MARKER: &str = "{{/if}}";
const MARKER_END: &str = "}}";

/// Render a template document with the given variables. Never fails.
pub fn render(document: &str, variables: &VariableMap) -> String {
    let substituted = substitute_placeholders(document, variables);
    resolve_conditionals(&substituted, variables)
}

/// Render every string (and object key) inside a JSON value
pub fn render_json(value: &serde_json::Value, variables: &VariableMap) -> serde_json::Value {
    match value {
        serde_json::Value::String(s) => serde_json::Value::String(render(s, variables)),
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(|v| render_json(v, variables)).collect())
        }
        serde_json::Value::Object(obj) => {
            let mut rendered = serde_json::Map::new();
            for (key, val) in obj {
                rendered.insert(render(key, variables), render_json(val, variables));
            }
            serde_json::Value::Object(rendered)
        }
        // Numbers, booleans, null are passed through as-is
        _ => value.clone(),
    }
}

fn substitute_placeholders(document: &str, variables: &VariableMap) -> String {
    let mut result = document.to_string();

    for (key, value) in variables.iter() {
        // Absent values keep their placeholder
        let Some(replacement) = value.as_text() else {
            continue;
        };
        let pattern = format!("{{{{{}}}}}", key);
        result = result.replace(&pattern, &replacement);
    }

    result
}

enum Marker<'a> {
    Open(&'a str),
    Close,
}

/// An `{{#if}}` block that has been opened but not yet closed
struct OpenBlock<'a> {
    name: &'a str,
    content: String,
}

fn resolve_conditionals(text: &str, variables: &VariableMap) -> String {
    let mut root = String::with_capacity(text.len());
    let mut stack: Vec<OpenBlock<'_>> = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find(MARKER_START) {
        let (literal, tail) = rest.split_at(pos);
        output(&mut root, &mut stack).push_str(literal);

        match parse_marker(tail) {
            Some((Marker::Open(name), len)) => {
                stack.push(OpenBlock {
                    name,
                    content: String::new(),
                });
                rest = &tail[len..];
            }
            Some((Marker::Close, len)) => {
                if let Some(block) = stack.pop() {
                    if variables.is_truthy(block.name) {
                        output(&mut root, &mut stack).push_str(&block.content);
                    }
                }
                rest = &tail[len..];
            }
            None => {
                // Not a marker: keep one brace and rescan from the next byte
                output(&mut root, &mut stack).push('{');
                rest = &tail[1..];
            }
        }
    }
    output(&mut root, &mut stack).push_str(rest);

    // Unterminated blocks: marker stripped, content kept
    while let Some(block) = stack.pop() {
        output(&mut root, &mut stack).push_str(&block.content);
    }

    root
}

/// Buffer that currently receives output: innermost open block, else root
fn output<'s>(root: &'s mut String, stack: &'s mut [OpenBlock<'_>]) -> &'s mut String {
    match stack.last_mut() {
        Some(block) => &mut block.content,
        None => root,
    }
}

/// Parse a block marker at the start of `input`, returning it with its length
fn parse_marker(input: &str) -> Option<(Marker<'_>, usize)> {
    if input.starts_with(CLOSE_MARKER) {
        return Some((Marker::Close, CLOSE_MARKER.len()));
    }

    let after_prefix = input.strip_prefix(OPEN_PREFIX)?;
    let name_start = after_prefix.trim_start();
    // At least one whitespace character between `#if` and the name
    if name_start.len() == after_prefix.len() {
        return None;
    }

    let name_len = name_start
        .find(|c: char| !is_name_char(c))
        .unwrap_or(name_start.len());
    if name_len == 0 {
        return None;
    }
    let (name, after_name) = name_start.split_at(name_len);

    let closing = after_name.trim_start();
    if !closing.starts_with(MARKER_END) {
        return None;
    }

    let consumed = input.len() - closing.len() + MARKER_END.len();
    Some((Marker::Open(name), consumed))
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::template::TemplateValue;

    #[test]
    fn test_literal_substitution() {
        let vars = VariableMap::new().with("name", "Ann");
        assert_eq!(render("Hello {{name}}!", &vars), "Hello Ann!");
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let vars = VariableMap::new().with("id", "T-7");
        assert_eq!(render("{{id}} / {{id}}", &vars), "T-7 / T-7");
    }

    #[test]
    fn test_missing_key_passthrough() {
        assert_eq!(render("Hi {{name}}", &VariableMap::new()), "Hi {{name}}");
    }

    #[test]
    fn test_absent_value_keeps_placeholder() {
        let vars = VariableMap::new().with("name", TemplateValue::Absent);
        assert_eq!(render("Hi {{name}}", &vars), "Hi {{name}}");
    }

    #[test]
    fn test_empty_string_blanks_placeholder() {
        let vars = VariableMap::new().with("name", "");
        assert_eq!(render("Hi {{name}}", &vars), "Hi ");
    }

    #[test]
    fn test_boolean_string_form() {
        let vars = VariableMap::new().with("paid", true).with("late", false);
        assert_eq!(render("{{paid}}/{{late}}", &vars), "true/false");
    }

    #[test]
    fn test_conditional_true() {
        let vars = VariableMap::new().with("show", true);
        assert_eq!(render("{{#if show}}X{{/if}}", &vars), "X");
    }

    #[test]
    fn test_conditional_false() {
        let vars = VariableMap::new().with("show", false);
        assert_eq!(render("{{#if show}}X{{/if}}", &vars), "");
    }

    #[test]
    fn test_conditional_missing_name_is_false() {
        assert_eq!(render("a{{#if show}}X{{/if}}b", &VariableMap::new()), "ab");
    }

    #[test]
    fn test_string_false_is_falsy() {
        let vars = VariableMap::new().with("flag", "false");
        assert_eq!(render("{{#if flag}}X{{/if}}", &vars), "");
    }

    #[test]
    fn test_blank_string_is_falsy() {
        let vars = VariableMap::new().with("flag", "  ");
        assert_eq!(render("{{#if flag}}X{{/if}}", &vars), "");
    }

    #[test]
    fn test_nested_blocks() {
        let vars = VariableMap::new().with("a", true).with("b", false);
        assert_eq!(render("{{#if a}}A{{#if b}}B{{/if}}{{/if}}", &vars), "A");

        let vars = VariableMap::new().with("a", true).with("b", true);
        assert_eq!(render("{{#if a}}A{{#if b}}B{{/if}}{{/if}}", &vars), "AB");
    }

    #[test]
    fn test_false_parent_removes_whole_subtree() {
        let vars = VariableMap::new().with("a", false).with("b", true);
        assert_eq!(
            render("[{{#if a}}A{{#if b}}B{{/if}}C{{/if}}]", &vars),
            "[]"
        );
    }

    #[test]
    fn test_sibling_blocks() {
        let vars = VariableMap::new().with("a", true).with("b", false);
        assert_eq!(
            render("{{#if a}}A{{/if}}-{{#if b}}B{{/if}}-{{#if a}}C{{/if}}", &vars),
            "A--C"
        );
    }

    #[test]
    fn test_orphan_opener_keeps_content() {
        let vars = VariableMap::new().with("x", true);
        assert_eq!(render("{{#if x}}kept", &vars), "kept");

        // Falsy orphans are still only stripped of their marker
        let vars = VariableMap::new().with("x", false);
        assert_eq!(render("{{#if x}}kept", &vars), "kept");
    }

    #[test]
    fn test_orphan_closer_is_dropped() {
        assert_eq!(render("text{{/if}} more", &VariableMap::new()), "text more");
    }

    #[test]
    fn test_orphan_opener_around_closed_block() {
        let vars = VariableMap::new().with("y", false);
        assert_eq!(render("{{#if x}}a{{#if y}}b{{/if}}c", &vars), "ac");
    }

    #[test]
    fn test_substituted_markers_resolve_against_map() {
        let vars = VariableMap::new()
            .with("snippet", "{{#if extra}}B{{/if}}")
            .with("extra", false);
        assert_eq!(render("[{{snippet}}]", &vars), "[]");

        let vars = VariableMap::new()
            .with("snippet", "{{#if extra}}B{{/if}}")
            .with("extra", "yes");
        assert_eq!(render("[{{snippet}}]", &vars), "[B]");
    }

    #[test]
    fn test_condition_ignores_rendered_text() {
        // The placeholder renders "false" but the map value itself is truthy
        let vars = VariableMap::new().with("status", "false ");
        assert_eq!(render("{{#if status}}[{{status}}]{{/if}}", &vars), "[false ]");
    }

    #[test]
    fn test_marker_whitespace() {
        let vars = VariableMap::new().with("show", true);
        assert_eq!(render("{{#if   show }}X{{/if}}", &vars), "X");
        // `{{#ifshow}}` is not a marker and stays literal
        assert_eq!(render("{{#ifshow}}X", &vars), "{{#ifshow}}X");
    }

    #[test]
    fn test_stray_braces_are_preserved() {
        let vars = VariableMap::new().with("a", true);
        assert_eq!(render("{ {{ {{{#if a}}x{{/if}}}", &vars), "{ {{ {x}");
    }

    #[test]
    fn test_multibyte_content() {
        let vars = VariableMap::new().with("ok", true).with("name", "Ærøskøbing");
        assert_eq!(
            render("«{{#if ok}}{{name}} — 中文{{/if}}»", &vars),
            "«Ærøskøbing — 中文»"
        );
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 10_000;
        let document = format!(
            "{}core{}",
            "{{#if on}}".repeat(depth),
            "{{/if}}".repeat(depth)
        );
        let vars = VariableMap::new().with("on", true);
        assert_eq!(render(&document, &vars), "core");
    }

    #[test]
    fn test_idempotence_on_rendered_output() {
        let vars = VariableMap::new().with("name", "Ann").with("vip", true);
        let first = render("Dear {{name}}{{#if vip}}, VIP{{/if}}.", &vars);
        assert_eq!(first, "Dear Ann, VIP.");

        let other = VariableMap::new().with("name", "Bob").with("vip", false);
        assert_eq!(render(&first, &other), first);
    }

    #[test]
    fn test_render_json() {
        let template = json!({
            "title": "Order {{order_id}} shipped",
            "items": ["{{#if gift}}Gift wrap{{/if}}", "{{carrier}}"],
            "count": 3
        });
        let vars = VariableMap::new()
            .with("order_id", "ORD-123")
            .with("gift", false)
            .with("carrier", "FedEx");

        let result = render_json(&template, &vars);
        assert_eq!(result["title"], "Order ORD-123 shipped");
        assert_eq!(result["items"][0], "");
        assert_eq!(result["items"][1], "FedEx");
        assert_eq!(result["count"], 3);
    }
}
