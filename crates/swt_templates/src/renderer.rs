//! Template renderer that converts AST nodes to output strings

use crate::filters::{self, SAFE_OUTPUT_FILTERS};
use crate::loader::TemplateLoader;
use crate::parser::{FilterSpec, Node};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use swt_core::{Context, Result, SwtError, Value};

/// Track which unsupported tags we've already warned about (to avoid log spam)
static WARNED_TAGS: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Warn about an unsupported tag (only once per tag name)
fn warn_unsupported_tag(tag_signature: &str) {
    let mut warned = WARNED_TAGS.lock();
    if warned.insert(tag_signature.to_string()) {
        tracing::warn!(
            tag = tag_signature,
            "unsupported template tag has no handler and will be ignored"
        );
    }
}

pub fn render_nodes(nodes: &[Node], context: &Context) -> Result<String> {
    render_nodes_with_loader(nodes, context, None::<&NoOpLoader>)
}

/// Render nodes with an optional template loader for {% include %} support
pub fn render_nodes_with_loader<L: TemplateLoader + ?Sized>(
    nodes: &[Node],
    context: &Context,
    loader: Option<&L>,
) -> Result<String> {
    render_nodes_at_depth(nodes, context, loader, 0)
}

/// Nesting limit for {% include %}; a template including itself hits it.
const MAX_INCLUDE_DEPTH: usize = 32;

fn render_nodes_at_depth<L: TemplateLoader + ?Sized>(
    nodes: &[Node],
    context: &Context,
    loader: Option<&L>,
    depth: usize,
) -> Result<String> {
    let mut output = String::new();

    for node in nodes {
        output.push_str(&render_node_with_loader(node, context, loader, depth)?);
    }

    Ok(output)
}

/// No-op loader for when no loader is provided
struct NoOpLoader;

impl TemplateLoader for NoOpLoader {
    fn load_source(&self, name: &str) -> Result<String> {
        Err(SwtError::TemplateError(format!(
            "Template loader not configured. Cannot include template: {name}"
        )))
    }
}

fn render_node_with_loader<L: TemplateLoader + ?Sized>(
    node: &Node,
    context: &Context,
    loader: Option<&L>,
    depth: usize,
) -> Result<String> {
    match node {
        Node::Text(text) => Ok(text.clone()),

        Node::Variable(var_name, filter_specs) => {
            let value = apply_filters(get_value(var_name, context)?, filter_specs, context)?;
            let text = value.to_string();

            // Auto-escape unless a safe-output filter ran or the key is trusted markup
            let is_safe = filter_specs
                .iter()
                .any(|(name, _)| SAFE_OUTPUT_FILTERS.contains(&name.as_str()))
                || context.is_safe(var_name);
            if is_safe {
                Ok(text)
            } else {
                Ok(filters::html_escape(&text))
            }
        }

        Node::If {
            condition,
            true_nodes,
            false_nodes,
        } => {
            if evaluate_condition(condition, context)? {
                render_nodes_at_depth(true_nodes, context, loader, depth)
            } else {
                render_nodes_at_depth(false_nodes, context, loader, depth)
            }
        }

        Node::For {
            var_names,
            iterable,
            reversed,
            nodes,
            empty_nodes,
        } => {
            let items = match get_value(iterable, context)? {
                Value::List(items) if !items.is_empty() => items,
                // Null, missing and empty iterables render the {% empty %} block
                _ => return render_nodes_at_depth(empty_nodes, context, loader, depth),
            };

            let mut output = String::new();
            let mut ctx = context.clone();
            let total = items.len();

            let ordered: Vec<Value> = if *reversed {
                items.into_iter().rev().collect()
            } else {
                items
            };

            for (counter, item) in ordered.into_iter().enumerate() {
                ctx.set("forloop".to_string(), forloop_value(counter, total));

                if var_names.len() == 1 {
                    ctx.set(var_names[0].clone(), item);
                } else {
                    // {% for key, value in pairs %}: unpack list items
                    match item {
                        Value::List(tuple_items) => {
                            for (i, var_name) in var_names.iter().enumerate() {
                                let value = tuple_items.get(i).cloned().unwrap_or(Value::Null);
                                ctx.set(var_name.clone(), value);
                            }
                        }
                        other => {
                            ctx.set(var_names[0].clone(), other);
                            for var_name in &var_names[1..] {
                                ctx.set(var_name.clone(), Value::Null);
                            }
                        }
                    }
                }
                output.push_str(&render_nodes_at_depth(nodes, &ctx, loader, depth)?);
            }

            Ok(output)
        }

        Node::With { assignments, nodes } => {
            let mut new_context = context.clone();
            for (var_name, expression) in assignments {
                let value = get_value(expression, context)?;
                new_context.set(var_name.clone(), value);
                if context.is_safe(expression) {
                    new_context.mark_safe(var_name);
                }
            }
            render_nodes_at_depth(nodes, &new_context, loader, depth)
        }

        Node::Include {
            template,
            with_vars,
            only,
        } => {
            let Some(loader) = loader else {
                let tag_sig = format!("{{% include \"{template}\" %}} (no loader)");
                warn_unsupported_tag(&tag_sig);
                return Ok(format!(
                    "<!-- include '{template}' ignored - no template loader -->"
                ));
            };

            if depth >= MAX_INCLUDE_DEPTH {
                return Err(SwtError::TemplateError(format!(
                    "include depth exceeded {MAX_INCLUDE_DEPTH} while including '{template}'"
                )));
            }
            let nodes = loader.load_template(template)?;

            let mut include_context = if *only {
                Context::new()
            } else {
                context.clone()
            };

            for (key, value_expr) in with_vars {
                let value = get_value(value_expr, context)?;
                include_context.set(key.clone(), value);
                if context.is_safe(value_expr) {
                    include_context.mark_safe(key);
                }
            }

            render_nodes_at_depth(&nodes, &include_context, Some(loader), depth + 1)
        }

        Node::Comment => Ok(String::new()),

        Node::UnsupportedTag { name, args } => {
            let args_str = if args.is_empty() {
                String::new()
            } else {
                format!(" {}", args.join(" "))
            };
            let tag_sig = format!("{{% {name}{args_str} %}}");
            warn_unsupported_tag(&tag_sig);

            // Visible in page source during development
            Ok(format!("<!-- unsupported tag '{tag_sig}' -->"))
        }
    }
}

fn forloop_value(counter: usize, total: usize) -> Value {
    let mut forloop = HashMap::new();
    forloop.insert("counter".to_string(), Value::Integer(counter as i64 + 1));
    forloop.insert("counter0".to_string(), Value::Integer(counter as i64));
    forloop.insert("first".to_string(), Value::Bool(counter == 0));
    forloop.insert("last".to_string(), Value::Bool(counter + 1 == total));
    Value::Object(forloop)
}

fn apply_filters(mut value: Value, filter_specs: &[FilterSpec], context: &Context) -> Result<Value> {
    for (filter_name, arg) in filter_specs {
        let resolved_arg = match arg {
            Some(raw) => Some(get_value(raw, context)?.to_string()),
            None => None,
        };
        value = filters::apply_filter(filter_name, &value, resolved_arg.as_deref())?;
    }
    Ok(value)
}

fn evaluate_condition(condition: &str, context: &Context) -> Result<bool> {
    let condition = condition.trim();

    if condition == "true" || condition == "True" {
        return Ok(true);
    }
    if condition == "false" || condition == "False" {
        return Ok(false);
    }

    // "or" has the lowest precedence, so split on it first
    if let Some((left, right)) = condition.split_once(" or ") {
        return Ok(evaluate_condition(left, context)? || evaluate_condition(right, context)?);
    }

    if let Some((left, right)) = condition.split_once(" and ") {
        return Ok(evaluate_condition(left, context)? && evaluate_condition(right, context)?);
    }

    if let Some(rest) = condition.strip_prefix("not ") {
        return Ok(!evaluate_condition(rest, context)?);
    }

    if let Some((left, right)) = condition.split_once("==") {
        let left = get_value(left.trim(), context)?;
        let right = get_value(right.trim(), context)?;
        return Ok(values_equal(&left, &right));
    }

    if let Some((left, right)) = condition.split_once("!=") {
        let left = get_value(left.trim(), context)?;
        let right = get_value(right.trim(), context)?;
        return Ok(!values_equal(&left, &right));
    }

    // {% if item in list %}
    if let Some((needle, haystack)) = condition.split_once(" in ") {
        let needle = get_value(needle.trim(), context)?;
        let haystack = get_value(haystack.trim(), context)?;
        return Ok(match haystack {
            Value::List(items) => items.iter().any(|item| values_equal(&needle, item)),
            Value::String(s) => matches!(&needle, Value::String(n) if s.contains(n.as_str())),
            Value::Object(map) => map.contains_key(&needle.to_string()),
            _ => false,
        });
    }

    Ok(get_value(condition, context)?.is_truthy())
}

/// Resolve an expression: context lookup (with filters), then literals.
fn get_value(expr: &str, context: &Context) -> Result<Value> {
    let expr = expr.trim();

    if (expr.starts_with('"') && expr.ends_with('"') && expr.len() >= 2)
        || (expr.starts_with('\'') && expr.ends_with('\'') && expr.len() >= 2)
    {
        return Ok(Value::String(expr[1..expr.len() - 1].to_string()));
    }

    if expr.contains('|') {
        let (name, filter_specs) = crate::parser::parse_filter_expression(expr);
        let base = get_value(&name, context)?;
        return apply_filters(base, &filter_specs, context);
    }

    if let Some(value) = context.get(expr) {
        return Ok(value.clone());
    }

    if let Ok(i) = expr.parse::<i64>() {
        return Ok(Value::Integer(i));
    }

    if let Ok(f) = expr.parse::<f64>() {
        return Ok(Value::Float(f));
    }

    match expr {
        "True" | "true" => Ok(Value::Bool(true)),
        "False" | "false" => Ok(Value::Bool(false)),
        _ => Ok(Value::Null),
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => (a - b).abs() < f64::EPSILON,
        (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
            (*a as f64 - b).abs() < f64::EPSILON
        }
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}
