//! Template parser: turns lexer tokens into a node tree

use crate::lexer::Token;
use swt_core::{Result, SwtError};

/// A filter application: name and optional raw argument (`default:"n/a"`).
pub type FilterSpec = (String, Option<String>);

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Variable(String, Vec<FilterSpec>),
    If {
        condition: String,
        true_nodes: Vec<Node>,
        false_nodes: Vec<Node>,
    },
    For {
        var_names: Vec<String>,
        iterable: String,
        reversed: bool,
        nodes: Vec<Node>,
        empty_nodes: Vec<Node>,
    },
    With {
        assignments: Vec<(String, String)>,
        nodes: Vec<Node>,
    },
    Include {
        template: String,
        with_vars: Vec<(String, String)>,
        only: bool,
    },
    Comment,
    UnsupportedTag {
        name: String,
        args: Vec<String>,
    },
}

pub fn parse(tokens: &[Token]) -> Result<Vec<Node>> {
    let mut pos = 0;
    let (nodes, _) = parse_until(tokens, &mut pos, &[])?;
    Ok(nodes)
}

/// Parse nodes until one of `stop_tags` is met. Returns the nodes and the
/// stop tag that ended the run (`None` at end of input).
fn parse_until(
    tokens: &[Token],
    pos: &mut usize,
    stop_tags: &[&str],
) -> Result<(Vec<Node>, Option<String>)> {
    let mut nodes = Vec::new();

    while *pos < tokens.len() {
        let token = &tokens[*pos];
        *pos += 1;

        match token {
            Token::Text(text) => nodes.push(Node::Text(text.clone())),
            Token::Variable(expr) => {
                let (name, filters) = parse_filter_expression(expr);
                nodes.push(Node::Variable(name, filters));
            }
            Token::Comment => nodes.push(Node::Comment),
            Token::Tag(name, args) => {
                if stop_tags.contains(&name.as_str()) {
                    return Ok((nodes, Some(name.clone())));
                }
                nodes.push(parse_tag(name, args, tokens, pos)?);
            }
        }
    }

    if stop_tags.is_empty() {
        Ok((nodes, None))
    } else {
        Err(SwtError::TemplateSyntax(format!(
            "Unclosed tag, expected one of: {}",
            stop_tags.join(", ")
        )))
    }
}

fn parse_tag(name: &str, args: &[String], tokens: &[Token], pos: &mut usize) -> Result<Node> {
    match name {
        "if" => parse_if(args, tokens, pos),
        "for" => parse_for(args, tokens, pos),
        "with" => {
            let assignments = parse_assignments(args)?;
            let (nodes, _) = parse_until(tokens, pos, &["endwith"])?;
            Ok(Node::With { assignments, nodes })
        }
        "include" => parse_include(args),
        "comment" => {
            // Skip everything up to {% endcomment %}
            let _ = parse_until(tokens, pos, &["endcomment"])?;
            Ok(Node::Comment)
        }
        "endif" | "endfor" | "endwith" | "endcomment" | "else" | "elif" | "empty" => {
            Err(SwtError::TemplateSyntax(format!(
                "Unexpected '{{% {name} %}}'"
            )))
        }
        _ => Ok(Node::UnsupportedTag {
            name: name.to_string(),
            args: args.to_vec(),
        }),
    }
}

fn parse_if(args: &[String], tokens: &[Token], pos: &mut usize) -> Result<Node> {
    if args.is_empty() {
        return Err(SwtError::TemplateSyntax(
            "'{% if %}' requires a condition".to_string(),
        ));
    }
    let condition = args.join(" ");
    let (true_nodes, end) = parse_until(tokens, pos, &["elif", "else", "endif"])?;

    let false_nodes = match end.as_deref() {
        Some("elif") => {
            // The elif tag's arguments sit on the token we just consumed
            let elif_args = match &tokens[*pos - 1] {
                Token::Tag(_, args) => args.clone(),
                _ => Vec::new(),
            };
            vec![parse_if(&elif_args, tokens, pos)?]
        }
        Some("else") => parse_until(tokens, pos, &["endif"])?.0,
        _ => Vec::new(),
    };

    Ok(Node::If {
        condition,
        true_nodes,
        false_nodes,
    })
}

fn parse_for(args: &[String], tokens: &[Token], pos: &mut usize) -> Result<Node> {
    // {% for a, b in items reversed %}
    let in_pos = args.iter().position(|a| a == "in").ok_or_else(|| {
        SwtError::TemplateSyntax(format!("Malformed for tag: {{% for {} %}}", args.join(" ")))
    })?;
    let var_names: Vec<String> = args[..in_pos]
        .join(" ")
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let iterable = args.get(in_pos + 1).cloned().ok_or_else(|| {
        SwtError::TemplateSyntax("'{% for %}' is missing its iterable".to_string())
    })?;
    if var_names.is_empty() {
        return Err(SwtError::TemplateSyntax(
            "'{% for %}' is missing its loop variable".to_string(),
        ));
    }
    let reversed = args.get(in_pos + 2).map(String::as_str) == Some("reversed");

    let (nodes, end) = parse_until(tokens, pos, &["empty", "endfor"])?;
    let empty_nodes = if end.as_deref() == Some("empty") {
        parse_until(tokens, pos, &["endfor"])?.0
    } else {
        Vec::new()
    };

    Ok(Node::For {
        var_names,
        iterable,
        reversed,
        nodes,
        empty_nodes,
    })
}

fn parse_include(args: &[String]) -> Result<Node> {
    let template = args
        .first()
        .ok_or_else(|| {
            SwtError::TemplateSyntax("'{% include %}' requires a template name".to_string())
        })?
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();

    let mut with_vars = Vec::new();
    let mut only = false;
    let mut rest = args[1..].iter().peekable();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "only" => only = true,
            "with" => {
                while let Some(next) = rest.peek() {
                    if next.as_str() == "only" {
                        break;
                    }
                    with_vars.push(split_assignment(next)?);
                    rest.next();
                }
            }
            other => {
                return Err(SwtError::TemplateSyntax(format!(
                    "Unexpected include argument: {other}"
                )))
            }
        }
    }

    Ok(Node::Include {
        template,
        with_vars,
        only,
    })
}

fn parse_assignments(args: &[String]) -> Result<Vec<(String, String)>> {
    if args.is_empty() {
        return Err(SwtError::TemplateSyntax(
            "'{% with %}' requires at least one assignment".to_string(),
        ));
    }
    args.iter().map(|a| split_assignment(a)).collect()
}

fn split_assignment(arg: &str) -> Result<(String, String)> {
    arg.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| SwtError::TemplateSyntax(format!("Expected key=value, got '{arg}'")))
}

/// Split `name|filter:arg|filter` into the variable and its filters,
/// ignoring pipes and colons inside quotes.
pub fn parse_filter_expression(expr: &str) -> (String, Vec<FilterSpec>) {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in expr.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                current.push(ch);
            }
            None if ch == '|' => segments.push(std::mem::take(&mut current)),
            None => current.push(ch),
        }
    }
    segments.push(current);

    let mut iter = segments.into_iter();
    let name = iter.next().unwrap_or_default().trim().to_string();
    let filters = iter
        .map(|segment| {
            let segment = segment.trim();
            match segment.split_once(':') {
                Some((filter, arg)) => (filter.trim().to_string(), Some(arg.trim().to_string())),
                None => (segment.to_string(), None),
            }
        })
        .collect();

    (name, filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_source(source: &str) -> Result<Vec<Node>> {
        parse(&tokenize(source)?)
    }

    #[test]
    fn test_parse_variable_with_filters() {
        let nodes = parse_source("{{ title|default:\"a|b\"|upper }}").unwrap();
        assert_eq!(
            nodes,
            vec![Node::Variable(
                "title".to_string(),
                vec![
                    ("default".to_string(), Some("\"a|b\"".to_string())),
                    ("upper".to_string(), None),
                ]
            )]
        );
    }

    #[test]
    fn test_parse_if_elif_else() {
        let nodes = parse_source("{% if a %}A{% elif b %}B{% else %}C{% endif %}").unwrap();
        match &nodes[0] {
            Node::If {
                condition,
                true_nodes,
                false_nodes,
            } => {
                assert_eq!(condition, "a");
                assert_eq!(true_nodes, &vec![Node::Text("A".to_string())]);
                match &false_nodes[0] {
                    Node::If {
                        condition,
                        false_nodes,
                        ..
                    } => {
                        assert_eq!(condition, "b");
                        assert_eq!(false_nodes, &vec![Node::Text("C".to_string())]);
                    }
                    other => panic!("expected nested if, got {other:?}"),
                }
            }
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_for_with_empty() {
        let nodes =
            parse_source("{% for k, v in pairs reversed %}{{ k }}{% empty %}none{% endfor %}")
                .unwrap();
        match &nodes[0] {
            Node::For {
                var_names,
                iterable,
                reversed,
                empty_nodes,
                ..
            } => {
                assert_eq!(var_names, &vec!["k".to_string(), "v".to_string()]);
                assert_eq!(iterable, "pairs");
                assert!(*reversed);
                assert_eq!(empty_nodes, &vec![Node::Text("none".to_string())]);
            }
            other => panic!("expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_include_with_only() {
        let nodes = parse_source("{% include 'part.html' with a=b c=\"d\" only %}").unwrap();
        assert_eq!(
            nodes,
            vec![Node::Include {
                template: "part.html".to_string(),
                with_vars: vec![
                    ("a".to_string(), "b".to_string()),
                    ("c".to_string(), "\"d\"".to_string()),
                ],
                only: true,
            }]
        );
    }

    #[test]
    fn test_unclosed_if_is_error() {
        assert!(matches!(
            parse_source("{% if a %}never closed"),
            Err(SwtError::TemplateSyntax(_))
        ));
    }

    #[test]
    fn test_stray_end_tag_is_error() {
        assert!(parse_source("text{% endfor %}").is_err());
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        let nodes = parse_source("{% url 'home' %}").unwrap();
        assert_eq!(
            nodes,
            vec![Node::UnsupportedTag {
                name: "url".to_string(),
                args: vec!["'home'".to_string()],
            }]
        );
    }
}
