//! Template lexer for tokenizing Django template syntax

use swt_core::{Result, SwtError};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Text(String),
    Variable(String),         // {{ var }}
    Tag(String, Vec<String>), // {% tag args %}
    Comment,                  // {# comment #}
}

/// Split tag arguments on whitespace, keeping quoted strings together.
fn split_tag_args(content: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in content.chars() {
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
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut current = String::new();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            current.push(ch);
            continue;
        }

        match chars.peek() {
            Some('{') => {
                // Variable start {{
                chars.next();
                if !current.is_empty() {
                    tokens.push(Token::Text(std::mem::take(&mut current)));
                }

                let mut var_content = String::new();
                let mut closed = false;
                while let Some(ch) = chars.next() {
                    if ch == '}' && chars.peek() == Some(&'}') {
                        chars.next();
                        closed = true;
                        break;
                    }
                    var_content.push(ch);
                }
                if !closed {
                    return Err(SwtError::TemplateSyntax(format!(
                        "Unclosed variable tag: {{{{{var_content}"
                    )));
                }
                tokens.push(Token::Variable(var_content.trim().to_string()));
            }
            Some('%') => {
                // Tag start {%
                chars.next();
                if !current.is_empty() {
                    tokens.push(Token::Text(std::mem::take(&mut current)));
                }

                let mut tag_content = String::new();
                let mut closed = false;
                while let Some(ch) = chars.next() {
                    if ch == '%' && chars.peek() == Some(&'}') {
                        chars.next();
                        closed = true;
                        break;
                    }
                    tag_content.push(ch);
                }
                if !closed {
                    return Err(SwtError::TemplateSyntax(format!(
                        "Unclosed block tag: {{%{tag_content}"
                    )));
                }

                let parts = split_tag_args(&tag_content);
                if let Some((name, args)) = parts.split_first() {
                    tokens.push(Token::Tag(name.clone(), args.to_vec()));
                }
            }
            Some('#') => {
                // Comment start {#
                chars.next();
                if !current.is_empty() {
                    tokens.push(Token::Text(std::mem::take(&mut current)));
                }

                while let Some(ch) = chars.next() {
                    if ch == '#' && chars.peek() == Some(&'}') {
                        chars.next();
                        break;
                    }
                }
                tokens.push(Token::Comment);
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(Token::Text(current));
    }

    Ok(tokens)
}
