//! Structure of a type reference string.
//!
//! References are qualified class names, optionally with type arguments,
//! wildcards and array suffixes: `java.util.Map<java.lang.String, ? extends
//! com.example.Base>[]`. Resolvers shorten each class name inside a reference
//! independently and keep the surrounding punctuation.

use crate::{ResolveError, ResolveResult};

/// Deepest nesting of type arguments, wildcard bounds and array suffixes accepted.
pub const MAX_NESTING: usize = 64;

#[derive(Debug)]
enum TypeRef<'a> {
    Named { name: &'a str, arguments: Vec<TypeRef<'a>> },
    Wildcard { bound: Option<(&'static str, Box<TypeRef<'a>>)> },
    Array(Box<TypeRef<'a>>),
}

/// Check that `reference` is well formed.
pub fn check(reference: &str) -> ResolveResult<()> { parse_reference(reference).map(|_| ()) }

/// Every class name mentioned in `reference`, outermost first.
pub fn referenced_names(reference: &str) -> ResolveResult<Vec<&str>> {
    let parsed = parse_reference(reference)?;
    let mut names = Vec::new();
    collect(&parsed, &mut names);
    Ok(names)
}

/// Rebuild `reference`, replacing each class name with `shorten(name)`.
pub fn rewrite<F>(reference: &str, mut shorten: F) -> ResolveResult<String>
where
    F: FnMut(&str) -> ResolveResult<String>,
{
    let parsed = parse_reference(reference)?;
    render(&parsed, &mut shorten)
}

/// Split a qualified class name into its package (if any) and simple name.
pub fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.rsplit_once('.') {
        Some((package, simple)) => (Some(package), simple),
        None => (None, name),
    }
}

fn parse_reference(reference: &str) -> ResolveResult<TypeRef<'_>> {
    parse(reference, 0).ok_or_else(|| ResolveError::InvalidName(reference.to_string()))
}

fn parse(text: &str, depth: usize) -> Option<TypeRef<'_>> {
    if depth > MAX_NESTING {
        return None;
    }
    let text = text.trim();
    if text == "?" {
        return Some(TypeRef::Wildcard { bound: None });
    }
    for keyword in ["extends", "super"] {
        if let Some(rest) = text.strip_prefix('?').map(str::trim_start) {
            if let Some(bound) = rest.strip_prefix(keyword) {
                if bound.starts_with(char::is_whitespace) {
                    return Some(TypeRef::Wildcard {
                        bound: Some((keyword, Box::new(parse(bound, depth + 1)?))),
                    });
                }
            }
        }
    }
    if let Some(element) = text.strip_suffix("[]") {
        return Some(TypeRef::Array(Box::new(parse(element, depth + 1)?)));
    }
    if let Some(body) = text.strip_suffix('>') {
        let (name, arguments) = body.split_once('<')?;
        let arguments = split_arguments(arguments)?
            .into_iter()
            .map(|argument| parse(argument, depth + 1))
            .collect::<Option<Vec<_>>>()?;
        if arguments.is_empty() {
            return None;
        }
        let name = name.trim();
        return is_class_name(name).then_some(TypeRef::Named { name, arguments });
    }
    is_class_name(text).then_some(TypeRef::Named { name: text, arguments: Vec::new() })
}

/// Split a type-argument list at its top-level commas.
fn split_arguments(list: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in list.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(&list[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    let last = &list[start..];
    if !last.trim().is_empty() || !parts.is_empty() {
        parts.push(last);
    }
    Some(parts)
}

fn is_class_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

fn collect<'a>(reference: &TypeRef<'a>, names: &mut Vec<&'a str>) {
    match reference {
        TypeRef::Named { name, arguments } => {
            names.push(*name);
            for argument in arguments {
                collect(argument, names);
            }
        }
        TypeRef::Wildcard { bound } => {
            if let Some((_, bound)) = bound {
                collect(bound, names);
            }
        }
        TypeRef::Array(element) => collect(element, names),
    }
}

fn render<F>(reference: &TypeRef<'_>, shorten: &mut F) -> ResolveResult<String>
where
    F: FnMut(&str) -> ResolveResult<String>,
{
    match reference {
        TypeRef::Named { name, arguments } => {
            let mut out = shorten(name)?;
            if !arguments.is_empty() {
                let rendered = arguments
                    .iter()
                    .map(|argument| render(argument, shorten))
                    .collect::<ResolveResult<Vec<_>>>()?;
                out.push('<');
                out.push_str(&rendered.join(", "));
                out.push('>');
            }
            Ok(out)
        }
        TypeRef::Wildcard { bound: None } => Ok("?".to_string()),
        TypeRef::Wildcard { bound: Some((keyword, bound)) } => {
            Ok(format!("? {keyword} {}", render(bound, shorten)?))
        }
        TypeRef::Array(element) => Ok(format!("{}[]", render(element, shorten)?)),
    }
}
