//! Embedded-script form of the tour graph (`var APP_DATA = {...};`).
//!
//! The exported literal is close to JSON but not strict: it may use
//! single-quoted strings and trailing commas. [`relax_literal`] rewrites
//! those two constructs and hands the result to `serde_json`.

use crate::error::TourError;
use crate::types::TourData;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Identifier the exporter assigns the tour literal to.
pub const APP_DATA_IDENT: &str = "APP_DATA";

/// Parse a `data.js` document assigning the graph to `APP_DATA`.
pub fn load(text: &str) -> Result<TourData, TourError> {
    load_with_ident(text, APP_DATA_IDENT, "data.js")
}

/// Parse a document assigning the graph to `ident`.
///
/// `source_name` only labels errors.
pub fn load_with_ident(text: &str, ident: &str, source_name: &str) -> Result<TourData, TourError> {
    let literal = extract_literal(text, ident)
        .map_err(|message| TourError::format(source_name, message))?;
    let json = relax_literal(literal);
    serde_json::from_str(&json)
        .map_err(|e| TourError::format(source_name, format!("invalid {} literal: {}", ident, e)))
}

/// Serialize the graph back into `var APP_DATA = {...};` form.
pub fn save(data: &TourData) -> Result<String, TourError> {
    save_with_ident(data, APP_DATA_IDENT)
}

pub fn save_with_ident(data: &TourData, ident: &str) -> Result<String, TourError> {
    let body = serde_json::to_string_pretty(data)?;
    Ok(format!("var {} = {};\n", ident, body))
}

/// Read and parse a `data.js` file.
pub fn read_data_js(path: &Path, ident: &str) -> Result<TourData, TourError> {
    if !path.is_file() {
        return Err(TourError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    load_with_ident(&text, ident, &path.display().to_string())
}

/// Write `data` to `path` in embedded-script form.
pub fn write_data_js(data: &TourData, path: &Path, ident: &str) -> Result<(), TourError> {
    let text = save_with_ident(data, ident)?;
    fs::write(path, text)?;
    Ok(())
}

/// Locate the object literal assigned to `ident` and return it, braces included.
fn extract_literal<'a>(text: &'a str, ident: &str) -> Result<&'a str, String> {
    let pattern = format!(r"\b(?:var|let|const)\s+{}\s*=\s*", regex::escape(ident));
    let re = Regex::new(&pattern).map_err(|e| e.to_string())?;
    let assignment = re
        .find(text)
        .ok_or_else(|| format!("could not find `{}` assignment", ident))?;

    let rest = &text[assignment.end()..];
    if !rest.starts_with('{') {
        return Err(format!("`{}` is not assigned an object literal", ident));
    }
    let end = literal_end(rest).ok_or_else(|| format!("unterminated `{}` literal", ident))?;
    Ok(&rest[..end])
}

/// Byte length of the balanced `{...}` literal at the start of `text`.
///
/// Brackets inside string literals (either quote style) are ignored.
fn literal_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => quote = Some(ch),
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + ch.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// Rewrite a loose object literal into strict JSON text.
///
/// Single-quoted strings become double-quoted (inner `"` escaped, `\'`
/// unescaped) and commas directly before `}` or `]` are dropped. Everything
/// else, including the contents of double-quoted strings, is copied as is.
pub fn relax_literal(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                while let Some(c) = chars.next() {
                    out.push(c);
                    if c == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '\'' => {
                out.push('"');
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => match chars.next() {
                            Some('\'') => out.push('\''),
                            Some(escaped) => {
                                out.push('\\');
                                out.push(escaped);
                            }
                            None => out.push('\\'),
                        },
                        '"' => out.push_str("\\\""),
                        '\'' => {
                            out.push('"');
                            break;
                        }
                        _ => out.push(c),
                    }
                }
            }
            ',' => {
                let mut lookahead = chars.clone();
                let trailing = loop {
                    match lookahead.next() {
                        Some(c) if c.is_whitespace() => continue,
                        Some('}') | Some(']') => break true,
                        _ => break false,
                    }
                };
                if !trailing {
                    out.push(',');
                }
            }
            _ => out.push(ch),
        }
    }

    out
}
