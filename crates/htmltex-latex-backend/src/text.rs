//! Plain-text normalization: line breaks, tabs, reserved characters, inline math delimiters.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::options::ConversionOptions;
use crate::templates::PARAGRAPH_BREAK;

lazy_static! {
    static ref LINE_BREAKS: Regex = Regex::new(r"[\r\n]+").unwrap();
    /// An entity reference after `escape_reserved` ran over it (`&#39;` became `\&\#39;`).
    static ref ESCAPED_ENTITY: Regex = Regex::new(
        r"\\&(?:\\#(?P<num>[0-9]{1,7}|[xX][0-9a-fA-F]{1,6})|(?P<name>[a-zA-Z]+));"
    )
    .unwrap();
}

/// Normalize a raw text node for inclusion in LaTeX.
pub fn normalize_text(text: &str, options: &ConversionOptions) -> String {
    let replacement = if options.ignore_breaks {
        ""
    } else {
        PARAGRAPH_BREAK
    };
    let text = LINE_BREAKS.replace_all(text, replacement);
    let text = text.replace('\t', "");
    let text = escape_reserved(&text);
    let text = decode_entities(&text);
    if options.prefer_dollar_inline_math {
        prefer_dollar_math(&text)
    } else {
        text
    }
}

/// Escape `% & # ~ |` unless already preceded by a backslash.
///
/// `<`, `>`, `$`, braces and backslashes pass through so that raw LaTeX
/// math embedded in HTML survives.
pub fn escape_reserved(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev: Option<char> = None;
    for ch in input.chars() {
        match reserved_replacement(ch) {
            Some(replacement) if prev != Some('\\') => out.push_str(replacement),
            _ => out.push(ch),
        }
        prev = Some(ch);
    }
    out
}

fn reserved_replacement(ch: char) -> Option<&'static str> {
    match ch {
        '%' => Some("\\%"),
        '&' => Some("\\&"),
        '#' => Some("\\#"),
        '~' => Some("\\textasciitilde{}"),
        '|' => Some("\\textbar{}"),
        _ => None,
    }
}

/// Escape every LaTeX special character, with no backslash guard.
pub fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '$' => out.push_str("\\$"),
            '^' => out.push_str("\\^{}"),
            '_' => out.push_str("\\_"),
            _ => match reserved_replacement(ch) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(ch),
            },
        }
    }
    out
}

/// Decode entity references left in text after escaping.
///
/// The parser already decodes ordinary references, so only double-encoded
/// input reaches this point. A decoded reserved character is escaped again.
pub fn decode_entities(input: &str) -> String {
    ESCAPED_ENTITY
        .replace_all(input, |caps: &Captures| match decode_entity(caps) {
            Some(ch) => match reserved_replacement(ch) {
                Some(replacement) => replacement.to_string(),
                None => ch.to_string(),
            },
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn decode_entity(caps: &Captures) -> Option<char> {
    if let Some(num) = caps.name("num") {
        let num = num.as_str();
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    match caps.name("name")?.as_str() {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

/// Rewrite `\(` and `\)` delimiters to `$`.
pub fn prefer_dollar_math(input: &str) -> String {
    input.replace("\\(", "$").replace("\\)", "$")
}
