//! String helpers shared across the generator.

/// Converts a dashed name to camelCase (`hover-class` -> `hoverClass`).
pub fn to_camel_case(s: &str) -> String {
    let mut camel = String::with_capacity(s.len());
    let mut next_cap = false;
    for ch in s.chars() {
        if ch == '-' {
            next_cap = true;
        } else if next_cap {
            camel.extend(ch.to_uppercase());
            next_cap = false;
        } else {
            camel.push(ch);
        }
    }
    camel
}

/// Converts a CamelCase name to its dashed form (`ScrollView` -> `scroll-view`).
pub fn to_dashed(s: &str) -> String {
    let mut dashed = String::with_capacity(s.len() + 4);
    for ch in s.chars() {
        if ch.is_ascii_uppercase() {
            if !dashed.is_empty() {
                dashed.push('-');
            }
            dashed.push(ch.to_ascii_lowercase());
        } else {
            dashed.push(ch);
        }
    }
    dashed
}

/// Kebab-cases a camelCase event name (`longTap` -> `long-tap`).
pub fn to_kebab_case(s: &str) -> String {
    let mut kebab = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for ch in s.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                kebab.push('-');
            }
            kebab.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else {
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
            kebab.push(ch);
        }
    }
    kebab
}

/// Indents every line after the first by `size` spaces.
pub fn indent(s: &str, size: usize) -> String {
    s.split('\n')
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line.to_string()
            } else {
                format!("{}{}", " ".repeat(size), line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn is_boolean_literal(v: &str) -> bool {
    v == "true" || v == "false"
}

pub fn is_numeric_literal(v: &str) -> bool {
    !v.is_empty() && v.parse::<f64>().is_ok()
}

/// Loose check for object/array literal defaults; anything that does not
/// look like one falls through to the generic binding branch.
pub fn is_object_literal(v: &str) -> bool {
    let t = v.trim();
    (t.starts_with('{') && t.ends_with('}')) || (t.starts_with('[') && t.ends_with(']'))
}
