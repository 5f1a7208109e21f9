//! URL and tarball subpath templating
//!
//! Templates are plain strings with field actions such as
//! `{{.Version}}` or `{{ .OS }}`. Only the four fields of
//! [`ResolvedFields`] can be referenced; anything else in an action is
//! rejected rather than evaluated.

use tracing::trace;

use crate::error::{Error, Result};
use crate::types::ResolvedFields;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitute every field action in `template`
pub fn render(template: &str, fields: &ResolvedFields) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    for segment in parse(template)? {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Field(field) => match fields.get(field) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(Error::template(
                        template,
                        format!("unknown field .{}", field),
                    ))
                }
            },
        }
    }
    trace!("Rendered {:?} -> {:?}", template, out);
    Ok(out)
}

/// Check that a template parses and only references known fields
pub fn validate(template: &str) -> Result<()> {
    for segment in parse(template)? {
        if let Segment::Field(field) = segment {
            if !matches!(field, "Name" | "Version" | "OS" | "Arch") {
                return Err(Error::template(
                    template,
                    format!("unknown field .{}", field),
                ));
            }
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Field(&'a str),
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        if start > 0 {
            segments.push(Segment::Text(&rest[..start]));
        }
        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or_else(|| Error::template(template, "unclosed action"))?;

        let action = after_open[..end].trim();
        let field = action.strip_prefix('.').ok_or_else(|| {
            Error::template(template, format!("unsupported action {:?}", action))
        })?;
        if field.is_empty() || !field.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::template(
                template,
                format!("unsupported action {:?}", action),
            ));
        }
        segments.push(Segment::Field(field));

        rest = &after_open[end + CLOSE.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    Ok(segments)
}
