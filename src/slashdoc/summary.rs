//! Turns raw slashdoc fragments into display text.
//!
//! Only the content of `<summary>` elements is kept. The HTML form maps
//! `<c>`/`<code>` to `<code>`, `<para>` to `<p>`, and resolves `<see>`
//! references against the inspected assembly; the plain form strips all
//! markup. Whitespace is collapsed to single spaces in both forms.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::traits::MetadataSource;
use crate::errors::SlashdocError;
use crate::render::signature::LanguageSignatures;

/// Formats fragment summaries as small HTML snippets, linking type
/// references that resolve within the inspected assembly.
pub struct SummaryHtmlFormatter<'a> {
    assembly: &'a dyn MetadataSource,
    language: &'a dyn LanguageSignatures,
}

impl<'a> SummaryHtmlFormatter<'a> {
    pub fn new(assembly: &'a dyn MetadataSource, language: &'a dyn LanguageSignatures) -> Self {
        SummaryHtmlFormatter { assembly, language }
    }

    /// HTML snippet for a fragment; empty when there is no fragment or it
    /// contains no summary element.
    pub fn format_summary(&self, fragment: Option<&str>) -> Result<String, SlashdocError> {
        let Some(fragment) = fragment else {
            return Ok(String::new());
        };

        let mut reader = Reader::from_str(fragment);
        let mut depth = 0usize;
        let mut out = String::new();

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let name = start.name();
                    match name.as_ref() {
                        b"summary" => depth += 1,
                        b"c" | b"code" if depth > 0 => out.push_str("<code>"),
                        b"para" if depth > 0 => out.push_str("<p>"),
                        b"see" | b"seealso" if depth > 0 => {
                            out.push_str(&self.reference_link(&start)?);
                        }
                        b"paramref" | b"typeparamref" if depth > 0 => {
                            push_attribute_text(&start, "name", &mut out)?;
                        }
                        _ => {}
                    }
                }
                Event::Empty(empty) => {
                    let name = empty.name();
                    match name.as_ref() {
                        b"summary" => {}
                        b"c" | b"code" if depth > 0 => out.push_str("<code></code>"),
                        b"para" if depth > 0 => out.push_str("<p></p>"),
                        b"see" | b"seealso" if depth > 0 => {
                            out.push_str(&self.reference_link(&empty)?);
                        }
                        b"paramref" | b"typeparamref" if depth > 0 => {
                            push_attribute_text(&empty, "name", &mut out)?;
                        }
                        _ => {}
                    }
                }
                Event::End(end) => match end.name().as_ref() {
                    b"summary" => depth = depth.saturating_sub(1),
                    b"c" | b"code" if depth > 0 => out.push_str("</code>"),
                    b"para" if depth > 0 => out.push_str("</p>"),
                    _ => {}
                },
                Event::Text(text) => {
                    if depth > 0 {
                        let decoded = text.unescape()?;
                        out.push_str(&html_escape::encode_text(&decoded));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(collapse_whitespace(&out))
    }

    /// Anchor link for a `cref` that resolves to a type of the inspected
    /// assembly; the bare referenced name otherwise.
    fn reference_link(&self, element: &BytesStart<'_>) -> Result<String, SlashdocError> {
        let Some(cref) = attribute_value(element, "cref")? else {
            return Ok(String::new());
        };
        if cref.trim().is_empty() {
            return Ok(String::new());
        }

        Ok(match cref.split_once(':') {
            Some(("T", name)) => match self.assembly.lookup_type(name) {
                Some(ty) => format!(
                    "<a href=\"#{}\">{}</a>",
                    html_escape::encode_double_quoted_attribute(&self.language.display_name(ty)),
                    html_escape::encode_text(&self.language.short_display_name(ty)),
                ),
                None => html_escape::encode_text(name).into_owned(),
            },
            Some((_, name)) => html_escape::encode_text(name).into_owned(),
            None => html_escape::encode_text(&cref).into_owned(),
        })
    }
}

/// Plain-text summary of a fragment: markup stripped, references unwrapped
/// to their bare names. Used for one-line overview entries.
pub fn text_summary(fragment: &str) -> Result<String, SlashdocError> {
    let mut reader = Reader::from_str(fragment);
    let mut depth = 0usize;
    let mut out = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => match start.name().as_ref() {
                b"summary" => depth += 1,
                b"see" | b"seealso" if depth > 0 => push_reference_text(&start, &mut out)?,
                b"paramref" | b"typeparamref" if depth > 0 => {
                    push_raw_attribute(&start, "name", &mut out)?;
                }
                _ => {}
            },
            Event::Empty(empty) => match empty.name().as_ref() {
                b"see" | b"seealso" if depth > 0 => push_reference_text(&empty, &mut out)?,
                b"paramref" | b"typeparamref" if depth > 0 => {
                    push_raw_attribute(&empty, "name", &mut out)?;
                }
                _ => {}
            },
            Event::End(end) => {
                if end.name().as_ref() == b"summary" {
                    depth = depth.saturating_sub(1);
                }
            }
            Event::Text(text) => {
                if depth > 0 {
                    out.push_str(&text.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(collapse_whitespace(&out))
}

fn attribute_value<'a>(
    element: &'a BytesStart<'a>,
    name: &str,
) -> Result<Option<Cow<'a, str>>, SlashdocError> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?)),
        None => Ok(None),
    }
}

fn push_attribute_text(
    element: &BytesStart<'_>,
    name: &str,
    out: &mut String,
) -> Result<(), SlashdocError> {
    if let Some(value) = attribute_value(element, name)? {
        out.push_str(&html_escape::encode_text(&value));
    }
    Ok(())
}

fn push_raw_attribute(
    element: &BytesStart<'_>,
    name: &str,
    out: &mut String,
) -> Result<(), SlashdocError> {
    if let Some(value) = attribute_value(element, name)? {
        out.push_str(&value);
    }
    Ok(())
}

/// The bare name a reference points at: the `cref` with any single-letter
/// kind prefix removed.
fn push_reference_text(element: &BytesStart<'_>, out: &mut String) -> Result<(), SlashdocError> {
    if let Some(cref) = attribute_value(element, "cref")? {
        match cref.split_once(':') {
            Some((_, name)) => out.push_str(name),
            None => out.push_str(&cref),
        }
    }
    Ok(())
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
