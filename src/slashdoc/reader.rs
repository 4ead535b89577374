//! Streaming parser for slashdoc XML files.
//!
//! The file shape is `<doc>` → `<assembly><name>…</name></assembly>` →
//! `<members><member name="…">raw fragment</member>…</members>`. Parsing
//! yields events lazily so the filtered re-export can stream entries
//! through without building a document tree.

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::SlashdocError;
use crate::slashdoc::store::SlashdocStore;

/// One item of interest found while streaming a slashdoc file.
#[derive(Debug)]
pub enum SlashdocEvent<'a> {
    /// Text of the `assembly/name` element.
    AssemblyName(Cow<'a, str>),
    /// One `member` entry: identifier attribute and raw inner markup.
    Member {
        id: Cow<'a, str>,
        fragment: Cow<'a, str>,
    },
}

/// Stream `xml`, feeding every assembly-name and member entry to `sink`.
///
/// Structurally invalid XML aborts with an error; a file without a `doc`
/// root simply produces no events.
pub fn parse_events<F>(xml: &str, mut sink: F) -> Result<(), SlashdocError>
where
    F: FnMut(SlashdocEvent<'_>) -> Result<(), SlashdocError>,
{
    let mut reader = Reader::from_str(xml);
    let mut in_doc = false;
    let mut in_assembly = false;

    loop {
        match reader.read_event()? {
            Event::Start(start) => match start.name().as_ref() {
                b"doc" => in_doc = true,
                b"assembly" if in_doc => in_assembly = true,
                b"name" if in_assembly => {
                    let text = reader.read_text(start.name())?;
                    sink(SlashdocEvent::AssemblyName(trim_cow(text)))?;
                }
                b"member" if in_doc => {
                    let id = member_id(&start)?;
                    let fragment = reader.read_text(start.name())?;
                    if let Some(id) = id {
                        sink(SlashdocEvent::Member { id, fragment })?;
                    }
                }
                _ => {}
            },
            Event::Empty(empty) => {
                if in_doc && empty.name().as_ref() == b"member" {
                    if let Some(id) = member_id(&empty)? {
                        sink(SlashdocEvent::Member {
                            id,
                            fragment: Cow::Borrowed(""),
                        })?;
                    }
                }
            }
            Event::End(end) => {
                if end.name().as_ref() == b"assembly" {
                    in_assembly = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(())
}

/// Parse a whole slashdoc file into a [`SlashdocStore`].
pub fn parse(xml: &str) -> Result<SlashdocStore, SlashdocError> {
    let mut store = SlashdocStore::new();
    parse_events(xml, |event| {
        match event {
            SlashdocEvent::AssemblyName(name) => store.set_assembly_name(name.into_owned()),
            SlashdocEvent::Member { id, fragment } => {
                store.set_fragment(id.into_owned(), fragment.into_owned());
            }
        }
        Ok(())
    })?;
    Ok(store)
}

fn member_id<'a>(
    start: &'a quick_xml::events::BytesStart<'a>,
) -> Result<Option<Cow<'a, str>>, SlashdocError> {
    match start.try_get_attribute("name")? {
        Some(attr) => Ok(Some(attr.unescape_value()?)),
        None => Ok(None),
    }
}

fn trim_cow(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    }
}
