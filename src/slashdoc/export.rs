//! Filtered slashdoc re-export: public-API entries only.

use std::collections::HashSet;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::errors::SlashdocError;
use crate::slashdoc::reader::{parse_events, SlashdocEvent};

/// Stream `source_xml` to `out`, keeping only members whose identifier is
/// in the retained set. Fragment content passes through byte-for-byte; the
/// `members` element is omitted entirely when nothing is retained.
pub fn write_filtered<W: Write>(
    source_xml: &str,
    retained: &HashSet<String>,
    out: W,
) -> Result<(), SlashdocError> {
    let mut writer = Writer::new(out);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("doc")))?;

    let mut members_open = false;
    parse_events(source_xml, |event| {
        match event {
            SlashdocEvent::AssemblyName(name) => {
                writer.write_event(Event::Start(BytesStart::new("assembly")))?;
                writer.write_event(Event::Start(BytesStart::new("name")))?;
                writer.write_event(Event::Text(BytesText::new(&name)))?;
                writer.write_event(Event::End(BytesEnd::new("name")))?;
                writer.write_event(Event::End(BytesEnd::new("assembly")))?;
            }
            SlashdocEvent::Member { id, fragment } => {
                if retained.contains(id.as_ref()) {
                    if !members_open {
                        writer.write_event(Event::Start(BytesStart::new("members")))?;
                        members_open = true;
                    }
                    let mut member = BytesStart::new("member");
                    member.push_attribute(("name", id.as_ref()));
                    writer.write_event(Event::Start(member))?;
                    // Already-escaped source markup, re-emitted verbatim.
                    writer.write_event(Event::Text(BytesText::from_escaped(fragment.as_ref())))?;
                    writer.write_event(Event::End(BytesEnd::new("member")))?;
                }
            }
        }
        Ok(())
    })?;

    if members_open {
        writer.write_event(Event::End(BytesEnd::new("members")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("doc")))?;

    Ok(())
}
