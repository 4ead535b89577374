//! HTML API reference output: public types and members only.

use std::io::Write;

use anyhow::Result;

use crate::core::traits::MetadataSource;
use crate::core::types::{TypeDescriptor, TypeKind};
use crate::render::ident;
use crate::render::signature::LanguageSignatures;
use crate::slashdoc::store::{DocAssociator, SlashdocStore};
use crate::slashdoc::summary::{text_summary, SummaryHtmlFormatter};
use crate::surface;

/// Writes one HTML document describing an assembly's public API.
///
/// Construction emits the document prologue; [`finish`](Self::finish)
/// closes the document and hands the underlying writer back.
pub struct ApiReferenceHtmlWriter<'a, W: Write> {
    out: W,
    language: &'a dyn LanguageSignatures,
    docs: DocAssociator<'a>,
}

impl<'a, W: Write> ApiReferenceHtmlWriter<'a, W> {
    pub fn new(
        mut out: W,
        title: &str,
        slashdoc: &'a SlashdocStore,
        warn_missing_docs: bool,
        language: &'a dyn LanguageSignatures,
    ) -> Result<Self> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\"/>")?;
        writeln!(
            out,
            "<title>{}</title>",
            html_escape::encode_text(title)
        )?;
        writeln!(out, "<style type=\"text/css\">")?;
        writeln!(
            out,
            "body {{ font-family: Arial, Helvetica, sans-serif; font-size: small; }}"
        )?;
        writeln!(out, "h2 {{ margin-top: 30px; }}")?;
        writeln!(
            out,
            "table.descriptions {{ border-collapse: collapse; margin-bottom: 10px; }}"
        )?;
        writeln!(
            out,
            "table.descriptions th, table.descriptions td {{ width: 400px; padding: 5px; border: 1px solid #E8E8E8; }}"
        )?;
        writeln!(out, "table.descriptions th {{ background: #E8E8E8 }}")?;
        writeln!(
            out,
            "table.typeheader {{ border-collapse: collapse; border: none; width: 820px; }}"
        )?;
        writeln!(out, "</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;

        Ok(ApiReferenceHtmlWriter {
            out,
            language,
            docs: DocAssociator::new(slashdoc, warn_missing_docs),
        })
    }

    /// Close the document and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.out, "</body>")?;
        writeln!(self.out, "</html>")?;
        Ok(self.out)
    }

    /// Describe every visible type of the assembly: an overview table
    /// ordered by full display name, then one detail block per type
    /// ordered by short display name.
    pub fn describe_assembly(&mut self, assembly: &dyn MetadataSource) -> Result<()> {
        let formatter = SummaryHtmlFormatter::new(assembly, self.language);

        let title = format!("{} public API reference", assembly.simple_name());
        self.text_element("h1", &title)?;

        self.write_types_overview(assembly)?;

        let mut types = surface::visible_types(assembly);
        types.sort_by_key(|ty| self.language.short_display_name(ty));
        for ty in types {
            self.describe_type(ty, &formatter)?;
        }

        Ok(())
    }

    fn write_types_overview(&mut self, assembly: &dyn MetadataSource) -> Result<()> {
        self.description_table_header("Types")?;

        let mut types = surface::visible_types(assembly);
        types.sort_by_key(|ty| self.language.display_name(ty));

        for ty in types {
            let display = self.language.display_name(ty);
            let meta = self.language.meta_type_name(ty);

            writeln!(self.out, "<tr>")?;
            writeln!(
                self.out,
                "<td><a href=\"#{}\">{}</a> {}</td>",
                html_escape::encode_double_quoted_attribute(&display),
                html_escape::encode_text(&display),
                meta
            )?;

            let summary = match self.docs.lookup(&ident::type_id(ty)) {
                Some(fragment) => text_summary(fragment)?,
                None => String::new(),
            };
            writeln!(
                self.out,
                "<td>{}</td>",
                html_escape::encode_text(&summary)
            )?;
            writeln!(self.out, "</tr>")?;
        }

        self.description_table_footer()
    }

    /// One detail block: anchored header, summary, info rows, and member
    /// tables by kind. Enums list their constants; delegates list nothing.
    pub fn describe_type(
        &mut self,
        ty: &TypeDescriptor,
        formatter: &SummaryHtmlFormatter<'_>,
    ) -> Result<()> {
        let language = self.language;
        let display = language.display_name(ty);
        let short = language.short_display_name(ty);
        let meta = language.meta_type_name(ty);

        writeln!(
            self.out,
            "<div id=\"{}\">",
            html_escape::encode_double_quoted_attribute(&display)
        )?;

        self.text_element("h2", &format!("{short} {meta}"))?;

        writeln!(self.out, "<table class=\"typeheader\"><tr><td>")?;
        let summary = formatter.format_summary(self.docs.lookup(&ident::type_id(ty)))?;
        writeln!(self.out, "{summary}")?;
        self.info("Namespace", ty.namespace())?;
        self.info("Signature", &language.type_signature(ty))?;
        writeln!(self.out, "</td></tr></table>")?;

        if ty.kind == TypeKind::Enum {
            let mut values = surface::enum_members(ty);
            values.sort_by_key(|f| f.constant.unwrap_or_default());
            self.write_section(
                "Members",
                &values,
                |f| f.name.clone(),
                |f| ident::field_id(ty, f),
                formatter,
            )?;
        } else if !surface::hide_members(ty) {
            self.text_element(
                "p",
                &format!("The {short} {meta} exposes the following members."),
            )?;

            let mut constructors = surface::visible_constructors(ty);
            constructors.sort_by_key(|c| ident::method_id(ty, c));
            self.write_section(
                "Constructors",
                &constructors,
                |c| language.constructor_signature(ty, c),
                |c| ident::method_id(ty, c),
                formatter,
            )?;

            let mut properties = surface::visible_properties(ty);
            properties.sort_by_key(|p| ident::property_id(ty, p));
            self.write_section(
                "Properties",
                &properties,
                |p| language.property_signature(ty, p),
                |p| ident::property_id(ty, p),
                formatter,
            )?;

            let mut methods = surface::visible_methods(ty);
            methods.retain(|m| !surface::is_trivial_method(m));
            methods.sort_by_key(|m| ident::method_id(ty, m));
            self.write_section(
                "Methods",
                &methods,
                |m| language.method_signature(ty, m),
                |m| ident::method_id(ty, m),
                formatter,
            )?;

            let mut operators = surface::visible_operators(ty);
            operators.sort_by_key(|m| ident::method_id(ty, m));
            self.write_section(
                "Operators",
                &operators,
                |m| language.method_signature(ty, m),
                |m| ident::method_id(ty, m),
                formatter,
            )?;

            let mut fields = surface::visible_fields(ty);
            fields.sort_by_key(|f| ident::field_id(ty, f));
            self.write_section(
                "Fields",
                &fields,
                |f| language.field_signature(ty, f),
                |f| ident::field_id(ty, f),
                formatter,
            )?;

            let mut events = surface::visible_events(ty);
            events.sort_by_key(|e| ident::event_id(ty, e));
            self.write_section(
                "Events",
                &events,
                |e| language.event_signature(ty, e),
                |e| ident::event_id(ty, e),
                formatter,
            )?;
        }

        writeln!(self.out, "</div>")?;
        Ok(())
    }

    fn write_section<T>(
        &mut self,
        heading: &str,
        items: &[&T],
        signature: impl Fn(&T) -> String,
        id: impl Fn(&T) -> String,
        formatter: &SummaryHtmlFormatter<'_>,
    ) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        self.description_table_header(heading)?;
        for item in items {
            writeln!(self.out, "<tr>")?;
            self.text_element("td", &signature(item))?;
            let summary = formatter.format_summary(self.docs.lookup(&id(item)))?;
            writeln!(self.out, "<td>{summary}</td>")?;
            writeln!(self.out, "</tr>")?;
        }
        self.description_table_footer()
    }

    fn description_table_header(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "<table class=\"descriptions\">")?;
        writeln!(self.out, "<tr>")?;
        self.text_element("th", title)?;
        self.text_element("th", "Description")?;
        writeln!(self.out, "</tr>")?;
        Ok(())
    }

    fn description_table_footer(&mut self) -> Result<()> {
        writeln!(self.out, "</table>")?;
        Ok(())
    }

    fn info(&mut self, label: &str, value: &str) -> Result<()> {
        writeln!(
            self.out,
            "<p><b>{}: </b>{}</p>",
            html_escape::encode_text(label),
            html_escape::encode_text(value)
        )?;
        Ok(())
    }

    fn text_element(&mut self, tag: &str, content: &str) -> Result<()> {
        writeln!(
            self.out,
            "<{tag}>{}</{tag}>",
            html_escape::encode_text(content)
        )?;
        Ok(())
    }
}
