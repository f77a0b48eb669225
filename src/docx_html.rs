use docx_rust::document::{
    BodyContent, ParagraphContent, RunContent, TableCellContent, TableRowContent,
};
use docx_rust::formatting::CharacterProperty;
use docx_rust::Docx;

/// Convert a parsed DOCX body to HTML, keeping run colors, fonts and sizes
/// as inline `style` attributes.
pub fn docx_to_html(docx: &Docx) -> String {
    let mut ctx = ConvertContext {
        docx,
        output: String::new(),
        in_list: false,
    };

    for content in &docx.document.body.content {
        ctx.convert_body_content(content);
    }
    ctx.close_list();

    ctx.output
}

struct ConvertContext<'a> {
    docx: &'a Docx<'a>,
    output: String,
    in_list: bool,
}

impl<'a> ConvertContext<'a> {
    fn convert_body_content(&mut self, content: &BodyContent) {
        match content {
            BodyContent::Paragraph(para) => self.convert_paragraph(para),
            BodyContent::Table(table) => {
                self.close_list();
                self.convert_table(table);
            }
            BodyContent::Sdt(sdt) => {
                if let Some(ref sdt_content) = sdt.content {
                    for item in &sdt_content.content {
                        self.convert_body_content(item);
                    }
                }
            }
            _ => {}
        }
    }

    fn convert_paragraph(&mut self, para: &docx_rust::document::Paragraph) {
        let mut heading_level: Option<u8> = None;
        let mut is_list_item = false;

        if let Some(ref prop) = para.property {
            if let Some(ref style_id) = prop.style_id {
                heading_level = heading_level_for(style_id.value.as_ref());
            }
            if let Some(ref num_prop) = prop.numbering {
                is_list_item = num_prop.id.is_some();
            }
        }

        let inline = self.collect_inline_html(para);

        if is_list_item && heading_level.is_none() {
            if !self.in_list {
                self.output.push_str("<ul>\n");
                self.in_list = true;
            }
            self.output.push_str(&format!("<li>{}</li>\n", inline));
            return;
        }

        self.close_list();

        if inline.trim().is_empty() {
            return;
        }

        match heading_level {
            Some(level) => self
                .output
                .push_str(&format!("<h{level}>{}</h{level}>\n", inline)),
            None => self.output.push_str(&format!("<p>{}</p>\n", inline)),
        }
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.output.push_str("</ul>\n");
            self.in_list = false;
        }
    }

    fn collect_inline_html(&self, para: &docx_rust::document::Paragraph) -> String {
        let mut result = String::new();

        for pc in &para.content {
            match pc {
                ParagraphContent::Run(run) => result.push_str(&self.convert_run(run)),
                ParagraphContent::Link(link) => {
                    let inner = link
                        .content
                        .as_ref()
                        .map(|run| self.convert_run(run))
                        .unwrap_or_default();

                    match self.resolve_hyperlink_target(link) {
                        Some(url) => result.push_str(&format!(
                            "<a href=\"{}\">{}</a>",
                            escape_html(&url),
                            inner
                        )),
                        None => result.push_str(&inner),
                    }
                }
                _ => {}
            }
        }

        result
    }

    fn convert_run(&self, run: &docx_rust::document::Run) -> String {
        let mut text = String::new();

        for rc in &run.content {
            match rc {
                RunContent::Text(t) => text.push_str(&escape_html(&t.text)),
                RunContent::Break(_) => text.push_str("<br />"),
                RunContent::Tab(_) => text.push('\t'),
                _ => {}
            }
        }

        if text.is_empty() {
            return text;
        }

        format_run_html(text, &run.property)
    }

    fn resolve_hyperlink_target(&self, link: &docx_rust::document::Hyperlink) -> Option<String> {
        if let Some(ref anchor) = link.anchor {
            return Some(format!("#{}", anchor));
        }

        let id = link.id.as_ref()?;
        self.docx
            .document_rels
            .as_ref()?
            .relationships
            .iter()
            .find(|r| r.id.as_ref() == id.as_ref())
            .map(|r| r.target.to_string())
    }

    fn convert_table(&mut self, table: &docx_rust::document::Table) {
        self.output.push_str("<table>\n");

        for row in &table.rows {
            self.output.push_str("<tr>");
            for cell_content in &row.cells {
                if let TableRowContent::TableCell(cell) = cell_content {
                    self.output.push_str("<td>");
                    for tc in &cell.content {
                        let TableCellContent::Paragraph(para) = tc;
                        let inline = self.collect_inline_html(para);
                        if !inline.trim().is_empty() {
                            self.output.push_str(&format!("<p>{}</p>", inline));
                        }
                    }
                    self.output.push_str("</td>");
                }
            }
            self.output.push_str("</tr>\n");
        }

        self.output.push_str("</table>\n");
    }
}

fn heading_level_for(style_id: &str) -> Option<u8> {
    match style_id {
        "Heading1" | "heading1" | "heading 1" | "Title" | "title" => Some(1),
        "Heading2" | "heading2" | "heading 2" | "Subtitle" | "subtitle" => Some(2),
        "Heading3" | "heading3" | "heading 3" => Some(3),
        "Heading4" | "heading4" | "heading 4" => Some(4),
        "Heading5" | "heading5" | "heading 5" => Some(5),
        "Heading6" | "heading6" | "heading 6" => Some(6),
        _ => None,
    }
}

/// Wrap already-escaped run text in emphasis tags and a styled span.
fn format_run_html(text: String, props: &Option<CharacterProperty>) -> String {
    let Some(props) = props else {
        return text;
    };

    let is_bold = props
        .bold
        .as_ref()
        .map(|b| b.value != Some(false))
        .unwrap_or(false);
    let is_italic = props
        .italics
        .as_ref()
        .map(|i| i.value != Some(false))
        .unwrap_or(false);
    let is_strike = props.strike.is_some() || props.dstrike.is_some();

    let mut result = text;
    if is_strike {
        result = format!("<s>{}</s>", result);
    }
    if is_italic {
        result = format!("<em>{}</em>", result);
    }
    if is_bold {
        result = format!("<strong>{}</strong>", result);
    }

    let color = props.color.as_ref().and_then(|c| run_color(&c.value));
    let font = props
        .fonts
        .as_ref()
        .and_then(|f| f.ascii.as_deref())
        .map(str::to_string);
    // w:sz is measured in half-points.
    let size_pt = props.size.as_ref().map(|s| s.value as f64 / 2.0);

    let declarations = style_declarations(color.as_deref(), font.as_deref(), size_pt);
    if declarations.is_empty() {
        return result;
    }

    format!(
        "<span style=\"{}\">{}</span>",
        escape_html(&declarations),
        result
    )
}

/// `w:color` values are bare hex or `auto`.
fn run_color(value: &str) -> Option<String> {
    let hex = value.trim().trim_start_matches('#');
    (hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .then(|| format!("#{}", hex.to_ascii_uppercase()))
}

fn style_declarations(color: Option<&str>, font: Option<&str>, size_pt: Option<f64>) -> String {
    let mut parts = Vec::new();
    if let Some(color) = color {
        parts.push(format!("color: {color}"));
    }
    if let Some(font) = font.filter(|f| !f.trim().is_empty()) {
        parts.push(format!("font-family: '{}'", font.trim()));
    }
    if let Some(size) = size_pt.filter(|s| *s > 0.0) {
        parts.push(format!("font-size: {size}pt"));
    }
    parts.join("; ")
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
