//! Minimal XML element tree with a pretty printer.
//!
//! Only what the import format needs: elements, text leaves, insertion-ordered
//! children. No attributes, namespaces or mixed content.

use core::fmt::Write as _;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Empty,
    Text(String),
    Children(Vec<XmlElement>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    content: Content,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Content::Empty,
        }
    }

    /// A leaf element holding `text`.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Content::Text(text.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a child. Replaces any text content.
    pub fn push(&mut self, child: XmlElement) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            content => *content = Content::Children(vec![child]),
        }
    }

    pub fn child(mut self, child: XmlElement) -> Self {
        self.push(child);
        self
    }

    pub fn children(&self) -> &[XmlElement] {
        match &self.content {
            Content::Children(children) => children.as_slice(),
            _ => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// First direct child named `name`.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.children().iter().find(|c| c.name == name)
    }

    /// The whole document: declaration, then this element as root.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(DECLARATION);
        out.push('\n');
        self.write_to(&mut out, 0);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        match &self.content {
            Content::Empty => {
                let _ = writeln!(out, "<{}/>", self.name);
            }
            Content::Text(text) => {
                let _ = writeln!(out, "<{0}>{1}</{0}>", self.name, escape(text));
            }
            Content::Children(children) => {
                let _ = writeln!(out, "<{}>", self.name);
                for child in children {
                    child.write_to(out, depth + 1);
                }
                for _ in 0..depth {
                    out.push_str(INDENT);
                }
                let _ = writeln!(out, "</{}>", self.name);
            }
        }
    }
}

/// Escapes the characters that may not appear raw in element text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_declaration_and_two_space_indent() {
        let doc = XmlElement::new("A")
            .child(XmlElement::text("B", "1"))
            .child(XmlElement::new("C").child(XmlElement::text("D", "x")));

        assert_eq!(
            doc.render(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <A>\n  <B>1</B>\n  <C>\n    <D>x</D>\n  </C>\n</A>\n"
        );
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape(r#"Tom & "Jerry" <Ltd>"#), "Tom &amp; &quot;Jerry&quot; &lt;Ltd&gt;");
        let rendered = XmlElement::text("LEDGERNAME", "Maintenance & Support Income").render();
        assert!(rendered.contains("<LEDGERNAME>Maintenance &amp; Support Income</LEDGERNAME>"));
    }

    #[test]
    fn empty_element_is_self_closing() {
        assert!(XmlElement::new("STATICVARIABLES").render().ends_with("<STATICVARIABLES/>\n"));
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut root = XmlElement::new("R");
        for name in ["Z", "A", "M"] {
            root.push(XmlElement::text(name, name));
        }
        let names: Vec<&str> = root.children().iter().map(XmlElement::name).collect();
        assert_eq!(names, ["Z", "A", "M"]);
        assert_eq!(root.find("A").and_then(XmlElement::text_content), Some("A"));
    }
}
