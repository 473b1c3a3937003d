//! HTML rendering of a tag stream.
//!
//! Each opening tag pushes its closing markup; `End` pops it. Reference
//! definitions and blank-line runs produce nothing.

use html_escape::{encode_double_quoted_attribute, encode_text};
use markdown_strata_engine::{Pairing, Tag, TagKind};

fn title_attr(title: &Option<String>) -> String {
    title
        .as_deref()
        .map(|t| format!(" title=\"{}\"", encode_double_quoted_attribute(t)))
        .unwrap_or_default()
}

/// Opening and closing markup for a paired tag.
fn paired(kind: &TagKind) -> (String, String) {
    match kind {
        TagKind::AtxHeader { level } | TagKind::SetextHeader { level } => {
            (format!("<h{level}>"), format!("</h{level}>\n"))
        }
        TagKind::Code => ("<pre><code>".into(), "</code></pre>\n".into()),
        TagKind::Quote => ("<blockquote>\n".into(), "</blockquote>\n".into()),
        TagKind::Item => ("<li>".into(), "</li>\n".into()),
        TagKind::UnorderedList { .. } => ("<ul>\n".into(), "</ul>\n".into()),
        TagKind::OrderedList { first_number, .. } if *first_number != 1 => {
            (format!("<ol start=\"{first_number}\">\n"), "</ol>\n".into())
        }
        TagKind::OrderedList { .. } => ("<ol>\n".into(), "</ol>\n".into()),
        TagKind::Paragraph => ("<p>".into(), "</p>\n".into()),
        TagKind::Emphasis { level: 1 } => ("<em>".into(), "</em>".into()),
        TagKind::Emphasis { .. } => ("<strong>".into(), "</strong>".into()),
        TagKind::Link { url, title, .. } => (
            format!(
                "<a href=\"{}\"{}>",
                encode_double_quoted_attribute(url),
                title_attr(title)
            ),
            "</a>".into(),
        ),
        _ => (String::new(), String::new()),
    }
}

fn single(kind: &TagKind, out: &mut String) {
    match kind {
        TagKind::HorizontalRule => out.push_str("<hr />\n"),
        TagKind::Prose { text } => out.push_str(&encode_text(text)),
        TagKind::InlineCode { content } => {
            out.push_str("<code>");
            out.push_str(&encode_text(content));
            out.push_str("</code>");
        }
        TagKind::AutomaticLink { url, text } => {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(url),
                encode_text(text)
            ));
        }
        TagKind::Image {
            url,
            title,
            alt_text,
            ..
        } => out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\"{} />",
            encode_double_quoted_attribute(url),
            encode_double_quoted_attribute(alt_text),
            title_attr(title)
        )),
        _ => {}
    }
}

pub fn render_html(tags: &[Tag]) -> String {
    let mut out = String::new();
    let mut closers: Vec<String> = Vec::new();
    for tag in tags {
        match tag.kind.pairing() {
            Pairing::Opens => {
                let (open, close) = paired(&tag.kind);
                out.push_str(&open);
                closers.push(close);
            }
            Pairing::Closes => {
                if let Some(close) = closers.pop() {
                    out.push_str(&close);
                }
            }
            Pairing::SelfClosing => single(&tag.kind, &mut out),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_strata_engine::{ParseOptions, parse_document};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn html(text: &str) -> String {
        let doc = parse_document(text, &ParseOptions::default()).unwrap();
        render_html(&doc.tags)
    }

    #[rstest]
    #[case("# Hello\n", "<h1>Hello</h1>\n")]
    #[case("Hello\n-----\n", "<h2>Hello</h2>\n")]
    #[case("*a* **b**\n", "<p><em>a</em> <strong>b</strong></p>\n")]
    #[case("`a < b`\n", "<p><code>a &lt; b</code></p>\n")]
    #[case("***\n", "<hr />\n")]
    #[case("    x & y\n", "<pre><code>x &amp; y</code></pre>\n")]
    #[case("<http://a.org>\n", "<p><a href=\"http://a.org\">http://a.org</a></p>\n")]
    fn renders(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(html(input), expected);
    }

    #[test]
    fn links_escape_attributes() {
        assert_eq!(
            html("[x](/u?a=1&b=2 'say \"hi\"')\n"),
            "<p><a href=\"/u?a=1&amp;b=2\" title=\"say &quot;hi&quot;\">x</a></p>\n"
        );
    }

    #[test]
    fn images_carry_alt_text() {
        assert_eq!(
            html("![a *b*](i.png)\n"),
            "<p><img src=\"i.png\" alt=\"a *b*\" /></p>\n"
        );
    }

    #[test]
    fn containers_nest() {
        assert_eq!(
            html("> - a\n> - b\n"),
            "<blockquote>\n<ul>\n<li><p>a</p>\n</li>\n<li><p>b</p>\n</li>\n</ul>\n</blockquote>\n"
        );
    }

    #[test]
    fn ordered_list_keeps_first_number() {
        assert_eq!(
            html("3. x\n"),
            "<ol start=\"3\">\n<li><p>x</p>\n</li>\n</ol>\n"
        );
    }

    #[test]
    fn definitions_and_blank_lines_render_nothing() {
        assert_eq!(html("[a]: /u\n\n\n"), "");
    }
}
