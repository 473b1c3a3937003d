use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{error::ParseError, parsing::tags::TagKind};

use super::super::{
    classify::LineView,
    engine::{BlockHandler, Context, Detected},
    types::{BlockEvent, Within, raw_region},
};

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[ \t]*\[([^\]]+)\][ \t]*:[ \t]*<?([^\s>]+)>?(?:[ \t]+(?:"([^"]*)"|'([^']*)'|\(([^)]*)\)))?[ \t]*$"#,
    )
    .unwrap()
});

static TITLE_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[ \t]*(?:"([^"]*)"|'([^']*)'|\(([^)]*)\))[ \t]*$"#).unwrap()
});

/// A parsed `[id]: url "title"` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub id: String,
    pub url: String,
    pub title: Option<String>,
}

/// First non-empty group among `groups`.
fn title_of(caps: &Captures<'_>, groups: impl IntoIterator<Item = usize>) -> Option<String> {
    groups
        .into_iter()
        .find_map(|g| caps.get(g))
        .map(|m| m.as_str().to_string())
}

impl Definition {
    /// Parses a definition from its URL line, consulting `next` for a title
    /// when the URL line has none. Returns the definition and the number of
    /// lines it spans.
    pub fn parse(line: &str, next: Option<&str>) -> Option<(Self, usize)> {
        let caps = DEFINITION.captures(line)?;
        let mut def = Definition {
            id: caps[1].to_string(),
            url: caps[2].to_string(),
            title: title_of(&caps, [3, 4, 5]),
        };
        if def.title.is_none()
            && let Some(caps) = next.and_then(|n| TITLE_ONLY.captures(n))
        {
            def.title = title_of(&caps, [1, 2, 3]);
            return Some((def, 2));
        }
        Some((def, 1))
    }
}

pub fn detect<'s>(lines: &[LineView<'s>], _within: Within) -> Option<Detected<'s>> {
    let first = *lines.first()?;
    let next = lines.get(1).map(|l| l.text);
    let (def, taken) = Definition::parse(first.text, next)?;
    Some(Detected {
        handler: Box::new(ReferenceHandler {
            def,
            lines: lines[..taken].to_vec(),
        }),
        lines: taken,
    })
}

struct ReferenceHandler<'s> {
    def: Definition,
    lines: Vec<LineView<'s>>,
}

impl<'s> BlockHandler<'s> for ReferenceHandler<'s> {
    fn close(
        self: Box<Self>,
        _cx: Context<'s>,
        out: &mut Vec<BlockEvent>,
    ) -> Result<(), ParseError> {
        let Definition { id, url, title } = self.def;
        out.push(BlockEvent::tag(
            TagKind::ReferenceResolution { id, url, title },
            raw_region(&self.lines),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn def(id: &str, url: &str, title: Option<&str>) -> Definition {
        Definition {
            id: id.into(),
            url: url.into(),
            title: title.map(Into::into),
        }
    }

    #[rstest]
    #[case("[a]: http://x", def("a", "http://x", None))]
    #[case("  [My Id] : <http://x>", def("My Id", "http://x", None))]
    #[case("[a]: /p \"T\"", def("a", "/p", Some("T")))]
    #[case("[a]: /p 'T'", def("a", "/p", Some("T")))]
    #[case("[a]: /p (T t)", def("a", "/p", Some("T t")))]
    fn single_line_definitions(#[case] line: &str, #[case] expected: Definition) {
        assert_eq!(Definition::parse(line, None), Some((expected, 1)));
    }

    #[test]
    fn title_on_following_line() {
        let parsed = Definition::parse("[a]: /p", Some("   \"Later\""));
        assert_eq!(parsed, Some((def("a", "/p", Some("Later")), 2)));
    }

    #[test]
    fn following_line_ignored_when_title_present() {
        let parsed = Definition::parse("[a]: /p \"T\"", Some("\"Other\""));
        assert_eq!(parsed, Some((def("a", "/p", Some("T")), 1)));
    }

    #[test]
    fn not_definitions() {
        assert_eq!(Definition::parse("[a] text", None), None);
        assert_eq!(Definition::parse("[a]: ", None), None);
        assert_eq!(Definition::parse("[a]: /p trailing", None), None);
    }
}
