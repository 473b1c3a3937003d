use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::tags::TagKind;

use super::{
    super::{scanner::Scanner, types::SpanMatch},
    emphasis::Emphasis,
};

static ANGLE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([A-Za-z][A-Za-z0-9+.\-]*://[^\s<>]+)>").unwrap());
static ANGLE_MAILTO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<(?i:mailto:)([^\s<>@]+@[^\s<>@]+)>").unwrap());
static ANGLE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([^\s<>@:]+@[^\s<>@]+)>").unwrap());
static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s<>\[\]]+").unwrap());
static BARE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap()
});

/// Automatic links, in angle brackets or bare in running text.
pub struct AutoLink;

impl AutoLink {
    pub const OPEN: u8 = b'<';
    pub const MAILTO: &'static str = "mailto:";

    /// Drops trailing word separators other than `/` from a bare match.
    fn trim_bare(s: &str) -> &str {
        s.trim_end_matches(|c: char| c != '/' && Emphasis::fringe_rank(Some(c)) < 2)
    }
}

fn push(sc: &mut Scanner<'_>, url: String, text: String, len: usize) -> bool {
    let start = sc.cur.pos();
    sc.matches
        .push(SpanMatch::single(TagKind::AutomaticLink { url, text }, start, start + len));
    sc.advance_to(start + len);
    true
}

/// `<scheme://...>`, `<mailto:...>` and `<user@host>`.
pub fn scan_angle(sc: &mut Scanner<'_>) -> bool {
    if sc.cur.peek() != Some(AutoLink::OPEN) {
        return false;
    }
    let rest = sc.cur.rest();
    if let Some(caps) = ANGLE_URL.captures(rest) {
        let url = caps[1].to_string();
        return push(sc, url.clone(), url, caps[0].len());
    }
    if let Some(caps) = ANGLE_MAILTO.captures(rest) {
        let address = caps[1].to_string();
        let url = format!("{}{address}", AutoLink::MAILTO);
        return push(sc, url, address, caps[0].len());
    }
    if let Some(caps) = ANGLE_EMAIL.captures(rest) {
        let address = caps[1].to_string();
        let url = format!("{}{address}", AutoLink::MAILTO);
        return push(sc, url, address, caps[0].len());
    }
    false
}

/// Bare `scheme://...` and `user@host`, only at a word boundary.
pub fn scan_bare(sc: &mut Scanner<'_>) -> bool {
    if !sc.cur.peek().is_some_and(|b| b.is_ascii_alphanumeric())
        || Emphasis::fringe_rank(sc.cur.prev_char()) >= 2
    {
        return false;
    }
    let rest = sc.cur.rest();
    if let Some(m) = BARE_URL.find(rest) {
        let url = AutoLink::trim_bare(m.as_str());
        if !url.ends_with("://") {
            return push(sc, url.to_string(), url.to_string(), url.len());
        }
    }
    if let Some(m) = BARE_EMAIL.find(rest) {
        let address = AutoLink::trim_bare(m.as_str());
        let url = format!("{}{address}", AutoLink::MAILTO);
        return push(sc, url, address.to_string(), address.len());
    }
    false
}
