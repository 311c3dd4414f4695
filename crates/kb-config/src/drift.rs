//! Differences between two site configurations.
//!
//! Entries are compared by position. The report does not decide which side
//! is correct; it only lists where the two diverge.

use std::fmt;

use crate::{BasePath, NavEntry, SiteConfig};

/// Side of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// One difference between two configurations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Drift {
    /// Base paths differ.
    Base {
        left: BasePath,
        right: BasePath,
        /// Both address the same prefix and differ only by a trailing slash.
        trailing_slash_only: bool,
    },
    /// A field has different values on each side.
    Changed {
        field: String,
        left: String,
        right: String,
    },
    /// An entry exists only on one side.
    Missing { field: String, present_on: Side },
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base {
                left,
                right,
                trailing_slash_only: true,
            } => write!(
                f,
                "base: {:?} vs {:?} (trailing slash differs)",
                left.as_str(),
                right.as_str()
            ),
            Self::Base { left, right, .. } => {
                write!(f, "base: {:?} vs {:?}", left.as_str(), right.as_str())
            }
            Self::Changed { field, left, right } => write!(f, "{field}: {left:?} vs {right:?}"),
            Self::Missing { field, present_on } => write!(f, "{field}: only on {present_on} side"),
        }
    }
}

/// List every difference between `left` and `right`.
pub fn compare(left: &SiteConfig, right: &SiteConfig) -> Vec<Drift> {
    let mut drifts = Vec::new();

    changed(&mut drifts, "title", left.title(), right.title());
    changed(
        &mut drifts,
        "description",
        left.description(),
        right.description(),
    );

    if left.base() != right.base() {
        drifts.push(Drift::Base {
            left: left.base().clone(),
            right: right.base().clone(),
            trailing_slash_only: left.base().same_prefix(right.base()),
        });
    }

    if left.outline() != right.outline() {
        let fmt_outline = |config: &SiteConfig| {
            let outline = config.outline();
            format!("[{}, {}]", outline.min(), outline.max())
        };
        drifts.push(Drift::Changed {
            field: "themeConfig.outline".to_owned(),
            left: fmt_outline(left),
            right: fmt_outline(right),
        });
    }

    compare_entries(&mut drifts, "themeConfig.nav", left.nav(), right.nav());

    let groups = left.sidebar().len().max(right.sidebar().len());
    for i in 0..groups {
        let field = format!("themeConfig.sidebar[{i}]");
        match (left.sidebar().get(i), right.sidebar().get(i)) {
            (Some(l), Some(r)) => {
                changed(&mut drifts, &format!("{field}.text"), &l.text, &r.text);
                compare_entries(&mut drifts, &format!("{field}.items"), &l.items, &r.items);
            }
            (Some(_), None) => missing(&mut drifts, field, Side::Left),
            (None, Some(_)) => missing(&mut drifts, field, Side::Right),
            (None, None) => {}
        }
    }

    let socials = left.social_links().len().max(right.social_links().len());
    for i in 0..socials {
        let field = format!("themeConfig.socialLinks[{i}]");
        match (left.social_links().get(i), right.social_links().get(i)) {
            (Some(l), Some(r)) => {
                changed(&mut drifts, &format!("{field}.icon"), &l.icon, &r.icon);
                changed(&mut drifts, &format!("{field}.link"), &l.link, &r.link);
            }
            (Some(_), None) => missing(&mut drifts, field, Side::Left),
            (None, Some(_)) => missing(&mut drifts, field, Side::Right),
            (None, None) => {}
        }
    }

    drifts
}

fn compare_entries(drifts: &mut Vec<Drift>, field: &str, left: &[NavEntry], right: &[NavEntry]) {
    for i in 0..left.len().max(right.len()) {
        let field = format!("{field}[{i}]");
        match (left.get(i), right.get(i)) {
            (Some(l), Some(r)) => {
                changed(drifts, &format!("{field}.text"), &l.text, &r.text);
                changed(drifts, &format!("{field}.link"), &l.link, &r.link);
            }
            (Some(_), None) => missing(drifts, field, Side::Left),
            (None, Some(_)) => missing(drifts, field, Side::Right),
            (None, None) => {}
        }
    }
}

fn changed(drifts: &mut Vec<Drift>, field: &str, left: &str, right: &str) {
    if left != right {
        drifts.push(Drift::Changed {
            field: field.to_owned(),
            left: left.to_owned(),
            right: right.to_owned(),
        });
    }
}

fn missing(drifts: &mut Vec<Drift>, field: String, present_on: Side) {
    drifts.push(Drift::Missing { field, present_on });
}
