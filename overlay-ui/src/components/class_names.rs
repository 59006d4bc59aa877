//! Class-name merging for Tailwind utility strings
//!
//! Components build their `class` attribute from a fixed base plus optional
//! caller fragments. Merging collapses duplicates and lets later utilities win
//! over earlier ones from the same group, so `cn!("p-2", "p-4")` yields `p-4`.

use std::collections::HashSet;

/// Anything that can contribute an optional class fragment to [`cn!`](crate::cn)
pub trait ClassFragment {
    fn fragment(&self) -> Option<&str>;
}

impl ClassFragment for str {
    fn fragment(&self) -> Option<&str> {
        Some(self)
    }
}

impl ClassFragment for String {
    fn fragment(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
    fn fragment(&self) -> Option<&str> {
        (**self).fragment()
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn fragment(&self) -> Option<&str> {
        self.as_ref().and_then(|f| f.fragment())
    }
}

/// Merge class fragments into a single class string.
///
/// Accepts `&str`, `String`, and `Option`s of either. Absent fragments are skipped.
///
/// ```
/// let open = true;
/// let class = overlay_ui::cn!("px-4 bg-gray-800", open.then_some("bg-gray-700"), None::<&str>);
/// assert_eq!(class, "px-4 bg-gray-700");
/// ```
#[macro_export]
macro_rules! cn {
    ($($fragment:expr),* $(,)?) => {
        $crate::components::class_names::merge_classes(&[
            $($crate::components::class_names::ClassFragment::fragment(&$fragment)),*
        ])
    };
}

/// Merge optional class fragments, resolving duplicates and utility conflicts.
///
/// Later classes take precedence. The survivors keep the relative order of
/// their last occurrence.
pub fn merge_classes(fragments: &[Option<&str>]) -> String {
    let classes: Vec<&str> = fragments
        .iter()
        .flatten()
        .flat_map(|fragment| fragment.split_whitespace())
        .collect();

    let mut seen_classes = HashSet::new();
    let mut seen_groups = HashSet::new();
    let mut kept = Vec::with_capacity(classes.len());

    for class in classes.into_iter().rev() {
        if !seen_classes.insert(class) {
            continue;
        }
        if let Some(group) = class_group(class) {
            if !seen_groups.insert(group) {
                continue;
            }
        }
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

/// Conflict key for a class: variant prefix plus utility group.
///
/// Returns `None` for classes that never conflict with anything but an exact duplicate.
pub fn class_group(class: &str) -> Option<String> {
    let (variants, utility) = split_variants(class);
    let (important, utility) = match utility.strip_prefix('!') {
        Some(rest) => ("!", rest),
        None => ("", utility),
    };
    let utility = utility.strip_prefix('-').unwrap_or(utility);
    let group = utility_group(utility)?;
    Some(format!("{variants}{important}{group}"))
}

/// Split `hover:md:bg-red-500` into (`hover:md:`, `bg-red-500`).
///
/// Colons inside arbitrary values (`bg-[url(a:b)]`) are not variant separators.
fn split_variants(class: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split_at = None;
    for (index, ch) in class.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split_at = Some(index),
            _ => {}
        }
    }
    match split_at {
        Some(index) => class.split_at(index + 1),
        None => ("", class),
    }
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const RADIUS_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

const BORDER_WIDTHS: &[&str] = &["0", "2", "4", "8"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

/// Prefix-keyed groups, longest prefix first so `max-w-` wins over `w-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("max-w-", "max-w"),
    ("min-w-", "min-w"),
    ("max-h-", "max-h"),
    ("min-h-", "min-h"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("opacity-", "opacity"),
    ("justify-", "justify"),
    ("items-", "items"),
    ("inset-x-", "inset-x"),
    ("inset-y-", "inset-y"),
    ("inset-", "inset"),
    ("size-", "size"),
    ("gap-", "gap"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("p-", "p"),
    ("m-", "m"),
    ("w-", "w"),
    ("h-", "h"),
    ("z-", "z"),
];

/// `[14px]`, `[1.25rem]` or `[length:var(--x)]`
fn is_arbitrary_length(value: &str) -> bool {
    value.strip_prefix('[').is_some_and(|inner| {
        inner.starts_with(|c: char| c.is_ascii_digit() || c == '.') || inner.starts_with("length:")
    })
}

fn utility_group(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    if let Some(value) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&value) || is_arbitrary_length(value) {
            "text-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return if value == "none" || value.starts_with("gradient-") {
            Some("bg-image")
        } else {
            Some("bg-color")
        };
    }
    if utility == "border" {
        return Some("border-width");
    }
    if let Some(value) = utility.strip_prefix("border-") {
        if BORDER_WIDTHS.contains(&value) {
            return Some("border-width");
        }
        if BORDER_STYLES.contains(&value) {
            return Some("border-style");
        }
        // Side-specific borders (border-t, border-x-2, ...) only conflict with themselves
        if ["t", "r", "b", "l", "x", "y", "s", "e"]
            .iter()
            .any(|side| value == *side || value.starts_with(&format!("{side}-")))
        {
            return None;
        }
        return Some("border-color");
    }
    if utility == "rounded" {
        return Some("rounded");
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        return (RADIUS_SIZES.contains(&value) || value.starts_with('[')).then_some("rounded");
    }
    if utility == "shadow" {
        return Some("shadow");
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&value) {
            "shadow"
        } else {
            "shadow-color"
        });
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}
