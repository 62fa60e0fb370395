//! Class sets for the plot widgets and the helper that merges them with
//! caller-supplied classes.
//!
//! The vocabulary is Tailwind's. `merge_classes` understands just enough of it
//! to let a caller override a base utility (`p-2` over `p-4`, `text-blue-600`
//! over `text-red-500`) instead of shipping both and relying on stylesheet
//! order. Unknown classes are passed through and only de-duplicated.

/// Classes applied to the "no data" placeholder.
pub const FALLBACK_CLASSES: &[&str] = &["p-4 text-red-500"];

/// Classes applied to the container around a rendered plot.
pub const CONTAINER_CLASSES: &[&str] = &[
    "flex justify-center items-center w-full",
    "overflow-hidden rounded-lg",
    "border border-gray-200 dark:border-gray-700",
];

/// Classes applied to the `<img>` itself: never wider than the container,
/// at most 500px tall, scaled without cropping.
pub const IMAGE_CLASSES: &str = "max-w-full max-h-[500px] object-contain";

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];

const SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

const SPECIAL_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];

/// Prefixes whose whole value space is a single conflict group. Longer
/// prefixes come first so `max-w-` wins over `w-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify-content"),
    ("items-", "align-items"),
    ("self-", "align-self"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("max-w-", "max-width"),
    ("max-h-", "max-height"),
    ("min-w-", "min-width"),
    ("min-h-", "min-height"),
    ("w-", "width"),
    ("h-", "height"),
    ("px-", "padding-x"),
    ("py-", "padding-y"),
    ("pt-", "padding-top"),
    ("pr-", "padding-right"),
    ("pb-", "padding-bottom"),
    ("pl-", "padding-left"),
    ("p-", "padding"),
    ("mx-", "margin-x"),
    ("my-", "margin-y"),
    ("mt-", "margin-top"),
    ("mr-", "margin-right"),
    ("mb-", "margin-bottom"),
    ("ml-", "margin-left"),
    ("m-", "margin"),
];

/// Combines `base` with the caller's `extra` classes into one class string.
///
/// Every entry is split on whitespace and applied in order, base first. A
/// class replaces any earlier class that is identical or that sets the same
/// property under the same variants (`dark:`, `hover:`, ...). The surviving
/// classes keep their application order.
pub fn merge_classes<'a>(base: &[&'a str], extra: Option<&'a str>) -> String {
    let tokens = base
        .iter()
        .flat_map(|entry| entry.split_whitespace())
        .chain(extra.into_iter().flat_map(str::split_whitespace));

    let mut merged: Vec<&str> = Vec::new();
    for class in tokens {
        let key = conflict_key(class);
        merged.retain(|existing| {
            *existing != class && (key.is_none() || conflict_key(existing) != key)
        });
        merged.push(class);
    }
    merged.join(" ")
}

/// Variant prefix plus property group of a class, if the group is known.
fn conflict_key(class: &str) -> Option<(&str, &'static str)> {
    // Arbitrary values (`bg-[url(a:b)]`) may contain colons of their own.
    let scan_end = class.find('[').unwrap_or(class.len());
    let (variants, utility) = match class[..scan_end].rfind(':') {
        Some(idx) => (&class[..=idx], &class[idx + 1..]),
        None => ("", class),
    };
    utility_group(utility).map(|group| (variants, group))
}

fn utility_group(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }

    if utility == "rounded" {
        return Some("rounded");
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        return (rest == "none" || rest == "full" || is_size(rest) || is_arbitrary(rest))
            .then_some("rounded");
    }

    if utility == "border" {
        return Some("border-width");
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        if rest.chars().all(|c| c.is_ascii_digit()) {
            return Some("border-width");
        }
        return is_color(rest).then_some("border-color");
    }

    if let Some(rest) = utility.strip_prefix("text-") {
        if is_size(rest) {
            return Some("font-size");
        }
        if matches!(rest, "left" | "center" | "right" | "justify" | "start" | "end") {
            return Some("text-align");
        }
        return is_color(rest).then_some("text-color");
    }

    if let Some(rest) = utility.strip_prefix("bg-") {
        return is_color(rest).then_some("bg-color");
    }

    // `object-center`, `object-top`, ... set object-position instead.
    if let Some(rest) = utility.strip_prefix("object-") {
        return matches!(rest, "contain" | "cover" | "fill" | "none" | "scale-down")
            .then_some("object-fit");
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn is_size(value: &str) -> bool {
    SIZES.contains(&value)
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

fn is_color(value: &str) -> bool {
    if SPECIAL_COLORS.contains(&value) || value.starts_with("[#") {
        return true;
    }
    match value.split_once('-') {
        Some((hue, shade)) => {
            // Opacity modifiers (`gray-200/50`) keep the colour group.
            let shade = shade.split('/').next().unwrap_or(shade);
            PALETTE.contains(&hue) && !shade.is_empty() && shade.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
