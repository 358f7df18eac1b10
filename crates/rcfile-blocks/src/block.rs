//! Sentinel markers and block content computation
//!
//! A file is modeled as its `\n`-split lines. The managed block is the run
//! of lines strictly between the first start sentinel and the first end
//! sentinel after it; everything else is unmanaged and passes through
//! untouched.

/// First line of the managed block. Matched exactly, as a whole line.
pub const START_LINE: &str = "### MANAGED BY RCFILE-BLOCKS START (DO NOT EDIT)";

/// Last line of the managed block. Matched exactly, as a whole line.
pub const END_LINE: &str = "### MANAGED BY RCFILE-BLOCKS END (DO NOT EDIT)";

/// A file's lines split around its managed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Lines before the start sentinel; the whole file when no block exists.
    pub prefix: Vec<&'a str>,
    /// Lines strictly between the sentinels, when a complete pair was found.
    pub block: Option<Vec<&'a str>>,
    /// Lines after the end sentinel.
    pub suffix: Vec<&'a str>,
}

/// Split `source` around the first complete sentinel pair.
///
/// Only the first start sentinel and the first end sentinel after it are
/// recognized; any later pair is unmanaged content. A dangling sentinel
/// without its partner is treated as ordinary content. Empty input splits
/// into zero lines, so content rendered from it carries no leading blank.
pub fn split(source: &str) -> Segments<'_> {
    let lines: Vec<&str> = if source.is_empty() {
        Vec::new()
    } else {
        source.split('\n').collect()
    };

    let start = lines.iter().position(|line| *line == START_LINE);
    let end = start.and_then(|s| {
        lines[s + 1..]
            .iter()
            .position(|line| *line == END_LINE)
            .map(|offset| s + 1 + offset)
    });

    match (start, end) {
        (Some(s), Some(e)) => Segments {
            prefix: lines[..s].to_vec(),
            block: Some(lines[s + 1..e].to_vec()),
            suffix: lines[e + 1..].to_vec(),
        },
        _ => Segments {
            prefix: lines,
            block: None,
            suffix: Vec::new(),
        },
    }
}

/// Render the target content for `segments` with the block replaced.
///
/// With `present` the sentinel-delimited `desired` lines are spliced
/// between prefix and suffix, replacing whatever block existed; without it
/// the prefix and suffix are joined back directly. An empty `desired` still
/// produces a valid block: the two sentinels with nothing between them.
pub fn render<S: AsRef<str>>(segments: &Segments<'_>, desired: &[S], present: bool) -> String {
    let mut lines: Vec<&str> = segments.prefix.clone();
    if present {
        lines.push(START_LINE);
        lines.extend(desired.iter().map(|line| line.as_ref()));
        lines.push(END_LINE);
    }
    lines.extend(segments.suffix.iter().copied());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_without_sentinels_is_all_prefix() {
        let segments = split("alpha\nbeta\n");
        assert_eq!(segments.prefix, vec!["alpha", "beta", ""]);
        assert_eq!(segments.block, None);
        assert!(segments.suffix.is_empty());
    }

    #[test]
    fn split_empty_input_has_no_lines() {
        let segments = split("");
        assert!(segments.prefix.is_empty());
        assert_eq!(segments.block, None);
        assert!(segments.suffix.is_empty());
    }

    #[test]
    fn split_extracts_block_between_sentinels() {
        let source = format!("before\n{START_LINE}\none\ntwo\n{END_LINE}\nafter");
        let segments = split(&source);
        assert_eq!(segments.prefix, vec!["before"]);
        assert_eq!(segments.block, Some(vec!["one", "two"]));
        assert_eq!(segments.suffix, vec!["after"]);
    }

    #[test]
    fn split_recognizes_only_the_first_pair() {
        let source = format!(
            "{START_LINE}\nfirst\n{END_LINE}\n{START_LINE}\nsecond\n{END_LINE}"
        );
        let segments = split(&source);
        assert_eq!(segments.block, Some(vec!["first"]));
        assert_eq!(segments.suffix, vec![START_LINE, "second", END_LINE]);
    }

    #[test]
    fn split_treats_dangling_start_as_content() {
        let source = format!("before\n{START_LINE}\nafter");
        let segments = split(&source);
        assert_eq!(segments.prefix, vec!["before", START_LINE, "after"]);
        assert_eq!(segments.block, None);
        assert!(segments.suffix.is_empty());
    }

    #[test]
    fn split_ignores_end_sentinel_before_start() {
        let source = format!("{END_LINE}\n{START_LINE}\ninner");
        let segments = split(&source);
        assert_eq!(segments.block, None);
        assert_eq!(segments.prefix, vec![END_LINE, START_LINE, "inner"]);
    }

    #[test]
    fn render_present_on_empty_input_is_just_the_block() {
        let rendered = render(&split(""), &["line"], true);
        assert_eq!(rendered, format!("{START_LINE}\nline\n{END_LINE}"));
    }

    #[test]
    fn render_appends_block_after_trailing_newline() {
        let rendered = render(&split("existing\n"), &["line"], true);
        assert_eq!(rendered, format!("existing\n\n{START_LINE}\nline\n{END_LINE}"));
    }

    #[test]
    fn render_absent_joins_prefix_and_suffix() {
        let source = format!("top\n{START_LINE}\ninner\n{END_LINE}\nbottom\n");
        let rendered = render::<&str>(&split(&source), &[], false);
        assert_eq!(rendered, "top\nbottom\n");
    }

    #[test]
    fn render_empty_desired_keeps_sentinels() {
        let rendered = render::<&str>(&split(""), &[], true);
        assert_eq!(rendered, format!("{START_LINE}\n{END_LINE}"));
    }

    #[test]
    fn render_roundtrips_unchanged_block() {
        let source = format!("top\n\n{START_LINE}\ninner\n{END_LINE}\nbottom\n");
        let rendered = render(&split(&source), &["inner"], true);
        assert_eq!(rendered, source);
    }
}
