//! Ant-style path patterns.
//!
//! # Pattern Syntax
//!
//! - `?` matches exactly one character within a segment
//! - `*` matches zero or more characters within a segment
//! - `**` matches zero or more whole segments
//!
//! Leading and trailing slashes are normalized on both sides, so the pattern
//! `/api/user/**` matches `/api/user`, `/api/user/` and `/api/user/17/posts`.
//!
//! # Examples
//!
//! ```rust
//! use portcullis_core::http::security::path_matcher::PathPattern;
//!
//! let pattern = PathPattern::new("/api/user/**");
//! assert!(pattern.matches("/api/user"));
//! assert!(pattern.matches("/api/user/17"));
//! assert!(!pattern.matches("/api/hello"));
//! ```

/// A parsed path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    pattern: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    /// Exact text, no wildcards.
    Literal(String),
    /// `*` as a whole segment.
    AnySegment,
    /// `**`, spanning zero or more segments.
    AnySpan,
    /// Text containing `*` or `?`.
    Glob(String),
}

impl PathPattern {
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| match part {
                "**" => Segment::AnySpan,
                "*" => Segment::AnySegment,
                _ if part.contains('*') || part.contains('?') => Segment::Glob(part.to_string()),
                _ => Segment::Literal(part.to_string()),
            })
            .collect();

        PathPattern {
            pattern: pattern.to_string(),
            segments,
        }
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Checks whether `path` matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        match_segments(&self.segments, &parts)
    }
}

fn match_segments(segments: &[Segment], parts: &[&str]) -> bool {
    let (segment, rest) = match segments.split_first() {
        Some(pair) => pair,
        None => return parts.is_empty(),
    };

    if *segment == Segment::AnySpan {
        // Try consuming zero, one, two, ... path segments.
        return (0..=parts.len()).any(|skip| match_segments(rest, &parts[skip..]));
    }

    match parts.split_first() {
        Some((part, tail)) => segment_matches(segment, part) && match_segments(rest, tail),
        None => false,
    }
}

fn segment_matches(segment: &Segment, part: &str) -> bool {
    match segment {
        Segment::Literal(text) => text == part,
        Segment::AnySegment | Segment::AnySpan => true,
        Segment::Glob(glob) => glob_matches(glob, part),
    }
}

/// `*` and `?` within a single segment; two-pointer scan with backtracking.
fn glob_matches(glob: &str, text: &str) -> bool {
    let glob: Vec<char> = glob.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let (mut g, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if g < glob.len() && (glob[g] == '?' || glob[g] == text[t]) {
            g += 1;
            t += 1;
        } else if g < glob.len() && glob[g] == '*' {
            backtrack = Some((g, t));
            g += 1;
        } else if let Some((star, matched)) = backtrack {
            g = star + 1;
            t = matched + 1;
            backtrack = Some((star, matched + 1));
        } else {
            return false;
        }
    }

    glob[g..].iter().all(|&c| c == '*')
}
