#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Single,
    Remaining,
}

///
/// Path pattern used by route rules.
///
/// - `/productos` matches literally
/// - `*` or `{name}` matches exactly one segment
/// - trailing `/**` matches zero or more remaining segments
///
/// Empty segments are ignored, so trailing slashes do not matter.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn new(pattern: &str) -> Self {
        let raw_segments = split_segments(pattern).collect::<Vec<_>>();
        let last_idx = raw_segments.len().saturating_sub(1);

        let segments = raw_segments
            .into_iter()
            .enumerate()
            .map(|(idx, segment)| match segment {
                "**" if idx == last_idx => Segment::Remaining,
                "*" | "**" => Segment::Single,
                s if s.starts_with('{') && s.ends_with('}') => Segment::Single,
                s => Segment::Literal(s.to_string()),
            })
            .collect();

        Self { segments }
    }

    pub fn matches(&self, path: &str) -> bool {
        let mut path_segments = split_segments(path);

        for segment in &self.segments {
            match segment {
                Segment::Remaining => return true,
                Segment::Single => {
                    if path_segments.next().is_none() {
                        return false;
                    }
                }
                Segment::Literal(literal) => match path_segments.next() {
                    Some(path_segment) if path_segment == literal => {}
                    _ => return false,
                },
            }
        }

        path_segments.next().is_none()
    }
}

impl From<&str> for PathPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn literal() {
        let pattern = PathPattern::new("/productos");

        assert!(pattern.matches("/productos"));
        assert!(pattern.matches("/productos/"));
        assert!(!pattern.matches("/productos/1"));
        assert!(!pattern.matches("/categorias"));
        assert!(!pattern.matches("/"));
    }

    #[test]
    fn single_segment() {
        let pattern = PathPattern::new("/productos/*");

        assert!(pattern.matches("/productos/65f0c0ffee"));
        assert!(!pattern.matches("/productos"));
        assert!(!pattern.matches("/productos/1/extra"));
    }

    #[test]
    fn path_variable() {
        let pattern = PathPattern::new("/posts/{id}");

        assert!(pattern.matches("/posts/1"));
        assert!(!pattern.matches("/posts"));
    }

    #[test]
    fn remaining_segments() {
        let pattern = PathPattern::new("/actuator/**");

        assert!(pattern.matches("/actuator"));
        assert!(pattern.matches("/actuator/health"));
        assert!(pattern.matches("/actuator/health/liveness"));
        assert!(!pattern.matches("/productos"));
    }

    #[test]
    fn everything() {
        let pattern = PathPattern::new("/**");

        assert!(pattern.matches("/"));
        assert!(pattern.matches("/productos/1"));
    }

    #[test]
    fn double_star_in_the_middle_matches_one_segment() {
        let pattern = PathPattern::new("/a/**/c");

        assert!(pattern.matches("/a/b/c"));
        assert!(!pattern.matches("/a/b/b/c"));
    }
}
