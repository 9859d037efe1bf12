//! Format tags derived from file names.

use std::{borrow::Borrow, fmt};

/// The dispatch key of a volume file: the text after the last `.` of its name.
///
/// The tag is taken verbatim. No case folding is performed, so `"VOL"` and
/// `"vol"` are different tags. A name without any `.` yields the whole name.
///
/// # Example
///
/// ```rust
/// use volfile_core::FormatTag;
///
/// assert_eq!(FormatTag::from_filename("data/scan.raw").as_str(), "raw");
/// assert_eq!(FormatTag::from_filename("archive.tar.gz").as_str(), "gz");
/// assert_eq!(FormatTag::from_filename("README").as_str(), "README");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormatTag(String);

impl FormatTag {
    /// Derive the tag from a file name as given by the caller.
    pub fn from_filename(filename: &str) -> Self {
        let tag = match filename.rfind('.') {
            Some(dot) => &filename[dot + 1..],
            None => filename,
        };
        Self(tag.to_owned())
    }

    /// Create a tag from an already extracted extension.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormatTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FormatTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FormatTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_text_after_last_dot() {
        assert_eq!(FormatTag::from_filename("scan.raw").as_str(), "raw");
        assert_eq!(FormatTag::from_filename("a.b.c.vol").as_str(), "vol");
        assert_eq!(FormatTag::from_filename("./rel/scan.xyz123").as_str(), "xyz123");
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(FormatTag::from_filename("SCAN.VOL").as_str(), "VOL");
        assert_ne!(
            FormatTag::from_filename("a.VOL"),
            FormatTag::from_filename("a.vol")
        );
    }

    #[test]
    fn no_dot_yields_whole_name() {
        assert_eq!(FormatTag::from_filename("volume").as_str(), "volume");
        assert_eq!(FormatTag::from_filename("").as_str(), "");
    }

    #[test]
    fn trailing_dot_yields_empty_tag() {
        assert_eq!(FormatTag::from_filename("scan.").as_str(), "");
    }

    #[test]
    fn dot_in_directory_is_still_last_dot() {
        assert_eq!(
            FormatTag::from_filename("volumes.d/scan").as_str(),
            "d/scan"
        );
    }
}
