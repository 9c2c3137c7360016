// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

/// Flat `key: value` metadata at the top of a content file.
pub type Frontmatter = BTreeMap<String, String>;

const FENCE_OPEN: &str = "---\n";
const FENCE_CLOSE: &str = "\n---\n";

/// Splits the text into the frontmatter and the body.
///
/// The frontmatter is recognised only if the text starts with `---` and contains a closing `---`
/// line followed by a newline. Lines without a colon are ignored. If no line yields an entry
/// the frontmatter is `None`, but the fences are still stripped from the body.
#[must_use]
pub fn split(text: &str) -> (Option<Frontmatter>, &str) {
    let Some(rest) = text.strip_prefix(FENCE_OPEN) else {
        return (None, text);
    };
    let Some(close) = rest.find(FENCE_CLOSE) else {
        return (None, text);
    };

    let mut frontmatter = Frontmatter::new();
    for line in rest[..close].split('\n') {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                frontmatter.insert(key.to_string(), value.trim().to_string());
            }
        }
    }

    let body = &rest[close + FENCE_CLOSE.len()..];
    ((!frontmatter.is_empty()).then_some(frontmatter), body)
}

#[cfg(test)]
mod tests {
    use maplit::btreemap;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_frontmatter() {
        let text = "---\ntitle: Arena: Overview\nstatus: verified\nno colon\n---\n# Body\n";
        let (frontmatter, body) = split(text);
        assert_eq!(
            frontmatter,
            Some(btreemap! {
                "title".to_string() => "Arena: Overview".to_string(),
                "status".to_string() => "verified".to_string(),
            })
        );
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_without_frontmatter() {
        assert_eq!(split("# Body\n---\nx: y\n"), (None, "# Body\n---\nx: y\n"));
        assert_eq!(split("---\ntitle: unclosed\n"), (None, "---\ntitle: unclosed\n"));
        assert_eq!(split("---\nnothing here\n---\nbody"), (None, "body"));
        assert_eq!(split("---\n\n---\nbody"), (None, "body"));
    }
}
