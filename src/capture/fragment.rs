//! Fragments: the units of text injected by external writers.

/// A unit of content pushed into the capture inbox by an external writer.
///
/// Mirrors the node shapes a transport might produce: bare text, an
/// element wrapping nested content, or an unrecognized payload. Only the
/// textual content survives extraction; structure is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A bare text fragment.
    Text(String),
    /// A structured fragment; extraction concatenates descendant text.
    Element(Vec<Fragment>),
    /// An unrecognized payload. Extracts as empty, never errors.
    Binary(Vec<u8>),
}

impl Fragment {
    /// Extract the textual payload of the fragment.
    ///
    /// Element fragments flatten to their concatenated descendant text in
    /// document order. Unrecognized payloads extract as the empty string;
    /// this path never panics, since extraction runs inside the pump with
    /// no caller to report to.
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(children) => {
                let mut out = String::new();
                collect_text(children, &mut out);
                out
            }
            Self::Binary(_) => String::new(),
        }
    }
}

fn collect_text(children: &[Fragment], out: &mut String) {
    for child in children {
        match child {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Element(nested) => collect_text(nested, out),
            Fragment::Binary(_) => {}
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fragment() {
        assert_eq!(Fragment::from("chunk").text(), "chunk");
    }

    #[test]
    fn test_element_flattens_descendants() {
        let fragment = Fragment::Element(vec![
            Fragment::Text("Hello ".to_string()),
            Fragment::Element(vec![Fragment::Text("nested".to_string())]),
            Fragment::Text("!".to_string()),
        ]);
        assert_eq!(fragment.text(), "Hello nested!");
    }

    #[test]
    fn test_binary_extracts_empty() {
        let fragment = Fragment::Binary(vec![0xff, 0xfe]);
        assert_eq!(fragment.text(), "");

        let mixed = Fragment::Element(vec![
            Fragment::Binary(vec![0x00]),
            Fragment::Text("kept".to_string()),
        ]);
        assert_eq!(mixed.text(), "kept");
    }
}
