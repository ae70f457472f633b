use crate::{ENCODED_SLASH, ENCODED_TILDE, FRAGMENT_PREFIX, PATH_SEPARATOR, TILDE};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped when a pointer is placed in a URI fragment.
const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'%')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'[')
    .add(b']');

/// A JSON pointer into an OpenAPI document, built one segment at a time.
///
/// Segments are stored already escaped (`~` as `~0`, `/` as `~1`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath(pub Vec<String>);

impl JsonPath {
    pub fn new() -> Self {
        JsonPath(Vec::new())
    }

    /// Pointer to a named entry of a `components` collection.
    pub fn component(collection: &str, name: &str) -> Self {
        let mut path = JsonPath::new();
        path.add(crate::COMPONENTS_FIELD).add(collection).add(name);
        path
    }

    pub fn add(&mut self, segment: impl AsRef<str>) -> &mut Self {
        let segment = segment.as_ref();
        if segment.contains(TILDE) || segment.contains(PATH_SEPARATOR) {
            let segment = segment
                .replace(TILDE, ENCODED_TILDE)
                .replace(PATH_SEPARATOR, ENCODED_SLASH);
            self.0.push(segment);
        } else {
            self.0.push(segment.to_owned());
        }

        self
    }

    /// Drops the last segment, used when the traverser climbs back out of a node.
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn format_path(&self) -> String {
        self.0.join(PATH_SEPARATOR)
    }

    /// Formats the pointer as a same-document `$ref` (`#/a/b`), percent-encoding
    /// characters that are not allowed in a URI fragment.
    pub fn to_fragment(&self) -> String {
        let mut fragment = String::from(FRAGMENT_PREFIX);
        for segment in &self.0 {
            fragment.push_str(PATH_SEPARATOR);
            fragment.extend(utf8_percent_encode(segment, FRAGMENT));
        }
        fragment
    }
}
