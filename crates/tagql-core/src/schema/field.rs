use crate::tag::{Tag, TagKind};

/// A record field together with its attached tags.
///
/// Tags are kept in attachment order; the exclusivity validator scans pairs
/// in that order so a reported conflict is deterministic for a given input.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    tags: Vec<Tag>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    /// Gets the declared field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the attached tags, in attachment order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Gets the attached tag of the given kind, if any.
    pub fn tag(&self, kind: TagKind) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.kind() == kind)
    }

    /// Whether a tag of the given kind is attached.
    pub fn has(&self, kind: TagKind) -> bool {
        self.tag(kind).is_some()
    }

    /// Whether the field is excluded from compilation entirely.
    pub fn is_ignored(&self) -> bool {
        self.has(TagKind::Ignore)
    }
}
