use crate::Result;
use crate::class::Class;
use crate::identifier::Identifier;
use crate::namespace_matcher::NamespaceMatcher;

use super::IdentifierAssociation;

/// Identifies modules by the capture groups of a namespace pattern.
///
/// Classes whose namespace does not match, or whose match captures an empty
/// group, are ignored.
#[derive(Debug, Clone)]
pub struct NamespaceAssociation {
    matcher: NamespaceMatcher,
}

impl NamespaceAssociation {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        Ok(Self {
            matcher: NamespaceMatcher::new(pattern)?,
        })
    }

    pub fn matcher(&self) -> &NamespaceMatcher {
        &self.matcher
    }
}

impl IdentifierAssociation for NamespaceAssociation {
    fn associate(&self, class: &Class) -> Identifier {
        self.matcher
            .match_namespace(class.namespace())
            .and_then(|matched| Identifier::from_parts(matched.into_groups()).ok())
            .unwrap_or_else(Identifier::ignore)
    }
}
