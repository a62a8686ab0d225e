//! Per-file symbol table of named type declarations.

use crate::node::AnnotationNode;
use rustc_hash::FxHashMap;

/// Maps a type name to its declaration node.
///
/// Values are usually [`AnnotationNode::Declaration`], but any node may be
/// stored (interfaces and opaque types are kept as [`AnnotationNode::Opaque`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeDeclarationMap {
    entries: FxHashMap<String, AnnotationNode>,
}

impl TypeDeclarationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        decl: AnnotationNode,
    ) -> Option<AnnotationNode> {
        self.entries.insert(name.into(), decl)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&AnnotationNode> {
        self.entries.get(name)
    }

    /// Look up `name` and return the stored key alongside the declaration.
    ///
    /// The key borrows from the map, so it outlives the caller's lookup string.
    #[inline]
    pub fn get_entry(&self, name: &str) -> Option<(&str, &AnnotationNode)> {
        self.entries
            .get_key_value(name)
            .map(|(key, decl)| (key.as_str(), decl))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationNode)> {
        self.entries
            .iter()
            .map(|(name, decl)| (name.as_str(), decl))
    }

    /// All declared names, sorted.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<(S, AnnotationNode)> for TypeDeclarationMap {
    fn from_iter<I: IntoIterator<Item = (S, AnnotationNode)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, decl)| (name.into(), decl))
                .collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, AnnotationNode)> for TypeDeclarationMap {
    fn extend<I: IntoIterator<Item = (S, AnnotationNode)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(name, decl)| (name.into(), decl)));
    }
}
