//! Style caching for performance.

use std::collections::HashMap;

use crate::selector::PseudoElement;
use crate::style::ComputedStyle;
use crate::tree::{ElementTree, NodeId};

/// Cache key for computed styles.
///
/// The key combines the node with its tree's identity and generation. Any
/// structural or state change bumps the generation, so stale entries are
/// never hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleCacheKey {
    tree_id: u64,
    generation: u64,
    node: NodeId,
    pseudo_element: Option<PseudoElement>,
}

impl StyleCacheKey {
    /// Create a new cache key.
    pub fn new(tree: &ElementTree, node: NodeId, pseudo_element: Option<PseudoElement>) -> Self {
        Self {
            tree_id: tree.tree_id(),
            generation: tree.generation(),
            node,
            pseudo_element,
        }
    }
}

/// LRU-like cache for computed styles.
pub struct StyleCache {
    /// Cached computed styles.
    cache: HashMap<StyleCacheKey, ComputedStyle>,
    /// Maximum cache entries.
    max_size: usize,
}

impl StyleCache {
    /// Create a new style cache.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a cache with specific capacity.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_size),
            max_size: max_size.max(1),
        }
    }

    /// Get a cached style.
    pub fn get(&self, key: &StyleCacheKey) -> Option<&ComputedStyle> {
        self.cache.get(key)
    }

    /// Insert a computed style into the cache.
    pub fn insert(&mut self, key: StyleCacheKey, style: ComputedStyle) {
        // Simple eviction: clear half when full
        if self.cache.len() >= self.max_size {
            self.evict_half();
        }
        self.cache.insert(key, style);
    }

    /// Drop every entry computed for an older generation of `tree`.
    pub fn retain_generation(&mut self, tree: &ElementTree) {
        let (tree_id, generation) = (tree.tree_id(), tree.generation());
        self.cache
            .retain(|k, _| k.tree_id != tree_id || k.generation == generation);
    }

    /// Invalidate all cached styles.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Evict half the entries (simple LRU approximation).
    fn evict_half(&mut self) {
        let target = (self.cache.len() / 2).max(1);
        let keys: Vec<_> = self.cache.keys().take(target).copied().collect();
        for key in keys {
            self.cache.remove(&key);
        }
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Element, ElementState};

    fn tree() -> (ElementTree, NodeId) {
        let mut tree = ElementTree::new();
        let root = tree.insert_root(Element::new("div"));
        (tree, root)
    }

    #[test]
    fn cache_basic_operations() {
        let (tree, root) = tree();
        let mut cache = StyleCache::new();
        let key = StyleCacheKey::new(&tree, root, None);

        assert!(cache.get(&key).is_none());
        cache.insert(key, ComputedStyle::default());
        assert!(cache.get(&key).is_some());
        assert_eq!(cache.len(), 1);

        cache.invalidate_all();
        assert!(cache.is_empty());
    }

    #[test]
    fn pseudo_elements_are_keyed_separately() {
        let (tree, root) = tree();
        let mut cache = StyleCache::new();
        cache.insert(StyleCacheKey::new(&tree, root, None), ComputedStyle::default());

        let before = StyleCacheKey::new(&tree, root, Some(PseudoElement::Before));
        assert!(cache.get(&before).is_none());
    }

    #[test]
    fn state_change_misses_cache() {
        let (mut tree, root) = tree();
        let mut cache = StyleCache::new();
        cache.insert(StyleCacheKey::new(&tree, root, None), ComputedStyle::default());

        let hovered = ElementState {
            hovered: true,
            ..Default::default()
        };
        tree.set_state(root, hovered).unwrap();
        assert!(cache.get(&StyleCacheKey::new(&tree, root, None)).is_none());

        cache.retain_generation(&tree);
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_eviction() {
        let (tree, root) = tree();
        let mut cache = StyleCache::with_capacity(4);
        let other = {
            let mut t = ElementTree::new();
            t.insert_root(Element::new("span"));
            t
        };

        cache.insert(StyleCacheKey::new(&tree, root, None), ComputedStyle::default());
        cache.insert(
            StyleCacheKey::new(&tree, root, Some(PseudoElement::Before)),
            ComputedStyle::default(),
        );
        cache.insert(
            StyleCacheKey::new(&tree, root, Some(PseudoElement::Placeholder)),
            ComputedStyle::default(),
        );
        cache.insert(StyleCacheKey::new(&other, root, None), ComputedStyle::default());
        assert_eq!(cache.len(), 4);

        cache.insert(
            StyleCacheKey::new(&other, root, Some(PseudoElement::Before)),
            ComputedStyle::default(),
        );
        assert!(cache.len() <= 4);
    }
}
