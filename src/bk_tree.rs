use std::collections::BTreeMap;

use bk_tree::Metric;
use log::debug;

use crate::edit_distance::EditDistance;

/// A word found by a query, with its distance from the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub word: String,
    pub distance: u32,
}

impl Match {
    pub fn new(word: impl Into<String>, distance: u32) -> Self {
        Self {
            word: word.into(),
            distance,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    word: String,
    // distance from `word` -> index of the child in the arena
    children: BTreeMap<u32, usize>,
}

impl Node {
    fn new(word: String) -> Self {
        Self {
            word,
            children: BTreeMap::new(),
        }
    }
}

/// Metric tree over strings. Nodes live in an arena; the root is index 0.
#[derive(Debug, Clone)]
pub struct BkTree<M = EditDistance> {
    nodes: Vec<Node>,
    metric: M,
}

impl BkTree<EditDistance> {
    pub fn new() -> Self {
        Self::with_metric(EditDistance)
    }
}

impl Default for BkTree<EditDistance> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metric<str>> BkTree<M> {
    pub fn with_metric(metric: M) -> Self {
        Self {
            nodes: Vec::new(),
            metric,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stored words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.word.as_str())
    }

    /// Adds `word` below the first node that has no child at its distance.
    ///
    /// Inserting a word that is already present is accepted; it ends up as a
    /// distance-0 descendant of the existing node.
    pub fn insert(&mut self, word: &str) {
        let new_index = self.nodes.len();
        if self.nodes.is_empty() {
            self.nodes.push(Node::new(word.to_string()));
            return;
        }

        let mut current = 0;
        loop {
            let distance = self.metric.distance(&self.nodes[current].word, word);
            let next = self.nodes[current].children.get(&distance).copied();
            match next {
                Some(child) => current = child,
                None => {
                    self.nodes[current].children.insert(distance, new_index);
                    break;
                }
            }
        }
        self.nodes.push(Node::new(word.to_string()));
    }

    /// Every stored word within `max_distance` of `target`, closest first.
    ///
    /// Words at equal distance keep the order the depth-first walk met them.
    /// A negative radius matches nothing.
    pub fn query(&self, target: &str, max_distance: i32) -> Vec<Match> {
        let mut result: Vec<Match> = Vec::new();
        if self.nodes.is_empty() || max_distance < 0 {
            return result;
        }
        let radius = max_distance as u32;

        let mut stack: Vec<usize> = vec![0];
        let mut visited = 0usize;
        while let Some(index) = stack.pop() {
            visited += 1;
            let node = &self.nodes[index];
            let distance = self.metric.distance(&node.word, target);
            if distance <= radius {
                result.push(Match::new(node.word.clone(), distance));
            }

            // children outside this window are farther than `radius` from target
            let low = distance.saturating_sub(radius);
            let high = distance.saturating_add(radius);
            let before = stack.len();
            stack.extend(node.children.range(low..=high).map(|(_, &child)| child));
            // pop order must follow ascending keys
            stack[before..].reverse();
        }

        debug!(
            "query {:?} radius {}: visited {} of {} nodes, {} matches",
            target,
            radius,
            visited,
            self.nodes.len(),
            result.len()
        );
        result.sort_by_key(|found| found.distance);
        result
    }
}

impl<'a> Extend<&'a str> for BkTree<EditDistance> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for BkTree<EditDistance> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut tree = BkTree::new();
        tree.extend(words);
        tree
    }
}

/// Builds a tree by inserting `words` in order.
pub fn build<I, S>(words: I) -> BkTree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tree = BkTree::new();
    for word in words {
        tree.insert(word.as_ref());
    }
    debug!("built tree with {} words", tree.len());
    tree
}

pub fn lookup<M: Metric<str>>(tree: &BkTree<M>, query: &str, radius: i32) -> Vec<Match> {
    tree.query(query, radius)
}

/// Closest match of a query result, or `None` when nothing was in range.
pub fn best_match(results: &[Match]) -> Option<&Match> {
    results.first()
}
