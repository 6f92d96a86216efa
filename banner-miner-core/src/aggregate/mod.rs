//! Hierarchical counting of dimension tuples.
//!
//! [`CountTable`] is a tree with one level per tuple position. Each level keeps
//! keys in first-seen order, so walking it back out with [`CountTable::rows`]
//! reproduces the order in which distinct key paths appeared in the input.

mod emit;
#[cfg(test)]
mod tests;

pub use emit::write_table;

use indexmap::IndexMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CountTable {
    root: CountNode,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CountNode {
    /// Records whose key path ends exactly here.
    count: u64,
    /// Number of children that existed when `count` first became non-zero.
    /// The node's own row is emitted after those children and before the rest.
    own_slot: usize,
    children: IndexMap<String, CountNode>,
}

/// One flattened table row: the key path from root to a counted node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub dimensions: Vec<String>,
    pub count: u64,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks the key path, creating missing levels with a zero count, and
    /// adds one at the end of it.
    pub fn increment(&mut self, key: &[String]) {
        let mut node = &mut self.root;

        for part in key {
            let index = match node.children.get_index_of(part.as_str()) {
                Some(index) => index,
                None => {
                    node.children
                        .insert_full(part.clone(), CountNode::default())
                        .0
                }
            };
            node = &mut node.children[index];
        }

        if node.count == 0 {
            node.own_slot = node.children.len();
        }
        node.count += 1;
    }

    /// Owned form of [`CountTable::increment`], for folding.
    pub fn with(mut self, key: &[String]) -> Self {
        self.increment(key);
        self
    }

    /// Count recorded for exactly this key path.
    pub fn count(&self, key: &[&str]) -> u64 {
        let mut node = &self.root;
        for part in key {
            match node.children.get(*part) {
                Some(child) => node = child,
                None => return 0,
            }
        }
        node.count
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        fn sum(node: &CountNode) -> u64 {
            node.count + node.children.values().map(sum).sum::<u64>()
        }
        sum(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Depth-first, insertion-ordered rows; one per key path with a count.
    pub fn rows(&self) -> Vec<OutputRow> {
        let mut rows = Vec::new();
        let mut path = Vec::new();
        collect_rows(&self.root, &mut path, &mut rows);
        rows
    }
}

// A node's own row sits among its children at the position it was first
// counted, so a short key path seen after a longer one with the same prefix
// is emitted after it.
fn collect_rows<'a>(node: &'a CountNode, path: &mut Vec<&'a str>, rows: &mut Vec<OutputRow>) {
    let own_slot = node.own_slot.min(node.children.len());

    for (index, (key, child)) in node.children.iter().enumerate() {
        if index == own_slot {
            push_own_row(node, path, rows);
        }
        path.push(key);
        collect_rows(child, path, rows);
        path.pop();
    }

    if own_slot == node.children.len() {
        push_own_row(node, path, rows);
    }
}

fn push_own_row(node: &CountNode, path: &[&str], rows: &mut Vec<OutputRow>) {
    if node.count > 0 {
        rows.push(OutputRow {
            dimensions: path.iter().map(|s| s.to_string()).collect(),
            count: node.count,
        });
    }
}
