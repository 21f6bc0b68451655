//! Literal game trees for exercising the search engine.
//!
//! A [`TreeDef`] is built by hand (or generated) as nested branches and
//! leaves, then flattened into an arena-backed [`TableState`]. Levels
//! alternate through the agent cycle implicitly: whichever agent the
//! engine says is to move owns the current node's children. Actions are
//! child ordinals.
//!
//! This is a test capability, not a product game: it exists so synthetic
//! positions — tie-breaks, terminal short-circuits, prunable shapes —
//! can be constructed exactly.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::core::{AgentIndex, GameState};

/// Declarative node of a literal game tree.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeDef {
    /// A leaf with a score. Terminal leaves end the game; open leaves
    /// rely on the depth limit being reached at them.
    Leaf { value: f64, terminal: bool },
    /// An interior node. Its score is only observable if the depth limit
    /// lands on it during a maximizer turn.
    Branch { value: f64, children: Vec<TreeDef> },
}

impl TreeDef {
    /// Non-terminal leaf: no actions, scored when depth runs out.
    #[must_use]
    pub fn leaf(value: f64) -> Self {
        TreeDef::Leaf {
            value,
            terminal: false,
        }
    }

    /// Terminal leaf: the game ends here. Non-negative values read as
    /// wins, negative as losses.
    #[must_use]
    pub fn terminal(value: f64) -> Self {
        TreeDef::Leaf {
            value,
            terminal: true,
        }
    }

    /// Interior node scoring 0.0 at a depth cut.
    #[must_use]
    pub fn branch(children: Vec<TreeDef>) -> Self {
        TreeDef::Branch {
            value: 0.0,
            children,
        }
    }

    /// Interior node with an explicit depth-cut score.
    #[must_use]
    pub fn branch_valued(value: f64, children: Vec<TreeDef>) -> Self {
        TreeDef::Branch { value, children }
    }

    /// Flatten into a playable state for a game with `agent_count` agents.
    #[must_use]
    pub fn build(self, agent_count: usize) -> TableState {
        assert!(agent_count >= 1, "must have at least 1 agent");

        let mut nodes = Vec::new();
        flatten(&self, &mut nodes);
        TableState {
            nodes: Arc::new(nodes),
            agent_count,
            node: 0,
        }
    }
}

#[derive(Debug)]
struct TableNode {
    value: f64,
    terminal: bool,
    children: SmallVec<[u32; 4]>,
}

fn flatten(def: &TreeDef, nodes: &mut Vec<TableNode>) -> u32 {
    let id = nodes.len() as u32;
    match def {
        TreeDef::Leaf { value, terminal } => {
            nodes.push(TableNode {
                value: *value,
                terminal: *terminal,
                children: SmallVec::new(),
            });
        }
        TreeDef::Branch { value, children } => {
            nodes.push(TableNode {
                value: *value,
                terminal: false,
                children: SmallVec::new(),
            });
            let child_ids: SmallVec<[u32; 4]> =
                children.iter().map(|child| flatten(child, nodes)).collect();
            nodes[id as usize].children = child_ids;
        }
    }
    id
}

/// A position inside a literal game tree.
///
/// Cloning shares the arena via `Arc`; snapshots never alias mutable
/// state.
#[derive(Clone, Debug)]
pub struct TableState {
    nodes: Arc<Vec<TableNode>>,
    agent_count: usize,
    node: u32,
}

impl TableState {
    fn current(&self) -> &TableNode {
        &self.nodes[self.node as usize]
    }
}

impl GameState for TableState {
    type Action = usize;

    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<usize> {
        (0..self.current().children.len()).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &usize) -> Self {
        let child = self.current().children[*action];
        Self {
            nodes: Arc::clone(&self.nodes),
            agent_count: self.agent_count,
            node: child,
        }
    }

    fn is_win(&self) -> bool {
        let node = self.current();
        node.terminal && node.value >= 0.0
    }

    fn is_lose(&self) -> bool {
        let node = self.current();
        node.terminal && node.value < 0.0
    }

    fn score(&self) -> f64 {
        self.current().value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_terminality() {
        let win = TreeDef::terminal(1.0).build(2);
        assert!(win.is_win() && !win.is_lose());

        let lose = TreeDef::terminal(-1.0).build(2);
        assert!(lose.is_lose() && !lose.is_win());

        let open = TreeDef::leaf(1.0).build(2);
        assert!(!open.is_terminal());
    }

    #[test]
    fn test_actions_are_child_ordinals() {
        let state = TreeDef::branch(vec![
            TreeDef::terminal(1.0),
            TreeDef::terminal(2.0),
            TreeDef::terminal(3.0),
        ])
        .build(2);

        assert_eq!(state.legal_actions(AgentIndex::MAXIMIZER), vec![0, 1, 2]);
        let second = state.successor(AgentIndex::MAXIMIZER, &1);
        assert_eq!(second.score(), 2.0);
    }

    #[test]
    fn test_successor_shares_arena() {
        let state = TreeDef::branch(vec![TreeDef::terminal(1.0)]).build(2);
        let child = state.successor(AgentIndex::MAXIMIZER, &0);
        assert!(Arc::ptr_eq(&state.nodes, &child.nodes));
    }

    #[test]
    fn test_nested_flattening() {
        let state = TreeDef::branch(vec![
            TreeDef::branch(vec![TreeDef::terminal(5.0), TreeDef::terminal(6.0)]),
            TreeDef::terminal(7.0),
        ])
        .build(2);

        let inner = state.successor(AgentIndex::MAXIMIZER, &0);
        assert_eq!(inner.legal_actions(AgentIndex::new(1)).len(), 2);
        let leaf = inner.successor(AgentIndex::new(1), &1);
        assert_eq!(leaf.score(), 6.0);
    }
}
