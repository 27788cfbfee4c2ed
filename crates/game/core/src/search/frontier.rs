//! 0-1 BFS over the state graph.
//!
//! States live in an arena owned by one search. Parent links are arena
//! indices, so reconstruction never has to hash a state again.
//!
//! The deque holds `(node, moves)` entries: free transitions go to the front,
//! moves to the back, which keeps the deque sorted by move count. A node that
//! is rediscovered with a smaller move count before it was expanded is
//! relinked and queued again; the older entry no longer matches the node's
//! move count and is skipped when popped.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::action::ActionBatch;
use super::expand::{EdgeCost, StateSpace, Transition};
use super::state::SearchState;
use crate::error::SearchError;

pub(crate) type NodeId = usize;

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States popped and settled.
    pub expanded: usize,
    /// Distinct states ever inserted into the arena.
    pub discovered: usize,
    /// Expanded states where the hero lost and could not sneak.
    pub dead_ends: usize,
    /// Times a queued state was reached again with fewer moves.
    pub relinked: usize,
}

#[derive(Debug)]
pub(crate) struct ParentLink {
    pub node: NodeId,
    pub actions: ActionBatch,
}

#[derive(Debug)]
pub(crate) struct Node {
    pub state: SearchState,
    pub moves: u32,
    pub parent: Option<ParentLink>,
    expanded: bool,
}

/// Every state one search has seen, addressable by [`NodeId`].
#[derive(Debug, Default)]
pub(crate) struct SearchArena {
    nodes: Vec<Node>,
    index: FxHashMap<SearchState, NodeId>,
}

impl SearchArena {
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    fn insert(&mut self, state: SearchState, moves: u32, parent: Option<ParentLink>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            state,
            moves,
            parent,
            expanded: false,
        });
        self.index.insert(state, id);
        id
    }
}

/// Result of draining the frontier.
#[derive(Debug)]
pub(crate) struct FrontierRun {
    pub arena: SearchArena,
    /// The first accepting node popped, if any.
    pub accepted: Option<NodeId>,
    pub stats: SearchStats,
}

/// Runs the search to the first accepting state or until the deque drains.
pub(crate) fn run(space: &StateSpace<'_>, limit: usize) -> Result<FrontierRun, SearchError> {
    let mut arena = SearchArena::default();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    let mut stats = SearchStats::default();

    for seed in space.seeds() {
        if arena.index.contains_key(&seed) {
            continue;
        }
        let id = arena.insert(seed, 0, None);
        queue.push_back((id, 0));
        stats.discovered += 1;
    }
    debug!(seeds = stats.discovered, limit, "search started");

    while let Some((id, moves)) = queue.pop_front() {
        let node = &arena.nodes[id];
        if node.expanded || node.moves != moves {
            continue;
        }

        if stats.expanded >= limit {
            debug!(expanded = stats.expanded, limit, "exploration limit reached");
            return Err(SearchError::ExplorationLimit {
                limit,
                expanded: stats.expanded,
            });
        }

        let state = node.state;
        arena.nodes[id].expanded = true;
        stats.expanded += 1;

        let Some(settled) = space.settle(state) else {
            trace!(room = %state.room, moves, "dead end");
            stats.dead_ends += 1;
            continue;
        };

        if space.is_accepting(&settled) {
            debug!(
                moves,
                expanded = stats.expanded,
                discovered = stats.discovered,
                "route found"
            );
            return Ok(FrontierRun {
                arena,
                accepted: Some(id),
                stats,
            });
        }

        for Transition {
            state: next,
            cost,
            actions,
        } in space.successors(&settled)
        {
            let next_moves = moves + cost.weight();
            let link = ParentLink { node: id, actions };

            let next_id = match arena.index.get(&next).copied() {
                None => {
                    stats.discovered += 1;
                    arena.insert(next, next_moves, Some(link))
                }
                Some(known) => {
                    let node = &mut arena.nodes[known];
                    if node.expanded || node.moves <= next_moves {
                        continue;
                    }
                    trace!(room = %next.room, from = node.moves, to = next_moves, "relinked");
                    node.moves = next_moves;
                    node.parent = Some(link);
                    stats.relinked += 1;
                    known
                }
            };

            match cost {
                EdgeCost::Free => queue.push_front((next_id, next_moves)),
                EdgeCost::Move => queue.push_back((next_id, next_moves)),
            }
        }
    }

    debug!(
        expanded = stats.expanded,
        discovered = stats.discovered,
        "search exhausted"
    );
    Ok(FrontierRun {
        arena,
        accepted: None,
        stats,
    })
}
