//! Chain of palette nodes and the cursor that walks it.
//!
//! The chain is a fixed `Vec` of nodes; neighbors are `i - 1` / `i + 1`. The
//! cursor moves one node per completed gesture and bounces off both ends.

use super::state::{AnimationState, Direction, StateStep};
use crate::config::SceneConfig;
use crate::draw::{self, Surface};

#[derive(Clone, Debug, PartialEq)]
pub struct ChainNode {
    index: usize,
    state: AnimationState,
}

impl ChainNode {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: AnimationState::new(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn draw(&self, surface: &mut impl Surface, config: &SceneConfig) {
        draw::draw_node(surface, self.index, self.state.scale(), config);
    }

    pub fn update(&mut self, step: f32) -> StateStep {
        self.state.update(step)
    }

    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    pub fn cancel(&mut self) {
        self.state.cancel();
    }
}

/// Result of looking up a neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbor {
    Moved(usize),
    /// No node in that direction; the cursor stays where it is.
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    nodes: Vec<ChainNode>,
}

impl Chain {
    /// Chain of `len` nodes indexed `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: (0..len).map(ChainNode::new).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, i: usize) -> Option<&ChainNode> {
        self.nodes.get(i)
    }

    pub fn node_mut(&mut self, i: usize) -> Option<&mut ChainNode> {
        self.nodes.get_mut(i)
    }

    pub fn nodes(&self) -> &[ChainNode] {
        &self.nodes
    }

    pub fn neighbor(&self, i: usize, dir: Direction) -> Neighbor {
        let next = match dir {
            Direction::Forward => i.checked_add(1),
            Direction::Backward => i.checked_sub(1),
        };
        match next {
            Some(n) if n < self.nodes.len() => Neighbor::Moved(n),
            _ => Neighbor::End,
        }
    }
}

/// Outcome of a single [`Sequence::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceStep {
    /// The current node is at rest; nothing moved.
    Idle,
    /// The current node moved one step and is still mid-gesture.
    Animating,
    /// The current node finished and the cursor moved on.
    Advanced { from: usize, to: usize },
    /// The current node finished at a chain end; the cursor stayed and the
    /// traversal direction flipped to `dir`.
    Reversed { at: usize, dir: Direction },
}

impl SequenceStep {
    /// Whether this step ended the running gesture.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            SequenceStep::Advanced { .. } | SequenceStep::Reversed { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    chain: Chain,
    current: usize,
    dir: Direction,
}

impl Sequence {
    /// Cursor starts at node 0 heading forward. `len` must be non-zero;
    /// `SceneConfig::validate` rejects an empty palette.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "sequence needs at least one node");
        Self {
            chain: Chain::new(len),
            current: 0,
            dir: Direction::Forward,
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn current_node(&self) -> Option<&ChainNode> {
        self.chain.node(self.current)
    }

    pub fn draw(&self, surface: &mut impl Surface, config: &SceneConfig) {
        if let Some(node) = self.current_node() {
            node.draw(surface, config);
        }
    }

    pub fn update(&mut self, step: f32) -> SequenceStep {
        let Some(node) = self.chain.node_mut(self.current) else {
            return SequenceStep::Idle;
        };
        match node.update(step) {
            StateStep::Settled => SequenceStep::Idle,
            StateStep::Animating => SequenceStep::Animating,
            StateStep::Boundary => match self.chain.neighbor(self.current, self.dir) {
                Neighbor::Moved(to) => {
                    let from = self.current;
                    self.current = to;
                    log::debug!("[chain] node {} -> {}", from, to);
                    SequenceStep::Advanced { from, to }
                }
                Neighbor::End => {
                    self.dir = self.dir.flipped();
                    log::info!("[chain] reversed at node {} now {:?}", self.current, self.dir);
                    SequenceStep::Reversed {
                        at: self.current,
                        dir: self.dir,
                    }
                }
            },
        }
    }

    pub fn start_updating(&mut self) -> bool {
        self.chain
            .node_mut(self.current)
            .is_some_and(ChainNode::start_updating)
    }

    /// Settle the current node where it is, without moving the cursor.
    pub fn cancel_updating(&mut self) {
        if let Some(node) = self.chain.node_mut(self.current) {
            node.cancel();
        }
    }
}
