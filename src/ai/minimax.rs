//! Full-width fixed-depth minimax search from the computer's point of view.
//!
//! Every ply is represented by a [SearchNode] that owns its own copy of the board, so no two nodes ever share a grid.
//! Only won, lost and drawn positions are scored, unfinished positions at the depth limit are neutral.
use std::cmp::{max, min};
use std::fmt::{Debug, Formatter};

use log::debug;

use crate::ai::Bot;
use crate::board::{Board, NoLegalMove, Outcome, PlayError, Side};
use crate::outcome::detect;

/// The default search depth. Root moves are at depth `0`, so the tree spans `MAX_DEPTH + 1` plies.
pub const MAX_DEPTH: u32 = 5;

/// The value of a computer win at depth `0`. Deeper wins are worth slightly less,
/// deeper losses slightly more.
pub const WIN_VALUE: i32 = 100_000;

/// Start value for the min/max reductions, outside of the range `±(WIN_VALUE + depth)` any node can take.
const SENTINEL: i32 = 1_000_000;

/// One ply of the game tree: the position after `side` dropped a piece in `column`.
///
/// The node is fully evaluated during construction and never changes afterwards.
/// Positive values are good for the computer, negative values are good for the human.
pub struct SearchNode {
    board: Board,
    column: usize,
    side: Side,
    depth: u32,
    value: i32,
    children: Option<Vec<SearchNode>>,
}

impl SearchNode {
    /// Drop a piece for `side` into `column` on `board` and evaluate the resulting position,
    /// recursively expanding children until the game ends or `depth` reaches `max_depth`.
    pub fn new(mut board: Board, column: usize, side: Side, depth: u32, max_depth: u32) -> Result<Self, PlayError> {
        board.drop_piece(column, side)?;

        let (value, children) = match detect(&board, column) {
            // prefer faster wins and slower losses
            Some(Outcome::WonBy(Side::Computer)) => (WIN_VALUE - depth as i32, None),
            Some(Outcome::WonBy(Side::Human)) => (-WIN_VALUE + depth as i32, None),
            Some(Outcome::Draw) => (-(depth as i32), None),
            None if depth >= max_depth => (0, None),
            None => {
                let children = board
                    .available_columns()
                    .map(|child_column| {
                        SearchNode::new(board.clone(), child_column, side.other(), depth + 1, max_depth)
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                (reduce(side, &children), Some(children))
            }
        };

        Ok(SearchNode {
            board,
            column,
            side,
            depth,
            value,
            children,
        })
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// The column this node played.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The side that played this node's move.
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The board after this node's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The children of this node, `None` for finished games and nodes at the depth limit.
    pub fn children(&self) -> Option<&[SearchNode]> {
        self.children.as_deref()
    }

    /// The number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> u64 {
        1 + self.children.iter().flatten().map(SearchNode::node_count).sum::<u64>()
    }

    /// The depth of the deepest node in this subtree.
    pub fn deepest_depth(&self) -> u32 {
        self.children
            .iter()
            .flatten()
            .map(SearchNode::deepest_depth)
            .max()
            .unwrap_or(self.depth)
    }

    /// The first child that achieves the value of this node.
    pub fn best_child(&self) -> Option<&SearchNode> {
        self.children()?.iter().find(|child| child.value == self.value)
    }

    /// The columns played along the line of best children, starting with this node's own column.
    pub fn principal_variation(&self) -> Vec<usize> {
        let mut line = vec![self.column];
        let mut curr = self;
        while let Some(child) = curr.best_child() {
            line.push(child.column);
            curr = child;
        }
        line
    }
}

/// Reduce the children of a node that played `side` to a single value.
/// The children are the opponent's replies, so the computer picks the maximum after a human move
/// and the human picks the minimum after a computer move.
fn reduce(side: Side, children: &[SearchNode]) -> i32 {
    if children.is_empty() {
        return 0;
    }

    match side.other() {
        Side::Computer => children.iter().fold(-SENTINEL, |best, child| max(best, child.value)),
        Side::Human => children.iter().fold(SENTINEL, |best, child| min(best, child.value)),
    }
}

impl Debug for SearchNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchNode {{ column: {}, side: {:?}, depth: {}, value: {}, children: {} }}",
            self.column,
            self.side,
            self.depth,
            self.value,
            self.children.as_ref().map_or(0, Vec::len)
        )
    }
}

#[derive(Debug)]
pub struct MinimaxResult {
    /// The value of the best root move, `None` if there were no moves.
    pub value: Option<i32>,

    /// The best column to play, `None` if every column is full.
    pub best_move: Option<usize>,

    /// The value of every open column, in ascending column order.
    pub column_values: Vec<(usize, i32)>,

    /// The total number of nodes in all root subtrees.
    pub node_count: u64,
}

/// Evaluate every open column of `board` as a computer move, searching up to `depth`.
///
/// The best move is the column with the strictly highest value, so ties go to the leftmost column.
pub fn minimax(board: &Board, depth: u32) -> MinimaxResult {
    let mut best_value = -SENTINEL;
    let mut best_move = None;
    let mut best_line = vec![];
    let mut column_values = vec![];
    let mut node_count = 0;

    for column in board.available_columns() {
        let node = SearchNode::new(board.clone(), column, Side::Computer, 0, depth)
            .unwrap_or_else(|e| unreachable!("open column {} was rejected: {}", column, e));
        debug!("column {} => value {}", column, node.value());

        node_count += node.node_count();
        column_values.push((column, node.value()));

        if node.value() > best_value {
            best_value = node.value();
            best_move = Some(column);
            best_line = node.principal_variation();
        }
    }

    debug!(
        "best move {:?} with value {}, searched {} nodes, line {:?}",
        best_move, best_value, node_count, best_line
    );

    MinimaxResult {
        value: best_move.map(|_| best_value),
        best_move,
        column_values,
        node_count,
    }
}

/// Bot that plays the best move found by [minimax] at a fixed depth.
#[derive(Debug, Copy, Clone)]
pub struct MinimaxBot {
    depth: u32,
}

impl MinimaxBot {
    pub fn new(depth: u32) -> Self {
        MinimaxBot { depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for MinimaxBot {
    fn default() -> Self {
        MinimaxBot::new(MAX_DEPTH)
    }
}

impl Bot for MinimaxBot {
    fn select_move(&mut self, board: &Board) -> Result<usize, NoLegalMove> {
        minimax(board, self.depth).best_move.ok_or(NoLegalMove)
    }
}
