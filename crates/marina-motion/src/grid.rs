//! Grid layout: placing every marina around a reference point.

use std::ops::Index;

use marina_core::{GridConfig, MarinaId, Node, Point, SimTime, truncate};

/// Positions and time of every marina at one instant.
///
/// Dense: `nodes[k]` is marina `MarinaId(k)` for every `k < nb_marinas`.
/// All nodes of a snapshot share the same time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    time:  SimTime,
    nodes: Vec<Node>,
}

impl GridSnapshot {
    /// Time shared by every node (the node-0 time).
    #[inline]
    pub fn time(&self) -> SimTime {
        self.time
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, marina: MarinaId) -> Option<&Node> {
        self.nodes.get(marina.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// `(MarinaId, &Node)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (MarinaId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (MarinaId(i as u32), n))
    }

    /// A copy of this snapshot moved by `(dx, dy)` and `dt_secs` later.
    ///
    /// The offset is truncated once and applied to every node, so the grid
    /// moves as a rigid body.
    pub fn translated(&self, dx: f64, dy: f64, dt_secs: i64) -> GridSnapshot {
        let time = self.time + dt_secs;
        let nodes = self
            .nodes
            .iter()
            .map(|n| Node::new(n.position.offset_truncated(dx, dy), n.time + dt_secs))
            .collect();
        GridSnapshot { time, nodes }
    }
}

impl Index<MarinaId> for GridSnapshot {
    type Output = Node;

    fn index(&self, marina: MarinaId) -> &Node {
        &self.nodes[marina.index()]
    }
}

/// Lay out the full grid centred on `reference`, every node stamped `time`.
///
/// The grid origin is computed in floating point and truncated once; the
/// per-node offsets are then exact multiples of `marinas_distance`.  A grid
/// with an even number of marinas per axis is therefore off-centre by up to
/// one unit.
pub fn layout(reference: Point, time: SimTime, config: &GridConfig) -> GridSnapshot {
    let spacing = config.marinas_distance as f64;
    let origin_x = reference.x as f64 - ((config.nodes_per_group as f64 - 1.0) * 0.5) * spacing;
    let origin_y = reference.y as f64 - ((config.nodes_per_line as f64 - 1.0) * 0.5) * spacing;
    let (origin_x, origin_y) = (truncate(origin_x), truncate(origin_y));

    let mut nodes = Vec::with_capacity(config.nb_marinas());
    for j in 0..config.nodes_per_line {
        for i in 0..config.nodes_per_group {
            let position = Point::new(
                along_axis(origin_x, i, config.marinas_distance),
                along_axis(origin_y, j, config.marinas_distance),
            );
            nodes.push(Node::new(position, time));
        }
    }
    debug_assert_eq!(nodes.len(), config.nb_marinas());

    GridSnapshot { time, nodes }
}

/// `origin + k * spacing`, clamped to the `i32` range.
#[inline]
fn along_axis(origin: i32, k: u32, spacing: u32) -> i32 {
    let v = origin as i64 + k as i64 * spacing as i64;
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
