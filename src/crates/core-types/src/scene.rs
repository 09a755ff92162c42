/// One node of the recursion-trace visualization.
///
/// Positions are normalized to `[0, 1]` in both axes and denormalized
/// against the surface size at planning time. `children` always refer to
/// ids present in the same node set (leaves have none).
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: u32,
    /// Computed value shown beneath the node when it is highlighted.
    pub value: u32,
    pub x: f64,
    pub y: f64,
    pub depth: u32,
    pub label: &'static str,
    pub children: Vec<u32>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// One frame of the execution animation: which nodes are on the current
/// call path, and which are emphasized (just computed).
#[derive(Debug, Clone, Default)]
pub struct AnimationStep {
    pub active: Vec<u32>,
    pub highlighted: Vec<u32>,
}

impl AnimationStep {
    pub fn is_active(&self, id: u32) -> bool {
        self.active.contains(&id)
    }

    pub fn is_highlighted(&self, id: u32) -> bool {
        self.highlighted.contains(&id)
    }
}
