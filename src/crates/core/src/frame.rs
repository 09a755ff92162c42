//! Pure frame planning for the recursion-trace visualizer.
//!
//! Geometry and color selection are computed here, free of any drawing
//! surface; the TUI shell walks the resulting [`FramePlan`] and emits
//! canvas shapes. This keeps the layout rules testable and makes the
//! "no drawing context" case trivially a no-op (nothing walks the plan).

use neoncode_core_types::{AnimationStep, TreeNode};

/// Background grid pitch in surface pixels.
pub const GRID_PITCH: f64 = 20.0;
pub const BASE_RADIUS: f64 = 35.0;
pub const MIN_RADIUS: f64 = 15.0;

/// Palette role, resolved to concrete colors by the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    /// Primary accent (cyan in the reference palette).
    Accent,
    /// Secondary accent (purple).
    Secondary,
    /// Emphasis for just-computed nodes (yellow).
    Highlight,
    /// Base-case leaves (green).
    Leaf,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeStyle {
    /// Thick high-contrast line when either endpoint is highlighted.
    Highlight,
    /// Thinner two-hue gradient line, one hue per endpoint.
    Gradient { from: Hue, to: Hue },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgePlan {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style: EdgeStyle,
    pub width: f64,
}

/// Visual state of an active node, in fill/border precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Highlighted,
    Leaf,
    Internal,
}

impl NodeRole {
    pub fn hue(&self) -> Hue {
        match self {
            NodeRole::Highlighted => Hue::Highlight,
            NodeRole::Leaf => Hue::Leaf,
            NodeRole::Internal => Hue::Accent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodePlan {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub role: NodeRole,
    pub label: &'static str,
    /// `= value` caption drawn beneath highlighted nodes.
    pub caption: Option<String>,
}

/// Everything one frame draws, in z-order: grid, then edges, then nodes,
/// then the overlay texts.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub width: f64,
    pub height: f64,
    pub grid: Vec<GridLine>,
    pub edges: Vec<EdgePlan>,
    pub nodes: Vec<NodePlan>,
    /// "Step: i/N" corner counter.
    pub step_counter: String,
    /// One-line narration for the current step, when the explanation
    /// table has an entry for this index.
    pub explanation: Option<String>,
}

/// Node radius shrinks with depth, clamped at a floor.
pub fn node_radius(depth: u32) -> f64 {
    (BASE_RADIUS - f64::from(depth) * 5.0).max(MIN_RADIUS)
}

fn grid_lines(width: f64, height: f64) -> Vec<GridLine> {
    let mut lines = Vec::new();
    let mut y = 0.0;
    while y < height {
        lines.push(GridLine {
            x1: 0.0,
            y1: y,
            x2: width,
            y2: y,
        });
        y += GRID_PITCH;
    }
    let mut x = 0.0;
    while x < width {
        lines.push(GridLine {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: height,
        });
        x += GRID_PITCH;
    }
    lines
}

/// Optional edge-angle perturbation from the rotation control: each edge
/// is rotated about its own midpoint, node positions stay fixed.
fn perturb(edge: &mut EdgePlan, rotation_deg: f64) {
    if rotation_deg == 0.0 {
        return;
    }
    let angle = rotation_deg.to_radians() * 0.1;
    let (sin, cos) = angle.sin_cos();
    let mx = (edge.x1 + edge.x2) / 2.0;
    let my = (edge.y1 + edge.y2) / 2.0;
    let rot = |x: f64, y: f64| {
        let (dx, dy) = (x - mx, y - my);
        (mx + dx * cos - dy * sin, my + dx * sin + dy * cos)
    };
    (edge.x1, edge.y1) = rot(edge.x1, edge.y1);
    (edge.x2, edge.y2) = rot(edge.x2, edge.y2);
}

/// Compute the full draw plan for one animation step.
///
/// `size` is the surface in pixels; node positions are denormalized
/// against it. Inactive nodes contribute nothing; an empty active set
/// yields a grid-only frame.
pub fn plan_frame(
    nodes: &[TreeNode],
    step: &AnimationStep,
    step_index: usize,
    step_count: usize,
    explanation: Option<&str>,
    size: (f64, f64),
    rotation_deg: f64,
) -> FramePlan {
    let (width, height) = size;

    let mut edges = Vec::new();
    let mut node_plans = Vec::new();

    // Edges first so they sit under the nodes.
    for parent in nodes.iter().filter(|n| step.is_active(n.id)) {
        let px = parent.x * width;
        let py = parent.y * height;
        for child_id in &parent.children {
            let Some(child) = nodes.iter().find(|n| n.id == *child_id) else {
                continue;
            };
            if !step.is_active(child.id) {
                continue;
            }
            let highlighted = step.is_highlighted(parent.id) || step.is_highlighted(child.id);
            let mut edge = EdgePlan {
                x1: px,
                y1: py,
                x2: child.x * width,
                y2: child.y * height,
                style: if highlighted {
                    EdgeStyle::Highlight
                } else {
                    EdgeStyle::Gradient {
                        from: Hue::Accent,
                        to: Hue::Secondary,
                    }
                },
                width: if highlighted { 3.0 } else { 2.0 },
            };
            perturb(&mut edge, rotation_deg);
            edges.push(edge);
        }
    }

    for n in nodes.iter().filter(|n| step.is_active(n.id)) {
        let role = if step.is_highlighted(n.id) {
            NodeRole::Highlighted
        } else if n.is_leaf() {
            NodeRole::Leaf
        } else {
            NodeRole::Internal
        };
        node_plans.push(NodePlan {
            x: n.x * width,
            y: n.y * height,
            radius: node_radius(n.depth),
            role,
            label: n.label,
            caption: (role == NodeRole::Highlighted).then(|| format!("= {}", n.value)),
        });
    }

    FramePlan {
        width,
        height,
        grid: grid_lines(width, height),
        edges,
        nodes: node_plans,
        step_counter: format!("Step: {}/{}", step_index + 1, step_count),
        explanation: explanation.map(str::to_owned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{FIB_EXPLANATIONS, FIB_NODES, FIB_STEPS};

    const SIZE: (f64, f64) = (400.0, 300.0);

    fn plan_step(i: usize) -> FramePlan {
        plan_frame(
            &FIB_NODES,
            &FIB_STEPS[i],
            i,
            FIB_STEPS.len(),
            FIB_EXPLANATIONS.get(i).copied(),
            SIZE,
            0.0,
        )
    }

    #[test]
    fn empty_active_set_draws_grid_only() {
        let step = AnimationStep::default();
        let plan = plan_frame(&FIB_NODES, &step, 0, 22, None, SIZE, 0.0);
        assert!(!plan.grid.is_empty());
        assert!(plan.edges.is_empty());
        assert!(plan.nodes.is_empty());
    }

    #[test]
    fn grid_covers_the_surface_at_fixed_pitch() {
        let plan = plan_step(0);
        // 300/20 horizontal + 400/20 vertical.
        assert_eq!(plan.grid.len(), 15 + 20);
    }

    #[test]
    fn edges_only_between_active_parent_and_child() {
        // Step 1 activates fib(5) and fib(4): exactly one edge.
        let plan = plan_step(1);
        assert_eq!(plan.edges.len(), 1);
        assert_eq!(plan.nodes.len(), 2);
    }

    #[test]
    fn highlighted_endpoint_switches_edge_style() {
        // Step 13 actives {1, 3} with node 2 highlighted; the 1-3 edge
        // has no highlighted endpoint.
        let plan = plan_step(13);
        assert!(plan
            .edges
            .iter()
            .all(|e| matches!(e.style, EdgeStyle::Gradient { .. })));

        // Step 20: node 3 highlighted but inactive, root active alone.
        let plan = plan_step(20);
        assert!(plan.edges.is_empty());

        // Step 5 highlights 14 and 15, both active children of 8.
        let plan = plan_step(5);
        let thick = plan
            .edges
            .iter()
            .filter(|e| e.style == EdgeStyle::Highlight)
            .count();
        assert_eq!(thick, 2);
    }

    #[test]
    fn radius_shrinks_with_depth_to_a_floor() {
        assert_eq!(node_radius(0), 35.0);
        assert_eq!(node_radius(2), 25.0);
        assert_eq!(node_radius(4), 15.0);
        assert_eq!(node_radius(6), 15.0);
    }

    #[test]
    fn highlighted_nodes_carry_value_captions() {
        let plan = plan_step(7); // highlights node 9 (fib(1) = 1)
        let highlighted: Vec<_> = plan
            .nodes
            .iter()
            .filter(|n| n.role == NodeRole::Highlighted)
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].caption.as_deref(), Some("= 1"));
        assert!(plan
            .nodes
            .iter()
            .filter(|n| n.role != NodeRole::Highlighted)
            .all(|n| n.caption.is_none()));
    }

    #[test]
    fn leaf_and_internal_roles_resolve_to_distinct_hues() {
        let plan = plan_step(4); // active path 1-2-4-8-14, 14 is a leaf
        let roles: Vec<_> = plan.nodes.iter().map(|n| n.role).collect();
        assert!(roles.contains(&NodeRole::Leaf));
        assert!(roles.contains(&NodeRole::Internal));
        assert_ne!(NodeRole::Leaf.hue(), NodeRole::Internal.hue());
    }

    #[test]
    fn step_counter_is_one_based() {
        assert_eq!(plan_step(0).step_counter, "Step: 1/22");
        assert_eq!(plan_step(21).step_counter, "Step: 22/22");
    }

    #[test]
    fn rotation_zero_keeps_exact_endpoints() {
        let a = plan_step(1);
        let b = plan_frame(
            &FIB_NODES,
            &FIB_STEPS[1],
            1,
            FIB_STEPS.len(),
            None,
            SIZE,
            45.0,
        );
        assert_ne!(a.edges[0], b.edges[0]);
        // Nodes are untouched by rotation.
        assert_eq!(a.nodes, b.nodes);
    }
}
