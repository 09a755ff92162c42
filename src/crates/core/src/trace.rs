//! Fixed demo dataset: the recursion trace of `fib(5)`.
//!
//! The node layout, step sequence and explanations are hard-coded demo
//! data, not derived from real execution. The frame planner takes
//! arbitrary node/step inputs, so a different trace could be swapped in
//! without touching the renderer.

use neoncode_core_types::{AnimationStep, TreeNode};
use once_cell::sync::Lazy;

fn node(
    id: u32,
    value: u32,
    x: f64,
    y: f64,
    depth: u32,
    label: &'static str,
    children: &[u32],
) -> TreeNode {
    TreeNode {
        id,
        value,
        x,
        y,
        depth,
        label,
        children: children.to_vec(),
    }
}

/// The fib(5) call tree, positions normalized to `[0, 1]`.
pub static FIB_NODES: Lazy<Vec<TreeNode>> = Lazy::new(|| {
    vec![
        node(1, 5, 0.5, 0.2, 0, "fib(5)", &[2, 3]),
        node(2, 4, 0.3, 0.35, 1, "fib(4)", &[4, 5]),
        node(3, 3, 0.7, 0.35, 1, "fib(3)", &[6, 7]),
        node(4, 3, 0.2, 0.5, 2, "fib(3)", &[8, 9]),
        node(5, 2, 0.4, 0.5, 2, "fib(2)", &[10, 11]),
        node(6, 2, 0.6, 0.5, 2, "fib(2)", &[12, 13]),
        node(7, 1, 0.8, 0.5, 2, "fib(1)", &[]),
        node(8, 2, 0.15, 0.65, 3, "fib(2)", &[14, 15]),
        node(9, 1, 0.25, 0.65, 3, "fib(1)", &[]),
        node(10, 1, 0.35, 0.65, 3, "fib(1)", &[]),
        node(11, 0, 0.45, 0.65, 3, "fib(0)", &[]),
        node(12, 1, 0.55, 0.65, 3, "fib(1)", &[]),
        node(13, 0, 0.65, 0.65, 3, "fib(0)", &[]),
        node(14, 1, 0.12, 0.8, 4, "fib(1)", &[]),
        node(15, 0, 0.18, 0.8, 4, "fib(0)", &[]),
    ]
});

fn step(active: &[u32], highlighted: &[u32]) -> AnimationStep {
    AnimationStep {
        active: active.to_vec(),
        highlighted: highlighted.to_vec(),
    }
}

/// Ordered execution steps revealing the call path. The animator cycles
/// this sequence modulo its length.
pub static FIB_STEPS: Lazy<Vec<AnimationStep>> = Lazy::new(|| {
    vec![
        step(&[1], &[]),
        step(&[1, 2], &[]),
        step(&[1, 2, 4], &[]),
        step(&[1, 2, 4, 8], &[]),
        step(&[1, 2, 4, 8, 14], &[]),
        step(&[1, 2, 4, 8, 14, 15], &[14, 15]),
        step(&[1, 2, 4, 8, 9], &[8]),
        step(&[1, 2, 4, 9], &[9]),
        step(&[1, 2, 5], &[4]),
        step(&[1, 2, 5, 10], &[10]),
        step(&[1, 2, 5, 11], &[11]),
        step(&[1, 2, 5], &[10, 11]),
        step(&[1, 2], &[5]),
        step(&[1, 3], &[2]),
        step(&[1, 3, 6], &[]),
        step(&[1, 3, 6, 12], &[12]),
        step(&[1, 3, 6, 13], &[13]),
        step(&[1, 3, 6], &[12, 13]),
        step(&[1, 3, 7], &[6]),
        step(&[1, 3], &[7]),
        step(&[1], &[3]),
        step(&[1], &[1, 2, 3]),
    ]
});

/// One-line narration per step, indexed in parallel with [`FIB_STEPS`].
pub const FIB_EXPLANATIONS: &[&str] = &[
    "Starting fibonacci calculation: fib(5)",
    "Dividing into sub-problems: fib(4) and fib(3)",
    "Computing fib(4): Dividing into fib(3) and fib(2)",
    "Computing fib(3): Dividing into fib(2) and fib(1)",
    "Computing fib(2): Dividing into fib(1) and fib(0)",
    "Base cases reached: fib(1) = 1, fib(0) = 0",
    "Computing fib(2) = fib(1) + fib(0) = 1",
    "Returning fib(1) = 1",
    "Computing fib(3) = fib(2) + fib(1) = 2",
    "Returning fib(1) = 1",
    "Returning fib(0) = 0",
    "Computing fib(2) = fib(1) + fib(0) = 1",
    "Computing fib(3) = fib(2) + fib(1) = 2",
    "Computing fib(4) = fib(3) + fib(2) = 3",
    "Computing fib(3): Dividing into fib(2) and fib(1)",
    "Returning fib(1) = 1",
    "Returning fib(0) = 0",
    "Computing fib(2) = fib(1) + fib(0) = 1",
    "Returning fib(1) = 1",
    "Computing fib(3) = fib(2) + fib(1) = 2",
    "Computing fib(5) = fib(4) + fib(3) = 5",
    "Final result: fib(5) = 5",
];

/// Source listing shown in the visualizer legend box.
pub const FIB_SOURCE: &str = "function fib(n) {\n  if (n <= 1) return n;\n  return fib(n-1) + fib(n-2);\n}\n\nfib(5); // Calculating...";
