use crate::{AstNode, NodeKind, Visit, VisitWith};
use rustc_hash::FxHashMap;
use tracing::trace;

struct Flattener<'ast> {
    nodes: Vec<AstNode<'ast>>,
}

impl<'ast> Visit<'ast> for Flattener<'ast> {
    fn enter(&mut self, node: AstNode<'ast>) {
        self.nodes.push(node);
    }
}

/// Every concrete node in `node`, parents before children and siblings in
/// field order.
pub fn flatten<'ast, N>(node: &'ast N) -> Vec<AstNode<'ast>>
where
    N: ?Sized + VisitWith<'ast>,
{
    let mut v = Flattener { nodes: Vec::new() };
    node.visit_with(&mut v);
    trace!(len = v.nodes.len(), "flattened tree");
    v.nodes
}

#[derive(Default)]
struct KindCounter {
    counts: FxHashMap<NodeKind, usize>,
}

impl<'ast> Visit<'ast> for KindCounter {
    fn enter(&mut self, node: AstNode<'ast>) {
        *self.counts.entry(node.kind()).or_default() += 1;
    }
}

/// Number of nodes of each kind in `node`. Kinds that do not occur are
/// absent from the map.
pub fn count_kinds<'ast, N>(node: &'ast N) -> FxHashMap<NodeKind, usize>
where
    N: ?Sized + VisitWith<'ast>,
{
    let mut v = KindCounter::default();
    node.visit_with(&mut v);
    v.counts
}
