//! Addressing a node by the fields leading to it from a root.
//!
//! Every node kind with fields that can hold a node has a `<Kind>Branch` enum
//! (`ArrayBindingBranch::Elements(0)`, `ArrayBindingBranch::Rest`), generated
//! by `#[ast_node]`. [`Branch`] is any one of them, and an [`AstPath`] is a
//! list of branches. Both compare and hash by value.

use crate::*;
use std::fmt;

/// Something stored in a field which may be a node.
pub trait ChildNode {
    fn child_node(&self) -> Option<AstNode<'_>>;
}

impl<T: ChildNode> ChildNode for Option<T> {
    #[inline]
    fn child_node(&self) -> Option<AstNode<'_>> {
        self.as_ref().and_then(ChildNode::child_node)
    }
}

impl<T: ?Sized + ChildNode> ChildNode for Box<T> {
    #[inline]
    fn child_node(&self) -> Option<AstNode<'_>> {
        (**self).child_node()
    }
}

macro_rules! branches {
    ($($kind:ident => $branch:ident,)*) => {
        /// One step from a node to one of its children.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Branch {
            $($kind($branch),)*
        }

        impl Branch {
            /// Kind of the node this branch starts from.
            pub fn kind(self) -> NodeKind {
                match self {
                    $(Branch::$kind(_) => NodeKind::$kind,)*
                }
            }

            /// The child of `node` this branch leads to, if `node` is of the
            /// right kind and the field holds a node.
            pub fn get<'ast>(self, node: AstNode<'ast>) -> Option<AstNode<'ast>> {
                match self {
                    $(Branch::$kind(b) => b.get(node),)*
                }
            }
        }

        $(
            impl From<$branch> for Branch {
                fn from(b: $branch) -> Self {
                    Branch::$kind(b)
                }
            }
        )*

        impl fmt::Display for Branch {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Branch::$kind(b) => write!(f, "{}.{}", NodeKind::$kind, b),)*
                }
            }
        }
    };
}

branches! {
    // decl
    VariableDeclaration => VariableDeclarationBranch,
    VariableDeclarator => VariableDeclaratorBranch,
    // expr
    ArrayExpression => ArrayExpressionBranch,
    SpreadElement => SpreadElementBranch,
    StaticMemberExpression => StaticMemberExpressionBranch,
    ComputedMemberExpression => ComputedMemberExpressionBranch,
    CallExpression => CallExpressionBranch,
    UnaryExpression => UnaryExpressionBranch,
    BinaryExpression => BinaryExpressionBranch,
    ConditionalExpression => ConditionalExpressionBranch,
    // module
    Script => ScriptBranch,
    // pat
    ArrayBinding => ArrayBindingBranch,
    ObjectBinding => ObjectBindingBranch,
    BindingWithDefault => BindingWithDefaultBranch,
    BindingPropertyIdentifier => BindingPropertyIdentifierBranch,
    BindingPropertyProperty => BindingPropertyPropertyBranch,
    // prop
    ComputedPropertyName => ComputedPropertyNameBranch,
    // stmt
    VariableDeclarationStatement => VariableDeclarationStatementBranch,
    ExpressionStatement => ExpressionStatementBranch,
}

/// The branches leading from a root to one of its descendants. The empty
/// path leads to the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AstPath {
    branches: Vec<Branch>,
}

impl AstPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// This path extended by one step.
    pub fn with(mut self, branch: impl Into<Branch>) -> Self {
        self.push(branch);
        self
    }

    pub fn push(&mut self, branch: impl Into<Branch>) {
        self.branches.push(branch.into());
    }

    pub fn pop(&mut self) -> Option<Branch> {
        self.branches.pop()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Follows the path from `root`. `None` as soon as a step does not apply.
    pub fn get<'ast>(&self, root: AstNode<'ast>) -> Option<AstNode<'ast>> {
        self.branches
            .iter()
            .try_fold(root, |node, branch| branch.get(node))
    }
}

impl FromIterator<Branch> for AstPath {
    fn from_iter<I: IntoIterator<Item = Branch>>(iter: I) -> Self {
        AstPath {
            branches: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for AstPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.branches.iter().enumerate() {
            if i != 0 {
                f.write_str(" / ")?;
            }
            fmt::Display::fmt(b, f)?;
        }
        Ok(())
    }
}
