use super::types::NodeType;

/// One entry in a node's property/argument list.
///
/// Entries keep their insertion order; a key may repeat and every occurrence
/// is preserved, so any last-one-wins policy belongs to the consumer. The
/// optional type comes from an annotation immediately preceding the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodePropArg {
    Value {
        ty: Option<NodeType>,
        value: String,
    },
    Property {
        key: String,
        ty: Option<NodeType>,
        value: String,
    },
}

/// One declaration unit in the document tree.
///
/// `props_args` and `children` stay `None` for a bare declaration;
/// `children: Some(vec![])` records an explicit empty block (`{}`), which is
/// distinct from having no block at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub ty: Option<NodeType>,
    pub props_args: Option<Vec<NodePropArg>>,
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn new(name: String) -> Node {
        Node {
            name,
            ty: None,
            props_args: None,
            children: None,
        }
    }

    pub fn push_prop_arg(&mut self, entry: NodePropArg) {
        self.props_args.get_or_insert_with(Vec::new).push(entry);
    }

    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = Some(children);
    }
}
