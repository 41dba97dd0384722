//! Destination node tree in Udonarium's `<data name="...">` shape.

/// Value of the `type` attribute carried by resource nodes.
pub const RESOURCE_TYPE: &str = "numberResource";

/// Root element name of a character document.
pub const CHARACTER_ELEMENT: &str = "character";

/// Game system identifier written on the chat palette.
pub const DICEBOT_DND5E: &str = "DungeonsAndDoragons";

/// One `<data>` element.
///
/// `name` is unique among siblings only. Sibling order is preserved as built,
/// since the destination lays nodes out in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledNode {
    pub name: String,
    pub text: Option<String>,
    /// Present only on resource nodes; the maximum is stored in `text`.
    pub current_value: Option<String>,
    pub children: Vec<LabeledNode>,
}

impl LabeledNode {
    /// Node with neither text nor children.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            current_value: None,
            children: Vec::new(),
        }
    }

    /// Leaf node with text content.
    pub fn value(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::empty(name)
        }
    }

    /// Section node holding `children` in order.
    pub fn section(name: impl Into<String>, children: Vec<LabeledNode>) -> Self {
        Self {
            children,
            ..Self::empty(name)
        }
    }

    /// Resource node: current value as attribute, maximum as text.
    pub fn resource(
        name: impl Into<String>,
        current: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self {
            text: Some(max.to_string()),
            current_value: Some(current.to_string()),
            ..Self::empty(name)
        }
    }

    pub fn push(&mut self, child: LabeledNode) {
        self.children.push(child);
    }

    /// Text content, `""` when unset.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// First direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&LabeledNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Descendant reached by following child names.
    pub fn find(&self, path: &[&str]) -> Option<&LabeledNode> {
        path.iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|child| child.name.as_str()).collect()
    }
}

/// Chat palette attached beside the character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPalette {
    pub dicebot: String,
    pub text: String,
}

/// Complete conversion result: the `character` data node and its chat palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationTree {
    pub character: LabeledNode,
    pub chat_palette: ChatPalette,
}

impl DestinationTree {
    /// Node below the `character` data node, e.g. `["detail", "基本", "レベル"]`.
    pub fn find(&self, path: &[&str]) -> Option<&LabeledNode> {
        self.character.find(path)
    }

    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.find(path).map(LabeledNode::text)
    }
}
