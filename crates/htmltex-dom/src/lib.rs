//! Immutable HTML node tree consumed by the LaTeX backend.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Tag of an element node, `None` for text.
    pub fn tag(&self) -> Option<Tag> {
        self.as_element().map(Element::tag)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lower-case local name.
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attribute::new(name, value));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    pub fn tag(&self) -> Tag {
        Tag::from_name(&self.name)
    }

    /// Looks up an attribute by name. A duplicated name resolves to its last occurrence.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .rev()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Child elements whose tag is one of `tags`, in document order.
    pub fn children_tagged<'a>(&'a self, tags: &'a [Tag]) -> impl Iterator<Item = &'a Element> {
        self.child_elements().filter(move |el| tags.contains(&el.tag()))
    }
}

/// Element kinds with dedicated conversion rules. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Ul,
    Ol,
    Li,
    Img,
    Hr,
    Div,
    Section,
    Body,
    Html,
    Header,
    Footer,
    Aside,
    Main,
    P,
    Table,
    Thead,
    Tbody,
    Tfoot,
    Tr,
    Td,
    Th,
    Code,
    B,
    Strong,
    I,
    Em,
    U,
    S,
    Sub,
    Sup,
    A,
    Br,
    Other,
}

impl Tag {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "h1" => Tag::H1,
            "h2" => Tag::H2,
            "h3" => Tag::H3,
            "h4" => Tag::H4,
            "h5" => Tag::H5,
            "h6" => Tag::H6,
            "ul" => Tag::Ul,
            "ol" => Tag::Ol,
            "li" => Tag::Li,
            "img" => Tag::Img,
            "hr" => Tag::Hr,
            "div" => Tag::Div,
            "section" => Tag::Section,
            "body" => Tag::Body,
            "html" => Tag::Html,
            "header" => Tag::Header,
            "footer" => Tag::Footer,
            "aside" => Tag::Aside,
            "main" => Tag::Main,
            "p" => Tag::P,
            "table" => Tag::Table,
            "thead" => Tag::Thead,
            "tbody" => Tag::Tbody,
            "tfoot" => Tag::Tfoot,
            "tr" => Tag::Tr,
            "td" => Tag::Td,
            "th" => Tag::Th,
            "code" => Tag::Code,
            "b" => Tag::B,
            "strong" => Tag::Strong,
            "i" => Tag::I,
            "em" => Tag::Em,
            "u" => Tag::U,
            "s" => Tag::S,
            "sub" => Tag::Sub,
            "sup" => Tag::Sup,
            "a" => Tag::A,
            "br" => Tag::Br,
            _ => Tag::Other,
        }
    }

    pub fn heading_level(self) -> Option<u8> {
        match self {
            Tag::H1 => Some(1),
            Tag::H2 => Some(2),
            Tag::H3 => Some(3),
            Tag::H4 => Some(4),
            Tag::H5 => Some(5),
            Tag::H6 => Some(6),
            _ => None,
        }
    }

    /// Sectioning containers whose children are walked as blocks.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Tag::Div
                | Tag::Section
                | Tag::Body
                | Tag::Html
                | Tag::Header
                | Tag::Footer
                | Tag::Aside
                | Tag::Main
        )
    }

    /// Tags that occupy their own block in the output.
    pub fn is_block(self) -> bool {
        self.heading_level().is_some()
            || self.is_container()
            || matches!(
                self,
                Tag::Ul | Tag::Ol | Tag::Img | Tag::Hr | Tag::P | Tag::Table | Tag::Code
            )
    }
}
