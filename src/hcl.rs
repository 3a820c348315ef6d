//! Minimal writer for HCL documents
//!
//! Covers the subset of the grammar a Packer template needs: blocks with
//! optional quoted labels, attributes holding strings, booleans, integers
//! or lists, and blank lines between top-level blocks. Within a contiguous
//! run of attributes the `=` signs are aligned, as hclwrite formats them,
//! so the emitted file diffs cleanly against hand-maintained templates.

pub enum Value {
    String(String),
    Bool(bool),
    Int(u64),
    List(Vec<Value>),
}

impl Value {
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::String(s.into())).collect())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(n)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        c => std::fmt::Write::write_char(f, c)?,
                    }
                }
                f.write_str("\"")
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

enum Element {
    Attribute(&'static str, Value),
    Block(Block),
}

/// A named block holding attributes and nested blocks in insertion order.
pub struct Block {
    ident: &'static str,
    labels: Vec<&'static str>,
    elements: Vec<Element>,
}

impl Block {
    pub fn new(ident: &'static str) -> Self {
        Self {
            ident,
            labels: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn labeled(ident: &'static str, labels: &[&'static str]) -> Self {
        Self {
            ident,
            labels: labels.to_vec(),
            elements: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.elements.push(Element::Attribute(name, value.into()));
        self
    }

    pub fn block(mut self, block: Block) -> Self {
        self.elements.push(Element::Block(block));
        self
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push_str(self.ident);
        for label in &self.labels {
            out.push_str(" \"");
            out.push_str(label);
            out.push('"');
        }
        out.push_str(" {\n");

        let mut rest = self.elements.as_slice();
        while let Some(element) = rest.first() {
            match element {
                Element::Attribute(..) => {
                    let run = rest
                        .iter()
                        .take_while(|e| matches!(e, Element::Attribute(..)))
                        .count();
                    let width = rest[..run]
                        .iter()
                        .map(|e| match e {
                            Element::Attribute(name, _) => name.len(),
                            Element::Block(_) => 0,
                        })
                        .max()
                        .unwrap_or(0);
                    for element in &rest[..run] {
                        if let Element::Attribute(name, value) = element {
                            out.push_str(&indent);
                            out.push_str("  ");
                            out.push_str(name);
                            for _ in name.len()..width {
                                out.push(' ');
                            }
                            out.push_str(" = ");
                            out.push_str(&value.to_string());
                            out.push('\n');
                        }
                    }
                    rest = &rest[run..];
                }
                Element::Block(block) => {
                    block.write_to(out, depth + 1);
                    rest = &rest[1..];
                }
            }
        }

        out.push_str(&indent);
        out.push_str("}\n");
    }
}

/// Top-level HCL document; blocks are separated by one blank line.
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            block.write_to(&mut out, 0);
        }
        out
    }
}
