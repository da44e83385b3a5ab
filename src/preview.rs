use indexmap::IndexMap;

#[derive(Default)]
struct Node {
    children: IndexMap<String, Node>,
}

impl Node {
    fn insert(&mut self, path: &str) {
        let mut node = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
    }

    fn render(&self, prefix: &str, out: &mut String) {
        let last = self.children.len().saturating_sub(1);
        for (i, (name, child)) in self.children.iter().enumerate() {
            let (branch, indent) = if i == last { ("└── ", "    ") } else { ("├── ", "│   ") };
            out.push_str(prefix);
            out.push_str(branch);
            out.push_str(name);
            out.push_str("/\n");
            child.render(&format!("{prefix}{indent}"), out);
        }
    }
}

/// Renders relative directory paths as an indented tree under `root`.
///
/// Segments are shown in first-seen order and parents that are only
/// implied by deeper paths still get their own line.
pub fn render_tree<S: AsRef<str>>(root: &str, directories: &[S]) -> String {
    let mut tree = Node::default();
    for directory in directories {
        tree.insert(directory.as_ref());
    }

    let mut out = format!("{root}/\n");
    tree.render("", &mut out);
    out
}
