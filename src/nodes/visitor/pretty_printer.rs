use crate::Node;

use super::{Visitable, Visitor};
use std::{
    fmt::Display,
    io::{self, Write},
};

/// A visitor of the trie that will print the tree in "dot" notation.
///
/// See ['DOT Language | Graphviz'](https://graphviz.org/doc/info/lang.html) for
/// information about syntax and example of the language.
pub struct DotPrinter<O: Write> {
    output: O,
    next_id: usize,
}

impl<O: Write> DotPrinter<O> {
    /// Write the dot-format of the given tree to the given output.
    pub fn print_tree<V: Display>(output: O, tree: &Node<V>) -> io::Result<()> {
        let mut visitor = DotPrinter { output, next_id: 0 };

        visitor.output_prelude()?;
        let _ = tree.visit_with(&mut visitor)?;
        visitor.output_epilogue()
    }

    fn output_prelude(&mut self) -> io::Result<()> {
        writeln!(self.output, "strict digraph G {{")?;
        writeln!(self.output, "node [shape=record]")
    }

    fn output_epilogue(&mut self) -> io::Result<()> {
        writeln!(self.output, "}}")
    }

    fn get_id(&mut self) -> usize {
        let new_id = self.next_id;
        self.next_id += 1;
        new_id
    }

    fn write_node<V: Display>(&mut self, t: &Node<V>) -> io::Result<usize> {
        let node_id = self.get_id();
        write!(self.output, "n{node_id} ")?;
        write!(self.output, "[label=\"{{")?;
        // write header line
        write!(
            self.output,
            "{{<h0> {:?} | {} | {}}}",
            t.node_type(),
            t.prefix_bits(),
            escape_label(&String::from_utf8_lossy(t.prefix()))
        )?;
        if let Some(record) = t.record() {
            write!(self.output, " | {}", escape_label(&record.to_string()))?;
        }
        // write child line
        if t.has_children() {
            write!(self.output, " | {{")?;
            for (idx, (bit, _)) in t.children().enumerate() {
                if idx == 0 {
                    write!(self.output, "<c{bit}> {bit}")?;
                } else {
                    write!(self.output, "| <c{bit}> {bit}")?;
                }
            }
            write!(self.output, "}}")?;
        }
        writeln!(self.output, "}}\"]")?;

        // write all the edges
        for (bit, child) in t.children() {
            let child_id = child.visit_with(self)?;

            writeln!(self.output, "n{node_id}:c{bit} -> n{child_id}:h0")?;
        }

        Ok(node_id)
    }
}

/// Escape the characters that have a meaning inside a record label.
fn escape_label(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' | '}' | '|' | '<' | '>' | '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            },
            '\0' => escaped.push_str("\\\\0"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl<V: Display, O: Write> Visitor<V> for DotPrinter<O> {
    type Output = io::Result<usize>;

    fn default_output(&self) -> Self::Output {
        unimplemented!("this visitor should never use the default output")
    }

    fn combine_output(&self, _: Self::Output, _: Self::Output) -> Self::Output {
        unimplemented!("this visitor should never combine outputs")
    }

    fn visit_split(&mut self, t: &Node<V>) -> Self::Output {
        self.write_node(t)
    }

    fn visit_terminal(&mut self, t: &Node<V>) -> Self::Output {
        self.write_node(t)
    }

    fn visit_leaf(&mut self, t: &Node<V>) -> Self::Output {
        self.write_node(t)
    }
}
