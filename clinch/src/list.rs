//! Member-list output.

use std::io::{self, Write};

use crate::graph::InteractionGraph;

impl InteractionGraph {
    /// Write the member list, one chain name per line, in survivor order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn write_members<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for node in self.graph().node_indices() {
            writeln!(writer, "{}", self.name(node))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::InteractionGraph;

    #[test]
    fn writes_one_chain_per_line() {
        let mut graph = InteractionGraph::new();
        graph.add_interaction("1abc_A", "1abc_B");
        graph.add_interaction("1abc_B", "2def_C");

        let mut buffer = Vec::new();
        graph
            .write_members(&mut buffer)
            .expect("writing to a buffer should not fail");

        assert_eq!(buffer, b"1abc_A\n1abc_B\n2def_C\n");
    }

    #[test]
    fn writes_nothing_for_an_empty_graph() {
        let graph = InteractionGraph::new();

        let mut buffer = Vec::new();
        graph
            .write_members(&mut buffer)
            .expect("writing to a buffer should not fail");

        assert!(buffer.is_empty());
    }
}
