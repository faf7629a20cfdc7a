use crate::core::element::ElementRecord;
use crate::math::helix::{EmbeddingModel, Position3D};
use crate::synthesis::compound::StabilityBand;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Marker node: one selected element at its embedded position.
#[derive(Debug, Clone)]
pub struct Marker {
    pub symbol: &'static str,
    pub position: Position3D,
}

/// Line between two markers.
#[derive(Debug, Clone, Copy)]
pub struct BondLine {
    pub length: f64,
    pub band: StabilityBand,
}

/// Connecting lines between the selected markers, coloured by the compound's
/// stability band.
pub struct BondNetwork {
    pub graph: UnGraph<Marker, BondLine>,
}

impl BondNetwork {
    /// Connects every pair of selected markers. Fewer than two markers give a
    /// graph without edges.
    pub fn build(
        selection: &[&ElementRecord],
        embedding: &dyn EmbeddingModel,
        band: StabilityBand,
    ) -> Self {
        let n = selection.len();
        let mut graph = UnGraph::<Marker, BondLine>::with_capacity(n, n * (n.saturating_sub(1)) / 2);

        let nodes: Vec<NodeIndex> = selection
            .iter()
            .map(|e| {
                graph.add_node(Marker {
                    symbol: e.symbol,
                    position: embedding.embed_element(e),
                })
            })
            .collect();

        for i in 0..n {
            for j in (i + 1)..n {
                let a = graph[nodes[i]].position.to_vector();
                let b = graph[nodes[j]].position.to_vector();
                graph.add_edge(nodes[i], nodes[j], BondLine { length: (b - a).norm(), band });
            }
        }
        Self { graph }
    }

    pub fn marker_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn line_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// (from, to, line) triples in insertion order.
    pub fn lines(&self) -> Vec<(&'static str, &'static str, BondLine)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].symbol,
                    self.graph[edge.target()].symbol,
                    *edge.weight(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Registry;
    use crate::math::helix::HelicalRibbon;

    #[test]
    fn test_complete_graph() {
        let selection = Registry::resolve(&["Fe", "C", "Cr", "Ni"]).unwrap();
        let net = BondNetwork::build(&selection, &HelicalRibbon::default(), StabilityBand::Yellow);
        assert_eq!(net.marker_count(), 4);
        assert_eq!(net.line_count(), 6);
        assert!(net.lines().iter().all(|(_, _, l)| l.band == StabilityBand::Yellow));
    }

    #[test]
    fn test_single_marker_has_no_lines() {
        let selection = Registry::resolve(&["C"]).unwrap();
        let net = BondNetwork::build(&selection, &HelicalRibbon::default(), StabilityBand::Green);
        assert_eq!(net.marker_count(), 1);
        assert_eq!(net.line_count(), 0);
    }

    #[test]
    fn test_line_length_between_layers() {
        // C and Si both sit on the axis, one layer apart.
        let selection = Registry::resolve(&["C", "Si"]).unwrap();
        let net = BondNetwork::build(&selection, &HelicalRibbon::default(), StabilityBand::Green);
        let (from, to, line) = net.lines()[0];
        assert_eq!((from, to), ("C", "Si"));
        assert!((line.length - 0.8).abs() < 1e-9);
    }
}
