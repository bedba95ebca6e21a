use anyhow::{anyhow, bail, Context};
use graphlab_core::{Edge, EngineConfig, Graph, Vertex, VertexId};
use serde::Serialize;

/// Graph assembled from `--vertex` / `--edge` arguments plus engine defaults
pub struct CliContext {
    pub graph: Graph,
    pub config: EngineConfig,
}

/// An edge as printed: endpoint names and weight
#[derive(Debug, Clone, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl CliContext {
    pub fn build(vertices: &[String], edges: &[String], config: EngineConfig) -> anyhow::Result<Self> {
        let mut ctx = Self {
            graph: Graph::new(),
            config,
        };

        for name in vertices {
            ctx.ensure_vertex(name)?;
        }
        for spec in edges {
            ctx.add_edge_spec(spec)?;
        }

        tracing::debug!(
            "Built graph with {} vertices and {} edges",
            ctx.graph.vertex_count(),
            ctx.graph.edge_count()
        );
        Ok(ctx)
    }

    /// Look up a vertex given on the command line
    pub fn resolve(&self, name: &str) -> anyhow::Result<VertexId> {
        self.graph
            .vertex_id(name)
            .ok_or_else(|| anyhow!("Vertex not found: {}", name))
    }

    pub fn name(&self, id: VertexId) -> String {
        self.graph.label(id)
    }

    pub fn names(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter().map(|&id| self.name(id)).collect()
    }

    pub fn edge_view(&self, edge: &Edge) -> EdgeView {
        EdgeView {
            from: self.name(edge.vertex1),
            to: self.name(edge.vertex2),
            weight: edge.weight,
        }
    }

    fn ensure_vertex(&mut self, name: &str) -> anyhow::Result<VertexId> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Vertex name must not be empty");
        }
        if let Some(id) = self.graph.vertex_id(name) {
            return Ok(id);
        }
        let vertex = Vertex::new(name);
        let id = vertex.id();
        self.graph.add_vertex(vertex);
        Ok(id)
    }

    fn add_edge_spec(&mut self, spec: &str) -> anyhow::Result<()> {
        let (endpoints, weight) = match spec.rsplit_once(':') {
            Some((endpoints, weight)) => {
                let weight: f64 = weight
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid weight in edge '{}'", spec))?;
                (endpoints, weight)
            }
            None => (spec, self.config.default_edge_weight),
        };

        let (first, second) = endpoints
            .split_once('-')
            .ok_or_else(|| anyhow!("Invalid edge '{}': expected A-B or A-B:WEIGHT", spec))?;

        let first = self.ensure_vertex(first)?;
        let second = self.ensure_vertex(second)?;

        if self
            .graph
            .add_edge(Edge::weighted(first, second, weight))
            .is_none()
        {
            bail!("Edge rejected: '{}' is a self-loop or a duplicate", spec);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_from_specs() {
        let ctx = CliContext::build(
            &strings(&["Z"]),
            &strings(&["A-B:2.5", "B-C"]),
            EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(ctx.graph.vertex_count(), 4);
        assert_eq!(ctx.graph.edge_count(), 2);
        assert_eq!(ctx.graph.total_weight(), 3.5);
        assert_eq!(ctx.graph.vertices()[0].name(), "Z");
    }

    #[test]
    fn test_default_weight_from_config() {
        let config = EngineConfig {
            default_edge_weight: 4.0,
            ..EngineConfig::default()
        };
        let ctx = CliContext::build(&[], &strings(&["A-B"]), config).unwrap();
        assert_eq!(ctx.graph.total_weight(), 4.0);
    }

    #[test]
    fn test_rejects_bad_specs() {
        let config = EngineConfig::default;
        assert!(CliContext::build(&[], &strings(&["AB"]), config()).is_err());
        assert!(CliContext::build(&[], &strings(&["A-B:x"]), config()).is_err());
        assert!(CliContext::build(&[], &strings(&["A-A"]), config()).is_err());
        assert!(CliContext::build(&[], &strings(&["A-B", "B-A"]), config()).is_err());
        assert!(CliContext::build(&[], &strings(&["-B"]), config()).is_err());
    }

    #[test]
    fn test_resolve() {
        let ctx = CliContext::build(&[], &strings(&["A-B"]), EngineConfig::default()).unwrap();
        assert!(ctx.resolve("A").is_ok());
        assert!(ctx.resolve("Q").is_err());
    }
}
