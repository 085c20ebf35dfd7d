//! Top-level session owning the graph store and its playback controller.

use std::convert::TryFrom;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use pathviz_core::{bfs, ucs, Graph, NodeId, PathDisplay, SearchResult, TraceEntry, UcsOutcome};
use pathviz_playback::Playback;

use crate::scenario::{Directive, Scenario};

/// Owns the graph and the single playback instance for the process
/// lifetime. All graph mutation and searching goes through here; the
/// algorithms receive the store by reference and no state is ambient.
pub struct Session {
    graph: Graph,
    playback: Arc<Playback>,
    step_period: Duration,
    animate: bool,
}

impl Session {
    pub fn new(step_period: Duration, animate: bool) -> Self {
        Session {
            graph: Graph::new(),
            playback: Arc::new(Playback::new()),
            step_period,
            animate,
        }
    }

    /// Execute the scenario directives in order.
    pub async fn run(&mut self, scenario: &Scenario) -> Result<()> {
        for directive in &scenario.directives {
            match directive {
                Directive::Edge { from, to, cost } => self.add_edge(from, to, *cost)?,
                Directive::Bfs { start, goal } => self.run_bfs(start, goal)?,
                Directive::Ucs { start, goal } => self.run_ucs(start, goal).await?,
            }
        }
        Ok(())
    }

    fn add_edge(&mut self, from: &str, to: &str, cost: i64) -> Result<()> {
        self.graph.add_edge(from, to, cost)?;
        debug!("added edge {} -> {} (cost {})", from, to, cost);
        Ok(())
    }

    fn run_bfs(&self, start: &str, goal: &str) -> Result<()> {
        let start = NodeId::try_from(start)?;
        let goal = NodeId::try_from(goal)?;
        let result = bfs(&self.graph, &start, &goal);
        Self::report("bfs", &result);
        Ok(())
    }

    async fn run_ucs(&self, start: &str, goal: &str) -> Result<()> {
        let start = NodeId::try_from(start)?;
        let goal = NodeId::try_from(goal)?;
        let UcsOutcome { result, trace } = ucs(&self.graph, &start, &goal);
        Self::report("ucs", &result);
        if self.animate {
            self.play_trace(trace).await?;
        } else {
            for entry in &trace {
                info!("expansion {}: {} (cost {})", entry.order, entry.node, entry.cumulative_cost);
            }
        }
        Ok(())
    }

    /// Replay the trace through the playback controller and wait for it
    /// to drain.
    async fn play_trace(&self, trace: Vec<TraceEntry>) -> Result<()> {
        self.playback.start(
            trace,
            |entry| info!("expanding {} (cost {}, step {})", entry.node, entry.cumulative_cost, entry.order),
            self.step_period,
        )?;
        self.playback.wait_idle().await;
        Ok(())
    }

    fn report(algorithm: &str, result: &SearchResult) {
        if result.found {
            info!("{}: Path: {} | Total Cost: {}", algorithm, PathDisplay(&result.path), result.cost);
        } else {
            info!("{}: No path found", algorithm);
        }
    }
}
