use good_lp::{
    Expression, IntoAffineExpression, ProblemVariables, ResolutionError, Solution, SolverModel,
    Variable, variable,
};
use hashbrown::{HashMap, HashSet};

use crate::model::WalkEdge;
use crate::{Degrees, Error, NodeId};

use super::{RouteLeg, WalkRoute};

/// Path search parameters
#[derive(Debug, Clone, Copy)]
pub struct PathQuery {
    pub start: NodeId,
    pub end: NodeId,
    /// Maximum permitted turn angle in degrees
    pub max_angle: Degrees,
}

/// Finds the minimum-total-distance edge subset forming a path from
/// `query.start` to `query.end`, excluding edges whose angle exceeds the
/// threshold or whose allowed flag is unset.
///
/// The search is expressed as a 0/1 linear program: one binary decision
/// variable per edge, an objective minimizing the sum of decision x distance,
/// and flow conservation at every node (net outflow 1 at the start, net
/// inflow 1 at the end, balance elsewhere). The program is handed to an
/// external solver; an infeasible program means no path satisfies the
/// constraints and `Ok(None)` is returned.
///
/// This is a minimum-cost flow of value 1. With non-negative distances a
/// cycle is never strictly beneficial, so the optimum is a path; no explicit
/// simple-path constraint is imposed.
///
/// # Errors
///
/// Returns `SolverError` if the solver fails for a reason other than
/// infeasibility.
pub fn solve_path(edges: &[WalkEdge], query: &PathQuery) -> Result<Option<WalkRoute>, Error> {
    let mut vars = ProblemVariables::new();
    let uses: Vec<Variable> = edges
        .iter()
        .map(|_| vars.add(variable().binary()))
        .collect();

    let mut objective: Expression = 0.into();
    for (edge, &use_var) in edges.iter().zip(&uses) {
        objective += use_var * edge.distance;
    }

    let mut constraints = Vec::new();

    // Filtered edges are pinned to zero rather than dropped, keeping
    // variable indices aligned with the edge table.
    for (edge, &use_var) in edges.iter().zip(&uses) {
        if !edge.passable(query.max_angle) {
            constraints.push(use_var.into_expression().eq(0.0));
        }
    }

    // Selected out/in degree per node. The queried endpoints get a
    // conservation constraint even when no edge touches them.
    let mut out_flow: HashMap<NodeId, Expression> = HashMap::new();
    let mut in_flow: HashMap<NodeId, Expression> = HashMap::new();
    for (edge, &use_var) in edges.iter().zip(&uses) {
        *out_flow.entry(edge.from).or_insert_with(|| 0.into()) += use_var;
        *in_flow.entry(edge.to).or_insert_with(|| 0.into()) += use_var;
    }

    let mut nodes: HashSet<NodeId> = out_flow.keys().chain(in_flow.keys()).copied().collect();
    nodes.insert(query.start);
    nodes.insert(query.end);

    for node in nodes {
        let out = out_flow.remove(&node).unwrap_or_else(|| 0.into());
        let inn = in_flow.remove(&node).unwrap_or_else(|| 0.into());

        let constraint = if node == query.start {
            (out - inn).eq(1.0)
        } else if node == query.end {
            (inn - out).eq(1.0)
        } else {
            (inn - out).eq(0.0)
        };
        constraints.push(constraint);
    }

    let mut model = vars.minimise(objective).using(good_lp::default_solver);
    for constraint in constraints {
        model.add_constraint(constraint);
    }

    let solution = match model.solve() {
        Ok(solution) => solution,
        Err(ResolutionError::Infeasible | ResolutionError::Unbounded) => return Ok(None),
        Err(e) => return Err(Error::SolverError(e.to_string())),
    };

    let legs: Vec<RouteLeg> = edges
        .iter()
        .zip(&uses)
        .filter(|&(_, &use_var)| solution.value(use_var) > 0.5)
        .map(|(edge, _)| RouteLeg {
            from: edge.from,
            to: edge.to,
            distance: edge.distance,
            angle: edge.angle,
        })
        .collect();

    let total_distance = legs.iter().map(|leg| leg.distance).sum();

    Ok(Some(WalkRoute {
        legs,
        total_distance,
    }))
}
