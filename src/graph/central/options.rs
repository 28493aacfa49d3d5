//! Finder configuration.
//!
//! Every option has a serde representation in `snake_case`, so options can be
//! read from JSON next to an edge list.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::basic::RoadMap;

/// Which way the roads must lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The node every other node can reach: all roads lead to the capital.
    #[default]
    Inbound,
    /// The node that can reach every other node: the capital serves every city.
    ///
    /// Computed as [`Direction::Inbound`] on the reversed road map.
    Outbound,
}

/// How the central node is searched for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Candidate elimination followed by verification: \(O(n)\) traversals.
    #[default]
    Elimination,
    /// Count, for every node in ascending order, how many nodes reach it; stop
    /// at the first one reached by all. \(O(n)\) full traversals.
    Exhaustive,
}

/// Input shape accepted by the finder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapePolicy {
    /// Any directed edge list.
    #[default]
    Any,
    /// Every node of the oriented map has at most one outgoing road.
    Functional,
}

impl ShapePolicy {
    /// Validates `map` against this policy.
    ///
    /// # Errors
    /// [`GraphError::NotFunctional`] naming the first node with out-degree > 1.
    pub fn check(self, map: &RoadMap<'_>) -> Result<()> {
        match self {
            ShapePolicy::Any => Ok(()),
            ShapePolicy::Functional => match map.first_branching_node() {
                None => Ok(()),
                Some(node) => Err(GraphError::NotFunctional {
                    node: node.index(),
                    out_degree: map.out_degree(node),
                }),
            },
        }
    }
}

/// Options for [`CentralNodeFinder`](crate::CentralNodeFinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FinderOptions {
    /// Which way the roads must lead.
    pub direction: Direction,
    /// Search strategy.
    pub strategy: Strategy,
    /// Accepted input shape.
    pub shape: ShapePolicy,
}

impl FinderOptions {
    /// Sets the direction.
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the strategy.
    #[must_use]
    pub const fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the shape policy.
    #[must_use]
    pub const fn shape(mut self, shape: ShapePolicy) -> Self {
        self.shape = shape;
        self
    }
}

macro_rules! impl_keyword {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// The `snake_case` keyword of this variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(format!(
                        concat!(
                            "unknown ", stringify!($ty), " `{}`, expected one of: ",
                            $($name, " "),+
                        ),
                        other
                    )),
                }
            }
        }
    };
}

impl_keyword!(Direction { Inbound => "inbound", Outbound => "outbound" });
impl_keyword!(Strategy { Elimination => "elimination", Exhaustive => "exhaustive" });
impl_keyword!(ShapePolicy { Any => "any", Functional => "functional" });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GhostToken;

    #[test]
    fn defaults_are_canonical() {
        let opts = FinderOptions::default();
        assert_eq!(opts.direction, Direction::Inbound);
        assert_eq!(opts.strategy, Strategy::Elimination);
        assert_eq!(opts.shape, ShapePolicy::Any);
    }

    #[test]
    fn builder_setters_chain() {
        let opts = FinderOptions::default()
            .direction(Direction::Outbound)
            .strategy(Strategy::Exhaustive)
            .shape(ShapePolicy::Functional);
        assert_eq!(opts.direction, Direction::Outbound);
        assert_eq!(opts.strategy, Strategy::Exhaustive);
        assert_eq!(opts.shape, ShapePolicy::Functional);
    }

    #[test]
    fn keywords_parse_and_display() {
        assert_eq!("outbound".parse::<Direction>(), Ok(Direction::Outbound));
        assert_eq!("exhaustive".parse::<Strategy>(), Ok(Strategy::Exhaustive));
        assert_eq!("functional".parse::<ShapePolicy>(), Ok(ShapePolicy::Functional));
        assert_eq!(Direction::Inbound.to_string(), "inbound");

        let err = "sideways".parse::<Direction>().unwrap_err();
        assert!(err.contains("sideways"));
        assert!(err.contains("inbound"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: FinderOptions = serde_json::from_str(r#"{"direction": "outbound"}"#).unwrap();
        assert_eq!(opts, FinderOptions::default().direction(Direction::Outbound));

        let json = serde_json::to_string(&FinderOptions::default()).unwrap();
        assert_eq!(
            json,
            r#"{"direction":"inbound","strategy":"elimination","shape":"any"}"#
        );
    }

    #[test]
    fn functional_policy_names_first_branching_node() {
        GhostToken::new(|token| {
            let map = RoadMap::from_edges(token, &[0, 2, 2], &[1, 0, 1]).unwrap();
            assert_eq!(ShapePolicy::Any.check(&map), Ok(()));
            assert_eq!(
                ShapePolicy::Functional.check(&map),
                Err(GraphError::NotFunctional {
                    node: 2,
                    out_degree: 2
                })
            );
        });
    }
}
