/// Opens a branded scope and builds a [`RoadMap`](crate::RoadMap) in it.
///
/// `road_map!(|map| from (sources, targets) => body)` expands to a
/// [`GhostToken::new`](crate::GhostToken::new) call whose closure builds the
/// map, binds it to `map`, and evaluates `body`. Construction errors are
/// returned from the scope; `body` must produce a `Result<_, GraphError>`.
///
/// # Example
///
/// ```rust
/// use capital::road_map;
///
/// let edges: capital::Result<usize> =
///     road_map!(|map| from (&[1u8, 2, 3], &[0u8, 0, 0]) => Ok(map.edge_count()));
/// assert_eq!(edges.unwrap(), 3);
/// ```
#[macro_export]
macro_rules! road_map {
    (|$map:ident| from ($sources:expr, $targets:expr) => $body:expr) => {
        $crate::GhostToken::new(|token| {
            let $map = $crate::RoadMap::from_edges(token, $sources, $targets)?;
            $body
        })
    };
}

#[cfg(test)]
mod tests {
    use crate::{GraphError, Result};

    #[test]
    fn test_road_map_macro_builds_map() {
        let nodes: Result<usize> =
            road_map!(|map| from (&[1i32, 2], &[0i32, 0]) => Ok(map.node_count()));
        assert_eq!(nodes, Ok(3));
    }

    #[test]
    fn test_road_map_macro_propagates_errors() {
        let res: Result<usize> =
            road_map!(|map| from (&[1i32, 2], &[0i32]) => Ok(map.node_count()));
        assert_eq!(
            res,
            Err(GraphError::LengthMismatch {
                sources: 2,
                targets: 1
            })
        );
    }
}
