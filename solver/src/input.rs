use std::str::FromStr;

use fulkerson::{Capacity, FlowNetwork, NetworkBuilder, NetworkInvalidReason};
use itertools::Itertools;
use thiserror::Error;

/// Ways the textual network description can be malformed.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum InputError {
    #[error("input ended before the {0}")]
    MissingHeader(&'static str),
    #[error("token {position} ({token:?}) is not a valid number")]
    NotANumber { position: usize, token: String },
    #[error("token {position} names vertex 0, but vertices are numbered from 1")]
    ZeroVertex { position: usize },
    #[error("input ended in the middle of an arc")]
    TruncatedArc,
    #[error("invalid network: {}", .0.iter().join("; "))]
    Invalid(Vec<NetworkInvalidReason>),
}

struct Tokens<'a> {
    inner: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { inner: text.split_whitespace().enumerate() }
    }

    fn number<T: FromStr>(&mut self) -> Option<Result<(usize, T), InputError>> {
        self.inner.next().map(|(position, token)| {
            token.parse()
                .map(|value| (position, value))
                .map_err(|_| InputError::NotANumber { position, token: token.to_string() })
        })
    }

    fn header<T: FromStr>(&mut self, what: &'static str) -> Result<T, InputError> {
        let (_, value) = self.number::<T>().ok_or(InputError::MissingHeader(what))??;
        Ok(value)
    }

    fn vertex(&mut self) -> Option<Result<usize, InputError>> {
        self.number::<usize>().map(|token| {
            let (position, vertex) = token?;
            vertex.checked_sub(1).ok_or(InputError::ZeroVertex { position })
        })
    }
}

/// Parse `n m s t` followed by up to `m` triples `u v c`, converting vertices to 0-based.
///
/// Fewer than `m` arcs is reported as an arc count mismatch by the builder.
pub fn parse_network(text: &str) -> Result<FlowNetwork, InputError> {
    let mut tokens = Tokens::new(text);

    let vertex_count = tokens.header::<usize>("vertex count")?;
    let arc_count = tokens.header::<usize>("arc count")?;
    let source = tokens.header::<usize>("source")?.checked_sub(1).ok_or(InputError::ZeroVertex { position: 2 })?;
    let sink = tokens.header::<usize>("sink")?.checked_sub(1).ok_or(InputError::ZeroVertex { position: 3 })?;

    let mut builder = NetworkBuilder::new(vertex_count, source, sink);
    builder.declare_arc_count(arc_count);

    while let Some(tail) = tokens.vertex() {
        let tail = tail?;
        let head = tokens.vertex().ok_or(InputError::TruncatedArc)??;
        let (_, capacity) = tokens.number::<Capacity>().ok_or(InputError::TruncatedArc)??;
        builder.add_arc(tail, head, capacity);
    }

    log::debug!("read {} vertices, {} declared arcs", vertex_count, arc_count);
    builder.build().map_err(InputError::Invalid)
}

#[cfg(test)]
mod tests {
    use fulkerson::NetworkInvalidReason;

    use super::{parse_network, InputError};

    #[test]
    fn parses_one_based_input() {
        let network = parse_network("4 5 1 4\n1 2 3\n1 3 2\n2 4 2\n3 4 3\n2 3 1\n").unwrap();
        assert_eq!(network.vertex_count(), 4);
        assert_eq!(network.arc_count(), 5);
        assert_eq!(network.source().index(), 0);
        assert_eq!(network.sink().index(), 3);
        assert_eq!(network.arcs().map(|(_, tail, head, arc)| (tail.index(), head.index(), arc.capacity())).collect::<Vec<_>>(),
            vec![(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3), (1, 2, 1)]);
    }

    #[test]
    fn reports_missing_arcs() {
        assert_eq!(
            parse_network("2 2 1 2 1 2 5").unwrap_err(),
            InputError::Invalid(vec![NetworkInvalidReason::ArcCountMismatch { declared: 2, supplied: 1 }])
        );
    }

    #[test]
    fn reports_truncated_arc() {
        assert_eq!(parse_network("2 1 1 2 1 2").unwrap_err(), InputError::TruncatedArc);
    }

    #[test]
    fn reports_bad_tokens() {
        assert_eq!(parse_network("2 1").unwrap_err(), InputError::MissingHeader("source"));
        assert_eq!(
            parse_network("2 1 1 two").unwrap_err(),
            InputError::NotANumber { position: 3, token: "two".to_string() }
        );
        assert_eq!(parse_network("2 1 1 2 0 2 1").unwrap_err(), InputError::ZeroVertex { position: 4 });
    }

    #[test]
    fn reports_negative_capacity() {
        assert_eq!(
            parse_network("2 1 1 2 1 2 -3").unwrap_err(),
            InputError::Invalid(vec![NetworkInvalidReason::NegativeCapacity { arc: 0, capacity: -3 }])
        );
    }
}
