use std::fmt;

/// A directed edge between two nodes, carrying the facts that justify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<N, A> {
    origin: N,
    target: N,
    attachments: Vec<A>,
}

impl<N, A> Edge<N, A> {
    pub fn new(origin: N, target: N, attachments: impl IntoIterator<Item = A>) -> Self {
        Self {
            origin,
            target,
            attachments: attachments.into_iter().collect(),
        }
    }

    pub fn origin(&self) -> &N {
        &self.origin
    }

    pub fn target(&self) -> &N {
        &self.target
    }

    pub fn attachments(&self) -> &[A] {
        &self.attachments
    }

    pub(super) fn attach(&mut self, attachments: impl IntoIterator<Item = A>) {
        self.attachments.extend(attachments);
    }
}

impl<N: PartialEq, A> Edge<N, A> {
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.target
    }
}

impl<N: fmt::Display, A> fmt::Display for Edge<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.target)
    }
}
