use skybook_core::Flight;

pub type Predicate<'q> = Box<dyn Fn(&Flight) -> bool + Send + Sync + 'q>;

/// Conjunction of independent flight predicates.
///
/// Each filter group contributes at most one predicate; a flight passes when
/// every predicate accepts it. An empty chain accepts everything.
#[derive(Default)]
pub struct FilterChain<'q> {
    predicates: Vec<Predicate<'q>>,
}

impl<'q> FilterChain<'q> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    pub fn push<P>(&mut self, predicate: P)
    where
        P: Fn(&Flight) -> bool + Send + Sync + 'q,
    {
        self.predicates.push(Box::new(predicate));
    }

    pub fn with<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Flight) -> bool + Send + Sync + 'q,
    {
        self.push(predicate);
        self
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        self.predicates.iter().all(|predicate| predicate(flight))
    }

    /// Copies the accepted flights, preserving input order.
    pub fn apply<'f, I>(&self, flights: I) -> Vec<Flight>
    where
        I: IntoIterator<Item = &'f Flight>,
    {
        flights
            .into_iter()
            .filter(|flight| self.matches(flight))
            .cloned()
            .collect()
    }
}

/// Builds a predicate that accepts a flight when `hit` holds for at least one
/// of `options`.
pub fn any_of<T, H>(options: Vec<T>, hit: H) -> impl Fn(&Flight) -> bool + Send + Sync
where
    T: Send + Sync,
    H: Fn(&T, &Flight) -> bool + Send + Sync,
{
    move |flight| options.iter().any(|option| hit(option, flight))
}
