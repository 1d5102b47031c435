use crate::{Args, Kind, Statement};

/// Pending clauses of one statement, at most one per kind.
#[derive(Debug, Default, Clone)]
pub struct Clause {
    slots: [Option<Args>; Kind::ALL.len()],
}

impl Clause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `args` for its kind, replacing earlier arguments of that kind.
    /// Nothing is generated until [`build`](Self::build).
    pub fn set(&mut self, args: Args) -> &mut Self {
        let index = args.kind().index();
        self.slots[index] = Some(args);
        self
    }

    pub fn get(&self, kind: Kind) -> Option<&Args> {
        self.slots[kind.index()].as_ref()
    }

    pub fn is_set(&self, kind: Kind) -> bool {
        self.get(kind).is_some()
    }

    /// Generates the stored clauses in `order` and joins them with single
    /// spaces. Kinds without arguments are skipped.
    pub fn build(&self, order: &[Kind]) -> Statement {
        let mut sql = String::new();
        let mut params = vec![];

        for args in order.iter().filter_map(|kind| self.get(*kind)) {
            let fragment = args.generate();

            if !sql.is_empty() {
                sql.push(' ');
            }
            sql.push_str(&fragment.sql);
            params.extend(fragment.params);
        }

        Statement::new(sql, params)
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
