use crate::id_gen::IdGenerator;
use std::fmt::{self, Display, Formatter};

/// The part of a [`CompositeRecord`] that carries its unique id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRecord {
    id: usize,
}

impl SubRecord {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Display for SubRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A record owning a [`SubRecord`] with an id taken from an [`IdGenerator`].
#[derive(Debug, PartialEq, Eq)]
pub struct CompositeRecord {
    sub: SubRecord,
}

impl CompositeRecord {
    /// Takes the next id from `id_gen`.
    pub fn new(id_gen: &mut IdGenerator) -> Self {
        Self {
            sub: SubRecord { id: id_gen.gen() },
        }
    }

    /// Creates `count` records one after another, in creation order.
    pub fn sequence(id_gen: &mut IdGenerator, count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::new(id_gen)).collect()
    }

    pub fn sub(&self) -> &SubRecord {
        &self.sub
    }

    /// Returns the auxiliary view of this record.
    /// It cannot outlive the record it points back to.
    pub fn aux(&self) -> AuxRecord<'_> {
        AuxRecord { owner: self }
    }
}

/// Displays the id of the [`CompositeRecord`] it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct AuxRecord<'a> {
    owner: &'a CompositeRecord,
}

impl<'a> AuxRecord<'a> {
    pub const PREFIX: &'static str = "ID: ";

    pub fn owner(&self) -> &'a CompositeRecord {
        self.owner
    }

    /// Returns `"ID: <id>"`, where `<id>` is the owner's sub record id.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<'a> Display for AuxRecord<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.owner.sub)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sub_display() {
        let mut id_gen = IdGenerator::starting_at(42);
        let record = CompositeRecord::new(&mut id_gen);

        assert_eq!(record.sub().id(), 42);
        assert_eq!(record.sub().to_string(), "42");
    }

    #[test]
    fn new_consumes_one_id() {
        let mut id_gen = IdGenerator::default();
        let first = CompositeRecord::new(&mut id_gen);
        let second = CompositeRecord::new(&mut id_gen);

        assert_eq!(first.sub().id(), 0);
        assert_eq!(second.sub().id(), 1);
        assert_eq!(id_gen.peek(), 2);
    }

    #[test]
    fn aux_render() {
        let mut id_gen = IdGenerator::default();
        let _ = CompositeRecord::new(&mut id_gen);
        let second = CompositeRecord::new(&mut id_gen);

        assert_eq!(second.aux().render(), "ID: 1");

        let mut id_gen = IdGenerator::starting_at(1000);
        let record = CompositeRecord::new(&mut id_gen);
        assert_eq!(record.aux().render(), "ID: 1000");
    }

    #[test]
    fn aux_render_idempotent() {
        let mut id_gen = IdGenerator::starting_at(5);
        let record = CompositeRecord::new(&mut id_gen);
        let aux = record.aux();

        assert_eq!(aux.render(), aux.render());
        assert_eq!(aux.render(), record.aux().render());
        assert!(std::ptr::eq(aux.owner(), &record));
    }

    #[test]
    fn sequence_ids() {
        let mut id_gen = IdGenerator::starting_at(3);
        let records = CompositeRecord::sequence(&mut id_gen, 5);

        let ids: Vec<_> = records.iter().map(|r| r.sub().id()).collect();
        assert_eq!(ids, &[3, 4, 5, 6, 7]);

        assert!(CompositeRecord::sequence(&mut id_gen, 0).is_empty());
        assert_eq!(id_gen.peek(), 8);
    }

    #[test]
    fn independent_generators() {
        let mut busy = IdGenerator::default();
        let _ = CompositeRecord::sequence(&mut busy, 10);

        let mut fresh = IdGenerator::default();
        let records = CompositeRecord::sequence(&mut fresh, 3);

        let ids: Vec<_> = records.iter().map(|r| r.sub().id()).collect();
        assert_eq!(ids, &[0, 1, 2]);
    }
}
