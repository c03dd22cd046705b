/// Source of consecutive ids, starting at zero.
#[derive(Debug, Default)]
pub struct IdGenerator(usize);

impl IdGenerator {
    /// Creates a generator whose next id is `first`.
    pub fn starting_at(first: usize) -> Self {
        Self(first)
    }

    /// Returns the id the next call to [`IdGenerator::gen`] will produce.
    pub fn peek(&self) -> usize {
        self.0
    }

    pub fn gen(&mut self) -> usize {
        let id = self.0;
        self.0 = self.0.checked_add(1).expect("id overflow");
        id
    }
}
