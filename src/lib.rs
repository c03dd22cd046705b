pub mod check;
pub mod error;
pub mod id_gen;
pub mod record;
