pub mod types;
pub mod lexicon;
pub mod resolver;
pub mod suggest;
pub mod output;

pub use lexicon::Lexicon;
pub use resolver::resolve;
pub use suggest::suggest;
pub use types::{Compound, ParticipleInfo, VerbParse};
