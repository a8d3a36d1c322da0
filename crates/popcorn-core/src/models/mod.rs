mod movie;
mod watched;

pub use movie::*;
pub use watched::*;
