mod eligibility;
mod feasibility;
mod matching;
mod ranking;
mod reroll;
mod search;
mod solver;

pub use eligibility::*;
pub use feasibility::*;
pub use matching::*;
pub use ranking::*;
pub use reroll::*;
pub use search::*;
pub use solver::*;
