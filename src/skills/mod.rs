// Skill extraction: vocabulary validation and whole-word counting.

pub mod counter;
pub mod report;
pub mod vocabulary;

pub use counter::{count, SkillCounter};
pub use report::{SkillCount, SkillReport};
pub use vocabulary::{Vocabulary, DEFAULT_SKILLS};
