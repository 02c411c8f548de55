//! Skill documents and activation banners
//!
//! Skills are `SKILL.md` files, one per directory under a skills root:
//!
//! ```text
//! .claude/skills/
//! ├── error-tracking/SKILL.md
//! └── route-tester/SKILL.md
//! ```
//!
//! The [`BannerInjector`] inserts a banner right after each document's
//! frontmatter so the assistant visibly announces when a skill is loaded.

pub mod banner;
pub mod discovery;
pub mod document;
pub mod frontmatter;
pub mod injector;

pub use banner::{BANNER_SENTINEL, has_banner, render_banner};
pub use discovery::{SKILL_FILE_NAME, find_skill_documents};
pub use document::SkillDocument;
pub use frontmatter::{FrontmatterScan, FrontmatterSpan};
pub use injector::{BannerInjector, InjectOutcome, InjectionEntry, InjectionSummary, InjectorConfig};
