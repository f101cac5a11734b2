//! Node id generation strategies.
//!
//! Element-stream builds have no stable positional anchor, so node ids come
//! from a pluggable generator: random uuids for production uniqueness, or a
//! deterministic variant when equality of rebuilt forests matters (tests,
//! golden files). Line-based builds bypass this entirely and derive ids from
//! line indices.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use xxhash_rust::xxh3::xxh3_64;

/// Strategy for generating node ids during element-stream builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Random uuid v4 per node. Unique, not reproducible across builds.
    #[default]
    Random,
    /// `node-{n}` sequence counter. Fully deterministic.
    Sequential,
    /// xxh3 hash of node text plus an occurrence counter. Deterministic and
    /// content-addressed, so unchanged content keeps its id across rebuilds.
    ContentHash,
}

/// Generates one id per created node within a single build.
pub trait IdGenerator {
    fn next_id(&mut self, text: &str) -> String;
}

/// Random uuid ids (production default).
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self, _text: &str) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Monotonic `node-{n}` ids.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, _text: &str) -> String {
        let id = format!("node-{}", self.counter);
        self.counter += 1;
        id
    }
}

/// Content-hash ids. The occurrence counter disambiguates repeated text.
#[derive(Debug, Default)]
pub struct ContentHashIdGenerator {
    counter: u64,
}

impl IdGenerator for ContentHashIdGenerator {
    fn next_id(&mut self, text: &str) -> String {
        let hash = xxh3_64(text.as_bytes());
        let id = format!("{hash:016x}-{}", self.counter);
        self.counter += 1;
        id
    }
}

impl IdStrategy {
    /// Instantiate a fresh generator for one build.
    #[must_use]
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Random => Box::new(RandomIdGenerator),
            Self::Sequential => Box::new(SequentialIdGenerator::default()),
            Self::ContentHash => Box::new(ContentHashIdGenerator::default()),
        }
    }
}
