use std::path::Path;

use rustc_hash::FxHashMap;

use super::Topic;
use crate::error::SemivizError;

const NMOS_TRANSISTOR: &str =
    include_str!("../../assets/topics/nmos-transistor.json");

/// Topics keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TopicStore {
    topics: FxHashMap<String, Topic>,
}

impl TopicStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the topics bundled with the crate.
    pub fn builtin() -> Result<Self, SemivizError> {
        let mut store = Self::new();
        let _ = store.insert(Self::parse(NMOS_TRANSISTOR)?);
        Ok(store)
    }

    /// Decode a single topic document.
    pub fn parse(json: &str) -> Result<Topic, SemivizError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a topic document and add it, replacing any topic with the
    /// same id. Returns the id.
    pub fn insert_json(&mut self, json: &str) -> Result<String, SemivizError> {
        let topic = Self::parse(json)?;
        let id = topic.id.clone();
        let _ = self.insert(topic);
        Ok(id)
    }

    /// Read a topic document from disk and add it. Returns the id.
    pub fn load_file(&mut self, path: &Path) -> Result<String, SemivizError> {
        let content = std::fs::read_to_string(path)?;
        let id = self.insert_json(&content)?;
        log::info!("Loaded topic {id} from {}", path.display());
        Ok(id)
    }

    /// Add a topic, returning the one it replaced, if any.
    pub fn insert(&mut self, topic: Topic) -> Option<Topic> {
        self.topics.insert(topic.id.clone(), topic)
    }

    /// Look up a topic by id.
    #[must_use]
    pub fn load_topic(&self, id: &str) -> Option<&Topic> {
        self.topics.get(id)
    }

    /// Like [`Self::load_topic`], but a missing topic is an error.
    pub fn require(&self, id: &str) -> Result<&Topic, SemivizError> {
        self.load_topic(id)
            .ok_or_else(|| SemivizError::UnknownTopic(id.to_owned()))
    }

    /// All topic ids, sorted.
    #[must_use]
    pub fn topic_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.topics.keys().cloned().collect();
        ids.sort();
        ids
    }
}
