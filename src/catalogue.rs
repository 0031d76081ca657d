use crate::error::CatalogueError;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

// =============================================================================
// Entries and topics
// =============================================================================

/// A demonstration procedure. It writes its output to the given sink.
pub type Action = fn(&mut dyn Write) -> io::Result<()>;

lazy_static::lazy_static! {
    static ref ID_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$")
        .expect("entry id pattern compiles");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Basics,
    FlowControl,
    CompositeData,
    MethodsAndTraits,
    Strings,
}

impl Topic {
    /// Topic named by the numeric prefix of an id, e.g. `"3.11"` -> `CompositeData`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.split('.').next()? {
            "1" => Some(Topic::Basics),
            "2" => Some(Topic::FlowControl),
            "3" => Some(Topic::CompositeData),
            "4" => Some(Topic::MethodsAndTraits),
            "5" => Some(Topic::Strings),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Basics => "basics",
            Topic::FlowControl => "flow-control",
            Topic::CompositeData => "composite-data",
            Topic::MethodsAndTraits => "methods-and-traits",
            Topic::Strings => "strings",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct Entry {
    id: String,
    title: String,
    topic: Option<Topic>,
    action: Action,
}

impl Entry {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn topic(&self) -> Option<Topic> {
        self.topic
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.action)(out)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("topic", &self.topic)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Catalogue
// =============================================================================

/// Insertion-ordered registry of demonstrations, keyed by id.
#[derive(Debug, Default)]
pub struct Catalogue {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, action: Action) -> Result<(), CatalogueError> {
        self.register_titled(id, "", action)
    }

    pub fn register_titled(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        action: Action,
    ) -> Result<(), CatalogueError> {
        let id = id.into();
        if !ID_PATTERN.is_match(&id) {
            return Err(CatalogueError::invalid_id(id));
        }
        if self.index.contains_key(&id) {
            return Err(CatalogueError::duplicate_id(id));
        }

        tracing::trace!(id = %id, "registering entry");
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(Entry {
            topic: Topic::from_id(&id),
            id,
            title: title.into(),
            action,
        });
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Entry, CatalogueError> {
        self.index
            .get(id)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| CatalogueError::not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn list_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn by_topic(&self, topic: Topic) -> impl Iterator<Item = &Entry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.topic == Some(topic))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn say_a(out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "a")
    }

    fn say_b(out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "b")
    }

    fn silent(_out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn output_of(entry: &Entry) -> String {
        let mut buf = Vec::new();
        entry.run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list_ids_preserves_registration_order() {
        let mut catalogue = Catalogue::new();
        catalogue.register("a", say_a).unwrap();
        catalogue.register("b", say_b).unwrap();
        catalogue.register("c", silent).unwrap();

        assert_eq!(catalogue.list_ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        // restartable
        assert_eq!(catalogue.list_ids().count(), 3);
    }

    #[test]
    fn test_get_returns_registered_entry() {
        let mut catalogue = Catalogue::new();
        catalogue.register_titled("2.7", "pow with else", say_a).unwrap();
        catalogue.register("3.1", say_b).unwrap();

        let entry = catalogue.get("2.7").unwrap();
        assert_eq!(entry.id(), "2.7");
        assert_eq!(entry.title(), "pow with else");
        assert_eq!(entry.action() as usize, say_a as Action as usize);
        assert_eq!(output_of(entry), "a\n");
        assert_eq!(output_of(catalogue.get("3.1").unwrap()), "b\n");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalogue = Catalogue::new();
        catalogue.register("a", say_a).unwrap();
        catalogue.register("b", say_b).unwrap();

        let err = catalogue.register("a", say_b).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateId { ref id } if id == "a"));

        // original entry untouched
        assert_eq!(output_of(catalogue.get("a").unwrap()), "a\n");
        assert_eq!(catalogue.len(), 2);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let catalogue = Catalogue::new();
        assert!(catalogue.is_empty());
        let err = catalogue.get("nope").unwrap_err();
        assert!(matches!(err, CatalogueError::NotFound { ref id } if id == "nope"));
    }

    #[test]
    fn test_invalid_ids_rejected() {
        let mut catalogue = Catalogue::new();
        for bad in ["", " 1.1", ".hidden", "two words"] {
            assert!(matches!(
                catalogue.register(bad, silent),
                Err(CatalogueError::InvalidId { .. })
            ));
        }
        assert!(catalogue.register("square-root", silent).is_ok());
        assert!(catalogue.register("snake_case.v2", silent).is_ok());
    }

    #[test]
    fn test_topic_from_id() {
        assert_eq!(Topic::from_id("1.5"), Some(Topic::Basics));
        assert_eq!(Topic::from_id("3.11"), Some(Topic::CompositeData));
        assert_eq!(Topic::from_id("5"), Some(Topic::Strings));
        assert_eq!(Topic::from_id("square-root"), None);
        assert_eq!(Topic::MethodsAndTraits.to_string(), "methods-and-traits");
    }

    #[test]
    fn test_by_topic_filters_in_order() {
        let mut catalogue = Catalogue::new();
        catalogue.register("2.1", silent).unwrap();
        catalogue.register("3.1", silent).unwrap();
        catalogue.register("2.2", silent).unwrap();
        catalogue.register("misc", silent).unwrap();

        let flow: Vec<_> = catalogue
            .by_topic(Topic::FlowControl)
            .map(|entry| entry.id())
            .collect();
        assert_eq!(flow, vec!["2.1", "2.2"]);
        assert!(catalogue.contains("misc"));
        assert_eq!(catalogue.get("misc").unwrap().topic(), None);
    }
}
