use crc32fast::Hasher;

use crate::document::Document;

/// Derive a document id from a stable key (CRC32 hex).
pub fn document_id(key: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Mints page and element ids as `"{seed}-{n}"`, where the seed is the
/// owning document's id. The counter only ever moves forward.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(key: &str) -> Self {
        Self {
            seed: document_id(key),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Continue the sequence of a loaded document: scans its page and
    /// element ids for the largest counter under this seed, so a live id is
    /// never issued twice.
    pub fn resuming(seed: String, document: &Document) -> Self {
        let mut generator = Self::from_seed(seed);
        let prefix = format!("{}-", generator.seed);
        for page in &document.pages {
            generator.observe(&page.id, &prefix);
            for element in &page.elements {
                generator.observe(&element.id, &prefix);
            }
        }
        generator
    }

    fn observe(&mut self, id: &str, prefix: &str) {
        if let Some(suffix) = id.strip_prefix(prefix) {
            if let Ok(count) = suffix.parse::<u32>() {
                self.count = self.count.max(count);
            }
        }
    }

    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_is_deterministic() {
        assert_eq!(document_id("Summer Album"), document_id("Summer Album"));
        assert_ne!(document_id("Summer Album"), document_id("Winter Album"));
    }

    #[test]
    fn test_ids_count_up_under_one_seed() {
        let mut generator = IdGenerator::new("Summer Album");
        let seed = generator.seed().to_string();

        assert_eq!(generator.new_id(), format!("{}-1", seed));
        assert_eq!(generator.new_id(), format!("{}-2", seed));
        assert_eq!(generator.new_id(), format!("{}-3", seed));
    }

    #[test]
    fn test_resuming_skips_live_ids() {
        let mut document = Document::new("Summer Album");
        let seed = document.id.clone();
        document.pages[0].id = format!("{}-9", seed);

        let mut generator = IdGenerator::resuming(seed.clone(), &document);
        assert_eq!(generator.new_id(), format!("{}-10", seed));
    }

    #[test]
    fn test_resuming_ignores_foreign_seeds() {
        let mut document = Document::new("Summer Album");
        let seed = document.id.clone();
        document.pages[0].id = "elsewhere-40".to_string();

        let mut generator = IdGenerator::resuming(seed.clone(), &document);
        assert_eq!(generator.new_id(), format!("{}-1", seed));
    }
}
