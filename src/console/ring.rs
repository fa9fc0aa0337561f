//! Bounded in-memory log store with call-site tags.

use std::collections::VecDeque;
use std::fmt::{self, Display};

use log::Level;

use crate::config::LOG_TAG_WIDTH;
use crate::timer::NANOS_PER_SEC;

const TAG_TAIL_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Fixed-width label identifying the call site of a log record.
///
/// The first character is a lowercase letter; the rest are lowercase letters
/// or digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag([u8; LOG_TAG_WIDTH]);

impl Tag {
    /// Derive the tag of a call site. Stable across runs of the same build.
    pub fn for_site(file: &str, line: u32) -> Self {
        // FNV-1a
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in file.bytes().chain(line.to_le_bytes()) {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }

        let mut tag = [0u8; LOG_TAG_WIDTH];
        tag[0] = b'a' + (hash % 26) as u8;
        hash /= 26;
        for slot in tag.iter_mut().skip(1) {
            *slot = TAG_TAIL_ALPHABET[(hash % 36) as usize];
            hash /= 36;
        }
        Tag(tag)
    }

    /// Parse a user-supplied tag, rejecting anything of the wrong shape.
    pub fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != LOG_TAG_WIDTH || !bytes[0].is_ascii_lowercase() {
            return None;
        }
        if !bytes[1..]
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return None;
        }
        let mut tag = [0u8; LOG_TAG_WIDTH];
        tag.copy_from_slice(bytes);
        Some(Tag(tag))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII ever gets in.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub nanos: u64,
    pub level: Level,
    pub tag: Tag,
    pub file: String,
    pub line: u32,
    pub message: String,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.nanos as f64 / NANOS_PER_SEC as f64;
        write!(
            f,
            "[{secs:.6} #{}] {:<5} {}:{} {}",
            self.tag, self.level, self.file, self.line, self.message
        )
    }
}

/// Append-only ring of log entries plus the set of watched tags.
pub struct LogRing {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    dropped: u64,
    watches: Vec<Tag>,
    watch_hits: u64,
}

impl LogRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            dropped: 0,
            watches: Vec::new(),
            watch_hits: 0,
        }
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict();
    }

    /// Append an entry, evicting the oldest when full.
    ///
    /// Returns `true` when the entry's tag is being watched.
    pub fn push(&mut self, entry: LogEntry) -> bool {
        let watched = self.is_watched(entry.tag);
        if watched {
            self.watch_hits += 1;
        }
        self.entries.push_back(entry);
        self.evict();
        watched
    }

    fn evict(&mut self) {
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.dropped += 1;
        }
    }

    pub fn set_watch(&mut self, tag: Tag, flag: bool) {
        let present = self.watches.contains(&tag);
        if flag && !present {
            self.watches.push(tag);
        } else if !flag && present {
            self.watches.retain(|watched| *watched != tag);
        }
    }

    pub fn is_watched(&self, tag: Tag) -> bool {
        self.watches.contains(&tag)
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn with_tag(&self, tag: Tag) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.tag == tag)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries evicted so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn watch_hits(&self) -> u64 {
        self.watch_hits
    }
}
