//! Country name registry and resolver.
//!
//! The three feeds disagree on how countries are named: the distance feed
//! uses short identifiers, the name feed uses the long names of its era, and
//! the border feed uses yet another set of spellings. The registry maps all
//! of them onto one canonical long name per country.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::feeds::NameRecord;

/// Short identifier used by the distance feed (for example `USA`).
pub type ShortId = String;

/// Built-in aliases from raw feed spellings to canonical names.
///
/// Later entries override earlier ones with the same alias.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("German Federal Republic", "Germany"),
    ("Macedonia (Former Yugoslav Republic of)", "Macedonia"),
    ("Bosnia-Herzegovina", "Bosnia and Herzegovina"),
    ("Bahamas", "Bahamas, The"),
    ("Zambia.", "Zambia"),
    ("US", "United States of America"),
    ("United States", "United States of America"),
    ("Greenland).", "Greenland"),
    (
        "Congo, Democratic Republic of (Zaire)",
        "Democratic Republic of the Congo",
    ),
    (
        "Congo, Democratic Republic of the",
        "Democratic Republic of the Congo",
    ),
    ("Congo, Republic of the", "Republic of the Congo"),
    ("Gambia, The", "The Gambia"),
    ("Gambia", "The Gambia"),
    ("Macedonia", "North Macedonia"),
    ("Macedonia (Former Yugoslav Republic of)", "North Macedonia"),
    ("Italy.", "Italy"),
    ("East Timor", "Timor-Leste"),
    ("UK", "United Kingdom"),
    ("Korea, North", "North Korea"),
    ("Korea, People's Republic of", "North Korea"),
    ("Korea, South", "South Korea"),
    ("Korea, Republic of", "South Korea"),
    ("UAE", "United Arab Emirates"),
    ("Turkey (Turkiye)", "Turkey"),
    ("Botswana.", "Botswana"),
    ("Myanmar (Burma)", "Burma"),
    ("Vietnam, Democratic Republic of", "Vietnam"),
    ("Cambodia (Kampuchea)", "Cambodia"),
    ("Sri Lanka (Ceylon)", "Sri Lanka"),
    ("Kyrgyz Republic", "Kyrgyzstan"),
    ("Yemen (Arab Republic of Yemen)", "Yemen"),
    ("Turkey (Ottoman Empire)", "Turkey"),
    ("Iran (Persia)", "Iran"),
    ("Zimbabwe (Rhodesia)", "Zimbabwe"),
    ("Tanzania/Tanganyika", "Tanzania"),
    ("Congo", "Republic of the Congo"),
    ("Burkina Faso (Upper Volta)", "Burkina Faso"),
    ("Belarus (Byelorussia)", "Belarus"),
    ("Russia (Soviet Union)", "Russia"),
    ("Italy/Sardinia", "Italy"),
];

/// Outcome of resolving a raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The input matched an alias or a canonical name.
    Resolved(String),
    /// Nothing matched; the raw input is carried through unchanged.
    Unresolved(String),
}

impl Resolution {
    /// The resolved name, or the raw input on a miss.
    pub fn as_str(&self) -> &str {
        match self {
            Resolution::Resolved(name) | Resolution::Unresolved(name) => name,
        }
    }

    pub fn into_name(self) -> String {
        match self {
            Resolution::Resolved(name) | Resolution::Unresolved(name) => name,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Collects name records and aliases before freezing them into a
/// [`NameRegistry`].
#[derive(Debug, Clone, Default)]
pub struct NameRegistryBuilder {
    records: Vec<NameRecord>,
    aliases: BTreeMap<String, String>,
}

impl NameRegistryBuilder {
    /// Builder with no aliases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded with [`DEFAULT_ALIASES`].
    pub fn with_default_aliases() -> Self {
        DEFAULT_ALIASES
            .iter()
            .fold(Self::new(), |builder, (alias, canonical)| {
                builder.alias(*alias, *canonical)
            })
    }

    /// Map `alias` onto `canonical`, replacing any earlier mapping for `alias`.
    pub fn alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), canonical.into());
        self
    }

    /// Register a short identifier and the long name the name feed gives it.
    pub fn record(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.records.push(NameRecord::new(id, name));
        self
    }

    /// Register every record from the name feed, in order.
    pub fn records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = NameRecord>,
    {
        self.records.extend(records);
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> NameRegistry {
        let aliases = collapse_alias_chains(self.aliases);

        let mut name_to_id: HashMap<String, ShortId> = HashMap::new();
        let mut ids: BTreeSet<ShortId> = BTreeSet::new();
        let mut registered_names: BTreeSet<String> = BTreeSet::new();
        for record in self.records {
            ids.insert(record.id.clone());
            registered_names.insert(record.name.clone());
            name_to_id.insert(record.name, record.id);
        }

        // A canonical name the name feed never spells out inherits the
        // identifier of one of its aliases.
        for (alias, canonical) in &aliases {
            if name_to_id.contains_key(canonical) {
                continue;
            }
            if let Some(id) = name_to_id.get(alias).cloned() {
                name_to_id.insert(canonical.clone(), id);
            }
        }

        let countries: BTreeSet<String> = registered_names
            .iter()
            .map(|name| aliases.get(name).unwrap_or(name).clone())
            .collect();

        let mut folded: HashMap<String, String> = HashMap::new();
        let mut canonical_names: Vec<String> = Vec::new();
        let targets: BTreeSet<&String> = aliases.values().collect();
        let candidates = targets.into_iter().chain(
            registered_names
                .iter()
                .filter(|name| !aliases.contains_key(*name)),
        );
        for name in candidates {
            let key = name.to_lowercase();
            if folded.contains_key(&key) {
                continue;
            }
            folded.insert(key, name.clone());
            canonical_names.push(name.clone());
        }
        canonical_names.sort();

        let mut id_to_name: HashMap<ShortId, String> = HashMap::new();
        let mut sorted_names: Vec<(&String, &ShortId)> = name_to_id.iter().collect();
        sorted_names.sort();
        // Aliased spellings first so an exact canonical registration wins.
        for (name, id) in sorted_names.iter().filter(|(name, _)| aliases.contains_key(*name)) {
            id_to_name.insert((*id).clone(), aliases[*name].clone());
        }
        for (name, id) in sorted_names.iter().filter(|(name, _)| !aliases.contains_key(*name)) {
            id_to_name.insert((*id).clone(), (*name).clone());
        }

        debug!(
            ids = ids.len(),
            names = name_to_id.len(),
            aliases = aliases.len(),
            canonical = canonical_names.len(),
            "built name registry"
        );

        NameRegistry {
            aliases,
            name_to_id,
            id_to_name,
            ids,
            folded,
            canonical_names,
            countries,
        }
    }
}

/// Point every alias at a name that is not itself an alias. Cycles stop at
/// the last name visited.
fn collapse_alias_chains(aliases: BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut collapsed = BTreeMap::new();
    for (alias, target) in &aliases {
        let mut target = target;
        let mut hops = 0;
        while let Some(next) = aliases.get(target) {
            if hops >= aliases.len() || next == alias {
                break;
            }
            target = next;
            hops += 1;
        }
        collapsed.insert(alias.clone(), target.clone());
    }
    collapsed
}

/// Frozen mapping between short identifiers, long names, and aliases.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    aliases: BTreeMap<String, String>,
    name_to_id: HashMap<String, ShortId>,
    id_to_name: HashMap<ShortId, String>,
    ids: BTreeSet<ShortId>,
    folded: HashMap<String, String>,
    canonical_names: Vec<String>,
    countries: BTreeSet<String>,
}

impl NameRegistry {
    /// Resolve `raw` to its canonical name.
    ///
    /// Aliases are consulted first (exact match), then canonical names
    /// (case-insensitive, returning the registry's spelling). On a miss the
    /// input is returned unchanged; use [`NameRegistry::lookup`] to tell the
    /// two apart.
    pub fn resolve(&self, raw: &str) -> String {
        self.lookup(raw).into_name()
    }

    /// Tagged form of [`NameRegistry::resolve`].
    pub fn lookup(&self, raw: &str) -> Resolution {
        if let Some(canonical) = self.aliases.get(raw) {
            return Resolution::Resolved(canonical.clone());
        }
        if let Some(canonical) = self.folded.get(&raw.to_lowercase()) {
            return Resolution::Resolved(canonical.clone());
        }
        Resolution::Unresolved(raw.to_string())
    }

    /// Short identifier for a raw or canonical name.
    ///
    /// The canonical spelling is tried first so that every alias of a country
    /// lands on the same identifier; then the raw name as registered; then the
    /// raw name as an identifier in its own right.
    pub fn short_id(&self, name: &str) -> Option<&str> {
        if let Resolution::Resolved(canonical) = self.lookup(name) {
            if let Some(id) = self.name_to_id.get(&canonical) {
                return Some(id.as_str());
            }
        }
        if let Some(id) = self.name_to_id.get(name) {
            return Some(id.as_str());
        }
        self.ids.get(name).map(String::as_str)
    }

    /// Canonical name registered for a short identifier.
    pub fn canonical_name_for_id(&self, id: &str) -> Option<&str> {
        self.id_to_name.get(id).map(String::as_str)
    }

    /// Canonical names in sorted order.
    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.canonical_names.iter().map(String::as_str)
    }

    /// Canonical names of the countries the name feed registers, sorted.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }

    /// Alias table after chain collapsing, sorted by alias.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }

    /// Aliases that resolve to `canonical`, sorted.
    pub fn aliases_of<'a>(&'a self, canonical: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.aliases()
            .filter(move |(_, target)| *target == canonical)
            .map(|(alias, _)| alias)
    }

    /// Number of distinct short identifiers.
    pub fn id_count(&self) -> usize {
        self.ids.len()
    }
}
