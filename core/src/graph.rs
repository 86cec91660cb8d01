use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(String);

macro_rules! string_id {
    ($id:ident) => {
        impl $id {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $id {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $id {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(PersonId);
string_id!(FilmId);

/// A film paired with one of its stars.
pub type NeighborPair = (FilmId, PersonId);

/// One hop of a connection: `person` was reached through `film`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub film: FilmId,
    pub person: PersonId,
}

impl PathStep {
    pub fn new(film: FilmId, person: PersonId) -> Self {
        Self { film, person }
    }
}

impl From<NeighborPair> for PathStep {
    fn from((film, person): NeighborPair) -> Self {
        Self { film, person }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: String,
    pub films: BTreeSet<FilmId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    pub year: String,
    pub stars: BTreeSet<PersonId>,
}

type NameIndex = FxHashMap<String, BTreeSet<PersonId>>;

/// People, films and the cast relation between them.
///
/// Person-to-person adjacency is never stored: two people are adjacent iff they
/// share a film, and [`GraphStore::neighbors_of`] derives that on demand. The
/// store is populated once by a loader and only read afterwards.
#[derive(Debug, Default)]
pub struct GraphStore {
    people: FxHashMap<PersonId, Person>,
    films: FxHashMap<FilmId, Film>,
    names: NameIndex,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person, or refreshes name and birth of a known one. Existing
    /// film links survive a refresh.
    pub fn insert_person(&mut self, id: PersonId, name: impl Into<String>, birth: impl Into<String>) {
        let name = name.into();
        let birth = birth.into();

        if let Some(previous) = self.people.get(&id) {
            let previous_key = previous.name.to_lowercase();
            if let Some(ids) = self.names.get_mut(&previous_key) {
                ids.remove(&id);
                if ids.is_empty() {
                    self.names.remove(&previous_key);
                }
            }
        }

        self.names
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.clone());

        let person = self.people.entry(id.clone()).or_insert_with(|| Person {
            id,
            name: String::new(),
            birth: String::new(),
            films: BTreeSet::new(),
        });
        person.name = name;
        person.birth = birth;
    }

    pub fn insert_film(&mut self, id: FilmId, title: impl Into<String>, year: impl Into<String>) {
        let film = self.films.entry(id.clone()).or_insert_with(|| Film {
            id,
            title: String::new(),
            year: String::new(),
            stars: BTreeSet::new(),
        });
        film.title = title.into();
        film.year = year.into();
    }

    /// Records that `person_id` stars in `film_id`. Returns `false` without
    /// touching the store when either side is unknown.
    pub fn link_star(&mut self, person_id: &PersonId, film_id: &FilmId) -> bool {
        let (Some(person), Some(film)) = (self.people.get_mut(person_id), self.films.get_mut(film_id))
        else {
            return false;
        };

        person.films.insert(film_id.clone());
        film.stars.insert(person_id.clone());
        true
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn film(&self, id: &FilmId) -> Option<&Film> {
        self.films.get(id)
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn film_count(&self) -> usize {
        self.films.len()
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Every `(film, star)` pair over the films `person_id` appears in.
    ///
    /// The queried person is not filtered out, so each of their films also
    /// yields a pair pointing back at them. Unknown ids and people without
    /// films produce an empty set.
    pub fn neighbors_of(&self, person_id: &PersonId) -> BTreeSet<NeighborPair> {
        let Some(person) = self.people.get(person_id) else {
            return BTreeSet::new();
        };

        person
            .films
            .iter()
            .filter_map(|film_id| self.films.get(film_id))
            .flat_map(|film| {
                film.stars
                    .iter()
                    .map(move |star| (film.id.clone(), star.clone()))
            })
            .collect()
    }

    /// Case-insensitive name lookup. Several people may share a name.
    pub fn person_ids_for_name(&self, name: &str) -> BTreeSet<PersonId> {
        self.names
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}
