//! Random user fixtures
//!
//! Every call builds a fresh [`User`] from thread-local randomness; there
//! is no counter or cache shared between calls. Uniqueness of the email is
//! probabilistic: the local part carries 12 random hex digits, and an
//! optional run namespace makes accounts leaked by a run easy to find.

use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::domain::User;

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 10;

const NAMES: &[&str] = &[
    "Harry Potter",
    "Hermione Granger",
    "Ron Weasley",
    "Ginny Weasley",
    "Fred Weasley",
    "George Weasley",
    "Albus Dumbledore",
    "Minerva McGonagall",
    "Severus Snape",
    "Rubeus Hagrid",
    "Neville Longbottom",
    "Luna Lovegood",
    "Draco Malfoy",
    "Sirius Black",
    "Remus Lupin",
    "Nymphadora Tonks",
    "Cedric Diggory",
    "Cho Chang",
    "Dobby",
    "Kreacher",
    "Argus Filch",
    "Sybill Trelawney",
    "Gilderoy Lockhart",
    "Dolores Umbridge",
];

const DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "test.io"];

/// Source of random, valid user fixtures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestUserGenerator {
    namespace: Option<String>,
}

impl TestUserGenerator {
    /// Fresh user without a run namespace
    pub fn random() -> User {
        Self::default().generate()
    }

    /// Generator whose emails all start with `namespace`
    ///
    /// Characters outside `[a-z0-9-]` are dropped; an empty result means no
    /// namespace.
    pub fn with_namespace(namespace: &str) -> Self {
        let cleaned: String = namespace
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        Self {
            namespace: (!cleaned.is_empty()).then_some(cleaned),
        }
    }

    /// Namespace unique to this process run
    pub fn for_run() -> Self {
        let run_id = Uuid::new_v4().simple().to_string();
        Self::with_namespace(&format!("run-{}", &run_id[..8]))
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn generate(&self) -> User {
        let mut rng = rand::thread_rng();

        let name = NAMES.choose(&mut rng).copied().unwrap_or("Harry Potter");
        let domain = DOMAINS.choose(&mut rng).copied().unwrap_or("example.com");

        let handle: String = name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");
        let token = Uuid::new_v4().simple().to_string();
        let local = match &self.namespace {
            Some(ns) => format!("{}.{}.{}", ns, handle, &token[..12]),
            None => format!("{}.{}", handle, &token[..12]),
        };

        let password_len = rng.gen_range(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN);
        let password: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(password_len)
            .map(char::from)
            .collect();

        User::new(format!("{}@{}", local, domain), password, name)
    }
}
