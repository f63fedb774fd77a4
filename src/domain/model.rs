use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_unique, Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Fascinating Felines";
pub const DEFAULT_HEADLINE: &str = "Discover the World of Cats";
pub const DEFAULT_HERO_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg";

const BUILTIN_FACTS: [&str; 6] = [
    "Cats have excellent night vision and can see at one-sixth the light level required for human vision.",
    "A group of cats is called a 'clowder'.",
    "Cats spend 70% of their lives sleeping.",
    "A cat's hearing is much more sensitive than humans and dogs.",
    "Cats have over 20 vocalizations, including the meow, purr, and hiss.",
    "The first cat in space was a French cat named Felicette in 1963.",
];

const BUILTIN_BREEDS: [(&str, &str); 5] = [
    ("Siamese", "Known for their distinctive coloring and vocal nature."),
    (
        "Maine Coon",
        "One of the largest domesticated cat breeds with a distinctive physical appearance.",
    ),
    ("Persian", "Recognized for their long fur and flat faces."),
    ("Bengal", "A hybrid breed with a wild appearance resembling leopards."),
    ("Scottish Fold", "Famous for their folded ears and round faces."),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub image_ref: String,
}

impl Breed {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            description: description.into(),
            image_ref: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub title: String,
    pub headline: String,
    pub hero_image: String,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            headline: DEFAULT_HEADLINE.to_string(),
            hero_image: DEFAULT_HERO_IMAGE.to_string(),
        }
    }
}

/// Everything the page displays. Fixed once a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub page: PageInfo,
    pub facts: Vec<String>,
    pub breeds: Vec<Breed>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            page: PageInfo::default(),
            facts: builtin_facts(),
            breeds: builtin_breeds(),
        }
    }

    pub fn breed(&self, id: &str) -> Option<&Breed> {
        self.breeds.iter().find(|b| b.id == id)
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("facts", &self.facts)?;
        for fact in &self.facts {
            validate_non_empty_string("facts", fact)?;
        }
        for breed in &self.breeds {
            validate_non_empty_string("breeds.id", &breed.id)?;
        }
        validate_unique("breed id", self.breeds.iter().map(|b| b.id.as_str()))
    }
}

pub fn builtin_facts() -> Vec<String> {
    BUILTIN_FACTS.iter().map(|f| f.to_string()).collect()
}

pub fn builtin_breeds() -> Vec<Breed> {
    BUILTIN_BREEDS
        .iter()
        .map(|(name, description)| Breed::new(*name, *description))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Facts,
    Breeds,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Facts, Tab::Breeds];

    /// Text on the tab switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Facts => "Feline Facts",
            Tab::Breeds => "Cat Breeds",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Tab::Facts => "Did You Know?",
            Tab::Breeds => "Popular Cat Breeds",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tab::Facts => "Fascinating tidbits about our feline friends",
            Tab::Breeds => "Explore some well-known feline varieties",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedView {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub image_ref: String,
    pub liked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub title: String,
    pub active_tab: Tab,
    pub fact_index: usize,
    pub fact_count: usize,
    pub fact: String,
    pub breeds: Vec<BreedView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub fact_index: usize,
    pub liked: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    FactAdvanced { index: usize, fact: String },
}
