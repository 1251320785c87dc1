use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED: &str = include_str!("../content/site.json");

const MONTHS_PT: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("navigation links to #{0} more than once")]
    DuplicateNavTarget(SectionId),
    #[error("section #{0} has no cards")]
    EmptySection(SectionId),
}

/// The six in-page jump targets, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    #[serde(rename = "gastronomia")]
    Dining,
    #[serde(rename = "cinema")]
    Cinema,
    #[serde(rename = "eventos")]
    Events,
    #[serde(rename = "ofertas")]
    Offers,
    #[serde(rename = "visitar")]
    Visit,
    #[serde(rename = "servicos")]
    Services,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Dining,
        SectionId::Cinema,
        SectionId::Events,
        SectionId::Offers,
        SectionId::Visit,
        SectionId::Services,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Dining => "gastronomia",
            SectionId::Cinema => "cinema",
            SectionId::Events => "eventos",
            SectionId::Offers => "ofertas",
            SectionId::Visit => "visitar",
            SectionId::Services => "servicos",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(default)]
    pub label: Option<String>,
    pub target: SectionId,
}

impl NavItem {
    /// Explicit label, or the anchor with its first letter upper-cased.
    pub fn label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => capitalize(self.target.anchor()),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.target.anchor())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub hero_title: String,
    pub tagline: String,
    pub hero_image_url: String,
    pub hero_image_alt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSection<T> {
    pub heading: SectionHeading,
    pub items: Vec<T>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentCard {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventCard {
    pub title: String,
    pub image_url: String,
    pub date: NaiveDate,
}

impl EventCard {
    pub fn date_label(&self) -> String {
        format_event_date(self.date)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfoLine {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisitSection {
    pub heading: SectionHeading,
    pub info_title: String,
    pub hours: Vec<InfoLine>,
    pub address: InfoLine,
    pub image_url: String,
    pub image_alt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    pub phone: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
    pub newsletter_placeholder: String,
    pub newsletter_button: String,
    pub address_lines: Vec<String>,
    pub copyright_holder: String,
}

impl FooterContent {
    pub fn copyright(&self, year: i32) -> String {
        format!(
            "© {} {}. Todos os direitos reservados.",
            year, self.copyright_holder
        )
    }
}

/// Everything the page displays. Built once at start-up and shared
/// read-only with every component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavItem>,
    pub dining: CardSection<ContentCard>,
    pub cinema: CardSection<ContentCard>,
    pub events: CardSection<EventCard>,
    pub offers: CardSection<ContentCard>,
    pub visit: VisitSection,
    pub services: CardSection<ServiceCard>,
    pub footer: FooterContent,
}

impl SiteContent {
    /// The copy compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for item in &self.nav {
            if !seen.insert(item.target) {
                return Err(ContentError::DuplicateNavTarget(item.target));
            }
        }

        let card_counts = [
            (SectionId::Dining, self.dining.items.len()),
            (SectionId::Cinema, self.cinema.items.len()),
            (SectionId::Events, self.events.items.len()),
            (SectionId::Offers, self.offers.items.len()),
            (SectionId::Services, self.services.items.len()),
        ];
        match card_counts.iter().find(|(_, count)| *count == 0) {
            Some((id, _)) => Err(ContentError::EmptySection(*id)),
            None => Ok(()),
        }
    }

    pub fn heading(&self, id: SectionId) -> &SectionHeading {
        match id {
            SectionId::Dining => &self.dining.heading,
            SectionId::Cinema => &self.cinema.heading,
            SectionId::Events => &self.events.heading,
            SectionId::Offers => &self.offers.heading,
            SectionId::Visit => &self.visit.heading,
            SectionId::Services => &self.services.heading,
        }
    }

    /// Number of staggered blocks under the section heading.
    pub fn card_count(&self, id: SectionId) -> usize {
        match id {
            SectionId::Dining => self.dining.items.len(),
            SectionId::Cinema => self.cinema.items.len(),
            SectionId::Events => self.events.items.len(),
            SectionId::Offers => self.offers.items.len(),
            // Info column and facade image
            SectionId::Visit => 2,
            SectionId::Services => self.services.items.len(),
        }
    }
}

/// Long Portuguese date, e.g. "20 de Março, 2025".
pub fn format_event_date(date: NaiveDate) -> String {
    format!(
        "{} de {}, {}",
        date.day(),
        MONTHS_PT[date.month0() as usize],
        date.year()
    )
}
