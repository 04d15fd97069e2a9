//! Offline venue search over a configured catalog
//!
//! Stands in for the restaurant search service: venues listed under
//! `[[venues]]` in the config are matched against each proposal.

use async_trait::async_trait;
use kanji_application::ports::venue_search::{VenueSearch, VenueSearchError};
use kanji_domain::{VenueCandidate, VenueQuery};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVenue {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub budget_label: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
}

impl CatalogVenue {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            budget_label: None,
            area: None,
            cuisines: Vec::new(),
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_budget_label(mut self, label: impl Into<String>) -> Self {
        self.budget_label = Some(label.into());
        self
    }

    /// Venues without an area match any area
    fn in_area(&self, area: Option<&str>) -> bool {
        match (area, self.area.as_deref()) {
            (Some(wanted), Some(own)) => own.contains(wanted),
            _ => true,
        }
    }

    fn serves_any(&self, cuisines: &[String]) -> bool {
        cuisines
            .iter()
            .any(|wanted| self.cuisines.iter().any(|own| own == wanted))
    }

    fn to_candidate(&self) -> VenueCandidate {
        let candidate = VenueCandidate::new(self.name.clone(), self.url.clone());
        match &self.budget_label {
            Some(label) => candidate.with_budget_label(label.clone()),
            None => candidate,
        }
    }
}

/// [`VenueSearch`] over a fixed list of venues
pub struct CatalogVenueSearch {
    venues: Vec<CatalogVenue>,
}

impl CatalogVenueSearch {
    pub fn new(venues: Vec<CatalogVenue>) -> Self {
        Self { venues }
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Venues for `query`, in catalog order
    ///
    /// Area filters first. Among those, venues serving one of the wanted
    /// cuisines are preferred; when none does, the area matches are used.
    fn matches(&self, query: &VenueQuery) -> Vec<&CatalogVenue> {
        let in_area: Vec<&CatalogVenue> = self
            .venues
            .iter()
            .filter(|v| v.in_area(query.area.as_deref()))
            .collect();

        if query.cuisine.is_empty() {
            return in_area;
        }

        let by_cuisine: Vec<&CatalogVenue> = in_area
            .iter()
            .copied()
            .filter(|v| v.serves_any(&query.cuisine))
            .collect();
        if by_cuisine.is_empty() {
            in_area
        } else {
            by_cuisine
        }
    }
}

#[async_trait]
impl VenueSearch for CatalogVenueSearch {
    async fn search(&self, query: &VenueQuery) -> Result<Vec<VenueCandidate>, VenueSearchError> {
        let found: Vec<VenueCandidate> = self
            .matches(query)
            .into_iter()
            .take(query.size)
            .map(CatalogVenue::to_candidate)
            .collect();
        debug!(
            "Catalog search on {} in {:?}: {} of {} venues",
            query.date,
            query.area,
            found.len(),
            self.venues.len()
        );
        Ok(found)
    }
}
