//! Where departures come from: the live API or recorded files.

use crate::domain::{Departure, SiteId};

use super::client::SlClient;
use super::error::SlError;
use super::mock::MockSlClient;

/// A source of departures.
#[derive(Debug, Clone)]
pub enum DepartureSource {
    Live(SlClient),
    Mock(MockSlClient),
}

impl DepartureSource {
    /// Fetch upcoming departures for a site.
    pub async fn get_departures(&self, site: SiteId) -> Result<Vec<Departure>, SlError> {
        match self {
            DepartureSource::Live(client) => client.get_departures(site).await,
            DepartureSource::Mock(client) => client.get_departures(site).await,
        }
    }
}

impl From<SlClient> for DepartureSource {
    fn from(client: SlClient) -> Self {
        DepartureSource::Live(client)
    }
}

impl From<MockSlClient> for DepartureSource {
    fn from(client: MockSlClient) -> Self {
        DepartureSource::Mock(client)
    }
}
