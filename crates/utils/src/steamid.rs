//! SteamID64 validation and profile name lookup

use std::thread;
use std::time::Duration;

use cs2utils_core::host::Host;
use cs2utils_core::tasks::TaskSender;
use tracing::{instrument, trace, warn};

use crate::error::{UtilsError, UtilsResult};

/// Lowest valid individual-account SteamID64
pub const MIN_STEAM_ID: u64 = 76561197960265728;

/// Number of decimal digits in a SteamID64
pub const STEAM_ID_DIGITS: usize = 17;

/// Public Steam community profile base
pub const DEFAULT_PROFILE_URL: &str = "https://steamcommunity.com/profiles";

/// Default bound on a profile request
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Check a numeric SteamID64
pub fn is_steam_id(steam_id: u64) -> bool {
    // every 17-digit number at or above the minimum; u64 tops out at 20 digits
    (MIN_STEAM_ID..100_000_000_000_000_000).contains(&steam_id)
}

/// Check a SteamID64 in decimal string form
pub fn is_steam_id_str(steam_id: &str) -> bool {
    steam_id.len() == STEAM_ID_DIGITS
        && steam_id.bytes().all(|b| b.is_ascii_digit())
        && steam_id.parse::<u64>().is_ok_and(|id| id >= MIN_STEAM_ID)
}

/// Blocking client for Steam community profile pages
#[derive(Debug, Clone)]
pub struct SteamProfileClient {
    agent: ureq::Agent,
    base_url: String,
}

impl SteamProfileClient {
    pub fn new() -> Self {
        Self::with_options(DEFAULT_PROFILE_URL, DEFAULT_LOOKUP_TIMEOUT)
    }

    /// Client for a custom profile base URL and request timeout
    pub fn with_options(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// XML profile URL for a SteamID64
    pub fn profile_url(&self, steam_id: u64) -> String {
        format!("{}/{}/?xml=1", self.base_url, steam_id)
    }

    /// Fetch the profile display name
    #[instrument(skip(self))]
    pub fn fetch_player_name(&self, steam_id: u64) -> UtilsResult<String> {
        let response = self.agent.get(&self.profile_url(steam_id)).call()?;
        let body = response.into_string()?;
        read_profile_name(&body)
    }

    /// Profile display name, or the SteamID in decimal on any failure
    pub fn player_name(&self, steam_id: u64) -> String {
        match self.fetch_player_name(steam_id) {
            Ok(name) => name,
            Err(e) => {
                warn!("Profile lookup for {} failed: {}", steam_id, e);
                steam_id.to_string()
            }
        }
    }

    /// Look up the name on a background thread
    ///
    /// `callback` runs on the main thread at the next frame after the
    /// request completes, with the same fallback as [`player_name`](Self::player_name).
    pub fn player_name_deferred<F>(&self, steam_id: u64, sender: TaskSender, callback: F)
    where
        F: FnOnce(&dyn Host, String) + Send + 'static,
    {
        let client = self.clone();
        thread::spawn(move || {
            let name = client.player_name(steam_id);
            trace!("Delivering profile name for {} next frame", steam_id);
            if let Err(e) = sender.queue_blocking(move |host| callback(host, name)) {
                warn!("Dropped profile name for {}: {}", steam_id, e);
            }
        });
    }
}

impl Default for SteamProfileClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the display name from a profile XML document
///
/// Returns the text of the first `<steamID>` element, with CDATA unwrapped
/// and entities decoded. A malformed document or a blank name yields `None`.
pub fn parse_profile_name(xml: &str) -> Option<String> {
    read_profile_name(xml).ok()
}

fn read_profile_name(xml: &str) -> UtilsResult<String> {
    let doc = roxmltree::Document::parse(xml)?;
    let node = doc
        .descendants()
        .find(|n| n.has_tag_name("steamID"))
        .ok_or(UtilsError::MissingName)?;

    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    let name = text.trim();
    if name.is_empty() {
        return Err(UtilsError::MissingName);
    }
    Ok(name.to_string())
}
