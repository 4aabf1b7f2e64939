// Shared test helpers: a scripted in-process provider client.
//
// Each URL maps to a queue of replies so a test can describe exactly what
// every provider does, including hanging past the resolver's timeout.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use ip_lookup::{ProviderClient, ProviderError, ProviderResponse};
use url::Url;

/// What a scripted provider does when asked.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Not every test file uses every reply
pub enum Reply {
    /// Answer with this status and body.
    Respond(u16, String),
    /// Fail at the network layer.
    Unreachable,
    /// Never answer (sleeps far longer than any test timeout).
    Hang,
}

#[allow(dead_code)]
pub fn json(status: u16, body: serde_json::Value) -> Reply {
    Reply::Respond(status, body.to_string())
}

/// Replays scripted answers per URL. Unscripted URLs are unreachable.
#[derive(Default)]
pub struct ScriptedClient {
    script: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reply for `url`. The last reply for a URL repeats forever.
    pub fn on(self, url: &str, reply: Reply) -> Self {
        self.script
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self, url: &str) -> Reply {
        let mut script = self.script.lock().unwrap();
        match script.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap_or(Reply::Unreachable),
            None => Reply::Unreachable,
        }
    }
}

#[async_trait]
impl ProviderClient for ScriptedClient {
    async fn fetch(&self, url: &Url, _timeout: Duration) -> Result<ProviderResponse, ProviderError> {
        self.calls.lock().unwrap().push(url.to_string());
        // Lock is released before any await below
        let reply = self.next_reply(url.as_str());
        match reply {
            Reply::Respond(status, body) => Ok(ProviderResponse::new(status, body)),
            Reply::Unreachable => Err(ProviderError::Unreachable("connection refused".into())),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(ProviderError::Unreachable("hung request finished".into()))
            }
        }
    }
}

// Production URLs as built by the default endpoints
#[allow(dead_code)]
pub const IPAPI_OWN: &str = "https://ipapi.co/json/";
#[allow(dead_code)]
pub const IPIFY: &str = "https://api.ipify.org/?format=json";
#[allow(dead_code)]
pub const IPINFO: &str = "https://ipinfo.io/json";
#[allow(dead_code)]
pub const IPGEO: &str = "https://api.ipgeolocation.io/ipgeo";

#[allow(dead_code)]
pub fn ipapi_by_ip(ip: &str) -> String {
    format!("https://ipapi.co/{}/json/", ip)
}
