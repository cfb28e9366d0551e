use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{RequestMode, ResponseType};

use crate::config;
use crate::state::registration::{
    classify, Delivery, RegistrationDraft, ScriptReply, SubmitError, Transport,
};

impl From<gloo_net::Error> for SubmitError {
    fn from(e: gloo_net::Error) -> Self {
        SubmitError::Transport(e.to_string())
    }
}

/// Where registrations go: the sheet's Apps Script, or nowhere when no URL
/// was configured at build time.
pub enum Endpoint {
    Script(&'static str),
    Simulated,
}

impl Endpoint {
    pub fn configured() -> Self {
        match config::get_script_url() {
            Some(url) => Endpoint::Script(url),
            None => Endpoint::Simulated,
        }
    }
}

impl Transport for Endpoint {
    async fn post(&self, draft: &RegistrationDraft) -> Result<Delivery, SubmitError> {
        match self {
            Endpoint::Script(url) => post_to_script(url, draft).await,
            Endpoint::Simulated => {
                log::warn!("Google Apps Script URL not set. Simulating submission.");
                TimeoutFuture::new(config::SIMULATED_DELAY_MS).await;
                Ok(Delivery::Simulated)
            }
        }
    }
}

async fn post_to_script(url: &str, draft: &RegistrationDraft) -> Result<Delivery, SubmitError> {
    // Apps Script does not send CORS headers, so the response is usually opaque.
    let response = Request::post(url)
        .mode(RequestMode::NoCors)
        .json(draft)
        .map_err(|e| SubmitError::Request(e.to_string()))?
        .send()
        .await?;

    let opaque = response.type_() == ResponseType::Opaque;
    let reply = if opaque {
        None
    } else {
        response.json::<ScriptReply>().await.ok()
    };
    classify(opaque, response.status(), reply.as_ref())
}
