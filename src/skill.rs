//! Request envelope, spoken responses, and intent dispatch
//!
//! Dispatch walks a fixed, ordered list of handlers and invokes the first
//! one whose predicate matches; the final entry matches unconditionally.
//! Any handler error is translated to a spoken apology at this boundary and
//! never propagates raw to the host.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::SurfcastConfig;
use crate::error::GENERIC_APOLOGY;
use crate::meteo::MeteoClient;
use crate::report;
use crate::Result;

pub const WELCOME: &str = "Welcome to the Beit Yanai surf report! You can say \
    \"get the surf report\" to hear current conditions, or \"get the forecast\" \
    for today's weather.";
pub const WELCOME_REPROMPT: &str = "Say \"surf report\" to hear the latest conditions.";
pub const HELP: &str = "You can say \"get the surf report\" to hear the current wave \
    height and wind conditions at Beit Yanai, or \"get the forecast\" for today's weather.";
pub const GOODBYE: &str = "Goodbye! Enjoy the waves!";
pub const FALLBACK: &str = "Sorry, I don't know about that. Try saying \"surf report\".";

pub const SURF_REPORT_INTENT: &str = "GetSurfReportIntent";
pub const FORECAST_INTENT: &str = "GetForecastIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

/// A recognized voice command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
}

/// Inbound request from the voice platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestEnvelope {
    LaunchRequest,
    IntentRequest { intent: Intent },
    SessionEndedRequest,
}

impl RequestEnvelope {
    /// Build an intent request, mainly for tests and local drivers.
    pub fn intent<S: Into<String>>(name: S) -> Self {
        Self::IntentRequest {
            intent: Intent { name: name.into() },
        }
    }

    fn intent_name(&self) -> Option<&str> {
        match self {
            Self::IntentRequest { intent } => Some(&intent.name),
            _ => None,
        }
    }
}

/// Outbound response to the voice platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillResponse {
    /// Sentence to speak, absent for the silent session-end acknowledgement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<String>,
    /// Follow-up prompt; setting one keeps the session open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<String>,
    pub should_end_session: bool,
}

impl SkillResponse {
    /// Speak a sentence and end the session.
    pub fn speak<S: Into<String>>(speech: S) -> Self {
        Self {
            speech: Some(speech.into()),
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Add a reprompt, keeping the session open.
    #[must_use]
    pub fn with_reprompt<S: Into<String>>(mut self, reprompt: S) -> Self {
        self.reprompt = Some(reprompt.into());
        self.should_end_session = false;
        self
    }

    /// Empty acknowledgement ending the session.
    #[must_use]
    pub fn end() -> Self {
        Self {
            speech: None,
            reprompt: None,
            should_end_session: true,
        }
    }
}

/// Shared collaborators passed to every handler
pub struct SkillContext {
    pub config: SurfcastConfig,
    pub meteo: MeteoClient,
}

/// One entry in the ordered dispatch list
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Handler name used in logs
    fn name(&self) -> &'static str;

    /// Does this handler take the request?
    fn can_handle(&self, request: &RequestEnvelope) -> bool;

    async fn handle(&self, ctx: &SkillContext, request: &RequestEnvelope)
        -> Result<SkillResponse>;
}

struct LaunchHandler;

#[async_trait]
impl RequestHandler for LaunchHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn can_handle(&self, request: &RequestEnvelope) -> bool {
        matches!(request, RequestEnvelope::LaunchRequest)
    }

    async fn handle(&self, _ctx: &SkillContext, _request: &RequestEnvelope) -> Result<SkillResponse> {
        Ok(SkillResponse::speak(WELCOME).with_reprompt(WELCOME_REPROMPT))
    }
}

struct SurfReportHandler;

#[async_trait]
impl RequestHandler for SurfReportHandler {
    fn name(&self) -> &'static str {
        "surf_report"
    }

    fn can_handle(&self, request: &RequestEnvelope) -> bool {
        request.intent_name() == Some(SURF_REPORT_INTENT)
    }

    async fn handle(&self, ctx: &SkillContext, _request: &RequestEnvelope) -> Result<SkillResponse> {
        // Marine and wind fetches run concurrently; either failure fails the
        // whole report
        let (marine, wind) = tokio::try_join!(ctx.meteo.fetch_wave_heights(), ctx.meteo.fetch_wind())?;

        let now = chrono::Local::now().naive_local();
        let sentence = report::surf_report(&ctx.config.spot.name, &marine, &wind, now)?;
        Ok(SkillResponse::speak(sentence))
    }
}

struct ForecastHandler;

#[async_trait]
impl RequestHandler for ForecastHandler {
    fn name(&self) -> &'static str {
        "forecast"
    }

    fn can_handle(&self, request: &RequestEnvelope) -> bool {
        request.intent_name() == Some(FORECAST_INTENT)
    }

    async fn handle(&self, ctx: &SkillContext, _request: &RequestEnvelope) -> Result<SkillResponse> {
        let daily = ctx.meteo.fetch_daily_forecast().await?;
        let sentence = report::daily_forecast(&ctx.config.spot.name, &daily)?;
        Ok(SkillResponse::speak(sentence))
    }
}

struct HelpHandler;

#[async_trait]
impl RequestHandler for HelpHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn can_handle(&self, request: &RequestEnvelope) -> bool {
        request.intent_name() == Some(HELP_INTENT)
    }

    async fn handle(&self, _ctx: &SkillContext, _request: &RequestEnvelope) -> Result<SkillResponse> {
        Ok(SkillResponse::speak(HELP).with_reprompt(HELP))
    }
}

struct CancelAndStopHandler;

#[async_trait]
impl RequestHandler for CancelAndStopHandler {
    fn name(&self) -> &'static str {
        "cancel_and_stop"
    }

    fn can_handle(&self, request: &RequestEnvelope) -> bool {
        matches!(
            request.intent_name(),
            Some(CANCEL_INTENT) | Some(STOP_INTENT)
        )
    }

    async fn handle(&self, _ctx: &SkillContext, _request: &RequestEnvelope) -> Result<SkillResponse> {
        Ok(SkillResponse::speak(GOODBYE))
    }
}

struct FallbackHandler;

#[async_trait]
impl RequestHandler for FallbackHandler {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn can_handle(&self, request: &RequestEnvelope) -> bool {
        request.intent_name() == Some(FALLBACK_INTENT)
    }

    async fn handle(&self, _ctx: &SkillContext, _request: &RequestEnvelope) -> Result<SkillResponse> {
        Ok(SkillResponse::speak(FALLBACK).with_reprompt(FALLBACK))
    }
}

struct SessionEndedHandler;

#[async_trait]
impl RequestHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "session_ended"
    }

    fn can_handle(&self, request: &RequestEnvelope) -> bool {
        matches!(request, RequestEnvelope::SessionEndedRequest)
    }

    async fn handle(&self, _ctx: &SkillContext, _request: &RequestEnvelope) -> Result<SkillResponse> {
        info!("Session ended");
        Ok(SkillResponse::end())
    }
}

/// Catches intents no earlier handler recognized and reflects their name,
/// which keeps misrouted utterances visible during interaction-model work.
struct IntentReflectorHandler;

#[async_trait]
impl RequestHandler for IntentReflectorHandler {
    fn name(&self) -> &'static str {
        "intent_reflector"
    }

    fn can_handle(&self, request: &RequestEnvelope) -> bool {
        matches!(request, RequestEnvelope::IntentRequest { .. })
    }

    async fn handle(&self, _ctx: &SkillContext, request: &RequestEnvelope) -> Result<SkillResponse> {
        let intent_name = request.intent_name().unwrap_or("an unknown intent");
        Ok(SkillResponse::speak(format!(
            "You just triggered {intent_name}"
        )))
    }
}

/// Terminal catch-all so dispatch always produces a response.
struct UnhandledRequestHandler;

#[async_trait]
impl RequestHandler for UnhandledRequestHandler {
    fn name(&self) -> &'static str {
        "unhandled"
    }

    fn can_handle(&self, _request: &RequestEnvelope) -> bool {
        true
    }

    async fn handle(&self, _ctx: &SkillContext, _request: &RequestEnvelope) -> Result<SkillResponse> {
        Ok(SkillResponse::speak(GENERIC_APOLOGY).with_reprompt(GENERIC_APOLOGY))
    }
}

/// The skill: configuration, outbound client, and the ordered handler list
pub struct Skill {
    ctx: SkillContext,
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl Skill {
    /// Build the skill from a validated configuration.
    pub fn new(config: SurfcastConfig) -> Result<Self> {
        config.validate()?;
        let meteo = MeteoClient::new(&config)?;

        let handlers: Vec<Box<dyn RequestHandler>> = vec![
            Box::new(LaunchHandler),
            Box::new(SurfReportHandler),
            Box::new(ForecastHandler),
            Box::new(HelpHandler),
            Box::new(CancelAndStopHandler),
            Box::new(FallbackHandler),
            Box::new(SessionEndedHandler),
            Box::new(IntentReflectorHandler),
            Box::new(UnhandledRequestHandler),
        ];

        Ok(Self {
            ctx: SkillContext { config, meteo },
            handlers,
        })
    }

    /// Name of the first handler whose predicate matches.
    #[must_use]
    pub fn route(&self, request: &RequestEnvelope) -> &'static str {
        self.handlers
            .iter()
            .find(|h| h.can_handle(request))
            .map_or("unhandled", |h| h.name())
    }

    /// Dispatch a request, always producing a spoken response.
    ///
    /// Handler errors are logged and collapsed to the matching apology here;
    /// the host never sees a raw error.
    pub async fn dispatch(&self, request: &RequestEnvelope) -> SkillResponse {
        for handler in &self.handlers {
            if !handler.can_handle(request) {
                continue;
            }
            info!(handler = handler.name(), "Dispatching request");
            return match handler.handle(&self.ctx, request).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(handler = handler.name(), error = %e, "Handler failed");
                    let apology = e.user_message();
                    SkillResponse::speak(apology).with_reprompt(apology)
                }
            };
        }

        // Unreachable while the terminal catch-all is registered
        SkillResponse::speak(GENERIC_APOLOGY).with_reprompt(GENERIC_APOLOGY)
    }
}
