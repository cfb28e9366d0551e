use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;

pub const SUCCESS_MESSAGE: &str = "Thank you! We've received your registration.";
pub const SIMULATED_MESSAGE: &str = "Form submitted successfully! (Simulation)";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Plan {
    #[default]
    #[serde(rename = "Quartz (Basic)")]
    Quartz,
    #[serde(rename = "Garnet (Silver)")]
    Garnet,
    #[serde(rename = "Diamond (Gold)")]
    Diamond,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Quartz, Plan::Garnet, Plan::Diamond];

    pub fn label(self) -> &'static str {
        match self {
            Plan::Quartz => "Quartz (Basic)",
            Plan::Garnet => "Garnet (Silver)",
            Plan::Diamond => "Diamond (Gold)",
        }
    }

    pub fn from_label(label: &str) -> Option<Plan> {
        Plan::ALL.into_iter().find(|plan| plan.label() == label)
    }
}

/// Registration form contents, posted to the sheet as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: Plan,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl RegistrationDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::Missing("name"));
        }
        if self.email.trim().is_empty() {
            return Err(DraftError::Missing("email"));
        }
        if self.phone.trim().is_empty() {
            return Err(DraftError::Missing("phone"));
        }
        match self.email.trim().split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(DraftError::InvalidEmail),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("please fill in your {0}")]
    Missing(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("a submission is already in progress")]
    InFlight,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("endpoint answered with status {0}")]
    Rejected(u16),
    #[error("script reported an error: {0}")]
    Script(String),
}

/// How a submission reached the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// No endpoint configured; nothing left the browser.
    Simulated,
    /// `no-cors` response; the browser hides status and body.
    Opaque,
    /// Readable 2xx response without an error reply.
    Confirmed,
}

impl Delivery {
    pub fn message(self) -> &'static str {
        match self {
            Delivery::Simulated => SIMULATED_MESSAGE,
            Delivery::Opaque | Delivery::Confirmed => SUCCESS_MESSAGE,
        }
    }
}

/// Reply body of the sheet's Apps Script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptReply {
    pub result: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub row: Option<u64>,
}

/// Turns what the browser let us see of a response into an outcome.
pub fn classify(
    opaque: bool,
    status: u16,
    reply: Option<&ScriptReply>,
) -> Result<Delivery, SubmitError> {
    if opaque {
        return Ok(Delivery::Opaque);
    }
    if !(200..300).contains(&status) {
        return Err(SubmitError::Rejected(status));
    }
    match reply {
        Some(reply) if reply.result == "error" => Err(SubmitError::Script(
            reply.error.clone().unwrap_or_else(|| "unknown error".to_string()),
        )),
        _ => Ok(Delivery::Confirmed),
    }
}

/// The one outbound call a registration makes.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, draft: &RegistrationDraft) -> Result<Delivery, SubmitError>;
}

pub async fn deliver<T: Transport>(
    transport: &T,
    draft: &RegistrationDraft,
) -> Result<Delivery, SubmitError> {
    let outcome = transport.post(draft).await;
    match &outcome {
        Ok(delivery) => log::info!("registration delivered ({delivery:?})"),
        Err(e) => log::error!("Error submitting form: {e}"),
    }
    outcome
}

/// Submit phase. `Success` and `Failure` are resting states that accept a
/// new submission just like `Idle`; they only differ in the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitStatus {
    pub success: bool,
    pub message: String,
}

/// Draft plus the submit state machine around it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    pub draft: RegistrationDraft,
    phase: Phase,
    status: Option<SubmitStatus>,
}

impl RegistrationForm {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// The payload `begin` would send from this state, without changing it.
    pub fn submission(&self) -> Result<RegistrationDraft, DraftError> {
        if self.is_submitting() {
            return Err(DraftError::InFlight);
        }
        self.draft.validate()?;
        Ok(self.draft.clone())
    }

    /// Validates the draft and enters `Submitting`, returning the payload to
    /// send. A rejected draft leaves the phase untouched.
    pub fn begin(&mut self) -> Result<RegistrationDraft, DraftError> {
        match self.submission() {
            Ok(payload) => {
                self.phase = Phase::Submitting;
                self.status = None;
                Ok(payload)
            }
            Err(DraftError::InFlight) => Err(DraftError::InFlight),
            Err(e) => {
                self.status = Some(SubmitStatus {
                    success: false,
                    message: capitalize(&e.to_string()),
                });
                Err(e)
            }
        }
    }

    pub fn finish(&mut self, outcome: Result<Delivery, SubmitError>) {
        match outcome {
            Ok(delivery) => {
                self.phase = Phase::Success;
                self.draft = RegistrationDraft::default();
                self.status = Some(SubmitStatus {
                    success: true,
                    message: delivery.message().to_string(),
                });
            }
            Err(_) => {
                self.phase = Phase::Failure;
                self.status = Some(SubmitStatus {
                    success: false,
                    message: FAILURE_MESSAGE.to_string(),
                });
            }
        }
    }
}

pub enum FormAction {
    Edit(Field, String),
    SelectPlan(Plan),
    Begin,
    Finish(Result<Delivery, SubmitError>),
}

impl Reducible for RegistrationForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.draft.set(field, value),
            FormAction::SelectPlan(plan) => next.draft.plan = plan,
            FormAction::Begin => {
                // Rejections are recorded in `status`.
                let _ = next.begin();
            }
            FormAction::Finish(outcome) => next.finish(outcome),
        }
        Rc::new(next)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    enum Behaviour {
        Deliver(Delivery),
        Unreachable,
    }

    struct FakeTransport {
        behaviour: Behaviour,
        sent: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn new(behaviour: Behaviour) -> Self {
            Self {
                behaviour,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for FakeTransport {
        async fn post(&self, draft: &RegistrationDraft) -> Result<Delivery, SubmitError> {
            let body = serde_json::to_string(draft).map_err(|e| SubmitError::Request(e.to_string()))?;
            self.sent.borrow_mut().push(body);
            match self.behaviour {
                Behaviour::Deliver(delivery) => Ok(delivery),
                Behaviour::Unreachable => Err(SubmitError::Transport("connection refused".into())),
            }
        }
    }

    fn aditi() -> RegistrationDraft {
        RegistrationDraft {
            name: "Aditi".into(),
            email: "a@x.com".into(),
            phone: "9999999999".into(),
            plan: Plan::Garnet,
            message: String::new(),
        }
    }

    fn run(form: &mut RegistrationForm, transport: &FakeTransport) -> Vec<Phase> {
        let mut phases = vec![form.phase()];
        let payload = form.begin().unwrap();
        phases.push(form.phase());
        let outcome = block_on(deliver(transport, &payload));
        form.finish(outcome);
        phases.push(form.phase());
        phases
    }

    #[test]
    fn successful_submit_clears_the_draft() {
        let transport = FakeTransport::new(Behaviour::Deliver(Delivery::Opaque));
        let mut form = RegistrationForm {
            draft: aditi(),
            ..Default::default()
        };

        let phases = run(&mut form, &transport);

        assert_eq!(phases, vec![Phase::Idle, Phase::Submitting, Phase::Success]);
        assert_eq!(
            form.draft,
            RegistrationDraft {
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                plan: Plan::Quartz,
                message: String::new(),
            }
        );
        let status = form.status().unwrap();
        assert!(status.success);
        assert_eq!(status.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn failed_submit_keeps_the_draft() {
        let transport = FakeTransport::new(Behaviour::Unreachable);
        let mut form = RegistrationForm {
            draft: aditi(),
            ..Default::default()
        };

        let phases = run(&mut form, &transport);

        assert_eq!(phases, vec![Phase::Idle, Phase::Submitting, Phase::Failure]);
        assert_eq!(form.draft, aditi());
        let status = form.status().unwrap();
        assert!(!status.success);
        assert_eq!(status.message, FAILURE_MESSAGE);
    }

    #[test]
    fn failed_draft_can_be_resubmitted() {
        let mut form = RegistrationForm {
            draft: aditi(),
            ..Default::default()
        };
        run(&mut form, &FakeTransport::new(Behaviour::Unreachable));
        run(&mut form, &FakeTransport::new(Behaviour::Deliver(Delivery::Confirmed)));

        assert_eq!(form.phase(), Phase::Success);
        assert_eq!(form.draft, RegistrationDraft::default());
    }

    #[test]
    fn simulated_delivery_says_so() {
        let mut form = RegistrationForm {
            draft: aditi(),
            ..Default::default()
        };
        run(&mut form, &FakeTransport::new(Behaviour::Deliver(Delivery::Simulated)));

        assert_eq!(form.status().unwrap().message, SIMULATED_MESSAGE);
    }

    #[test]
    fn payload_uses_plan_labels() {
        let transport = FakeTransport::new(Behaviour::Deliver(Delivery::Opaque));
        block_on(deliver(&transport, &aditi())).unwrap();

        let sent: serde_json::Value = serde_json::from_str(&transport.sent.borrow()[0]).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "name": "Aditi",
                "email": "a@x.com",
                "phone": "9999999999",
                "plan": "Garnet (Silver)",
                "message": "",
            })
        );
    }

    #[test]
    fn second_begin_while_in_flight_is_refused() {
        let mut form = RegistrationForm {
            draft: aditi(),
            ..Default::default()
        };
        form.begin().unwrap();

        assert_eq!(form.begin(), Err(DraftError::InFlight));
        assert!(form.is_submitting());
    }

    #[test]
    fn incomplete_draft_never_leaves_idle() {
        let mut form = RegistrationForm::default();
        form.draft.name = "Rohan".into();

        assert_eq!(form.begin(), Err(DraftError::Missing("email")));
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.status().unwrap().message, "Please fill in your email");
    }

    #[test]
    fn submission_matches_what_begin_sends() {
        let mut form = RegistrationForm {
            draft: aditi(),
            ..Default::default()
        };
        let before = form.clone();

        let planned = form.submission();
        assert_eq!(form, before);

        let reduced = Rc::new(form.clone()).reduce(FormAction::Begin);
        assert_eq!(planned, form.begin());
        assert!(reduced.is_submitting());
        assert_eq!(form.submission(), Err(DraftError::InFlight));
    }

    #[test]
    fn rejected_submission_sends_nothing() {
        let form = RegistrationForm::default();
        assert_eq!(form.submission(), Err(DraftError::Missing("name")));

        let reduced = Rc::new(form).reduce(FormAction::Begin);
        assert_eq!(reduced.phase(), Phase::Idle);
        assert!(!reduced.status().unwrap().success);
    }

    #[test]
    fn resting_phases_accept_a_new_submission() {
        let mut form = RegistrationForm {
            draft: aditi(),
            ..Default::default()
        };
        run(&mut form, &FakeTransport::new(Behaviour::Deliver(Delivery::Opaque)));
        assert_eq!(form.phase(), Phase::Success);

        form.draft = aditi();
        assert_eq!(form.submission(), Ok(aditi()));
    }

    #[test]
    fn email_needs_both_halves() {
        let mut draft = aditi();
        for bad in ["ax.com", "@x.com", "a@"] {
            draft.email = bad.into();
            assert_eq!(draft.validate(), Err(DraftError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn message_is_optional() {
        assert_eq!(aditi().validate(), Ok(()));
    }

    #[test]
    fn opaque_responses_count_as_delivered() {
        assert_eq!(classify(true, 0, None).unwrap(), Delivery::Opaque);
    }

    #[test]
    fn visible_error_statuses_fail() {
        assert!(matches!(classify(false, 500, None), Err(SubmitError::Rejected(500))));
        assert!(matches!(classify(false, 404, None), Err(SubmitError::Rejected(404))));
    }

    #[test]
    fn script_error_reply_fails() {
        let reply: ScriptReply =
            serde_json::from_str(r#"{"result":"error","error":"Sheet locked"}"#).unwrap();
        match classify(false, 200, Some(&reply)) {
            Err(SubmitError::Script(msg)) => assert_eq!(msg, "Sheet locked"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn script_success_reply_confirms() {
        let reply: ScriptReply = serde_json::from_str(r#"{"result":"success","row":7}"#).unwrap();
        assert_eq!(reply.row, Some(7));
        assert_eq!(classify(false, 200, Some(&reply)).unwrap(), Delivery::Confirmed);
        assert_eq!(classify(false, 204, None).unwrap(), Delivery::Confirmed);
    }

    #[test]
    fn plan_labels_round_trip() {
        for plan in Plan::ALL {
            assert_eq!(Plan::from_label(plan.label()), Some(plan));
        }
        assert_eq!(Plan::from_label("Quartz"), None);
    }

    #[test]
    fn reducer_drives_the_form() {
        let form = Rc::new(RegistrationForm::default());
        let form = form.reduce(FormAction::Edit(Field::Name, "Priya".into()));
        let form = form.reduce(FormAction::Edit(Field::Email, "p@y.in".into()));
        let form = form.reduce(FormAction::Edit(Field::Phone, "9876543210".into()));
        let form = form.reduce(FormAction::SelectPlan(Plan::Diamond));
        let form = form.reduce(FormAction::Begin);
        assert!(form.is_submitting());
        assert_eq!(form.draft.plan, Plan::Diamond);

        let form = form.reduce(FormAction::Finish(Err(SubmitError::Rejected(502))));
        assert_eq!(form.phase(), Phase::Failure);
        assert_eq!(form.draft.name, "Priya");
    }
}
