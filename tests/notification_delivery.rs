use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use voip_push_bridge::notifications::{
    BackgroundNotifier, DeliveryOutcome, MessagePayload, NotificationDisplay, PermissionPrompt,
    PermissionState, MESSAGE_BODY_KEY,
};

struct ScriptedPrompt {
    current: Mutex<PermissionState>,
    on_request: PermissionState,
    requests: AtomicUsize,
}

impl ScriptedPrompt {
    fn new(current: PermissionState, on_request: PermissionState) -> Self {
        Self {
            current: Mutex::new(current),
            on_request,
            requests: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PermissionPrompt for ScriptedPrompt {
    fn current(&self) -> PermissionState {
        *self.current.lock().unwrap()
    }

    async fn request(&self) -> PermissionState {
        self.requests.fetch_add(1, Ordering::SeqCst);
        *self.current.lock().unwrap() = self.on_request;
        self.on_request
    }
}

#[derive(Default)]
struct RecordingDisplay {
    shown: Mutex<Vec<(String, Option<String>)>>,
}

impl NotificationDisplay for RecordingDisplay {
    fn show(&self, title: &str, body: Option<&str>) {
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), body.map(str::to_string)));
    }
}

fn chat_message(body: &str) -> MessagePayload {
    MessagePayload {
        data: HashMap::from([(MESSAGE_BODY_KEY.to_string(), body.to_string())]),
        from: Some("chat".to_string()),
        ..Default::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn grant_on_first_prompt_sticks_for_later_deliveries() {
    let prompt = Arc::new(ScriptedPrompt::new(
        PermissionState::Default,
        PermissionState::Granted,
    ));
    let display = Arc::new(RecordingDisplay::default());
    let notifier = BackgroundNotifier::new("Chat sample", prompt.clone(), display.clone());

    let first = notifier.deliver(&chat_message("first")).await;
    let second = notifier.deliver(&chat_message("second")).await;

    assert_eq!(first, DeliveryOutcome::Shown);
    assert_eq!(second, DeliveryOutcome::Shown);
    // The standing grant means only the first delivery prompted.
    assert_eq!(prompt.requests.load(Ordering::SeqCst), 1);

    let shown = display.shown.lock().unwrap();
    assert_eq!(
        shown.as_slice(),
        &[
            ("Chat sample".to_string(), Some("first".to_string())),
            ("Chat sample".to_string(), Some("second".to_string())),
        ]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn refusal_on_prompt_suppresses_and_never_asks_again() {
    let prompt = Arc::new(ScriptedPrompt::new(
        PermissionState::Default,
        PermissionState::Denied,
    ));
    let display = Arc::new(RecordingDisplay::default());
    let notifier = BackgroundNotifier::new("Chat sample", prompt.clone(), display.clone());

    let first = notifier.deliver(&chat_message("first")).await;
    let second = notifier.deliver(&chat_message("second")).await;

    assert_eq!(first, DeliveryOutcome::Suppressed(PermissionState::Denied));
    assert_eq!(second, DeliveryOutcome::Suppressed(PermissionState::Denied));
    assert_eq!(prompt.requests.load(Ordering::SeqCst), 1);
    assert!(display.shown.lock().unwrap().is_empty());
}
