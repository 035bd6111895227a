//! Recording and scripted collaborators for handler tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;

use super::upload::PreviewReader;
use super::{Clock, Notifier, RoomPage, RoomView};
use crate::error::ClientError;
use crate::net::api::RoomApi;
use crate::net::types::{TextureReply, TextureRequest, TextureResponse};

pub(crate) type TestPage = RoomPage<ScriptedApi, FakePreview, RecordingView, RecordingNotifier, FixedClock>;

pub(crate) const NOW_MILLIS: u64 = 1_700_000_000_123;

pub(crate) fn test_page(api: ScriptedApi, preview: FakePreview) -> TestPage {
    RoomPage::new(api, preview, RecordingView::default(), RecordingNotifier::default(), FixedClock(NOW_MILLIS))
}

// =============================================================
// View + notifier + clock
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ViewEvent {
    ResultImage(String),
    Loading(bool),
    PanelEnabled,
}

#[derive(Default)]
pub(crate) struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub(crate) fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub(crate) fn result_image(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::ResultImage(src) => Some(src.clone()),
            _ => None,
        })
    }

    pub(crate) fn loading_visible(&self) -> Option<bool> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Loading(visible) => Some(*visible),
            _ => None,
        })
    }

    pub(crate) fn panel_enabled(&self) -> bool {
        self.events.borrow().contains(&ViewEvent::PanelEnabled)
    }
}

impl RoomView for RecordingView {
    fn set_result_image(&self, src: &str) {
        self.events.borrow_mut().push(ViewEvent::ResultImage(src.to_owned()));
    }

    fn set_loading_visible(&self, visible: bool) {
        self.events.borrow_mut().push(ViewEvent::Loading(visible));
    }

    fn enable_texture_panel(&self) {
        self.events.borrow_mut().push(ViewEvent::PanelEnabled);
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

pub(crate) struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

// =============================================================
// Files + preview
// =============================================================

#[derive(Clone, Debug)]
pub(crate) struct FakeFile {
    pub name: String,
}

impl FakeFile {
    pub(crate) fn named(name: &str) -> Self {
        Self { name: name.to_owned() }
    }
}

pub(crate) fn data_url_for(file: &FakeFile) -> String {
    format!("data:image/jpeg;base64,{}", file.name)
}

pub(crate) enum FakePreview {
    Ready,
    Failing,
    Gated(RefCell<Option<oneshot::Receiver<()>>>),
}

impl FakePreview {
    pub(crate) fn gated() -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (Self::Gated(RefCell::new(Some(rx))), tx)
    }
}

impl PreviewReader for FakePreview {
    type File = FakeFile;

    async fn read_data_url(&self, file: &FakeFile) -> Result<String, ClientError> {
        match self {
            Self::Ready => Ok(data_url_for(file)),
            Self::Failing => Err(ClientError::Dom("file read failed".to_owned())),
            Self::Gated(gate) => {
                let rx = gate.borrow_mut().take();
                if let Some(rx) = rx {
                    rx.await.map_err(|_| ClientError::Dom("preview gate dropped".to_owned()))?;
                }
                Ok(data_url_for(file))
            }
        }
    }
}

// =============================================================
// Scripted API
// =============================================================

/// One scripted reply: available immediately, or once the paired sender fires.
pub(crate) enum Scripted<T> {
    Ready(T),
    Gated(oneshot::Receiver<T>),
}

impl<T> Scripted<T> {
    pub(crate) fn gated() -> (Self, oneshot::Sender<T>) {
        let (tx, rx) = oneshot::channel();
        (Self::Gated(rx), tx)
    }

    async fn resolve(self) -> Result<T, ClientError> {
        match self {
            Self::Ready(value) => Ok(value),
            Self::Gated(rx) => rx.await.map_err(|_| ClientError::Transport("gate dropped".to_owned())),
        }
    }
}

#[derive(Default)]
pub(crate) struct ScriptedApi {
    uploads: RefCell<VecDeque<Scripted<Result<(), ClientError>>>>,
    textures: RefCell<VecDeque<Scripted<Result<TextureReply, ClientError>>>>,
    uploaded: RefCell<Vec<String>>,
    texture_requests: RefCell<Vec<TextureRequest>>,
}

impl ScriptedApi {
    pub(crate) fn with_upload(self, reply: Scripted<Result<(), ClientError>>) -> Self {
        self.uploads.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn with_texture(self, reply: Scripted<Result<TextureReply, ClientError>>) -> Self {
        self.textures.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn uploaded(&self) -> Vec<String> {
        self.uploaded.borrow().clone()
    }

    pub(crate) fn texture_requests(&self) -> Vec<TextureRequest> {
        self.texture_requests.borrow().clone()
    }
}

impl RoomApi for ScriptedApi {
    type File = FakeFile;

    async fn upload_room_image(&self, file: &FakeFile) -> Result<(), ClientError> {
        self.uploaded.borrow_mut().push(file.name.clone());
        let next = self.uploads.borrow_mut().pop_front();
        match next {
            Some(reply) => reply.resolve().await?,
            None => Err(ClientError::Transport("no scripted upload reply".to_owned())),
        }
    }

    async fn apply_texture(&self, request: &TextureRequest) -> Result<TextureReply, ClientError> {
        self.texture_requests.borrow_mut().push(request.clone());
        let next = self.textures.borrow_mut().pop_front();
        match next {
            Some(reply) => reply.resolve().await?,
            None => Err(ClientError::Transport("no scripted texture reply".to_owned())),
        }
    }
}

pub(crate) fn texture_reply(status: u16, json: &serde_json::Value) -> Result<TextureReply, ClientError> {
    serde_json::from_value::<TextureResponse>(json.clone())
        .map(|body| TextureReply { status, body })
        .map_err(|e| ClientError::Decode(e.to_string()))
}
