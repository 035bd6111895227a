//! `FileReader` based preview decoding.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{File, FileReader, ProgressEvent};

use crate::error::ClientError;
use crate::handlers::upload::PreviewReader;

type ReadResult = Result<String, ClientError>;
type PendingSender = Rc<RefCell<Option<oneshot::Sender<ReadResult>>>>;

/// Reads files with `FileReader.readAsDataURL`.
pub struct FileReaderPreview;

fn settle(pending: &PendingSender, result: ReadResult) {
    let Some(tx) = pending.borrow_mut().take() else {
        return;
    };
    if tx.send(result).is_err() {
        log::debug!("preview reader finished after its caller went away");
    }
}

impl PreviewReader for FileReaderPreview {
    type File = File;

    async fn read_data_url(&self, file: &File) -> Result<String, ClientError> {
        let reader = FileReader::new().map_err(ClientError::from_js)?;
        let (tx, rx) = oneshot::channel::<ReadResult>();
        let pending: PendingSender = Rc::new(RefCell::new(Some(tx)));

        let onload = {
            let reader = reader.clone();
            let pending = Rc::clone(&pending);
            Closure::<dyn FnMut(ProgressEvent)>::new(move |_event: ProgressEvent| {
                let result = reader.result().map_err(ClientError::from_js).and_then(|value| {
                    value
                        .as_string()
                        .ok_or_else(|| ClientError::Decode("file reader result is not a string".to_owned()))
                });
                settle(&pending, result);
            })
        };
        let onerror = {
            let pending = Rc::clone(&pending);
            Closure::<dyn FnMut(ProgressEvent)>::new(move |_event: ProgressEvent| {
                settle(&pending, Err(ClientError::Dom("file read failed".to_owned())));
            })
        };

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        reader.read_as_data_url(file).map_err(ClientError::from_js)?;

        let result = rx
            .await
            .map_err(|_| ClientError::Dom("file reader dropped".to_owned()));
        reader.set_onload(None);
        reader.set_onerror(None);
        result?
    }
}
