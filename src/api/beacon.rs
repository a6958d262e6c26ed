use std::{
    sync::mpsc,
    thread,
    time::Duration,
};

use reqwest::{
    blocking::{
        Client,
        Response,
    },
    Url,
};
use serde::Serialize;
use tracing::debug;

use crate::core::AppError;

const BEACON_TIMEOUT: Duration = Duration::from_secs(3);

/// A detached delivery that keeps running while the app tears down.
///
/// Dropping the handle does not cancel the request; `wait` only bounds how long shutdown
/// is willing to linger for it.
pub struct Beacon {
    done: mpsc::Receiver<()>,
}

impl Beacon {
    /// Returns `true` if the request finished (successfully or not) within `grace`.
    pub fn wait(self, grace: Duration) -> bool {
        self.done.recv_timeout(grace).is_ok()
    }
}

fn beacon_client() -> Result<Client, AppError> {
    Client::builder()
        .timeout(BEACON_TIMEOUT)
        .build()
        .map_err(|e| AppError::Custom(format!("Beacon client build failed: {e}")))
}

/// Spawns the beacon thread. Only fails if the OS refuses to start a thread.
pub(crate) fn send_beacon<T>(url: Url, payload: T) -> Result<Beacon, AppError>
where
    T: Serialize + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();

    thread::Builder::new().name("visit-beacon".to_string()).spawn(move || {
        let result = beacon_client().and_then(|client| {
            let resp = client.post(url.clone()).json(&payload).send()?;
            ensure_success(&resp)
        });

        match result {
            Ok(()) => debug!("[Beacon] Delivered to {}", url),
            Err(e) => debug!("[Beacon] Delivery to {} failed: {}", url, e),
        }

        let _ = sender.send(());
    })?;

    Ok(Beacon { done: receiver })
}

fn ensure_success(resp: &Response) -> Result<(), AppError> {
    if !resp.status().is_success() {
        return Err(AppError::Custom(format!(
            "HTTP error {} from {}",
            resp.status(),
            resp.url()
        )));
    }
    Ok(())
}
