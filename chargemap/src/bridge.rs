//! Conversion of callback-based native calls into single-shot futures.

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;

use crate::error::MapError;
use crate::platform::NativeCallback;

/// Issues a native call and returns a future resolving with its result.
///
/// `call` is invoked immediately with the completion callback. The returned future resolves
/// exactly once:
/// * with the value or the native error passed to the callback,
/// * with [`MapError::CallbackDropped`] if the callback is dropped without being invoked,
/// * with [`MapError::Timeout`] if the callback is not invoked within `timeout`.
///
/// The timeout starts when the future is first polled. The future must be polled inside a Tokio
/// runtime with the time driver enabled.
pub fn bridge<T, F>(timeout: Duration, call: F) -> impl Future<Output = Result<T, MapError>>
where
    T: Send + 'static,
    F: FnOnce(NativeCallback<T>),
{
    let (sender, receiver) = oneshot::channel();
    call(Box::new(move |result| {
        if sender.send(result).is_err() {
            log::trace!("Bridged call completed after its result was abandoned");
        }
    }));

    async move {
        match tokio::time::timeout(timeout, receiver).await {
            Ok(Ok(result)) => result.map_err(MapError::from),
            Ok(Err(_)) => Err(MapError::CallbackDropped),
            Err(_) => {
                log::warn!("Native map call did not complete in {timeout:?}");
                Err(MapError::Timeout(timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use parking_lot::Mutex;

    use super::*;
    use crate::error::NativeMapError;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn resolves_with_immediate_value() {
        let result = bridge(TIMEOUT, |cb: NativeCallback<f64>| cb(Ok(12.0))).await;
        assert_matches!(result, Ok(v) if v == 12.0);
    }

    #[tokio::test]
    async fn resolves_with_deferred_value() {
        let pending: Arc<Mutex<Option<NativeCallback<u32>>>> = Arc::default();
        let slot = pending.clone();
        let future = bridge(TIMEOUT, move |cb| *slot.lock() = Some(cb));

        let callback = pending.lock().take().unwrap();
        callback(Ok(7));
        assert_matches!(future.await, Ok(7));
    }

    #[tokio::test]
    async fn propagates_native_failure() {
        let result = bridge(TIMEOUT, |cb: NativeCallback<f64>| {
            cb(Err(NativeMapError::NoData))
        })
        .await;
        assert_matches!(result, Err(MapError::Native(NativeMapError::NoData)));
    }

    #[tokio::test]
    async fn dropped_callback_fails() {
        let result = bridge(TIMEOUT, |cb: NativeCallback<f64>| drop(cb)).await;
        assert_matches!(result, Err(MapError::CallbackDropped));
    }

    #[tokio::test(start_paused = true)]
    async fn silent_callback_times_out() {
        let pending: Arc<Mutex<Option<NativeCallback<f64>>>> = Arc::default();
        let slot = pending.clone();
        let result = bridge(TIMEOUT, move |cb| *slot.lock() = Some(cb)).await;

        assert_matches!(result, Err(MapError::Timeout(t)) if t == TIMEOUT);

        // A late completion is ignored.
        let callback = pending.lock().take().unwrap();
        callback(Ok(1.0));
    }
}
