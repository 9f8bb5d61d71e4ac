use crate::ai::{
    GenerateError, GenerationBackend, OpenRouterClient, TextGenerator, DEFAULT_TIMEOUT_SECS,
};
use crate::logger;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct GenRequest {
    pub id: u64,
    pub prompt: String,
}

#[derive(Debug)]
pub struct GenResponse {
    pub id: u64,
    pub result: Result<String, String>,
}

/// Worker thread that owns a Tokio runtime and drives the OpenRouter client.
/// One request at a time; the client is rebuilt per request so a missing or
/// rotated API key surfaces as a per-request error instead of killing the
/// thread.
pub fn spawn_generation_worker(
    resp_tx: Sender<GenResponse>,
    req_rx: Receiver<GenRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("tango-trainer::generation".to_string())
        .spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("failed to start generation runtime");
            loop {
                match req_rx.recv() {
                    Ok(GenRequest { id, prompt }) => {
                        logger::log(&format!("worker received request {}", id));
                        let client = match OpenRouterClient::new() {
                            Ok(client) => client,
                            Err(e) => {
                                let _ = resp_tx.send(GenResponse {
                                    id,
                                    result: Err(format!("failed to create client: {}", e)),
                                });
                                continue;
                            }
                        };

                        let result = rt.block_on(generate_with_timeout(
                            &client,
                            &prompt,
                            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                        ));

                        if result.is_err() {
                            logger::log(&format!("worker request {} failed", id));
                        }
                        let _ = resp_tx.send(GenResponse { id, result });
                    }
                    Err(_) => {
                        logger::log("worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("failed to spawn generation worker thread")
}

async fn generate_with_timeout(
    backend: &dyn GenerationBackend,
    prompt: &str,
    timeout: Duration,
) -> Result<String, String> {
    match tokio::time::timeout(timeout, backend.generate(prompt, None)).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(format!("generation failed: {}", e)),
        Err(_) => Err(format!("generation timed out after {}s", timeout.as_secs())),
    }
}

/// Synchronous front of the worker. Sends a request, then blocks on the
/// response channel with a deadline; responses whose id does not match the
/// request in flight are stale survivors of an earlier timeout and are
/// dropped.
pub struct WorkerGenerator {
    req_tx: Sender<GenRequest>,
    resp_rx: Receiver<GenResponse>,
    next_id: Cell<u64>,
    timeout: Duration,
}

impl WorkerGenerator {
    /// Spawn the worker thread and return its front.
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = unbounded();
        let (resp_tx, resp_rx) = unbounded();
        spawn_generation_worker(resp_tx, req_rx);
        Self::with_channels(req_tx, resp_rx, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    fn with_channels(
        req_tx: Sender<GenRequest>,
        resp_rx: Receiver<GenResponse>,
        timeout: Duration,
    ) -> Self {
        Self {
            req_tx,
            resp_rx,
            next_id: Cell::new(0),
            timeout,
        }
    }
}

impl TextGenerator for WorkerGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        while self.resp_rx.try_recv().is_ok() {}

        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        self.req_tx
            .send(GenRequest {
                id,
                prompt: prompt.to_string(),
            })
            .map_err(|_| GenerateError::WorkerGone)?;

        let deadline = Instant::now() + self.timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.resp_rx.recv_timeout(remaining) {
                Ok(response) if response.id == id => {
                    return response.result.map_err(GenerateError::Unavailable);
                }
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => {
                    return Err(GenerateError::Timeout(self.timeout.as_secs()));
                }
                Err(RecvTimeoutError::Disconnected) => return Err(GenerateError::WorkerGone),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::ai::ModelConfig;

    struct EchoBackend;

    #[async_trait]
    impl GenerationBackend for EchoBackend {
        async fn generate(
            &self,
            prompt: &str,
            _config: Option<&ModelConfig>,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok(format!("echo: {}", prompt))
        }
    }

    struct SlowBackend;

    #[async_trait]
    impl GenerationBackend for SlowBackend {
        async fn generate(
            &self,
            _prompt: &str,
            _config: Option<&ModelConfig>,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok("too late".to_string())
        }
    }

    #[tokio::test]
    async fn test_backend_call_passes_through() {
        let result =
            generate_with_timeout(&EchoBackend, "こんにちは", Duration::from_secs(1)).await;
        assert_eq!(result.unwrap(), "echo: こんにちは");
    }

    #[tokio::test]
    async fn test_backend_timeout_becomes_error() {
        let result =
            generate_with_timeout(&SlowBackend, "遅い", Duration::from_millis(10)).await;
        let err = result.unwrap_err();
        assert!(err.contains("timed out"));
    }

    #[test]
    fn test_worker_generator_round_trip() {
        let (req_tx, req_rx) = unbounded::<GenRequest>();
        let (resp_tx, resp_rx) = unbounded::<GenResponse>();

        thread::spawn(move || {
            let request = req_rx.recv().unwrap();
            resp_tx
                .send(GenResponse {
                    id: request.id,
                    result: Ok(format!("reply to {}", request.prompt)),
                })
                .unwrap();
        });

        let generator = WorkerGenerator::with_channels(req_tx, resp_rx, Duration::from_secs(1));
        assert_eq!(generator.generate("質問").unwrap(), "reply to 質問");
    }

    #[test]
    fn test_worker_generator_times_out() {
        let (req_tx, req_rx) = unbounded::<GenRequest>();
        let (_resp_tx, resp_rx) = unbounded::<GenResponse>();

        let generator =
            WorkerGenerator::with_channels(req_tx, resp_rx, Duration::from_millis(20));
        let result = generator.generate("返事がない");
        assert_eq!(result, Err(GenerateError::Timeout(0)));

        // The request still reached the worker side.
        assert!(req_rx.try_recv().is_ok());
    }

    #[test]
    fn test_worker_generator_drains_queued_stale_response() {
        let (req_tx, req_rx) = unbounded::<GenRequest>();
        let (resp_tx, resp_rx) = unbounded::<GenResponse>();

        // A response for an earlier, timed-out request is already queued.
        resp_tx
            .send(GenResponse {
                id: 0,
                result: Ok("stale".to_string()),
            })
            .unwrap();

        let generator = WorkerGenerator::with_channels(req_tx, resp_rx, Duration::from_secs(1));

        thread::spawn(move || {
            let request = req_rx.recv().unwrap();
            resp_tx
                .send(GenResponse {
                    id: request.id,
                    result: Ok("fresh".to_string()),
                })
                .unwrap();
        });

        assert_eq!(generator.generate("質問").unwrap(), "fresh");
    }

    #[test]
    fn test_worker_generator_skips_mismatched_id_while_waiting() {
        let (req_tx, req_rx) = unbounded::<GenRequest>();
        let (resp_tx, resp_rx) = unbounded::<GenResponse>();

        thread::spawn(move || {
            let request = req_rx.recv().unwrap();
            resp_tx
                .send(GenResponse {
                    id: request.id + 999,
                    result: Ok("stale".to_string()),
                })
                .unwrap();
            resp_tx
                .send(GenResponse {
                    id: request.id,
                    result: Ok("fresh".to_string()),
                })
                .unwrap();
        });

        let generator = WorkerGenerator::with_channels(req_tx, resp_rx, Duration::from_secs(1));
        assert_eq!(generator.generate("質問").unwrap(), "fresh");
    }

    #[test]
    fn test_worker_generator_reports_dead_worker() {
        let (req_tx, req_rx) = unbounded::<GenRequest>();
        let (_resp_tx, resp_rx) = unbounded::<GenResponse>();
        drop(req_rx);

        let generator = WorkerGenerator::with_channels(req_tx, resp_rx, Duration::from_secs(1));
        assert_eq!(generator.generate("質問"), Err(GenerateError::WorkerGone));
    }
}
